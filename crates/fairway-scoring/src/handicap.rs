use fairway_core::{HoleInfo, PlayerScore, Round, validate_handicap_indices};

use crate::error::ScoringError;

/// Spread `strokes` handicap strokes over the holes of a layout.
///
/// Every hole receives `strokes / holes`; the remaining strokes go one each
/// to the hardest holes (lowest stroke index first). Holes without a stroke
/// index rank after all indexed holes, in hole order. The result follows the
/// layout's order and sums to `strokes` whenever the layout is non-empty.
///
/// Malformed stroke indices are logged and allocated as given; use
/// [`try_allocate_handicap_strokes`] to reject them instead.
pub fn allocate_handicap_strokes(hole_info: &[HoleInfo], strokes: u32) -> Vec<u32> {
    let holes = hole_info.len();
    if holes == 0 {
        return Vec::new();
    }
    if let Err(e) = validate_handicap_indices(hole_info) {
        tracing::warn!(error = %e, "Allocating handicap strokes over malformed stroke indices");
    }

    let base = strokes / holes as u32;
    let remainder = (strokes % holes as u32) as usize;
    let mut allocation = vec![base; holes];

    let mut by_difficulty: Vec<usize> = (0..holes).collect();
    by_difficulty.sort_by_key(|&i| hole_info[i].handicap.map_or(u16::MAX, u16::from));
    for &i in by_difficulty.iter().take(remainder) {
        allocation[i] += 1;
    }
    allocation
}

/// Like [`allocate_handicap_strokes`], but refuses layouts whose stroke
/// indices are not distinct values in `1..=holes`.
pub fn try_allocate_handicap_strokes(
    hole_info: &[HoleInfo],
    strokes: u32,
) -> Result<Vec<u32>, ScoringError> {
    validate_handicap_indices(hole_info)?;
    Ok(allocate_handicap_strokes(hole_info, strokes))
}

/// Per-hole allocation for a player's record in a round.
pub fn player_allocation(round: &Round, score: &PlayerScore) -> Vec<u32> {
    allocate_handicap_strokes(&round.hole_info, score.handicap_strokes.unwrap_or(0))
}

/// Net strokes per hole slot: gross minus allocated strokes, `None` where
/// unplayed. Returns `None` if the player has no record.
pub fn net_scores(round: &Round, player_id: &str) -> Option<Vec<Option<i32>>> {
    let score = round.player_score(player_id)?;
    let allocation = player_allocation(round, score);

    Some(
        score
            .scores
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                let gross = i32::from(slot.as_ref()?.get());
                let received = allocation.get(i).copied().unwrap_or(0);
                Some(gross.saturating_sub_unsigned(received))
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::test_helpers::{make_hole_info, make_round, player_score};
    use fairway_core::{ScoreRecord, ValidationError};

    fn layout_with_indices(indices: &[u8]) -> Vec<HoleInfo> {
        let mut holes = make_hole_info(&vec![4; indices.len()]);
        for (hole, &idx) in holes.iter_mut().zip(indices) {
            hole.handicap = Some(idx);
        }
        holes
    }

    #[test]
    fn zero_strokes_allocates_nothing() {
        let holes = make_hole_info(&[4; 18]);
        assert_eq!(allocate_handicap_strokes(&holes, 0), vec![0; 18]);
    }

    #[test]
    fn strokes_go_to_hardest_holes() {
        let holes = layout_with_indices(&[3, 1, 4, 2]);
        // Two strokes: holes with index 1 and 2 (positions 1 and 3)
        assert_eq!(allocate_handicap_strokes(&holes, 2), vec![0, 1, 0, 1]);
    }

    #[test]
    fn wraps_past_one_lap() {
        let holes = layout_with_indices(&[1, 2, 3, 4]);
        // 6 over 4 holes: base 1 everywhere, 2 extra to the two hardest
        assert_eq!(allocate_handicap_strokes(&holes, 6), vec![2, 2, 1, 1]);
    }

    #[test]
    fn several_laps() {
        let holes = layout_with_indices(&[2, 1]);
        assert_eq!(allocate_handicap_strokes(&holes, 5), vec![2, 3]);
    }

    #[test]
    fn empty_layout_allocates_nothing() {
        assert!(allocate_handicap_strokes(&[], 10).is_empty());
    }

    #[test]
    fn unindexed_holes_rank_last() {
        let mut holes = make_hole_info(&[4, 4, 4]);
        holes[0].handicap = None;
        holes[1].handicap = Some(2);
        holes[2].handicap = Some(1);
        assert_eq!(allocate_handicap_strokes(&holes, 2), vec![0, 1, 1]);
    }

    #[test]
    fn try_allocate_rejects_duplicates() {
        let holes = layout_with_indices(&[1, 1, 2]);
        assert_eq!(
            try_allocate_handicap_strokes(&holes, 3),
            Err(ScoringError::Validation(ValidationError::DuplicateHandicapIndex {
                handicap: 1,
                first_hole: 1,
                second_hole: 2,
            }))
        );
        // The infallible path still allocates every stroke
        assert_eq!(allocate_handicap_strokes(&holes, 3).iter().sum::<u32>(), 3);
    }

    #[test]
    fn net_scores_subtract_allocation() {
        let mut score = player_score("p1", &[5, 0, 4, 6]);
        score.handicap_strokes = Some(2);
        let round = make_round("r1", &[4; 4], vec![ScoreRecord::Player(score)]);

        assert_eq!(
            net_scores(&round, "p1"),
            Some(vec![Some(4), None, Some(4), Some(6)])
        );
        assert_eq!(net_scores(&round, "nobody"), None);
    }

    #[test]
    fn net_scores_saturate_on_huge_handicap() {
        let mut score = player_score("p1", &[4]);
        score.handicap_strokes = Some(u32::MAX);
        let round = make_round("r1", &[4], vec![ScoreRecord::Player(score)]);
        assert_eq!(net_scores(&round, "p1"), Some(vec![Some(i32::MIN)]));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn shuffled_layout(holes: usize, seed: u64) -> Vec<HoleInfo> {
            // Deterministic permutation of 1..=holes
            let mut indices: Vec<u8> = (1..=holes as u8).collect();
            let mut state = seed;
            for i in (1..indices.len()).rev() {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                let j = (state >> 33) as usize % (i + 1);
                indices.swap(i, j);
            }
            layout_with_indices(&indices)
        }

        proptest! {
            #[test]
            fn allocation_sums_exactly(
                holes in 1usize..=18,
                strokes in 0u32..=72,
                seed in any::<u64>()
            ) {
                let layout = shuffled_layout(holes, seed);
                let allocation = allocate_handicap_strokes(&layout, strokes);
                prop_assert_eq!(allocation.len(), holes);
                prop_assert_eq!(allocation.iter().sum::<u32>(), strokes);
            }

            #[test]
            fn single_lap_goes_to_lowest_indices(
                holes in 1usize..=18,
                strokes_frac in 0.0f64..=1.0,
                seed in any::<u64>()
            ) {
                let strokes = (holes as f64 * strokes_frac).floor() as u32;
                let layout = shuffled_layout(holes, seed);
                let allocation = allocate_handicap_strokes(&layout, strokes);
                for (hole, &received) in layout.iter().zip(&allocation) {
                    let expected = u32::from(hole.handicap.unwrap() <= strokes as u8);
                    prop_assert_eq!(received, expected);
                }
            }

            #[test]
            fn holes_differ_by_at_most_one(
                holes in 1usize..=18,
                strokes in 0u32..=60,
                seed in any::<u64>()
            ) {
                let allocation = allocate_handicap_strokes(&shuffled_layout(holes, seed), strokes);
                let max = allocation.iter().max().copied().unwrap_or(0);
                let min = allocation.iter().min().copied().unwrap_or(0);
                prop_assert!(max - min <= 1);
            }
        }
    }
}
