use serde::{Deserialize, Serialize};

use fairway_core::{PlayerId, Round, RoundId};

use crate::stats::detailed_player_stats;

/// A player's statistics folded over many stroke rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatePlayerStats {
    pub player_id: PlayerId,
    pub rounds_played: u32,
    pub total_eagles_or_better: u32,
    pub total_birdies: u32,
    pub total_pars: u32,
    pub total_bogeys: u32,
    pub total_double_bogeys_or_worse: u32,
    /// Lowest gross total; 0 when no round qualifies.
    pub best_round_score: u32,
    pub best_round_id: Option<RoundId>,
    pub average_score_per_round: f64,
}

impl AggregatePlayerStats {
    pub fn empty(player_id: &str) -> Self {
        Self {
            player_id: player_id.to_string(),
            rounds_played: 0,
            total_eagles_or_better: 0,
            total_birdies: 0,
            total_pars: 0,
            total_bogeys: 0,
            total_double_bogeys_or_worse: 0,
            best_round_score: 0,
            best_round_id: None,
            average_score_per_round: 0.0,
        }
    }
}

/// Fold a player's detailed statistics across rounds.
///
/// Match play rounds are skipped entirely, as are rounds the player has no
/// record in. The average divides by the rounds actually counted.
pub fn aggregate_player_stats<'a>(
    rounds: impl IntoIterator<Item = &'a Round>,
    player_id: &str,
) -> AggregatePlayerStats {
    let mut agg = AggregatePlayerStats::empty(player_id);
    let mut total_strokes: u64 = 0;
    let mut best: Option<(u32, &RoundId)> = None;

    for round in rounds {
        if round.counts_as_match_play() {
            tracing::debug!(round_id = %round.id, "Skipping match play round in aggregate");
            continue;
        }
        let (Some(record), Some(stats)) = (
            round.player_score(player_id),
            detailed_player_stats(round, player_id),
        ) else {
            continue;
        };

        agg.rounds_played += 1;
        agg.total_eagles_or_better += stats.eagle_or_better;
        agg.total_birdies += stats.birdie_count;
        agg.total_pars += stats.par_count;
        agg.total_bogeys += stats.bogey_count;
        agg.total_double_bogeys_or_worse += stats.double_bogey_or_worse;
        total_strokes += u64::from(record.total_score);

        if best.is_none_or(|(score, _)| record.total_score < score) {
            best = Some((record.total_score, &round.id));
        }
    }

    if let Some((score, round_id)) = best {
        agg.best_round_score = score;
        agg.best_round_id = Some(round_id.clone());
    }
    agg.average_score_per_round = if agg.rounds_played > 0 {
        total_strokes as f64 / f64::from(agg.rounds_played)
    } else {
        0.0
    };
    agg
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::test_helpers::{make_round, player_record};

    #[test]
    fn folds_stroke_rounds() {
        let r1 = make_round("r1", &[4, 4, 4, 4], vec![player_record("p1", &[3, 3, 4, 5])]);
        let r2 = make_round("r2", &[4, 4, 4, 4], vec![player_record("p1", &[4, 4, 6, 2])]);
        let agg = aggregate_player_stats([&r1, &r2], "p1");

        assert_eq!(agg.rounds_played, 2);
        assert_eq!(agg.total_birdies, 2);
        assert_eq!(agg.total_pars, 3);
        assert_eq!(agg.total_bogeys, 1);
        assert_eq!(agg.total_double_bogeys_or_worse, 1);
        assert_eq!(agg.total_eagles_or_better, 1);
        assert_eq!(agg.best_round_score, 15);
        assert_eq!(agg.best_round_id.as_deref(), Some("r1"));
        assert!((agg.average_score_per_round - 15.5).abs() < f64::EPSILON);
    }

    #[test]
    fn match_play_rounds_contribute_nothing() {
        let stroke = make_round("r1", &[4, 4], vec![player_record("p1", &[4, 4])]);
        let mut matched = make_round("r2", &[4, 4], vec![player_record("p1", &[2, 2])]);
        matched.is_match_play = true;

        let agg = aggregate_player_stats([&stroke, &matched], "p1");
        assert_eq!(agg.rounds_played, 1);
        assert_eq!(agg.total_eagles_or_better, 0);
        assert_eq!(agg.best_round_score, 8);
        assert!((agg.average_score_per_round - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn average_ignores_rounds_without_record() {
        let played = make_round("r1", &[4], vec![player_record("p1", &[5])]);
        let absent = make_round("r2", &[4], vec![player_record("p2", &[3])]);
        let agg = aggregate_player_stats([&played, &absent], "p1");

        assert_eq!(agg.rounds_played, 1);
        assert!((agg.average_score_per_round - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_qualifying_rounds_is_all_zero() {
        let mut matched = make_round("r1", &[4], vec![player_record("p1", &[4])]);
        matched.is_match_play = true;
        let agg = aggregate_player_stats([&matched], "p1");

        assert_eq!(agg, AggregatePlayerStats::empty("p1"));
        assert_eq!(agg.best_round_score, 0);
        assert!(agg.average_score_per_round.is_finite());
    }

    #[test]
    fn best_round_keeps_first_on_tie() {
        let r1 = make_round("r1", &[4], vec![player_record("p1", &[4])]);
        let r2 = make_round("r2", &[4], vec![player_record("p1", &[4])]);
        let agg = aggregate_player_stats(&[r1, r2], "p1");
        assert_eq!(agg.best_round_id.as_deref(), Some("r1"));
    }
}
