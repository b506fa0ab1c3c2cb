use fairway_core::Round;

use crate::config::StablefordRules;
use crate::handicap::player_allocation;

/// Stableford points for one hole given gross strokes, handicap strokes
/// received on it, and its par. Net par scores `par_points`; each stroke
/// better adds one, each stroke worse removes one, bounded by the rules.
pub fn hole_points(gross: u32, received: u32, par: u8, rules: &StablefordRules) -> i32 {
    let net_to_par = i64::from(gross) - i64::from(received) - i64::from(par);
    let points = (i64::from(rules.par_points) - net_to_par)
        .max(i64::from(rules.min_points))
        .min(i64::from(rules.max_points));
    i32::try_from(points).unwrap_or(rules.max_points)
}

/// Stableford total for a player's round with the standard rules.
pub fn stableford_points(round: &Round, player_id: &str) -> i32 {
    stableford_points_with(round, player_id, &StablefordRules::default())
}

/// Stableford total under explicit rules.
///
/// A manual override on the record is returned untouched. Unplayed holes
/// score nothing; a player without a record scores 0.
pub fn stableford_points_with(round: &Round, player_id: &str, rules: &StablefordRules) -> i32 {
    let Some(score) = round.player_score(player_id) else {
        return 0;
    };
    if let Some(manual) = score.stableford_manual {
        return manual;
    }

    let allocation = player_allocation(round, score);
    score
        .played_holes()
        .filter_map(|(i, gross)| {
            let Some(par) = round.par_at(i) else {
                tracing::debug!(player_id, hole = i + 1, "No hole layout for score slot");
                return None;
            };
            let received = allocation.get(i).copied().unwrap_or(0);
            Some(hole_points(gross, received, par, rules))
        })
        .sum()
}
