use serde::{Deserialize, Serialize};

use fairway_core::{PlayerId, PlayerScore, Round};

/// Lowest score on a hole and who made it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleWinner {
    pub hole_number: u8,
    pub winner_ids: Vec<PlayerId>,
    pub score: u32,
    pub to_par: i32,
    pub is_tied: bool,
}

/// Winner(s) of every hole at least one considered player has played.
///
/// `player_ids` restricts the field; `None` considers every player record
/// in the round. Ties at the lowest score list all tied players in record
/// order.
pub fn hole_winners(round: &Round, player_ids: Option<&[PlayerId]>) -> Vec<HoleWinner> {
    let field: Vec<&PlayerScore> = match player_ids {
        Some(ids) => ids.iter().filter_map(|id| round.player_score(id)).collect(),
        None => round.player_records().collect(),
    };

    round
        .hole_info
        .iter()
        .enumerate()
        .filter_map(|(i, hole)| {
            let played: Vec<(&PlayerId, u32)> = field
                .iter()
                .filter_map(|p| p.strokes_at(i).map(|s| (&p.player_id, s)))
                .collect();
            let score = played.iter().map(|&(_, s)| s).min()?;
            let winner_ids: Vec<PlayerId> = played
                .iter()
                .filter(|&&(_, s)| s == score)
                .map(|&(id, _)| id.clone())
                .collect();

            Some(HoleWinner {
                hole_number: hole.number,
                is_tied: winner_ids.len() > 1,
                winner_ids,
                score,
                to_par: score as i32 - i32::from(hole.par),
            })
        })
        .collect()
}
