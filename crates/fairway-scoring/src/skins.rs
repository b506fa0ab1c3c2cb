use serde::{Deserialize, Serialize};

use fairway_core::{PlayerId, PlayerScore, Round};

use crate::config::SkinsRules;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum SkinOutcome {
    /// Sole low score; takes this hole's skin plus any carried.
    Won { player_id: PlayerId, skins: u32 },
    /// Tied low score; `carried` skins move on to the next contested hole.
    Carried { carried: u32 },
    /// Tied low score with carry-over off.
    Void,
    /// Not every player has a score here yet.
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleSkin {
    pub hole_number: u8,
    pub low_score: Option<u32>,
    pub outcome: SkinOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSkins {
    pub player_id: PlayerId,
    pub skins: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinsResult {
    pub holes: Vec<HoleSkin>,
    /// One entry per player in the field, in field order.
    pub totals: Vec<PlayerSkins>,
    /// Skins still carried after the last contested hole.
    pub unclaimed: u32,
}

pub fn skins(round: &Round, player_ids: Option<&[PlayerId]>) -> SkinsResult {
    skins_with(round, player_ids, &SkinsRules::default())
}

/// Play a skins game over the round, one skin per hole.
///
/// The field is `player_ids` (players without a record are dropped) or every
/// player record. A hole is contested only once every player in the field
/// has scored it.
pub fn skins_with(
    round: &Round,
    player_ids: Option<&[PlayerId]>,
    rules: &SkinsRules,
) -> SkinsResult {
    let field: Vec<&PlayerScore> = match player_ids {
        Some(ids) => ids.iter().filter_map(|id| round.player_score(id)).collect(),
        None => round.player_records().collect(),
    };
    let mut totals: Vec<PlayerSkins> = field
        .iter()
        .map(|p| PlayerSkins {
            player_id: p.player_id.clone(),
            skins: 0,
        })
        .collect();

    let mut carry: u32 = 0;
    let mut holes = Vec::with_capacity(round.hole_info.len());
    for (i, hole) in round.hole_info.iter().enumerate() {
        let scores: Option<Vec<u32>> = field.iter().map(|p| p.strokes_at(i)).collect();
        let Some(scores) = scores.filter(|s| !s.is_empty()) else {
            holes.push(HoleSkin {
                hole_number: hole.number,
                low_score: None,
                outcome: SkinOutcome::Pending,
            });
            continue;
        };

        let low = scores.iter().copied().min().unwrap_or_default();
        let mut low_idx = scores
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == low)
            .map(|(idx, _)| idx);
        let outcome = match (low_idx.next(), low_idx.next()) {
            (Some(winner), None) => {
                let won = carry + 1;
                carry = 0;
                totals[winner].skins += won;
                SkinOutcome::Won {
                    player_id: field[winner].player_id.clone(),
                    skins: won,
                }
            },
            _ if rules.carry_over => {
                carry += 1;
                SkinOutcome::Carried { carried: carry }
            },
            _ => SkinOutcome::Void,
        };
        tracing::trace!(hole = hole.number, low, ?outcome, "skins hole settled");
        holes.push(HoleSkin {
            hole_number: hole.number,
            low_score: Some(low),
            outcome,
        });
    }

    SkinsResult {
        holes,
        totals,
        unclaimed: carry,
    }
}
