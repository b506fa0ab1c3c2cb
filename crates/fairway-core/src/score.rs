use serde::{Deserialize, Serialize};

use crate::hole::{HoleScore, hole_slots};
use crate::player::PlayerId;
use crate::team::TeamId;

/// One player's record for a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player_id: PlayerId,
    #[serde(with = "hole_slots")]
    pub scores: Vec<HoleScore>,
    /// Gross total, maintained by the caller.
    #[serde(default)]
    pub total_score: u32,
    #[serde(default)]
    pub total_to_par: i32,
    /// Total handicap strokes received this round (not per hole).
    #[serde(default)]
    pub handicap_strokes: Option<u32>,
    /// Manually entered Stableford total; overrides any computation.
    #[serde(default)]
    pub stableford_manual: Option<i32>,
}

/// A shared team score, used by scramble and alternate-shot rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    pub team_id: TeamId,
    #[serde(with = "hole_slots")]
    pub scores: Vec<HoleScore>,
    #[serde(default)]
    pub total_score: u32,
    #[serde(default)]
    pub total_to_par: i32,
}

/// A scoring entity of a round.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum Entity {
    Player(PlayerId),
    Team(TeamId),
}

/// A score record stored in `Round::scores`, tagged by whose score it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScoreRecord {
    Player(PlayerScore),
    Team(TeamScore),
}

impl ScoreRecord {
    pub fn entity(&self) -> Entity {
        match self {
            Self::Player(p) => Entity::Player(p.player_id.clone()),
            Self::Team(t) => Entity::Team(t.team_id.clone()),
        }
    }

    pub fn scores(&self) -> &[HoleScore] {
        match self {
            Self::Player(p) => &p.scores,
            Self::Team(t) => &t.scores,
        }
    }

    pub fn total_score(&self) -> u32 {
        match self {
            Self::Player(p) => p.total_score,
            Self::Team(t) => t.total_score,
        }
    }
}

/// Iterate the played holes of a slot array as `(index, strokes)`.
pub fn played_holes(scores: &[HoleScore]) -> impl Iterator<Item = (usize, u32)> + '_ {
    scores
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| slot.map(|s| (i, u32::from(s.get()))))
}

impl PlayerScore {
    pub fn played_holes(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        played_holes(&self.scores)
    }

    pub fn holes_played(&self) -> usize {
        self.played_holes().count()
    }

    /// Stroke value at a hole index, `None` if unplayed or out of range.
    pub fn strokes_at(&self, index: usize) -> Option<u32> {
        self.scores
            .get(index)
            .copied()
            .flatten()
            .map(|s| u32::from(s.get()))
    }
}

impl TeamScore {
    pub fn played_holes(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        played_holes(&self.scores)
    }
}
