use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

/// Unique identifier for a team in a tour.
pub type TeamId = String;

/// A team of players. Teams own no scores directly: team-scored formats
/// store a `TeamScore` record in the round, everything else is derived
/// from the members' individual records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub captain_id: Option<PlayerId>,
    #[serde(default)]
    pub player_ids: Vec<PlayerId>,
    /// Display color, e.g. `#1e90ff`.
    #[serde(default)]
    pub color: String,
}

impl Team {
    pub fn has_player(&self, player_id: &str) -> bool {
        self.player_ids.iter().any(|id| id == player_id)
    }

    pub fn size(&self) -> usize {
        self.player_ids.len()
    }
}
