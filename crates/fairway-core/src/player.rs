use serde::{Deserialize, Serialize};

/// Unique identifier for a player in a tour.
pub type PlayerId = String;

/// A golfer registered in a tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Handicap index, if the player has one on file.
    #[serde(default)]
    pub handicap: Option<f32>,
}
