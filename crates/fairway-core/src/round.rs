use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::format::RoundFormat;
use crate::hole::{HoleInfo, course_par, validate_handicap_indices};
use crate::player::PlayerId;
use crate::score::{PlayerScore, ScoreRecord, TeamScore};
use crate::team::TeamId;

/// Unique identifier for a round.
pub type RoundId = String;

/// Lifecycle of a round. Managed by the caller; the engine only reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundStatus {
    #[default]
    Created,
    InProgress,
    Completed,
}

/// A Ryder Cup pairing played within a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RyderCupMatch {
    pub id: String,
    pub team_a_id: TeamId,
    pub team_b_id: TeamId,
    pub team_a_player_ids: Vec<PlayerId>,
    pub team_b_player_ids: Vec<PlayerId>,
}

impl RyderCupMatch {
    pub fn includes(&self, player_id: &str) -> bool {
        self.team_a_player_ids
            .iter()
            .chain(&self.team_b_player_ids)
            .any(|id| id == player_id)
    }
}

/// A single played round of golf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub id: RoundId,
    #[serde(default)]
    pub name: String,
    /// Number of holes, 9 or 18.
    pub holes: u8,
    pub hole_info: Vec<HoleInfo>,
    #[serde(default)]
    pub scores: Vec<ScoreRecord>,
    #[serde(default)]
    pub format: RoundFormat,
    #[serde(default)]
    pub is_match_play: bool,
    #[serde(default)]
    pub status: RoundStatus,
    /// Creation time in Unix milliseconds.
    #[serde(default)]
    pub created_at: u64,
    #[serde(default)]
    pub ryder_cup_matches: Vec<RyderCupMatch>,
}

impl Round {
    pub fn player_score(&self, player_id: &str) -> Option<&PlayerScore> {
        self.player_records().find(|p| p.player_id == player_id)
    }

    pub fn team_score(&self, team_id: &str) -> Option<&TeamScore> {
        self.scores.iter().find_map(|r| match r {
            ScoreRecord::Team(t) if t.team_id == team_id => Some(t),
            _ => None,
        })
    }

    pub fn player_records(&self) -> impl Iterator<Item = &PlayerScore> {
        self.scores.iter().filter_map(|r| match r {
            ScoreRecord::Player(p) => Some(p),
            ScoreRecord::Team(_) => None,
        })
    }

    /// Total course par.
    pub fn par(&self) -> u32 {
        course_par(&self.hole_info)
    }

    pub fn par_at(&self, index: usize) -> Option<u8> {
        self.hole_info.get(index).map(|h| h.par)
    }

    /// Match play either flagged explicitly or implied by the format.
    /// Stroke statistics skip these rounds.
    pub fn counts_as_match_play(&self) -> bool {
        self.is_match_play || self.format.is_match_play()
    }

    /// Whether the player takes part in one of this round's Ryder Cup matches.
    pub fn is_match_participant(&self, player_id: &str) -> bool {
        self.ryder_cup_matches.iter().any(|m| m.includes(player_id))
    }

    /// Structural checks a caller can run when a round is created.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if usize::from(self.holes) != self.hole_info.len() {
            return Err(ValidationError::HoleCountMismatch {
                holes: self.holes,
                hole_info: self.hole_info.len(),
            });
        }
        validate_handicap_indices(&self.hole_info)?;

        for record in &self.scores {
            let actual = record.scores().len();
            if actual > self.hole_info.len() {
                let entity = match record {
                    ScoreRecord::Player(p) => p.player_id.clone(),
                    ScoreRecord::Team(t) => t.team_id.clone(),
                };
                return Err(ValidationError::ScoreLengthMismatch {
                    entity,
                    expected: self.hole_info.len(),
                    actual,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{make_round, player_record, team_record};

    #[test]
    fn lookups_respect_record_kind() {
        let round = make_round(
            "r1",
            &[4, 4, 4],
            vec![player_record("p1", &[4, 5, 3]), team_record("p1", &[3, 3, 3])],
        );
        assert_eq!(round.player_score("p1").unwrap().total_score, 12);
        assert_eq!(round.team_score("p1").unwrap().total_score, 9);
        assert!(round.player_score("t9").is_none());
        assert_eq!(round.player_records().count(), 1);
    }

    #[test]
    fn format_implies_match_play() {
        let mut round = make_round("r1", &[4; 9], vec![]);
        assert!(!round.counts_as_match_play());
        round.format = RoundFormat::RyderCupSingles;
        assert!(round.counts_as_match_play());
        round.format = RoundFormat::StrokePlay;
        round.is_match_play = true;
        assert!(round.counts_as_match_play());
    }

    #[test]
    fn validate_accepts_fixture() {
        let round = make_round("r1", &[4; 18], vec![player_record("p1", &[4; 18])]);
        assert_eq!(round.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_hole_count_mismatch() {
        let mut round = make_round("r1", &[4; 9], vec![]);
        round.holes = 18;
        assert!(matches!(
            round.validate(),
            Err(ValidationError::HoleCountMismatch { holes: 18, hole_info: 9 })
        ));
    }

    #[test]
    fn validate_rejects_long_score_array() {
        let round = make_round("r1", &[4; 2], vec![player_record("p1", &[4, 4, 4])]);
        assert!(matches!(
            round.validate(),
            Err(ValidationError::ScoreLengthMismatch { expected: 2, actual: 3, .. })
        ));
    }

    #[test]
    fn deserializes_minimal_round() {
        let json = r#"{
            "id": "r1",
            "holes": 2,
            "hole_info": [
                { "number": 1, "par": 4, "handicap": 2 },
                { "number": 2, "par": 3, "yardage": 160, "handicap": 1 }
            ],
            "scores": [
                { "kind": "player", "player_id": "p1", "scores": [5, null], "total_score": 5,
                  "handicap_strokes": 1 }
            ],
            "format": "stroke-play",
            "status": "in-progress"
        }"#;
        let round: Round = serde_json::from_str(json).unwrap();
        assert_eq!(round.status, RoundStatus::InProgress);
        assert_eq!(round.par(), 7);
        assert_eq!(round.player_score("p1").unwrap().holes_played(), 1);
        assert_eq!(round.validate(), Ok(()));
    }
}
