pub mod error;
pub mod format;
pub mod hole;
pub mod player;
pub mod round;
pub mod score;
pub mod team;
pub mod tour;

pub use error::ValidationError;
pub use format::{FormatConfig, FormatType, RoundFormat, ScoringEntity};
pub use hole::{HoleInfo, HoleScore, course_par, hole_score, validate_handicap_indices};
pub use player::{Player, PlayerId};
pub use round::{Round, RoundId, RoundStatus, RyderCupMatch};
pub use score::{Entity, PlayerScore, ScoreRecord, TeamScore, played_holes};
pub use team::{Team, TeamId};
pub use tour::{Tour, most_recent_round};

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::format::RoundFormat;
    use crate::hole::{HoleInfo, hole_score};
    use crate::player::Player;
    use crate::round::{Round, RoundStatus};
    use crate::score::{PlayerScore, ScoreRecord, TeamScore};
    use crate::team::Team;
    use crate::tour::Tour;

    /// Hole layout with the given pars; stroke indices follow hole order
    /// (hole 1 is the hardest).
    pub fn make_hole_info(pars: &[u8]) -> Vec<HoleInfo> {
        pars.iter()
            .enumerate()
            .map(|(i, &par)| HoleInfo {
                number: i as u8 + 1,
                par,
                yardage: None,
                handicap: Some(i as u8 + 1),
            })
            .collect()
    }

    /// In-progress stroke-play round over `pars` holding `records`.
    pub fn make_round(id: &str, pars: &[u8], records: Vec<ScoreRecord>) -> Round {
        Round {
            id: id.to_string(),
            name: format!("Round {id}"),
            holes: pars.len() as u8,
            hole_info: make_hole_info(pars),
            scores: records,
            format: RoundFormat::StrokePlay,
            is_match_play: false,
            status: RoundStatus::InProgress,
            created_at: 0,
            ryder_cup_matches: Vec::new(),
        }
    }

    /// Player record from raw strokes; `0` marks an unplayed hole.
    /// `total_score` is the sum of played strokes, `total_to_par` is left at 0.
    pub fn player_score(player_id: &str, strokes: &[u8]) -> PlayerScore {
        PlayerScore {
            player_id: player_id.to_string(),
            scores: strokes.iter().map(|&s| hole_score(s)).collect(),
            total_score: strokes.iter().map(|&s| u32::from(s)).sum(),
            total_to_par: 0,
            handicap_strokes: None,
            stableford_manual: None,
        }
    }

    pub fn player_record(player_id: &str, strokes: &[u8]) -> ScoreRecord {
        ScoreRecord::Player(player_score(player_id, strokes))
    }

    pub fn team_record(team_id: &str, strokes: &[u8]) -> ScoreRecord {
        ScoreRecord::Team(TeamScore {
            team_id: team_id.to_string(),
            scores: strokes.iter().map(|&s| hole_score(s)).collect(),
            total_score: strokes.iter().map(|&s| u32::from(s)).sum(),
            total_to_par: 0,
        })
    }

    /// Replace a record's stored total, leaving its hole slots alone.
    pub fn with_total(mut record: ScoreRecord, total: u32) -> ScoreRecord {
        match &mut record {
            ScoreRecord::Player(p) => p.total_score = total,
            ScoreRecord::Team(t) => t.total_score = total,
        }
        record
    }

    pub fn make_team(id: &str, player_ids: &[&str]) -> Team {
        Team {
            id: id.to_string(),
            name: format!("Team {id}"),
            captain_id: player_ids.first().map(|p| p.to_string()),
            player_ids: player_ids.iter().map(|p| p.to_string()).collect(),
            color: "#4ecdc4".to_string(),
        }
    }

    /// Tour with players named `Player <id>`.
    pub fn make_tour(player_ids: &[&str], teams: Vec<Team>, rounds: Vec<Round>) -> Tour {
        Tour {
            id: "tour".to_string(),
            name: "Test Tour".to_string(),
            players: player_ids
                .iter()
                .map(|id| Player {
                    id: id.to_string(),
                    name: format!("Player {id}"),
                    handicap: None,
                })
                .collect(),
            teams,
            rounds,
        }
    }
}
