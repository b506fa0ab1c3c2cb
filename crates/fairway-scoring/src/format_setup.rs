use serde::{Deserialize, Serialize};

use fairway_core::{PlayerId, Round, RoundFormat, ScoringEntity, Tour};

use crate::team_score::resolve_team_round_score;

/// Problem preventing a format from being played with a tour's setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatIssue {
    NoTeams,
    TooFewTeams { required: usize, found: usize },
    UnassignedPlayers(Vec<PlayerId>),
}

impl std::fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoTeams => write!(f, "this format requires teams"),
            Self::TooFewTeams { required, found } => {
                write!(f, "this format requires {required} teams, found {found}")
            },
            Self::UnassignedPlayers(ids) => {
                write!(f, "players without a team: {}", ids.join(", "))
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatValidation {
    pub format: RoundFormat,
    pub issues: Vec<FormatIssue>,
}

impl FormatValidation {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check a tour's teams against what a format needs.
pub fn validate_format_setup(format: RoundFormat, tour: &Tour) -> FormatValidation {
    let config = format.config();
    let mut issues = Vec::new();

    if config.requires_teams {
        let required = if format.is_match_play() { 2 } else { 1 };
        match tour.teams.len() {
            0 => issues.push(FormatIssue::NoTeams),
            found if found < required => issues.push(FormatIssue::TooFewTeams { required, found }),
            _ => {},
        }

        let unassigned: Vec<PlayerId> = tour
            .players
            .iter()
            .filter(|p| tour.team_of(&p.id).is_none())
            .map(|p| p.id.clone())
            .collect();
        if !unassigned.is_empty() {
            issues.push(FormatIssue::UnassignedPlayers(unassigned));
        }
    }

    FormatValidation { format, issues }
}

/// How far a round's scoring has progressed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringProgress {
    pub entity: ScoringEntity,
    /// Entities with at least one played hole.
    pub started: u32,
    pub total: u32,
    /// `started / total`, 0 when there is nothing to score.
    pub fraction: f64,
}

/// Fraction of the round's scoring entities that have started.
///
/// Team formats count teams, resolving each team's score the same way team
/// statistics do; individual formats count the tour's players.
pub fn scoring_progress(round: &Round, tour: &Tour) -> ScoringProgress {
    let entity = round.format.scoring_entity();
    let (started, total) = match entity {
        ScoringEntity::Teams => {
            let started = tour
                .teams
                .iter()
                .filter(|team| {
                    resolve_team_round_score(round, team).is_some_and(|s| s.holes_played > 0)
                })
                .count();
            (started, tour.teams.len())
        },
        ScoringEntity::Players => {
            let started = tour
                .players
                .iter()
                .filter(|p| {
                    round
                        .player_score(&p.id)
                        .is_some_and(|s| s.holes_played() > 0)
                })
                .count();
            (started, tour.players.len())
        },
    };

    ScoringProgress {
        entity,
        started: started as u32,
        total: total as u32,
        fraction: if total > 0 {
            started as f64 / total as f64
        } else {
            0.0
        },
    }
}
