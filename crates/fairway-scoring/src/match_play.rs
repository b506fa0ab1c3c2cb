use serde::{Deserialize, Serialize};

use fairway_core::{PlayerId, Round, TeamId, Tour};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSide {
    A,
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchState {
    NotStarted,
    InProgress,
    /// Leading by exactly the number of holes left.
    Dormie,
    Won {
        winner: MatchSide,
        margin: u32,
        remaining: u32,
    },
    Halved,
}

/// Hole-by-hole state of a match between two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStatus {
    /// Positive when side A leads.
    pub holes_up: i32,
    pub holes_played: u32,
    pub holes_remaining: u32,
    pub state: MatchState,
}

impl MatchStatus {
    /// Side currently ahead, `None` when the match is all square.
    pub fn leader(&self) -> Option<MatchSide> {
        match self.holes_up.signum() {
            1 => Some(MatchSide::A),
            -1 => Some(MatchSide::B),
            _ => None,
        }
    }
}

/// Scoreboard notation: `"3&2"`, `"2 UP"`, `"AS"` or `"-"` before the first
/// hole. The string carries only the margin; [`MatchStatus::leader`] says
/// which side it belongs to.
impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.state {
            MatchState::NotStarted => write!(f, "-"),
            MatchState::Won {
                margin,
                remaining: 0,
                ..
            } => write!(f, "{margin} UP"),
            MatchState::Won {
                margin, remaining, ..
            } => write!(f, "{margin}&{remaining}"),
            MatchState::Halved => write!(f, "AS"),
            MatchState::InProgress | MatchState::Dormie if self.holes_up == 0 => write!(f, "AS"),
            MatchState::InProgress | MatchState::Dormie => {
                write!(f, "{} UP", self.holes_up.unsigned_abs())
            },
        }
    }
}

/// Best played score of a side on a hole.
fn side_score(round: &Round, side: &[PlayerId], index: usize) -> Option<u32> {
    side.iter()
        .filter_map(|id| round.player_score(id)?.strokes_at(index))
        .min()
}

/// Compare two sides hole by hole, the better ball of each side counting.
///
/// Holes not yet played by both sides are skipped. The match closes as soon
/// as one side leads by more holes than remain; later scores are ignored.
pub fn match_status(round: &Round, side_a: &[PlayerId], side_b: &[PlayerId]) -> MatchStatus {
    let total = round.hole_info.len() as u32;
    let mut holes_up: i32 = 0;
    let mut holes_played: u32 = 0;

    for i in 0..round.hole_info.len() {
        let (Some(a), Some(b)) = (side_score(round, side_a, i), side_score(round, side_b, i)) else {
            continue;
        };
        holes_played += 1;
        holes_up += match a.cmp(&b) {
            std::cmp::Ordering::Less => 1,
            std::cmp::Ordering::Greater => -1,
            std::cmp::Ordering::Equal => 0,
        };
        if holes_up.unsigned_abs() > total - holes_played {
            break;
        }
    }

    let holes_remaining = total - holes_played;
    let margin = holes_up.unsigned_abs();
    let state = if holes_played == 0 {
        MatchState::NotStarted
    } else if margin > holes_remaining {
        MatchState::Won {
            winner: if holes_up > 0 { MatchSide::A } else { MatchSide::B },
            margin,
            remaining: holes_remaining,
        }
    } else if holes_remaining == 0 {
        MatchState::Halved
    } else if margin > 0 && margin == holes_remaining {
        MatchState::Dormie
    } else {
        MatchState::InProgress
    };

    MatchStatus {
        holes_up,
        holes_played,
        holes_remaining,
        state,
    }
}

/// Ryder Cup points for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPoints {
    pub team_id: TeamId,
    pub points: f64,
}

/// Points per team over every Ryder Cup match in the tour: 1 for a win,
/// half each for a halved match. Undecided matches award nothing.
pub fn ryder_cup_points(tour: &Tour) -> Vec<TeamPoints> {
    let mut table: Vec<TeamPoints> = tour
        .teams
        .iter()
        .map(|t| TeamPoints {
            team_id: t.id.clone(),
            points: 0.0,
        })
        .collect();
    let mut award = |team_id: &str, points: f64| {
        if let Some(entry) = table.iter_mut().find(|e| e.team_id == team_id) {
            entry.points += points;
        }
    };

    for round in &tour.rounds {
        for m in &round.ryder_cup_matches {
            let status = match_status(round, &m.team_a_player_ids, &m.team_b_player_ids);
            match status.state {
                MatchState::Won {
                    winner: MatchSide::A,
                    ..
                } => award(&m.team_a_id, 1.0),
                MatchState::Won {
                    winner: MatchSide::B,
                    ..
                } => award(&m.team_b_id, 1.0),
                MatchState::Halved => {
                    award(&m.team_a_id, 0.5);
                    award(&m.team_b_id, 0.5);
                },
                MatchState::NotStarted | MatchState::InProgress | MatchState::Dormie => {},
            }
        }
    }
    table
}
