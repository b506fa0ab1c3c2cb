use serde::{Deserialize, Serialize};

use crate::player::Player;
use crate::round::{Round, RoundStatus};
use crate::team::Team;

/// A tournament: its players, teams and rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub rounds: Vec<Round>,
}

impl Tour {
    /// Parse a tour snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn team(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    pub fn team_of(&self, player_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.has_player(player_id))
    }
}

/// The round a live view should open on.
///
/// Any in-progress round wins; with several in progress the first in list
/// order is taken. Otherwise the most recently created completed round,
/// earlier list position breaking ties.
pub fn most_recent_round(tour: &Tour) -> Option<&Round> {
    if let Some(live) = tour
        .rounds
        .iter()
        .find(|r| r.status == RoundStatus::InProgress)
    {
        return Some(live);
    }

    tour.rounds
        .iter()
        .filter(|r| r.status == RoundStatus::Completed)
        .fold(None, |best: Option<&Round>, r| match best {
            Some(b) if b.created_at >= r.created_at => Some(b),
            _ => Some(r),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{make_round, make_team, make_tour};

    fn with_status(id: &str, status: RoundStatus, created_at: u64) -> Round {
        let mut round = make_round(id, &[4; 9], vec![]);
        round.status = status;
        round.created_at = created_at;
        round
    }

    #[test]
    fn in_progress_beats_newer_completed() {
        let tour = make_tour(
            &["p1"],
            vec![],
            vec![
                with_status("old-live", RoundStatus::InProgress, 1),
                with_status("new-done", RoundStatus::Completed, 99),
            ],
        );
        assert_eq!(most_recent_round(&tour).unwrap().id, "old-live");
    }

    #[test]
    fn first_in_progress_in_list_order() {
        let tour = make_tour(
            &["p1"],
            vec![],
            vec![
                with_status("a", RoundStatus::InProgress, 1),
                with_status("b", RoundStatus::InProgress, 5),
            ],
        );
        assert_eq!(most_recent_round(&tour).unwrap().id, "a");
    }

    #[test]
    fn latest_completed_with_earlier_tie_break() {
        let tour = make_tour(
            &["p1"],
            vec![],
            vec![
                with_status("a", RoundStatus::Completed, 10),
                with_status("b", RoundStatus::Completed, 30),
                with_status("c", RoundStatus::Completed, 30),
                with_status("d", RoundStatus::Created, 50),
            ],
        );
        assert_eq!(most_recent_round(&tour).unwrap().id, "b");
    }

    #[test]
    fn created_rounds_are_not_recent() {
        let tour = make_tour(
            &["p1"],
            vec![],
            vec![with_status("a", RoundStatus::Created, 10)],
        );
        assert!(most_recent_round(&tour).is_none());
    }

    #[test]
    fn team_lookup_by_member() {
        let tour = make_tour(
            &["p1", "p2", "p3"],
            vec![make_team("t1", &["p1", "p2"]), make_team("t2", &["p3"])],
            vec![],
        );
        assert_eq!(tour.team_of("p3").unwrap().id, "t2");
        assert!(tour.team_of("p9").is_none());
        assert_eq!(tour.player("p2").unwrap().name, "Player p2");
    }

    #[test]
    fn from_json_parses_snapshot() {
        let json = r##"{
            "id": "tour-1",
            "name": "Club Championship",
            "players": [{ "id": "p1", "name": "Ana", "handicap": 12.4 }],
            "teams": [{ "id": "t1", "name": "Eagles", "player_ids": ["p1"], "color": "#ff5757" }],
            "rounds": []
        }"##;
        let tour = Tour::from_json(json).unwrap();
        assert_eq!(tour.team("t1").unwrap().size(), 1);
        assert!(Tour::from_json("{").is_err());
    }
}
