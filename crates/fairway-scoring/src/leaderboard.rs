use serde::{Deserialize, Serialize};

use fairway_core::{Entity, PlayerScore, Round, ScoringEntity, Tour};

use crate::stableford::stableford_points;
use crate::team_score::resolve_team_round_score;

/// One row of a live round leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub entity: Entity,
    pub name: String,
    pub gross: u32,
    /// Par of the holes counted so far.
    pub par_played: u32,
    pub to_par: i32,
    /// Holes counted so far.
    pub thru: u32,
    /// Stableford total, for player rows.
    pub stableford: Option<i32>,
    /// Competition rank (1, 2, 2, 4); 0 for entities that have not started.
    pub position: u32,
    pub tied: bool,
}

fn player_entry(round: &Round, tour: &Tour, record: &PlayerScore) -> LeaderboardEntry {
    let mut gross = 0;
    let mut par_played = 0;
    let mut thru = 0;
    for (i, strokes) in record.played_holes() {
        let Some(par) = round.par_at(i) else {
            continue;
        };
        gross += strokes;
        par_played += u32::from(par);
        thru += 1;
    }

    LeaderboardEntry {
        entity: Entity::Player(record.player_id.clone()),
        name: tour
            .player(&record.player_id)
            .map_or_else(|| record.player_id.clone(), |p| p.name.clone()),
        gross,
        par_played,
        to_par: gross as i32 - par_played as i32,
        thru,
        stableford: Some(stableford_points(round, &record.player_id)),
        position: 0,
        tied: false,
    }
}

/// Rank a round's scoring entities by score to par over the holes played.
///
/// Team formats list the tour's teams, scored through the shared team
/// resolution; other formats list every player record. Ties on to-par
/// share a position and are ordered by gross, then by listing order.
pub fn round_leaderboard(round: &Round, tour: &Tour) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = match round.format.scoring_entity() {
        ScoringEntity::Players => round
            .player_records()
            .map(|record| player_entry(round, tour, record))
            .collect(),
        ScoringEntity::Teams => tour
            .teams
            .iter()
            .filter_map(|team| {
                let resolved = resolve_team_round_score(round, team)?;
                Some(LeaderboardEntry {
                    entity: Entity::Team(team.id.clone()),
                    name: team.name.clone(),
                    gross: resolved.gross_played,
                    par_played: resolved.par_played,
                    to_par: resolved.gross_played as i32 - resolved.par_played as i32,
                    thru: resolved.holes_played,
                    stableford: None,
                    position: 0,
                    tied: false,
                })
            })
            .collect(),
    };

    entries.sort_by_key(|e| (e.thru == 0, e.to_par, e.gross));
    assign_positions(&mut entries);
    entries
}

fn assign_positions(entries: &mut [LeaderboardEntry]) {
    let started = entries.iter().take_while(|e| e.thru > 0).count();
    let mut i = 0;
    while i < started {
        let to_par = entries[i].to_par;
        let group_end = (i..started)
            .find(|&j| entries[j].to_par != to_par)
            .unwrap_or(started);
        let tied = group_end - i > 1;
        for entry in &mut entries[i..group_end] {
            entry.position = i as u32 + 1;
            entry.tied = tied;
        }
        i = group_end;
    }
}
