use serde::{Deserialize, Serialize};

use fairway_core::{PlayerId, RoundId, Team, TeamId, Tour};

use crate::aggregate::{AggregatePlayerStats, aggregate_player_stats};
use crate::config::TeamStatsRules;
use crate::error::ScoringError;
use crate::team_score::{TeamRoundScore, resolve_team_round_score};

/// Direction of a team's recent scoring. Lower scores are better.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Momentum {
    Improving,
    Declining,
    Stable,
    #[default]
    NoData,
}

/// One member's stroke-play record within a tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPlayerStats {
    pub player_id: PlayerId,
    pub name: String,
    pub stroke_rounds: u32,
    pub match_rounds: u32,
    pub total_score: u32,
    pub average_score: f64,
    /// Lowest stroke-play total; 0 without stroke rounds.
    pub best_score: u32,
    pub best_round_id: Option<RoundId>,
    pub to_par: i32,
    pub aggregate: AggregatePlayerStats,
}

/// Team-level summary across a tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub team_id: TeamId,
    pub team_name: String,
    pub player_count: u32,
    pub rounds_played: u32,
    pub total_score: u32,
    pub average_score: f64,
    pub best_score: u32,
    pub best_round_id: Option<RoundId>,
    pub to_par: i32,
    /// Resolved score of every stroke round the team took part in, in tour order.
    pub round_scores: Vec<TeamRoundScore>,
    pub momentum: Momentum,
    pub players: Vec<TeamPlayerStats>,
    /// Members with the lowest stroke-play average, best first.
    pub best_performers: Vec<PlayerId>,
}

impl TeamStats {
    fn empty(team: &Team) -> Self {
        Self {
            team_id: team.id.clone(),
            team_name: team.name.clone(),
            player_count: 0,
            rounds_played: 0,
            total_score: 0,
            average_score: 0.0,
            best_score: 0,
            best_round_id: None,
            to_par: 0,
            round_scores: Vec::new(),
            momentum: Momentum::NoData,
            players: Vec::new(),
            best_performers: Vec::new(),
        }
    }
}

fn average(total: f64, count: usize) -> f64 {
    if count > 0 { total / count as f64 } else { 0.0 }
}

/// Classify the trend of the most recent round scores.
///
/// The last `momentum_window` scores are split in two halves (the first
/// half takes the extra score on odd lengths). A first-half average more
/// than `momentum_threshold` strokes above the second half is improving.
pub fn momentum(scores: &[u32], rules: &TeamStatsRules) -> Momentum {
    let recent = &scores[scores.len().saturating_sub(rules.momentum_window)..];
    if recent.len() < 2 {
        return Momentum::NoData;
    }

    let mid = recent.len().div_ceil(2);
    let (first, second) = recent.split_at(mid);
    let first_avg = average(first.iter().map(|&s| f64::from(s)).sum(), first.len());
    let second_avg = average(second.iter().map(|&s| f64::from(s)).sum(), second.len());

    let improvement = first_avg - second_avg;
    if improvement > rules.momentum_threshold {
        Momentum::Improving
    } else if improvement < -rules.momentum_threshold {
        Momentum::Declining
    } else {
        Momentum::Stable
    }
}

fn player_stats(tour: &Tour, player_id: &str) -> TeamPlayerStats {
    let mut stroke_rounds = 0;
    let mut match_rounds = 0;
    let mut total_score = 0;
    let mut to_par = 0;
    let mut best: Option<(u32, &RoundId)> = None;

    for round in &tour.rounds {
        let record = round.player_score(player_id);
        if round.counts_as_match_play() {
            if record.is_some() || round.is_match_participant(player_id) {
                match_rounds += 1;
            }
            continue;
        }
        let Some(record) = record else {
            continue;
        };

        stroke_rounds += 1;
        total_score += record.total_score;
        to_par += record.total_score as i32 - round.par() as i32;
        if best.is_none_or(|(score, _)| record.total_score < score) {
            best = Some((record.total_score, &round.id));
        }
    }

    TeamPlayerStats {
        player_id: player_id.to_string(),
        name: tour
            .player(player_id)
            .map_or_else(|| player_id.to_string(), |p| p.name.clone()),
        stroke_rounds,
        match_rounds,
        total_score,
        average_score: average(f64::from(total_score), stroke_rounds as usize),
        best_score: best.map_or(0, |(score, _)| score),
        best_round_id: best.map(|(_, id)| id.clone()),
        to_par,
        aggregate: aggregate_player_stats(&tour.rounds, player_id),
    }
}

/// Team statistics with the standard rules. `None` if the team is unknown.
pub fn team_statistics(tour: &Tour, team_id: &str) -> Option<TeamStats> {
    team_statistics_with(tour, team_id, &TeamStatsRules::default())
}

/// Team statistics under explicit momentum and ranking rules.
pub fn team_statistics_with(
    tour: &Tour,
    team_id: &str,
    rules: &TeamStatsRules,
) -> Option<TeamStats> {
    let Some(team) = tour.team(team_id) else {
        tracing::debug!(team_id, "Team statistics requested for unknown team");
        return None;
    };
    let mut stats = TeamStats::empty(team);
    if team.player_ids.is_empty() {
        return Some(stats);
    }

    stats.player_count = team.size() as u32;
    stats.players = team
        .player_ids
        .iter()
        .map(|id| player_stats(tour, id))
        .collect();

    stats.round_scores = tour
        .rounds
        .iter()
        .filter(|r| !r.counts_as_match_play())
        .filter_map(|r| resolve_team_round_score(r, team))
        .collect();

    for round_score in &stats.round_scores {
        stats.total_score += round_score.score;
        stats.to_par += round_score.to_par;
        if stats.best_round_id.is_none() || round_score.score < stats.best_score {
            stats.best_score = round_score.score;
            stats.best_round_id = Some(round_score.round_id.clone());
        }
    }
    stats.rounds_played = stats.round_scores.len() as u32;
    stats.average_score = average(f64::from(stats.total_score), stats.round_scores.len());

    let scores: Vec<u32> = stats.round_scores.iter().map(|r| r.score).collect();
    stats.momentum = momentum(&scores, rules);

    let mut ranked: Vec<&TeamPlayerStats> =
        stats.players.iter().filter(|p| p.stroke_rounds > 0).collect();
    ranked.sort_by(|a, b| a.average_score.total_cmp(&b.average_score));
    stats.best_performers = ranked
        .into_iter()
        .take(rules.best_performer_count)
        .map(|p| p.player_id.clone())
        .collect();

    Some(stats)
}

/// Like [`team_statistics`], reporting an unknown team as an error.
pub fn try_team_statistics(tour: &Tour, team_id: &str) -> Result<TeamStats, ScoringError> {
    team_statistics(tour, team_id).ok_or_else(|| ScoringError::UnknownTeam(team_id.to_string()))
}
