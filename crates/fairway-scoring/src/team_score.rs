use serde::{Deserialize, Serialize};

use fairway_core::{PlayerScore, Round, RoundFormat, RoundId, Team, TeamId};

/// Where a team's round score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeamScoreSource {
    /// A shared team record (scramble, alternate shot).
    TeamRecord,
    /// Lowest member score on each hole.
    BestBall,
    /// Sum of the members' individual totals.
    MemberSum,
}

/// A team's score for one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRoundScore {
    pub round_id: RoundId,
    pub team_id: TeamId,
    pub source: TeamScoreSource,
    /// Round score: a team record's total, the best-ball sum, or the sum of
    /// member totals.
    pub score: u32,
    /// Par the score is measured against.
    pub par: u32,
    pub to_par: i32,
    /// Strokes on the holes counted so far, read from the hole slots.
    pub gross_played: u32,
    /// Par of the holes counted so far.
    pub par_played: u32,
    /// Holes with at least one counted score.
    pub holes_played: u32,
    /// Number of members whose records fed the score (0 for a team record).
    pub contributors: u32,
}

/// Strokes and par over played holes that have a layout.
fn counted_totals(round: &Round, played: impl IntoIterator<Item = (usize, u32)>) -> (u32, u32) {
    played
        .into_iter()
        .filter_map(|(i, strokes)| round.par_at(i).map(|par| (strokes, u32::from(par))))
        .fold((0, 0), |(gross, par_sum), (strokes, par)| (gross + strokes, par_sum + par))
}

/// Resolve how a team scored in a round.
///
/// A team record takes precedence; a best-ball round takes each hole's
/// lowest member score; any other format sums member totals against
/// `par * team size`. `None` when neither a team record nor any member
/// record exists.
///
/// Both the progress tracker and team statistics go through this function
/// so they always agree on what a team has scored.
pub fn resolve_team_round_score(round: &Round, team: &Team) -> Option<TeamRoundScore> {
    let course_par = round.par();

    if let Some(record) = round.team_score(&team.id) {
        let score = record.total_score;
        let (gross_played, par_played) = counted_totals(round, record.played_holes());
        return Some(TeamRoundScore {
            round_id: round.id.clone(),
            team_id: team.id.clone(),
            source: TeamScoreSource::TeamRecord,
            score,
            par: course_par,
            to_par: score as i32 - course_par as i32,
            gross_played,
            par_played,
            holes_played: record
                .played_holes()
                .filter(|&(i, _)| round.par_at(i).is_some())
                .count() as u32,
            contributors: 0,
        });
    }

    let members: Vec<&PlayerScore> = team
        .player_ids
        .iter()
        .filter_map(|id| round.player_score(id))
        .collect();
    if members.is_empty() {
        return None;
    }

    let holes = members.iter().map(|m| m.scores.len()).max().unwrap_or(0);
    let best_per_hole: Vec<(usize, u32)> = (0..holes)
        .filter_map(|i| members.iter().filter_map(|m| m.strokes_at(i)).min().map(|s| (i, s)))
        .collect();
    let holes_played = best_per_hole
        .iter()
        .filter(|&&(i, _)| round.par_at(i).is_some())
        .count() as u32;

    let (source, score, par, (gross_played, par_played), contributors) =
        if round.format == RoundFormat::BestBall {
            let score: u32 = best_per_hole.iter().map(|&(_, s)| s).sum();
            let contributors = members.iter().filter(|m| m.holes_played() > 0).count();
            (
                TeamScoreSource::BestBall,
                score,
                course_par,
                counted_totals(round, best_per_hole.iter().copied()),
                contributors,
            )
        } else {
            let score: u32 = members.iter().map(|m| m.total_score).sum();
            (
                TeamScoreSource::MemberSum,
                score,
                course_par * team.size() as u32,
                counted_totals(round, members.iter().flat_map(|m| m.played_holes())),
                members.len(),
            )
        };

    Some(TeamRoundScore {
        round_id: round.id.clone(),
        team_id: team.id.clone(),
        source,
        score,
        par,
        to_par: score as i32 - par as i32,
        gross_played,
        par_played,
        holes_played,
        contributors: contributors as u32,
    })
}
