use serde::{Deserialize, Serialize};

use fairway_core::{PlayerId, Round, RoundId};

use crate::classify::{ScoreBucket, classify};
use crate::error::ScoringError;
use crate::streak::Streak;

/// Holes 1-9 go to the front nine, everything after to the back nine.
const FRONT_NINE_HOLES: usize = 9;

/// A single played hole, used for best/worst hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleResult {
    pub hole_number: u8,
    pub score: u32,
    pub to_par: i32,
}

/// Running totals for one nine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NineSummary {
    pub score: u32,
    pub to_par: i32,
    pub birdies: u32,
    pub pars: u32,
    pub bogeys: u32,
    pub holes_played: u32,
}

impl NineSummary {
    fn record(&mut self, score: u32, to_par: i32, bucket: ScoreBucket) {
        self.score += score;
        self.to_par += to_par;
        self.holes_played += 1;
        match bucket {
            ScoreBucket::Birdie => self.birdies += 1,
            ScoreBucket::Par => self.pars += 1,
            ScoreBucket::Bogey => self.bogeys += 1,
            ScoreBucket::EagleOrBetter | ScoreBucket::DoubleOrWorse => {},
        }
    }
}

/// Hole-by-hole breakdown of one player's round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedPlayerStats {
    pub player_id: PlayerId,
    pub round_id: RoundId,
    pub eagle_or_better: u32,
    pub birdie_count: u32,
    pub par_count: u32,
    pub bogey_count: u32,
    pub double_bogey_or_worse: u32,
    pub best_hole: Option<HoleResult>,
    pub worst_hole: Option<HoleResult>,
    /// Streak as of the last hole slot, not the longest seen.
    pub current_streak: Streak,
    pub front9: NineSummary,
    pub back9: NineSummary,
}

impl DetailedPlayerStats {
    fn empty(player_id: &str, round_id: &str) -> Self {
        Self {
            player_id: player_id.to_string(),
            round_id: round_id.to_string(),
            eagle_or_better: 0,
            birdie_count: 0,
            par_count: 0,
            bogey_count: 0,
            double_bogey_or_worse: 0,
            best_hole: None,
            worst_hole: None,
            current_streak: Streak::default(),
            front9: NineSummary::default(),
            back9: NineSummary::default(),
        }
    }

    fn count(&mut self, bucket: ScoreBucket) {
        match bucket {
            ScoreBucket::EagleOrBetter => self.eagle_or_better += 1,
            ScoreBucket::Birdie => self.birdie_count += 1,
            ScoreBucket::Par => self.par_count += 1,
            ScoreBucket::Bogey => self.bogey_count += 1,
            ScoreBucket::DoubleOrWorse => self.double_bogey_or_worse += 1,
        }
    }

    pub fn holes_played(&self) -> u32 {
        self.front9.holes_played + self.back9.holes_played
    }
}

/// Scan a player's hole slots once and derive their round statistics.
///
/// Returns `None` when the player has no record in the round. An unplayed
/// hole breaks the current streak. Best and worst hole keep the first hole
/// reaching the extreme.
pub fn detailed_player_stats(round: &Round, player_id: &str) -> Option<DetailedPlayerStats> {
    let record = round.player_score(player_id)?;
    let mut stats = DetailedPlayerStats::empty(player_id, &round.id);

    for (i, slot) in record.scores.iter().enumerate() {
        let (Some(strokes), Some(par)) = (slot, round.par_at(i)) else {
            if slot.is_some() {
                tracing::debug!(player_id, hole = i + 1, "No hole layout for score slot");
            }
            stats.current_streak = Streak::reset();
            continue;
        };
        let score = u32::from(strokes.get());
        let result = classify(score, par);
        let hole = HoleResult {
            hole_number: (i + 1) as u8,
            score,
            to_par: result.to_par,
        };

        stats.count(result.bucket);
        if stats.best_hole.is_none_or(|b| hole.to_par < b.to_par) {
            stats.best_hole = Some(hole);
        }
        if stats.worst_hole.is_none_or(|w| hole.to_par > w.to_par) {
            stats.worst_hole = Some(hole);
        }

        let nine = if i < FRONT_NINE_HOLES {
            &mut stats.front9
        } else {
            &mut stats.back9
        };
        nine.record(score, result.to_par, result.bucket);

        stats.current_streak = stats.current_streak.advance(result.to_par);
    }

    Some(stats)
}

/// Like [`detailed_player_stats`], reporting a missing record as an error.
pub fn try_detailed_player_stats(
    round: &Round,
    player_id: &str,
) -> Result<DetailedPlayerStats, ScoringError> {
    detailed_player_stats(round, player_id)
        .ok_or_else(|| ScoringError::UnknownPlayer(player_id.to_string()))
}
