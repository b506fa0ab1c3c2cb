pub mod aggregate;
pub mod classify;
pub mod config;
pub mod error;
pub mod format_setup;
pub mod handicap;
pub mod hole_winners;
pub mod leaderboard;
pub mod match_play;
pub mod skins;
pub mod stableford;
pub mod stats;
pub mod streak;
pub mod team_score;
pub mod team_stats;

pub use aggregate::{AggregatePlayerStats, aggregate_player_stats};
pub use classify::{Classification, ScoreBucket, classify};
pub use config::{ScoringConfig, SkinsRules, StablefordRules, TeamStatsRules};
pub use error::ScoringError;
pub use format_setup::{
    FormatIssue, FormatValidation, ScoringProgress, scoring_progress, validate_format_setup,
};
pub use handicap::{
    allocate_handicap_strokes, net_scores, player_allocation, try_allocate_handicap_strokes,
};
pub use hole_winners::{HoleWinner, hole_winners};
pub use leaderboard::{LeaderboardEntry, round_leaderboard};
pub use match_play::{
    MatchSide, MatchState, MatchStatus, TeamPoints, match_status, ryder_cup_points,
};
pub use skins::{HoleSkin, PlayerSkins, SkinOutcome, SkinsResult, skins, skins_with};
pub use stableford::{hole_points, stableford_points, stableford_points_with};
pub use stats::{
    DetailedPlayerStats, HoleResult, NineSummary, detailed_player_stats, try_detailed_player_stats,
};
pub use streak::{Streak, StreakKind};
pub use team_score::{TeamRoundScore, TeamScoreSource, resolve_team_round_score};
pub use team_stats::{
    Momentum, TeamPlayerStats, TeamStats, momentum, team_statistics, team_statistics_with,
    try_team_statistics,
};
