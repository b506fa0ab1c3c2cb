use serde::{Deserialize, Serialize};

/// How a round is played and scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundFormat {
    #[default]
    StrokePlay,
    MatchPlay,
    Scramble,
    BestBall,
    AlternateShot,
    RyderCupSingles,
    RyderCupFourball,
    RyderCupFoursomes,
    Skins,
}

/// Broad family of a format, used for UI grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatType {
    Individual,
    Team,
    Match,
}

/// Who the progress bar and leaderboard count as a scoring entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringEntity {
    Players,
    Teams,
}

/// Display metadata for a format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatConfig {
    pub format: RoundFormat,
    #[serde(rename = "type")]
    pub format_type: FormatType,
    pub display_name: &'static str,
    pub description: &'static str,
    pub is_team_based: bool,
    pub requires_teams: bool,
    pub allows_total_score: bool,
}

impl RoundFormat {
    pub const ALL: [RoundFormat; 9] = [
        Self::StrokePlay,
        Self::MatchPlay,
        Self::Scramble,
        Self::BestBall,
        Self::AlternateShot,
        Self::RyderCupSingles,
        Self::RyderCupFourball,
        Self::RyderCupFoursomes,
        Self::Skins,
    ];

    pub fn config(self) -> FormatConfig {
        use FormatType::*;

        let (
            format_type,
            display_name,
            description,
            is_team_based,
            requires_teams,
            allows_total_score,
        ) = match self {
            Self::StrokePlay => (
                Individual,
                "Stroke Play",
                "Every stroke counts; lowest total wins.",
                false,
                false,
                true,
            ),
            Self::MatchPlay => (
                Match,
                "Match Play",
                "Head to head, hole by hole; most holes won takes the match.",
                false,
                false,
                false,
            ),
            Self::Scramble => (
                Team,
                "Scramble",
                "Everyone tees off, the team plays from the best shot and records one score.",
                true,
                true,
                true,
            ),
            Self::BestBall => (
                Team,
                "Best Ball",
                "Each player plays their own ball; the team's lowest score on each hole counts.",
                true,
                true,
                true,
            ),
            Self::AlternateShot => (
                Team,
                "Alternate Shot",
                "Partners take turns hitting one ball and record one team score.",
                true,
                true,
                true,
            ),
            Self::RyderCupSingles => (
                Match,
                "Ryder Cup Singles",
                "One against one match play for a team point.",
                true,
                true,
                false,
            ),
            Self::RyderCupFourball => (
                Match,
                "Ryder Cup Four-Ball",
                "Pairs play their own balls; the better score of each pair wins the hole.",
                true,
                true,
                false,
            ),
            Self::RyderCupFoursomes => (
                Match,
                "Ryder Cup Foursomes",
                "Pairs alternate shots with one ball in match play.",
                true,
                true,
                false,
            ),
            Self::Skins => (
                Individual,
                "Skins",
                "Each hole is worth a skin; ties carry the skin to the next hole.",
                false,
                false,
                false,
            ),
        };

        FormatConfig {
            format: self,
            format_type,
            display_name,
            description,
            is_team_based,
            requires_teams,
            allows_total_score,
        }
    }

    pub fn is_match_play(self) -> bool {
        matches!(
            self,
            Self::MatchPlay
                | Self::RyderCupSingles
                | Self::RyderCupFourball
                | Self::RyderCupFoursomes
        )
    }

    /// Formats that record one shared score per team.
    pub fn uses_team_entity_score(self) -> bool {
        matches!(self, Self::Scramble | Self::AlternateShot)
    }

    pub fn scoring_entity(self) -> ScoringEntity {
        match self {
            Self::Scramble | Self::AlternateShot | Self::BestBall => ScoringEntity::Teams,
            _ => ScoringEntity::Players,
        }
    }
}
