use fairway_core::{PlayerId, TeamId, ValidationError};

#[derive(Debug, Clone, PartialEq)]
pub enum ScoringError {
    Validation(ValidationError),
    UnknownPlayer(PlayerId),
    UnknownTeam(TeamId),
    Config(String),
}

impl std::fmt::Display for ScoringError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "invalid round: {e}"),
            Self::UnknownPlayer(id) => write!(f, "no score record for player {id}"),
            Self::UnknownTeam(id) => write!(f, "no team with id {id}"),
            Self::Config(m) => write!(f, "invalid scoring config: {m}"),
        }
    }
}

impl std::error::Error for ScoringError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for ScoringError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
