use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StreakKind {
    #[default]
    None,
    Birdie,
    Par,
    Bogey,
    UnderPar,
    OverPar,
}

impl StreakKind {
    /// Streak a hole starts on its own.
    fn seeded_by(to_par: i32) -> Self {
        match to_par {
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            t if t < 0 => Self::UnderPar,
            _ => Self::OverPar,
        }
    }

    /// Whether a hole with this result extends a streak of this kind.
    fn continued_by(self, to_par: i32) -> bool {
        match self {
            Self::None => false,
            Self::Birdie => to_par == -1,
            Self::Par => to_par == 0,
            Self::Bogey => to_par == 1,
            Self::UnderPar => to_par < 0,
            Self::OverPar => to_par > 0,
        }
    }
}

/// A run of consecutive played holes sharing a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub kind: StreakKind,
    pub length: u32,
}

impl Streak {
    /// Transition on the next played hole.
    pub fn advance(self, to_par: i32) -> Self {
        if self.kind.continued_by(to_par) {
            Self {
                kind: self.kind,
                length: self.length + 1,
            }
        } else {
            Self {
                kind: StreakKind::seeded_by(to_par),
                length: 1,
            }
        }
    }

    /// Transition on an unplayed hole: the run is broken.
    pub fn reset() -> Self {
        Self::default()
    }
}
