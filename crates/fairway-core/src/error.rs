/// Structural problems in a round snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    HandicapIndexOutOfRange {
        hole_number: u8,
        handicap: u8,
        holes: usize,
    },
    DuplicateHandicapIndex {
        handicap: u8,
        first_hole: u8,
        second_hole: u8,
    },
    HoleCountMismatch {
        holes: u8,
        hole_info: usize,
    },
    ScoreLengthMismatch {
        entity: String,
        expected: usize,
        actual: usize,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HandicapIndexOutOfRange {
                hole_number,
                handicap,
                holes,
            } => write!(
                f,
                "hole {hole_number} has stroke index {handicap}, expected 1..={holes}"
            ),
            Self::DuplicateHandicapIndex {
                handicap,
                first_hole,
                second_hole,
            } => write!(
                f,
                "stroke index {handicap} is used by both hole {first_hole} and hole {second_hole}"
            ),
            Self::HoleCountMismatch { holes, hole_info } => write!(
                f,
                "round has {holes} holes but {hole_info} hole layouts"
            ),
            Self::ScoreLengthMismatch {
                entity,
                expected,
                actual,
            } => write!(
                f,
                "score record for {entity} has {actual} slots, expected at most {expected}"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
