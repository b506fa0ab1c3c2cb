use serde::{Deserialize, Serialize};

/// Result bucket of a single hole relative to par.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreBucket {
    EagleOrBetter,
    Birdie,
    Par,
    Bogey,
    DoubleOrWorse,
}

impl ScoreBucket {
    pub fn from_to_par(to_par: i32) -> Self {
        match to_par {
            i32::MIN..=-2 => Self::EagleOrBetter,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            _ => Self::DoubleOrWorse,
        }
    }
}

/// A played hole classified against par.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub bucket: ScoreBucket,
    pub to_par: i32,
}

/// Classify a played score. Callers only pass played holes.
pub fn classify(score: u32, par: u8) -> Classification {
    let to_par = score as i32 - i32::from(par);
    Classification {
        bucket: ScoreBucket::from_to_par(to_par),
        to_par,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_around_par_four() {
        assert_eq!(classify(1, 4).bucket, ScoreBucket::EagleOrBetter);
        assert_eq!(classify(2, 4).bucket, ScoreBucket::EagleOrBetter);
        assert_eq!(classify(3, 4).bucket, ScoreBucket::Birdie);
        assert_eq!(classify(4, 4).bucket, ScoreBucket::Par);
        assert_eq!(classify(5, 4).bucket, ScoreBucket::Bogey);
        assert_eq!(classify(6, 4).bucket, ScoreBucket::DoubleOrWorse);
        assert_eq!(classify(11, 4).bucket, ScoreBucket::DoubleOrWorse);
    }

    #[test]
    fn to_par_is_signed_difference() {
        assert_eq!(classify(3, 5).to_par, -2);
        assert_eq!(classify(7, 3).to_par, 4);
    }
}
