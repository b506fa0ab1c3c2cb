use std::num::NonZeroU8;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Strokes taken on a single hole. `None` means the hole has not been
/// played yet; a played hole always holds a positive stroke count.
pub type HoleScore = Option<NonZeroU8>;

/// Build a hole slot from a raw stroke count, mapping `0` to unplayed.
pub fn hole_score(strokes: u8) -> HoleScore {
    NonZeroU8::new(strokes)
}

/// Layout of a single hole on the course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleInfo {
    /// 1-based hole number.
    pub number: u8,
    pub par: u8,
    #[serde(default)]
    pub yardage: Option<u16>,
    /// Stroke index: 1 is the hardest hole.
    #[serde(default)]
    pub handicap: Option<u8>,
}

/// Total par over a hole layout.
pub fn course_par(hole_info: &[HoleInfo]) -> u32 {
    hole_info.iter().map(|h| u32::from(h.par)).sum()
}

/// Check that the stroke indices of a layout are distinct and lie in
/// `1..=hole_info.len()`. Holes without an index are not checked.
pub fn validate_handicap_indices(hole_info: &[HoleInfo]) -> Result<(), ValidationError> {
    let holes = hole_info.len();
    let mut seen: Vec<Option<u8>> = vec![None; holes];

    for hole in hole_info {
        let Some(handicap) = hole.handicap else {
            continue;
        };
        let slot = usize::from(handicap);
        if slot == 0 || slot > holes {
            return Err(ValidationError::HandicapIndexOutOfRange {
                hole_number: hole.number,
                handicap,
                holes,
            });
        }
        if let Some(first_hole) = seen[slot - 1] {
            return Err(ValidationError::DuplicateHandicapIndex {
                handicap,
                first_hole,
                second_hole: hole.number,
            });
        }
        seen[slot - 1] = Some(hole.number);
    }
    Ok(())
}

/// Serde adapter for hole slot arrays: `null` and `0` both read as unplayed,
/// unplayed is written back as `null`.
pub mod hole_slots {
    use std::num::NonZeroU8;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::HoleScore;

    pub fn serialize<S: Serializer>(slots: &[HoleScore], serializer: S) -> Result<S::Ok, S::Error> {
        let raw: Vec<Option<u8>> = slots.iter().map(|s| s.map(NonZeroU8::get)).collect();
        raw.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<HoleScore>, D::Error> {
        let raw = Vec::<Option<u8>>::deserialize(deserializer)?;
        Ok(raw.into_iter().map(|v| v.and_then(NonZeroU8::new)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(indices: &[Option<u8>]) -> Vec<HoleInfo> {
        indices
            .iter()
            .enumerate()
            .map(|(i, &handicap)| HoleInfo {
                number: i as u8 + 1,
                par: 4,
                yardage: None,
                handicap,
            })
            .collect()
    }

    #[test]
    fn zero_is_unplayed() {
        assert_eq!(hole_score(0), None);
        assert_eq!(hole_score(5).map(NonZeroU8::get), Some(5));
    }

    #[test]
    fn course_par_sums_holes() {
        assert_eq!(course_par(&layout(&[None, None, None])), 12);
        assert_eq!(course_par(&[]), 0);
    }

    #[test]
    fn permutation_is_valid() {
        let holes = layout(&[Some(3), Some(1), Some(4), Some(2)]);
        assert_eq!(validate_handicap_indices(&holes), Ok(()));
    }

    #[test]
    fn missing_indices_are_not_checked() {
        let holes = layout(&[None, Some(1), None]);
        assert_eq!(validate_handicap_indices(&holes), Ok(()));
    }

    #[test]
    fn duplicate_index_rejected() {
        let holes = layout(&[Some(1), Some(2), Some(1)]);
        assert_eq!(
            validate_handicap_indices(&holes),
            Err(ValidationError::DuplicateHandicapIndex {
                handicap: 1,
                first_hole: 1,
                second_hole: 3,
            })
        );
    }

    #[test]
    fn out_of_range_index_rejected() {
        // 9-hole layout still carrying 18-hole stroke indices
        let holes = layout(&[Some(1), Some(17)]);
        assert!(matches!(
            validate_handicap_indices(&holes),
            Err(ValidationError::HandicapIndexOutOfRange { handicap: 17, .. })
        ));
        let holes = layout(&[Some(0)]);
        assert!(validate_handicap_indices(&holes).is_err());
    }

    #[test]
    fn slots_read_null_and_zero_as_unplayed() {
        #[derive(Deserialize, Serialize)]
        struct Wrapper {
            #[serde(with = "hole_slots")]
            scores: Vec<HoleScore>,
        }

        let w: Wrapper = serde_json::from_str(r#"{"scores":[4,null,0,3]}"#).unwrap();
        assert_eq!(w.scores, vec![hole_score(4), None, None, hole_score(3)]);

        let json = serde_json::to_string(&w).unwrap();
        assert_eq!(json, r#"{"scores":[4,null,null,3]}"#);
    }
}
