use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::SimcheckError;

/// Similarity percentage in `[0.0, 100.0]`, rounded to two decimals.
///
/// Serializes as a bare number; deserializing rejects values outside the range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct SimilarityScore(f64);

impl SimilarityScore {
    pub const IDENTICAL: SimilarityScore = SimilarityScore(100.0);

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<SimilarityScore> for f64 {
    fn from(score: SimilarityScore) -> f64 {
        score.0
    }
}

impl TryFrom<f64> for SimilarityScore {
    type Error = SimcheckError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !(0.0..=100.0).contains(&value) {
            return Err(SimcheckError::ScoreOutOfRange(value));
        }
        Ok(SimilarityScore(round_hundredths(value)))
    }
}

impl fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Round half away from zero at the hundredths place.
fn round_hundredths(raw: f64) -> f64 {
    (raw * 100.0).round() / 100.0
}

/// Score two normalized lengths and their LCS length as `200 * lcs / (len1 + len2)`.
///
/// Two empty documents are fully similar. An `lcs` longer than either input is
/// rejected rather than producing a score above 100.
///
/// # Example
/// ```
/// use simcheck::engine::similarity;
///
/// assert_eq!(similarity(10, 11, 7).unwrap().to_string(), "66.67");
/// assert_eq!(similarity(0, 0, 0).unwrap().to_string(), "100.00");
/// ```
pub fn similarity(len1: usize, len2: usize, lcs: usize) -> Result<SimilarityScore, SimcheckError> {
    if lcs > len1.min(len2) {
        return Err(SimcheckError::InvalidScore { lcs, len1, len2 });
    }

    let total = len1 + len2;
    if total == 0 {
        return Ok(SimilarityScore::IDENTICAL);
    }

    let raw = 200.0 * lcs as f64 / total as f64;
    Ok(SimilarityScore(round_hundredths(raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_denominator() {
        assert_eq!(similarity(0, 0, 0).unwrap().value(), 100.0);
    }

    #[test]
    fn test_exact_values() {
        assert_eq!(similarity(5, 5, 3).unwrap().value(), 60.0);
        assert_eq!(similarity(8, 8, 4).unwrap().value(), 50.0);
        assert_eq!(similarity(7, 7, 7).unwrap().value(), 100.0);
        assert_eq!(similarity(4, 4, 0).unwrap().value(), 0.0);
    }

    #[test]
    fn test_rounding_repeating_decimal() {
        // 200 * 7 / 21 = 66.666...
        assert!((similarity(10, 11, 7).unwrap().value() - 66.67).abs() < 1e-9);
        // 200 * 1 / 3 = 66.666...
        assert_eq!(similarity(1, 2, 1).unwrap().to_string(), "66.67");
        // 200 * 1 / 6 = 33.333...
        assert_eq!(similarity(3, 3, 1).unwrap().to_string(), "33.33");
    }

    #[test]
    fn test_one_side_empty() {
        assert_eq!(similarity(0, 5, 0).unwrap().to_string(), "0.00");
    }

    #[test]
    fn test_lcs_exceeding_length_rejected() {
        let err = similarity(3, 2, 5).unwrap_err();
        assert!(matches!(err, SimcheckError::InvalidScore { lcs: 5, len1: 3, len2: 2 }));
        assert!(similarity(0, 0, 1).is_err());
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(SimilarityScore::IDENTICAL.to_string(), "100.00");
        assert_eq!(similarity(5, 5, 3).unwrap().to_string(), "60.00");
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<SimilarityScore>("250.0").is_err());
        assert!(serde_json::from_str::<SimilarityScore>("-3").is_err());
        assert!(matches!(
            SimilarityScore::try_from(f64::NAN),
            Err(SimcheckError::ScoreOutOfRange(_))
        ));
    }

    #[test]
    fn test_deserialize_accepts_and_rounds() {
        let score: SimilarityScore = serde_json::from_str("66.67").unwrap();
        assert_eq!(score.to_string(), "66.67");
        let score: SimilarityScore = serde_json::from_str("33.3333").unwrap();
        assert_eq!(score.value(), 33.33);
        let score: SimilarityScore = serde_json::from_str("100").unwrap();
        assert_eq!(score, SimilarityScore::IDENTICAL);
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&similarity(10, 11, 7).unwrap()).unwrap();
        assert_eq!(json, "66.67");
    }
}
