use serde::{Deserialize, Serialize};
use crate::config::ThresholdConfig;
use crate::engine::SimilarityScore;

/// Classification of a similarity score against configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Below the suspicious threshold.
    Distinct,
    /// At or above `suspicious`, below `plagiarized`.
    Suspicious,
    /// At or above `plagiarized`.
    Plagiarized,
}

impl Verdict {
    pub fn from_score(score: SimilarityScore, thresholds: &ThresholdConfig) -> Self {
        let value = score.value();
        if value >= thresholds.plagiarized {
            Verdict::Plagiarized
        } else if value >= thresholds.suspicious {
            Verdict::Suspicious
        } else {
            Verdict::Distinct
        }
    }

    /// Only `Suspicious` and `Plagiarized` warrant a reviewer's attention.
    pub fn is_flagged(&self) -> bool {
        matches!(self, Verdict::Suspicious | Verdict::Plagiarized)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Distinct => "distinct",
            Verdict::Suspicious => "suspicious",
            Verdict::Plagiarized => "plagiarized",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::similarity;

    #[test]
    fn test_verdict_default_thresholds() {
        let t = ThresholdConfig::default();
        assert_eq!(Verdict::from_score(similarity(8, 8, 4).unwrap(), &t), Verdict::Suspicious);
        assert_eq!(Verdict::from_score(similarity(10, 10, 8).unwrap(), &t), Verdict::Plagiarized);
        assert_eq!(Verdict::from_score(similarity(10, 10, 1).unwrap(), &t), Verdict::Distinct);
    }

    #[test]
    fn test_verdict_boundary_is_inclusive() {
        let t = ThresholdConfig { suspicious: 40.0, plagiarized: 60.0 };
        assert_eq!(Verdict::from_score(similarity(5, 5, 3).unwrap(), &t), Verdict::Plagiarized);
        assert_eq!(Verdict::from_score(similarity(5, 5, 2).unwrap(), &t), Verdict::Suspicious);
    }

    #[test]
    fn test_is_flagged() {
        assert!(!Verdict::Distinct.is_flagged());
        assert!(Verdict::Suspicious.is_flagged());
        assert!(Verdict::Plagiarized.is_flagged());
    }

    #[test]
    fn test_verdict_serialization() {
        let json = serde_json::to_string(&Verdict::Plagiarized).unwrap();
        assert_eq!(json, "\"PLAGIARIZED\"");
    }
}
