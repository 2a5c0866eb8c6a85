use chrono::{DateTime, Utc};
use tracing::warn;
use serde::{Deserialize, Serialize};
use crate::config::ThresholdConfig;
use crate::engine::{Comparison, SimilarityScore};
use super::verdict::Verdict;

/// Outcome of comparing one candidate document against an original.
///
/// `common_limit` in [`ComparisonReport::from_comparison`] is `None` when the
/// shared text is not wanted, otherwise the table cell cap for recovering it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub original: String,
    pub candidate: String,
    pub original_symbols: usize,
    pub candidate_symbols: usize,
    pub lcs_length: usize,
    pub similarity: SimilarityScore,
    pub verdict: Verdict,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common: Option<String>,
    pub compared_at: DateTime<Utc>,
}

impl ComparisonReport {
    pub fn from_comparison(
        original: impl Into<String>,
        candidate: impl Into<String>,
        comparison: &Comparison,
        thresholds: &ThresholdConfig,
        common_limit: Option<usize>,
    ) -> Self {
        let original = original.into();
        let candidate = candidate.into();

        // Shared text is best effort; an oversized table leaves it out
        let common = common_limit.and_then(|max_cells| match comparison.common(max_cells) {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(original = %original, candidate = %candidate, error = %e, "Omitting shared text");
                None
            }
        });

        Self {
            original,
            candidate,
            original_symbols: comparison.original.len(),
            candidate_symbols: comparison.candidate.len(),
            lcs_length: comparison.lcs_length,
            similarity: comparison.score,
            verdict: Verdict::from_score(comparison.score, thresholds),
            common,
            compared_at: Utc::now(),
        }
    }
}

/// One original compared against many candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub original: String,
    pub generated_at: DateTime<Utc>,
    pub results: Vec<ComparisonReport>,
}

impl BatchReport {
    /// Results are ordered by descending similarity, then candidate name.
    pub fn new(original: impl Into<String>, mut results: Vec<ComparisonReport>) -> Self {
        results.sort_by(|a, b| {
            b.similarity
                .value()
                .total_cmp(&a.similarity.value())
                .then_with(|| a.candidate.cmp(&b.candidate))
        });
        Self {
            original: original.into(),
            generated_at: Utc::now(),
            results,
        }
    }

    pub fn flagged(&self) -> usize {
        self.results.iter().filter(|r| r.verdict.is_flagged()).count()
    }
}
