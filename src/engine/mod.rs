//! Similarity engine
//!
//! raw text → [`normalize`] → [`NormalizedSequence`] → [`lcs_length`] →
//! [`similarity`] → [`SimilarityScore`]
//!
//! Every stage is a pure function of its inputs.
//!
//! # Example
//!
//! ```
//! use simcheck::engine::{compare_texts, SymbolFilter};
//!
//! let result = compare_texts("软件工程测试案例", "软件案例测试工程", &SymbolFilter::cjk()).unwrap();
//! assert_eq!(result.lcs_length, 4);
//! assert_eq!(result.score.to_string(), "50.00");
//! ```

pub mod normalizer;
pub mod lcs;
pub mod scorer;

pub use normalizer::{normalize, normalize_with, NormalizedSequence, SymbolFilter, SymbolPredicate};
pub use lcs::{lcs_length, table_cells, LcsTable};
pub use scorer::{similarity, SimilarityScore};

use crate::errors::SimcheckError;

/// Result of running the full pipeline on two documents.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub original: NormalizedSequence,
    pub candidate: NormalizedSequence,
    pub lcs_length: usize,
    pub score: SimilarityScore,
}

impl Comparison {
    /// One longest common subsequence, as text.
    ///
    /// Needs the full O(m × n) table; refused when it would exceed `max_cells`.
    pub fn common(&self, max_cells: usize) -> Result<String, SimcheckError> {
        let table = LcsTable::with_limit(self.original.as_slice(), self.candidate.as_slice(), max_cells)?;
        Ok(table.subsequence().into_iter().collect())
    }
}

pub fn compare_texts<P>(original: &str, candidate: &str, predicate: &P) -> Result<Comparison, SimcheckError>
where
    P: SymbolPredicate + ?Sized,
{
    compare_normalized(normalize_with(original, predicate), normalize_with(candidate, predicate))
}

/// Score two already-normalized sequences.
pub fn compare_normalized(
    original: NormalizedSequence,
    candidate: NormalizedSequence,
) -> Result<Comparison, SimcheckError> {
    let lcs = lcs_length(original.as_slice(), candidate.as_slice());
    let score = similarity(original.len(), candidate.len(), lcs)?;

    Ok(Comparison {
        original,
        candidate,
        lcs_length: lcs,
        score,
    })
}
