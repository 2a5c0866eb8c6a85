//! Character-level document similarity for plagiarism detection.
//!
//! Text is reduced to its significant symbols, the longest common
//! subsequence of the two reductions is measured, and the result is scored
//! as `200 * lcs / (len_a + len_b)` rounded to two decimals.

pub mod cli;
pub mod config;
pub mod documents;
pub mod engine;
pub mod errors;
pub mod models;
pub mod reporting;
