//! Longest Common Subsequence
//!
//! # Recurrence
//! `cell(i, j) = cell(i-1, j-1) + 1` when `a[i-1] == b[j-1]`,
//! otherwise `max(cell(i-1, j), cell(i, j-1))`. Row 0 and column 0 are zero.
//!
//! # Time Complexity
//! O(m × n)
//!
//! # Space Complexity
//! - [`lcs_length`]: O(min(m, n)), two rolling rows
//! - [`LcsTable`]: O(m × n), full row-major table, needed to recover the
//!   subsequence itself

use crate::errors::SimcheckError;

/// Length of the longest common subsequence of `a` and `b`.
///
/// Equality is exact element equality. Either input may be empty.
///
/// # Example
/// ```
/// use simcheck::engine::lcs_length;
///
/// let a: Vec<char> = "软件工程真有趣".chars().collect();
/// let b: Vec<char> = "软件工程不容易".chars().collect();
/// assert_eq!(lcs_length(&a, &b), 4);
/// ```
pub fn lcs_length<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // Keep the shorter sequence on the inner axis
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let n = inner.len();

    if n == 0 {
        return 0;
    }

    let mut prev: Vec<usize> = vec![0; n + 1];
    let mut curr: Vec<usize> = vec![0; n + 1];

    for x in outer {
        for j in 1..=n {
            curr[j] = if *x == inner[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Full DP table in a flat row-major arena of `(m + 1) × (n + 1)` cells.
///
/// Cells hold `u32`; a cell never exceeds `min(m, n)`, and [`LcsTable::with_limit`]
/// keeps the table far below `u32::MAX` symbols per side.
pub struct LcsTable<'a, T> {
    a: &'a [T],
    b: &'a [T],
    cells: Vec<u32>,
}

/// Number of cells a table for inputs of length `m` and `n` needs, if it fits in `usize`.
pub fn table_cells(m: usize, n: usize) -> Option<usize> {
    (m + 1).checked_mul(n + 1)
}

impl<'a, T: PartialEq> LcsTable<'a, T> {
    /// Build the table only when it needs at most `max_cells` cells.
    pub fn with_limit(a: &'a [T], b: &'a [T], max_cells: usize) -> Result<Self, SimcheckError> {
        match table_cells(a.len(), b.len()) {
            Some(cells) if cells <= max_cells => Ok(Self::new(a, b)),
            _ => Err(SimcheckError::Input(format!(
                "LCS table for {} x {} symbols exceeds the {} cell limit",
                a.len(),
                b.len(),
                max_cells
            ))),
        }
    }

    /// Build the table unconditionally. Prefer [`LcsTable::with_limit`] for untrusted input.
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        let width = b.len() + 1;
        let mut cells = vec![0u32; (a.len() + 1) * width];

        for i in 1..=a.len() {
            for j in 1..=b.len() {
                cells[i * width + j] = if a[i - 1] == b[j - 1] {
                    cells[(i - 1) * width + (j - 1)] + 1
                } else {
                    cells[(i - 1) * width + j].max(cells[i * width + (j - 1)])
                };
            }
        }

        Self { a, b, cells }
    }

    #[inline]
    pub fn cell(&self, i: usize, j: usize) -> usize {
        self.cells[i * (self.b.len() + 1) + j] as usize
    }

    pub fn length(&self) -> usize {
        self.cell(self.a.len(), self.b.len())
    }

    /// Recover one longest common subsequence by walking back from `(m, n)`.
    ///
    /// Ties prefer dropping from `a` (moving up a row).
    pub fn subsequence(&self) -> Vec<&'a T> {
        let mut out = Vec::with_capacity(self.length());
        let (mut i, mut j) = (self.a.len(), self.b.len());

        while i > 0 && j > 0 {
            if self.a[i - 1] == self.b[j - 1] {
                out.push(&self.a[i - 1]);
                i -= 1;
                j -= 1;
            } else if self.cell(i - 1, j) >= self.cell(i, j - 1) {
                i -= 1;
            } else {
                j -= 1;
            }
        }

        out.reverse();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn is_subsequence(needle: &[char], haystack: &[char]) -> bool {
        let mut it = haystack.iter();
        needle.iter().all(|c| it.any(|h| h == c))
    }

    #[test]
    fn test_lcs_length() {
        // Empty inputs
        assert_eq!(lcs_length(&chars(""), &chars("")), 0);
        assert_eq!(lcs_length(&chars(""), &chars("非空")), 0);
        assert_eq!(lcs_length(&chars("非空"), &chars("")), 0);

        // Identity
        let s = chars("中文相似度检测");
        assert_eq!(lcs_length(&s, &s), 7);

        // Disjoint
        assert_eq!(lcs_length(&chars("天地玄黄"), &chars("宇宙洪荒")), 0);

        // Shared prefix
        assert_eq!(lcs_length(&chars("软件工程真有趣"), &chars("软件工程不容易")), 4);

        // Classic example
        assert_eq!(lcs_length(&chars("ABCBDAB"), &chars("BDCABA")), 4);
    }

    #[test]
    fn test_lcs_reordered_blocks() {
        let a = chars("软件工程测试案例");
        let b = chars("软件案例测试工程");
        assert_eq!(lcs_length(&a, &b), 4);
    }

    #[test]
    fn test_lcs_symmetry() {
        let pairs = [
            ("ABCBDAB", "BDCABA"),
            ("软件工程测试案例", "软件案例测试工程"),
            ("a", "aaaa"),
            ("xyz", ""),
        ];
        for (a, b) in pairs {
            let (a, b) = (chars(a), chars(b));
            assert_eq!(lcs_length(&a, &b), lcs_length(&b, &a));
        }
    }

    #[test]
    fn test_lcs_bounded_by_shorter() {
        let a = chars("aaaaab");
        let b = chars("ab");
        let lcs = lcs_length(&a, &b);
        assert_eq!(lcs, 2);
        assert!(lcs <= a.len().min(b.len()));
    }

    #[test]
    fn test_table_matches_rolling_rows() {
        let pairs = [
            ("ABCBDAB", "BDCABA"),
            ("软件工程真有趣", "软件工程不容易"),
            ("", "abc"),
            ("abcabcabc", "cbacbacba"),
        ];
        for (a, b) in pairs {
            let (a, b) = (chars(a), chars(b));
            let table = LcsTable::new(&a, &b);
            assert_eq!(table.length(), lcs_length(&a, &b));
        }
    }

    #[test]
    fn test_table_base_row_and_column_are_zero() {
        let a = chars("abc");
        let b = chars("abd");
        let table = LcsTable::new(&a, &b);
        for i in 0..=a.len() {
            assert_eq!(table.cell(i, 0), 0);
        }
        for j in 0..=b.len() {
            assert_eq!(table.cell(0, j), 0);
        }
        assert_eq!(table.cell(2, 2), 2);
    }

    #[test]
    fn test_subsequence_recovery() {
        let a = chars("软件工程真有趣");
        let b = chars("软件工程不容易");
        let table = LcsTable::new(&a, &b);
        let common: String = table.subsequence().into_iter().collect();
        assert_eq!(common, "软件工程");
    }

    #[test]
    fn test_subsequence_is_common_and_longest() {
        let a = chars("ABCBDAB");
        let b = chars("BDCABA");
        let table = LcsTable::new(&a, &b);
        let common: Vec<char> = table.subsequence().into_iter().copied().collect();
        assert_eq!(common.len(), 4);
        assert!(is_subsequence(&common, &a));
        assert!(is_subsequence(&common, &b));
    }

    #[test]
    fn test_with_limit_refuses_oversized_table() {
        // 100k symbols per side would need ~10^10 cells
        let a = vec!['软'; 100_000];
        let b = vec!['软'; 100_000];
        let err = LcsTable::with_limit(&a, &b, 1_000_000).err().unwrap();
        assert!(matches!(err, SimcheckError::Input(_)));
        assert!(err.to_string().contains("100000 x 100000"));
    }

    #[test]
    fn test_with_limit_counts_base_row_and_column() {
        let a = chars("abc");
        let b = chars("abd");
        // (3 + 1) * (3 + 1) = 16 cells
        assert!(LcsTable::with_limit(&a, &b, 15).is_err());
        assert_eq!(LcsTable::with_limit(&a, &b, 16).unwrap().length(), 2);
    }

    #[test]
    fn test_table_cells_overflow() {
        assert_eq!(table_cells(2, 3), Some(12));
        assert_eq!(table_cells(usize::MAX - 1, 2), None);
    }

    #[test]
    fn test_subsequence_empty_when_disjoint() {
        let a = chars("天地玄黄");
        let b = chars("宇宙洪荒");
        assert!(LcsTable::new(&a, &b).subsequence().is_empty());
    }
}
