//! Longest common subsequence of two strings, with the match positions
//! recovered by backtracking the finished table.

use log::debug;
use ndarray::Array2;

/// Outcome of an LCS solve: one longest common subsequence, its length, the
/// full table and the positions it was stitched from.
///
/// `table` has shape `(first_len + 1, second_len + 1)` over characters; row 0
/// and column 0 are zero and `length == table[[first_len, second_len]]`.
/// `path` lists one `(i, j)` character-index pair per subsequence character,
/// with both coordinates strictly increasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsSolution {
    pub lcs: String,
    pub length: usize,
    pub table: Array2<usize>,
    pub path: Vec<(usize, usize)>,
}

/// Computes a longest common subsequence of `first` and `second`.
///
/// Standard tabulation over characters, so multi-byte text is handled per
/// character rather than per byte. When several subsequences share the
/// maximum length, the backtrack resolves ties toward consuming characters
/// of `second` first, which keeps the result deterministic.
///
/// The table costs `O(first_len * second_len)` cells.
///
/// # Examples
///
/// ```
/// use dpsolve::solvers::lcs::solve_lcs;
///
/// let solution = solve_lcs("AGGTAB", "GXTXAYB");
/// assert_eq!(solution.lcs, "GTAB");
/// assert_eq!(solution.length, 4);
/// ```
pub fn solve_lcs(first: &str, second: &str) -> LcsSolution {
    let a: Vec<char> = first.chars().collect();
    let b: Vec<char> = second.chars().collect();
    let m = a.len();
    let n = b.len();
    debug!("solving lcs over {m} x {n} characters");

    let mut table = Array2::<usize>::zeros((m + 1, n + 1));
    for i in 1..=m {
        for j in 1..=n {
            table[[i, j]] = if a[i - 1] == b[j - 1] {
                table[[i - 1, j - 1]] + 1
            } else {
                table[[i - 1, j]].max(table[[i, j - 1]])
            };
        }
    }

    // Backtrack from the far corner; ties between up and left go left.
    let mut subsequence = Vec::new();
    let mut path = Vec::new();
    let mut i = m;
    let mut j = n;
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            subsequence.push(a[i - 1]);
            path.push((i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if table[[i - 1, j]] > table[[i, j - 1]] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    subsequence.reverse();
    path.reverse();

    LcsSolution {
        lcs: subsequence.into_iter().collect(),
        length: table[[m, n]],
        table,
        path,
    }
}
