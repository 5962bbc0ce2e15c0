//! Memoized Fibonacci evaluation that records every resolved call.

use log::debug;

use crate::error::{Result, SolverError};

/// Largest `n` for which F(n) still fits in a `u64`; F(94) overflows.
pub const MAX_N: usize = 93;

/// One resolved call of the memoized recursion.
///
/// `step` equals the entry's position in the trace, starting at 0, so steps
/// are strictly increasing in append order. The description distinguishes
/// base cases, memo hits and fresh computations, which is all a caller needs
/// to replay the recursion one step at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    pub step: usize,
    pub value: u64,
    pub description: String,
}

/// The value of F(n) together with the trace of every resolved call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FibonacciSolution {
    pub value: u64,
    pub trace: Vec<TraceEntry>,
}

/// Computes F(`n`) by memoized recursion and records the full call trace.
///
/// The memo and the trace are allocated fresh for each invocation, so two
/// calls with the same `n` produce equal solutions. `fib(n - 1)` resolves
/// completely before `fib(n - 2)` starts, and a memo hit records a single
/// trace entry instead of descending into its subtree again. With the memo
/// in place the call tree is linear: the trace has `2n - 1` entries for
/// `n >= 1`.
///
/// # Errors
///
/// Returns [`SolverError::InvalidInput`] if `n` exceeds [`MAX_N`].
///
/// # Examples
///
/// ```
/// use dpsolve::solvers::fibonacci::solve_fibonacci;
///
/// let solution = solve_fibonacci(10).unwrap();
/// assert_eq!(solution.value, 55);
/// assert_eq!(solution.trace.len(), 19);
/// ```
pub fn solve_fibonacci(n: usize) -> Result<FibonacciSolution> {
    if n > MAX_N {
        return Err(SolverError::invalid_input(format!(
            "n = {n} is out of range, F(n) only fits in a u64 for n <= {MAX_N}"
        )));
    }
    debug!("solving fibonacci for n = {n}");

    let mut memo: Vec<Option<u64>> = vec![None; n + 1];
    let mut trace = Vec::new();
    let value = fib(n, &mut memo, &mut trace);
    Ok(FibonacciSolution { value, trace })
}

/// Evaluates F(0) through F(`n`) as independent invocations and returns one
/// `(k, F(k))` point per index, suitable for plotting the growth of the
/// sequence.
///
/// Every point comes from its own [`solve_fibonacci`] call with a fresh
/// memo; nothing is shared between points.
///
/// # Errors
///
/// Returns [`SolverError::InvalidInput`] if `n` exceeds [`MAX_N`].
///
/// # Examples
///
/// ```
/// use dpsolve::solvers::fibonacci::fibonacci_growth_curve;
///
/// let curve = fibonacci_growth_curve(5).unwrap();
/// assert_eq!(curve, vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 3), (5, 5)]);
/// ```
pub fn fibonacci_growth_curve(n: usize) -> Result<Vec<(usize, u64)>> {
    if n > MAX_N {
        return Err(SolverError::invalid_input(format!(
            "n = {n} is out of range, F(n) only fits in a u64 for n <= {MAX_N}"
        )));
    }

    let mut points = Vec::with_capacity(n + 1);
    for k in 0..=n {
        let solution = solve_fibonacci(k)?;
        points.push((k, solution.value));
    }
    Ok(points)
}

fn fib(n: usize, memo: &mut [Option<u64>], trace: &mut Vec<TraceEntry>) -> u64 {
    if n <= 1 {
        let value = n as u64;
        record(trace, value, format!("Base case fib({n}) = {value}"));
        return value;
    }

    if let Some(value) = memo[n] {
        record(trace, value, format!("Retrieved fib({n}) = {value} from memo"));
        return value;
    }

    // Left subtree resolves fully before the right one consults the memo.
    let value = fib(n - 1, memo, trace) + fib(n - 2, memo, trace);
    memo[n] = Some(value);
    record(trace, value, format!("Computed fib({n}) = {value}"));
    value
}

fn record(trace: &mut Vec<TraceEntry>, value: u64, description: String) {
    trace.push(TraceEntry {
        step: trace.len(),
        value,
        description,
    });
}
