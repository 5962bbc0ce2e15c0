//! 0/1 knapsack by bottom-up tabulation, with the chosen item set
//! reconstructed by backtracking the finished table.

use std::collections::HashSet;

use log::{debug, trace};
use ndarray::Array2;

use crate::error::{Result, SolverError};

/// A candidate object for the knapsack.
///
/// `id` is caller-assigned and must be unique within one solve; `weight` and
/// `value` must both be positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub weight: usize,
    pub value: u64,
}

impl Item {
    /// Creates a new `Item`. Validation happens in [`solve_knapsack`], which
    /// sees the whole catalog at once.
    pub fn new<S: Into<String>>(id: u32, name: S, weight: usize, value: u64) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
            value,
        }
    }
}

/// Outcome of a knapsack solve: the best value, the chosen items and the
/// full table for visualization.
///
/// `table` has shape `(items + 1, capacity + 1)`; row 0 and column 0 are
/// zero and `table[[i, w]]` is the best value achievable with the first `i`
/// items within capacity `w`, so `max_value == table[[n, capacity]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnapsackSolution {
    pub max_value: u64,
    pub selected: Vec<Item>,
    pub table: Array2<u64>,
}

/// Solves 0/1 knapsack over `items` with the given `capacity`.
///
/// Classic tabulation: each item is taken at most once. On a value tie the
/// "don't take" branch wins, so an item that cannot improve the optimum is
/// never part of the selection. `selected` preserves the original item
/// order, its weights sum to at most `capacity` and its values sum to
/// exactly `max_value`.
///
/// The table costs `O(items.len() * capacity)` cells; both factors are under
/// the caller's control.
///
/// # Errors
///
/// Returns [`SolverError::InvalidInput`] if any item has zero weight or zero
/// value, or if two items share an id. Rejection happens before the table is
/// allocated.
///
/// # Examples
///
/// ```
/// use dpsolve::solvers::knapsack::{solve_knapsack, Item};
///
/// let items = vec![
///     Item::new(1, "Ring", 1, 100),
///     Item::new(2, "Watch", 4, 40),
///     Item::new(3, "Camera", 2, 20),
/// ];
/// let solution = solve_knapsack(&items, 5).unwrap();
/// assert_eq!(solution.max_value, 140); // ring + watch
/// assert_eq!(solution.selected.len(), 2);
/// ```
pub fn solve_knapsack(items: &[Item], capacity: usize) -> Result<KnapsackSolution> {
    let mut seen_ids = HashSet::new();
    for item in items {
        if item.weight == 0 {
            return Err(SolverError::invalid_input(format!(
                "item {} ({}) has zero weight, weights must be positive",
                item.id, item.name
            )));
        }
        if item.value == 0 {
            return Err(SolverError::invalid_input(format!(
                "item {} ({}) has zero value, values must be positive",
                item.id, item.name
            )));
        }
        if !seen_ids.insert(item.id) {
            return Err(SolverError::invalid_input(format!(
                "duplicate item id {}",
                item.id
            )));
        }
    }

    let n = items.len();
    debug!("solving 0/1 knapsack: {n} items, capacity {capacity}");

    let mut table = Array2::<u64>::zeros((n + 1, capacity + 1));
    for i in 1..=n {
        let item = &items[i - 1];
        for w in 1..=capacity {
            table[[i, w]] = if item.weight <= w {
                // Best of leaving the item vs. taking it.
                table[[i - 1, w]].max(table[[i - 1, w - item.weight]] + item.value)
            } else {
                table[[i - 1, w]]
            };
        }
    }

    // Walk the table upward: a cell differing from the row above means the
    // row's item was taken. Equal cells (ties) read as "not taken".
    let mut selected = Vec::new();
    let mut w = capacity;
    let mut i = n;
    while i > 0 && w > 0 {
        if table[[i, w]] != table[[i - 1, w]] {
            let item = &items[i - 1];
            trace!("item {} taken with {w} capacity remaining", item.id);
            selected.push(item.clone());
            w -= item.weight;
        }
        i -= 1;
    }
    selected.reverse();

    let max_value = table[[n, capacity]];
    Ok(KnapsackSolution {
        max_value,
        selected,
        table,
    })
}
