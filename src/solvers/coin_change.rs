//! Minimum-coin change by bottom-up tabulation over amounts, with the
//! per-denomination usage recovered from a last-coin table.

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::error::{Result, SolverError};

/// United States coin denominations in cents: penny, nickel, dime, quarter.
pub const US_COINS: [usize; 4] = [1, 5, 10, 25];

/// Outcome of a coin change solve.
///
/// `min_coins` is `None` when no combination of the denominations reaches
/// the target. `counts` holds one entry per denomination, zero included, so
/// callers can render the full lineup. `table[a]` is the fewest coins that
/// make amount `a` (`table[0] == Some(0)`), and `last_coin[a]` is the final
/// coin of one optimal way to make `a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinChangeSolution {
    pub min_coins: Option<usize>,
    pub counts: BTreeMap<usize, usize>,
    pub table: Vec<Option<usize>>,
    pub last_coin: Vec<Option<usize>>,
}

/// Finds the fewest coins that make `target` from `denominations`.
///
/// Amounts are filled bottom-up, scanning denominations in caller order for
/// each amount. Only a strict improvement replaces a cell, so when several
/// denominations tie for the minimum at some amount, the one listed first
/// owns that amount's last-coin slot and thereby the reconstruction.
///
/// An unreachable target is an answer, not an error: `min_coins` comes back
/// `None` and every count stays zero.
///
/// Both tables hold `target + 1` entries, so the target alone sets the
/// memory bound.
///
/// # Errors
///
/// Returns [`SolverError::InvalidInput`] if any denomination is zero or
/// appears more than once.
///
/// # Examples
///
/// ```
/// use dpsolve::solvers::coin_change::{solve_coin_change, US_COINS};
///
/// let solution = solve_coin_change(&US_COINS, 23).unwrap();
/// assert_eq!(solution.min_coins, Some(5)); // two dimes, three pennies
/// assert_eq!(solution.counts[&10], 2);
/// assert_eq!(solution.counts[&1], 3);
///
/// let unreachable = solve_coin_change(&[5], 3).unwrap();
/// assert_eq!(unreachable.min_coins, None);
/// ```
pub fn solve_coin_change(denominations: &[usize], target: usize) -> Result<CoinChangeSolution> {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for &denomination in denominations {
        if denomination == 0 {
            return Err(SolverError::invalid_input(
                "denominations must be positive",
            ));
        }
        if counts.insert(denomination, 0).is_some() {
            return Err(SolverError::invalid_input(format!(
                "duplicate denomination {denomination}"
            )));
        }
    }

    debug!(
        "solving coin change: {} denominations, target {target}",
        denominations.len()
    );

    let mut table: Vec<Option<usize>> = vec![None; target + 1];
    let mut last_coin: Vec<Option<usize>> = vec![None; target + 1];
    table[0] = Some(0);

    for amount in 1..=target {
        for &denomination in denominations {
            if denomination > amount {
                continue;
            }
            if let Some(smaller) = table[amount - denomination] {
                let candidate = smaller + 1;
                // Strict improvement only: the earliest denomination
                // reaching the minimum keeps the last-coin slot.
                if table[amount].map_or(true, |best| candidate < best) {
                    table[amount] = Some(candidate);
                    last_coin[amount] = Some(denomination);
                }
            }
        }
    }

    let min_coins = table[target];
    if min_coins.is_some() {
        // Every last-coin entry points at a strictly smaller amount, so
        // this walk reaches zero.
        let mut amount = target;
        while let Some(denomination) = last_coin[amount] {
            trace!("using denomination {denomination} at amount {amount}");
            *counts.entry(denomination).or_default() += 1;
            amount -= denomination;
        }
    }

    Ok(CoinChangeSolution {
        min_coins,
        counts,
        table,
        last_coin,
    })
}
