pub mod coin_change;
pub mod fibonacci;
pub mod knapsack;
pub mod lcs;

// Re-export the solvers and their result types with descriptive names
pub use coin_change::{solve_coin_change, CoinChangeSolution, US_COINS};
pub use fibonacci::{fibonacci_growth_curve, solve_fibonacci, FibonacciSolution, TraceEntry};
pub use knapsack::{solve_knapsack, Item, KnapsackSolution};
pub use lcs::{solve_lcs, LcsSolution};
