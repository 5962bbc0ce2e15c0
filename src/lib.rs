pub mod error;
pub mod solvers;

pub use error::{Result, SolverError};
pub use solvers::{coin_change, fibonacci, knapsack, lcs};
