use thiserror::Error;

/// Errors produced by the solvers and the Monte Carlo experiments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The amount was negative or not an integer.
    #[error("invalid amount {0:?}: expected a non-negative integer")]
    InvalidAmount(String),

    /// No non-negative combination of the denominations sums to the amount.
    #[error("amount {0} cannot be made from the given denominations")]
    Unrepresentable(usize),

    /// The amount is too large to build a table of sub-amounts for.
    #[error("amount {amount} is too large to tabulate (limit {limit})")]
    AmountTooLarge {
        /// The requested amount.
        amount: usize,
        /// Largest amount the table-based solvers accept.
        limit: usize,
    },

    /// The denomination set was empty or held a non-positive or repeated value.
    #[error("invalid denomination set: {0}")]
    InvalidDenominationSet(String),

    /// Simulation parameters that cannot produce a distribution.
    #[error("invalid simulation: {0}")]
    InvalidSimulation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
