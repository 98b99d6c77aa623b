pub mod change;
pub mod dynamic;
pub mod greedy;
pub mod knapsack;

// Re-export the solvers and their shared types
pub use change::{compare, parse_amount, ChangeResult, ComparisonReport, Denominations};
pub use dynamic::{knapsack_01, min_coins_change, min_coins_for_change};
pub use greedy::{greedy_change, greedy_knapsack};
pub use knapsack::{Item, Selection};
