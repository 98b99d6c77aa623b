pub mod coin_change;
pub mod knapsack;

// Re-export dynamic programming algorithms with descriptive names
pub use coin_change::{min_coins_change, min_coins_for_change, MAX_TABLE_AMOUNT};
pub use knapsack::knapsack_01;
