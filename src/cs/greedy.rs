pub mod coin_change;
pub mod knapsack;

pub use coin_change::greedy_change;
pub use knapsack::greedy_knapsack;
