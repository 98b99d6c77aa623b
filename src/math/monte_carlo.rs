pub mod dice;
pub mod monte_carlo_integration;
