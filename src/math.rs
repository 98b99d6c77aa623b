pub mod monte_carlo;

pub use monte_carlo::dice::{
    analytical_distribution, simulate_two_dice, DiceSimulation, ProbabilityRow, DEFAULT_ROLLS,
    DIE_FACES, MAX_FACES,
};
pub use monte_carlo::monte_carlo_integration::{
    hit_or_miss_integration, integral_of_square, monte_carlo_integration, IntegrationEstimate,
    DEFAULT_SAMPLE_SIZES,
};
