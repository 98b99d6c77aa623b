//! Monte Carlo estimate of the distribution of the sum of two fair dice.
//!
//! [`simulate_two_dice`] rolls the pair many times and turns the observed
//! frequencies into probabilities; [`analytical_distribution`] gives the exact
//! values those estimates converge to as the number of rolls grows.

use rand::Rng;

use crate::error::{Error, Result};

/// Faces on a standard die.
pub const DIE_FACES: usize = 6;

/// Rolls used by the `dice` binary when none are requested.
pub const DEFAULT_ROLLS: u64 = 200_000;

/// Largest die the simulation accepts; keeps the tally and `faces²` in range.
pub const MAX_FACES: usize = 1_000_000;

fn validate_faces(faces: usize) -> Result<()> {
    if faces == 0 {
        return Err(Error::InvalidSimulation(
            "a die needs at least one face".to_string(),
        ));
    }
    if faces > MAX_FACES {
        return Err(Error::InvalidSimulation(format!(
            "a die may have at most {MAX_FACES} faces, got {faces}"
        )));
    }
    Ok(())
}

/// Observed frequencies of every possible sum of two dice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceSimulation {
    faces: usize,
    rolls: u64,
    /// `counts[i]` is how often the sum `i + 2` came up.
    counts: Vec<u64>,
}

/// Simulated and exact probability of one sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityRow {
    pub sum: usize,
    pub simulated: f64,
    pub analytical: f64,
}

impl ProbabilityRow {
    pub fn difference(&self) -> f64 {
        (self.simulated - self.analytical).abs()
    }
}

impl DiceSimulation {
    pub fn faces(&self) -> usize {
        self.faces
    }

    pub fn rolls(&self) -> u64 {
        self.rolls
    }

    /// Smallest and largest reachable sums.
    pub fn sums(&self) -> std::ops::RangeInclusive<usize> {
        2..=2 * self.faces
    }

    /// How often `sum` was rolled; zero for sums outside the reachable range.
    pub fn count(&self, sum: usize) -> u64 {
        sum.checked_sub(2)
            .and_then(|index| self.counts.get(index))
            .copied()
            .unwrap_or(0)
    }

    /// `(sum, count)` for every reachable sum.
    pub fn counts(&self) -> Vec<(usize, u64)> {
        self.sums().map(|sum| (sum, self.count(sum))).collect()
    }

    /// Observed frequency of `sum` divided by the number of rolls.
    pub fn probability(&self, sum: usize) -> f64 {
        self.count(sum) as f64 / self.rolls as f64
    }

    pub fn probabilities(&self) -> Vec<(usize, f64)> {
        self.sums()
            .map(|sum| (sum, self.probability(sum)))
            .collect()
    }

    /// Simulated vs. exact probability for every reachable sum.
    pub fn compare(&self) -> Vec<ProbabilityRow> {
        let faces = self.faces as f64;
        self.sums()
            .map(|sum| ProbabilityRow {
                sum,
                simulated: self.probability(sum),
                analytical: ways_to_roll(sum, self.faces) / (faces * faces),
            })
            .collect()
    }

    /// Largest absolute gap between simulated and exact probabilities.
    pub fn max_abs_error(&self) -> f64 {
        self.compare()
            .iter()
            .map(ProbabilityRow::difference)
            .fold(0.0, f64::max)
    }
}

/// Ordered face pairs that add up to `sum`.
fn ways_to_roll(sum: usize, faces: usize) -> f64 {
    let peak = faces + 1;
    let distance = sum.abs_diff(peak);
    faces.saturating_sub(distance) as f64
}

/// Rolls two `faces`-sided dice `rolls` times and tallies each sum.
///
/// # Examples
///
/// ```
/// use coinlab::math::monte_carlo::dice::{simulate_two_dice, DIE_FACES};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let simulation = simulate_two_dice(10_000, DIE_FACES, &mut rng).unwrap();
/// let total: u64 = simulation.counts().iter().map(|&(_, count)| count).sum();
/// assert_eq!(total, 10_000);
/// assert!(simulation.max_abs_error() < 0.02);
/// ```
pub fn simulate_two_dice<R: Rng + ?Sized>(
    rolls: u64,
    faces: usize,
    rng: &mut R,
) -> Result<DiceSimulation> {
    validate_faces(faces)?;
    if rolls == 0 {
        return Err(Error::InvalidSimulation(
            "at least one roll is required".to_string(),
        ));
    }

    let mut counts = vec![0_u64; 2 * faces - 1];
    for _ in 0..rolls {
        let first = rng.gen_range(1..=faces);
        let second = rng.gen_range(1..=faces);
        counts[first + second - 2] += 1;
    }
    log::debug!("rolled two {faces}-sided dice {rolls} times");

    Ok(DiceSimulation {
        faces,
        rolls,
        counts,
    })
}

/// Exact probability of every sum of two fair `faces`-sided dice.
///
/// Of the `faces²` equally likely outcomes, `faces - |sum - (faces + 1)|`
/// produce a given sum, so for six-sided dice 7 is the most likely at 6/36.
///
/// # Examples
///
/// ```
/// use coinlab::math::monte_carlo::dice::analytical_distribution;
///
/// let distribution = analytical_distribution(6).unwrap();
/// assert_eq!(distribution.len(), 11);
/// assert_eq!(distribution[5], (7, 6.0 / 36.0));
/// ```
pub fn analytical_distribution(faces: usize) -> Result<Vec<(usize, f64)>> {
    validate_faces(faces)?;
    let outcomes = (faces * faces) as f64;
    Ok((2..=2 * faces)
        .map(|sum| (sum, ways_to_roll(sum, faces) / outcomes))
        .collect())
}
