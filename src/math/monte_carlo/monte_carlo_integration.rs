use rand::Rng;

use crate::error::{Error, Result};

/// Sample sizes the `integrate` binary sweeps when none are given.
pub const DEFAULT_SAMPLE_SIZES: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];

/// A Monte Carlo estimate of a definite integral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationEstimate {
    pub value: f64,
    /// Standard error of `value`, shrinking as 1/√samples.
    pub std_error: f64,
    pub samples: usize,
}

impl IntegrationEstimate {
    /// Absolute distance from a known value of the integral.
    pub fn abs_error(&self, exact: f64) -> f64 {
        (self.value - exact).abs()
    }
}

fn validate_bounds(a: f64, b: f64, samples: usize) -> Result<()> {
    if samples == 0 {
        return Err(Error::InvalidSimulation(
            "at least one sample is required".to_string(),
        ));
    }
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(Error::InvalidSimulation(format!(
            "integration bounds must be finite with a < b, got [{a}, {b}]"
        )));
    }
    Ok(())
}

/// Performs Monte Carlo integration of `f` over `[a, b]` by averaging `f` at
/// `samples` uniformly drawn points.
///
/// # Examples
///
/// ```
/// use coinlab::math::monte_carlo::monte_carlo_integration::monte_carlo_integration;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(3);
/// let estimate = monte_carlo_integration(|x| x, 0.0, 1.0, 100_000, &mut rng).unwrap();
/// assert!(estimate.abs_error(0.5) < 0.01);
/// ```
pub fn monte_carlo_integration<F, R>(
    f: F,
    a: f64,
    b: f64,
    samples: usize,
    rng: &mut R,
) -> Result<IntegrationEstimate>
where
    F: Fn(f64) -> f64,
    R: Rng + ?Sized,
{
    validate_bounds(a, b, samples)?;

    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    for _ in 0..samples {
        let y = f(rng.gen_range(a..b));
        sum += y;
        sum_sq += y * y;
    }

    let n = samples as f64;
    let mean = sum / n;
    let variance = (sum_sq / n - mean * mean).max(0.0);
    Ok(IntegrationEstimate {
        value: (b - a) * mean,
        std_error: (b - a) * (variance / n).sqrt(),
        samples,
    })
}

/// Estimates the area under `f` on `[a, b]` by throwing points into the box
/// `[a, b] × [0, ceiling]` and counting the share that lands below the curve.
///
/// `f` must stay within `[0, ceiling]` on the interval; for an increasing
/// function `f(b)` is a suitable ceiling.
///
/// # Examples
///
/// ```
/// use coinlab::math::monte_carlo::monte_carlo_integration::hit_or_miss_integration;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(11);
/// let estimate = hit_or_miss_integration(|x| x * x, 0.0, 2.0, 4.0, 200_000, &mut rng).unwrap();
/// assert!(estimate.abs_error(8.0 / 3.0) < 0.05);
/// ```
pub fn hit_or_miss_integration<F, R>(
    f: F,
    a: f64,
    b: f64,
    ceiling: f64,
    samples: usize,
    rng: &mut R,
) -> Result<IntegrationEstimate>
where
    F: Fn(f64) -> f64,
    R: Rng + ?Sized,
{
    validate_bounds(a, b, samples)?;
    if !ceiling.is_finite() || ceiling <= 0.0 {
        return Err(Error::InvalidSimulation(format!(
            "ceiling must be positive and finite, got {ceiling}"
        )));
    }

    let mut hits = 0_usize;
    for _ in 0..samples {
        let x = rng.gen_range(a..b);
        let y = rng.gen_range(0.0..ceiling);
        if y < f(x) {
            hits += 1;
        }
    }

    let n = samples as f64;
    let area = (b - a) * ceiling;
    let hit_rate = hits as f64 / n;
    log::debug!("hit-or-miss integration: {hits} of {samples} points under the curve");

    Ok(IntegrationEstimate {
        value: hit_rate * area,
        std_error: (hit_rate * (1.0 - hit_rate) / n).sqrt() * area,
        samples,
    })
}

/// Exact ∫ x² dx over `[a, b]`, the reference the `integrate` binary checks
/// its estimates against.
pub fn integral_of_square(a: f64, b: f64) -> f64 {
    (b.powi(3) - a.powi(3)) / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_monte_carlo_integration() {
        // Integrate f(x) = x over [0,1]. The exact value is 0.5.
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = monte_carlo_integration(|x| x, 0.0, 1.0, 100_000, &mut rng).unwrap();
        assert!(result.abs_error(0.5) < 0.01);
        assert_eq!(result.samples, 100_000);
    }

    #[test]
    fn test_square_on_zero_two() {
        let exact = integral_of_square(0.0, 2.0);
        assert_relative_eq!(exact, 8.0 / 3.0, epsilon = 1e-12);

        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mean = monte_carlo_integration(|x| x * x, 0.0, 2.0, 200_000, &mut rng).unwrap();
        assert!(mean.abs_error(exact) < 0.05);
        assert!(mean.std_error > 0.0 && mean.std_error < 0.02);

        let hits = hit_or_miss_integration(|x| x * x, 0.0, 2.0, 4.0, 200_000, &mut rng).unwrap();
        assert!(hits.abs_error(exact) < 0.05);
        // sqrt(p(1-p)/n) * area with p = 1/3, n = 200k, area = 8.
        assert!(hits.std_error > 0.005 && hits.std_error < 0.012);
    }

    #[test]
    fn test_constant_function_is_exact() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let estimate = monte_carlo_integration(|_| 3.0, -1.0, 1.0, 1_000, &mut rng).unwrap();
        assert_relative_eq!(estimate.value, 6.0, epsilon = 1e-9);
        assert_relative_eq!(estimate.std_error, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_same_seed_same_estimate() {
        let first = hit_or_miss_integration(|x| x, 0.0, 1.0, 1.0, 1_000, &mut ChaCha8Rng::seed_from_u64(4));
        let second = hit_or_miss_integration(|x| x, 0.0, 1.0, 1.0, 1_000, &mut ChaCha8Rng::seed_from_u64(4));
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_parameters() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(matches!(
            monte_carlo_integration(|x| x, 0.0, 1.0, 0, &mut rng),
            Err(Error::InvalidSimulation(_))
        ));
        assert!(matches!(
            monte_carlo_integration(|x| x, 1.0, 1.0, 10, &mut rng),
            Err(Error::InvalidSimulation(_))
        ));
        assert!(matches!(
            monte_carlo_integration(|x| x, 0.0, f64::INFINITY, 10, &mut rng),
            Err(Error::InvalidSimulation(_))
        ));
        assert!(matches!(
            hit_or_miss_integration(|x| x, 0.0, 1.0, 0.0, 10, &mut rng),
            Err(Error::InvalidSimulation(_))
        ));
        assert!(matches!(
            hit_or_miss_integration(|x| x, 0.0, 1.0, f64::NAN, 10, &mut rng),
            Err(Error::InvalidSimulation(_))
        ));
    }
}
