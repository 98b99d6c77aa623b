use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use coinlab::math::monte_carlo::monte_carlo_integration::{
    hit_or_miss_integration, integral_of_square, DEFAULT_SAMPLE_SIZES,
};
use coinlab::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Estimate the integral of x² over [a, b] by Monte Carlo and compare it with
/// the exact value.
#[derive(Debug, Parser)]
#[command(name = "integrate", version, about, long_about = None)]
struct Cli {
    /// Lower bound
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    a: f64,

    /// Upper bound
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    b: f64,

    /// Comma-separated sample sizes to sweep
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SAMPLE_SIZES)]
    samples: Vec<usize>,

    /// Seed for a reproducible run; uses the thread RNG when omitted
    #[arg(long, env = "COINLAB_SEED")]
    seed: Option<u64>,
}

fn sweep<R: Rng + ?Sized>(cli: &Cli, rng: &mut R) -> Result<()> {
    let square = |x: f64| x * x;
    let exact = integral_of_square(cli.a, cli.b);
    let ceiling = square(cli.a).max(square(cli.b));

    println!("INTEGRAL f(x) = x² from {} to {}", cli.a, cli.b);
    println!("Analytical value: {exact:.6}\n");
    println!(
        "{:<10} {:<12} {:<14} {:<12} {}",
        "N", "Integral", "Std. Error", "Abs. Error", "Time (ms)"
    );

    for &samples in &cli.samples {
        let start = Instant::now();
        let estimate = hit_or_miss_integration(square, cli.a, cli.b, ceiling, samples, rng)?;
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;
        println!(
            "{:<10} {:<12.6} {:<14.6} {:<12.6} {:.1}",
            samples,
            estimate.value,
            estimate.std_error,
            estimate.abs_error(exact),
            elapsed
        );
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    match cli.seed {
        Some(seed) => {
            log::info!("seeding integration with {seed}");
            sweep(cli, &mut ChaCha8Rng::seed_from_u64(seed))
        }
        None => sweep(cli, &mut rand::thread_rng()),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
