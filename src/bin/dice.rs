use std::process::ExitCode;

use clap::Parser;
use coinlab::math::monte_carlo::dice::{simulate_two_dice, DiceSimulation, DEFAULT_ROLLS, DIE_FACES};
use coinlab::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Estimate the distribution of two-dice sums by simulation.
#[derive(Debug, Parser)]
#[command(name = "dice", version, about, long_about = None)]
struct Cli {
    /// Number of times to roll the pair
    #[arg(long, env = "COINLAB_ROLLS", default_value_t = DEFAULT_ROLLS)]
    rolls: u64,

    /// Faces per die
    #[arg(long, default_value_t = DIE_FACES)]
    faces: usize,

    /// Seed for a reproducible run; uses the thread RNG when omitted
    #[arg(long, env = "COINLAB_SEED")]
    seed: Option<u64>,
}

fn print_report(simulation: &DiceSimulation) {
    println!("\nMONTE CARLO SIMULATION ({} rolls)\n", simulation.rolls());
    for (sum, count) in simulation.counts() {
        println!("{sum:>3}: {count}");
    }

    println!("\nProbability Comparison (Monte Carlo vs Analytical)\n");
    println!(
        "{:<5} {:<20} {:<15} {}",
        "Sum", "MC Probability", "Analytical", "Difference"
    );
    println!("{}", "-".repeat(50));
    for row in simulation.compare() {
        println!(
            "{:<5} {:<20.6} {:<15.6} {:.6}",
            row.sum,
            row.simulated,
            row.analytical,
            row.difference()
        );
    }
    println!("\nLargest difference: {:.6}", simulation.max_abs_error());
}

fn run(cli: &Cli) -> Result<()> {
    let simulation = match cli.seed {
        Some(seed) => {
            log::info!("seeding simulation with {seed}");
            simulate_two_dice(cli.rolls, cli.faces, &mut ChaCha8Rng::seed_from_u64(seed))?
        }
        None => simulate_two_dice(cli.rolls, cli.faces, &mut rand::thread_rng())?,
    };
    print_report(&simulation);
    Ok(())
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
