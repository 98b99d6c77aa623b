use std::process::ExitCode;

use clap::Parser;
use coinlab::cs::change::{
    compare, compare_parallel, parse_amount, Denominations, DEFAULT_COMPARE_AMOUNTS,
};
use coinlab::cs::{greedy_change, min_coins_change};
use coinlab::Result;

/// Make change with the greedy and dynamic-programming solvers and compare them.
#[derive(Debug, Parser)]
#[command(name = "change", version, about, long_about = None)]
struct Cli {
    /// Amount to make change for (non-negative integer)
    #[arg(allow_hyphen_values = true)]
    amount: String,

    /// Comma-separated coin values
    #[arg(long, env = "COINLAB_DENOMINATIONS", default_value_t = Denominations::default())]
    denominations: Denominations,

    /// Also print a timing table for the sample amounts
    #[arg(long)]
    compare: bool,

    /// Sample amounts for --compare
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_COMPARE_AMOUNTS)]
    amounts: Vec<usize>,

    /// Run the --compare amounts on the rayon thread pool
    #[arg(long)]
    parallel: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let amount = parse_amount(&cli.amount)?;
    log::info!("making change for {amount} from {}", cli.denominations);

    let greedy = greedy_change(amount, &cli.denominations);
    let optimal = min_coins_change(amount, &cli.denominations);

    match &greedy {
        Ok(result) => println!("Greedy: {result} ({} coins)", result.total_coins()),
        Err(err) => println!("Greedy: {err}"),
    }
    match &optimal {
        Ok(result) => println!("DP:     {result} ({} coins)", result.total_coins()),
        Err(err) => println!("DP:     {err}"),
    }
    println!(
        "{}",
        if greedy == optimal { "match" } else { "mismatch" }
    );

    if cli.compare {
        let report = if cli.parallel {
            compare_parallel(&cli.amounts, &cli.denominations)
        } else {
            compare(&cli.amounts, &cli.denominations)
        };
        println!();
        print!("{report}");
    }

    // The DP solver only fails when no combination exists at all.
    optimal.map(|_| ())
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
