use std::process::ExitCode;

use clap::Parser;
use coinlab::cs::knapsack::{sample_menu, Item, Selection};
use coinlab::cs::{greedy_knapsack, knapsack_01};
use coinlab::Result;

/// Pick the most calories from the sample menu within a budget, greedily and
/// optimally.
#[derive(Debug, Parser)]
#[command(name = "knapsack", version, about, long_about = None)]
struct Cli {
    /// Money available
    #[arg(long, default_value_t = 100)]
    budget: usize,
}

fn print_selection(title: &str, selection: &Selection, menu: &[Item]) {
    println!("{title}");
    println!("Selected: {:?}", selection.names(menu));
    println!("Calories: {}", selection.total_value);
    println!("Cost: {}\n", selection.total_cost);
}

fn run(cli: &Cli) -> Result<()> {
    let menu = sample_menu();
    println!("BUDGET: {}\n", cli.budget);

    print_selection("GREEDY ALGORITHM", &greedy_knapsack(&menu, cli.budget), &menu);
    print_selection("DYNAMIC PROGRAMMING", &knapsack_01(&menu, cli.budget)?, &menu);
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
