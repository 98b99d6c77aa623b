use std::fmt;
use std::time::{Duration, Instant};

use rayon::prelude::*;

use super::{ChangeResult, Denominations};
use crate::cs::dynamic::min_coins_change;
use crate::cs::greedy::greedy_change;
use crate::error::Result;

/// Sample amounts used when none are supplied.
pub const DEFAULT_COMPARE_AMOUNTS: [usize; 5] = [30, 113, 250, 1000, 5000];

/// One timed solver invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub outcome: Result<ChangeResult>,
    pub elapsed: Duration,
}

impl Run {
    fn time(solve: impl FnOnce() -> Result<ChangeResult>) -> Self {
        let start = Instant::now();
        let outcome = solve();
        Self {
            outcome,
            elapsed: start.elapsed(),
        }
    }

    /// Total coins used, or `None` if the solver failed.
    pub fn coins(&self) -> Option<usize> {
        self.outcome.as_ref().ok().map(ChangeResult::total_coins)
    }
}

/// Greedy and DP side by side for a single amount.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub amount: usize,
    pub greedy: Run,
    pub optimal: Run,
}

impl ComparisonRow {
    /// True when both solvers produced the same outcome, including the case
    /// where both report the amount as unrepresentable.
    pub fn matches(&self) -> bool {
        self.greedy.outcome == self.optimal.outcome
    }

    /// Coins greedy spends beyond the optimum, if both succeeded.
    pub fn excess_coins(&self) -> Option<usize> {
        let greedy = self.greedy.coins()?;
        let optimal = self.optimal.coins()?;
        Some(greedy.saturating_sub(optimal))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub denominations: Denominations,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonReport {
    /// Amounts where greedy and DP disagree.
    pub fn mismatches(&self) -> impl Iterator<Item = &ComparisonRow> {
        self.rows.iter().filter(|row| !row.matches())
    }

    pub fn all_match(&self) -> bool {
        self.rows.iter().all(ComparisonRow::matches)
    }
}

fn compare_amount(amount: usize, denominations: &Denominations) -> ComparisonRow {
    let greedy = Run::time(|| greedy_change(amount, denominations));
    let optimal = Run::time(|| min_coins_change(amount, denominations));
    let row = ComparisonRow {
        amount,
        greedy,
        optimal,
    };
    log::debug!(
        "amount {amount}: greedy {:?} coins in {:?}, dp {:?} coins in {:?}, match={}",
        row.greedy.coins(),
        row.greedy.elapsed,
        row.optimal.coins(),
        row.optimal.elapsed,
        row.matches()
    );
    row
}

/// Runs both solvers on every amount and records coin counts, timings and
/// whether the two agree.
///
/// # Examples
///
/// ```
/// use coinlab::cs::change::{compare, Denominations};
///
/// let report = compare(&[6, 7], &Denominations::new(&[1, 3, 4]).unwrap());
/// assert!(!report.rows[0].matches()); // greedy 4+1+1, dp 3+3
/// assert!(report.rows[1].matches()); // both 4+3
/// ```
pub fn compare(amounts: &[usize], denominations: &Denominations) -> ComparisonReport {
    let rows = amounts
        .iter()
        .map(|&amount| compare_amount(amount, denominations))
        .collect();
    ComparisonReport {
        denominations: denominations.clone(),
        rows,
    }
}

/// Same as [`compare`], spreading amounts across the rayon thread pool.
///
/// Rows keep the input order. Timings are taken per call, so they are
/// comparable within a row but include scheduling noise across rows.
pub fn compare_parallel(amounts: &[usize], denominations: &Denominations) -> ComparisonReport {
    let rows = amounts
        .par_iter()
        .map(|&amount| compare_amount(amount, denominations))
        .collect();
    ComparisonReport {
        denominations: denominations.clone(),
        rows,
    }
}

fn coins_cell(run: &Run) -> String {
    run.coins()
        .map_or_else(|| "n/a".to_string(), |coins| coins.to_string())
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Denominations: {}", self.denominations)?;
        writeln!(
            f,
            "{:<8} {:>14} {:>14} {:>12} {:>10} {:>6}",
            "Amount", "Greedy (ms)", "DP (ms)", "Coins Greedy", "Coins DP", "Match"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<8} {:>14.3} {:>14.3} {:>12} {:>10} {:>6}",
                row.amount,
                row.greedy.elapsed.as_secs_f64() * 1000.0,
                row.optimal.elapsed.as_secs_f64() * 1000.0,
                coins_cell(&row.greedy),
                coins_cell(&row.optimal),
                if row.matches() { "yes" } else { "no" }
            )?;
        }
        Ok(())
    }
}
