use std::collections::BTreeMap;
use std::fmt;

/// How many coins of each denomination make up an amount.
///
/// Denominations with a count of zero never appear. Two results are equal
/// when they use exactly the same coins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeResult {
    counts: BTreeMap<usize, usize>,
}

impl ChangeResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` coins of value `coin`. A zero count is ignored.
    pub fn add(&mut self, coin: usize, count: usize) {
        if count > 0 {
            *self.counts.entry(coin).or_insert(0) += count;
        }
    }

    /// Number of coins of value `coin` (zero if unused).
    pub fn count(&self, coin: usize) -> usize {
        self.counts.get(&coin).copied().unwrap_or(0)
    }

    pub fn total_coins(&self) -> usize {
        self.counts.values().sum()
    }

    /// The value the coins add up to.
    pub fn amount(&self) -> usize {
        self.counts.iter().map(|(coin, count)| coin * count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(denomination, count)` pairs, largest denomination first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().rev().map(|(&coin, &count)| (coin, count))
    }
}

impl FromIterator<(usize, usize)> for ChangeResult {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        let mut result = ChangeResult::new();
        for (coin, count) in iter {
            result.add(coin, count);
        }
        result
    }
}

impl fmt::Display for ChangeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(coin, count)| format!("{coin}: {count}"))
            .collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}
