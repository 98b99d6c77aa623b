use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The coin set used when the caller does not supply one.
pub const DEFAULT_DENOMINATIONS: [usize; 6] = [50, 25, 10, 5, 2, 1];

/// A validated, immutable set of coin values.
///
/// Values are distinct and positive, and are kept in descending order so
/// that both solvers walk them largest-first.
///
/// # Examples
///
/// ```
/// use coinlab::cs::change::Denominations;
///
/// let coins = Denominations::new(&[1, 4, 3]).unwrap();
/// assert_eq!(coins.as_slice(), &[4, 3, 1]);
/// assert!(Denominations::new(&[]).is_err());
/// assert!(Denominations::new(&[5, 0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denominations {
    values: Vec<usize>,
}

impl Denominations {
    /// Builds a set from arbitrary-order values.
    ///
    /// Fails with [`Error::InvalidDenominationSet`] if `values` is empty,
    /// contains a zero, or repeats a value.
    pub fn new(values: &[usize]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::InvalidDenominationSet(
                "at least one denomination is required".to_string(),
            ));
        }
        if values.contains(&0) {
            return Err(Error::InvalidDenominationSet(
                "denominations must be positive".to_string(),
            ));
        }

        let mut sorted = values.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(Error::InvalidDenominationSet(format!(
                "denomination {} appears more than once",
                pair[0]
            )));
        }

        Ok(Self { values: sorted })
    }

    /// Values in descending order.
    pub fn as_slice(&self) -> &[usize] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn smallest(&self) -> usize {
        // Non-empty by construction.
        self.values[self.values.len() - 1]
    }
}

impl Default for Denominations {
    fn default() -> Self {
        Self {
            values: DEFAULT_DENOMINATIONS.to_vec(),
        }
    }
}

impl FromStr for Denominations {
    type Err = Error;

    /// Parses a comma-separated list such as `"50,25,10,5,2,1"`. The braces
    /// written by `Display` are accepted too.
    fn from_str(s: &str) -> Result<Self> {
        let list = s.trim();
        let list = list
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .unwrap_or(list);

        let mut values = Vec::new();
        for part in list.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let value: i64 = part.parse().map_err(|_| {
                Error::InvalidDenominationSet(format!("{part:?} is not an integer"))
            })?;
            if value <= 0 {
                return Err(Error::InvalidDenominationSet(format!(
                    "denominations must be positive, got {value}"
                )));
            }
            let value = usize::try_from(value).map_err(|_| {
                Error::InvalidDenominationSet(format!("{value} is too large"))
            })?;
            values.push(value);
        }
        Self::new(&values)
    }
}

impl fmt::Display for Denominations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.values.iter().map(ToString::to_string).collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}

/// Parses a textual amount, rejecting negative or non-integer input.
///
/// # Examples
///
/// ```
/// use coinlab::cs::change::parse_amount;
///
/// assert_eq!(parse_amount("113"), Ok(113));
/// assert!(parse_amount("-5").is_err());
/// assert!(parse_amount("2.5").is_err());
/// ```
pub fn parse_amount(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    let value: i128 = trimmed
        .parse()
        .map_err(|_| Error::InvalidAmount(trimmed.to_string()))?;
    usize::try_from(value).map_err(|_| Error::InvalidAmount(trimmed.to_string()))
}
