use crate::cs::change::{ChangeResult, Denominations};
use crate::error::{Error, Result};

/// One slot of the DP table, indexed by sub-amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Unreachable,
    /// Sub-amount 0: no coins.
    Base,
    /// Fewest `coins` reaching this sub-amount, the last of which is `coin`.
    Reached { coins: usize, coin: usize },
}

impl Entry {
    fn coins(self) -> Option<usize> {
        match self {
            Entry::Unreachable => None,
            Entry::Base => Some(0),
            Entry::Reached { coins, .. } => Some(coins),
        }
    }
}

/// Largest amount the DP solvers will build a table for.
pub const MAX_TABLE_AMOUNT: usize = 10_000_000;

/// Allocates `amount + 1` slots, failing instead of aborting when the table
/// cannot be held in memory.
pub(crate) fn allocate_table<T: Clone>(amount: usize, fill: T) -> Result<Vec<T>> {
    let too_large = Error::AmountTooLarge {
        amount,
        limit: MAX_TABLE_AMOUNT,
    };
    if amount > MAX_TABLE_AMOUNT {
        return Err(too_large);
    }
    let len = amount.checked_add(1).ok_or_else(|| too_large.clone())?;

    let mut table = Vec::new();
    table.try_reserve_exact(len).map_err(|_| too_large)?;
    table.resize(len, fill);
    Ok(table)
}

/// Fills `table[0..=amount]` bottom-up.
///
/// Denominations are tried in the set's order (largest first) and only a
/// strictly smaller count replaces the current best, so on ties the largest
/// denomination wins.
fn build_table(amount: usize, denominations: &Denominations) -> Result<Vec<Entry>> {
    let mut table = allocate_table(amount, Entry::Unreachable)?;
    table[0] = Entry::Base;

    for sub_amount in 1..=amount {
        let mut best = Entry::Unreachable;
        for coin in denominations.iter().filter(|&coin| coin <= sub_amount) {
            if let Some(prev) = table[sub_amount - coin].coins() {
                let candidate = prev + 1;
                if best.coins().map_or(true, |current| candidate < current) {
                    best = Entry::Reached {
                        coins: candidate,
                        coin,
                    };
                }
            }
        }
        table[sub_amount] = best;
    }

    log::trace!(
        "built coin change table of {} entries over {} denominations",
        table.len(),
        denominations.len()
    );
    Ok(table)
}

/// Computes the minimum number of coins needed to form the target `amount`.
///
/// This is the "unbounded" variant: each coin may be used any number of
/// times. Returns [`Error::Unrepresentable`] if no combination of `coins`
/// forms `amount`, and [`Error::AmountTooLarge`] above [`MAX_TABLE_AMOUNT`].
///
/// # Examples
///
/// ```
/// use coinlab::cs::change::Denominations;
/// use coinlab::cs::dynamic::min_coins_for_change;
///
/// // Minimum 3 coins: 6 + 6 + 6 = 18
/// let coins = Denominations::new(&[1, 6, 10]).unwrap();
/// assert_eq!(min_coins_for_change(18, &coins), Ok(3));
///
/// // Impossible to form 7 from [2,4]
/// let coins2 = Denominations::new(&[2, 4]).unwrap();
/// assert!(min_coins_for_change(7, &coins2).is_err());
/// ```
pub fn min_coins_for_change(amount: usize, coins: &Denominations) -> Result<usize> {
    build_table(amount, coins)?[amount]
        .coins()
        .ok_or(Error::Unrepresentable(amount))
}

/// Makes change for `amount` with the fewest possible coins.
///
/// Builds a table over every sub-amount `0..=amount`, where each entry keeps
/// the fewest coins reaching it and the denomination used last, then walks
/// those back-pointers from `amount` down to zero. Takes
/// O(amount × |denominations|) time and O(amount) space; the table is dropped
/// before returning.
///
/// When several mixes share the minimum count, the largest denomination is
/// preferred at every step, so `{3, 2, 1}` makes 4 as `3 + 1` rather than
/// `2 + 2`.
///
/// Returns [`Error::Unrepresentable`] if no combination forms `amount`; an
/// empty result only ever means `amount == 0`. Amounts above
/// [`MAX_TABLE_AMOUNT`] are rejected with [`Error::AmountTooLarge`] before
/// anything is allocated.
///
/// # Examples
///
/// ```
/// use coinlab::cs::change::Denominations;
/// use coinlab::cs::dynamic::min_coins_change;
///
/// let coins = Denominations::new(&[1, 3, 4]).unwrap();
/// let change = min_coins_change(6, &coins).unwrap();
/// assert_eq!(change.count(3), 2);
/// assert_eq!(change.total_coins(), 2);
/// ```
pub fn min_coins_change(amount: usize, denominations: &Denominations) -> Result<ChangeResult> {
    let table = build_table(amount, denominations)?;

    let mut result = ChangeResult::new();
    let mut cursor = amount;
    loop {
        match table[cursor] {
            Entry::Base => break,
            Entry::Reached { coin, .. } => {
                result.add(coin, 1);
                cursor -= coin;
            }
            Entry::Unreachable => {
                log::debug!("no combination of {denominations} forms {amount}");
                return Err(Error::Unrepresentable(amount));
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::greedy::greedy_change;

    #[test]
    fn test_min_coins_for_change() {
        let coins = Denominations::new(&[1, 6, 10]).unwrap();
        assert_eq!(min_coins_for_change(18, &coins), Ok(3));
        assert_eq!(min_coins_for_change(0, &coins), Ok(0));
        assert_eq!(min_coins_for_change(1, &coins), Ok(1));

        // Impossible case
        let coins2 = Denominations::new(&[2, 4]).unwrap();
        assert_eq!(
            min_coins_for_change(7, &coins2),
            Err(Error::Unrepresentable(7))
        );
    }

    #[test]
    fn test_zero_amount_is_empty() {
        let result = min_coins_change(0, &Denominations::default()).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.total_coins(), 0);
    }

    #[test]
    fn test_single_coin() {
        let result = min_coins_change(1, &Denominations::default()).unwrap();
        let expected: ChangeResult = [(1, 1)].into_iter().collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_113() {
        let coins = Denominations::default();
        let result = min_coins_change(113, &coins).unwrap();
        let expected: ChangeResult = [(50, 2), (10, 1), (2, 1), (1, 1)].into_iter().collect();
        assert_eq!(result, expected);
        assert_eq!(result.total_coins(), 5);
        assert_eq!(greedy_change(113, &coins).unwrap(), result);
    }

    #[test]
    fn test_beats_greedy_on_non_canonical_set() {
        let coins = Denominations::new(&[1, 3, 4]).unwrap();
        let optimal = min_coins_change(6, &coins).unwrap();
        let greedy = greedy_change(6, &coins).unwrap();

        let expected: ChangeResult = [(3, 2)].into_iter().collect();
        assert_eq!(optimal, expected);
        assert_eq!(optimal.total_coins(), 2);
        assert_eq!(greedy.total_coins(), 3);
    }

    #[test]
    fn test_unrepresentable() {
        let coins = Denominations::new(&[2, 5]).unwrap();
        assert_eq!(min_coins_change(3, &coins), Err(Error::Unrepresentable(3)));
        assert_eq!(min_coins_change(1, &coins), Err(Error::Unrepresentable(1)));
        // Reachable only by skipping the 5.
        let six = min_coins_change(6, &coins).unwrap();
        assert_eq!(six.count(2), 3);
    }

    #[test]
    fn test_tie_prefers_largest_denomination() {
        // 4 = 3 + 1 = 2 + 2, both two coins.
        let coins = Denominations::new(&[1, 2, 3]).unwrap();
        let result = min_coins_change(4, &coins).unwrap();
        let expected: ChangeResult = [(3, 1), (1, 1)].into_iter().collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_matches_greedy_on_canonical_set() {
        let coins = Denominations::default();
        for amount in 0..=1000 {
            let optimal = min_coins_change(amount, &coins).unwrap();
            let greedy = greedy_change(amount, &coins).unwrap();
            assert_eq!(optimal, greedy, "mismatch at amount {amount}");
        }
    }

    #[test]
    fn test_never_worse_than_greedy() {
        let sets: [&[usize]; 4] = [&[1, 3, 4], &[1, 5, 6, 9], &[1, 7, 10], &[2, 3, 7]];
        for values in sets {
            let coins = Denominations::new(values).unwrap();
            for amount in 0..=200 {
                let greedy = greedy_change(amount, &coins);
                match min_coins_change(amount, &coins) {
                    Ok(optimal) => {
                        assert_eq!(optimal.amount(), amount);
                        if let Ok(greedy) = greedy {
                            assert!(optimal.total_coins() <= greedy.total_coins());
                        }
                    }
                    Err(err) => {
                        assert_eq!(err, Error::Unrepresentable(amount));
                        // Greedy cannot succeed where no combination exists.
                        assert!(greedy.is_err());
                    }
                }
            }
        }
    }

    #[test]
    fn test_count_matches_extracted_result() {
        let coins = Denominations::new(&[1, 5, 6, 9]).unwrap();
        for amount in 0..=100 {
            let result = min_coins_change(amount, &coins).unwrap();
            assert_eq!(min_coins_for_change(amount, &coins), Ok(result.total_coins()));
        }
    }

    #[test]
    fn test_huge_amounts_are_rejected() {
        let coins = Denominations::default();
        let limit = MAX_TABLE_AMOUNT;
        for amount in [usize::MAX, 100_000_000_000, limit + 1] {
            assert_eq!(
                min_coins_change(amount, &coins),
                Err(Error::AmountTooLarge { amount, limit })
            );
            assert_eq!(
                min_coins_for_change(amount, &coins),
                Err(Error::AmountTooLarge { amount, limit })
            );
        }
    }

    #[test]
    fn test_allocate_table() {
        let table = allocate_table(3, 0_u8).unwrap();
        assert_eq!(table, vec![0, 0, 0, 0]);
        assert!(allocate_table(usize::MAX, 0_u8).is_err());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let coins = Denominations::new(&[1, 3, 4]).unwrap();
        let first = min_coins_change(37, &coins);
        let second = min_coins_change(37, &coins);
        assert_eq!(first, second);
    }
}
