use crate::cs::change::{ChangeResult, Denominations};
use crate::error::{Error, Result};

/// Makes change for `amount` by always taking as many of the largest
/// remaining coin as fit.
///
/// Runs in a single pass over the denominations. The result always sums to
/// `amount`, but it is only guaranteed to use the fewest coins when the set is
/// canonical (as `{50, 25, 10, 5, 2, 1}` is). For `{4, 3, 1}` and an amount of
/// 6 it picks `4 + 1 + 1` instead of `3 + 3`.
///
/// Returns [`Error::Unrepresentable`] if something is left over once every
/// denomination has been tried, which can only happen when `1` is not in the
/// set.
///
/// # Examples
///
/// ```
/// use coinlab::cs::change::Denominations;
/// use coinlab::cs::greedy::greedy_change;
///
/// let coins = Denominations::default();
/// let change = greedy_change(113, &coins).unwrap();
/// assert_eq!(change.count(50), 2);
/// assert_eq!(change.total_coins(), 5);
///
/// let odd = Denominations::new(&[2, 5]).unwrap();
/// assert!(greedy_change(3, &odd).is_err());
/// ```
pub fn greedy_change(amount: usize, denominations: &Denominations) -> Result<ChangeResult> {
    if amount > 0 && amount < denominations.smallest() {
        log::debug!("greedy change for {amount} is below every coin in {denominations}");
        return Err(Error::Unrepresentable(amount));
    }

    let mut result = ChangeResult::new();
    let mut remaining = amount;

    for coin in denominations.iter() {
        if remaining == 0 {
            break;
        }
        let count = remaining / coin;
        remaining -= count * coin;
        result.add(coin, count);
    }

    if remaining > 0 {
        log::debug!(
            "greedy change for {amount} stuck with {remaining} left over using {denominations}"
        );
        return Err(Error::Unrepresentable(amount));
    }

    Ok(result)
}
