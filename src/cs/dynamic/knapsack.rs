use crate::cs::dynamic::coin_change::allocate_table;
use crate::cs::knapsack::{Item, Selection};
use crate::error::Result;

/// Picks the subset of `items` with the greatest total value whose cost fits
/// in `budget`, each item used at most once.
///
/// `table[i][c]` holds the best value using the first `i` items with budget
/// `c`; the selection is recovered by walking back from `table[n][budget]`
/// and taking every item whose row changed the value. O(n × budget) time and
/// space. Budgets above [`crate::cs::dynamic::MAX_TABLE_AMOUNT`] fail with
/// [`crate::Error::AmountTooLarge`].
///
/// # Examples
///
/// ```
/// use coinlab::cs::dynamic::knapsack_01;
/// use coinlab::cs::knapsack::sample_menu;
///
/// let menu = sample_menu();
/// let picked = knapsack_01(&menu, 100).unwrap();
/// assert_eq!(picked.names(&menu), vec!["pizza", "pepsi", "cola", "potato"]);
/// assert_eq!(picked.total_value, 970);
/// ```
pub fn knapsack_01(items: &[Item], budget: usize) -> Result<Selection> {
    let mut table = Vec::with_capacity(items.len() + 1);
    table.push(allocate_table(budget, 0_usize)?);

    for (i, item) in items.iter().enumerate() {
        let prev = &table[i];
        let mut row = allocate_table(budget, 0_usize)?;
        for c in 0..=budget {
            row[c] = if item.cost > c {
                prev[c]
            } else {
                prev[c].max(prev[c - item.cost].saturating_add(item.value))
            };
        }
        table.push(row);
    }

    let mut chosen = Vec::new();
    let mut c = budget;
    for i in (1..=items.len()).rev() {
        if table[i][c] != table[i - 1][c] {
            chosen.push(i - 1);
            c -= items[i - 1].cost;
        }
    }
    log::debug!(
        "knapsack over {} items with budget {budget} picked {:?}",
        items.len(),
        chosen
    );

    Ok(Selection::from_indices(items, chosen))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::dynamic::MAX_TABLE_AMOUNT;
    use crate::cs::greedy::greedy_knapsack;
    use crate::cs::knapsack::sample_menu;
    use crate::error::Error;

    /// Best value over every subset, for small inputs.
    fn exhaustive_best(items: &[Item], budget: usize) -> usize {
        (0_u32..1 << items.len())
            .filter_map(|mask| {
                let picked = items
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, item)| item);
                let (cost, value) = picked.fold((0, 0), |(c, v), item| (c + item.cost, v + item.value));
                (cost <= budget).then_some(value)
            })
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn test_sample_menu_beats_greedy() {
        let menu = sample_menu();
        let optimal = knapsack_01(&menu, 100).unwrap();
        let greedy = greedy_knapsack(&menu, 100);

        assert_eq!(optimal.indices, vec![0, 3, 4, 5]);
        assert_eq!(optimal.total_value, 970);
        assert_eq!(optimal.total_cost, 100);
        assert_eq!(greedy.total_value, 870);
    }

    #[test]
    fn test_matches_exhaustive_search() {
        let menu = sample_menu();
        for budget in 0..=180 {
            let optimal = knapsack_01(&menu, budget).unwrap();
            assert!(optimal.total_cost <= budget);
            assert_eq!(optimal.total_value, exhaustive_best(&menu, budget));
            assert!(optimal.total_value >= greedy_knapsack(&menu, budget).total_value);
        }
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(knapsack_01(&[], 50).unwrap(), Selection::default());
        assert_eq!(knapsack_01(&sample_menu(), 0).unwrap(), Selection::default());
    }

    #[test]
    fn test_huge_budget_is_rejected() {
        let menu = sample_menu();
        assert_eq!(
            knapsack_01(&menu, usize::MAX),
            Err(Error::AmountTooLarge {
                amount: usize::MAX,
                limit: MAX_TABLE_AMOUNT
            })
        );
    }
}
