use crate::cs::knapsack::{Item, Selection};

/// Value per unit of cost; free items rank above everything else.
fn ratio(item: &Item) -> f64 {
    if item.cost == 0 {
        f64::INFINITY
    } else {
        item.value as f64 / item.cost as f64
    }
}

/// Fills the budget with the items of best value-per-cost first, skipping any
/// that no longer fit.
///
/// Runs in O(n log n) but is not optimal: on the sample menu with a budget of
/// 100 it spends 80 for 870 calories, while 970 is reachable.
///
/// # Examples
///
/// ```
/// use coinlab::cs::greedy::greedy_knapsack;
/// use coinlab::cs::knapsack::Item;
///
/// let items = vec![Item::new("a", 6, 30), Item::new("b", 5, 20), Item::new("c", 5, 20)];
/// let picked = greedy_knapsack(&items, 10);
/// assert_eq!(picked.indices, vec![0]);
/// assert_eq!(picked.total_value, 30);
/// ```
pub fn greedy_knapsack(items: &[Item], budget: usize) -> Selection {
    let mut order: Vec<usize> = (0..items.len()).collect();
    // Stable, so equal ratios keep input order.
    order.sort_by(|&a, &b| ratio(&items[b]).total_cmp(&ratio(&items[a])));

    let mut chosen = Vec::new();
    let mut spent = 0;
    for index in order {
        let cost = items[index].cost;
        if cost <= budget - spent {
            chosen.push(index);
            spent += cost;
        }
    }

    Selection::from_indices(items, chosen)
}
