//! Shared types for the 0/1 knapsack solvers in [`crate::cs::greedy::knapsack`]
//! and [`crate::cs::dynamic::knapsack`].

/// Something that can be bought once, for `cost`, yielding `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub cost: usize,
    pub value: usize,
}

impl Item {
    pub fn new(name: impl Into<String>, cost: usize, value: usize) -> Self {
        Self {
            name: name.into(),
            cost,
            value,
        }
    }
}

/// The items a solver picked, as indices into the input slice in ascending
/// order, with their combined value and cost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub indices: Vec<usize>,
    pub total_value: usize,
    pub total_cost: usize,
}

impl Selection {
    pub(crate) fn from_indices(items: &[Item], mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        let total_value = indices.iter().map(|&i| items[i].value).sum();
        let total_cost = indices.iter().map(|&i| items[i].cost).sum();
        Self {
            indices,
            total_value,
            total_cost,
        }
    }

    /// Names of the picked items, in input order.
    pub fn names<'a>(&self, items: &'a [Item]) -> Vec<&'a str> {
        self.indices
            .iter()
            .filter_map(|&i| items.get(i))
            .map(|item| item.name.as_str())
            .collect()
    }
}

/// The food menu (cost, calories) from the budgeted meal exercise.
pub fn sample_menu() -> Vec<Item> {
    vec![
        Item::new("pizza", 50, 300),
        Item::new("hamburger", 40, 250),
        Item::new("hot-dog", 30, 200),
        Item::new("pepsi", 10, 100),
        Item::new("cola", 15, 220),
        Item::new("potato", 25, 350),
    ]
}
