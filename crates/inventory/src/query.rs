//! Catalog queries: filtering and ordering over item snapshots.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::item::{Category, Item};

/// Optional predicates over the catalog, combined with AND.
///
/// Absent fields impose no constraint, so the empty filter matches every
/// item. Price bounds are inclusive on both ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    /// Case-insensitive substring match on the item name.
    pub name: Option<String>,
    /// Exact category match.
    pub category: Option<Category>,
    /// Lowest acceptable price in smallest currency unit, inclusive.
    pub min_price: Option<u64>,
    /// Highest acceptable price in smallest currency unit, inclusive.
    pub max_price: Option<u64>,
}

impl SearchFilter {
    /// Match every item whose name contains `needle`, ignoring case.
    pub fn by_name(needle: impl Into<String>) -> Self {
        Self {
            name: Some(needle.into()),
            ..Self::default()
        }
    }

    /// Match every item in `category`.
    pub fn by_category(category: Category) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    /// Match every item priced within `[min, max]`, in smallest currency
    /// unit.
    pub fn by_price_range(min: u64, max: u64) -> Self {
        Self {
            min_price: Some(min),
            max_price: Some(max),
            ..Self::default()
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        if let Some(needle) = &self.name {
            if !item
                .name()
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        if let Some(category) = self.category {
            if item.category() != category {
                return false;
            }
        }
        if let Some(min_price) = self.min_price {
            if item.price() < min_price {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if item.price() > max_price {
                return false;
            }
        }
        true
    }
}

/// Field a result sequence can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Price,
    Quantity,
}

/// Direction of an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Return a new sequence holding `items` ordered by `key`; the input slice
/// is left untouched.
///
/// Names compare case-insensitively, prices and quantities numerically.
/// Descending order negates the ascending comparator over a stable sort, so
/// equal elements keep their relative input order in both directions.
pub fn sort_items(items: &[Item], key: SortKey, direction: SortDirection) -> Vec<Item> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_by(key, a, b);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

fn compare_by(key: SortKey, a: &Item, b: &Item) -> Ordering {
    match key {
        SortKey::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
        SortKey::Price => a.price().cmp(&b.price()),
        SortKey::Quantity => a.quantity().cmp(&b.quantity()),
    }
}
