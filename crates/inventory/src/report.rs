//! Aggregate statistics over a set of items.

use serde::Serialize;

use crate::item::Item;

/// Point-in-time stock statistics, typically computed over the whole
/// catalog but usable on any slice of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockReport {
    /// Number of distinct catalog entries.
    pub distinct_items: usize,
    /// Units in stock summed across all entries.
    pub total_units: u64,
    /// Inventory value in smallest currency unit: the sum of price times
    /// quantity per entry.
    pub total_value: u64,
    /// Entries at or below the low-stock threshold, out-of-stock included.
    pub low_stock_items: usize,
}

impl StockReport {
    /// Totals saturate at `u64::MAX` instead of overflowing; registration
    /// accepts any price, so the arithmetic has to absorb extreme catalogs.
    pub fn compute(items: &[Item]) -> Self {
        let total_units = items.iter().fold(0u64, |sum, item| {
            sum.saturating_add(u64::from(item.quantity()))
        });
        let total_value = items.iter().fold(0u64, |sum, item| {
            sum.saturating_add(item.price().saturating_mul(u64::from(item.quantity())))
        });
        let low_stock_items = items.iter().filter(|item| item.is_low_stock()).count();

        Self {
            distinct_items: items.len(),
            total_units,
            total_value,
            low_stock_items,
        }
    }
}
