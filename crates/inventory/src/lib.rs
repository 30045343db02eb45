//! Inventory domain module.
//!
//! This crate contains the business rules for the shop's catalog and stock,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). The [`InventoryService`] owns the catalog; [`query`] and
//! [`report`] operate on the snapshots it hands out.

pub mod item;
pub mod query;
pub mod report;
pub mod service;

pub use item::{Category, Item, ItemPatch, LOW_STOCK_THRESHOLD, NewItem, StockLevel};
pub use query::{SearchFilter, SortDirection, SortKey, sort_items};
pub use report::StockReport;
pub use service::InventoryService;
