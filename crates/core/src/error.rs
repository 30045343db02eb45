//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures. Absence on plain
/// reads/deletes is signalled through `Option`/`bool` return values instead;
/// only the stock transactions (purchase/restock) raise errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed caller-side validation (e.g. an empty item name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A stock transaction referenced an id with no live item.
    #[error("item {id} not found")]
    NotFound { id: ItemId },

    /// A purchase asked for more units than are in stock.
    #[error("insufficient stock. Available: {available}, Requested: {requested}")]
    InsufficientStock { available: u32, requested: u32 },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(id: ItemId) -> Self {
        Self::NotFound { id }
    }

    pub fn insufficient_stock(available: u32, requested: u32) -> Self {
        Self::InsufficientStock { available, requested }
    }
}
