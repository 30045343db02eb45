//! The inventory service, authoritative owner of the shop's catalog.

use sweetshop_core::{DomainError, DomainResult, ItemId};

use crate::item::{Item, ItemPatch, NewItem};
use crate::query::SearchFilter;
use crate::report::StockReport;

/// In-memory catalog with exclusive ownership of every registered item.
///
/// All operations are synchronous and act on the caller's single mutable
/// handle; callers needing shared access wrap the service themselves. Reads
/// hand out copies, so a returned [`Item`] never aliases live state.
#[derive(Debug)]
pub struct InventoryService {
    items: Vec<Item>,
    next_id: u64,
}

impl InventoryService {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Register a new item and return it with its assigned id.
    ///
    /// Ids come from a monotonic counter and are never reassigned, even
    /// after the item is deleted. Registration accepts any payload; drafts
    /// are vetted by the caller via [`NewItem::validate`].
    pub fn add(&mut self, draft: NewItem) -> Item {
        let item = Item::new(ItemId::new(self.next_id), draft);
        self.next_id += 1;
        self.items.push(item.clone());
        item
    }

    /// Remove the item with `id`, reporting whether anything was removed.
    pub fn delete(&mut self, id: ItemId) -> bool {
        match self.items.iter().position(|item| item.id() == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Fold `patch` into the item with `id` and return the updated item.
    ///
    /// Returns `None` when no item carries that id. `None` fields of the
    /// patch leave their counterparts untouched, and the id itself is not
    /// patchable.
    pub fn update(&mut self, id: ItemId, patch: ItemPatch) -> Option<Item> {
        let item = self.items.iter_mut().find(|item| item.id() == id)?;
        item.merge(patch);
        Some(item.clone())
    }

    /// Every item in registration order, as copies.
    pub fn get_all(&self) -> Vec<Item> {
        self.items.to_vec()
    }

    /// Look up a single item by id.
    pub fn get_by_id(&self, id: ItemId) -> Option<Item> {
        self.items.iter().find(|item| item.id() == id).cloned()
    }

    /// All items matching `filter`, in registration order.
    pub fn search(&self, filter: &SearchFilter) -> Vec<Item> {
        self.items
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect()
    }

    /// Take `quantity` units of the item with `id` off the shelf.
    ///
    /// Fails with [`DomainError::NotFound`] for an unknown id and with
    /// [`DomainError::InsufficientStock`] when the request exceeds the
    /// units available; a failed purchase changes nothing.
    pub fn purchase(&mut self, id: ItemId, quantity: u32) -> DomainResult<Item> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(DomainError::not_found(id))?;
        item.deduct_stock(quantity)?;
        Ok(item.clone())
    }

    /// Put `quantity` units of the item with `id` back on the shelf.
    ///
    /// Fails only for an unknown id; stock has no business upper bound.
    pub fn restock(&mut self, id: ItemId, quantity: u32) -> DomainResult<Item> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(DomainError::not_found(id))?;
        item.add_stock(quantity);
        Ok(item.clone())
    }

    /// Number of distinct items currently registered.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Stock statistics over the live catalog.
    pub fn report(&self) -> StockReport {
        StockReport::compute(&self.items)
    }
}

impl Default for InventoryService {
    fn default() -> Self {
        Self::new()
    }
}
