//! Catalog items and their stock bookkeeping.

use serde::{Deserialize, Serialize};

use sweetshop_core::{DomainError, DomainResult, ItemId};

/// Items holding this many units or fewer count as running low.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Fixed assortment of confection categories carried by the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Chocolate,
    Candy,
    Pastry,
    Gummy,
    Lollipop,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 5] = [
        Category::Chocolate,
        Category::Candy,
        Category::Pastry,
        Category::Gummy,
        Category::Lollipop,
    ];

    /// Human-readable label, suitable for menus and shelf signs.
    pub fn label(self) -> &'static str {
        match self {
            Category::Chocolate => "Chocolate",
            Category::Candy => "Candy",
            Category::Pastry => "Pastry",
            Category::Gummy => "Gummy",
            Category::Lollipop => "Lollipop",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse stock indicator derived from an item's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    OutOfStock,
    Low,
    InStock,
}

/// A single catalog entry, the shop's unit of stock-keeping.
///
/// Fields are private: once registered, an item only changes through the
/// owning service, which keeps every mutation validated in one place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    category: Category,
    /// Price in smallest currency unit (e.g., cents).
    price: u64,
    quantity: u32,
    description: Option<String>,
    image: Option<String>,
}

impl Item {
    pub(crate) fn new(id: ItemId, draft: NewItem) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            price: draft.price,
            quantity: draft.quantity,
            description: draft.description,
            image: draft.image,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Price in smallest currency unit (e.g., cents).
    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }

    /// Whether the item sits at or below [`LOW_STOCK_THRESHOLD`].
    ///
    /// An out-of-stock item also counts as low; reports rely on that.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= LOW_STOCK_THRESHOLD
    }

    pub fn stock_level(&self) -> StockLevel {
        if self.quantity == 0 {
            StockLevel::OutOfStock
        } else if self.quantity <= LOW_STOCK_THRESHOLD {
            StockLevel::Low
        } else {
            StockLevel::InStock
        }
    }

    /// Remove `quantity` units from stock.
    ///
    /// Rejects the whole deduction when fewer units are available than
    /// requested; stock is never driven below zero and never partially
    /// deducted.
    pub(crate) fn deduct_stock(&mut self, quantity: u32) -> DomainResult<()> {
        if quantity > self.quantity {
            return Err(DomainError::insufficient_stock(self.quantity, quantity));
        }
        self.quantity -= quantity;
        Ok(())
    }

    /// Add `quantity` units to stock. There is no business upper bound.
    pub(crate) fn add_stock(&mut self, quantity: u32) {
        self.quantity = self.quantity.saturating_add(quantity);
    }

    /// Fold a partial update into the item. `None` fields stay untouched;
    /// the id is not part of the patch and can never change.
    pub(crate) fn merge(&mut self, patch: ItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(image) = patch.image {
            self.image = Some(image);
        }
    }
}

/// Payload for registering a new item: everything but the id, which the
/// service assigns on admission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub category: Category,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
    pub quantity: u32,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl NewItem {
    /// Check the draft before handing it to the service.
    ///
    /// Registration itself accepts any payload; rejecting bad input is the
    /// submitting side's job, and this is the check it runs.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(())
    }
}

/// Partial update for an existing item.
///
/// `None` fields are left unchanged. A description or image, once set, can
/// be replaced but not cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub category: Option<Category>,
    /// Price in smallest currency unit (e.g., cents).
    pub price: Option<u64>,
    pub quantity: Option<u32>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fudge(quantity: u32) -> Item {
        Item::new(
            ItemId::new(1),
            NewItem {
                name: "Vanilla Fudge".to_string(),
                category: Category::Candy,
                price: 320,
                quantity,
                description: Some("Hand-cut squares".to_string()),
                image: None,
            },
        )
    }

    #[test]
    fn categories_serialize_lowercase() {
        let json = serde_json::to_string(&Category::Chocolate).unwrap();
        assert_eq!(json, "\"chocolate\"");

        let parsed: Category = serde_json::from_str("\"gummy\"").unwrap();
        assert_eq!(parsed, Category::Gummy);
    }

    #[test]
    fn category_labels_read_like_shelf_signs() {
        assert_eq!(Category::Lollipop.label(), "Lollipop");
        assert_eq!(Category::Pastry.to_string(), "Pastry");
    }

    #[test]
    fn stock_level_boundaries() {
        assert_eq!(fudge(0).stock_level(), StockLevel::OutOfStock);
        assert_eq!(fudge(1).stock_level(), StockLevel::Low);
        assert_eq!(fudge(LOW_STOCK_THRESHOLD).stock_level(), StockLevel::Low);
        assert_eq!(
            fudge(LOW_STOCK_THRESHOLD + 1).stock_level(),
            StockLevel::InStock
        );
    }

    #[test]
    fn out_of_stock_still_counts_as_low() {
        let item = fudge(0);
        assert!(item.is_out_of_stock());
        assert!(item.is_low_stock());
    }

    #[test]
    fn deduct_stock_takes_exactly_the_requested_units() {
        let mut item = fudge(10);
        item.deduct_stock(3).unwrap();
        assert_eq!(item.quantity(), 7);
    }

    #[test]
    fn deduct_stock_can_empty_the_shelf() {
        let mut item = fudge(4);
        item.deduct_stock(4).unwrap();
        assert!(item.is_out_of_stock());
    }

    #[test]
    fn deduct_stock_rejects_overdraw_and_leaves_stock_untouched() {
        let mut item = fudge(2);
        let err = item.deduct_stock(5).unwrap_err();
        match err {
            DomainError::InsufficientStock {
                available,
                requested,
            } => {
                assert_eq!(available, 2);
                assert_eq!(requested, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(item.quantity(), 2);
    }

    #[test]
    fn add_stock_has_no_upper_bound_short_of_saturation() {
        let mut item = fudge(u32::MAX - 1);
        item.add_stock(10);
        assert_eq!(item.quantity(), u32::MAX);
    }

    #[test]
    fn merge_applies_only_provided_fields() {
        let mut item = fudge(10);
        item.merge(ItemPatch {
            price: Some(280),
            quantity: Some(12),
            ..ItemPatch::default()
        });
        assert_eq!(item.price(), 280);
        assert_eq!(item.quantity(), 12);
        assert_eq!(item.name(), "Vanilla Fudge");
        assert_eq!(item.category(), Category::Candy);
        assert_eq!(item.description(), Some("Hand-cut squares"));
    }

    #[test]
    fn merge_with_empty_patch_changes_nothing() {
        let mut item = fudge(10);
        let before = item.clone();
        item.merge(ItemPatch::default());
        assert_eq!(item, before);
    }

    #[test]
    fn validate_rejects_blank_names() {
        let draft = NewItem {
            name: "   ".to_string(),
            category: Category::Candy,
            price: 100,
            quantity: 1,
            description: None,
            image: None,
        };
        let err = draft.validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn validate_accepts_a_reasonable_draft() {
        let draft = NewItem {
            name: "Sherbet Lemons".to_string(),
            category: Category::Candy,
            price: 95,
            quantity: 40,
            description: None,
            image: None,
        };
        assert!(draft.validate().is_ok());
    }
}
