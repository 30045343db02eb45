//! Sample catalog the shopfront opens with.

use anyhow::Context;
use sweetshop_inventory::{Category, InventoryService, NewItem};

/// Register the demo assortment, validating each draft on the way in.
pub fn load_sample_catalog(shop: &mut InventoryService) -> anyhow::Result<()> {
    for draft in sample_items() {
        draft
            .validate()
            .with_context(|| format!("sample item {:?} failed validation", draft.name))?;
        let item = shop.add(draft);
        tracing::debug!(id = %item.id(), name = item.name(), "stocked sample item");
    }
    Ok(())
}

fn sample_items() -> Vec<NewItem> {
    vec![
        NewItem {
            name: "Dark Chocolate Bar".to_string(),
            category: Category::Chocolate,
            price: 350,
            quantity: 15,
            description: Some(
                "Rich 70% dark chocolate made with premium cocoa beans".to_string(),
            ),
            image: None,
        },
        NewItem {
            name: "Rainbow Gummy Bears".to_string(),
            category: Category::Gummy,
            price: 225,
            quantity: 30,
            description: Some(
                "Colorful fruit-flavored gummy bears in assorted flavors".to_string(),
            ),
            image: None,
        },
        NewItem {
            name: "Strawberry Lollipop".to_string(),
            category: Category::Lollipop,
            price: 150,
            quantity: 25,
            description: Some(
                "Sweet strawberry-flavored lollipop with a chewy center".to_string(),
            ),
            image: None,
        },
        NewItem {
            name: "Chocolate Croissant".to_string(),
            category: Category::Pastry,
            price: 475,
            quantity: 8,
            description: Some("Buttery croissant filled with rich chocolate".to_string()),
            image: None,
        },
        NewItem {
            name: "Peppermint Candy Canes".to_string(),
            category: Category::Candy,
            price: 75,
            quantity: 50,
            description: Some(
                "Classic red and white striped peppermint candy canes".to_string(),
            ),
            image: None,
        },
    ]
}
