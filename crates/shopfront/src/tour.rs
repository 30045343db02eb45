//! Scripted walk through one trading day, touching every service operation.

use anyhow::Context;
use sweetshop_inventory::{
    Category, InventoryService, Item, ItemPatch, NewItem, SearchFilter, SortDirection, SortKey,
    sort_items,
};

/// Run the full day: browse, sell, restock, relabel, discontinue.
pub fn run(shop: &mut InventoryService) -> anyhow::Result<()> {
    if shop.is_empty() {
        tracing::warn!("catalog is empty, nothing to tour");
        return Ok(());
    }

    log_stocktake(shop);

    browse(shop);
    serve_customers(shop)?;
    afternoon_delivery(shop)?;
    evening_housekeeping(shop)?;

    log_stocktake(shop);
    Ok(())
}

/// Render a price held in smallest currency unit as dollars.
pub fn format_price(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

fn log_stocktake(shop: &InventoryService) {
    let report = shop.report();
    tracing::info!(
        items = report.distinct_items,
        units = report.total_units,
        value = %format_price(report.total_value),
        low_stock = report.low_stock_items,
        "stocktake"
    );
}

fn browse(shop: &InventoryService) {
    let chocolate = shop.search(&SearchFilter::by_name("chocolate"));
    tracing::info!(hits = chocolate.len(), "window shoppers ask for chocolate");

    let pocket_money = shop.search(&SearchFilter {
        max_price: Some(200),
        ..SearchFilter::default()
    });
    for item in &pocket_money {
        tracing::info!(
            name = item.name(),
            price = %format_price(item.price()),
            "on the pocket-money shelf"
        );
    }

    let display = sort_items(&shop.get_all(), SortKey::Price, SortDirection::Descending);
    if let Some(flagship) = display.first() {
        tracing::info!(
            name = flagship.name(),
            price = %format_price(flagship.price()),
            "front of the window display"
        );
    }
}

fn serve_customers(shop: &mut InventoryService) -> anyhow::Result<()> {
    let bar = find(shop, "Dark Chocolate Bar")?;
    let bar = shop
        .purchase(bar.id(), 3)
        .context("selling three chocolate bars")?;
    tracing::info!(name = bar.name(), remaining = bar.quantity(), "purchase complete");

    // A birthday order far bigger than the croissant tray.
    let croissant = find(shop, "Chocolate Croissant")?;
    if let Err(err) = shop.purchase(croissant.id(), 20) {
        tracing::warn!(name = croissant.name(), %err, "purchase refused");
    }
    let croissant = shop
        .get_by_id(croissant.id())
        .context("croissant left the catalog")?;
    tracing::info!(
        name = croissant.name(),
        quantity = croissant.quantity(),
        "tray unchanged after the refusal"
    );

    // The tray still sells down to empty over the afternoon.
    let croissant = shop
        .purchase(croissant.id(), croissant.quantity())
        .context("selling out the croissant tray")?;
    tracing::info!(
        name = croissant.name(),
        level = ?croissant.stock_level(),
        "sold out"
    );

    Ok(())
}

fn afternoon_delivery(shop: &mut InventoryService) -> anyhow::Result<()> {
    let report = shop.report();
    tracing::info!(low_stock = report.low_stock_items, "checking shelves before the delivery");

    for item in shop.get_all() {
        if item.is_low_stock() {
            let refilled = shop
                .restock(item.id(), 24)
                .with_context(|| format!("restocking {}", item.name()))?;
            tracing::info!(
                name = refilled.name(),
                quantity = refilled.quantity(),
                "shelf refilled"
            );
        }
    }
    Ok(())
}

fn evening_housekeeping(shop: &mut InventoryService) -> anyhow::Result<()> {
    // Price rise on the lollipops.
    let lollipop = find(shop, "Strawberry Lollipop")?;
    let lollipop = shop
        .update(
            lollipop.id(),
            ItemPatch {
                price: Some(175),
                ..ItemPatch::default()
            },
        )
        .context("repricing the lollipops")?;
    tracing::info!(
        name = lollipop.name(),
        price = %format_price(lollipop.price()),
        "price updated"
    );

    // A new seasonal line, vetted before it reaches the shelf.
    let draft = NewItem {
        name: "Salted Caramel Fudge".to_string(),
        category: Category::Candy,
        price: 395,
        quantity: 20,
        description: Some("Soft fudge squares with flaked sea salt".to_string()),
        image: None,
    };
    draft.validate().context("seasonal draft failed validation")?;
    let fudge = shop.add(draft);
    tracing::info!(
        name = fudge.name(),
        category = %fudge.category(),
        id = %fudge.id(),
        "seasonal line added"
    );

    // A blank form never makes it that far.
    let sloppy_draft = NewItem {
        name: "   ".to_string(),
        category: Category::Candy,
        price: 100,
        quantity: 5,
        description: None,
        image: None,
    };
    if let Err(err) = sloppy_draft.validate() {
        tracing::warn!(%err, "draft rejected at the counter");
    }

    // The candy canes are done for the season.
    let canes = find(shop, "Candy Canes")?;
    let retired_id = canes.id();
    if shop.delete(retired_id) {
        tracing::info!(name = canes.name(), "discontinued");
    }
    if let Err(err) = shop.purchase(retired_id, 1) {
        tracing::warn!(%err, "late request for a discontinued line");
    }

    Ok(())
}

fn find(shop: &InventoryService, name: &str) -> anyhow::Result<Item> {
    shop.search(&SearchFilter::by_name(name))
        .into_iter()
        .next()
        .with_context(|| format!("{name} missing from the catalog"))
}
