use anyhow::Context;
use sweetshop_inventory::InventoryService;

fn main() -> anyhow::Result<()> {
    sweetshop_observability::init_with_default("info,sweetshop_shopfront=debug");

    let mut shop = InventoryService::new();
    sweetshop_shopfront::seed::load_sample_catalog(&mut shop)
        .context("failed to stock the sample catalog")?;
    tracing::info!(items = shop.len(), "shop open");

    sweetshop_shopfront::tour::run(&mut shop)?;

    // Closing snapshot of the catalog, machine-readable.
    println!("{}", serde_json::to_string_pretty(&shop.get_all())?);

    Ok(())
}
