//! # Take-out Shop Demo
//!
//! Opens a shop from `TAKEOUT_*` environment variables, places a few orders on
//! different floors, waits until each one is delivered and closes the shop again.

use std::sync::Arc;
use takeout_shop::lifecycle::setup_tracing;
use takeout_shop::menu::{CatalogSource, HttpCatalog, JsonFileCatalog};
use takeout_shop::model::{Address, Dish, DishKind, OrderStatus};
use takeout_shop::receipt::JsonFileWriter;
use takeout_shop::{Shop, ShopConfig, ShopError};
use tracing::{info, warn, Instrument};

fn catalog_source(location: &str) -> Box<dyn CatalogSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpCatalog::new(location))
    } else {
        Box::new(JsonFileCatalog::new(location))
    }
}

fn house_specials() -> Vec<Dish> {
    vec![
        Dish::new("Margherita", true, 850, 11.0).with_kind(DishKind::Other),
        Dish::new("Grilled Salmon", false, 520, 16.5).with_kind(DishKind::Fish),
        Dish::new("Lentil Soup", true, 310, 6.0).with_kind(DishKind::Other),
        Dish::new("Pork Belly Bao", false, 640, 9.5).with_kind(DishKind::Meat),
    ]
}

#[tokio::main]
async fn main() -> Result<(), ShopError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = ShopConfig::from_env()?;
    let source = catalog_source(&config.catalog_url);
    let writer = Arc::new(JsonFileWriter::new(config.receipt_dir.clone()));
    info!(catalog = %config.catalog_url, receipts = %writer.dir().display(), "Starting take-out shop");
    let shop = Shop::start(&config, source.as_ref(), writer).await;

    let mut menu = shop.get_menu().await?;
    if menu.is_empty() {
        warn!("Menu is empty, serving house specials");
        shop.add_menu_items(house_specials()).await?;
        menu = shop.get_menu().await?;
    }

    let light = shop.partition_by_calorie_limit(600).await?;
    info!(
        within = light.within_limit.len(),
        over = light.over_limit.len(),
        "Calorie partition at 600"
    );

    // Place one order per floor, each with a different slice of the menu
    let mut orders = Vec::new();
    for floor in 1..=3u32 {
        let span = tracing::info_span!("order_placement", floor);
        let order = async {
            let start = (floor as usize - 1).min(menu.len().saturating_sub(1));
            let end = (start + 2).min(menu.len());
            let dishes = Shop::slice(&menu, start, end)?;
            info!(items = dishes.len(), "Placing order");
            shop.place_order(Address::new(2, floor, 10 + floor), dishes).await
        }
        .instrument(span)
        .await?;
        orders.push(order);
    }

    for order in &orders {
        let status = order.wait_for(OrderStatus::Delivered).await;
        info!(ack_id = %order.ack_id, %status, "Order finished");
    }

    shop.shutdown().await?;
    info!("Application finished successfully");
    Ok(())
}
