// nexa_catalog/examples/seeded_listing.rs

use nexa_catalog::{Catalog, CatalogStats};
use tracing::info;

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Seeded Catalog Listing Example ---");

  let catalog = Catalog::seeded();

  for product in catalog.list() {
    info!(
      "#{:<3} {:<20} {:<12} {:>8.2}  stock {:>3}  {}",
      product.id, product.name, product.category, product.price, product.stock, product.status
    );
  }

  let stats = CatalogStats::compute(catalog.list());
  info!(
    "{} products, {} active, {} low stock, inventory value {:.2}",
    stats.total_products, stats.active_products, stats.low_stock_products, stats.inventory_value
  );
}
