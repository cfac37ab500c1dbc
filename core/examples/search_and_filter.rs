// nexa_catalog/examples/search_and_filter.rs

use nexa_catalog::{distinct_categories, Catalog, CatalogQuery, CategoryFilter};
use tracing::info;

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Search and Filter Example ---");

  let catalog = Catalog::seeded();

  info!("Filter options: all, {}", distinct_categories(catalog.list()).join(", "));

  // Free-text search over name and category, case-insensitive.
  let query = CatalogQuery {
    search_term: "coffee".to_string(),
    category: CategoryFilter::All,
  };
  for product in query.filter(catalog.list()) {
    info!("search 'coffee' -> #{} {}", product.id, product.name);
  }

  // Category restriction; the term "electronics" is compared case-insensitively.
  let query = CatalogQuery {
    search_term: String::new(),
    category: CategoryFilter::parse("electronics"),
  };
  for product in query.filter(catalog.list()) {
    info!("filter 'electronics' -> #{} {}", product.id, product.name);
  }
}
