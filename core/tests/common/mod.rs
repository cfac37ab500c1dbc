// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use nexa_catalog::{Catalog, CatalogScreen, Product, ProductDraft, ProductStatus};
use tracing::Level;

// --- Fixture Builders ---

/// A screen over the four-record seed dataset (ids "1".."4").
pub fn seeded_screen() -> CatalogScreen {
  CatalogScreen::new(Catalog::seeded())
}

/// A well-formed draft with explicit image/description, for store-level
/// tests that bypass the form editor.
pub fn draft(name: &str, category: &str, price: f64, stock: u32) -> ProductDraft {
  ProductDraft {
    name: name.to_string(),
    category: category.to_string(),
    price,
    stock,
    status: ProductStatus::Active,
    image: format!("/{}.png", name.to_lowercase().replace(' ', "-")),
    description: format!("A {}", name.to_lowercase()),
  }
}

/// The draft from the create scenario: a Lamp in Home & Garden.
pub fn lamp_draft() -> ProductDraft {
  draft("Lamp", "Home & Garden", 19.99, 5)
}

/// Record ids in list order.
pub fn ids(products: &[Product]) -> Vec<&str> {
  products.iter().map(|p| p.id.as_str()).collect()
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
