// nexa_catalog/src/stats.rs

//! Aggregate figures derived from the full (unfiltered) catalog, shown in
//! the stat cards above the product table.

use crate::model::{Product, ProductStatus};
use serde::Serialize;

/// Records with `0 < stock < LOW_STOCK_THRESHOLD` count as low stock;
/// out-of-stock records are excluded.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// A snapshot of the four derived figures. Pure function of catalog state,
/// recomputed on every catalog change rather than maintained incrementally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
  pub total_products: usize,
  pub active_products: usize,
  pub low_stock_products: usize,
  /// Sum of `price * stock` over all records.
  pub inventory_value: f64,
}

impl CatalogStats {
  /// Single pass over the snapshot.
  pub fn compute(products: &[Product]) -> Self {
    let mut stats = CatalogStats {
      total_products: products.len(),
      ..Default::default()
    };
    for product in products {
      if product.status == ProductStatus::Active {
        stats.active_products += 1;
      }
      if product.stock > 0 && product.stock < LOW_STOCK_THRESHOLD {
        stats.low_stock_products += 1;
      }
      stats.inventory_value += product.price * f64::from(product.stock);
    }
    stats
  }
}
