// nexa_catalog/src/model.rs

//! The passive product record shape, its draft counterpart, and the small
//! helpers tied to them. Records carry no behavior; every mutation goes
//! through the catalog store.

use crate::error::CatalogError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a catalog record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
  /// Default matches the form editor's initial selection.
  #[default]
  Active,
  Inactive,
}

impl fmt::Display for ProductStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ProductStatus::Active => f.write_str("active"),
      ProductStatus::Inactive => f.write_str("inactive"),
    }
  }
}

impl FromStr for ProductStatus {
  type Err = CatalogError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "active" => Ok(ProductStatus::Active),
      "inactive" => Ok(ProductStatus::Inactive),
      other => Err(CatalogError::UnknownStatus {
        value: other.to_string(),
      }),
    }
  }
}

/// One catalog item.
///
/// `id` and `created_at` are store-assigned at creation and never change
/// afterwards; every other field is replaced wholesale on update (there is
/// no partial patch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: String,
  pub name: String,
  pub category: String,
  pub price: f64,
  pub stock: u32,
  pub status: ProductStatus,
  pub image: String,
  pub description: String,
  pub created_at: NaiveDate,
}

/// A product's user-editable fields, as handed from the form editor to the
/// store's create/update operations. Excludes the system-assigned `id` and
/// `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
  pub name: String,
  pub category: String,
  pub price: f64,
  pub stock: u32,
  pub status: ProductStatus,
  pub image: String,
  pub description: String,
}

/// Categories offered by the form editor's category picker. The category
/// field itself stays free-form; these are suggestions, not an enum.
pub const CATEGORY_SUGGESTIONS: [&str; 6] = [
  "Electronics",
  "Appliances",
  "Fitness",
  "Clothing",
  "Books",
  "Home & Garden",
];

/// Builds the fallback image URI for a record whose image field was left
/// empty, referencing the product name in the query string.
pub fn placeholder_image(name: &str) -> String {
  let encoded: String = form_urlencoded::byte_serialize(name.as_bytes()).collect();
  format!("/placeholder.svg?height=60&width=60&query={}", encoded)
}
