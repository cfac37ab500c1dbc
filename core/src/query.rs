// nexa_catalog/src/query.rs

//! Derived, order-preserving views over a catalog snapshot: free-text
//! search, category filtering, and the distinct-category set.
//!
//! Everything here is a pure function of the snapshot it is handed.
//! Results are recomputed on every read; there is no cache to invalidate.

use crate::model::Product;
use std::fmt;

/// Category restriction applied by the query view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
  /// The sentinel meaning no category restriction.
  #[default]
  All,
  /// A specific category, compared case-insensitively.
  Category(String),
}

impl CategoryFilter {
  /// Interprets the wire value of the filter control: the literal "all"
  /// (any casing) is the no-restriction sentinel, anything else a category.
  pub fn parse(value: &str) -> Self {
    if value.eq_ignore_ascii_case("all") {
      CategoryFilter::All
    } else {
      CategoryFilter::Category(value.to_string())
    }
  }

  pub fn matches(&self, category: &str) -> bool {
    match self {
      CategoryFilter::All => true,
      CategoryFilter::Category(wanted) => wanted.eq_ignore_ascii_case(category),
    }
  }
}

impl fmt::Display for CategoryFilter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CategoryFilter::All => f.write_str("all"),
      CategoryFilter::Category(category) => f.write_str(category),
    }
  }
}

/// The current search/filter inputs.
///
/// A record matches when the search term occurs (case-insensitively) in
/// its name or its category, and its category passes the filter. An empty
/// search term matches every record.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
  pub search_term: String,
  pub category: CategoryFilter,
}

impl CatalogQuery {
  pub fn matches(&self, product: &Product) -> bool {
    let needle = self.search_term.to_lowercase();
    let matches_search = product.name.to_lowercase().contains(&needle)
      || product.category.to_lowercase().contains(&needle);
    matches_search && self.category.matches(&product.category)
  }

  /// Borrows the matching records out of the snapshot, preserving their
  /// order.
  pub fn filter<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
    products.iter().filter(|p| self.matches(p)).collect()
  }
}

/// Distinct category values currently present in the catalog, in
/// first-occurrence order. Used to populate the filter options.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
  let mut categories: Vec<String> = Vec::new();
  for product in products {
    if !categories.iter().any(|c| c == &product.category) {
      categories.push(product.category.clone());
    }
  }
  categories
}
