// tests/model_tests.rs
mod common;

use common::*;
use nexa_catalog::{placeholder_image, Catalog, ProductStatus, CATEGORY_SUGGESTIONS};
use std::str::FromStr;

#[test]
fn test_status_round_trips_its_wire_strings() {
  setup_tracing();
  assert_eq!(ProductStatus::Active.to_string(), "active");
  assert_eq!(ProductStatus::Inactive.to_string(), "inactive");
  assert_eq!(
    ProductStatus::from_str("active").expect("known status"),
    ProductStatus::Active
  );
  assert_eq!(
    ProductStatus::from_str("inactive").expect("known status"),
    ProductStatus::Inactive
  );
  assert!(ProductStatus::from_str("archived").is_err());
}

#[test]
fn test_product_serializes_with_its_original_field_names() {
  setup_tracing();
  let catalog = Catalog::seeded();
  let headphones = catalog.get("1").expect("seed record 1");

  let json = serde_json::to_value(headphones).expect("record serializes");

  assert_eq!(json["id"], "1");
  assert_eq!(json["name"], "Wireless Headphones");
  assert_eq!(json["category"], "Electronics");
  assert_eq!(json["price"], 199.99);
  assert_eq!(json["stock"], 45);
  assert_eq!(json["status"], "active");
  assert_eq!(json["image"], "/wireless-headphones.png");
  assert_eq!(json["createdAt"], "2024-01-15");
}

#[test]
fn test_placeholder_image_percent_encodes_the_name() {
  setup_tracing();
  assert_eq!(
    placeholder_image("Lamp"),
    "/placeholder.svg?height=60&width=60&query=Lamp"
  );
  assert_eq!(
    placeholder_image("Lamp & Shade"),
    "/placeholder.svg?height=60&width=60&query=Lamp+%26+Shade"
  );
}

#[test]
fn test_category_suggestions_cover_the_picker_options() {
  setup_tracing();
  assert_eq!(CATEGORY_SUGGESTIONS.len(), 6);
  assert!(CATEGORY_SUGGESTIONS.contains(&"Home & Garden"));
}
