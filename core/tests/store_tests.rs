// tests/store_tests.rs
mod common;

use chrono::Local;
use common::*;
use nexa_catalog::{Catalog, ProductStatus};

#[test]
fn test_create_prepends_and_grows_catalog() {
  setup_tracing();
  let mut catalog = Catalog::seeded();
  let before = catalog.len();

  let created_id = catalog.create(lamp_draft()).id.clone();

  assert_eq!(catalog.len(), before + 1);
  assert_eq!(catalog.list()[0].id, created_id);
  assert_eq!(catalog.list()[0].name, "Lamp");
}

#[test]
fn test_create_assigns_id_one_past_seed_and_stamps_today() {
  setup_tracing();
  let mut catalog = Catalog::seeded();

  let created = catalog.create(lamp_draft());

  assert_eq!(created.id, "5");
  assert_eq!(created.created_at, Local::now().date_naive());
}

#[test]
fn test_create_ids_are_strictly_increasing() {
  setup_tracing();
  let mut catalog = Catalog::new();

  let first = catalog.create(draft("Desk", "Furniture", 120.0, 3)).id.clone();
  let second = catalog.create(draft("Chair", "Furniture", 80.0, 7)).id.clone();

  assert_eq!(first, "1");
  assert_eq!(second, "2");
  // Newest first
  assert_eq!(ids(catalog.list()), vec!["2", "1"]);
}

#[test]
fn test_deleted_ids_are_never_reused() {
  setup_tracing();
  let mut catalog = Catalog::seeded();

  catalog.delete("4");
  catalog.delete("3");
  let created = catalog.create(lamp_draft());

  // Counter stays at one past everything ever issued.
  assert_eq!(created.id, "5");
}

#[test]
fn test_update_replaces_fields_but_preserves_id_created_at_and_order() {
  setup_tracing();
  let mut catalog = Catalog::seeded();
  let original = catalog
    .get("2")
    .expect("seed record 2 exists")
    .clone();
  let before_ids: Vec<String> = ids(catalog.list()).iter().map(|s| s.to_string()).collect();

  let mut replacement = draft("Smart Watch Pro", "Wearables", 349.99, 12);
  replacement.status = ProductStatus::Inactive;
  catalog.update("2", replacement);

  let updated = catalog.get("2").expect("record 2 still present");
  assert_eq!(updated.id, original.id);
  assert_eq!(updated.created_at, original.created_at);
  assert_eq!(updated.name, "Smart Watch Pro");
  assert_eq!(updated.category, "Wearables");
  assert_eq!(updated.price, 349.99);
  assert_eq!(updated.stock, 12);
  assert_eq!(updated.status, ProductStatus::Inactive);

  // Same size, same order.
  assert_eq!(catalog.len(), 4);
  assert_eq!(ids(catalog.list()), before_ids);
}

#[test]
fn test_update_unknown_id_is_a_silent_noop() {
  setup_tracing();
  let mut catalog = Catalog::seeded();
  let before: Vec<_> = catalog.list().to_vec();

  catalog.update("99", lamp_draft());

  assert_eq!(catalog.list(), before.as_slice());
}

#[test]
fn test_delete_removes_record_and_preserves_relative_order() {
  setup_tracing();
  let mut catalog = Catalog::seeded();

  catalog.delete("3");

  assert_eq!(catalog.len(), 3);
  assert!(catalog.get("3").is_none());
  assert_eq!(ids(catalog.list()), vec!["1", "2", "4"]);
}

#[test]
fn test_delete_unknown_id_is_a_silent_noop() {
  setup_tracing();
  let mut catalog = Catalog::seeded();

  catalog.delete("42");

  assert_eq!(catalog.len(), 4);
  assert_eq!(ids(catalog.list()), vec!["1", "2", "3", "4"]);
}

#[test]
fn test_seeded_catalog_matches_demo_dataset() {
  setup_tracing();
  let catalog = Catalog::seeded();

  assert_eq!(catalog.len(), 4);
  let headphones = catalog.get("1").expect("seed record 1");
  assert_eq!(headphones.name, "Wireless Headphones");
  assert_eq!(headphones.category, "Electronics");
  assert_eq!(headphones.price, 199.99);
  assert_eq!(headphones.stock, 45);
  assert_eq!(headphones.status, ProductStatus::Active);
  assert_eq!(headphones.created_at.to_string(), "2024-01-15");

  let coffee_maker = catalog.get("3").expect("seed record 3");
  assert_eq!(coffee_maker.status, ProductStatus::Inactive);
  assert_eq!(coffee_maker.stock, 0);
}

#[test]
fn test_empty_catalog_starts_counting_at_one() {
  setup_tracing();
  let mut catalog = Catalog::new();
  assert!(catalog.is_empty());

  let created = catalog.create(lamp_draft());

  assert_eq!(created.id, "1");
}
