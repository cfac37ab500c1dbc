// tests/query_tests.rs
mod common;

use common::*;
use nexa_catalog::{distinct_categories, Catalog, CatalogQuery, CategoryFilter};

#[test]
fn test_exact_name_search_finds_the_record() {
  setup_tracing();
  let catalog = Catalog::seeded();
  let query = CatalogQuery {
    search_term: "Yoga Mat".to_string(),
    category: CategoryFilter::All,
  };

  let matches = query.filter(catalog.list());

  assert_eq!(matches.len(), 1);
  assert_eq!(matches[0].id, "4");
}

#[test]
fn test_search_is_case_insensitive() {
  setup_tracing();
  let catalog = Catalog::seeded();
  let query = CatalogQuery {
    search_term: "coffee".to_string(),
    category: CategoryFilter::All,
  };

  let matches = query.filter(catalog.list());

  assert_eq!(matches.len(), 1);
  assert_eq!(matches[0].name, "Coffee Maker");
}

#[test]
fn test_search_also_matches_category_text() {
  setup_tracing();
  let catalog = Catalog::seeded();
  let query = CatalogQuery {
    search_term: "electron".to_string(),
    category: CategoryFilter::All,
  };

  let matches = query.filter(catalog.list());

  // Both Electronics records, in list order.
  assert_eq!(matches.len(), 2);
  assert_eq!(matches[0].id, "1");
  assert_eq!(matches[1].id, "2");
}

#[test]
fn test_empty_search_term_matches_everything() {
  setup_tracing();
  let catalog = Catalog::seeded();
  let query = CatalogQuery::default();

  assert_eq!(query.filter(catalog.list()).len(), 4);
}

#[test]
fn test_category_filter_is_case_insensitive() {
  setup_tracing();
  let catalog = Catalog::seeded();
  let query = CatalogQuery {
    search_term: String::new(),
    category: CategoryFilter::parse("electronics"),
  };

  let matches = query.filter(catalog.list());

  assert_eq!(matches.len(), 2);
  assert!(matches.iter().all(|p| p.category == "Electronics"));
}

#[test]
fn test_absent_category_yields_empty_set() {
  setup_tracing();
  let catalog = Catalog::seeded();
  let query = CatalogQuery {
    search_term: String::new(),
    category: CategoryFilter::parse("Toys"),
  };

  assert!(query.filter(catalog.list()).is_empty());
}

#[test]
fn test_search_and_category_conditions_are_conjunctive() {
  setup_tracing();
  let catalog = Catalog::seeded();
  let query = CatalogQuery {
    search_term: "watch".to_string(),
    category: CategoryFilter::parse("Fitness"),
  };

  // "watch" matches the Smart Watch, but it is not in Fitness.
  assert!(query.filter(catalog.list()).is_empty());
}

#[test]
fn test_all_sentinel_parses_in_any_casing() {
  setup_tracing();
  assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
  assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
  assert_eq!(CategoryFilter::parse("ALL"), CategoryFilter::All);
  assert_eq!(
    CategoryFilter::parse("Books"),
    CategoryFilter::Category("Books".to_string())
  );
}

#[test]
fn test_category_filter_display_round_trips_the_sentinel() {
  setup_tracing();
  assert_eq!(CategoryFilter::All.to_string(), "all");
  assert_eq!(
    CategoryFilter::Category("Fitness".to_string()).to_string(),
    "Fitness"
  );
}

#[test]
fn test_distinct_categories_keep_first_occurrence_order() {
  setup_tracing();
  let catalog = Catalog::seeded();

  let categories = distinct_categories(catalog.list());

  assert_eq!(categories, vec!["Electronics", "Appliances", "Fitness"]);
}

#[test]
fn test_distinct_categories_of_empty_catalog_is_empty() {
  setup_tracing();
  assert!(distinct_categories(Catalog::new().list()).is_empty());
}
