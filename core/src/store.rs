// nexa_catalog/src/store.rs

//! The catalog store: an owned, ordered list of product records plus the
//! monotonic counter that mints new record ids.
//!
//! The store is the only writer of catalog state. It is instantiated once
//! at the composition root and passed by reference; derived views read a
//! snapshot through [`Catalog::list`]. Mutation is synchronous and visible
//! to every derived view on the next read.

use crate::model::{Product, ProductDraft, ProductStatus};
use chrono::{Local, NaiveDate};
use tracing::{debug, instrument};

/// The in-memory ordered collection of product records.
///
/// New records are prepended, so the list is most-recent-first. Edits keep
/// a record's position; deletes close the gap without renumbering.
#[derive(Debug, Clone)]
pub struct Catalog {
  products: Vec<Product>,
  next_id: u64,
}

impl Catalog {
  /// An empty catalog with the id counter at 1.
  pub fn new() -> Self {
    Self {
      products: Vec::new(),
      next_id: 1,
    }
  }

  /// The four-record demo dataset the screen starts from, ids "1"–"4",
  /// with the counter positioned one past them.
  pub fn seeded() -> Self {
    let products = vec![
      Product {
        id: "1".to_string(),
        name: "Wireless Headphones".to_string(),
        category: "Electronics".to_string(),
        price: 199.99,
        stock: 45,
        status: ProductStatus::Active,
        image: "/wireless-headphones.png".to_string(),
        description: "Premium wireless headphones with noise cancellation".to_string(),
        created_at: seed_date(2024, 1, 15),
      },
      Product {
        id: "2".to_string(),
        name: "Smart Watch".to_string(),
        category: "Electronics".to_string(),
        price: 299.99,
        stock: 23,
        status: ProductStatus::Active,
        image: "/smartwatch-lifestyle.png".to_string(),
        description: "Advanced fitness tracking smartwatch".to_string(),
        created_at: seed_date(2024, 1, 10),
      },
      Product {
        id: "3".to_string(),
        name: "Coffee Maker".to_string(),
        category: "Appliances".to_string(),
        price: 149.99,
        stock: 0,
        status: ProductStatus::Inactive,
        image: "/modern-coffee-maker.png".to_string(),
        description: "Automatic drip coffee maker with timer".to_string(),
        created_at: seed_date(2024, 1, 5),
      },
      Product {
        id: "4".to_string(),
        name: "Yoga Mat".to_string(),
        category: "Fitness".to_string(),
        price: 39.99,
        stock: 78,
        status: ProductStatus::Active,
        image: "/rolled-yoga-mat.png".to_string(),
        description: "Non-slip premium yoga mat".to_string(),
        created_at: seed_date(2024, 1, 20),
      },
    ];
    Self {
      products,
      next_id: 5,
    }
  }

  /// Mints the next id, stamps today's date, and prepends the new record.
  /// Always succeeds for a well-formed draft; validation happens upstream
  /// in the form editor.
  ///
  /// Ids only ever move forward. Deleting records never frees their ids
  /// for reuse.
  #[instrument(name = "Catalog::create", skip(self, draft), fields(product_name = %draft.name))]
  pub fn create(&mut self, draft: ProductDraft) -> &Product {
    let id = self.next_id.to_string();
    self.next_id += 1;

    let record = Product {
      id,
      name: draft.name,
      category: draft.category,
      price: draft.price,
      stock: draft.stock,
      status: draft.status,
      image: draft.image,
      description: draft.description,
      created_at: Local::now().date_naive(),
    };
    debug!(product_id = %record.id, "Created product record.");

    self.products.insert(0, record);
    &self.products[0]
  }

  /// Replaces every user-editable field of the record matching `id`,
  /// keeping the original `id` and `created_at` and the record's position
  /// in the list. An unknown id is ignored.
  #[instrument(name = "Catalog::update", skip(self, draft), fields(product_id = %id))]
  pub fn update(&mut self, id: &str, draft: ProductDraft) {
    match self.products.iter_mut().find(|p| p.id == id) {
      Some(existing) => {
        existing.name = draft.name;
        existing.category = draft.category;
        existing.price = draft.price;
        existing.stock = draft.stock;
        existing.status = draft.status;
        existing.image = draft.image;
        existing.description = draft.description;
        debug!("Replaced product record.");
      }
      None => {
        debug!("Update target not found; ignoring.");
      }
    }
  }

  /// Removes the record matching `id`. An unknown id is ignored.
  #[instrument(name = "Catalog::delete", skip(self), fields(product_id = %id))]
  pub fn delete(&mut self, id: &str) {
    let before = self.products.len();
    self.products.retain(|p| p.id != id);
    if self.products.len() < before {
      debug!("Removed product record.");
    } else {
      debug!("Delete target not found; ignoring.");
    }
  }

  /// The current ordered sequence of all records, most-recent-first.
  pub fn list(&self) -> &[Product] {
    &self.products
  }

  /// By-id lookup, used to resolve edit and delete targets.
  pub fn get(&self, id: &str) -> Option<&Product> {
    self.products.iter().find(|p| p.id == id)
  }

  pub fn len(&self) -> usize {
    self.products.len()
  }

  pub fn is_empty(&self) -> bool {
    self.products.is_empty()
  }
}

impl Default for Catalog {
  fn default() -> Self {
    Self::new()
  }
}

// The seed dates are fixed literals; `from_ymd_opt` only fails on
// out-of-range input.
fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("seed date is valid")
}
