// nexa_catalog/src/editor.rs

//! The product form: string-buffered fields, a mode fixed at open time,
//! and the validation gate that turns the buffers into a [`ProductDraft`]
//! on submit.
//!
//! The form holds raw input text for the numeric fields so the screen can
//! echo exactly what the user typed; parsing happens once, at submit.
//! Canceling is simply dropping the form, so no in-progress edit can leak
//! into the catalog.

use crate::error::{CatalogError, CatalogResult};
use crate::model::{placeholder_image, Product, ProductDraft, ProductStatus};
use tracing::debug;

/// Which store operation a successful submit feeds. Derived when the
/// dialog opens (a target record means edit) and fixed for the lifetime of
/// one form instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
  Create,
  Edit { id: String },
}

#[derive(Debug, Clone)]
pub struct ProductForm {
  mode: FormMode,
  pub name: String,
  pub category: String,
  pub price: String,
  pub stock: String,
  pub status: ProductStatus,
  pub image: String,
  pub description: String,
}

impl ProductForm {
  /// An empty create-mode form. Status starts as `Active`, the picker's
  /// initial selection.
  pub fn new() -> Self {
    Self {
      mode: FormMode::Create,
      name: String::new(),
      category: String::new(),
      price: String::new(),
      stock: String::new(),
      status: ProductStatus::default(),
      image: String::new(),
      description: String::new(),
    }
  }

  /// An edit-mode form pre-populated from the record's current values.
  /// `id` and `created_at` are not user-editable; the store carries them
  /// through the update.
  pub fn edit(product: &Product) -> Self {
    Self {
      mode: FormMode::Edit {
        id: product.id.clone(),
      },
      name: product.name.clone(),
      category: product.category.clone(),
      price: product.price.to_string(),
      stock: product.stock.to_string(),
      status: product.status,
      image: product.image.clone(),
      description: product.description.clone(),
    }
  }

  pub fn mode(&self) -> &FormMode {
    &self.mode
  }

  pub fn is_edit(&self) -> bool {
    matches!(self.mode, FormMode::Edit { .. })
  }

  /// Validates the buffers and produces the draft for the caller's
  /// create-or-update handler.
  ///
  /// Rejection leaves the form untouched: the required-field gate fires
  /// first (name, category, price, stock), then the numeric parses. An
  /// empty image field is replaced with a synthesized placeholder
  /// referencing the product name.
  pub fn submit(&self) -> CatalogResult<ProductDraft> {
    for (field, value) in [
      ("name", &self.name),
      ("category", &self.category),
      ("price", &self.price),
      ("stock", &self.stock),
    ] {
      if value.is_empty() {
        debug!(field, "Submit rejected: required field is empty.");
        return Err(CatalogError::MissingField { field });
      }
    }

    let price: f64 = self
      .price
      .trim()
      .parse()
      .map_err(|source| CatalogError::InvalidPrice {
        value: self.price.clone(),
        source,
      })?;
    if price < 0.0 {
      return Err(CatalogError::NegativePrice { value: price });
    }

    // u32 by construction: a negative stock string fails the parse.
    let stock: u32 = self
      .stock
      .trim()
      .parse()
      .map_err(|source| CatalogError::InvalidStock {
        value: self.stock.clone(),
        source,
      })?;

    let image = if self.image.is_empty() {
      placeholder_image(&self.name)
    } else {
      self.image.clone()
    };

    Ok(ProductDraft {
      name: self.name.clone(),
      category: self.category.clone(),
      price,
      stock,
      status: self.status,
      image,
      description: self.description.clone(),
    })
  }
}

impl Default for ProductForm {
  fn default() -> Self {
    Self::new()
  }
}
