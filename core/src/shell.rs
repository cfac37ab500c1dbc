// nexa_catalog/src/shell.rs

//! The presentation shell: owns the authoritative catalog plus the
//! transient screen state (open form, pending delete, search/filter
//! inputs) and routes user intents to the store and the dialog state
//! machines.
//!
//! One intent is applied per UI event and runs to completion before the
//! next is read; there is no other writer of catalog state.

use crate::confirm::DeleteConfirm;
use crate::editor::{FormMode, ProductForm};
use crate::error::CatalogResult;
use crate::model::Product;
use crate::query::{distinct_categories, CatalogQuery, CategoryFilter};
use crate::stats::CatalogStats;
use crate::store::Catalog;
use tracing::{debug, instrument};

/// Every user intent the screen routes.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenIntent {
  /// Open the form dialog in create mode.
  OpenCreate,
  /// Open the form dialog in edit mode for the given record id.
  OpenEdit(String),
  /// Arm the delete-confirmation gate for the given record id.
  RequestDelete(String),
  /// Confirm the pending delete.
  ConfirmDelete,
  /// Close whichever dialog is open, discarding in-progress edits.
  CancelDialog,
  /// Validate the open form and dispatch its draft to create or update.
  Submit,
  /// Overwrite the free-text search term.
  SearchChanged(String),
  /// Overwrite the category filter.
  FilterChanged(CategoryFilter),
}

/// Composition root of the admin screen.
///
/// Derived views (`visible_products`, `categories`, `stats`) are pure
/// reads recomputed per call, so they are always consistent with the last
/// applied intent.
#[derive(Debug, Default)]
pub struct CatalogScreen {
  catalog: Catalog,
  query: CatalogQuery,
  form: Option<ProductForm>,
  confirm: DeleteConfirm,
}

impl CatalogScreen {
  pub fn new(catalog: Catalog) -> Self {
    Self {
      catalog,
      query: CatalogQuery::default(),
      form: None,
      confirm: DeleteConfirm::new(),
    }
  }

  /// Routes one user intent.
  ///
  /// Only a rejected submit produces an error; the form stays open and
  /// unchanged in that case so the user can fix the offending field.
  /// Intents targeting unknown record ids are ignored.
  #[instrument(name = "CatalogScreen::apply", skip(self))]
  pub fn apply(&mut self, intent: ScreenIntent) -> CatalogResult<()> {
    match intent {
      ScreenIntent::OpenCreate => {
        self.form = Some(ProductForm::new());
      }
      ScreenIntent::OpenEdit(id) => match self.catalog.get(&id) {
        Some(product) => self.form = Some(ProductForm::edit(product)),
        None => debug!(product_id = %id, "Edit target not found; ignoring."),
      },
      ScreenIntent::RequestDelete(id) => match self.catalog.get(&id) {
        Some(product) => self.confirm.request(product.clone()),
        None => debug!(product_id = %id, "Delete target not found; ignoring."),
      },
      ScreenIntent::ConfirmDelete => {
        if let Some(id) = self.confirm.confirm() {
          self.catalog.delete(&id);
        }
      }
      ScreenIntent::CancelDialog => {
        self.form = None;
        self.confirm.cancel();
      }
      ScreenIntent::Submit => self.submit_form()?,
      ScreenIntent::SearchChanged(term) => {
        self.query.search_term = term;
      }
      ScreenIntent::FilterChanged(filter) => {
        self.query.category = filter;
      }
    }
    Ok(())
  }

  fn submit_form(&mut self) -> CatalogResult<()> {
    let Some(form) = self.form.as_ref() else {
      debug!("Submit with no open form; ignoring.");
      return Ok(());
    };

    let draft = form.submit()?;
    match form.mode().clone() {
      FormMode::Create => {
        self.catalog.create(draft);
      }
      FormMode::Edit { id } => {
        self.catalog.update(&id, draft);
      }
    }
    self.form = None;
    Ok(())
  }

  /// The filtered, order-preserving sequence the product table renders.
  pub fn visible_products(&self) -> Vec<&Product> {
    self.query.filter(self.catalog.list())
  }

  /// Distinct categories currently present, for the filter options.
  pub fn categories(&self) -> Vec<String> {
    distinct_categories(self.catalog.list())
  }

  /// Aggregates over the full, unfiltered catalog.
  pub fn stats(&self) -> CatalogStats {
    CatalogStats::compute(self.catalog.list())
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  pub fn query(&self) -> &CatalogQuery {
    &self.query
  }

  /// The open form dialog, if any.
  pub fn form(&self) -> Option<&ProductForm> {
    self.form.as_ref()
  }

  /// Mutable access to the open form's field buffers; this is the single
  /// in-progress-edit state of the screen.
  pub fn form_mut(&mut self) -> Option<&mut ProductForm> {
    self.form.as_mut()
  }

  /// The record awaiting delete confirmation, if the gate is open.
  pub fn pending_delete(&self) -> Option<&Product> {
    self.confirm.target()
  }
}
