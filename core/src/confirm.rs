// nexa_catalog/src/confirm.rs

//! Binary confirm/cancel gate guarding destructive deletes.

use crate::model::Product;
use tracing::debug;

/// Holds at most one pending-delete target.
///
/// Closed when no target is armed. `confirm` hands the target's id back to
/// the caller for the store's delete operation and closes the gate;
/// `cancel` closes it without any mutation. There are no other
/// transitions.
#[derive(Debug, Clone, Default)]
pub struct DeleteConfirm {
  target: Option<Product>,
}

impl DeleteConfirm {
  pub fn new() -> Self {
    Self { target: None }
  }

  pub fn is_open(&self) -> bool {
    self.target.is_some()
  }

  /// The record awaiting confirmation, if the gate is open.
  pub fn target(&self) -> Option<&Product> {
    self.target.as_ref()
  }

  /// Arms the gate with a snapshot of the record to be deleted.
  pub fn request(&mut self, product: Product) {
    debug!(product_id = %product.id, "Delete confirmation requested.");
    self.target = Some(product);
  }

  /// Confirms the pending delete, yielding the target id and closing the
  /// gate. Returns `None` when the gate was not open.
  pub fn confirm(&mut self) -> Option<String> {
    self.target.take().map(|product| product.id)
  }

  /// Closes the gate, dropping the target.
  pub fn cancel(&mut self) {
    self.target = None;
  }
}
