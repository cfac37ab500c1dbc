// nexa_catalog/src/error.rs

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("Required field is empty: {field}")]
  MissingField { field: &'static str },

  #[error("Price is not a valid number: '{value}'. Source: {source}")]
  InvalidPrice {
    value: String,
    #[source]
    source: ParseFloatError,
  },

  #[error("Price must not be negative: {value}")]
  NegativePrice { value: f64 },

  #[error("Stock is not a valid quantity: '{value}'. Source: {source}")]
  InvalidStock {
    value: String,
    #[source]
    source: ParseIntError,
  },

  #[error("Unknown product status: '{value}' (expected 'active' or 'inactive')")]
  UnknownStatus { value: String },
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
