// demos/admin_tui/src/errors.rs

use nexa_catalog::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Catalog Error: {source}")]
  Catalog {
    #[from] // Allows conversion from nexa_catalog::CatalogError
    source: CatalogError,
  },

  #[error("Terminal I/O Error: {0}")]
  Terminal(#[from] std::io::Error),

  #[error("Export Error: {0}")]
  Export(#[from] serde_json::Error),
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
