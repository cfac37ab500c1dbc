// demos/admin_tui/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// Start from the four-record demo dataset instead of an empty catalog.
  pub seed_catalog: bool,

  /// Dump the final catalog and stats as JSON on stdout after the screen
  /// closes.
  pub export_on_exit: bool,

  /// Default tracing filter when RUST_LOG is not set. Log output goes to
  /// stderr; redirect it when running the screen (`2>nexa_admin.log`).
  pub log_filter: String,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let seed_catalog = env::var("CATALOG_SEED")
      .unwrap_or_else(|_| "true".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid CATALOG_SEED value: {}", e)))?;

    let export_on_exit = env::var("CATALOG_EXPORT")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid CATALOG_EXPORT value: {}", e)))?;

    let log_filter = env::var("CATALOG_LOG").unwrap_or_else(|_| "nexa_admin=info".to_string());

    Ok(Self {
      seed_catalog,
      export_on_exit,
      log_filter,
    })
  }
}
