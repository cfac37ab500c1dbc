// demos/admin_tui/src/main.rs

// Declare modules for the application
mod app;
mod config;
mod errors;
mod ui;

use crate::app::App;
use crate::config::AppConfig;

use nexa_catalog::{Catalog, CatalogScreen};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
  let app_config = AppConfig::from_env()?;

  // Initialize tracing subscriber for logging. RUST_LOG wins over the
  // configured default; output goes to stderr so the alternate screen
  // stays clean when it is redirected.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(app_config.log_filter.clone())),
    )
    .with_writer(std::io::stderr)
    .init();

  tracing::info!("Starting NexaCommerce admin screen...");

  let catalog = if app_config.seed_catalog {
    Catalog::seeded()
  } else {
    Catalog::new()
  };
  let mut app = App::new(CatalogScreen::new(catalog));

  let mut terminal = ratatui::try_init()?;
  let run_result = app.run(&mut terminal);
  ratatui::restore();
  run_result?;

  if app_config.export_on_exit {
    println!("{}", app.export_json()?);
  }

  tracing::info!("Admin screen closed.");
  Ok(())
}
