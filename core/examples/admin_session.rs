// nexa_catalog/examples/admin_session.rs

//! A scripted pass through the screen's intents: create a product through
//! the form dialog, edit it, then delete it behind the confirmation gate.

use nexa_catalog::{Catalog, CatalogScreen, ScreenIntent};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Admin Session Example ---");

  let mut screen = CatalogScreen::new(Catalog::seeded());

  // 1. Add a product through the create dialog.
  screen.apply(ScreenIntent::OpenCreate)?;
  if let Some(form) = screen.form_mut() {
    form.name = "Lamp".to_string();
    form.category = "Home & Garden".to_string();
    form.price = "19.99".to_string();
    form.stock = "5".to_string();
  }
  screen.apply(ScreenIntent::Submit)?;
  info!("After create: {} records, newest is '{}'", screen.catalog().len(), screen.catalog().list()[0].name);

  // 2. Edit it: the form comes back pre-populated.
  let lamp_id = screen.catalog().list()[0].id.clone();
  screen.apply(ScreenIntent::OpenEdit(lamp_id.clone()))?;
  if let Some(form) = screen.form_mut() {
    form.stock = "25".to_string();
  }
  screen.apply(ScreenIntent::Submit)?;
  if let Some(lamp) = screen.catalog().get(&lamp_id) {
    info!("After edit: '{}' has stock {}", lamp.name, lamp.stock);
  }

  // 3. Delete it, confirming through the gate.
  screen.apply(ScreenIntent::RequestDelete(lamp_id.clone()))?;
  if let Some(target) = screen.pending_delete() {
    info!("Awaiting confirmation to delete '{}'", target.name);
  }
  screen.apply(ScreenIntent::ConfirmDelete)?;
  info!("After delete: {} records", screen.catalog().len());

  let stats = screen.stats();
  info!(
    "Final stats: {} products, {} active, inventory value {:.2}",
    stats.total_products, stats.active_products, stats.inventory_value
  );
  Ok(())
}
