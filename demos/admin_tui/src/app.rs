// demos/admin_tui/src/app.rs

//! Screen driver: owns the shell, translates key events into intents, and
//! keeps the bits of state that belong to the terminal rather than the
//! catalog (row selection, input focus, the status line).

use crate::errors::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use nexa_catalog::{CatalogScreen, CategoryFilter, ProductStatus, ScreenIntent};
use ratatui::widgets::TableState;
use ratatui::DefaultTerminal;
use tracing::{debug, info};

/// Which part of the screen consumes plain keystrokes when no dialog is
/// open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
  /// Keys act on the table and the single-letter commands.
  Browse,
  /// Keys edit the search box.
  Search,
}

/// The form dialog's fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
  Name,
  Category,
  Price,
  Stock,
  Status,
  Image,
  Description,
}

impl FormField {
  pub const ALL: [FormField; 7] = [
    FormField::Name,
    FormField::Category,
    FormField::Price,
    FormField::Stock,
    FormField::Status,
    FormField::Image,
    FormField::Description,
  ];

  pub fn label(self) -> &'static str {
    match self {
      FormField::Name => "Name",
      FormField::Category => "Category",
      FormField::Price => "Price",
      FormField::Stock => "Stock",
      FormField::Status => "Status",
      FormField::Image => "Image URL",
      FormField::Description => "Description",
    }
  }

  pub fn next(self) -> Self {
    let position = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
    Self::ALL[(position + 1) % Self::ALL.len()]
  }

  pub fn prev(self) -> Self {
    let position = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
    Self::ALL[(position + Self::ALL.len() - 1) % Self::ALL.len()]
  }
}

pub struct App {
  pub screen: CatalogScreen,
  pub table: TableState,
  pub focus: Focus,
  pub form_field: FormField,
  /// Status-line message, mostly rejected-submit feedback.
  pub feedback: Option<String>,
  should_quit: bool,
}

impl App {
  pub fn new(screen: CatalogScreen) -> Self {
    let mut table = TableState::default();
    table.select(Some(0));
    Self {
      screen,
      table,
      focus: Focus::Browse,
      form_field: FormField::Name,
      feedback: None,
      should_quit: false,
    }
  }

  /// Draw, block on the next key event, apply it, repeat. Everything runs
  /// to completion inside one iteration; there is nothing asynchronous to
  /// wait on.
  pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
    info!("Admin screen event loop starting.");
    while !self.should_quit {
      self.clamp_selection();
      terminal.draw(|frame| crate::ui::render(frame, self))?;
      if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
          self.handle_key(key);
        }
      }
    }
    info!("Admin screen event loop finished.");
    Ok(())
  }

  /// The final catalog and stats, pretty-printed for the optional
  /// export-on-exit.
  pub fn export_json(&self) -> Result<String> {
    let snapshot = serde_json::json!({
      "products": self.screen.catalog().list(),
      "stats": self.screen.stats(),
    });
    Ok(serde_json::to_string_pretty(&snapshot)?)
  }

  fn handle_key(&mut self, key: KeyEvent) {
    if self.screen.form().is_some() {
      self.handle_form_key(key);
    } else if self.screen.pending_delete().is_some() {
      self.handle_confirm_key(key);
    } else if self.focus == Focus::Search {
      self.handle_search_key(key);
    } else {
      self.handle_browse_key(key);
    }
  }

  /// Routes an intent to the shell, surfacing a rejection on the status
  /// line instead of mutating anything.
  fn dispatch(&mut self, intent: ScreenIntent) {
    if let Err(error) = self.screen.apply(intent) {
      debug!(%error, "Intent rejected.");
      self.feedback = Some(error.to_string());
    }
  }

  fn handle_browse_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Char('q') => self.should_quit = true,
      KeyCode::Char('/') => self.focus = Focus::Search,
      KeyCode::Char('n') => {
        self.feedback = None;
        self.form_field = FormField::Name;
        self.dispatch(ScreenIntent::OpenCreate);
      }
      KeyCode::Char('e') => {
        if let Some(id) = self.selected_id() {
          self.feedback = None;
          self.form_field = FormField::Name;
          self.dispatch(ScreenIntent::OpenEdit(id));
        }
      }
      KeyCode::Char('d') => {
        if let Some(id) = self.selected_id() {
          self.dispatch(ScreenIntent::RequestDelete(id));
        }
      }
      KeyCode::Char('f') => self.cycle_filter(),
      KeyCode::Up => self.move_selection(-1),
      KeyCode::Down => self.move_selection(1),
      KeyCode::Esc => {
        // Clear an active search instead of quitting.
        if !self.screen.query().search_term.is_empty() {
          self.dispatch(ScreenIntent::SearchChanged(String::new()));
        }
      }
      _ => {}
    }
  }

  fn handle_search_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc | KeyCode::Enter => self.focus = Focus::Browse,
      KeyCode::Backspace => {
        let mut term = self.screen.query().search_term.clone();
        term.pop();
        self.dispatch(ScreenIntent::SearchChanged(term));
      }
      KeyCode::Char(c) => {
        let mut term = self.screen.query().search_term.clone();
        term.push(c);
        self.dispatch(ScreenIntent::SearchChanged(term));
      }
      _ => {}
    }
  }

  fn handle_form_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.feedback = None;
        self.dispatch(ScreenIntent::CancelDialog);
      }
      KeyCode::Enter => {
        self.feedback = None;
        let creating = self.screen.form().map(|form| !form.is_edit()).unwrap_or(false);
        self.dispatch(ScreenIntent::Submit);
        if creating && self.screen.form().is_none() {
          // Jump to the new record at the front of the list.
          self.table.select(Some(0));
        }
      }
      KeyCode::Tab | KeyCode::Down => self.form_field = self.form_field.next(),
      KeyCode::BackTab | KeyCode::Up => self.form_field = self.form_field.prev(),
      code => self.edit_form_field(code),
    }
  }

  fn edit_form_field(&mut self, code: KeyCode) {
    let field = self.form_field;
    let Some(form) = self.screen.form_mut() else {
      return;
    };

    if field == FormField::Status {
      if matches!(code, KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right) {
        form.status = match form.status {
          ProductStatus::Active => ProductStatus::Inactive,
          ProductStatus::Inactive => ProductStatus::Active,
        };
      }
      return;
    }

    let buffer = match field {
      FormField::Name => &mut form.name,
      FormField::Category => &mut form.category,
      FormField::Price => &mut form.price,
      FormField::Stock => &mut form.stock,
      FormField::Image => &mut form.image,
      FormField::Description => &mut form.description,
      FormField::Status => return,
    };
    match code {
      KeyCode::Backspace => {
        buffer.pop();
      }
      KeyCode::Char(c) => buffer.push(c),
      _ => {}
    }
  }

  fn handle_confirm_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Char('y') | KeyCode::Enter => self.dispatch(ScreenIntent::ConfirmDelete),
      KeyCode::Char('n') | KeyCode::Esc => self.dispatch(ScreenIntent::CancelDialog),
      _ => {}
    }
  }

  /// Steps the category filter through "all" plus the categories currently
  /// present, wrapping around.
  fn cycle_filter(&mut self) {
    let mut options = vec![CategoryFilter::All];
    options.extend(
      self
        .screen
        .categories()
        .into_iter()
        .map(CategoryFilter::Category),
    );
    let current = self.screen.query().category.clone();
    let position = options.iter().position(|option| *option == current).unwrap_or(0);
    let next = options[(position + 1) % options.len()].clone();
    self.dispatch(ScreenIntent::FilterChanged(next));
  }

  fn move_selection(&mut self, delta: isize) {
    let count = self.screen.visible_products().len();
    if count == 0 {
      self.table.select(None);
      return;
    }
    let current = self.table.selected().unwrap_or(0) as isize;
    let next = (current + delta).clamp(0, count as isize - 1);
    self.table.select(Some(next as usize));
  }

  /// The visible list shrinks under deletes and filter changes; keep the
  /// selection inside it.
  fn clamp_selection(&mut self) {
    let count = self.screen.visible_products().len();
    if count == 0 {
      self.table.select(None);
    } else {
      let selected = self.table.selected().unwrap_or(0).min(count - 1);
      self.table.select(Some(selected));
    }
  }

  fn selected_id(&self) -> Option<String> {
    let visible = self.screen.visible_products();
    self
      .table
      .selected()
      .and_then(|index| visible.get(index))
      .map(|product| product.id.clone())
  }
}
