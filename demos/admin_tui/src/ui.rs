// demos/admin_tui/src/ui.rs

//! Rendering for the single admin screen: header with search and filter,
//! stat cards, the product table, and the two modal dialogs.

use crate::app::{App, Focus, FormField};
use nexa_catalog::{Product, ProductStatus, CATEGORY_SUGGESTIONS};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

pub fn render(frame: &mut Frame, app: &mut App) {
  let chunks = Layout::vertical([
    Constraint::Length(4),
    Constraint::Length(3),
    Constraint::Min(5),
    Constraint::Length(1),
  ])
  .split(frame.area());

  render_header(frame, app, chunks[0]);
  render_stats(frame, app, chunks[1]);
  render_table(frame, app, chunks[2]);
  render_status_line(frame, app, chunks[3]);

  // Dialogs overlay the screen; at most one is open at a time.
  if app.screen.form().is_some() {
    render_form_dialog(frame, app);
  } else if app.screen.pending_delete().is_some() {
    render_confirm_dialog(frame, app);
  }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
  let query = app.screen.query();
  let search_style = if app.focus == Focus::Search {
    Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD)
  } else {
    Style::new()
  };
  let cursor = if app.focus == Focus::Search { "_" } else { "" };

  let lines = vec![
    Line::from(vec![
      Span::styled(
        "NexaCommerce",
        Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
      ),
      Span::raw("  Product Catalog"),
    ]),
    Line::from(vec![
      Span::styled(
        format!("Search: {}{}", query.search_term, cursor),
        search_style,
      ),
      Span::raw("   "),
      Span::raw(format!("Filter: {}", query.category)),
    ]),
  ];
  frame.render_widget(Paragraph::new(lines).block(Block::bordered()), area);
}

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
  let stats = app.screen.stats();
  let cards = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

  render_stat_card(frame, cards[0], "Total Products", stats.total_products.to_string());
  render_stat_card(frame, cards[1], "Active Products", stats.active_products.to_string());
  render_stat_card(frame, cards[2], "Low Stock Alert", stats.low_stock_products.to_string());
  render_stat_card(
    frame,
    cards[3],
    "Inventory Value",
    format!("₹{:.2}", stats.inventory_value),
  );
}

fn render_stat_card(frame: &mut Frame, area: Rect, title: &str, value: String) {
  let card = Paragraph::new(Line::from(Span::styled(
    value,
    Style::new().add_modifier(Modifier::BOLD),
  )))
  .block(Block::bordered().title(title.to_string()));
  frame.render_widget(card, area);
}

fn render_table(frame: &mut Frame, app: &mut App, area: Rect) {
  let visible = app.screen.visible_products();
  let rows: Vec<Row> = visible
    .iter()
    .map(|product| {
      Row::new(vec![
        Cell::from(product.id.clone()),
        Cell::from(product.name.clone()),
        Cell::from(product.category.clone()),
        Cell::from(format!("₹{:.2}", product.price)),
        Cell::from(product.stock.to_string()),
        Cell::from(status_cell(product)),
      ])
    })
    .collect();
  let title = format!("Products ({})", visible.len());

  let table = Table::new(
    rows,
    [
      Constraint::Length(4),
      Constraint::Min(20),
      Constraint::Length(14),
      Constraint::Length(12),
      Constraint::Length(6),
      Constraint::Length(10),
    ],
  )
  .header(
    Row::new(["ID", "Name", "Category", "Price", "Stock", "Status"])
      .style(Style::new().add_modifier(Modifier::BOLD)),
  )
  .row_highlight_style(Style::new().bg(Color::DarkGray))
  .block(Block::bordered().title(title));

  frame.render_stateful_widget(table, area, &mut app.table);
}

fn status_cell(product: &Product) -> Span<'static> {
  match product.status {
    ProductStatus::Active => Span::styled("active", Style::new().fg(Color::Green)),
    ProductStatus::Inactive => Span::styled("inactive", Style::new().fg(Color::Red)),
  }
}

fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
  let line = match &app.feedback {
    Some(message) => Line::from(Span::styled(message.clone(), Style::new().fg(Color::Red))),
    None => Line::from("[/] search  [f] filter  [n] new  [e] edit  [d] delete  [up/down] select  [q] quit"),
  };
  frame.render_widget(Paragraph::new(line), area);
}

fn render_form_dialog(frame: &mut Frame, app: &App) {
  let Some(form) = app.screen.form() else {
    return;
  };
  let area = centered_rect(frame.area(), 60, 11);
  frame.render_widget(Clear, area);

  let title = if form.is_edit() {
    "Edit Product"
  } else {
    "Add New Product"
  };

  let mut lines = Vec::new();
  for field in FormField::ALL {
    let value = match field {
      FormField::Name => form.name.clone(),
      FormField::Category => form.category.clone(),
      FormField::Price => form.price.clone(),
      FormField::Stock => form.stock.clone(),
      FormField::Status => format!("< {} >", form.status),
      FormField::Image => form.image.clone(),
      FormField::Description => form.description.clone(),
    };
    let style = if field == app.form_field {
      Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
      Style::new()
    };
    lines.push(Line::from(vec![
      Span::styled(format!("{:<13}", field.label()), style),
      Span::styled(value, style),
    ]));
  }
  lines.push(Line::raw(""));
  if let Some(feedback) = &app.feedback {
    lines.push(Line::from(Span::styled(
      feedback.clone(),
      Style::new().fg(Color::Red),
    )));
  } else if app.form_field == FormField::Category {
    lines.push(Line::from(format!(
      "Suggestions: {}",
      CATEGORY_SUGGESTIONS.join(", ")
    )));
  } else {
    lines.push(Line::from("[Tab] next field  [Enter] save  [Esc] cancel"));
  }

  let dialog = Paragraph::new(lines)
    .wrap(Wrap { trim: false })
    .block(Block::bordered().title(title));
  frame.render_widget(dialog, area);
}

fn render_confirm_dialog(frame: &mut Frame, app: &App) {
  let Some(target) = app.screen.pending_delete() else {
    return;
  };
  let area = centered_rect(frame.area(), 50, 6);
  frame.render_widget(Clear, area);

  let lines = vec![
    Line::from(format!("Are you sure you want to delete \"{}\"?", target.name)),
    Line::raw("This action cannot be undone."),
    Line::raw(""),
    Line::from("[y] Delete   [n] Cancel"),
  ];
  let dialog = Paragraph::new(lines)
    .wrap(Wrap { trim: false })
    .alignment(Alignment::Center)
    .block(Block::bordered().title("Delete Product"));
  frame.render_widget(dialog, area);
}

/// A fixed-height rectangle centered in `area`, `percent_x` wide.
fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
  let vertical = Layout::vertical([
    Constraint::Fill(1),
    Constraint::Length(height),
    Constraint::Fill(1),
  ])
  .split(area);
  let horizontal = Layout::horizontal([
    Constraint::Percentage((100 - percent_x) / 2),
    Constraint::Percentage(percent_x),
    Constraint::Percentage((100 - percent_x) / 2),
  ])
  .split(vertical[1]);
  horizontal[1]
}
