// crates/cart-client/src/components/menu_admin.rs

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use cart_client::view_model::menu_item_cards;

use crate::app::App;

pub fn draw_menu_admin(f: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(vec!["Name", "Category", "Price", "Available", "Action"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let cards = menu_item_cards(app.admin.menu_items());
    let rows: Vec<Row> = cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let style = if i == app.admin.selected_item_index() {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            let availability = if card.available {
                Cell::from("yes").style(style.fg(Color::Green))
            } else {
                Cell::from("no").style(style.fg(Color::Red))
            };
            Row::new(vec![
                Cell::from(card.name.clone()).style(style),
                Cell::from(card.category.clone()).style(style),
                Cell::from(card.price.clone()).style(style),
                availability,
                Cell::from(format!("[t] {}", card.toggle_label)).style(style.fg(Color::Cyan)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(16),    // Name
        Constraint::Length(12), // Category
        Constraint::Length(9),  // Price
        Constraint::Length(9),  // Available
        Constraint::Length(12), // Action
    ];

    let title = match app.pending_delete {
        Some(id) => format!(" Delete item {id}? [y] Yes  [any] No "),
        None => " Menu Items [a]dd [e]dit [t]oggle [d]elete ".to_string(),
    };
    let border = if app.pending_delete.is_some() { Color::Red } else { Color::Yellow };

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(table, area);
}
