// crates/cart-client/src/components/cart_panel.rs

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use cart_client::view_model::cart_view;

use crate::app::{App, CustomerField};

pub fn draw_cart_panel(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Lines
            Constraint::Length(5), // Totals
            Constraint::Length(6), // Customer details
        ])
        .split(area);

    let view = cart_view(app.ordering.cart());

    // Lines
    let block = Block::default().title(" Your Order ").borders(Borders::ALL);
    if let Some(message) = view.empty_message {
        let empty = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, chunks[0]);
    } else {
        let header = Row::new(vec!["Item", "Price", "Qty", "Total"])
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = view
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let style = if i == app.ordering.selected_line_index() {
                    Style::default().bg(Color::DarkGray)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(line.name.clone()),
                    Cell::from(line.unit_price.clone()).style(Style::default().fg(Color::Gray)),
                    Cell::from(line.quantity.to_string()),
                    Cell::from(line.line_total.clone()).style(Style::default().fg(Color::Green)),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Min(12),    // Item
            Constraint::Length(14), // Price
            Constraint::Length(4),  // Qty
            Constraint::Length(9),  // Total
        ];

        let table = Table::new(rows, widths).header(header).block(block);
        f.render_widget(table, chunks[0]);
    }

    // Totals (hidden while empty)
    let totals_lines = match &view.totals {
        Some(totals) => vec![
            Line::from(format!("Subtotal: {}", totals.subtotal)),
            Line::from(format!("Tax (8%): {}", totals.tax)),
            Line::from(Span::styled(
                format!("Total:    {}", totals.total),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ],
        None => Vec::new(),
    };
    let checkout_hint = if view.show_checkout { " [S] Place Order " } else { "" };
    let totals = Paragraph::new(totals_lines)
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL).title(checkout_hint));
    f.render_widget(totals, chunks[1]);

    // Customer details
    let customer = app.ordering.cart().customer();
    let field_line = |field: CustomerField, key: char, value: &str| {
        Line::from(vec![
            Span::styled(format!("[{key}] "), Style::default().fg(Color::Cyan)),
            Span::raw(format!("{}: ", field.label())),
            Span::styled(value.to_string(), Style::default().fg(Color::White)),
        ])
    };
    let details = Paragraph::new(vec![
        field_line(CustomerField::Name, 'n', &customer.name),
        field_line(CustomerField::Notes, 'o', &customer.notes),
        field_line(CustomerField::Email, 'e', &customer.email),
        field_line(CustomerField::Phone, 'p', &customer.phone),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Customer "));
    f.render_widget(details, chunks[2]);
}
