// crates/cart-client/src/components/order_list.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use cart_client::pagination::{page_controls, render_controls};
use cart_client::view_model::{order_cards, OrderCard};
use cart_protocol::OrderStatus;

use crate::app::App;

pub fn draw_order_list(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Orders + details
            Constraint::Length(3), // Pagination
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[0]);

    let cards = app.admin.orders().map(order_cards).unwrap_or_default();

    let header = Row::new(vec!["Order", "Placed", "Customer", "Total", "Status"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let style = if i == app.admin.selected_order_index() {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(card.title.clone()).style(style),
                Cell::from(card.placed_at.clone()).style(style),
                Cell::from(card.customer_name.clone()).style(style),
                Cell::from(card.total.clone()).style(style),
                Cell::from(card.status_label).style(style.fg(status_color(card.status))),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(10), // Order
        Constraint::Length(19), // Placed
        Constraint::Min(10),    // Customer
        Constraint::Length(9),  // Total
        Constraint::Length(10), // Status
    ];

    let filter = app
        .admin
        .status_filter()
        .map(|s| s.label())
        .unwrap_or("All");
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(format!(" Orders ({filter}) "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(table, body[0]);

    draw_order_details(f, body[1], cards.get(app.admin.selected_order_index()));

    let controls = page_controls(app.admin.current_page(), app.admin.total_pages());
    let total = app.admin.orders().map(|p| p.total).unwrap_or(0);
    let paging = Paragraph::new(format!("{}   {total} orders", render_controls(&controls)))
        .block(Block::default().borders(Borders::ALL).title(" [←/→] Page [f] Filter "));
    f.render_widget(paging, chunks[1]);
}

fn draw_order_details(f: &mut Frame, area: Rect, card: Option<&OrderCard>) {
    let block = Block::default()
        .title(" Details [+/-] Status ")
        .borders(Borders::ALL);

    let Some(card) = card else {
        f.render_widget(Paragraph::new("No orders").block(block), area);
        return;
    };

    let mut lines = vec![Line::from(Span::styled(
        format!("{} - {}", card.title, card.customer_name),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(email) = &card.email {
        lines.push(Line::from(format!("Email: {email}")));
    }
    if let Some(phone) = &card.phone {
        lines.push(Line::from(format!("Phone: {phone}")));
    }
    if let Some(notes) = &card.notes {
        lines.push(Line::from(format!("Notes: {notes}")));
    }
    lines.push(Line::from(""));
    for item in &card.items {
        lines.push(Line::from(format!("  {item}")));
    }
    lines.push(Line::from(""));

    let options: Vec<Span> = card
        .status_options
        .iter()
        .map(|(status, current)| {
            if *current {
                Span::styled(
                    format!("[{}] ", status.label()),
                    Style::default().fg(status_color(*status)).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(format!("{} ", status.label()), Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    lines.push(Line::from(options));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    f.render_widget(paragraph, area);
}

fn status_color(status: OrderStatus) -> Color {
    match status {
        OrderStatus::Pending => Color::Yellow,
        OrderStatus::Confirmed => Color::Blue,
        OrderStatus::Preparing => Color::Cyan,
        OrderStatus::Ready => Color::Magenta,
        OrderStatus::Delivered => Color::Green,
        OrderStatus::Cancelled => Color::DarkGray,
    }
}
