// crates/cart-client/src/components/confirmation.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use cart_client::view_model::confirmation_view;
use cart_client::Confirmation;

pub fn draw_confirmation(f: &mut Frame, area: Rect, confirmation: &Confirmation) {
    f.render_widget(Clear, area);

    let view = confirmation_view(confirmation);

    let mut lines = vec![
        Line::from(Span::styled(
            view.title.clone(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Customer: {}", view.customer_name)),
    ];
    if let Some(notes) = &view.notes {
        lines.push(Line::from(format!("Notes: {notes}")));
    }
    lines.push(Line::from(""));

    for (item, total) in &view.items {
        lines.push(Line::from(vec![
            Span::raw(format!("{item:<30}")),
            Span::styled(total.clone(), Style::default().fg(Color::Green)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(format!("Subtotal: {}", view.totals.subtotal)));
    lines.push(Line::from(format!("Tax:      {}", view.totals.tax)));
    lines.push(Line::from(Span::styled(
        format!("Total:    {}", view.totals.total),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(view.message, Style::default().fg(Color::Yellow))));
    lines.push(Line::from(Span::styled(
        "[N] New Order  [Esc] Close",
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Order Confirmed ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );

    f.render_widget(paragraph, area);
}
