// crates/cart-client/src/components/item_form.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use cart_client::{FormField, MenuItemForm};

pub fn draw_item_form(f: &mut Frame, area: Rect, form: &MenuItemForm) {
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", form.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Description
            Constraint::Length(3), // Price
            Constraint::Length(3), // Category
            Constraint::Length(3), // Image URL
            Constraint::Length(3), // Available
            Constraint::Min(1),    // Hints
        ])
        .split(inner);

    for (i, field) in FormField::ALL.iter().enumerate() {
        let focused = *field == form.focus;
        let mut spans = vec![Span::raw(form.value(*field))];
        if focused && field.is_text() {
            spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
        }
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        let input = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(field.label())
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        f.render_widget(input, chunks[i]);
    }

    let hints = Paragraph::new("[Tab] Next field  [Space] Toggle  [Enter] Save  [Esc] Cancel")
        .style(Style::default().fg(Color::Gray));
    f.render_widget(hints, chunks[6]);
}
