// crates/cart-client/src/components/help.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::app::View;

const ORDER_KEYS: &[(&str, &str)] = &[
    ("Tab/Shift+Tab", "Next / Previous Category"),
    ("↑/↓", "Select Menu Item"),
    ("Enter/a", "Add to Cart"),
    ("[ / ]", "Select Cart Line"),
    ("+ / -", "Change Quantity"),
    ("x", "Remove Line"),
    ("n / o", "Edit Name / Special Instructions"),
    ("e / p", "Edit Email / Phone"),
    ("s", "Place Order"),
    ("b", "Print Bill"),
    ("N", "New Order"),
    ("r", "Reload Menu"),
];

const ADMIN_KEYS: &[(&str, &str)] = &[
    ("1 / 2 / 3", "Dashboard / Orders / Menu"),
    ("r", "Refresh Section"),
    ("↑/↓", "Select Row"),
    ("f", "Cycle Status Filter"),
    ("←/→", "Previous / Next Page"),
    ("+ / -", "Advance / Revert Order Status"),
    ("a / e", "Add / Edit Menu Item"),
    ("t", "Enable / Disable Item"),
    ("d", "Delete Item"),
];

pub fn draw_help(f: &mut Frame, area: Rect, view: View) {
    // Clear the area first for the overlay
    f.render_widget(Clear, area);

    let keys = match view {
        View::Order => ORDER_KEYS,
        View::Admin => ADMIN_KEYS,
    };

    let mut help_items: Vec<ListItem> = keys
        .iter()
        .map(|(key, action)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{key:<14}"),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" - {action}")),
            ]))
        })
        .collect();
    help_items.push(ListItem::new(Line::from(vec![
        Span::styled(format!("{:<14}", "Q/q"), Style::default().fg(Color::Red)),
        Span::raw(" - Quit"),
    ])));

    let help_list = List::new(help_items).block(
        Block::default()
            .title(" Help - Keyboard Shortcuts ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(help_list, area);

    // Add footer with close instruction
    let footer = Paragraph::new("Press F1 or ESC to close help")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    let footer_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    f.render_widget(footer, footer_area);
}
