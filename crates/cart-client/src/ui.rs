// crates/cart-client/src/ui.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use cart_client::Section;

use crate::app::{App, View};
use crate::components::{
    cart_panel::draw_cart_panel,
    confirmation::draw_confirmation,
    help::draw_help,
    item_form::draw_item_form,
    menu_admin::draw_menu_admin,
    menu_list::draw_menu_list,
    order_list::draw_order_list,
    stats_panel::draw_stats_panel,
    status_bar::draw_status_bar,
};

pub fn draw(f: &mut Frame, app: &App) {
    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    draw_header(f, chunks[0], app);

    match app.view {
        View::Order => draw_order_view(f, chunks[1], app),
        View::Admin => draw_admin_view(f, chunks[1], app),
    }

    draw_status_bar(f, chunks[2], app);

    // Overlays
    if let (View::Order, Some(confirmation)) = (app.view, app.ordering.confirmation()) {
        draw_confirmation(f, centered_rect(60, 70, f.size()), confirmation);
    }
    if let Some(form) = &app.form {
        draw_item_form(f, centered_rect(60, 60, f.size()), form);
    }
    if app.show_help {
        draw_help(f, centered_rect(60, 70, f.size()), app.view);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let title = match app.view {
        View::Order => "Restaurant Ordering",
        View::Admin => "Restaurant Admin",
    };
    let mut left = vec![Span::styled(
        title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    if app.view == View::Admin {
        left.push(Span::raw("  "));
        for section in Section::ALL {
            let style = if section == app.admin.section() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let key = match section {
                Section::Dashboard => 1,
                Section::Orders => 2,
                Section::Menu => 3,
            };
            left.push(Span::styled(format!("[{key}]{} ", section.title()), style));
        }
    }

    let left_paragraph =
        Paragraph::new(Line::from(left)).block(Block::default().borders(Borders::ALL));
    f.render_widget(left_paragraph, header_chunks[0]);

    let right_paragraph = Paragraph::new(format!("API: {}  [?]Help", app.api.base_url()))
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(right_paragraph, header_chunks[1]);
}

fn draw_order_view(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    draw_menu_list(f, chunks[0], app);
    draw_cart_panel(f, chunks[1], app);
}

fn draw_admin_view(f: &mut Frame, area: Rect, app: &App) {
    match app.admin.section() {
        Section::Dashboard => draw_stats_panel(f, area, app),
        Section::Orders => draw_order_list(f, area, app),
        Section::Menu => draw_menu_admin(f, area, app),
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
