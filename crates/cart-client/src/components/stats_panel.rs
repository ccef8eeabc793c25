// crates/cart-client/src/components/stats_panel.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use cart_client::view_model::stats_view;

use crate::app::App;

pub fn draw_stats_panel(f: &mut Frame, area: Rect, app: &App) {
    let Some(stats) = app.admin.stats() else {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().title(" Dashboard ").borders(Borders::ALL));
        f.render_widget(loading, area);
        return;
    };
    let view = stats_view(stats);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(chunks[0]);

    let tile = |title: &'static str, value: &str, color: Color| {
        Paragraph::new(Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().title(title).borders(Borders::ALL))
    };
    f.render_widget(tile(" Total Orders ", &view.total_orders, Color::Cyan), tiles[0]);
    f.render_widget(tile(" Pending ", &view.pending_orders, Color::Yellow), tiles[1]);
    f.render_widget(tile(" Revenue ", &view.total_revenue, Color::Green), tiles[2]);

    let items: Vec<ListItem> = view
        .popular_items
        .iter()
        .map(|(name, count)| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{name:<30}")),
                Span::styled(count.clone(), Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Popular Items ")
            .borders(Borders::ALL),
    );
    f.render_widget(list, chunks[1]);
}
