// crates/cart-client/src/components/menu_list.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Tabs},
    Frame,
};

use cart_client::view_model::menu_cards;
use cart_core::Category;

use crate::app::App;

pub fn draw_menu_list(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    // Category tabs
    let current = app.ordering.current_category();
    let titles: Vec<Line> = Category::ALL
        .iter()
        .map(|c| Line::from(c.label()))
        .collect();
    let selected = Category::ALL.iter().position(|c| *c == current).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL).title(" Menu "))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, chunks[0]);

    // Items of the current category
    let cards = menu_cards(app.ordering.menu(), current);
    let items: Vec<ListItem> = if cards.is_empty() {
        vec![ListItem::new(Span::styled(
            "No items in this category",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        cards
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let style = if i == app.ordering.selected_menu_index() {
                    Style::default().bg(Color::DarkGray)
                } else {
                    Style::default()
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(card.name.clone(), style.add_modifier(Modifier::BOLD)),
                        Span::raw("  "),
                        Span::styled(card.price.clone(), style.fg(Color::Green)),
                    ]),
                    Line::from(Span::styled(
                        card.description.clone(),
                        style.fg(Color::Gray),
                    )),
                ])
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" [Enter] Add to Cart ")
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(list, chunks[1]);
}
