// crates/cart-client/src/components/status_bar.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use cart_client::NoticeKind;

use crate::app::{App, InputMode, View};

pub fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let (msg, style) = match app.input_mode {
        InputMode::Editing(field) => {
            let input = vec![
                Span::raw(format!("{}: ", field.label())),
                Span::styled(&app.input_buffer, Style::default().fg(Color::Yellow)),
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
                Span::raw(" [Enter] Save [Esc] Cancel"),
            ];
            (Line::from(input), Style::default().fg(Color::Yellow))
        }
        _ => match app.notice() {
            Some(notice) => {
                let color = match notice.kind {
                    NoticeKind::Success => Color::Green,
                    NoticeKind::Error => Color::Red,
                };
                let line = Line::from(vec![
                    Span::styled(notice.message.clone(), Style::default().fg(color)),
                    Span::styled("  [Esc] Dismiss", Style::default().fg(Color::Gray)),
                ]);
                (line, Style::default().fg(color))
            }
            None => (shortcuts(app.view), Style::default()),
        },
    };

    let status_block = Block::default().borders(Borders::ALL).border_style(style);

    let paragraph = Paragraph::new(msg)
        .block(status_block)
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn shortcuts(view: View) -> Line<'static> {
    let key = |k: &'static str, color: Color| {
        Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
    };
    let spans = match view {
        View::Order => vec![
            key("[Tab]", Color::Blue),
            Span::raw("Category "),
            key("[Enter]", Color::Green),
            Span::raw("Add "),
            key("[+/-]", Color::Cyan),
            Span::raw("Qty "),
            key("[x]", Color::Red),
            Span::raw("Remove "),
            key("[S]", Color::Green),
            Span::raw("ubmit "),
            key("[B]", Color::Magenta),
            Span::raw("ill "),
            key("[Q]", Color::Gray),
            Span::raw("uit"),
        ],
        View::Admin => vec![
            key("[1-3]", Color::Blue),
            Span::raw("Section "),
            key("[R]", Color::Cyan),
            Span::raw("efresh "),
            key("[↑/↓]", Color::White),
            Span::raw("Select "),
            key("[Q]", Color::Gray),
            Span::raw("uit"),
        ],
    };
    Line::from(spans)
}
