//! Key help overlay

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::layout::centered_rect;
use crate::theme::Theme;

const BINDINGS: &[(&str, &str)] = &[
    ("h j k l / arrows", "Move between cards"),
    ("g / G", "First / last card"),
    ("Tab", "Switch catalog / continue learning"),
    ("Enter", "Open selected course"),
    ("/", "Search courses"),
    ("Ctrl-U", "Clear search"),
    ("f", "Filter by difficulty"),
    ("m", "Load more courses"),
    ("M", "Show all courses"),
    ("t", "Toggle light / dark"),
    (":", "Command prompt"),
    ("Esc", "Leave search or close"),
    ("q", "Quit"),
];

const COMMANDS: &str = ":more :all :filter <level> :search <text> :clear :theme :q";

/// Draw the help overlay centered in `area`
pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme) {
    let height = BINDINGS.len() as u16 + 5;
    let popup = centered_rect(64, height, area);

    let key_style = Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!("{keys:>18}  "), key_style),
                Span::styled(*what, Style::default().fg(theme.fg_primary)),
            ])
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(COMMANDS, Style::default().fg(theme.fg_muted))));

    let block = Block::default()
        .title(" Help ")
        .title_bottom(Line::from(" any key to close ").right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
