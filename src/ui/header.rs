//! Header bar: logo, search box, theme toggle

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::layout::build_line_with_cursor;
use crate::app::state::SearchBox;
use crate::theme::ThemeContext;

/// Header height including borders
pub const HEADER_HEIGHT: u16 = 3;

pub const WORDMARK: &str = "Sonic";
pub const SEARCH_PLACEHOLDER: &str = "Search courses...";
const CLEAR_HINT: &str = "✕ ^U";

/// Logo mark with the image variant for the active mode
fn logo_line(theme: &ThemeContext) -> Line<'static> {
    let palette = theme.theme();
    Line::from(vec![
        Span::styled("◆ ", Style::default().fg(palette.accent_primary)),
        Span::styled(
            WORDMARK,
            Style::default().fg(palette.fg_primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", theme.logo()), Style::default().fg(palette.fg_muted)),
    ])
}

fn search_line(search: &SearchBox, theme: &ThemeContext) -> Line<'static> {
    let palette = theme.theme();
    let mut line = if search.active {
        build_line_with_cursor(
            &search.input.text,
            search.input.cursor,
            Style::default().fg(palette.fg_primary),
            palette,
        )
    } else if search.input.is_empty() {
        Line::from(Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(palette.fg_muted)))
    } else {
        Line::from(Span::styled(
            search.input.text.clone(),
            Style::default().fg(palette.fg_primary),
        ))
    };
    line.spans.insert(0, Span::styled("⌕ ", Style::default().fg(palette.fg_muted)));
    line
}

/// Draw the header
pub fn draw(frame: &mut Frame, area: Rect, search: &SearchBox, theme: &ThemeContext) {
    let palette = theme.theme();
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.bg_primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }
    let row = Rect { height: 1, y: inner.y + inner.height.saturating_sub(1) / 2, ..inner };

    let logo_width = if row.width >= 80 { 30 } else { 9 };
    let [logo, search_area, toggle] = Layout::horizontal([
        Constraint::Length(logo_width),
        Constraint::Min(10),
        Constraint::Length(8),
    ])
    .areas(row);

    frame.render_widget(Paragraph::new(logo_line(theme)), logo);

    let border = if search.active { palette.border_focused } else { palette.border };
    let [field, hint] = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(if search.input.is_empty() { 0 } else { 6 }),
    ])
    .areas(search_area);
    frame.render_widget(
        Paragraph::new(search_line(search, theme))
            .style(Style::default().bg(palette.bg_tertiary))
            .block(
                Block::default()
                    .borders(Borders::LEFT)
                    .border_style(Style::default().fg(border)),
            ),
        field,
    );
    if !search.input.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(CLEAR_HINT, Style::default().fg(palette.fg_muted)))
                .alignment(Alignment::Right),
            hint,
        );
    }

    let icon = Line::from(vec![
        Span::styled("[t] ", Style::default().fg(palette.fg_muted)),
        Span::styled(theme.mode().icon(), Style::default().fg(palette.warning)),
    ]);
    frame.render_widget(Paragraph::new(icon).alignment(Alignment::Right), toggle);
}
