//! Difficulty filter popover

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::course_card::difficulty_badge;
use crate::app::state::FilterPopup;
use crate::browse::CategoryCounts;
use crate::catalog::Category;
use crate::theme::Theme;

const POPUP_WIDTH: u16 = 34;
const POPUP_HEIGHT: u16 = Category::ALL.len() as u16 + 3;

/// Where the popover sits: under the top-right corner of `anchor`
pub fn popup_area(anchor: Rect) -> Rect {
    let width = POPUP_WIDTH.min(anchor.width);
    let height = POPUP_HEIGHT.min(anchor.height);
    Rect {
        x: anchor.x + anchor.width - width,
        y: anchor.y + 1.min(anchor.height - height),
        width,
        height,
    }
}

/// Draw the popover, if open
pub fn draw(
    frame: &mut Frame,
    anchor: Rect,
    popup: &FilterPopup,
    selected: Category,
    counts: &CategoryCounts,
    theme: &Theme,
) {
    if !popup.open || anchor.width == 0 || anchor.height == 0 {
        return;
    }
    let area = popup_area(anchor);

    let block = Block::default()
        .title(" Filter by Difficulty ")
        .title_bottom(Line::from(" Enter select · Esc close ").right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let lines: Vec<Line> = counts
        .iter()
        .map(|(category, count)| {
            let badge = match category.difficulty() {
                Some(level) => difficulty_badge(level, theme),
                None => Span::styled(
                    " All ",
                    Style::default()
                        .fg(theme.bg_primary)
                        .bg(theme.fg_muted)
                        .add_modifier(Modifier::BOLD),
                ),
            };
            let marker = if category == selected { "● " } else { "  " };
            let count = count.to_string();
            let used = marker.chars().count() + badge.width() + count.len();
            let row_style = if popup.highlighted() == category {
                Style::default().bg(theme.selection)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.accent_primary)),
                badge,
                Span::raw(" ".repeat(width.saturating_sub(used))),
                Span::styled(count, Style::default().fg(theme.fg_muted)),
            ])
            .style(row_style)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
