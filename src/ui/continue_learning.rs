//! Continue learning panel: the enrolled courses

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::course_card::{self, CARD_HEIGHT, progress_label};
use super::layout::columns_for_width;
use crate::catalog::Course;
use crate::theme::Theme;

/// Height the panel wants for `enrolled` courses, 0 when hidden
pub fn panel_height(enrolled: usize) -> u16 {
    if enrolled == 0 { 0 } else { CARD_HEIGHT + 2 }
}

/// Draw the panel; `selected` is only highlighted when `focused`
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    courses: &[&Course],
    selected: usize,
    theme: &Theme,
    focused: bool,
) {
    if courses.is_empty() || area.height == 0 {
        return;
    }

    let heading_area = Rect { height: 1, ..area };
    let title_style = if focused {
        Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(Span::styled("Continue Learning", title_style)),
        heading_area,
    );
    frame.render_widget(
        Paragraph::new(Span::styled("[Tab] View All →", Style::default().fg(theme.fg_muted)))
            .alignment(Alignment::Right),
        heading_area,
    );

    let body = Rect { y: area.y + 1, height: area.height - 1, ..area };
    if body.height >= CARD_HEIGHT {
        draw_cards(frame, body, courses, selected, theme, focused);
    } else {
        draw_compact(frame, body, courses, selected, theme, focused);
    }
}

/// One row of cards, scrolled so the selection stays on screen
fn draw_cards(
    frame: &mut Frame,
    area: Rect,
    courses: &[&Course],
    selected: usize,
    theme: &Theme,
    focused: bool,
) {
    let columns = columns_for_width(area.width);
    let first = (selected + 1).saturating_sub(columns);
    let card_width = area.width / columns as u16;
    for (offset, course) in courses.iter().skip(first).take(columns).enumerate() {
        let card = Rect::new(area.x + offset as u16 * card_width, area.y, card_width, CARD_HEIGHT);
        course_card::draw(frame, card, course, theme, focused && first + offset == selected);
    }
}

/// A line per course when there is no room for cards
fn draw_compact(
    frame: &mut Frame,
    area: Rect,
    courses: &[&Course],
    selected: usize,
    theme: &Theme,
    focused: bool,
) {
    let lines: Vec<Line> = courses
        .iter()
        .enumerate()
        .map(|(i, course)| {
            let style = if focused && i == selected {
                Style::default().fg(theme.fg_primary).bg(theme.selection)
            } else {
                Style::default().fg(theme.fg_secondary)
            };
            let mut spans = vec![Span::styled(format!("▸ {}", course.title), style)];
            if let Some(label) = progress_label(course) {
                spans.push(Span::styled(format!("  {label}"), Style::default().fg(theme.success)));
            }
            Line::from(spans)
        })
        .collect();
    let scroll = (selected + 1).saturating_sub(area.height as usize) as u16;
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}
