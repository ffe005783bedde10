//! Course card widget

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use super::layout::{button, clamp_lines};
use crate::catalog::{Course, Difficulty, STUDENTS_CAPTION};
use crate::theme::Theme;

/// Total card height including borders
pub const CARD_HEIGHT: u16 = 13;

const TITLE_LINES: usize = 2;
const DESCRIPTION_LINES: usize = 3;

/// Badge span for a difficulty level
pub fn difficulty_badge(difficulty: Difficulty, theme: &Theme) -> Span<'static> {
    Span::styled(
        format!(" {} ", difficulty.label()),
        Style::default()
            .fg(theme.badge_text)
            .bg(theme.badge_color(difficulty))
            .add_modifier(Modifier::BOLD),
    )
}

/// Text for the progress row, `None` when the card has no progress section
pub fn progress_label(course: &Course) -> Option<String> {
    course.visible_progress().map(|p| format!("{p}%"))
}

/// Fill ratio for the progress bar; the label keeps the raw value
fn progress_ratio(progress: i32) -> f64 {
    f64::from(progress.clamp(0, 100)) / 100.0
}

/// Draw one course card
pub fn draw(frame: &mut Frame, area: Rect, course: &Course, theme: &Theme, selected: bool) {
    let border_color = if selected { theme.border_focused } else { theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width < 4 || inner.height == 0 {
        return;
    }

    let [image, badge, title, description, meta, progress, bar, action] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(TITLE_LINES as u16),
        Constraint::Length(DESCRIPTION_LINES as u16),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let width = inner.width as usize;
    let muted = Style::default().fg(theme.fg_muted);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("▣ ", muted),
            Span::styled(course.image_or_placeholder().to_string(), muted),
        ])),
        image,
    );

    let badge_line = Line::from(difficulty_badge(course.difficulty, theme));
    frame.render_widget(Paragraph::new(badge_line), badge);

    let title_style = Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD);
    let title_lines: Vec<Line> = clamp_lines(&course.title, width, TITLE_LINES)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, title_style)))
        .collect();
    frame.render_widget(Paragraph::new(title_lines), title);

    let description_lines: Vec<Line> = clamp_lines(&course.description, width, DESCRIPTION_LINES)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(theme.fg_primary))))
        .collect();
    frame.render_widget(Paragraph::new(description_lines), description);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("◷ {}", course.duration), muted),
            Span::raw("  "),
            Span::styled(format!("⚇ {STUDENTS_CAPTION}"), muted),
        ])),
        meta,
    );

    if let (Some(value), Some(label)) = (course.visible_progress(), progress_label(course)) {
        let padding = width.saturating_sub("Progress".len() + label.chars().count());
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Progress", muted),
                Span::raw(" ".repeat(padding)),
                Span::styled(
                    label,
                    Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
                ),
            ])),
            progress,
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(theme.accent_primary).bg(theme.bg_tertiary))
                .ratio(progress_ratio(value))
                .label("")
                .use_unicode(true),
            bar,
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(button(
            format!(" {} ", course.call_to_action()),
            selected,
            theme,
        )))
        .alignment(Alignment::Center),
        action,
    );
}
