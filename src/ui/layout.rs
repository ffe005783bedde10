//! Layout utilities and shared widgets

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::theme::Theme;

/// Number of card columns for a given width (1 to 4)
pub fn columns_for_width(width: u16) -> usize {
    match width {
        0..60 => 1,
        60..100 => 2,
        100..140 => 3,
        _ => 4,
    }
}

/// A rectangle of at most `width` x `height`, centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Wrap `text` to `width` columns, keeping at most `max_lines` lines.
///
/// When text is cut off, the last kept line ends with an ellipsis.
pub fn clamp_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }
    let wrapped = textwrap::wrap(text, width);
    let truncated = wrapped.len() > max_lines;
    let mut lines: Vec<String> =
        wrapped.into_iter().take(max_lines).map(|line| line.into_owned()).collect();

    if truncated {
        if let Some(last) = lines.last_mut() {
            if last.chars().count() >= width {
                let keep = width.saturating_sub(1);
                *last = last.chars().take(keep).collect();
            }
            last.push('…');
        }
    }
    lines
}

/// Build a line with a visible cursor
pub fn build_line_with_cursor(
    text: &str,
    cursor_pos: usize,
    base_style: Style,
    theme: &Theme,
) -> Line<'static> {
    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();

    // Text before cursor
    if cursor_pos > 0 {
        let before: String = chars.iter().take(cursor_pos).collect();
        spans.push(Span::styled(before, base_style));
    }

    // Cursor character (or space if at end)
    let cursor_char = chars.get(cursor_pos).copied().unwrap_or(' ');
    let cursor_style =
        Style::default().fg(theme.bg_primary).bg(theme.cursor).add_modifier(Modifier::BOLD);
    spans.push(Span::styled(cursor_char.to_string(), cursor_style));

    // Text after cursor
    if cursor_pos + 1 < chars.len() {
        let after: String = chars.iter().skip(cursor_pos + 1).collect();
        spans.push(Span::styled(after, base_style));
    }

    Line::from(spans)
}

/// A styled button label
pub fn button<'a>(text: impl Into<String>, focused: bool, theme: &Theme) -> Span<'a> {
    let style = if focused {
        Style::default().fg(theme.bg_primary).bg(theme.accent_primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_secondary).bg(theme.bg_tertiary)
    };
    Span::styled(text.into(), style)
}

/// Render a buffer as plain text, one line per row
#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
