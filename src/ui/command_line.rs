//! Command line UI component

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::layout::build_line_with_cursor;
use crate::app::state::{CommandLineState, CommandMode};
use crate::theme::Theme;

/// Hint shown when there is nothing else to say
pub const IDLE_HINT: &str = "Press / to search, f to filter, : for commands, ? for help";

/// Draw the command line at the bottom of the screen
pub fn draw(frame: &mut Frame, area: Rect, state: &CommandLineState, theme: &Theme) {
    let line = match state.mode {
        CommandMode::Normal => {
            let (text, style) = match &state.message {
                Some(msg) if state.is_error => (msg.as_str(), Style::default().fg(theme.error)),
                Some(msg) => (msg.as_str(), Style::default().fg(theme.fg_secondary)),
                None => (IDLE_HINT, Style::default().fg(theme.fg_muted)),
            };
            Line::from(Span::styled(text.to_string(), style))
        }
        CommandMode::Command => {
            let text = format!(":{}", state.input.text);
            // +1 for the prompt
            build_line_with_cursor(
                &text,
                state.input.cursor + 1,
                Style::default().fg(theme.accent_primary),
                theme,
            )
        }
    };

    frame.render_widget(Paragraph::new(line).style(Style::default().bg(theme.bg_primary)), area);
}
