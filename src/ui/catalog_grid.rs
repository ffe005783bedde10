//! Catalog section: heading, course grid, and load-more footer

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::course_card::{self, CARD_HEIGHT};
use super::layout::{button, columns_for_width};
use crate::app::state::AppState;
use crate::browse::{BrowseSession, Results};
use crate::catalog::Catalog;
use crate::theme::Theme;

/// Height of the load-more footer in lines
pub const FOOTER_HEIGHT: u16 = 2;

/// "(N course)" / "(N courses)"
pub fn count_annotation(total: usize) -> String {
    let plural = if total == 1 { "" } else { "s" };
    format!("({total} course{plural})")
}

/// Heading annotation, shown only while a search or category narrows the list
pub fn result_summary(session: &BrowseSession, results: &Results<'_>) -> Option<String> {
    session.is_filtered().then(|| count_annotation(results.total()))
}

/// Explanation shown when nothing matches
pub fn empty_message(session: &BrowseSession) -> String {
    if session.is_searching() {
        format!(
            "No courses match \"{}\". Try adjusting your search or filters.",
            session.query()
        )
    } else {
        "No courses available with the current filters.".to_string()
    }
}

/// Draw the catalog section
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    state: &mut AppState,
    catalog: &Catalog,
    theme: &Theme,
    focused: bool,
) {
    if area.height == 0 {
        return;
    }
    let results = state.browse.results(catalog);

    // Heading
    let mut heading = vec![Span::styled(
        "Course Catalog",
        Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
    )];
    if let Some(summary) = result_summary(&state.browse, &results) {
        heading.push(Span::styled(format!(" {summary}"), Style::default().fg(theme.fg_muted)));
    }
    let filter_hint = format!("[f] {} ▾", state.browse.category());
    let heading_area = Rect { height: 1, ..area };
    frame.render_widget(Paragraph::new(Line::from(heading)), heading_area);
    frame.render_widget(
        Paragraph::new(Span::styled(filter_hint, Style::default().fg(theme.accent_secondary)))
            .alignment(Alignment::Right),
        heading_area,
    );

    let body = Rect { y: area.y + 1, height: area.height - 1, ..area };
    if results.is_empty() {
        draw_empty(frame, body, &state.browse, theme);
        return;
    }

    let footer_height = if results.has_more() { FOOTER_HEIGHT.min(body.height) } else { 0 };
    let grid_area = Rect { height: body.height - footer_height, ..body };
    draw_grid(frame, grid_area, state, &results, theme, focused);

    if footer_height > 0 {
        let footer = Rect { y: grid_area.y + grid_area.height, height: footer_height, ..body };
        draw_footer(frame, footer, &results, theme);
    }
}

fn draw_grid(
    frame: &mut Frame,
    area: Rect,
    state: &mut AppState,
    results: &Results<'_>,
    theme: &Theme,
    focused: bool,
) {
    let visible = results.visible();
    let columns = columns_for_width(area.width);
    let rows = (area.height / CARD_HEIGHT).max(1) as usize;

    // Update layout for navigation
    let grid = &mut state.grid;
    grid.columns = columns;
    grid.visible_rows = rows;
    grid.clamp(visible.len());
    grid.ensure_selection_visible();

    let card_width = area.width / columns as u16;
    let first = grid.scroll_row * columns;
    for (offset, course) in visible.iter().skip(first).take(rows * columns).enumerate() {
        let row = (offset / columns) as u16;
        let col = (offset % columns) as u16;
        let y = area.y + row * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(area.y + area.height - y);
        if height == 0 {
            break;
        }
        let card = Rect::new(area.x + col * card_width, y, card_width, height);
        let selected = focused && first + offset == grid.selected;
        course_card::draw(frame, card, course, theme, selected);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, results: &Results<'_>, theme: &Theme) {
    let load_more = Line::from(vec![
        Span::styled("[m] ", Style::default().fg(theme.fg_muted)),
        button(format!(" Load More Courses ({} remaining) ", results.remaining()), false, theme),
    ]);
    let show_all = Line::from(vec![
        Span::styled("[M] ", Style::default().fg(theme.fg_muted)),
        Span::styled(
            format!("Show All {} Courses", results.total()),
            Style::default().fg(theme.fg_muted),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(vec![load_more, show_all]).alignment(Alignment::Center),
        area,
    );
}

fn draw_empty(frame: &mut Frame, area: Rect, session: &BrowseSession, theme: &Theme) {
    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            "No courses found",
            Style::default().fg(theme.fg_muted).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(empty_message(session), Style::default().fg(theme.fg_muted))),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true }),
        area,
    );
}
