//! UI rendering components

pub mod catalog_grid;
pub mod command_line;
pub mod continue_learning;
pub mod course_card;
pub mod filter_popup;
pub mod header;
pub mod help;
pub mod layout;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Block,
};

use crate::app::state::{AppState, Focus};
use crate::catalog::Catalog;
use crate::theme::ThemeContext;

/// Rows the catalog keeps for itself before the continue learning panel gets any
const MIN_CATALOG_HEIGHT: u16 = course_card::CARD_HEIGHT + 1;

/// Split the body between the catalog and the continue learning panel
fn split_body(body: Rect, enrolled: usize) -> (Rect, Rect) {
    let wanted = continue_learning::panel_height(enrolled);
    let panel = if wanted == 0 {
        0
    } else if body.height >= MIN_CATALOG_HEIGHT + wanted {
        wanted
    } else {
        // Compact list: heading plus a line per course
        (enrolled as u16 + 1).min(body.height / 3)
    };
    let [catalog, panel] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(panel)]).areas(body);
    (catalog, panel)
}

/// Main draw function
pub fn draw(frame: &mut Frame, state: &mut AppState, catalog: &Catalog, theme: &ThemeContext) {
    let palette = theme.theme();
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(palette.bg_primary)), area);

    let [header_area, body, command_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    header::draw(frame, header_area, &state.search, theme);

    let enrolled = catalog.continue_learning();
    let (catalog_area, panel_area) = split_body(body, enrolled.len());
    let catalog_focused = state.focus == Focus::Catalog;
    catalog_grid::draw(frame, catalog_area, state, catalog, palette, catalog_focused);
    continue_learning::draw(
        frame,
        panel_area,
        &enrolled,
        state.continue_selected,
        palette,
        !catalog_focused,
    );

    command_line::draw(frame, command_area, &state.command_line, palette);

    if state.filter.open {
        let counts = state.browse.counts(catalog);
        filter_popup::draw(
            frame,
            catalog_area,
            &state.filter,
            state.browse.category(),
            &counts,
            palette,
        );
    }
    if state.show_help {
        help::draw(frame, area, palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::BrowseSession;
    use crate::theme::ThemeMode;
    use layout::buffer_text;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(state: &mut AppState, width: u16, height: u16) -> String {
        let catalog = Catalog::builtin().unwrap();
        let theme = ThemeContext::init(ThemeMode::Dark);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| draw(frame, state, &catalog, &theme))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn full_screen_shows_every_section() {
        let mut state = AppState::new(BrowseSession::default());
        let text = render(&mut state, 160, 50);
        assert!(text.contains("Search courses..."));
        assert!(text.contains("Course Catalog"));
        assert!(text.contains("Continue Learning"));
        assert!(text.contains("Load More Courses (4 remaining)"));
        assert!(text.contains("Press / to search"));
    }

    #[test]
    fn small_screen_uses_compact_panel() {
        let mut state = AppState::new(BrowseSession::default());
        let text = render(&mut state, 80, 24);
        assert!(text.contains("Course Catalog"));
        assert!(text.contains("Continue Learning"));
        assert!(text.contains("▸"));
    }

    #[test]
    fn overlays_draw_on_top() {
        let mut state = AppState::new(BrowseSession::default());
        state.filter.open = true;
        assert!(render(&mut state, 120, 40).contains("Filter by Difficulty"));

        let mut state = AppState::new(BrowseSession::default());
        state.show_help = true;
        assert!(render(&mut state, 120, 40).contains(" Help "));
    }

    #[test]
    fn body_split_keeps_catalog_room() {
        let (catalog, panel) = split_body(Rect::new(0, 0, 100, 60), 3);
        assert_eq!(panel.height, continue_learning::panel_height(3));
        assert_eq!(catalog.height + panel.height, 60);

        let (_, panel) = split_body(Rect::new(0, 0, 100, 60), 0);
        assert_eq!(panel.height, 0);

        let (_, panel) = split_body(Rect::new(0, 0, 100, 20), 3);
        assert_eq!(panel.height, 4);
    }
}
