//! Application state definitions

use crate::browse::BrowseSession;
use crate::catalog::Category;

/// Which section has keyboard focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Catalog,
    ContinueLearning,
}

/// Single-line editable text with a character-indexed cursor
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text
    pub text: String,
    /// Cursor position in characters
    pub cursor: usize,
}

impl TextInput {
    /// Convert character index to byte index
    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.text.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(self.text.len())
    }

    /// Get the number of characters in input
    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Replace the text and put the cursor at the end
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Insert a character at cursor
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.text.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.text.remove(byte_idx);
        }
    }

    /// Delete character at cursor
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.char_count() {
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.text.remove(byte_idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }
}

/// State for the header search box
#[derive(Debug, Clone, Default)]
pub struct SearchBox {
    /// Whether keystrokes go to the search box
    pub active: bool,
    /// Typed query
    pub input: TextInput,
}

/// State for the difficulty filter popover
#[derive(Debug, Clone, Default)]
pub struct FilterPopup {
    /// Whether the popover is shown
    pub open: bool,
    /// Highlighted row, an index into [`Category::ALL`]
    pub cursor: usize,
}

impl FilterPopup {
    /// Open (starting on the current category) or close the popover
    pub fn toggle(&mut self, current: Category) {
        self.open = !self.open;
        if self.open {
            self.cursor = current.index();
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1).min(Category::ALL.len() - 1);
    }

    /// Category under the cursor
    pub fn highlighted(&self) -> Category {
        Category::ALL[self.cursor.min(Category::ALL.len() - 1)]
    }

    /// Pick the highlighted category and close
    pub fn select(&mut self) -> Category {
        self.open = false;
        self.highlighted()
    }
}

/// Selection and scrolling for the course grid
#[derive(Debug, Clone)]
pub struct GridState {
    /// Selected card, an index into the visible results
    pub selected: usize,
    /// First card row on screen
    pub scroll_row: usize,
    /// Cards per row (updated on render)
    pub columns: usize,
    /// Card rows that fit on screen (updated on render)
    pub visible_rows: usize,
}

impl Default for GridState {
    fn default() -> Self {
        Self { selected: 0, scroll_row: 0, columns: 1, visible_rows: 1 }
    }
}

impl GridState {
    /// Back to the first card
    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll_row = 0;
    }

    fn columns(&self) -> usize {
        self.columns.max(1)
    }

    /// Keep the selection inside `len` cards
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    pub fn move_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_right(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.selected >= self.columns() {
            self.selected -= self.columns();
        }
    }

    /// Move one row down, landing on the last card if the next row is short
    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let cols = self.columns();
        if self.selected / cols < (len - 1) / cols {
            self.selected = (self.selected + cols).min(len - 1);
        }
    }

    pub fn move_bottom(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Ensure the selected row is visible by adjusting the scroll row
    pub fn ensure_selection_visible(&mut self) {
        let row = self.selected / self.columns();
        if row < self.scroll_row {
            self.scroll_row = row;
        }
        let visible = self.visible_rows.max(1);
        if row >= self.scroll_row + visible {
            self.scroll_row = row + 1 - visible;
        }
    }
}

/// Command line mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommandMode {
    /// Command line showing status or hints
    #[default]
    Normal,
    /// Accepting : commands
    Command,
}

/// State for the command line input
#[derive(Debug, Clone, Default)]
pub struct CommandLineState {
    /// Current mode
    pub mode: CommandMode,
    /// Input buffer
    pub input: TextInput,
    /// Status/error message to display (when not in input mode)
    pub message: Option<String>,
    /// Whether message is an error
    pub is_error: bool,
    /// Command history
    pub history: Vec<String>,
    /// Current history index when navigating
    pub history_index: Option<usize>,
}

impl CommandLineState {
    /// Maximum number of history entries to keep
    const MAX_HISTORY: usize = 100;

    /// Start command mode
    pub fn enter_command_mode(&mut self) {
        self.mode = CommandMode::Command;
        self.input.clear();
        self.message = None;
        self.history_index = None;
    }

    /// Exit input mode
    pub fn exit_input_mode(&mut self) {
        self.mode = CommandMode::Normal;
        self.input.clear();
    }

    /// Set a status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = false;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Add to history
    pub fn add_to_history(&mut self, cmd: String) {
        if !cmd.is_empty() && self.history.last() != Some(&cmd) {
            if self.history.len() >= Self::MAX_HISTORY {
                self.history.remove(0);
            }
            self.history.push(cmd);
        }
    }

    /// Navigate history up
    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        match self.history_index {
            None => self.history_index = Some(self.history.len() - 1),
            Some(i) if i > 0 => self.history_index = Some(i - 1),
            _ => {}
        }
        if let Some(i) = self.history_index {
            self.input.set(self.history[i].clone());
        }
    }

    /// Navigate history down
    pub fn history_down(&mut self) {
        if let Some(i) = self.history_index {
            if i + 1 < self.history.len() {
                self.history_index = Some(i + 1);
                self.input.set(self.history[i + 1].clone());
            } else {
                self.history_index = None;
                self.input.clear();
            }
        }
    }
}

/// Full application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Query, category, and reveal cursor
    pub browse: BrowseSession,

    /// Section with keyboard focus
    pub focus: Focus,

    /// Header search box
    pub search: SearchBox,

    /// Difficulty filter popover
    pub filter: FilterPopup,

    /// Catalog grid selection
    pub grid: GridState,

    /// Selected card in the continue learning row
    pub continue_selected: usize,

    /// Command line state
    pub command_line: CommandLineState,

    /// Whether the help overlay is shown
    pub show_help: bool,
}

impl AppState {
    pub fn new(browse: BrowseSession) -> Self {
        Self { browse, ..Default::default() }
    }

    /// Push the search box text into the browse session
    pub fn sync_query(&mut self) {
        if self.browse.set_query(self.search.input.text.clone()) {
            self.grid.reset();
        }
    }

    /// Apply a category filter
    pub fn apply_category(&mut self, category: Category) {
        if self.browse.set_category(category) {
            self.grid.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_edits_at_cursor() {
        let mut input = TextInput::default();
        for c in "rust".chars() {
            input.insert_char(c);
        }
        input.move_start();
        input.insert_char('>');
        assert_eq!(input.text, ">rust");

        input.move_end();
        input.delete_char();
        assert_eq!(input.text, ">rus");

        input.move_start();
        input.delete_char_forward();
        assert_eq!(input.text, "rus");
    }

    #[test]
    fn text_input_handles_multibyte() {
        let mut input = TextInput::default();
        input.set("café");
        input.move_left();
        input.insert_char('x');
        assert_eq!(input.text, "cafxé");
        assert_eq!(input.cursor, 4);
    }

    #[test]
    fn filter_popup_opens_on_current_category() {
        let mut popup = FilterPopup::default();
        popup.toggle(Category::Advanced);
        assert!(popup.open);
        assert_eq!(popup.highlighted(), Category::Advanced);
    }

    #[test]
    fn filter_popup_select_closes() {
        let mut popup = FilterPopup::default();
        popup.toggle(Category::All);
        popup.move_down();
        popup.move_down();
        assert_eq!(popup.select(), Category::Intermediate);
        assert!(!popup.open);
    }

    #[test]
    fn filter_popup_cursor_stays_in_range() {
        let mut popup = FilterPopup::default();
        popup.move_up();
        assert_eq!(popup.cursor, 0);
        for _ in 0..10 {
            popup.move_down();
        }
        assert_eq!(popup.highlighted(), Category::Expert);
    }

    #[test]
    fn grid_moves_by_rows() {
        let mut grid = GridState { columns: 4, ..Default::default() };
        grid.move_down(10);
        assert_eq!(grid.selected, 4);
        grid.move_down(10);
        // Last row only has two cards
        assert_eq!(grid.selected, 8);
        grid.move_right(10);
        grid.move_right(10);
        assert_eq!(grid.selected, 9);
        grid.move_up();
        assert_eq!(grid.selected, 5);
    }

    #[test]
    fn grid_move_down_lands_on_last_card_of_short_row() {
        let mut grid = GridState { columns: 4, selected: 7, ..Default::default() };
        grid.move_down(10);
        assert_eq!(grid.selected, 9);
    }

    #[test]
    fn grid_scrolls_to_selection() {
        let mut grid = GridState { columns: 2, visible_rows: 2, ..Default::default() };
        grid.selected = 6;
        grid.ensure_selection_visible();
        assert_eq!(grid.scroll_row, 2);

        grid.selected = 1;
        grid.ensure_selection_visible();
        assert_eq!(grid.scroll_row, 0);
    }

    #[test]
    fn grid_clamp_keeps_selection_in_bounds() {
        let mut grid = GridState { selected: 9, ..Default::default() };
        grid.clamp(3);
        assert_eq!(grid.selected, 2);
        grid.clamp(0);
        assert_eq!(grid.selected, 0);
    }

    #[test]
    fn history_navigation() {
        let mut cl = CommandLineState::default();
        cl.add_to_history("more".into());
        cl.add_to_history("theme".into());
        cl.add_to_history("theme".into());
        assert_eq!(cl.history.len(), 2);

        cl.history_up();
        assert_eq!(cl.input.text, "theme");
        cl.history_up();
        assert_eq!(cl.input.text, "more");
        cl.history_down();
        assert_eq!(cl.input.text, "theme");
        cl.history_down();
        assert!(cl.input.is_empty());
    }

    #[test]
    fn sync_query_resets_grid_on_change() {
        let mut state = AppState::default();
        state.grid.selected = 3;
        state.search.input.set("sonic");
        state.sync_query();
        assert_eq!(state.browse.query(), "sonic");
        assert_eq!(state.grid.selected, 0);
    }
}
