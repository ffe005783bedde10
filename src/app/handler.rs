//! Key event handling
//!
//! Input is routed to whichever element owns the keyboard: the command
//! prompt, the search box, the help overlay, the filter popover, or the
//! browse view itself. Handling never touches the terminal, so every path
//! can be driven from tests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::{Command, ParseResult, parse_command};
use super::input::{Action, key_with_modifier_to_action};
use super::state::{AppState, CommandMode, Focus};
use crate::catalog::{Catalog, Category};
use crate::theme::ThemeContext;

/// Mutable view over everything a key press may change
pub struct Handler<'a> {
    pub state: &'a mut AppState,
    pub catalog: &'a Catalog,
    pub theme: &'a mut ThemeContext,
}

impl Handler<'_> {
    /// Handle a key press, returns true if should exit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.state.command_line.mode == CommandMode::Command {
            return self.handle_command_key(key);
        }
        if self.state.search.active {
            self.handle_search_key(key);
            return false;
        }
        if self.state.show_help {
            self.state.show_help = false;
            return false;
        }
        if self.state.filter.open {
            self.handle_filter_key(key.code);
            return false;
        }

        match key_with_modifier_to_action(key.code, key.modifiers) {
            Some(action) => self.handle_action(action),
            None => false,
        }
    }

    fn handle_action(&mut self, action: Action) -> bool {
        let visible = self.state.browse.results(self.catalog).visible().len();
        let enrolled = self.catalog.continue_learning().len();
        let grid = &mut self.state.grid;

        match (action, self.state.focus) {
            (Action::Quit, _) => return true,
            (Action::Left, Focus::Catalog) => grid.move_left(),
            (Action::Right, Focus::Catalog) => grid.move_right(visible),
            (Action::Up, Focus::Catalog) => grid.move_up(),
            (Action::Down, Focus::Catalog) => grid.move_down(visible),
            (Action::Top, Focus::Catalog) => grid.reset(),
            (Action::Bottom, Focus::Catalog) => grid.move_bottom(visible),
            (Action::Left, Focus::ContinueLearning) => {
                self.state.continue_selected = self.state.continue_selected.saturating_sub(1);
            }
            (Action::Right, Focus::ContinueLearning) => {
                if self.state.continue_selected + 1 < enrolled {
                    self.state.continue_selected += 1;
                }
            }
            (Action::Up | Action::Top, Focus::ContinueLearning) => {
                self.state.focus = Focus::Catalog;
            }
            (Action::Down | Action::Bottom, Focus::ContinueLearning) => {}
            (Action::SwitchPanel, _) => self.switch_panel(enrolled),
            (Action::Select, _) => self.activate_selected(),
            (Action::Back, _) => {
                if self.state.browse.is_searching() {
                    self.clear_search();
                } else {
                    self.state.command_line.clear_message();
                }
            }
            (Action::Search, _) => {
                self.state.search.active = true;
                self.state.search.input.move_end();
            }
            (Action::ClearSearch, _) => self.clear_search(),
            (Action::ToggleFilter, _) => {
                let current = self.state.browse.category();
                self.state.filter.toggle(current);
            }
            (Action::LoadMore, _) => self.execute(Command::LoadMore),
            (Action::ShowAll, _) => self.execute(Command::ShowAll),
            (Action::ToggleTheme, _) => self.execute(Command::Theme),
            (Action::Command, _) => self.state.command_line.enter_command_mode(),
            (Action::Help, _) => self.state.show_help = true,
        }
        false
    }

    fn switch_panel(&mut self, enrolled: usize) {
        self.state.focus = match self.state.focus {
            Focus::Catalog if enrolled > 0 => {
                self.state.continue_selected = self.state.continue_selected.min(enrolled - 1);
                Focus::ContinueLearning
            }
            _ => Focus::Catalog,
        };
    }

    /// Report the call-to-action of the focused card
    fn activate_selected(&mut self) {
        let course = match self.state.focus {
            Focus::Catalog => {
                let results = self.state.browse.results(self.catalog);
                results.visible().get(self.state.grid.selected).copied()
            }
            Focus::ContinueLearning => {
                self.catalog.continue_learning().get(self.state.continue_selected).copied()
            }
        };
        if let Some(course) = course {
            tracing::info!("{} course {} ({})", course.call_to_action(), course.id, course.title);
            self.state
                .command_line
                .set_message(format!("{}: {}", course.call_to_action(), course.title));
        }
    }

    fn clear_search(&mut self) {
        self.state.search.input.clear();
        self.state.sync_query();
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let input = &mut self.state.search.input;
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('u') {
                input.clear();
            }
        } else {
            match key.code {
                KeyCode::Char(c) => input.insert_char(c),
                KeyCode::Backspace => input.delete_char(),
                KeyCode::Delete => input.delete_char_forward(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.move_start(),
                KeyCode::End => input.move_end(),
                KeyCode::Esc | KeyCode::Enter | KeyCode::Down | KeyCode::Tab => {
                    self.state.search.active = false;
                    self.state.focus = Focus::Catalog;
                }
                _ => {}
            }
        }
        self.state.sync_query();
    }

    fn handle_filter_key(&mut self, code: KeyCode) {
        let filter = &mut self.state.filter;
        match code {
            KeyCode::Char('j') | KeyCode::Down => filter.move_down(),
            KeyCode::Char('k') | KeyCode::Up => filter.move_up(),
            KeyCode::Char(c @ '0'..='4') => {
                filter.cursor = c as usize - '0' as usize;
                let category = filter.select();
                self.execute(Command::Filter(category));
            }
            KeyCode::Enter => {
                let category = filter.select();
                self.execute(Command::Filter(category));
            }
            KeyCode::Esc | KeyCode::Char('f') | KeyCode::Char('q') => filter.close(),
            _ => {}
        }
    }

    /// Handle a key while the : prompt is open, returns true if should exit
    fn handle_command_key(&mut self, key: KeyEvent) -> bool {
        let cl = &mut self.state.command_line;
        match key.code {
            KeyCode::Esc => cl.exit_input_mode(),
            KeyCode::Enter => {
                let text = cl.input.text.clone();
                cl.add_to_history(text.clone());
                cl.exit_input_mode();
                return self.run_command_text(&text);
            }
            KeyCode::Backspace => {
                if cl.input.is_empty() {
                    cl.exit_input_mode();
                } else {
                    cl.input.delete_char();
                }
            }
            KeyCode::Delete => cl.input.delete_char_forward(),
            KeyCode::Left => cl.input.move_left(),
            KeyCode::Right => cl.input.move_right(),
            KeyCode::Home => cl.input.move_start(),
            KeyCode::End => cl.input.move_end(),
            KeyCode::Up => cl.history_up(),
            KeyCode::Down => cl.history_down(),
            KeyCode::Char(c) => cl.input.insert_char(c),
            _ => {}
        }
        false
    }

    /// Parse and run a command line, returns true if should exit
    pub fn run_command_text(&mut self, text: &str) -> bool {
        match parse_command(text) {
            ParseResult::Ok(Command::Quit) => true,
            ParseResult::Ok(command) => {
                self.execute(command);
                false
            }
            ParseResult::UnknownCommand(cmd) => {
                self.state.command_line.set_error(format!("Unknown command: {cmd}"));
                false
            }
            ParseResult::MissingArgument(cmd) => {
                self.state.command_line.set_error(format!(":{cmd} needs an argument"));
                false
            }
            ParseResult::InvalidArgument(msg) => {
                self.state.command_line.set_error(msg);
                false
            }
        }
    }

    /// Run a parsed command (quit is handled by the caller)
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::LoadMore => {
                if self.state.browse.results(self.catalog).has_more() {
                    self.state.browse.load_more(self.catalog);
                    let results = self.state.browse.results(self.catalog);
                    self.state.command_line.set_message(format!(
                        "Showing {} of {} courses",
                        results.visible().len(),
                        results.total()
                    ));
                } else {
                    self.state.command_line.set_message("All courses are already shown");
                }
            }
            Command::ShowAll => {
                self.state.browse.reveal_all(self.catalog);
                let total = self.state.browse.results(self.catalog).total();
                self.state.command_line.set_message(format!("Showing all {total} courses"));
            }
            Command::Filter(category) => {
                self.state.apply_category(category);
                let message = match category {
                    Category::All => "Showing all difficulties".to_string(),
                    level => format!("Showing {level} courses"),
                };
                self.state.command_line.set_message(message);
            }
            Command::Search(query) => {
                self.state.search.input.set(query);
                self.state.sync_query();
            }
            Command::ClearSearch => self.clear_search(),
            Command::Theme => {
                let mode = self.theme.toggle();
                tracing::info!("Switched to {} mode (logo {})", mode, self.theme.logo());
                self.state.command_line.set_message(format!("Switched to {mode} mode"));
            }
            Command::Help => self.state.show_help = true,
            Command::Quit | Command::Nop => self.state.command_line.clear_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::BrowseSession;
    use crate::theme::ThemeMode;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    struct Fixture {
        state: AppState,
        catalog: Catalog,
        theme: ThemeContext,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                state: AppState::new(BrowseSession::default()),
                catalog: Catalog::builtin().unwrap(),
                theme: ThemeContext::init(ThemeMode::Dark),
            }
        }

        fn press(&mut self, event: KeyEvent) -> bool {
            assert_eq!(event.kind, KeyEventKind::Press);
            Handler { state: &mut self.state, catalog: &self.catalog, theme: &mut self.theme }
                .handle_key(event)
        }

        fn type_text(&mut self, text: &str) {
            for c in text.chars() {
                self.press(key(KeyCode::Char(c)));
            }
        }

        fn visible(&self) -> usize {
            self.state.browse.results(&self.catalog).visible().len()
        }

        fn total(&self) -> usize {
            self.state.browse.results(&self.catalog).total()
        }
    }

    #[test]
    fn q_quits() {
        let mut f = Fixture::new();
        assert!(f.press(key(KeyCode::Char('q'))));
    }

    #[test]
    fn typing_in_search_filters_live() {
        let mut f = Fixture::new();
        f.press(key(KeyCode::Char('/')));
        assert!(f.state.search.active);

        f.type_text("sonic");
        assert_eq!(f.state.browse.query(), "sonic");
        assert_eq!(f.total(), 7);

        // q is text while searching
        assert!(!f.press(key(KeyCode::Char('q'))));
        assert_eq!(f.state.browse.query(), "sonicq");

        f.press(key(KeyCode::Backspace));
        f.press(key(KeyCode::Esc));
        assert!(!f.state.search.active);
        assert_eq!(f.state.browse.query(), "sonic");
    }

    #[test]
    fn ctrl_u_clears_search() {
        let mut f = Fixture::new();
        f.press(key(KeyCode::Char('/')));
        f.type_text("defi");
        f.press(key(KeyCode::Enter));
        assert_eq!(f.total(), 1);

        f.press(ctrl('u'));
        assert_eq!(f.state.browse.query(), "");
        assert_eq!(f.total(), 12);
    }

    #[test]
    fn escape_clears_active_search() {
        let mut f = Fixture::new();
        f.press(key(KeyCode::Char('/')));
        f.type_text("nft");
        f.press(key(KeyCode::Esc));
        f.press(key(KeyCode::Esc));
        assert_eq!(f.state.browse.query(), "");
    }

    #[test]
    fn load_more_then_search_resets_page() {
        let mut f = Fixture::new();
        assert_eq!(f.visible(), 8);
        f.press(key(KeyCode::Char('m')));
        assert_eq!(f.visible(), 12);

        f.press(key(KeyCode::Char('/')));
        f.type_text("a");
        assert_eq!(f.state.browse.pager().visible_count(), 8);
    }

    #[test]
    fn show_all_reveals_everything() {
        let mut f = Fixture::new();
        f.press(key(KeyCode::Char('M')));
        assert_eq!(f.visible(), 12);
        assert!(!f.state.browse.results(&f.catalog).has_more());
    }

    #[test]
    fn filter_popup_applies_category() {
        let mut f = Fixture::new();
        f.press(key(KeyCode::Char('f')));
        assert!(f.state.filter.open);

        f.press(key(KeyCode::Char('j')));
        f.press(key(KeyCode::Char('j')));
        f.press(key(KeyCode::Char('j')));
        f.press(key(KeyCode::Enter));

        assert!(!f.state.filter.open);
        assert_eq!(f.state.browse.category(), Category::Advanced);
        assert_eq!(f.total(), 4);
    }

    #[test]
    fn filter_popup_number_keys_pick_directly() {
        let mut f = Fixture::new();
        f.press(key(KeyCode::Char('f')));
        f.press(key(KeyCode::Char('4')));
        assert_eq!(f.state.browse.category(), Category::Expert);
        assert!(!f.state.filter.open);
    }

    #[test]
    fn filter_popup_escape_keeps_category() {
        let mut f = Fixture::new();
        f.press(key(KeyCode::Char('f')));
        f.press(key(KeyCode::Char('j')));
        f.press(key(KeyCode::Esc));
        assert!(!f.state.filter.open);
        assert_eq!(f.state.browse.category(), Category::All);
    }

    #[test]
    fn theme_key_toggles_mode() {
        let mut f = Fixture::new();
        f.press(key(KeyCode::Char('t')));
        assert_eq!(f.theme.mode(), ThemeMode::Light);
        f.press(key(KeyCode::Char('t')));
        assert_eq!(f.theme.mode(), ThemeMode::Dark);
    }

    #[test]
    fn command_line_runs_filter() {
        let mut f = Fixture::new();
        f.press(key(KeyCode::Char(':')));
        f.type_text("filter beginner");
        f.press(key(KeyCode::Enter));
        assert_eq!(f.state.browse.category(), Category::Beginner);
        assert_eq!(f.state.command_line.history, vec!["filter beginner".to_string()]);
    }

    #[test]
    fn command_line_quit() {
        let mut f = Fixture::new();
        f.press(key(KeyCode::Char(':')));
        f.press(key(KeyCode::Char('q')));
        assert!(f.press(key(KeyCode::Enter)));
    }

    #[test]
    fn unknown_command_sets_error() {
        let mut f = Fixture::new();
        assert!(!f.run_command("frobnicate"));
        assert!(f.state.command_line.is_error);
    }

    #[test]
    fn search_command_sets_query_and_box() {
        let mut f = Fixture::new();
        f.run_command("search Smart Contracts");
        assert_eq!(f.state.search.input.text, "Smart Contracts");
        assert_eq!(f.total(), 1);
    }

    #[test]
    fn load_more_when_everything_shown_reports_it() {
        let mut f = Fixture::new();
        f.run_command("filter expert");
        f.run_command("more");
        assert_eq!(
            f.state.command_line.message.as_deref(),
            Some("All courses are already shown")
        );
    }

    #[test]
    fn enter_reports_call_to_action() {
        let mut f = Fixture::new();
        f.press(key(KeyCode::Enter));
        assert_eq!(
            f.state.command_line.message.as_deref(),
            Some("Continue: Intro to Sonic Smart Contracts")
        );

        f.press(key(KeyCode::Char('l')));
        f.press(key(KeyCode::Enter));
        assert_eq!(
            f.state.command_line.message.as_deref(),
            Some("Start Learning: Unlocking Rewards on Sonic")
        );
    }

    #[test]
    fn tab_moves_to_continue_learning() {
        let mut f = Fixture::new();
        f.press(key(KeyCode::Tab));
        assert_eq!(f.state.focus, Focus::ContinueLearning);

        f.press(key(KeyCode::Char('l')));
        f.press(key(KeyCode::Char('l')));
        f.press(key(KeyCode::Char('l')));
        assert_eq!(f.state.continue_selected, 2);

        f.press(key(KeyCode::Enter));
        assert_eq!(
            f.state.command_line.message.as_deref(),
            Some("Continue: Advanced DeFi Protocols on Sonic")
        );

        f.press(key(KeyCode::Tab));
        assert_eq!(f.state.focus, Focus::Catalog);
    }

    #[test]
    fn help_overlay_closes_on_any_key() {
        let mut f = Fixture::new();
        f.press(key(KeyCode::Char('?')));
        assert!(f.state.show_help);
        assert!(!f.press(key(KeyCode::Char('q'))));
        assert!(!f.state.show_help);
    }

    impl Fixture {
        fn run_command(&mut self, text: &str) -> bool {
            Handler { state: &mut self.state, catalog: &self.catalog, theme: &mut self.theme }
                .run_command_text(text)
        }
    }
}
