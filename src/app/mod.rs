//! Application state and event handling

pub mod command;
pub mod handler;
pub mod input;
pub mod state;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::browse::BrowseSession;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::theme::ThemeContext;
use crate::ui;
use handler::Handler;
use state::AppState;

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Terminal in raw mode on the alternate screen, restored on drop
struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    /// Set up the terminal for TUI rendering
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    /// Restore the terminal to its original state
    fn restore(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Courses being browsed
    catalog: Catalog,

    /// Light/dark appearance
    theme: ThemeContext,

    /// Current application state
    state: AppState,

    /// Terminal backend
    tui: Tui,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config, catalog: Catalog) -> Result<Self> {
        let theme = ThemeContext::init(config.theme);
        let state = AppState::new(BrowseSession::new(config.pager()));
        let tui = Tui::enter()?;
        Ok(Self { config, catalog, theme, state, tui })
    }

    /// Run the application main loop, then save preferences
    pub fn run(mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        tracing::info!("Browsing {} courses", self.catalog.len());

        loop {
            self.tui.terminal.draw(|frame| {
                ui::draw(frame, &mut self.state, &self.catalog, &self.theme);
            })?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        let mut handler = Handler {
                            state: &mut self.state,
                            catalog: &self.catalog,
                            theme: &mut self.theme,
                        };
                        if handler.handle_key(key) {
                            break;
                        }
                    }
                }
            }
        }

        let App { mut config, theme, mut tui, .. } = self;
        tui.restore()?;

        let mode = theme.teardown();
        if mode != config.theme {
            config.theme = mode;
            config.save().context("Failed to save theme preference")?;
        }
        Ok(())
    }
}
