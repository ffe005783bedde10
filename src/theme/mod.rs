//! Theming: color palettes and the light/dark context

mod tokyo_night;

pub use tokyo_night::{TOKYO_NIGHT, TOKYO_NIGHT_DAY};

use std::fmt;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::catalog::Difficulty;

/// A color palette for the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_tertiary: Color,

    // Foreground colors
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Difficulty badges
    pub badge_beginner: Color,
    pub badge_intermediate: Color,
    pub badge_advanced: Color,
    pub badge_expert: Color,
    pub badge_text: Color,

    // UI elements
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub cursor: Color,
}

impl Theme {
    /// Badge background for a difficulty level
    pub fn badge_color(&self, difficulty: Difficulty) -> Color {
        match difficulty {
            Difficulty::Beginner => self.badge_beginner,
            Difficulty::Intermediate => self.badge_intermediate,
            Difficulty::Advanced => self.badge_advanced,
            Difficulty::Expert => self.badge_expert,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        TOKYO_NIGHT
    }
}

/// Light or dark appearance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Palette for this mode
    pub fn palette(self) -> Theme {
        match self {
            ThemeMode::Light => TOKYO_NIGHT_DAY,
            ThemeMode::Dark => TOKYO_NIGHT,
        }
    }

    /// Logo asset for this mode
    pub fn logo(self) -> &'static str {
        match self {
            ThemeMode::Light => "/Logo.png",
            ThemeMode::Dark => "/Logo DarkMode.png",
        }
    }

    /// Glyph for the header toggle
    pub fn icon(self) -> &'static str {
        match self {
            ThemeMode::Light => "☀",
            ThemeMode::Dark => "☾",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => f.write_str("light"),
            ThemeMode::Dark => f.write_str("dark"),
        }
    }
}

/// The active appearance.
///
/// Created once when the application starts and handed back through
/// [`ThemeContext::teardown`] when it exits, so nothing reads theme state
/// from a global.
#[derive(Debug, Clone)]
pub struct ThemeContext {
    mode: ThemeMode,
    theme: Theme,
}

impl ThemeContext {
    pub fn init(mode: ThemeMode) -> Self {
        tracing::debug!("Theme context initialized in {} mode", mode);
        Self { mode, theme: mode.palette() }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Logo variant for the current mode
    pub fn logo(&self) -> &'static str {
        self.mode.logo()
    }

    /// Flip between light and dark, returning the new mode
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.theme = self.mode.palette();
        self.mode
    }

    /// End the context, yielding the mode to remember for next time
    pub fn teardown(self) -> ThemeMode {
        tracing::debug!("Theme context torn down in {} mode", self.mode);
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_tokyo_night() {
        let theme = Theme::default();
        assert_eq!(theme.name, "Tokyo Night");
    }

    #[test]
    fn default_mode_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn toggle_flips_between_two_modes() {
        let mut ctx = ThemeContext::init(ThemeMode::Light);
        assert_eq!(ctx.toggle(), ThemeMode::Dark);
        assert_eq!(ctx.theme().name, "Tokyo Night");
        assert_eq!(ctx.toggle(), ThemeMode::Light);
        assert_eq!(ctx.theme().name, "Tokyo Night Day");
        assert_eq!(ctx.teardown(), ThemeMode::Light);
    }

    #[test]
    fn logo_follows_mode() {
        let mut ctx = ThemeContext::init(ThemeMode::Dark);
        assert_eq!(ctx.logo(), "/Logo DarkMode.png");
        ctx.toggle();
        assert_eq!(ctx.logo(), "/Logo.png");
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Light).unwrap(), "\"light\"");
        let mode: ThemeMode = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(mode, ThemeMode::Dark);
    }

    #[test]
    fn badges_differ_per_level() {
        let theme = Theme::default();
        let colors: Vec<Color> = Difficulty::ALL.iter().map(|d| theme.badge_color(*d)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
