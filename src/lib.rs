//! Course Catalog - a terminal browser for a catalog of courses
//!
//! Search by text, narrow by difficulty, page through results, and pick up
//! enrolled courses where you left off, in light or dark mode.

pub mod app;
pub mod browse;
pub mod catalog;
pub mod config;
pub mod theme;
pub mod ui;

pub use app::App;
pub use browse::BrowseSession;
pub use catalog::Catalog;
pub use config::Config;
pub use theme::Theme;
