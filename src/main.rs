use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use course_catalog::catalog::{Category, Course};
use course_catalog::ui::catalog_grid::empty_message;
use course_catalog::{App, BrowseSession, Catalog, Config};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "course-catalog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON catalog to load instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the first page of matching courses
    List {
        /// Text to search titles, descriptions, and levels for
        #[arg(short, long, default_value = "")]
        search: String,
        /// Difficulty to filter by (all, beginner, intermediate, advanced, expert)
        #[arg(short, long, default_value = "all")]
        difficulty: Category,
        /// Print every match instead of the first page
        #[arg(short, long)]
        all: bool,
    },
    /// Print how many courses match per difficulty
    Counts {
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Print enrolled courses with their progress
    Continue,
}

fn init_logging(to_file: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "course_catalog=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        // Anything written to the terminal would corrupt the TUI
        let path = Config::log_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {:?}", parent))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {:?}", path))?;
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}

fn course_row(course: &Course) -> String {
    format!(
        "{:>4}  {:<12}  {}  ({})",
        course.id,
        course.difficulty.label(),
        course.title,
        course.duration
    )
}

/// Lines printed by `list`: the revealed rows and a summary, or the same
/// empty-state text the TUI shows
fn list_output(session: &BrowseSession, catalog: &Catalog) -> Vec<String> {
    let results = session.results(catalog);
    if results.is_empty() {
        return vec!["No courses found".to_string(), empty_message(session)];
    }
    let mut lines: Vec<String> = results.visible().iter().map(|c| course_row(c)).collect();
    lines.push(String::new());
    lines.push(format!("Showing {} of {} courses", results.visible().len(), results.total()));
    lines
}

/// `--catalog` must load; a configured catalog that has gone missing falls
/// back to the built-in one, but a broken one is still an error
fn load_catalog(cli_path: Option<&Path>, config: &Config) -> Result<Catalog> {
    let catalog = match cli_path {
        Some(path) => Catalog::load(path).context("Failed to load course catalog")?,
        None => match Catalog::load_or_builtin(config.catalog_path.as_deref()) {
            Ok(catalog) => catalog,
            Err(err) if !err.is_content_error() => {
                tracing::warn!("{err}; using the built-in catalog");
                Catalog::builtin()?
            }
            Err(err) => return Err(err).context("Failed to load course catalog"),
        },
    };
    if catalog.is_empty() {
        tracing::warn!("Catalog has no courses");
    }
    Ok(catalog)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.command.is_none())?;

    let config = Config::load().context("Failed to load configuration")?;
    let catalog = load_catalog(cli.catalog.as_deref(), &config)?;

    match cli.command {
        Some(Commands::List { search, difficulty, all }) => {
            let mut session = BrowseSession::new(config.pager());
            session.set_query(search);
            session.set_category(difficulty);
            if all {
                session.reveal_all(&catalog);
            }

            for line in list_output(&session, &catalog) {
                println!("{line}");
            }
        }
        Some(Commands::Counts { search }) => {
            let mut session = BrowseSession::default();
            session.set_query(search);
            for (category, count) in session.counts(&catalog).iter() {
                println!("{:<12}  {count}", category.label());
            }
        }
        Some(Commands::Continue) => {
            let enrolled = catalog.continue_learning();
            if enrolled.is_empty() {
                println!("No courses in progress");
            }
            for course in enrolled {
                let progress = course
                    .visible_progress()
                    .map_or_else(|| "-".to_string(), |p| format!("{p}%"));
                println!("{}  {progress:>5}  {}", course_row(course), course.call_to_action());
            }
        }
        None => {
            // Launch TUI
            App::new(config, catalog)?.run()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn list_without_matches_explains_why() {
        let catalog = Catalog::builtin().unwrap();
        let mut session = BrowseSession::default();
        session.set_query("nonexistent");
        assert_eq!(
            list_output(&session, &catalog),
            vec![
                "No courses found".to_string(),
                "No courses match \"nonexistent\". Try adjusting your search or filters."
                    .to_string(),
            ]
        );
    }

    #[test]
    fn list_ends_with_summary() {
        let catalog = Catalog::builtin().unwrap();
        let lines = list_output(&BrowseSession::default(), &catalog);
        assert_eq!(lines.len(), 10);
        assert_eq!(lines.last().map(String::as_str), Some("Showing 8 of 12 courses"));
    }
}
