//! Command parsing for the command line

use crate::catalog::Category;

/// Parsed command from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Reveal more courses: :more
    LoadMore,
    /// Reveal every course: :all
    ShowAll,
    /// Filter by difficulty: :filter <level>
    Filter(Category),
    /// Set the search query: :search <text>
    Search(String),
    /// Clear the search query: :clear
    ClearSearch,
    /// Toggle light/dark: :theme
    Theme,
    /// Show help: :help or :h
    Help,
    /// Quit the application: :q or :quit
    Quit,
    /// Clear message: (empty command)
    Nop,
}

/// Result of parsing a command
#[derive(Debug)]
pub enum ParseResult {
    /// Successfully parsed command
    Ok(Command),
    /// Unknown command
    UnknownCommand(String),
    /// Command needs an argument
    MissingArgument(String),
    /// Argument could not be understood
    InvalidArgument(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> ParseResult {
    let input = input.trim();

    if input.is_empty() {
        return ParseResult::Ok(Command::Nop);
    }

    // Split into command and arguments
    let mut parts = input.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(|s| s.trim()).unwrap_or("");

    match cmd.to_lowercase().as_str() {
        "more" | "m" => ParseResult::Ok(Command::LoadMore),
        "all" | "show-all" => ParseResult::Ok(Command::ShowAll),
        "filter" | "f" => {
            if args.is_empty() {
                ParseResult::MissingArgument("filter".to_string())
            } else {
                match args.parse::<Category>() {
                    Ok(category) => ParseResult::Ok(Command::Filter(category)),
                    Err(e) => ParseResult::InvalidArgument(e.to_string()),
                }
            }
        }
        "search" | "s" => {
            if args.is_empty() {
                ParseResult::MissingArgument("search".to_string())
            } else {
                ParseResult::Ok(Command::Search(args.to_string()))
            }
        }
        "clear" | "c" => ParseResult::Ok(Command::ClearSearch),
        "theme" | "t" => ParseResult::Ok(Command::Theme),
        "help" | "h" | "?" => ParseResult::Ok(Command::Help),
        "quit" | "q" => ParseResult::Ok(Command::Quit),
        _ => ParseResult::UnknownCommand(cmd.to_string()),
    }
}
