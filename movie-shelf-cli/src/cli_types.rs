//! CLI type definitions: startup flags and shell commands.

use clap::Parser;

use movie_shelf_catalog::WatchFilter;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "movie-shelf")]
#[command(about = "Track movies in an interactive shell", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long)]
    pub verbose: bool,

    /// Start with an empty shelf instead of the seed records
    #[arg(long)]
    pub empty: bool,
}

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Command {
    /// Re-render the filtered list
    List,
    /// Prompt for fields and add a movie
    Add,
    /// Prompt for fields and overwrite a movie
    Edit(u32),
    /// Remove a movie
    Delete(u32),
    /// Flip a movie's watched flag
    Toggle(u32),
    /// Set or clear the genre filter
    Genre(Option<String>),
    /// Set the watched-status filter
    Status(WatchFilter),
    /// List the distinct genres on the shelf
    Genres,
    /// Dump the unfiltered collection as JSON
    Json,
    Help,
    Quit,
}

/// Parse one line of shell input.
///
/// Commands are a keyword plus an optional argument; the genre argument is
/// the rest of the line so multi-word genres need no quoting.
pub(crate) fn parse_command(line: &str) -> Result<Command, CliError> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((k, r)) => (k, r.trim()),
        None => (line, ""),
    };

    match keyword.to_lowercase().as_str() {
        "list" | "ls" => Ok(Command::List),
        "add" => Ok(Command::Add),
        "edit" => Ok(Command::Edit(parse_id(rest)?)),
        "delete" | "del" => Ok(Command::Delete(parse_id(rest)?)),
        "toggle" => Ok(Command::Toggle(parse_id(rest)?)),
        "genre" => {
            if rest.is_empty() {
                Ok(Command::Genre(None))
            } else {
                Ok(Command::Genre(Some(rest.to_string())))
            }
        }
        "status" => Ok(Command::Status(WatchFilter::from_str_loose(rest))),
        "genres" => Ok(Command::Genres),
        "json" => Ok(Command::Json),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ => Err(CliError::UnknownCommand(line.to_string())),
    }
}

fn parse_id(arg: &str) -> Result<u32, CliError> {
    arg.parse()
        .map_err(|_| CliError::invalid_number("id", arg))
}
