//! The interactive shell: reads commands, dispatches store operations, and
//! re-renders the list after every change.

use std::io::Write;
use std::str::FromStr;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use movie_shelf_catalog::{Movie, MovieDraft, MovieStore, ViewFilter, distinct_genres};

use crate::cli_types::{Command, parse_command};
use crate::error::CliError;
use crate::render::{note_done, note_missing, render_list};

/// One interactive session over one store.
pub(crate) struct Session {
    store: MovieStore,
    filter: ViewFilter,
}

impl Session {
    pub(crate) fn new(store: MovieStore) -> Self {
        Self {
            store,
            filter: ViewFilter::default(),
        }
    }

    /// Run the command loop until `quit` or end of input.
    pub(crate) fn run(&mut self) -> Result<(), CliError> {
        println!(
            "{}",
            "movie-shelf".if_supports_color(Stdout, |t| t.bold()),
        );
        println!(
            "{}",
            "Type 'help' for commands.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        render_list(&self.store, &self.filter);

        loop {
            let line = match read_line("> ")? {
                Some(line) => line,
                None => break,
            };
            if line.is_empty() {
                continue;
            }

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(e) => {
                    println!(
                        "  {} {}",
                        "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                        e,
                    );
                    continue;
                }
            };

            log::debug!("command: {:?}", command);
            if !self.dispatch(command)? {
                break;
            }
        }
        Ok(())
    }

    /// Execute one command. Returns `false` when the session should end.
    fn dispatch(&mut self, command: Command) -> Result<bool, CliError> {
        match command {
            Command::List => {
                render_list(&self.store, &self.filter);
            }
            Command::Add => {
                if let Some(draft) = prompt_draft(None)? {
                    let title = draft.title.clone();
                    let id = self.store.add(draft);
                    note_done(&format!("Added [{}] {}", id, title));
                    render_list(&self.store, &self.filter);
                }
            }
            Command::Edit(id) => {
                let existing = self.store.get(id).cloned();
                match existing {
                    Some(movie) => {
                        if let Some(draft) = prompt_draft(Some(&movie))? {
                            self.store.update(id, draft);
                            note_done(&format!("Updated [{}]", id));
                            render_list(&self.store, &self.filter);
                        }
                    }
                    None => note_missing(id),
                }
            }
            Command::Delete(id) => {
                if self.store.delete(id) {
                    note_done(&format!("Deleted [{}]", id));
                    render_list(&self.store, &self.filter);
                } else {
                    note_missing(id);
                }
            }
            Command::Toggle(id) => {
                if self.store.toggle_watched(id) {
                    let watched = self.store.get(id).map(|m| m.watched).unwrap_or(false);
                    note_done(&format!(
                        "Marked [{}] as {}",
                        id,
                        if watched { "watched" } else { "not watched" },
                    ));
                    render_list(&self.store, &self.filter);
                } else {
                    note_missing(id);
                }
            }
            Command::Genre(genre) => {
                self.filter.genre = genre;
                render_list(&self.store, &self.filter);
            }
            Command::Status(status) => {
                self.filter.status = status;
                render_list(&self.store, &self.filter);
            }
            Command::Genres => {
                let genres = distinct_genres(self.store.movies());
                if genres.is_empty() {
                    println!(
                        "  {}",
                        "No genres yet.".if_supports_color(Stdout, |t| t.dimmed()),
                    );
                } else {
                    for genre in genres {
                        println!("  {}", genre.if_supports_color(Stdout, |t| t.cyan()));
                    }
                }
            }
            Command::Json => {
                let json = serde_json::to_string_pretty(self.store.movies())?;
                println!("{}", json);
            }
            Command::Help => print_help(),
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }
}

fn print_help() {
    println!("Commands:");
    println!("  list                     show the filtered list");
    println!("  add                      add a movie (prompts per field)");
    println!("  edit <id>                edit a movie (prompts, Enter keeps the current value)");
    println!("  delete <id>              remove a movie");
    println!("  toggle <id>              flip a movie's watched flag");
    println!("  genre [<name>]           filter by genre; bare 'genre' clears it");
    println!("  status [watched|unwatched|all]");
    println!("  genres                   list the distinct genres on the shelf");
    println!("  json                     dump the unfiltered collection as JSON");
    println!("  quit");
}

/// Print a prompt and read one line. `Ok(None)` means end of input.
fn read_line(prompt: &str) -> Result<Option<String>, CliError> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut input = String::new();
    let bytes = std::io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Prompt for the four draft fields.
///
/// `defaults` pre-fills from an existing record (the edit path); pressing
/// Enter keeps the shown value. `Ok(None)` means the form was abandoned at
/// end of input.
fn prompt_draft(defaults: Option<&Movie>) -> Result<Option<MovieDraft>, CliError> {
    let title = match prompt_text("Title", defaults.map(|m| m.title.clone()))? {
        Some(v) => v,
        None => return Ok(None),
    };
    let genre = match prompt_text("Genre", defaults.map(|m| m.genre.clone()))? {
        Some(v) => v,
        None => return Ok(None),
    };
    let year = match prompt_number::<u32>("Year", defaults.map(|m| m.year.to_string()))? {
        Some(v) => v,
        None => return Ok(None),
    };
    let rating = match prompt_number::<f64>("Rating", defaults.map(|m| m.rating.to_string()))? {
        Some(v) => v,
        None => return Ok(None),
    };

    Ok(Some(MovieDraft {
        title,
        genre,
        year,
        rating,
    }))
}

/// Prompt for a text field, looping until it is non-empty (or a default is
/// accepted with a bare Enter).
fn prompt_text(label: &str, default: Option<String>) -> Result<Option<String>, CliError> {
    loop {
        let prompt = match default {
            Some(ref def) => format!("  {} [{}]: ", label, def),
            None => format!("  {}: ", label),
        };
        let input = match read_line(&prompt)? {
            Some(input) => input,
            None => return Ok(None),
        };

        if input.is_empty() {
            if let Some(ref def) = default {
                return Ok(Some(def.clone()));
            }
            println!(
                "    {}",
                "This field is required.".if_supports_color(Stdout, |t| t.yellow()),
            );
            continue;
        }
        return Ok(Some(input));
    }
}

/// Prompt for a numeric field, looping until the input parses.
fn prompt_number<T: FromStr>(label: &str, default: Option<String>) -> Result<Option<T>, CliError> {
    loop {
        let input = match prompt_text(label, default.clone())? {
            Some(input) => input,
            None => return Ok(None),
        };
        match input.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => {
                println!(
                    "    {}",
                    "Enter a number.".if_supports_color(Stdout, |t| t.yellow()),
                );
            }
        }
    }
}
