//! Terminal rendering of the movie list.
//!
//! The whole list is re-drawn after every change; there is no incremental
//! update path.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use movie_shelf_catalog::{Movie, MovieStore, ViewFilter, WatchFilter};

/// Re-draw the filtered list.
pub(crate) fn render_list(store: &MovieStore, filter: &ViewFilter) {
    let movies = store.movies();
    let shown = filter.apply(movies);

    println!();
    if filter.is_active() {
        println!(
            "{} {}",
            "Movies".if_supports_color(Stdout, |t| t.bold()),
            format!(
                "(showing {} of {}, {})",
                shown.len(),
                movies.len(),
                describe_filter(filter),
            )
            .if_supports_color(Stdout, |t| t.dimmed()),
        );
    } else {
        println!(
            "{} {}",
            "Movies".if_supports_color(Stdout, |t| t.bold()),
            format!("({})", movies.len()).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    if shown.is_empty() {
        let note = if movies.is_empty() {
            "The shelf is empty. Try 'add'."
        } else {
            "No movies match the current filter."
        };
        println!("  {}", note.if_supports_color(Stdout, |t| t.dimmed()));
        return;
    }

    for movie in shown {
        print_movie(movie);
    }
}

/// One movie on one line.
fn print_movie(movie: &Movie) {
    let watched_mark = if movie.watched {
        format!(
            "{} {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            "Watched".if_supports_color(Stdout, |t| t.green()),
        )
    } else {
        format!(
            "{} {}",
            "\u{23F3}".if_supports_color(Stdout, |t| t.yellow()),
            "Not Watched".if_supports_color(Stdout, |t| t.yellow()),
        )
    };

    println!(
        "  {} {} {} - {} - {}/10 [{}]",
        format!("[{}]", movie.id).if_supports_color(Stdout, |t| t.dimmed()),
        movie.title.if_supports_color(Stdout, |t| t.bold()),
        format!("({})", movie.year).if_supports_color(Stdout, |t| t.dimmed()),
        movie.genre.if_supports_color(Stdout, |t| t.cyan()),
        movie.rating,
        watched_mark,
    );
}

/// Short description of the active filter for the list header.
fn describe_filter(filter: &ViewFilter) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(ref genre) = filter.genre {
        parts.push(format!("genre: {}", genre));
    }
    if filter.status != WatchFilter::All {
        parts.push(format!("status: {}", filter.status.as_str()));
    }
    parts.join(", ")
}

/// Yellow notice for an operation that matched no record.
pub(crate) fn note_missing(id: u32) {
    println!(
        "  {} No movie with id {}",
        "?".if_supports_color(Stdout, |t| t.yellow()),
        id,
    );
}

/// Green check line for a completed operation.
pub(crate) fn note_done(message: &str) {
    println!(
        "  {} {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        message,
    );
}
