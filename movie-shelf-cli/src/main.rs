//! movie-shelf CLI
//!
//! Interactive shell for tracking a movie list: add, edit, delete, toggle
//! watched, and view the list through genre/status filters.

mod cli_types;
mod error;
mod render;
mod session;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use movie_shelf_catalog::MovieStore;

use crate::cli_types::Cli;
use crate::session::Session;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let store = if cli.empty {
        MovieStore::new()
    } else {
        MovieStore::seeded()
    };

    let mut session = Session::new(store);
    if let Err(e) = session.run() {
        eprintln!(
            "{} {}",
            "\u{2718}".if_supports_color(Stderr, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}

/// Map the --quiet/--verbose flags onto env_logger.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        log::LevelFilter::Warn
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).format_target(false);
    if verbose {
        builder.format_timestamp_secs();
    } else {
        builder.format_timestamp(None);
    }
    builder.init();
}
