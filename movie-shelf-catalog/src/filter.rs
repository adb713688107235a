//! Filtered projections of the movie list.
//!
//! The view layer re-derives its display list from these after every change;
//! nothing here mutates the store.

use crate::types::Movie;

/// Watched-status filter for the rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatchFilter {
    #[default]
    All,
    Watched,
    Unwatched,
}

impl WatchFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Watched => "watched",
            Self::Unwatched => "unwatched",
        }
    }

    /// Parse a status name, defaulting to `All` for anything unrecognized.
    pub fn from_str_loose(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "watched" => Self::Watched,
            "unwatched" => Self::Unwatched,
            _ => Self::All,
        }
    }

    fn matches(&self, movie: &Movie) -> bool {
        match self {
            Self::All => true,
            Self::Watched => movie.watched,
            Self::Unwatched => !movie.watched,
        }
    }
}

/// The active filter state held by the view layer.
#[derive(Debug, Clone, Default)]
pub struct ViewFilter {
    /// Exact genre to show, or `None` for all genres.
    pub genre: Option<String>,
    pub status: WatchFilter,
}

impl ViewFilter {
    /// Whether any filtering is in effect.
    pub fn is_active(&self) -> bool {
        self.genre.is_some() || self.status != WatchFilter::All
    }

    /// Project the collection through the filter, preserving insertion order.
    pub fn apply<'a>(&self, movies: &'a [Movie]) -> Vec<&'a Movie> {
        movies
            .iter()
            .filter(|m| match &self.genre {
                Some(genre) => m.genre == *genre,
                None => true,
            })
            .filter(|m| self.status.matches(m))
            .collect()
    }
}

/// Unique genres in first-appearance order.
pub fn distinct_genres(movies: &[Movie]) -> Vec<String> {
    let mut genres: Vec<String> = Vec::new();
    for movie in movies {
        if !genres.contains(&movie.genre) {
            genres.push(movie.genre.clone());
        }
    }
    genres
}
