//! Data model types for the movie shelf.

use serde::{Deserialize, Serialize};

/// A tracked movie. Ids are assigned by the store and never reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    pub genre: String,
    pub year: u32,
    pub rating: f64,
    pub watched: bool,
}

/// The caller-supplied fields of a movie, used by add and update.
///
/// Everything except `id` and `watched` — those belong to the store.
/// No validation is applied; whatever the form captured is stored as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDraft {
    pub title: String,
    pub genre: String,
    pub year: u32,
    pub rating: f64,
}

impl MovieDraft {
    pub fn new(title: impl Into<String>, genre: impl Into<String>, year: u32, rating: f64) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            year,
            rating,
        }
    }
}
