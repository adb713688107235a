//! The in-memory movie store.
//!
//! Owns the authoritative collection and the id counter. All mutation goes
//! through the operations here; readers only ever see shared references.
//! Lookups with a stale id are silent no-ops — the operations report whether
//! a record matched, but a miss is never an error.

use crate::types::{Movie, MovieDraft};

/// The movie collection plus the next-id counter.
///
/// Ids are strictly increasing and never reused, even after deletes.
/// Every mutation is visible to the very next read.
#[derive(Debug, Clone)]
pub struct MovieStore {
    movies: Vec<Movie>,
    next_id: u32,
}

impl MovieStore {
    /// An empty store. The first added movie gets id 1.
    pub fn new() -> Self {
        Self {
            movies: Vec::new(),
            next_id: 1,
        }
    }

    /// The startup state: two seed records, counter at 3.
    pub fn seeded() -> Self {
        Self {
            movies: vec![
                Movie {
                    id: 1,
                    title: "Parasite".to_string(),
                    genre: "Thriller".to_string(),
                    year: 2019,
                    rating: 8.6,
                    watched: true,
                },
                Movie {
                    id: 2,
                    title: "Spirited Away".to_string(),
                    genre: "Animation".to_string(),
                    year: 2001,
                    rating: 8.6,
                    watched: false,
                },
            ],
            next_id: 3,
        }
    }

    /// The current collection, in insertion order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Look up a single movie by id.
    pub fn get(&self, id: u32) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// Add a movie from draft fields. Returns the assigned id.
    ///
    /// New movies start unwatched and are appended at the end.
    pub fn add(&mut self, draft: MovieDraft) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        log::debug!("add id={} title={:?}", id, draft.title);
        self.movies.push(Movie {
            id,
            title: draft.title,
            genre: draft.genre,
            year: draft.year,
            rating: draft.rating,
            watched: false,
        });
        id
    }

    /// Remove the movie with the given id, keeping the relative order of the
    /// rest. Returns whether a record matched.
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.movies.len();
        self.movies.retain(|m| m.id != id);
        let removed = self.movies.len() != before;
        if removed {
            log::debug!("delete id={}", id);
        }
        removed
    }

    /// Flip the watched flag of the movie with the given id.
    /// Returns whether a record matched.
    pub fn toggle_watched(&mut self, id: u32) -> bool {
        match self.movies.iter_mut().find(|m| m.id == id) {
            Some(movie) => {
                movie.watched = !movie.watched;
                log::debug!("toggle id={} watched={}", id, movie.watched);
                true
            }
            None => false,
        }
    }

    /// Overwrite title/genre/year/rating of the movie with the given id,
    /// leaving id and watched untouched. Returns whether a record matched.
    pub fn update(&mut self, id: u32, draft: MovieDraft) -> bool {
        match self.movies.iter_mut().find(|m| m.id == id) {
            Some(movie) => {
                log::debug!("update id={} title={:?}", id, draft.title);
                movie.title = draft.title;
                movie.genre = draft.genre;
                movie.year = draft.year;
                movie.rating = draft.rating;
                true
            }
            None => false,
        }
    }
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new()
    }
}
