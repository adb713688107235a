//! In-memory movie catalog: the store, its entity types, and the filter
//! projections the view layer renders from.
//!
//! There is no persistence — a store lives exactly as long as the process
//! that owns it.

pub mod filter;
pub mod store;
pub mod types;

pub use filter::{ViewFilter, WatchFilter, distinct_genres};
pub use store::MovieStore;
pub use types::{Movie, MovieDraft};
