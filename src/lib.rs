//! Turns free-text mood and genre descriptions into short playlists.
//!
//! [`Interpreter`] reads a mood and a genre out of the text, and
//! [`Selector`] picks matching songs from an in-memory [`Catalog`].

pub mod catalog;
pub mod config;
pub mod interpreter;
pub mod models;
pub mod playlist;


pub use catalog::{Catalog, CatalogError, CatalogSource, CsvCatalogSource};
pub use interpreter::{Interpreter, LexiconSet};
pub use models::{Genre, Interpretation, Mood, Recommendation, Song};
pub use playlist::{MatchTier, SelectError, Selection, Selector};
