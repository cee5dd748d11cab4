use super::profile::MoodProfile;
use crate::catalog::Catalog;
use crate::models::{Genre, Mood};

/// Catalog filtering using static helper functions. Results are row indices.
pub struct SongFilters;

impl SongFilters {
    /// Rows matching the mood ranges, or every row for an unconstrained mood
    pub fn by_mood(catalog: &Catalog, mood: Mood) -> Vec<usize> {
        Self::narrow_by_mood(catalog, 0..catalog.len(), mood)
    }

    /// Rows whose genre equals `genre`
    pub fn by_genre(catalog: &Catalog, genre: Genre) -> Vec<usize> {
        catalog.genre_rows(genre.as_str()).to_vec()
    }

    /// Rows matching every supplied constraint. Missing constraints do not filter.
    pub fn by_mood_and_genre(
        catalog: &Catalog,
        mood: Option<Mood>,
        genre: Option<Genre>,
    ) -> Vec<usize> {
        let rows = match genre {
            Some(genre) => Self::by_genre(catalog, genre),
            None => (0..catalog.len()).collect(),
        };
        match mood {
            Some(mood) => Self::narrow_by_mood(catalog, rows, mood),
            None => rows,
        }
    }

    fn narrow_by_mood(
        catalog: &Catalog,
        rows: impl IntoIterator<Item = usize>,
        mood: Mood,
    ) -> Vec<usize> {
        let songs = catalog.songs();
        rows.into_iter()
            .filter(|&row| MoodProfile::matches(mood, &songs[row]))
            .collect()
    }
}
