use super::filters::SongFilters;
use super::profile::MoodProfile;
use crate::catalog::Catalog;
use crate::models::{Genre, Mood, Recommendation};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// Requested playlist size was zero.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Nothing to pick from, no fallback can help.
    #[error("the catalog is empty")]
    EmptyCatalog,
}

/// Which stage produced the candidate songs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// Every supplied constraint held
    Exact,
    /// Only the mood, or only the genre, was applied
    Relaxed,
    /// Nothing matched so songs came from the whole catalog
    Random,
}

/// Songs picked for a request and how they were found
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub tier: MatchTier,
    pub songs: Vec<Recommendation>,
}

/// Picks songs for a mood and genre from a loaded catalog
pub struct Selector<'a> {
    catalog: &'a Catalog,
}

impl<'a> Selector<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Up to `n` random songs suiting `mood` and `genre`
    pub fn recommend(
        &self,
        mood: Option<Mood>,
        genre: Option<Genre>,
        n: usize,
    ) -> Result<Vec<Recommendation>, SelectError> {
        self.recommend_detailed(mood, genre, n, &mut rand::thread_rng())
            .map(|selection| selection.songs)
    }

    pub fn recommend_with_rng<R: Rng + ?Sized>(
        &self,
        mood: Option<Mood>,
        genre: Option<Genre>,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<Recommendation>, SelectError> {
        self.recommend_detailed(mood, genre, n, rng)
            .map(|selection| selection.songs)
    }

    /// Recommend songs and report which tier produced them.
    ///
    /// Tiers, first non-empty wins:
    /// 1. mood ranges and genre together
    /// 2. mood ranges alone if the mood has any, otherwise genre alone
    /// 3. the whole catalog
    ///
    /// The result is a uniform sample without replacement of `min(n, candidates)`
    /// songs in random order. There is no ranking.
    pub fn recommend_detailed<R: Rng + ?Sized>(
        &self,
        mood: Option<Mood>,
        genre: Option<Genre>,
        n: usize,
        rng: &mut R,
    ) -> Result<Selection, SelectError> {
        if n == 0 {
            return Err(SelectError::InvalidArgument(
                "playlist size must be at least 1".to_string(),
            ));
        }
        if self.catalog.is_empty() {
            return Err(SelectError::EmptyCatalog);
        }

        let (tier, rows) = self.candidate_rows(mood, genre);
        let songs = self.catalog.songs();
        let picked = rand::seq::index::sample(rng, rows.len(), n.min(rows.len()));

        Ok(Selection {
            tier,
            songs: picked
                .into_iter()
                .map(|i| Recommendation::from(&songs[rows[i]]))
                .collect(),
        })
    }

    fn candidate_rows(&self, mood: Option<Mood>, genre: Option<Genre>) -> (MatchTier, Vec<usize>) {
        let mood_filter = mood.filter(|m| MoodProfile::is_constrained(*m));
        if let Some(mood) = mood_filter {
            debug!("Filtering by mood: {mood}");
        }
        if let Some(genre) = genre {
            debug!("Filtering by genre: {genre}");
        }

        let exact = SongFilters::by_mood_and_genre(self.catalog, mood_filter, genre);
        if !exact.is_empty() {
            return (MatchTier::Exact, exact);
        }

        let relaxed = match (mood_filter, genre) {
            (Some(mood), _) => {
                debug!("No exact match, retrying with mood {mood} only");
                SongFilters::by_mood(self.catalog, mood)
            }
            (None, Some(genre)) => {
                debug!("No exact match, retrying with genre {genre} only");
                SongFilters::by_genre(self.catalog, genre)
            }
            (None, None) => Vec::new(),
        };
        if !relaxed.is_empty() {
            return (MatchTier::Relaxed, relaxed);
        }

        warn!("Nothing matched mood={mood:?} genre={genre:?}, picking random songs");
        (MatchTier::Random, (0..self.catalog.len()).collect())
    }
}
