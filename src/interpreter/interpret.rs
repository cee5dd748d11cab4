use super::lexicon::LexiconSet;
use super::matcher::PhraseMatcher;
use crate::models::{Interpretation, Mood};
use tracing::debug;

/// Reads a mood and a genre out of free text by literal phrase lookup
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    lexicons: LexiconSet,
}

impl Interpreter {
    /// Interpreter with the built-in vocabularies
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lexicon(lexicons: LexiconSet) -> Self {
        Self { lexicons }
    }

    /// Interpret a request such as "something chill with a bit of soul".
    ///
    /// Lookup runs in three passes:
    /// 1. phrase match: earliest phrase, longest at that position, first label on ties
    /// 2. single-token match for whatever is still missing
    /// 3. cross fill: mood -> its default genre, then genre -> first mood defaulting to it
    ///
    /// Never fails. Text with no known words gives an empty interpretation.
    pub fn interpret(&self, text: &str) -> Interpretation {
        let tokens = PhraseMatcher::tokenize(text);

        let mut mood = PhraseMatcher::find_phrase(&tokens, &self.lexicons.moods).map(|m| m.label);
        let mut genre =
            PhraseMatcher::find_phrase(&tokens, &self.lexicons.genres).map(|m| m.label);

        if mood.is_none() {
            mood = PhraseMatcher::find_token(&tokens, &self.lexicons.moods);
        }
        if genre.is_none() {
            genre = PhraseMatcher::find_token(&tokens, &self.lexicons.genres);
        }

        if genre.is_none() {
            genre = mood.map(|m| m.default_genre());
        }
        if mood.is_none() {
            mood = genre.and_then(Mood::for_default_genre);
        }

        debug!(
            "Interpreted {:?} as mood={:?} genre={:?}",
            text, mood, genre
        );
        Interpretation { mood, genre }
    }
}
