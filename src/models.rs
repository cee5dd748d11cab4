use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Emotional tone that a listener asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Romantic,
    Chill,
    Energetic,
    Neutral,
}

impl Mood {
    /// All moods in declaration order. Lookups that can match several moods
    /// resolve to the earliest one in this list.
    pub const ALL: [Mood; 7] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Romantic,
        Mood::Chill,
        Mood::Energetic,
        Mood::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Romantic => "romantic",
            Mood::Chill => "chill",
            Mood::Energetic => "energetic",
            Mood::Neutral => "neutral",
        }
    }

    /// Genre used when the listener names a mood but no genre
    pub fn default_genre(&self) -> Genre {
        match self {
            Mood::Happy => Genre::Pop,
            Mood::Sad => Genre::RnB,
            Mood::Angry => Genre::Rock,
            Mood::Romantic => Genre::RnB,
            Mood::Chill => Genre::RnB,
            Mood::Energetic => Genre::Edm,
            Mood::Neutral => Genre::Pop,
        }
    }

    /// First mood whose default genre is `genre`
    pub fn for_default_genre(genre: Genre) -> Option<Mood> {
        Mood::ALL
            .iter()
            .copied()
            .find(|mood| mood.default_genre() == genre)
    }
}

/// Musical style label, matched exactly against catalog genres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    #[serde(rename = "rock")]
    Rock,
    #[serde(rename = "pop")]
    Pop,
    #[serde(rename = "rap")]
    Rap,
    #[serde(rename = "latin")]
    Latin,
    #[serde(rename = "r&b")]
    RnB,
    #[serde(rename = "edm")]
    Edm,
}

impl Genre {
    pub const ALL: [Genre; 6] = [
        Genre::Rock,
        Genre::Pop,
        Genre::Rap,
        Genre::Latin,
        Genre::RnB,
        Genre::Edm,
    ];

    /// Catalog spelling of the genre (already lowercase)
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Rock => "rock",
            Genre::Pop => "pop",
            Genre::Rap => "rap",
            Genre::Latin => "latin",
            Genre::RnB => "r&b",
            Genre::Edm => "edm",
        }
    }
}

/// A label string that names no known mood or genre
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct LabelParseError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

fn parse_label<T: Copy>(
    kind: &'static str,
    value: &str,
    all: &[T],
    name: fn(&T) -> &'static str,
) -> Result<T, LabelParseError> {
    let wanted = value.trim().to_lowercase();
    all.iter()
        .find(|label| name(label) == wanted)
        .copied()
        .ok_or_else(|| LabelParseError {
            kind,
            value: value.to_string(),
            expected: all.iter().map(name).collect::<Vec<_>>().join(", "),
        })
}

impl FromStr for Mood {
    type Err = LabelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("mood", s, &Mood::ALL, Mood::as_str)
    }
}

impl FromStr for Genre {
    type Err = LabelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("genre", s, &Genre::ALL, Genre::as_str)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mood and genre read out of a free-text request. Either may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub mood: Option<Mood>,
    pub genre: Option<Genre>,
}

/// A catalog row with the audio features used for mood filtering
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub name: String,
    pub artist: String,
    pub genre: String, // lowercase, trimmed
    pub valence: f32,  // 0.0 = negative, 1.0 = positive
    pub energy: f32,   // 0.0 = calm, 1.0 = intense
}

impl Song {
    /// Value of a named audio feature
    pub fn feature(&self, feature: AudioFeature) -> f32 {
        match feature {
            AudioFeature::Valence => self.valence,
            AudioFeature::Energy => self.energy,
        }
    }
}

/// Audio features that mood profiles can constrain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFeature {
    Valence,
    Energy,
}

impl AudioFeature {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioFeature::Valence => "valence",
            AudioFeature::Energy => "energy",
        }
    }
}

/// What a listener gets back for each recommended song
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub name: String,
    pub artist: String,
    pub genre: String,
}

impl From<&Song> for Recommendation {
    fn from(song: &Song) -> Self {
        Recommendation {
            name: song.name.clone(),
            artist: song.artist.clone(),
            genre: song.genre.clone(),
        }
    }
}
