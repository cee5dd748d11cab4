use super::matcher::PhraseMatcher;
use crate::models::{Genre, Mood};
use serde::Deserialize;
use std::path::Path;

/// Built-in mood vocabulary. Order matters: a phrase listed under several
/// moods resolves to the first one.
pub const MOOD_PHRASES: &[(Mood, &[&str])] = &[
    (
        Mood::Happy,
        &[
            "joyful", "cheerful", "elated", "glad", "up", "ecstatic", "delighted", "overjoyed",
            "blissful", "sunny", "excited", "grateful", "lighthearted", "jolly", "content",
            "cheery", "smiling", "optimistic", "bubbly", "radiant", "hyped", "buzzing", "lit",
            "goofy", "grinning", "vibing", "in a good mood", "feelin good", "stoked", "pure",
            "nice", "good", "happy",
        ],
    ),
    (
        Mood::Sad,
        &[
            "sorrowful", "depressed", "melancholic", "down", "blue", "low", "gloomy", "tearful",
            "miserable", "hopeless", "heartbroken", "grieving", "moody", "lonely", "tired",
            "lost", "unhappy", "broken", "drained", "crying", "sadge", "in my feels", "emo",
            "not okay", "dark", "void", "raw", "pain", "ruined", "ugh", "sad",
        ],
    ),
    (
        Mood::Angry,
        &[
            "furious", "irate", "enraged", "mad", "annoyed", "frustrated", "pissed", "fuming",
            "agitated", "livid", "raging", "bitter", "infuriated", "tense", "hostile", "grumpy",
            "fed up", "snappy", "exploding", "done", "rage", "on edge", "burning", "mad af",
            "seething", "tilted", "bent", "blowing up", "angry",
        ],
    ),
    (
        Mood::Romantic,
        &[
            "loving", "tender", "intimate", "sweet", "slow", "in love", "affectionate",
            "emotional", "sensual", "caring", "cuddly", "dreamy", "crushy", "wholesome", "soft",
            "charming", "mushy", "passionate", "date", "flirty", "sappy", "heart eyes", "simp",
            "lovey-dovey", "valentine", "rosy", "slow dance", "freaky", "rizz", "rizzy",
            "romantic",
        ],
    ),
    (
        Mood::Chill,
        &[
            "relaxed", "mellow", "calm", "laid-back", "cool", "easygoing", "serene", "peaceful",
            "soft", "gentle", "loose", "casual", "vibing", "breezy", "cozy", "unwind", "smooth",
            "quiet", "zen", "chillax", "lowkey", "no stress", "laid out", "slowed", "kickin",
            "just chillin", "soft vibe", "lofi", "ambient", "chill",
        ],
    ),
    (
        Mood::Energetic,
        &[
            "lively", "hyper", "pumped", "upbeat", "wild", "bouncy", "excited", "charged",
            "hyped", "electrified", "amped", "motivated", "fast", "jumping", "dancing",
            "ecstatic", "ready", "thrilled", "bursting", "turnt", "fired up", "cranked",
            "banger", "go time", "insane", "explosive", "adrenaline", "energetic",
        ],
    ),
    (
        Mood::Neutral,
        &[
            "composed", "fine", "ok", "normal", "meh", "alright", "average", "okay", "nothing",
            "blank", "uncertain", "flat", "idle", "neutral", "plain", "default", "dry", "basic",
            "regular", "standard", "mid", "i guess", "whatever",
        ],
    ),
];

/// Built-in genre vocabulary, same ordering rules as [`MOOD_PHRASES`]
pub const GENRE_PHRASES: &[(Genre, &[&str])] = &[
    (
        Genre::Rock,
        &[
            "guitar", "band", "concert", "drums", "amp", "garage", "punk", "metal", "grunge",
            "headbang", "mosh", "riff", "alternative", "hard", "indie", "electric", "distortion",
            "live", "screamo", "thrash", "power chords", "raw", "moshpit", "underground",
            "angsty", "rock",
        ],
    ),
    (
        Genre::Pop,
        &[
            "singer", "dance", "hit", "catchy", "trending", "mainstream", "idol", "radio",
            "chorus", "vocal", "viral", "billboard", "auto-tune", "chart", "glam", "commercial",
            "melodic", "flashy", "slay", "sparkle", "aesthetic", "tiktok", "girl group",
            "boy band", "bubblegum", "glossy", "basic", "pop",
        ],
    ),
    (
        Genre::Rap,
        &[
            "hip-hop", "beats", "flow", "bars", "freestyle", "trap", "gangsta", "spit", "rhymes",
            "mc", "verse", "808", "real", "lyrics", "drill", "cypher", "rhyme", "mic", "urban",
            "fire", "bussin", "heat", "flex", "hustle", "no cap", "street", "hard",
            "vibe check", "rap",
        ],
    ),
    (
        Genre::Latin,
        &[
            "salsa", "bailar", "fiesta", "reggaeton", "latino", "bachata", "rumba", "merengue",
            "dance", "caliente", "spanish", "tropical", "mambo", "cumbia", "ritmo", "fiery",
            "party", "spicy", "despacito", "perreo", "zumba", "latin vibes", "dominican", "cuba",
            "romántico", "dembow", "latin",
        ],
    ),
    (
        Genre::RnB,
        &[
            "soul", "rhythm", "blues", "smooth", "vocals", "love", "melody", "slow", "emotional",
            "groove", "romantic", "jazzy", "cool", "chill", "sensual", "deep", "vocal",
            "harmonies", "sweet", "vibe", "lofi", "aesthetic", "heart", "crying in the club",
            "midnight", "intimate", "r&b", "soft", "sadboy",
        ],
    ),
    (
        Genre::Edm,
        &[
            "electronic", "club", "bass", "beat drop", "synth", "trance", "techno", "rave",
            "house", "dubstep", "build-up", "drop", "festival", "vibe", "dj", "remix", "electro",
            "banger", "dancefloor", "lights", "insane", "plur", "energy", "neon", "blast", "glow",
            "euphoria", "go crazy", "edm",
        ],
    ),
];

/// A phrase stored as its lowercase tokens
pub type Phrase = Vec<String>;

/// Ordered label -> phrases table. Entry order is the tie-break order.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon<L> {
    entries: Vec<(L, Vec<Phrase>)>,
}

impl<L: Copy + PartialEq> Lexicon<L> {
    pub fn new<'a, I, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (L, P)>,
        P: IntoIterator<Item = &'a str>,
    {
        let mut lexicon = Lexicon {
            entries: Vec::new(),
        };
        for (label, phrases) in entries {
            let tokenized = phrases
                .into_iter()
                .map(PhraseMatcher::tokenize)
                .filter(|phrase| !phrase.is_empty());

            // Repeated labels extend the first entry so order stays stable
            match lexicon.entries.iter().position(|(l, _)| *l == label) {
                Some(index) => lexicon.entries[index].1.extend(tokenized),
                None => lexicon.entries.push((label, tokenized.collect())),
            }
        }
        lexicon
    }

    pub fn entries(&self) -> &[(L, Vec<Phrase>)] {
        &self.entries
    }

    pub fn phrases(&self, label: L) -> &[Phrase] {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, phrases)| phrases.as_slice())
            .unwrap_or(&[])
    }
}

/// The mood and genre vocabularies used together by the interpreter
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconSet {
    pub moods: Lexicon<Mood>,
    pub genres: Lexicon<Genre>,
}

impl Default for LexiconSet {
    fn default() -> Self {
        Self {
            moods: Lexicon::new(
                MOOD_PHRASES
                    .iter()
                    .map(|(mood, phrases)| (*mood, phrases.iter().copied())),
            ),
            genres: Lexicon::new(
                GENRE_PHRASES
                    .iter()
                    .map(|(genre, phrases)| (*genre, phrases.iter().copied())),
            ),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("cannot read lexicon file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid lexicon file: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk lexicon layout
#[derive(Debug, Deserialize)]
pub struct LexiconFile {
    #[serde(default)]
    pub moods: Vec<LexiconEntry<Mood>>,
    #[serde(default)]
    pub genres: Vec<LexiconEntry<Genre>>,
}

#[derive(Debug, Deserialize)]
pub struct LexiconEntry<L> {
    pub label: L,
    pub phrases: Vec<String>,
}

impl LexiconSet {
    /// Load replacement vocabularies from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile = serde_json::from_str(content)?;
        Ok(Self {
            moods: Lexicon::new(
                file.moods
                    .iter()
                    .map(|entry| (entry.label, entry.phrases.iter().map(String::as_str))),
            ),
            genres: Lexicon::new(
                file.genres
                    .iter()
                    .map(|entry| (entry.label, entry.phrases.iter().map(String::as_str))),
            ),
        })
    }
}
