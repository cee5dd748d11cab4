use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_CATALOG_PATH: &str = "data/spotify_songs.csv";
pub const DEFAULT_PLAYLIST_SIZE: usize = 10;

/// Configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub playlist_size: usize,
    pub lexicon_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            playlist_size: DEFAULT_PLAYLIST_SIZE,
            lexicon_path: None,
        }
    }
}

/// Load configuration from `.env` and environment
pub fn load_config() -> Result<Config> {
    // Load `.env` file if present
    dotenv::dotenv().ok();
    config_from(|key| std::env::var(key).ok())
}

/// Build a config from a variable lookup. Unset variables keep their defaults.
pub fn config_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
    let mut config = Config::default();

    if let Some(path) = lookup("MOOD_PLAYLIST_CATALOG") {
        config.catalog_path = PathBuf::from(path);
    }
    if let Some(size) = lookup("MOOD_PLAYLIST_SIZE") {
        config.playlist_size = parse_playlist_size(&size)
            .with_context(|| format!("MOOD_PLAYLIST_SIZE='{size}' is not a valid playlist size"))?;
    }
    config.lexicon_path = lookup("MOOD_PLAYLIST_LEXICON").map(PathBuf::from);

    Ok(config)
}

/// Playlist sizes must be positive integers
pub fn parse_playlist_size(value: &str) -> Result<usize> {
    let size: usize = value.trim().parse()?;
    if size == 0 {
        anyhow::bail!("playlist size must be at least 1");
    }
    Ok(size)
}
