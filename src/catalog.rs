use crate::models::{AudioFeature, Song};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, info};

#[cfg(test)]
use mockall::automock;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be opened or read.
    #[error("cannot read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Bad CSV structure, missing columns, or non-numeric features.
    #[error("malformed catalog: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: {field} = {value} is outside [0, 1]")]
    FeatureOutOfRange {
        row: usize,
        field: &'static str,
        value: f32,
    },
}

/// Anything that can produce the song rows for a catalog
#[cfg_attr(test, automock)]
pub trait CatalogSource {
    fn load_songs(&self) -> Result<Vec<Song>, CatalogError>;
}

/// Raw row of the Spotify songs export. Other columns are ignored.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(default)]
    track_name: String,
    #[serde(default)]
    track_artist: String,
    #[serde(default)]
    playlist_genre: String,
    valence: f32,
    energy: f32,
}

/// Reads songs from a CSV file with a header row
pub struct CsvCatalogSource {
    path: PathBuf,
}

impl CsvCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse songs from any CSV reader
    pub fn read_songs<R: std::io::Read>(reader: R) -> Result<Vec<Song>, CatalogError> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let headers = reader.headers()?.clone();
        let mut songs = Vec::new();

        for record in reader.records() {
            let record = record?;
            // Line where the record starts, quoted newlines included
            let line = record.position().map_or(0, |pos| pos.line() as usize);
            let row: CatalogRow = record.deserialize(Some(&headers))?;
            check_feature(line, AudioFeature::Valence, row.valence)?;
            check_feature(line, AudioFeature::Energy, row.energy)?;

            songs.push(Song {
                name: row.track_name,
                artist: row.track_artist,
                genre: normalize_genre(&row.playlist_genre),
                valence: row.valence,
                energy: row.energy,
            });
        }

        Ok(songs)
    }
}

impl CatalogSource for CsvCatalogSource {
    fn load_songs(&self) -> Result<Vec<Song>, CatalogError> {
        let file = std::fs::File::open(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        Self::read_songs(std::io::BufReader::new(file))
    }
}

fn check_feature(row: usize, feature: AudioFeature, value: f32) -> Result<(), CatalogError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CatalogError::FeatureOutOfRange {
            row,
            field: feature.as_str(),
            value,
        })
    }
}

pub fn normalize_genre(genre: &str) -> String {
    genre.trim().to_lowercase()
}

/// Immutable in-memory song table with a genre index
#[derive(Debug, Default)]
pub struct Catalog {
    songs: Vec<Song>,
    by_genre: HashMap<String, Vec<usize>>,
}

impl Catalog {
    /// Build a catalog, normalizing genres that callers did not normalize
    pub fn new(mut songs: Vec<Song>) -> Self {
        let mut by_genre: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, song) in songs.iter_mut().enumerate() {
            song.genre = normalize_genre(&song.genre);
            by_genre.entry(song.genre.clone()).or_default().push(index);
        }
        debug!("Indexed {} songs across {} genres", songs.len(), by_genre.len());
        Self { songs, by_genre }
    }

    pub fn load(source: &dyn CatalogSource) -> Result<Self, CatalogError> {
        let catalog = Self::new(source.load_songs()?);
        info!("Loaded catalog with {} songs", catalog.len());
        Ok(catalog)
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Row indices of songs whose genre equals `genre` (case-insensitive)
    pub fn genre_rows(&self, genre: &str) -> &[usize] {
        self.by_genre
            .get(&normalize_genre(genre))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLE_CSV: &str = "\
track_id,track_name,track_artist,track_popularity,playlist_genre,danceability,energy,valence
6f807x,I Don't Care,Ed Sheeran,66,pop,0.748,0.916,0.518
0r7CVb,Memories,Maroon 5,67,  Pop ,0.726,0.815,0.693
1z1Hg7,All the Time,Zara Larsson,70,R&B,0.675,0.931,0.613
";

    #[test]
    fn test_reads_rows_and_normalizes_genre() {
        let songs = CsvCatalogSource::read_songs(SAMPLE_CSV.as_bytes()).unwrap();

        assert_eq!(songs.len(), 3);
        assert_eq!(songs[0].name, "I Don't Care");
        assert_eq!(songs[0].artist, "Ed Sheeran");
        assert_eq!(songs[1].genre, "pop");
        assert_eq!(songs[2].genre, "r&b");
        assert_relative_eq!(songs[0].valence, 0.518);
        assert_relative_eq!(songs[0].energy, 0.916);
    }

    #[test]
    fn test_empty_text_cells_are_allowed() {
        let csv = "track_name,track_artist,playlist_genre,valence,energy\n,,rock,0.2,0.9\n";
        let songs = CsvCatalogSource::read_songs(csv.as_bytes()).unwrap();

        assert_eq!(songs[0].name, "");
        assert_eq!(songs[0].genre, "rock");
    }

    #[test]
    fn test_non_numeric_feature_is_malformed() {
        let csv = "track_name,track_artist,playlist_genre,valence,energy\nA,B,rock,high,0.9\n";
        let err = CsvCatalogSource::read_songs(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::Csv(_)));
    }

    #[test]
    fn test_missing_feature_column_is_malformed() {
        let csv = "track_name,track_artist,playlist_genre,energy\nA,B,rock,0.9\n";
        let err = CsvCatalogSource::read_songs(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::Csv(_)));
    }

    #[test]
    fn test_feature_out_of_range_reports_row() {
        let csv = "track_name,track_artist,playlist_genre,valence,energy\nA,B,rock,0.5,0.5\nC,D,pop,0.5,1.4\n";
        let err = CsvCatalogSource::read_songs(csv.as_bytes()).unwrap_err();
        match err {
            CatalogError::FeatureOutOfRange { row, field, .. } => {
                assert_eq!(row, 3);
                assert_eq!(field, "energy");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_out_of_range_row_counts_quoted_newlines() {
        let csv = "track_name,track_artist,playlist_genre,valence,energy\n\
                   \"Two\nLines\",B,rock,0.5,0.5\n\
                   C,D,pop,-0.2,0.5\n";
        let err = CsvCatalogSource::read_songs(csv.as_bytes()).unwrap_err();
        match err {
            CatalogError::FeatureOutOfRange { row, field, value } => {
                assert_eq!(row, 4);
                assert_eq!(field, "valence");
                assert_relative_eq!(value, -0.2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = CsvCatalogSource::new("definitely/not/here.csv");
        let err = source.load_songs().unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/here.csv"));
    }

    #[test]
    fn test_genre_index_is_case_insensitive() {
        let songs = CsvCatalogSource::read_songs(SAMPLE_CSV.as_bytes()).unwrap();
        let catalog = Catalog::new(songs);

        assert_eq!(catalog.genre_rows("pop"), &[0, 1]);
        assert_eq!(catalog.genre_rows(" POP "), &[0, 1]);
        assert_eq!(catalog.genre_rows("r&b"), &[2]);
        assert!(catalog.genre_rows("latin").is_empty());
    }

    #[test]
    fn test_load_uses_source_once() {
        let mut source = MockCatalogSource::new();
        source.expect_load_songs().times(1).returning(|| {
            Ok(vec![Song {
                name: "Song".to_string(),
                artist: "Artist".to_string(),
                genre: " EDM".to_string(),
                valence: 0.4,
                energy: 0.9,
            }])
        });

        let catalog = Catalog::load(&source).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.songs()[0].genre, "edm");
    }

    #[test]
    fn test_load_propagates_source_error() {
        let mut source = MockCatalogSource::new();
        source.expect_load_songs().returning(|| {
            Err(CatalogError::FeatureOutOfRange {
                row: 2,
                field: "valence",
                value: -0.1,
            })
        });

        assert!(Catalog::load(&source).is_err());
    }
}
