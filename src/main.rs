use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::info;

use mood_playlist::catalog::{Catalog, CsvCatalogSource};
use mood_playlist::config::{load_config, parse_playlist_size};
use mood_playlist::interpreter::{Interpreter, LexiconSet};
use mood_playlist::models::{Genre, Interpretation, Mood, Recommendation};
use mood_playlist::playlist::{MatchTier, Selection, Selector};

#[derive(Parser)]
#[command(name = "mood-playlist")]
#[command(about = "Recommend songs from a free-text mood or genre description")]
#[command(version)]
struct Args {
    /// Path to the songs CSV (overrides MOOD_PLAYLIST_CATALOG)
    #[arg(short = 'c', long = "catalog")]
    catalog: Option<PathBuf>,

    /// Number of songs to recommend (overrides MOOD_PLAYLIST_SIZE)
    #[arg(short = 'n', long = "count", value_parser = parse_playlist_size)]
    count: Option<usize>,

    /// JSON file replacing the built-in mood and genre vocabularies
    #[arg(short = 'l', long = "lexicon")]
    lexicon: Option<PathBuf>,

    /// Describe what you want to hear and exit after one answer
    #[arg(short = 't', long = "text")]
    text: Option<String>,

    /// Use this mood instead of (or on top of) the one read from the text
    #[arg(long = "mood")]
    mood: Option<Mood>,

    /// Use this genre instead of (or on top of) the one read from the text
    #[arg(long = "genre")]
    genre: Option<Genre>,

    /// Print results as JSON (one compact object per answer in interactive mode)
    #[arg(long = "json")]
    json: bool,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Quiet mode - only log warnings and errors
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

impl Args {
    fn is_one_shot(&self) -> bool {
        self.text.is_some() || self.mood.is_some() || self.genre.is_some()
    }
}

/// One answer as emitted by `--json`
#[derive(Serialize)]
struct QueryOutput<'a> {
    mood: Option<Mood>,
    genre: Option<Genre>,
    tier: MatchTier,
    songs: &'a [Recommendation],
}

impl<'a> QueryOutput<'a> {
    fn new(interpretation: &Interpretation, selection: &'a Selection) -> Self {
        Self {
            mood: interpretation.mood,
            genre: interpretation.genre,
            tier: selection.tier,
            songs: &selection.songs,
        }
    }
}

fn init_logging(args: &Args) {
    let default_level = if args.debug {
        "debug"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    // Load configuration from .env, flags take precedence
    let config = load_config()?;
    let catalog_path = args.catalog.clone().unwrap_or(config.catalog_path);
    let playlist_size = args.count.unwrap_or(config.playlist_size);
    let lexicon_path = args.lexicon.clone().or(config.lexicon_path);

    // The catalog is required before any recommendation can be made
    if !catalog_path.exists() {
        eprintln!(
            "Error: Song catalog '{}' not found.",
            catalog_path.display()
        );
        eprintln!("Please ensure the file exists or specify a different file with --catalog.");
        return Err(anyhow::anyhow!(
            "Catalog file '{}' not found",
            catalog_path.display()
        ));
    }

    let catalog = Catalog::load(&CsvCatalogSource::new(&catalog_path))
        .with_context(|| format!("Failed to load catalog '{}'", catalog_path.display()))?;

    let interpreter = match &lexicon_path {
        Some(path) => {
            let lexicons = LexiconSet::load_from_file(path)
                .with_context(|| format!("Failed to load lexicon '{}'", path.display()))?;
            info!("Using vocabulary from {}", path.display());
            Interpreter::with_lexicon(lexicons)
        }
        None => Interpreter::new(),
    };
    let selector = Selector::new(&catalog);

    if args.is_one_shot() {
        let interpretation = resolve_labels(&interpreter, &args);
        let selection = selector.recommend_detailed(
            interpretation.mood,
            interpretation.genre,
            playlist_size,
            &mut rand::thread_rng(),
        )?;

        if args.json {
            let output = QueryOutput::new(&interpretation, &selection);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            print_selection(&interpretation, &selection);
        }
        return Ok(());
    }

    run_interactive(&interpreter, &selector, playlist_size, args.json)
}

/// Labels from the text, with explicit flags taking precedence
fn resolve_labels(interpreter: &Interpreter, args: &Args) -> Interpretation {
    let from_text = args
        .text
        .as_deref()
        .map(|text| interpreter.interpret(text))
        .unwrap_or_default();

    Interpretation {
        mood: args.mood.or(from_text.mood),
        genre: args.genre.or(from_text.genre),
    }
}

/// Prompt loop until `exit` or end of input
fn run_interactive(
    interpreter: &Interpreter,
    selector: &Selector,
    playlist_size: usize,
    json: bool,
) -> Result<()> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        // Keep stdout machine-readable in JSON mode
        if !json {
            println!("\nWhat kind of music are you in the mood for? (type 'exit' to quit)");
            print!("> ");
            std::io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read from stdin")?;
        if line.trim().eq_ignore_ascii_case("exit") {
            break;
        }

        let interpretation = interpreter.interpret(&line);
        let selection = selector.recommend_detailed(
            interpretation.mood,
            interpretation.genre,
            playlist_size,
            &mut rand::thread_rng(),
        )?;

        if json {
            println!("{}", answer_line(&interpretation, &selection)?);
        } else {
            print_selection(&interpretation, &selection);
        }
    }

    Ok(())
}

/// Compact JSON for one interactive answer
fn answer_line(interpretation: &Interpretation, selection: &Selection) -> Result<String> {
    Ok(serde_json::to_string(&QueryOutput::new(interpretation, selection))?)
}

fn print_selection(interpretation: &Interpretation, selection: &Selection) {
    let mood = interpretation
        .mood
        .map_or("not found".to_string(), |m| m.to_string());
    let genre = interpretation
        .genre
        .map_or("not found".to_string(), |g| g.to_string());
    println!("\nMood: {mood} | Genre: {genre}");

    match selection.tier {
        MatchTier::Exact => {}
        MatchTier::Relaxed => println!("No exact match, showing the closest songs."),
        MatchTier::Random => println!("Still nothing found, showing random songs."),
    }

    println!("\nRecommended Songs:\n");
    for song in &selection.songs {
        println!("  {:<35} | {:<25} | {}", song.name, song.artist, song.genre);
    }
}
