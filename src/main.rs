//! # Memory Match Entry Point
//!
//! Loads and validates a layout for the chosen difficulty, prints the resulting
//! grid, and optionally records a finished session on the leaderboard.

use clap::Parser;
use log::{error, info, warn, LevelFilter};
use memory_match::{
    calculate_score, load_card_types, ConfigLoader, Difficulty, DirectoryFetcher,
    EmbeddedFetcher, GridLayout, Leaderboard, MatchError, MatchResult, ResourceFetcher,
    SessionConfig, TypeRegistry,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Command line arguments for memory match.
#[derive(Parser, Debug)]
#[command(name = "memory_match")]
#[command(about = "Load, validate and preview card-pairs memory game layouts")]
#[command(version)]
struct Args {
    /// Difficulty whose layout should be loaded
    #[arg(short, long, value_enum, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Explicit layout resource name, overriding the difficulty
    #[arg(short, long)]
    layout: Option<String>,

    /// Directory layout resources are read from
    #[arg(long, default_value = "assets/layouts")]
    assets_dir: PathBuf,

    /// Use the layouts bundled into the binary instead of the assets directory
    #[arg(long)]
    embedded: bool,

    /// Load through the non-blocking path
    #[arg(long)]
    async_load: bool,

    /// JSON file with the card type list (defaults to types 0-9)
    #[arg(long)]
    types: Option<PathBuf>,

    /// Leaderboard file to show and record into
    #[arg(long)]
    leaderboard: Option<PathBuf>,

    /// Record a finished session for this player (needs --leaderboard)
    #[arg(long, requires = "leaderboard")]
    player: Option<String>,

    /// Seconds the recorded session took
    #[arg(long, default_value_t = 0.0)]
    time: f32,

    /// Clicks the recorded session took
    #[arg(long, default_value_t = 0)]
    clicks: u32,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> MatchResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting memory match v{}", memory_match::VERSION);

    let registry = build_registry(&args)?;
    let session = SessionConfig::new(args.difficulty)
        .with_layout(args.layout.clone().unwrap_or_default());

    let grid = if args.embedded {
        load_grid(&args, EmbeddedFetcher::bundled(), session, registry).await?
    } else {
        load_grid(
            &args,
            DirectoryFetcher::new(&args.assets_dir),
            session,
            registry,
        )
        .await?
    };

    println!(
        "{} rows x {} columns, {} pairs",
        grid.rows,
        grid.columns,
        grid.pair_count()
    );
    print!("{}", grid.render());

    if let Some(path) = &args.leaderboard {
        record_and_show(&args, path, grid.pair_count() as u32)?;
    }

    Ok(())
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .init();
}

fn build_registry(args: &Args) -> MatchResult<TypeRegistry> {
    let registry = match &args.types {
        Some(path) => TypeRegistry::build(load_card_types(path)?),
        None => TypeRegistry::standard(),
    };
    info!("Registry ready with {} card types", registry.count());
    if !registry.report().is_clean() {
        warn!(
            "Card type list had {} null entries and {} duplicated ids",
            registry.report().dropped_null,
            registry.report().duplicates.len()
        );
    }
    Ok(registry)
}

async fn load_grid<F: ResourceFetcher + 'static>(
    args: &Args,
    fetcher: F,
    session: SessionConfig,
    registry: TypeRegistry,
) -> MatchResult<GridLayout<memory_match::CardType>> {
    let loader = ConfigLoader::with_session(fetcher, session);
    let resource = loader.session().layout_resource().to_string();
    info!(
        "Loading layout '{}' from {} (difficulty {})",
        resource,
        loader.fetcher().locate(&resource),
        loader.session().difficulty
    );

    let document = if args.async_load {
        let registry = Arc::new(registry.clone());
        Arc::new(loader)
            .spawn_load(resource.clone(), registry)
            .await
            .map_err(|_| MatchError::InvalidState("layout load was abandoned".to_string()))?
    } else {
        loader.load_selected(Some(&registry))
    };

    let Some(document) = document else {
        error!(
            "Failed to load/validate '{}'. The game cannot start.",
            resource
        );
        return Err(MatchError::InvalidState(format!(
            "no usable layout in '{}'",
            resource
        )));
    };

    GridLayout::build(&document, &registry)
}

fn record_and_show(args: &Args, path: &Path, pairs: u32) -> MatchResult<()> {
    let mut board = Leaderboard::load(path);

    if let Some(player) = &args.player {
        let score = calculate_score(args.time, args.clicks, pairs);
        board.add_entry(player, score, args.clicks, args.time.round().max(0.0) as u32)?;
        println!("Recorded {} points for {}", score, player);
    }

    println!("Leaderboard:");
    for (rank, entry) in board.top_entries().iter().enumerate() {
        println!(
            "{:>2}. {:<12} {:>6} pts  {:>4} clicks  {:>4}s",
            rank + 1,
            entry.player_name,
            entry.score,
            entry.total_clicks,
            entry.total_time
        );
    }
    Ok(())
}
