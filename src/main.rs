use clap::Parser;
use roommate_match::config::Settings;
use roommate_match::services::{ProfileStore, ProfileStoreError};
use roommate_match::{DirectoryFilter, FindMatchesRequest, FindMatchesResponse, MatchOptions};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;
use validator::Validate;

/// Rank roommate candidates for one user by compatibility
#[derive(Debug, Parser)]
#[command(name = "roommate-match", version, about)]
struct Cli {
    /// JSON file with every profile (overrides data.profiles_path)
    #[arg(long, short)]
    profiles: Option<PathBuf>,

    /// User id whose profile is the reference
    #[arg(long, short)]
    owner: i64,

    /// Return at most this many matches
    #[arg(long, short)]
    limit: Option<usize>,

    /// Configuration file to use instead of config/default.toml
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Keep candidates that hit one of the owner's dealbreakers
    #[arg(long)]
    no_dealbreakers: bool,

    /// Only candidates whose name or description contains this text
    #[arg(long)]
    search: Option<String>,

    /// Only candidates with exactly this budget
    #[arg(long)]
    budget: Option<f64>,

    /// Only candidates whose social style contains this text
    #[arg(long)]
    social: Option<String>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid request: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("No profiles file given (use --profiles or ROOMMATE__DATA__PROFILES_PATH)")]
    MissingProfiles,

    #[error(transparent)]
    Store(#[from] ProfileStoreError),

    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

fn main() {
    if let Err(err) = run() {
        eprintln!("roommate-match: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    init_logging(&settings);

    let request = FindMatchesRequest {
        user_id: cli.owner,
        limit: cli.limit.or(settings.matching.default_limit),
        apply_dealbreakers: settings.matching.apply_dealbreakers && !cli.no_dealbreakers,
        filter: DirectoryFilter {
            search: cli.search,
            budget: cli.budget,
            social: cli.social,
        },
    };
    request.validate()?;

    let path = cli
        .profiles
        .or_else(|| settings.data.profiles_path.clone())
        .ok_or(CliError::MissingProfiles)?;

    let store = ProfileStore::load(&path)?;
    let reference = store.get_by_owner(request.user_id)?;

    let matcher = settings.matcher();
    info!(
        "Ranking {} profiles for user {} (tolerance: {}, weights: {:?})",
        store.len(),
        request.user_id,
        matcher.tolerance(),
        matcher.weights()
    );

    let options = MatchOptions {
        apply_dealbreakers: request.apply_dealbreakers,
        directory: request.filter.clone(),
        limit: request.limit,
        ..settings.match_options()
    };
    let result = matcher.find_matches(reference, store.all(), &options);

    let response = FindMatchesResponse {
        user_id: request.user_id,
        matches: result.matches,
        total_candidates: result.total_candidates,
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn init_logging(settings: &Settings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}
