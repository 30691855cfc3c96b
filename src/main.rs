use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::Path;
use std::process;
use std::sync::Arc;
use topoplan::config::Config;
use topoplan::topology::ProfileSet;
use topoplan::{Planner, TopoPlanError};
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

const DEFAULT_CONFIG_PATH: &str = "data/config/planner.json";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Planner config JSON (thresholds, weights, confidence).
    #[arg(global = true, long)]
    config: Option<String>,

    /// Match-table JSON overriding the built-in topology profiles.
    #[arg(global = true, long)]
    profiles: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recommend a topology for one deployment.
    Recommend(cmd::recommend::RecommendArgs),
    /// Recommend topologies for every row of a CSV file.
    Batch(cmd::batch::BatchArgs),
    /// Compare the topology catalogue.
    Compare(cmd::compare::CompareArgs),
    /// Print the rule outcome for all 27 classification triples.
    Audit(cmd::audit::AuditArgs),
}

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn fatal(context: &str, e: TopoPlanError) -> ! {
    error!("❌ {}: {}", context, e);
    process::exit(1);
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.debug);
    info!("🚀 Initializing topology planner...");

    // 1. Base config: explicit file, then the repo default, then embedded defaults
    let config_path = match &cli.config {
        Some(path) => Some(path.clone()),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => Some(DEFAULT_CONFIG_PATH.to_string()),
        None => None,
    };

    let mut config = match config_path {
        Some(path) => Config::load_from_file(&path)
            .unwrap_or_else(|e| fatal(&format!("Failed to load config '{}'", path), e)),
        None => {
            warn!("⚠️  No config file found. Using embedded defaults.");
            Config::default()
        }
    };

    // 2. Explicit CLI flags win over the file
    let cli_config = match &cli.command {
        Commands::Recommend(args) => Some((&args.config, "recommend")),
        Commands::Batch(args) => Some((&args.config, "batch")),
        Commands::Audit(args) => Some((&args.config, "audit")),
        Commands::Compare(_) => None,
    };

    if let Some((overrides, name)) = cli_config {
        if let Some(sub_matches) = matches.subcommand_matches(name) {
            config.merge_from_cli(overrides, sub_matches);
        }
    }

    // 3. Match tables
    let profiles = match &cli.profiles {
        Some(path) => ProfileSet::load_match_tables(path)
            .unwrap_or_else(|e| fatal(&format!("Failed to load profiles '{}'", path), e)),
        None => ProfileSet::standard(),
    };

    let planner = match Planner::new(config, profiles) {
        Ok(p) => Arc::new(p),
        Err(e) => fatal("FATAL ERROR INITIALIZING PLANNER", e),
    };

    let result = match cli.command {
        Commands::Recommend(args) => cmd::recommend::run(args, planner),
        Commands::Batch(args) => cmd::batch::run(args, planner),
        Commands::Compare(args) => cmd::compare::run(args, planner),
        Commands::Audit(args) => cmd::audit::run(args, planner),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        let code = if e.is_invalid_input() { 2 } else { 1 };
        process::exit(code);
    }
}
