//! tcxmerge library root.
//! Exposes the CLI parser, the high-level run() function, and the merge
//! engine used by it.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod tcx;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Merge { .. } => cli::commands::merge::handle(&cli.command, cfg),
        Commands::Shift { .. } => cli::commands::shift::handle(&cli.command, cfg),
    }
}

/// Install the stderr log subscriber. RUST_LOG wins over `verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ logging before anything can fail
    init_logging(cli.verbose);

    // 3️⃣ load config once (`--config` overrides the standard location)
    let cfg = Config::load(cli.config.as_deref())?;

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
