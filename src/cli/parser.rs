use crate::models::MergePolicy;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for tcxmerge
/// CLI application to merge TCX recordings of the same ride
#[derive(Parser)]
#[command(
    name = "tcxmerge",
    version = env!("CARGO_PKG_VERSION"),
    about = "Merge two TCX recordings of the same ride, or shift one past reported breaks",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose logging on stderr (RUST_LOG takes precedence)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Merge two recordings of the same activity into one file
    Merge {
        /// First recording
        file1: PathBuf,

        /// Second recording
        file2: PathBuf,

        #[arg(short, long, value_name = "FILE", help = "Output file (default from config)")]
        output: Option<PathBuf>,

        #[arg(long, value_enum, help = "Order trackpoints by time or by distance")]
        policy: Option<MergePolicy>,

        #[arg(
            long = "id-offset",
            value_name = "SECONDS",
            help = "Seconds between the activity id and the first trackpoint"
        )]
        id_offset: Option<i64>,

        #[arg(long, short = 'f', help = "Overwrite the output without asking")]
        force: bool,
    },

    /// Shift a recording's timestamps past reported breaks
    Shift {
        /// Recording to shift
        input: PathBuf,

        /// Output file (default: input name with the configured prefix)
        output: Option<PathBuf>,

        #[arg(
            long = "break",
            value_name = "H:M:S=M:S",
            help = "Break offset from the activity start and its length; prompts when omitted"
        )]
        breaks: Vec<String>,

        #[arg(long, short = 'f', help = "Overwrite the output without asking")]
        force: bool,
    },
}
