//! Hullbound - Content Tools
//!
//! # Usage
//!
//! ```bash
//! # Validate the bundled content
//! cargo run -p hull_tools
//!
//! # Validate another content directory
//! cargo run -p hull_tools -- validate path/to/data
//!
//! # Check a save slot export
//! cargo run -p hull_tools -- check-save slot_1.json
//! ```
//!
//! The result line goes to stdout; logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hull_tools::validate::{check_save_file, validate_data_directory, SUCCESS_MESSAGE};
use hull_tools::DEFAULT_CONTENT_DIR;

#[derive(Parser)]
#[command(name = "hull-tools")]
#[command(about = "Content tools for Hullbound")]
#[command(version)]
struct Cli {
    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate content files
    Validate {
        /// Path to content directory
        #[arg(default_value = DEFAULT_CONTENT_DIR)]
        path: PathBuf,
    },

    /// Migrate and validate a save payload
    CheckSave {
        /// Path to save JSON
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose when set.
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let command = cli.command.unwrap_or(Commands::Validate {
        path: PathBuf::from(DEFAULT_CONTENT_DIR),
    });

    let (result, success) = match command {
        Commands::Validate { path } => (validate_data_directory(&path), SUCCESS_MESSAGE),
        Commands::CheckSave { file } => (check_save_file(&file), "Save file is valid."),
    };

    match result {
        Ok(()) => {
            println!("{success}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Validation failed: {e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
