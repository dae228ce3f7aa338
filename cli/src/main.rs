//! tombola: seeded, publicly verifiable position draws.

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tombola_export::ExportFormat;
use tombola_types::{Algorithm, Seed};
use tombola_utils::LogFormat;

use crate::config::TombolaConfig;

#[derive(Parser)]
#[command(name = "tombola", version, about = "Seeded, reproducible position draws")]
struct Cli {
    /// Path to a TOML configuration file. File settings are the base;
    /// CLI flags and env vars override them.
    #[arg(long, global = true, env = "TOMBOLA_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, global = true, env = "TOMBOLA_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, global = true, env = "TOMBOLA_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Create or check draw seeds.
    Seed {
        #[command(subcommand)]
        action: SeedAction,
    },

    /// Run a draw and print the positions.
    Select(SelectArgs),

    /// Replay a published manifest and compare.
    Verify {
        /// Manifest written by `select --output`.
        #[arg(long)]
        manifest: PathBuf,

        /// The participant list the draw was run over.
        #[arg(long, env = "TOMBOLA_ITEMS_FILE")]
        items_file: PathBuf,
    },
}

#[derive(clap::Subcommand)]
enum SeedAction {
    /// Print a fresh seed from the OS random source.
    Generate,
    /// Print the seed derived from public text, such as a beacon value.
    Derive {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Validate a seed and print it normalised.
    Check { seed: String },
}

#[derive(clap::Args)]
struct SelectArgs {
    /// 0x-prefixed, 128 hex digit seed.
    #[arg(long, env = "TOMBOLA_SEED")]
    seed: Seed,

    /// JSON array of participant records.
    #[arg(long, env = "TOMBOLA_ITEMS_FILE")]
    items_file: PathBuf,

    /// "unweighted", "weighted-scan" or "weighted-tickets".
    #[arg(long, env = "TOMBOLA_ALGORITHM")]
    algorithm: Option<Algorithm>,

    /// Counter to start the PRNG from.
    #[arg(long, env = "TOMBOLA_START_COUNTER")]
    start_counter: Option<u64>,

    /// Draw only the first K positions.
    #[arg(long)]
    positions: Option<usize>,

    /// Base path for exported files (`<base>.json`, `<base>.audit.csv`, ...).
    #[arg(long, env = "TOMBOLA_OUTPUT")]
    output: Option<PathBuf>,

    /// Export formats (comma-separated: "json,csv").
    #[arg(long, value_delimiter = ',')]
    format: Vec<ExportFormat>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => TombolaConfig::from_toml_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => TombolaConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    tombola_utils::init_logging(config.log_format, &config.log_level);
    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    match cli.command {
        Command::Seed { action } => match action {
            SeedAction::Generate => commands::seed_generate(),
            SeedAction::Derive { text } => commands::seed_derive(&text),
            SeedAction::Check { seed } => commands::seed_check(&seed),
        },
        Command::Select(args) => {
            if let Some(algorithm) = args.algorithm {
                config.algorithm = Some(algorithm);
            }
            if let Some(counter) = args.start_counter {
                config.start_counter = counter;
            }
            if !args.format.is_empty() {
                config.formats = args.format;
            }
            commands::select(
                &config,
                commands::SelectRequest {
                    seed: args.seed,
                    items_file: args.items_file,
                    positions: args.positions,
                    output: args.output,
                },
            )
        }
        Command::Verify {
            manifest,
            items_file,
        } => commands::verify(&config, &manifest, &items_file),
    }
}
