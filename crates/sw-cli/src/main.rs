//! Command-line player for Scenewalk stories.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use sw_engine::PlayConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "sw",
    about = "Scenewalk — play branching text stories",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine decisions to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a story interactively (the built-in sample if no file is given)
    Play {
        /// Story file (.json)
        file: Option<PathBuf>,

        /// Do not suggest near-miss choice labels
        #[arg(long)]
        no_hints: bool,

        /// Text shown before each input line
        #[arg(long, default_value = "> ")]
        prompt: String,

        /// Stop after this many scene changes (0 = no limit)
        #[arg(long, default_value = "0")]
        max_steps: usize,
    },

    /// Play a story with pre-supplied selections and print where it stopped
    Run {
        /// Story file (.json)
        file: PathBuf,

        /// Selections in order: option numbers (from 1) or choice text
        selections: Vec<String>,

        /// JSON array of selections to play first (numbers count from 0)
        #[arg(short, long)]
        script: Option<PathBuf>,
    },

    /// Validate a story file and report authoring problems
    Check {
        /// Story file (.json)
        file: PathBuf,
    },

    /// List the scenes of a story
    Scenes {
        /// Story file (.json)
        file: PathBuf,
    },

    /// Write the built-in sample story as JSON
    Sample {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            file,
            no_hints,
            prompt,
            max_steps,
        } => {
            let config = PlayConfig::default()
                .with_prompt(prompt)
                .with_hints(!no_hints)
                .with_max_steps(max_steps);
            commands::play::run(file.as_deref(), &config)
        }
        Commands::Run {
            file,
            selections,
            script,
        } => commands::run::run(&file, &selections, script.as_deref()),
        Commands::Check { file } => commands::check::run(&file),
        Commands::Scenes { file } => commands::scenes::run(&file),
        Commands::Sample { output } => commands::sample::run(output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
