mod commands;
mod reader;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lyrical_core::WordListManager;
use reader::{read_config, LyricalConfig};

#[derive(Parser)]
#[command(
    name = "lyrical",
    version,
    about = "Lyrical writing tools — syllable and function-word metrics, word lists for colour and smell"
)]
struct Cli {
    /// Config file (defaults to ./lyrical.config.yaml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the word-list catalogs
    #[arg(long, global = true)]
    resources: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report average syllables per word and function-word ratio
    Analyze {
        /// Input path (file or directory, defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Analyze the built-in sample paragraph instead of files
        #[arg(long)]
        sample: bool,

        /// Output format: human (default) or json
        #[arg(long, default_value = "human")]
        format: String,
    },

    /// Estimate the syllables of each word
    Syllables {
        /// Words to estimate
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Show a word list (beautiful-words, colour-words, colour-descriptors, smells)
    Words {
        /// Catalog kind
        kind: String,

        /// Only entries carrying this tag
        #[arg(long)]
        tag: Option<String>,

        /// Print only this field of each entry: descriptor or description
        #[arg(long)]
        field: Option<String>,

        /// Output format: human (default) or json
        #[arg(long, default_value = "human")]
        format: String,
    },

    /// Manage word-list catalogs
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },

    /// Lint text files for style issues
    Lint {
        /// Input path (file or directory, defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format: human (default), json or sarif
        #[arg(long, default_value = "human")]
        format: String,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("LYRICAL_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let config = read_config(cli.config.as_deref())?;
    let manager = word_list_manager(&config, cli.resources.as_deref());

    match cli.command {
        Commands::Analyze {
            path,
            sample,
            format,
        } => commands::analyze::run_analyze(&path, sample, &format, &config),
        Commands::Syllables { words } => Ok(commands::analyze::run_syllables(&words)),
        Commands::Words {
            kind,
            tag,
            field,
            format,
        } => commands::words::run_words(&manager, &kind, tag, field.as_deref(), &format),
        Commands::Catalog { action } => commands::catalog::run_catalog(&manager, action),
        Commands::Lint { path, format } => commands::lint::run_lint(&path, &format, &config),
    }
}

/// `--resources` wins over the config file, which wins over the default.
fn word_list_manager(config: &LyricalConfig, resources: Option<&Path>) -> WordListManager {
    match resources {
        Some(dir) => WordListManager::new(dir),
        None => WordListManager::new(config.resources_dir()),
    }
}
