//! Lani Autocomplete - command-line entrypoint.
//!
//! Loads configuration, initializes logging, fills the index from the
//! configured word list and answers queries. Suggestions go to stdout and
//! logs to stderr.

use clap::{Parser, Subcommand};
use lani_autocomplete_lib::config::{ConfigLoader, LaniConfig, LogConfig, ENV_PREFIX};
use lani_autocomplete_lib::error::{
    ErrorContext, ErrorReporter, LaniError, LaniResult, TracingErrorReporter,
};
use lani_autocomplete_lib::Autocomplete;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use tracing::info;

/// Command line arguments for Lani Autocomplete.
#[derive(Parser, Debug)]
#[clap(name = "lani", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load, overriding `dictionary.path`
    #[clap(short, long, value_parser)]
    words: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print suggestions for a prefix
    Query {
        /// Prefix to complete
        prefix: String,

        /// Maximum number of suggestions (defaults to `index.default_limit`)
        #[clap(short, long)]
        limit: Option<usize>,

        /// Print suggestions as a JSON array
        #[clap(long)]
        json: bool,
    },

    /// Check whether a word is in the dictionary
    Check {
        /// Word to look up
        word: String,
    },

    /// Read prefixes from stdin and print suggestions for each
    Interactive,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> LaniResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| LaniError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> LaniResult<()> {
    let args = <Args as clap::Parser>::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let loaded = config_loader.load();

    // Logging settings come from the configuration, so a broken
    // configuration is reported with the defaults.
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;

    let reporter = TracingErrorReporter;
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            reporter.report(ErrorContext::new(e.into(), "config"));
            process::exit(1);
        }
    };

    if let Some(words) = args.words {
        config.dictionary.path = Some(words);
    }

    match args.command.unwrap_or(Command::Interactive) {
        Command::Query {
            prefix,
            limit,
            json,
        } => {
            let mut engine = build_engine(&config, &reporter);
            let suggestions = match limit {
                Some(limit) => engine.search_with_limit(&prefix, limit),
                None => engine.search(&prefix),
            };

            let mut out = io::stdout().lock();
            if json {
                writeln!(out, "{}", serde_json::to_string(&suggestions)?)?;
            } else {
                for word in &suggestions {
                    writeln!(out, "{word}")?;
                }
            }
            Ok(())
        }
        Command::Check { word } => {
            let engine = build_engine(&config, &reporter);
            println!("{}", engine.contains(&word));
            Ok(())
        }
        Command::Interactive => {
            let mut engine = build_engine(&config, &reporter);
            info!(words = engine.index().len(), "Ready for queries");
            run_interactive(&mut engine, io::stdin().lock(), io::stdout().lock())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = LaniConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| LaniError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Builds the engine, exiting if the word list cannot be loaded.
fn build_engine(config: &LaniConfig, reporter: &TracingErrorReporter) -> Autocomplete {
    match Autocomplete::from_config(config) {
        Ok(engine) => engine,
        Err(e) => {
            let details = format!("{:?}", config.dictionary.path);
            reporter.report(ErrorContext::new(e, "dictionary").with_details(details));
            process::exit(1);
        }
    }
}

/// Line protocol: `+word` adds a word, `?word` checks membership, `:stats`
/// prints cache counters, anything else is a prefix to complete.
fn run_interactive<R: BufRead, W: Write>(
    engine: &mut Autocomplete,
    input: R,
    mut output: W,
) -> LaniResult<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        if let Some(word) = line.strip_prefix('+') {
            match engine.add_word(word.trim()) {
                Ok(is_new) => writeln!(output, "{}", if is_new { "added" } else { "exists" })?,
                Err(e) => writeln!(output, "rejected: {e}")?,
            }
        } else if let Some(word) = line.strip_prefix('?') {
            writeln!(output, "{}", engine.contains(word.trim()))?;
        } else if line == ":stats" {
            let stats = engine.index().cache_stats();
            writeln!(
                output,
                "words={} hits={} misses={} invalidations={} entries={}",
                engine.index().len(),
                stats.hits,
                stats.misses,
                stats.invalidations,
                stats.entries
            )?;
        } else {
            for (rank, word) in engine.search(line).iter().enumerate() {
                writeln!(output, "{:>2}. {word}", rank + 1)?;
            }
        }
        output.flush()?;
    }
    Ok(())
}
