use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dnatrie::output::{self, PatternResult};
use dnatrie::sequence::load_sequence;
use dnatrie::similarity::similarity;
use dnatrie::tree::SuffixTree;
use dnatrie::utils::{AppConfig, get_config_path};
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};
use termcolor::ColorChoice;

#[derive(Parser)]
#[command(name = "dnatrie")]
#[command(about = "Suffix tree search and LCS similarity for DNA sequences")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file to use instead of the one in the user config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// When to use colored output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    color: ColorMode,
}

#[derive(Subcommand)]
enum Commands {
    /// Find patterns in a sequence file
    Find {
        /// File holding the sequence to search
        sequence: PathBuf,

        /// Patterns to look for
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Report every occurrence, not just the first
        #[arg(short, long)]
        all: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare two sequence files by longest common subsequence
    Similarity {
        first: PathBuf,
        second: PathBuf,

        /// Write the LCS to this file (overwritten if present)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build the tree over a sequence file and show its shape
    Stats {
        sequence: PathBuf,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the effective configuration
    Config {
        /// Only print where the config file is read from
        #[arg(long)]
        path: bool,

        /// Write the default configuration to the user config directory
        #[arg(long, conflicts_with = "path")]
        init: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    let color = ColorChoice::from(cli.color);

    match cli.command {
        Commands::Find {
            sequence,
            patterns,
            all,
            json,
        } => {
            let found_all = run_find(&config, &sequence, &patterns, all, json, color)?;
            if !found_all {
                std::io::stdout().flush()?;
                std::process::exit(1);
            }
        }
        Commands::Similarity {
            first,
            second,
            output: out_path,
            json,
        } => {
            let a = load(&config, &first)?;
            let b = load(&config, &second)?;
            let result = similarity(&a, &b);

            if let Some(path) = out_path {
                output::write_lcs(&path, &result)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("wrote LCS to {}", path.display());
            }

            if json {
                output::print_json(&result)?;
            } else {
                output::print_similarity(&result, color)?;
            }
        }
        Commands::Stats { sequence, json } => {
            let tree = SuffixTree::build(load(&config, &sequence)?);
            let stats = tree.stats();
            if json {
                output::print_json(&stats)?;
            } else {
                output::print_stats(&stats, color)?;
            }
        }
        Commands::Config { path, init } => {
            if init {
                AppConfig::default().save()?;
                println!("Wrote default configuration to {}", get_config_path()?.display());
            } else if path {
                match &cli.config {
                    Some(p) => println!("{}", p.display()),
                    None => println!("{}", get_config_path()?.display()),
                }
            } else {
                output::print_json(&config)?;
            }
        }
    }

    Ok(())
}

/// Install the logger; `RUST_LOG` wins over `-v`
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn load(config: &AppConfig, path: &Path) -> Result<dnatrie::sequence::Sequence> {
    load_sequence(path, &config.load)
        .with_context(|| format!("Failed to load sequence from {}", path.display()))
}

/// Returns whether every pattern was found
fn run_find(
    config: &AppConfig,
    sequence: &Path,
    patterns: &[String],
    all: bool,
    json: bool,
    color: ColorChoice,
) -> Result<bool> {
    let tree = SuffixTree::build(load(config, sequence)?);

    if patterns.len() > config.parallel_search_threshold {
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.effective_search_threads())
            .build_global()
            .context("Failed to start search thread pool")?;
    }

    let matches = tree.find_many(patterns, config.parallel_search_threshold);
    let results: Vec<PatternResult> = patterns
        .iter()
        .zip(matches)
        .map(|(pattern, first)| {
            let result = PatternResult::new(pattern.as_str(), first);
            if all && first.is_found() {
                result.with_occurrences(tree.find_all_occurrences(pattern))
            } else {
                result
            }
        })
        .collect();

    if json {
        output::print_json(&results)?;
    } else {
        output::print_matches(&results, color)?;
    }

    Ok(results.iter().all(|r| r.offset.is_some()))
}
