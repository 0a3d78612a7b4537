//! Command-line and environment configuration
//!
//! Values resolve CLI → environment → defaults (clap handles the first two)
//! and are then validated into a [`Config`].

use crate::catalog::{Catalog, Difficulty, Language};
use crate::progress::default_data_dir;
use crate::session::is_valid_speed;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thiserror::Error;

/// Speeds offered by the speed selector, slowest first
pub const SPEED_PRESETS: [f64; 5] = [0.5, 1.0, 2.0, 4.0, 8.0];

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown algorithm `{0}` (try `algoscope list`)")]
    UnknownAlgorithm(String),

    #[error("speed must be between 0.1 and 100, got {0}")]
    InvalidSpeed(f64),

    #[error("unknown language `{0}` (expected python or java)")]
    UnknownLanguage(String),

    #[error("unknown difficulty `{0}` (expected easy, medium or hard)")]
    UnknownDifficulty(String),
}

/// Step-by-step algorithm visualizer
#[derive(Debug, Parser)]
#[command(name = "algoscope", version, about)]
pub struct Cli {
    /// Algorithm id to open on start
    #[arg(short, long, env = "ALGOSCOPE_ALGORITHM")]
    pub algorithm: Option<String>,

    /// JSON input replacing the algorithm's default input
    #[arg(short, long)]
    pub input: Option<String>,

    /// Playback speed multiplier (1.0 = one step per second)
    #[arg(short, long, env = "ALGOSCOPE_SPEED", default_value_t = 1.0)]
    pub speed: f64,

    /// Source language shown in the code pane
    #[arg(short = 'L', long, env = "ALGOSCOPE_LANGUAGE", default_value = "python")]
    pub language: String,

    /// Directory holding the progress file
    #[arg(long, env = "ALGOSCOPE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Keep progress in memory only
    #[arg(long)]
    pub no_persist: bool,

    /// Write logs to this file (filter with ALGOSCOPE_LOG)
    #[arg(long, env = "ALGOSCOPE_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Print the catalog with solved marks
    List {
        /// Only list algorithms matching this text
        query: Option<String>,
        /// Only list one difficulty (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<String>,
    },
    /// Print solved counts per pattern and difficulty
    Stats,
    /// Print the step trace of an algorithm as JSON
    Trace {
        id: String,
        /// JSON input replacing the default input
        #[arg(long)]
        input: Option<String>,
    },
    /// Mark or unmark an algorithm as solved
    Toggle { id: String },
    /// Forget all solved marks
    Reset,
}

/// Validated runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub algorithm: Option<String>,
    pub input: Option<String>,
    pub speed: f64,
    pub language: Language,
    /// `None` keeps progress in memory
    pub data_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    /// Difficulty restriction for `list`
    pub difficulty: Option<Difficulty>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: None,
            input: None,
            speed: 1.0,
            language: Language::default(),
            data_dir: Some(default_data_dir()),
            log_file: None,
            difficulty: None,
        }
    }
}

impl Config {
    pub fn from_cli(cli: &Cli, catalog: &Catalog) -> Result<Self, ConfigError> {
        if let Some(id) = &cli.algorithm {
            if catalog.find(id).is_none() {
                return Err(ConfigError::UnknownAlgorithm(id.clone()));
            }
        }
        if !is_valid_speed(cli.speed) {
            return Err(ConfigError::InvalidSpeed(cli.speed));
        }
        let language = Language::parse(&cli.language)
            .ok_or_else(|| ConfigError::UnknownLanguage(cli.language.clone()))?;
        let difficulty = match &cli.command {
            Some(Command::List {
                difficulty: Some(text),
                ..
            }) => Some(
                Difficulty::parse(text)
                    .ok_or_else(|| ConfigError::UnknownDifficulty(text.clone()))?,
            ),
            _ => None,
        };

        let data_dir = if cli.no_persist {
            None
        } else {
            Some(cli.data_dir.clone().unwrap_or_else(default_data_dir))
        };

        Ok(Config {
            algorithm: cli.algorithm.clone(),
            input: cli.input.clone(),
            speed: cli.speed,
            language,
            data_dir,
            log_file: cli.log_file.clone(),
            difficulty,
        })
    }
}

/// Next preset above `current`, staying on the fastest
pub fn faster(current: f64) -> f64 {
    SPEED_PRESETS
        .into_iter()
        .find(|&s| s > current)
        .unwrap_or(SPEED_PRESETS[SPEED_PRESETS.len() - 1])
}

/// Next preset below `current`, staying on the slowest
pub fn slower(current: f64) -> f64 {
    SPEED_PRESETS
        .into_iter()
        .rev()
        .find(|&s| s < current)
        .unwrap_or(SPEED_PRESETS[0])
}
