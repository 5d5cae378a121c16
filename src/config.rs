use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::rank::RankConfig;

/// Verbosity handed to the log2 logger
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}
/// All program arguments, RankConfig describes only the estimators
#[derive(Parser, Debug, Serialize, Deserialize)]
#[command(
    author,
    version,
    about = "Rank the pages of a directory of HTML documents with PageRank",
    long_about = None
)]
pub struct Config {
    /// Directory containing the corpus of .html pages
    pub corpus: PathBuf,
    /// Probability of following a link instead of jumping to a random page
    #[arg(short, long, default_value = "0.85")]
    pub damping: f64,
    /// Number of random walk steps for the sampling estimator
    #[arg(short = 'n', long, default_value = "10000")]
    pub samples: usize,
    /// Largest per-page change at which iteration counts as converged
    #[arg(long, default_value = "0.001")]
    pub threshold: f64,
    /// Give up iterating after this many passes
    #[arg(long, default_value = "10000")]
    pub max_iterations: usize,
    /// Seed for the random walk, random when omitted
    #[arg(long)]
    pub seed: Option<u64>,
    /// Also write both results as JSON to this file
    #[arg(short, long)]
    pub output_file: Option<PathBuf>,
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}

impl Config {
    pub fn new() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            anyhow::bail!("damping must be between 0 and 1");
        }
        if self.samples == 0 {
            anyhow::bail!("samples must be greater than 0");
        }
        if !(self.threshold > 0.0) {
            anyhow::bail!("threshold must be greater than 0");
        }
        if self.max_iterations == 0 {
            anyhow::bail!("max_iterations must be greater than 0");
        }
        Ok(())
    }

    pub fn rank_config(&self) -> RankConfig {
        let config = RankConfig::new()
            .with_damping(self.damping)
            .with_samples(self.samples)
            .with_threshold(self.threshold)
            .with_max_iterations(self.max_iterations);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

impl LogLevel {
    /// Level name as log2 expects it
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
