use crate::error::{RankError, Result};

/// Probability of following a link instead of jumping to a random page
pub const DEFAULT_DAMPING: f64 = 0.85;
/// Length of the simulated random walk
pub const DEFAULT_SAMPLES: usize = 10_000;
/// Largest per-page change still counted as converged
pub const DEFAULT_THRESHOLD: f64 = 0.001;
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Configuration of the PageRank estimators
#[derive(Debug, Clone, PartialEq)]
pub struct RankConfig {
    pub damping: f64,
    pub samples: usize,
    pub threshold: f64,
    pub max_iterations: usize,
    /// Seed for the random walk, `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
            threshold: DEFAULT_THRESHOLD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }
}

impl RankConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        if self.samples == 0 {
            return Err(RankError::InvalidArgument("samples must be greater than 0".to_string()));
        }
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(RankError::InvalidArgument(
                "threshold must be finite and greater than 0".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(RankError::InvalidArgument(
                "max_iterations must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

pub(crate) fn validate_damping(damping: f64) -> Result<()> {
    if !damping.is_finite() || !(0.0..=1.0).contains(&damping) {
        return Err(RankError::InvalidArgument(format!(
            "damping factor must be in [0, 1], got {}",
            damping
        )));
    }
    Ok(())
}
