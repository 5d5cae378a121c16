use log2::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

use super::config::{validate_damping, RankConfig};
use super::transition::{transition_model, Distribution};
use crate::corpus::{LinkGraph, PageId};
use crate::error::{RankError, Result};

/// Estimate PageRank from the visit frequencies of an `n` step random walk.
pub fn sample_pagerank(graph: &LinkGraph, damping: f64, n: usize) -> Result<Distribution> {
    sample_pagerank_with_rng(graph, damping, n, &mut rand::rng())
}

/// Same as [`sample_pagerank`] with a caller provided source of randomness
pub fn sample_pagerank_with_rng<R: Rng>(
    graph: &LinkGraph,
    damping: f64,
    n: usize,
    rng: &mut R,
) -> Result<Distribution> {
    validate_damping(damping)?;
    if n == 0 {
        return Err(RankError::InvalidArgument("number of samples must be at least 1".to_string()));
    }
    let pages: Vec<&PageId> = graph.pages().collect();
    if pages.is_empty() {
        return Err(RankError::InvalidArgument("cannot rank an empty corpus".to_string()));
    }

    let mut visits: BTreeMap<&PageId, usize> = pages.iter().map(|&page| (page, 0)).collect();
    let mut current = pages[rng.random_range(0..pages.len())].clone();
    debug!("Random walk of {} steps starts at {}", n, current);

    for _ in 0..n {
        if let Some(count) = visits.get_mut(&current) {
            *count += 1;
        }
        let model = transition_model(graph, &current, damping)?;
        current = choose_weighted(&model, rng.random::<f64>())
            .ok_or_else(|| RankError::InvalidArgument("empty transition distribution".to_string()))?
            .clone();
    }

    Ok(visits
        .into_iter()
        .map(|(page, count)| (page.clone(), count as f64 / n as f64))
        .collect())
}

/// Pick the page whose cumulative probability range contains `draw`.
///
/// `draw` is expected in [0, 1). Rounding can leave the total slightly below
/// 1, in which case the last page is returned. `None` only for an empty distribution.
pub fn choose_weighted(distribution: &Distribution, draw: f64) -> Option<&PageId> {
    let mut cumulative = 0.0;
    let mut last = None;
    for (page, probability) in distribution {
        cumulative += probability;
        if draw < cumulative {
            return Some(page);
        }
        last = Some(page);
    }
    last
}

impl RankConfig {
    /// Run the sampling estimator, seeded when [`RankConfig::seed`] is set
    pub fn sample(&self, graph: &LinkGraph) -> Result<Distribution> {
        self.validate()?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        sample_pagerank_with_rng(graph, self.damping, self.samples, &mut rng)
    }
}
