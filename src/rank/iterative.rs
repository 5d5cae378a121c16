//! PageRank by repeatedly applying the PageRank equation until it settles.
//!
//! Each pass recomputes every page from the previous pass only:
//!
//! `rank(p) = (1 - d) / N + d * sum(rank(i) / links(i))` over all pages `i` linking to `p`.
//!
//! A sink has no links, so it's treated as linking to every page (itself included).
//! Without that its rank would leak out of the system and the total would drop below 1.

use log2::{debug, info, warn};
use std::collections::HashMap;

use super::config::RankConfig;
use super::transition::Distribution;
use crate::corpus::{LinkGraph, PageId};
use crate::error::{RankError, Result};

/// Iterative PageRank with the default threshold and iteration cap
pub fn iterate_pagerank(graph: &LinkGraph, damping: f64) -> Result<Distribution> {
    RankConfig::new().with_damping(damping).iterate(graph)
}

/// Index based view of the graph: who links into each page
struct Inbound<'a> {
    pages: Vec<&'a PageId>,
    /// For each page, the indices of the non-sink pages linking to it
    sources: Vec<Vec<usize>>,
    out_degree: Vec<usize>,
    sinks: Vec<usize>,
}

impl<'a> Inbound<'a> {
    fn new(graph: &'a LinkGraph) -> Self {
        let pages: Vec<&PageId> = graph.pages().collect();
        let index: HashMap<&PageId, usize> =
            pages.iter().enumerate().map(|(i, &p)| (p, i)).collect();

        let mut sources = vec![Vec::new(); pages.len()];
        let mut out_degree = vec![0; pages.len()];
        let mut sinks = Vec::new();

        for (i, (_, targets)) in graph.iter().enumerate() {
            out_degree[i] = targets.len();
            if targets.is_empty() {
                sinks.push(i);
            }
            for target in targets {
                if let Some(&j) = index.get(target) {
                    sources[j].push(i);
                }
            }
        }

        Self { pages, sources, out_degree, sinks }
    }

    /// One application of the PageRank equation to `ranks`
    fn step(&self, ranks: &[f64], damping: f64) -> Vec<f64> {
        let total = self.pages.len() as f64;
        let sink_share: f64 = self.sinks.iter().map(|&s| ranks[s] / total).sum();
        let jump = (1.0 - damping) / total;

        self.sources
            .iter()
            .map(|sources| {
                let linked: f64 = sources
                    .iter()
                    .map(|&i| ranks[i] / self.out_degree[i] as f64)
                    .sum();
                jump + damping * (linked + sink_share)
            })
            .collect()
    }
}

impl RankConfig {
    /// Run the iterative estimator starting from the uniform distribution
    pub fn iterate(&self, graph: &LinkGraph) -> Result<Distribution> {
        if graph.is_empty() {
            return Err(RankError::InvalidArgument("cannot rank an empty corpus".to_string()));
        }
        let uniform = 1.0 / graph.len() as f64;
        let initial: Distribution = graph.pages().map(|p| (p.clone(), uniform)).collect();
        self.iterate_from(graph, &initial)
    }

    /// Run the iterative estimator starting from `initial`, which must rank
    /// exactly the pages of `graph`.
    pub fn iterate_from(&self, graph: &LinkGraph, initial: &Distribution) -> Result<Distribution> {
        self.validate()?;
        if graph.is_empty() {
            return Err(RankError::InvalidArgument("cannot rank an empty corpus".to_string()));
        }
        if initial.len() != graph.len() || !initial.keys().all(|p| graph.contains(p)) {
            return Err(RankError::InvalidArgument(
                "initial ranks must cover exactly the pages of the corpus".to_string(),
            ));
        }
        let invalid = initial.values().any(|r| !r.is_finite() || *r < 0.0);
        if invalid || initial.values().sum::<f64>() <= 0.0 {
            return Err(RankError::InvalidArgument(
                "initial ranks must be non-negative with a positive total".to_string(),
            ));
        }

        let inbound = Inbound::new(graph);
        let mut ranks: Vec<f64> = inbound.pages.iter().map(|&p| initial[p]).collect();
        let mut delta = f64::INFINITY;

        for iteration in 1..=self.max_iterations {
            let next = inbound.step(&ranks, self.damping);
            delta = ranks
                .iter()
                .zip(next.iter())
                .map(|(old, new)| (old - new).abs())
                .fold(0.0, f64::max);
            ranks = next;
            debug!("Iteration {}: largest change {}", iteration, delta);

            if delta <= self.threshold {
                info!("PageRank converged after {} iterations", iteration);
                let sum: f64 = ranks.iter().sum();
                return Ok(inbound
                    .pages
                    .iter()
                    .zip(ranks)
                    .map(|(&page, rank)| (page.clone(), rank / sum))
                    .collect());
            }
        }

        warn!("PageRank did not converge within {} iterations", self.max_iterations);
        Err(RankError::Convergence { iterations: self.max_iterations, delta })
    }
}
