use std::collections::BTreeMap;

use super::config::validate_damping;
use crate::corpus::{LinkGraph, PageId};
use crate::error::{RankError, Result};

/// Probability assigned to every page of the corpus
pub type Distribution = BTreeMap<PageId, f64>;

/// Distribution over the page a random surfer on `page` visits next.
///
/// With probability `damping` the surfer follows one of the page's links,
/// otherwise it jumps to any page of the corpus. A sink page jumps uniformly.
pub fn transition_model(graph: &LinkGraph, page: &str, damping: f64) -> Result<Distribution> {
    validate_damping(damping)?;
    let linked = graph
        .links(page)
        .ok_or_else(|| RankError::InvalidArgument(format!("page {} is not in the corpus", page)))?;

    let total = graph.len() as f64;

    if linked.is_empty() {
        return Ok(graph.pages().map(|p| (p.clone(), 1.0 / total)).collect());
    }

    let jump = (1.0 - damping) / total;
    let follow = damping / linked.len() as f64;

    Ok(graph
        .pages()
        .map(|p| {
            let probability = if linked.contains(p) { jump + follow } else { jump };
            (p.clone(), probability)
        })
        .collect())
}
