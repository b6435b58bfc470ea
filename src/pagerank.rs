//! PageRank over adjacency lists.
//!
//! Each node splits its rank evenly over its out-neighbors. Rank held by
//! dangling nodes is spread uniformly over all nodes, which is the same walk
//! the dense formulation gets by filling dangling columns with ones.

use log::{debug, warn};

use crate::graph::Graph;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankConfig {
    pub damping: f64,
    pub max_iterations: usize,
    /// Threshold on the L1 change between successive iterates.
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self { damping: 0.85, max_iterations: 100, tolerance: 1e-6 }
    }
}

impl PageRankConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.damping.is_finite() || !(0.0..=1.0).contains(&self.damping) {
            return Err(Error::InvalidParameter(format!(
                "damping must be in [0, 1] (got {})",
                self.damping
            )));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidParameter("max_iterations must be > 0".to_string()));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "tolerance must be finite and > 0 (got {})",
                self.tolerance
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankRun {
    pub scores: Vec<f64>,
    pub iterations: usize,
    pub diff_l1: f64,
    pub converged: bool,
}

pub fn pagerank<G: Graph>(graph: &G, config: PageRankConfig) -> Vec<f64> {
    pagerank_run(graph, config).scores
}

pub fn pagerank_checked<G: Graph>(graph: &G, config: PageRankConfig) -> Result<Vec<f64>> {
    config.validate()?;
    let n = graph.node_count();
    for u in 0..n {
        if let Some(v) = graph.neighbors(u).into_iter().find(|&v| v >= n) {
            return Err(Error::IndexOutOfBounds(v));
        }
    }
    Ok(pagerank(graph, config))
}

pub fn pagerank_run<G: Graph>(graph: &G, config: PageRankConfig) -> PageRankRun {
    let n = graph.node_count();
    if n == 0 {
        return PageRankRun { scores: Vec::new(), iterations: 0, diff_l1: 0.0, converged: true };
    }
    let n_f64 = n as f64;
    let mut scores = vec![1.0 / n_f64; n];
    let mut new_scores = vec![0.0; n];
    let neighbors: Vec<Vec<usize>> = (0..n).map(|u| graph.neighbors(u)).collect();
    let teleport = (1.0 - config.damping) / n_f64;

    let mut iterations = 0usize;
    let mut diff = f64::INFINITY;
    let mut converged = false;
    for _ in 0..config.max_iterations {
        iterations += 1;
        let dangling_sum: f64 = neighbors
            .iter()
            .enumerate()
            .filter(|(_, nbrs)| nbrs.is_empty())
            .map(|(i, _)| scores[i])
            .sum();
        new_scores.fill(teleport + config.damping * dangling_sum / n_f64);

        for (u, nbrs) in neighbors.iter().enumerate() {
            if nbrs.is_empty() {
                continue;
            }
            let share = config.damping * scores[u] / nbrs.len() as f64;
            for &v in nbrs {
                new_scores[v] += share;
            }
        }

        diff = scores.iter().zip(new_scores.iter()).map(|(old, new)| (old - new).abs()).sum();
        std::mem::swap(&mut scores, &mut new_scores);
        debug!("pagerank iteration {iterations}: diff_l1={diff:e}");
        if diff < config.tolerance {
            converged = true;
            break;
        }
    }
    if !converged {
        warn!("pagerank did not converge in {iterations} iterations (diff_l1={diff:e})");
    }
    PageRankRun { scores, iterations, diff_l1: diff, converged }
}
