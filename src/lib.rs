//! # airrank
//!
//! PageRank for the five-airport routes example, computed two ways:
//!
//! - [`power`]: the dense formulation. Build the Google matrix
//!   \(G = d M + \frac{1-d}{n} J\) once and iterate \(x \leftarrow G x\)
//!   until the L∞ change drops below the tolerance.
//! - [`pagerank`]: the adjacency-list formulation over the [`Graph`] adapter,
//!   redistributing dangling mass uniformly.
//!
//! Both start from the uniform vector and must agree on [`airports`].
//!
//! Public invariants:
//! - **Node order**: vectors are indexed by node id \(0..n-1\); for the airport
//!   data that is the order of [`airports::CODES`].
//! - **Mass**: every iterate of a column-stochastic matrix sums to 1.
//! - **Determinism**: identical inputs and configs give identical outputs.

pub mod airports;
pub mod graph;
pub mod matrix;
pub mod pagerank;
pub mod power;
pub mod topk;

pub use graph::{AdjacencyList, AdjacencyMatrix, Graph};
pub use matrix::DenseMatrix;
pub use pagerank::{pagerank, pagerank_checked, pagerank_run, PageRankConfig, PageRankRun};
pub use power::{
    power_iterate, power_iterate_checked, power_iterate_with, residual_linf, PowerIterationConfig,
    PowerIterationRun,
};
pub use topk::{normalize, top_k};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(usize),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
