//! The five-airport routes example.
//!
//! Node ids follow [`CODES`]: JFK=0, ORD=1, LAX=2, CLT=3, ATL=4. Routes are
//! ORD->LAX, ORD->CLT, LAX->ATL and CLT->ATL; JFK and ATL have no outgoing
//! routes.

use crate::graph::AdjacencyList;
use crate::matrix::DenseMatrix;
use crate::power::{power_iterate, PowerIterationConfig, PowerIterationRun};
use crate::{Error, Result};

pub const N: usize = 5;

pub const CODES: [&str; N] = ["JFK", "ORD", "LAX", "CLT", "ATL"];

pub const ROUTES: [(usize, usize); 4] = [(1, 2), (1, 3), (2, 4), (3, 4)];

/// `A[i][j] = 1` iff `j` flies to `i`; the JFK and ATL columns are all ones.
pub const LINKS: [[f64; N]; N] = [
    [1.0, 0.0, 0.0, 0.0, 1.0],
    [1.0, 0.0, 0.0, 0.0, 1.0],
    [1.0, 1.0, 0.0, 0.0, 1.0],
    [1.0, 1.0, 0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0, 1.0, 1.0],
];

pub const DAMPING: f64 = 0.85;

pub const TOLERANCE: f64 = 5e-6;

pub fn code(node: usize) -> Option<&'static str> {
    CODES.get(node).copied()
}

pub fn link_matrix() -> DenseMatrix {
    let mut a = DenseMatrix::zeros(N);
    for (i, row) in LINKS.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            a.set(i, j, v);
        }
    }
    a
}

pub fn route_graph() -> AdjacencyList {
    let mut adj = vec![Vec::new(); N];
    for &(u, v) in &ROUTES {
        adj[u].push(v);
    }
    AdjacencyList::new(adj)
}

/// `G = 0.85 M + 0.03 J`, where `M` is [`link_matrix`] column-normalized.
pub fn google_matrix() -> Result<DenseMatrix> {
    google_matrix_with(DAMPING)
}

/// `G = d M + (1 - d) / 5 J`. Fails when `d` is outside `[0, 1]`.
pub fn google_matrix_with(damping: f64) -> Result<DenseMatrix> {
    if !(0.0..=1.0).contains(&damping) {
        return Err(Error::InvalidParameter(format!("damping must be in [0, 1] (got {damping})")));
    }
    Ok(link_matrix().column_normalized()?.damped(damping))
}

pub fn config() -> PowerIterationConfig {
    PowerIterationConfig { tolerance: TOLERANCE, max_iterations: None }
}

/// Power iteration on [`google_matrix`] from the uniform vector.
pub fn stationary_distribution() -> Result<PowerIterationRun> {
    stationary_distribution_with(DAMPING)
}

pub fn stationary_distribution_with(damping: f64) -> Result<PowerIterationRun> {
    Ok(power_iterate(&google_matrix_with(damping)?, &[1.0 / N as f64; N], config()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_matches_routes() {
        let from_routes = DenseMatrix::from_links(N, &ROUTES).unwrap();
        assert_eq!(from_routes, link_matrix());
    }

    #[test]
    fn dangling_airports_are_jfk_and_atl() {
        assert_eq!(route_graph().dangling_nodes(), vec![0, 4]);
        assert_eq!(code(0), Some("JFK"));
        assert_eq!(code(4), Some("ATL"));
        assert_eq!(code(5), None);
    }

    #[test]
    fn google_matrix_is_column_stochastic() {
        assert!(google_matrix().unwrap().is_column_stochastic(1e-12));
    }

    #[test]
    fn damping_changes_the_distribution() {
        let default = stationary_distribution().unwrap();
        let weak = stationary_distribution_with(0.5).unwrap();
        assert!(weak.converged);
        // Less link-following pulls every airport toward 1/5.
        assert!(weak.scores[4] < default.scores[4], "{:?} vs {:?}", weak.scores, default.scores);
        assert!(weak.scores[0] > default.scores[0]);

        let uniform = stationary_distribution_with(0.0).unwrap();
        for s in uniform.scores {
            assert!((s - 0.2).abs() < 1e-12);
        }
        assert!(google_matrix_with(1.5).is_err());
    }
}
