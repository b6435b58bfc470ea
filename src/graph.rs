//! Minimal graph adapter traits.

use crate::matrix::DenseMatrix;
use crate::{Error, Result};

pub trait Graph {
    fn node_count(&self) -> usize;
    fn neighbors(&self, node: usize) -> Vec<usize>;
    fn out_degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }
}

/// Directed graph stored as sorted, deduplicated out-neighbor lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    adj: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// Wrap out-neighbor lists, sorting and deduplicating each.
    ///
    /// Targets are not range-checked; use [`Self::from_edges`] for untrusted input.
    pub fn new(mut adj: Vec<Vec<usize>>) -> Self {
        for nbrs in &mut adj {
            nbrs.sort_unstable();
            nbrs.dedup();
        }
        Self { adj }
    }

    /// Build from `(source, target)` pairs over nodes `0..n`.
    ///
    /// Duplicate edges collapse into one. Self-loops are kept.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut adj = vec![Vec::new(); n];
        for &(u, v) in edges {
            if u >= n {
                return Err(Error::IndexOutOfBounds(u));
            }
            if v >= n {
                return Err(Error::IndexOutOfBounds(v));
            }
            adj[u].push(v);
        }
        Ok(Self::new(adj))
    }

    pub fn neighbors_ref(&self, node: usize) -> &[usize] {
        self.adj.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// Nodes with no outgoing edges.
    pub fn dangling_nodes(&self) -> Vec<usize> {
        (0..self.adj.len()).filter(|&u| self.adj[u].is_empty()).collect()
    }
}

impl Graph for AdjacencyList {
    fn node_count(&self) -> usize {
        self.adj.len()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.neighbors_ref(node).to_vec()
    }
    fn out_degree(&self, node: usize) -> usize {
        self.neighbors_ref(node).len()
    }
}

/// Reads a dense link matrix as a graph.
///
/// Columns are sources: an entry `m[(i, j)] > 0` is the edge `j -> i`.
/// This is the layout of [`DenseMatrix::from_links`], so a matrix whose
/// dangling columns were filled with ones shows those nodes linking to every
/// node, themselves included.
pub struct AdjacencyMatrix<'a>(pub &'a DenseMatrix);

impl<'a> Graph for AdjacencyMatrix<'a> {
    fn node_count(&self) -> usize {
        self.0.dim()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        (0..self.0.dim()).filter(|&i| self.0.get(i, node) > 0.0).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_edges_sorts_and_dedups() {
        let g = AdjacencyList::from_edges(3, &[(0, 2), (0, 1), (0, 2), (1, 2)]).unwrap();
        assert_eq!(g.neighbors_ref(0), &[1, 2]);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.dangling_nodes(), vec![2]);
    }

    #[test]
    fn from_edges_rejects_out_of_range_endpoint() {
        let err = AdjacencyList::from_edges(2, &[(0, 1), (1, 5)]).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfBounds(5)), "{err}");
    }

    #[test]
    fn adjacency_matrix_reads_columns_as_sources() {
        // 0 -> 1, 1 -> 0 and 1 -> 2; node 2 dangling.
        let m = DenseMatrix::from_rows(vec![
            vec![0.0, 1.0, 0.0],
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
        ])
        .unwrap();
        let g = AdjacencyMatrix(&m);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.neighbors(0), vec![1]);
        assert_eq!(g.neighbors(1), vec![0, 2]);
        assert_eq!(g.out_degree(2), 0);
    }
}
