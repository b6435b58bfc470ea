//! Dense square matrices for the matrix formulation of PageRank.
//!
//! Layout follows the column-stochastic convention: entry `(i, j)` is the
//! weight of the link `j -> i`, so column `j` holds node `j`'s outgoing mass
//! and a rank vector is updated as `x <- G x`.

use crate::{Error, Result};

/// Serializes as a list of rows; deserializing goes through [`DenseMatrix::from_rows`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>"))]
pub struct DenseMatrix {
    n: usize,
    /// Row-major, `n * n` entries.
    data: Vec<f64>,
}

impl DenseMatrix {
    pub fn zeros(n: usize) -> Self {
        Self { n, data: vec![0.0; n * n] }
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            if row.len() != n {
                return Err(Error::DimensionMismatch { expected: n, found: row.len() });
            }
            data.extend(row);
        }
        Ok(Self { n, data })
    }

    /// Link matrix `A` from `(source, target)` edges over nodes `0..n`.
    ///
    /// `A[(target, source)] = 1` for every edge. A node with no outgoing edge
    /// gets an all-ones column, so its rank is spread over every node instead
    /// of leaking out of the walk.
    pub fn from_links(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut a = Self::zeros(n);
        for &(u, v) in edges {
            if u >= n {
                return Err(Error::IndexOutOfBounds(u));
            }
            if v >= n {
                return Err(Error::IndexOutOfBounds(v));
            }
            a.data[v * n + u] = 1.0;
        }
        for j in a.dangling_columns() {
            for i in 0..n {
                a.data[i * n + j] = 1.0;
            }
        }
        Ok(a)
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    /// Entry at row `i`, column `j`. Panics when out of range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "({i}, {j}) out of range for {0}x{0}", self.n);
        self.data[i * self.n + j]
    }

    /// Overwrite entry `(i, j)`. Panics when out of range.
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        assert!(i < self.n && j < self.n, "({i}, {j}) out of range for {0}x{0}", self.n);
        self.data[i * self.n + j] = value;
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.n];
        for i in 0..self.n {
            for (s, &a) in sums.iter_mut().zip(self.row(i)) {
                *s += a;
            }
        }
        sums
    }

    /// Columns whose entries sum to zero.
    pub fn dangling_columns(&self) -> Vec<usize> {
        self.column_sums()
            .iter()
            .enumerate()
            .filter(|(_, &s)| s == 0.0)
            .map(|(j, _)| j)
            .collect()
    }

    /// Scale every column to sum to 1.
    ///
    /// Fails on a zero column; fill dangling columns first (see [`Self::from_links`]).
    pub fn column_normalized(&self) -> Result<Self> {
        let sums = self.column_sums();
        if let Some(j) = sums.iter().position(|&s| s == 0.0) {
            return Err(Error::InvalidParameter(format!("column {j} sums to zero")));
        }
        if self.data.iter().any(|&a| a < 0.0 || !a.is_finite()) {
            return Err(Error::InvalidParameter(
                "link weights must be finite and non-negative".to_string(),
            ));
        }
        let mut m = self.clone();
        for i in 0..self.n {
            for j in 0..self.n {
                m.data[i * self.n + j] /= sums[j];
            }
        }
        Ok(m)
    }

    /// Google matrix `d * self + (1 - d) / n * J`.
    ///
    /// Column-stochastic whenever `self` is and `d` is in `[0, 1]`.
    pub fn damped(&self, damping: f64) -> Self {
        let teleport = (1.0 - damping) / self.n as f64;
        Self {
            n: self.n,
            data: self.data.iter().map(|&m| damping * m + teleport).collect(),
        }
    }

    /// `self * x`.
    pub fn mul_vec(&self, x: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; self.n];
        self.mul_vec_into(x, &mut out);
        out
    }

    /// `out = self * x`, reusing `out`.
    pub fn mul_vec_into(&self, x: &[f64], out: &mut [f64]) {
        assert_eq!(x.len(), self.n, "vector length must equal matrix dimension");
        assert_eq!(out.len(), self.n, "output length must equal matrix dimension");
        for (i, o) in out.iter_mut().enumerate() {
            *o = self.row(i).iter().zip(x).map(|(a, b)| a * b).sum();
        }
    }

    pub fn is_column_stochastic(&self, eps: f64) -> bool {
        self.data.iter().all(|&a| a >= 0.0)
            && self.column_sums().iter().all(|s| (s - 1.0).abs() <= eps)
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.n).map(|i| self.row(i).to_vec()).collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for DenseMatrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<DenseMatrix> for Vec<Vec<f64>> {
    fn from(m: DenseMatrix) -> Self {
        m.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = DenseMatrix::from_rows(vec![vec![1.0, 0.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { expected: 2, found: 1 }), "{err}");
    }

    #[test]
    fn try_from_rows_round_trips_and_rejects_ragged() {
        let rows = vec![vec![0.5, 1.0], vec![0.5, 0.0]];
        let m = DenseMatrix::try_from(rows.clone()).unwrap();
        assert_eq!(Vec::<Vec<f64>>::from(m), rows);
        assert!(DenseMatrix::try_from(vec![vec![1.0, 0.0, 0.0]]).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_checks_shape() {
        let m: DenseMatrix = serde_json::from_str("[[0.0, 1.0], [1.0, 0.0]]").unwrap();
        assert_eq!(m.mul_vec(&[1.0, 0.0]), vec![0.0, 1.0]);
        assert_eq!(serde_json::to_string(&m).unwrap(), "[[0.0,1.0],[1.0,0.0]]");

        assert!(serde_json::from_str::<DenseMatrix>("[[1.0], [1.0, 0.0]]").is_err());
        assert!(serde_json::from_str::<DenseMatrix>("[[1.0, 0.0, 0.0]]").is_err());
        assert!(serde_json::from_str::<DenseMatrix>(r#"{"n":3,"data":[1.0]}"#).is_err());
    }

    #[test]
    fn from_links_fills_dangling_columns() {
        // 0 -> 1; nodes 1 and 2 dangling.
        let a = DenseMatrix::from_links(3, &[(0, 1)]).unwrap();
        assert_eq!(a.row(0), &[0.0, 1.0, 1.0]);
        assert_eq!(a.row(1), &[1.0, 1.0, 1.0]);
        assert_eq!(a.row(2), &[0.0, 1.0, 1.0]);
        assert!(a.dangling_columns().is_empty());
    }

    #[test]
    fn from_links_rejects_unknown_node() {
        let err = DenseMatrix::from_links(2, &[(0, 2)]).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfBounds(2)), "{err}");
    }

    #[test]
    fn column_normalized_errors_on_zero_column() {
        let a = DenseMatrix::from_rows(vec![vec![1.0, 0.0], vec![1.0, 0.0]]).unwrap();
        assert_eq!(a.dangling_columns(), vec![1]);
        assert!(a.column_normalized().is_err());
    }

    #[test]
    fn damped_matrix_is_column_stochastic() {
        let a = DenseMatrix::from_links(4, &[(0, 1), (0, 2), (1, 2), (2, 0)]).unwrap();
        let m = a.column_normalized().unwrap();
        assert!(m.is_column_stochastic(1e-12));
        let g = m.damped(0.85);
        assert!(g.is_column_stochastic(1e-12));
        // Node 3 is dangling, so its column is uniform after damping too.
        for i in 0..4 {
            assert!((g.get(i, 3) - 0.25).abs() < 1e-15);
        }
    }

    #[test]
    fn mul_vec_matches_hand_computation() {
        let a = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(a.mul_vec(&[1.0, -1.0]), vec![-1.0, -1.0]);
    }
}
