//! Ranking utilities.

use ordered_float::NotNan;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// The `k` highest positive scores as `(node, score)`, best first.
///
/// Equal scores are ordered by node id. Non-finite and non-positive scores
/// are skipped.
pub fn top_k(scores: &[f64], k: usize) -> Vec<(usize, f64)> {
    if k == 0 || scores.is_empty() {
        return Vec::new();
    }
    // Min-heap on (score, Reverse(node)): the root is the entry to evict.
    let mut heap: BinaryHeap<Reverse<(NotNan<f64>, Reverse<usize>)>> =
        BinaryHeap::with_capacity(k + 1);
    for (i, &score) in scores.iter().enumerate() {
        if !score.is_finite() || score <= 0.0 {
            continue;
        }
        let Ok(s) = NotNan::new(score) else { continue };
        heap.push(Reverse((s, Reverse(i))));
        if heap.len() > k {
            heap.pop();
        }
    }
    let mut results: Vec<(usize, f64)> =
        heap.into_iter().map(|Reverse((s, Reverse(i)))| (i, s.into_inner())).collect();
    results.sort_unstable_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    results
}

/// Rescale in place to sum to 1. No-op when the sum is not positive.
pub fn normalize(scores: &mut [f64]) {
    let sum: f64 = scores.iter().sum();
    if sum > 0.0 {
        for s in scores {
            *s /= sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_k_orders_by_score_then_node() {
        let scores = [0.2, 0.4, 0.2, 0.0, f64::NAN, 0.1];
        assert_eq!(top_k(&scores, 3), vec![(1, 0.4), (0, 0.2), (2, 0.2)]);
        assert_eq!(top_k(&scores, 10).len(), 4);
        assert!(top_k(&scores, 0).is_empty());
    }

    #[test]
    fn normalize_sums_to_one() {
        let mut v = vec![1.0, 3.0];
        normalize(&mut v);
        assert_eq!(v, vec![0.25, 0.75]);

        let mut zeros = vec![0.0, 0.0];
        normalize(&mut zeros);
        assert_eq!(zeros, vec![0.0, 0.0]);
    }
}
