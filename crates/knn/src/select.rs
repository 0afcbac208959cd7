//! Top-k nearest neighbor selection.

/// Keeps the labels of the `k` nearest entries of `pairs`.
///
/// `pairs` holds `(squared distance, label)` in training order and is sorted
/// in place with a stable sort, so equidistant neighbours keep their training
/// order. The labels of the first `k` are written to `nn_labels`.
///
/// # Panics
///
/// Debug-asserts that `k >= 1` and `k <= pairs.len()`.
pub(crate) fn nearest_labels(pairs: &mut [(u128, usize)], k: usize, nn_labels: &mut Vec<usize>) {
    debug_assert!(k >= 1);
    debug_assert!(k <= pairs.len());

    pairs.sort_by_key(|&(d2, _)| d2);

    nn_labels.clear();
    nn_labels.extend(pairs[..k].iter().map(|&(_, label)| label));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(pairs: &[(u128, usize)], k: usize) -> Vec<usize> {
        let mut pairs = pairs.to_vec();
        let mut labels = Vec::new();
        nearest_labels(&mut pairs, k, &mut labels);
        labels
    }

    #[test]
    fn test_k1_closest() {
        assert_eq!(run(&[(9, 0), (1, 1), (4, 2)], 1), vec![1]);
    }

    #[test]
    fn test_k_equals_n_all_sorted() {
        assert_eq!(run(&[(4, 10), (1, 11), (9, 12), (0, 13)], 4), vec![13, 11, 10, 12]);
    }

    #[test]
    fn test_ties_keep_training_order() {
        assert_eq!(run(&[(4, 5), (4, 6), (1, 7), (4, 8)], 3), vec![7, 5, 6]);
    }

    #[test]
    fn test_buffer_clearing() {
        let mut labels = vec![1, 2, 3, 4];
        let mut pairs = vec![(25, 0), (16, 1)];
        nearest_labels(&mut pairs, 1, &mut labels);
        assert_eq!(labels, vec![1]);
    }
}
