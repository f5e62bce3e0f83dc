//! Fractional ranking with the average tie method.
//!
//! Values are ranked 1..=n in ascending order. A run of `k` equal values
//! that would occupy ranks `r..=r+k-1` all receive the mean of that range,
//! `r + (k - 1) / 2`, so `[5, 5, 10]` ranks to `[1.5, 1.5, 3.0]`.

/// Rank `values` in input order, ties sharing their mean rank.
pub fn average_ranks<T: Ord>(values: &[T]) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[a].cmp(&values[b]));

    let mut ranks = vec![0.0; n];
    let mut start = 0;
    while start < n {
        let mut end = start + 1;
        while end < n && values[order[end]] == values[order[start]] {
            end += 1;
        }
        // positions start..end (0-based) are ranks start+1..=end
        let rank = (start + 1 + end) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = rank;
        }
        start = end;
    }

    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_ties() {
        assert_eq!(
            average_ranks(&[3, 7, 1, 9, 2, 8, 4, 6, 5]),
            vec![3.0, 7.0, 1.0, 9.0, 2.0, 8.0, 4.0, 6.0, 5.0]
        );
    }

    #[test]
    fn test_pair_tie_gets_mid_rank() {
        assert_eq!(average_ranks(&[5, 5, 10]), vec![1.5, 1.5, 3.0]);
    }

    #[test]
    fn test_tie_in_middle() {
        assert_eq!(average_ranks(&[1, 2, 2, 4]), vec![1.0, 2.5, 2.5, 4.0]);
    }

    #[test]
    fn test_all_equal() {
        assert_eq!(average_ranks(&[7, 7, 7]), vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_unsorted_ties_with_negatives() {
        assert_eq!(
            average_ranks(&[0, -4, 0, -4, 9]),
            vec![3.5, 1.5, 3.5, 1.5, 5.0]
        );
    }

    #[test]
    fn test_empty_and_single() {
        assert!(average_ranks::<i64>(&[]).is_empty());
        assert_eq!(average_ranks(&[42]), vec![1.0]);
    }

    #[test]
    fn test_rank_sum_is_triangular() {
        let ranks = average_ranks(&[4, 4, 1, 9, 9, 9, 2]);
        let total: f64 = ranks.iter().sum();
        assert_eq!(total, 28.0);
    }
}
