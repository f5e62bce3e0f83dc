use super::types::Sample;

/// Indices that order `xs` ascending. Equal keys keep their input order.
pub fn sort_permutation(xs: &[i64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..xs.len()).collect();
    // sort_by_key is stable
    order.sort_by_key(|&i| xs[i]);
    order
}

/// Reorder a sample by ascending x, carrying y along.
pub fn sort_by_x(sample: &Sample) -> Sample {
    let permutation = sort_permutation(sample.xs());
    sample.permuted(&permutation)
}
