use serde::{Deserialize, Serialize};

/// A single (x, y) observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub x: i64,
    pub y: i64,
}

impl Pair {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Paired observations held as parallel sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sample {
    xs: Vec<i64>,
    ys: Vec<i64>,
}

impl Sample {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[Pair]) -> Self {
        let mut sample = Self::new();
        for pair in pairs {
            sample.push(*pair);
        }
        sample
    }

    pub fn push(&mut self, pair: Pair) {
        self.xs.push(pair.x);
        self.ys.push(pair.y);
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn xs(&self) -> &[i64] {
        &self.xs
    }

    pub fn ys(&self) -> &[i64] {
        &self.ys
    }

    pub fn pairs(&self) -> impl Iterator<Item = Pair> + '_ {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| Pair::new(x, y))
    }

    /// Reorder both columns by `permutation`, where `permutation[i]` is the
    /// index of the pair that should land at position `i`.
    pub(crate) fn permuted(&self, permutation: &[usize]) -> Self {
        Self {
            xs: permutation.iter().map(|&i| self.xs[i]).collect(),
            ys: permutation.iter().map(|&i| self.ys[i]).collect(),
        }
    }
}

impl FromIterator<Pair> for Sample {
    fn from_iter<I: IntoIterator<Item = Pair>>(iter: I) -> Self {
        let pairs: Vec<Pair> = iter.into_iter().collect();
        Self::from_pairs(&pairs)
    }
}

/// Outcome of the trend statistic together with its intermediate sums.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticReport {
    /// Number of pairs (N)
    pub n: usize,
    /// Size of each partition (p)
    pub partition_size: usize,
    /// Rank sum over the highest-x partition (R1)
    pub trailing_rank_sum: f64,
    /// Rank sum over the lowest-x partition (R2)
    pub leading_rank_sum: f64,
    pub difference: i64,
    pub standard_error: i64,
    /// difference / (p * (N - p)), rounded to two decimals
    pub conjugation_measure: f64,
}

impl StatisticReport {
    /// The three published values: difference, standard error, measure.
    pub fn summary(&self) -> (i64, i64, f64) {
        (
            self.difference,
            self.standard_error,
            self.conjugation_measure,
        )
    }
}
