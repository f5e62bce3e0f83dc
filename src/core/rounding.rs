use serde::{Deserialize, Serialize};

/// How `round` resolves values that sit exactly halfway between integers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Banker's rounding: 2.5 -> 2, 3.5 -> 4 (default)
    #[default]
    HalfEven,
    /// Schoolbook rounding: 2.5 -> 3, -2.5 -> -3
    HalfAwayFromZero,
}

impl RoundingMode {
    pub fn round(self, value: f64) -> f64 {
        match self {
            Self::HalfEven => value.round_ties_even(),
            Self::HalfAwayFromZero => value.round(),
        }
    }

    /// Round to the nearest integer.
    pub fn round_to_int(self, value: f64) -> i64 {
        self.round(value) as i64
    }

    /// Round to `decimals` places by scaling, rounding, and scaling back.
    ///
    /// Negative zero is folded into positive zero.
    pub fn round_decimals(self, value: f64, decimals: i32) -> f64 {
        let scale = 10f64.powi(decimals);
        let rounded = self.round(value * scale) / scale;
        if rounded == 0.0 {
            0.0
        } else {
            rounded
        }
    }
}
