//! Report result rows

use serde::{Deserialize, Serialize};

/// Decimal places kept in every reported value
pub const VALUE_PRECISION: i32 = 2;

/// One output row: dense 1-based rank, group key, rounded aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub rank: usize,
    pub key: String,
    pub value: f64,
}

impl ResultRow {
    /// Build a row, rounding `value` to [`VALUE_PRECISION`] places
    pub fn new(rank: usize, key: impl Into<String>, value: f64) -> Self {
        Self {
            rank,
            key: key.into(),
            value: round_value(value),
        }
    }

    /// Value formatted with exactly [`VALUE_PRECISION`] decimals
    pub fn formatted_value(&self) -> String {
        format!("{:.*}", VALUE_PRECISION as usize, self.value)
    }
}

/// Round half away from zero at [`VALUE_PRECISION`] decimal places.
///
/// Decides on the exact binary value: `2.675` is stored as
/// `2.67499999...` and rounds to `2.67`, while exactly representable
/// midpoints such as `4.125` round up to `4.13`.
pub fn round_value(value: f64) -> f64 {
    let scale = 10f64.powi(VALUE_PRECISION);
    let scaled = value * scale;
    let mut rounded = scaled.round();

    // The product can land on a .5 the exact value does not reach;
    // the fused residual recovers which side it was on.
    if scaled.fract().abs() == 0.5 {
        let residual = value.mul_add(scale, -scaled);
        if scaled > 0.0 && residual < 0.0 {
            rounded = scaled.floor();
        } else if scaled < 0.0 && residual > 0.0 {
            rounded = scaled.ceil();
        }
    }

    rounded / scale
}
