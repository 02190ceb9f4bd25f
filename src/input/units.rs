//! Rate units: ratio (0–1) vs percentage (0–100)
//!
//! The source data for retirement scenarios mixes both representations
//! (a replacement target may arrive as 0.7 or as 70). Everything inside
//! the engine is a `Ratio`; `Percentage::to_ratio` is the only place in
//! the crate where the /100 scaling happens.

use serde::{Deserialize, Serialize};

/// A rate in ratio form: 0.065 means 6.5% per year.
///
/// May be negative (a loss year); callers validate domain limits where
/// they apply, not here.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ratio(f64);

impl Ratio {
    pub const ZERO: Ratio = Ratio(0.0);

    pub fn new(value: f64) -> Self {
        Ratio(value)
    }

    /// The underlying ratio value (0.065 for 6.5%).
    pub fn value(self) -> f64 {
        self.0
    }

    /// Annual growth factor: `1 + rate`.
    pub fn growth_factor(self) -> f64 {
        1.0 + self.0
    }

    /// Clamp into `[lo, hi]`.
    pub fn clamped(self, lo: f64, hi: f64) -> Self {
        Ratio(self.0.clamp(lo, hi))
    }
}

/// A rate in percentage form: 6.5 means 6.5% per year.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    pub fn new(value: f64) -> Self {
        Percentage(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// The crate's single percentage-to-ratio conversion point.
    pub fn to_ratio(self) -> Ratio {
        Ratio(self.0 / 100.0)
    }
}
