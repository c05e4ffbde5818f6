//! Reinforcing bar sizes
//!
//! Bar numbers are the nominal diameter in eighths of an inch (#4 = 0.5 in).

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A reinforcing bar designated by its number (#3, #4, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RebarSize(pub u8);

impl RebarSize {
    /// Bar sizes offered for main slab steel
    pub const SLAB_SIZES: [RebarSize; 6] = [
        RebarSize(3),
        RebarSize(4),
        RebarSize(5),
        RebarSize(6),
        RebarSize(7),
        RebarSize(8),
    ];

    pub fn number(self) -> u8 {
        self.0
    }

    /// Nominal diameter (in)
    pub fn diameter_in(self) -> f64 {
        f64::from(self.0) / 8.0
    }

    /// Area from the nominal diameter, π/4 · d² (in²)
    pub fn area_in2(self) -> f64 {
        PI / 4.0 * self.diameter_in().powi(2)
    }

    /// Designation string, e.g. "#4"
    pub fn designation(self) -> String {
        format!("#{}", self.0)
    }
}

impl Default for RebarSize {
    fn default() -> Self {
        RebarSize(4)
    }
}

impl fmt::Display for RebarSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
