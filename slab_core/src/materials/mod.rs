//! # Materials
//!
//! Concrete and reinforcing steel properties for a slab design run.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::materials::{MaterialSet, RebarSize};
//!
//! let materials = MaterialSet::new(4.0, 60.0, RebarSize(4));
//! assert!(materials.validate().is_ok());
//! assert_eq!(materials.bar.designation(), "#4");
//! ```

pub mod rebar;

pub use rebar::RebarSize;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Concrete strength, steel yield and main bar size.
///
/// ## JSON Example
///
/// ```json
/// { "fc_ksi": 4.0, "fy_ksi": 60.0, "bar": 4 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialSet {
    /// Concrete compressive strength f'c (ksi)
    pub fc_ksi: f64,

    /// Reinforcement yield strength fy (ksi)
    pub fy_ksi: f64,

    /// Main flexural bar
    pub bar: RebarSize,
}

impl MaterialSet {
    pub fn new(fc_ksi: f64, fy_ksi: f64, bar: RebarSize) -> Self {
        MaterialSet { fc_ksi, fy_ksi, bar }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.fc_ksi.is_finite() && self.fc_ksi > 0.0) {
            return Err(CalcError::invalid_input(
                "fc_ksi",
                self.fc_ksi.to_string(),
                "Concrete strength must be positive",
            ));
        }
        if !(self.fy_ksi.is_finite() && self.fy_ksi > 0.0) {
            return Err(CalcError::invalid_input(
                "fy_ksi",
                self.fy_ksi.to_string(),
                "Steel yield strength must be positive",
            ));
        }
        if self.bar.number() == 0 {
            return Err(CalcError::invalid_input(
                "bar",
                self.bar.number().to_string(),
                "Bar number must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for MaterialSet {
    fn default() -> Self {
        MaterialSet::new(4.0, 60.0, RebarSize::default())
    }
}
