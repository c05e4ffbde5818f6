//! Slab area loads and the factored design load
//!
//! # Overview
//!
//! - [`LoadSet`] - superimposed dead and live load (psf), excluding self-weight
//! - [`LoadCombination`] - strength-design factors (1.2D + 1.6L)
//! - [`combine`] - self-weight from thickness, total dead load, and `wu` in ksf
//!
//! # Example
//!
//! ```
//! use slab_core::loads::{combine, LoadSet};
//! use slab_core::settings::DesignSettings;
//!
//! let loads = LoadSet::new(20.0, 40.0);
//! let factored = combine(9.0, &loads, &DesignSettings::default());
//!
//! assert_eq!(factored.self_weight_psf, 112.5);
//! assert_eq!(factored.total_dead_psf, 132.5);
//! assert!((factored.wu_ksf - 0.223).abs() < 1e-12);
//! ```

pub mod combinations;

pub use combinations::LoadCombination;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::rounding::round_places;
use crate::settings::DesignSettings;
use crate::units::{Feet, Inches, Ksf, Psf};

/// Service-level area loads on the slab.
///
/// # JSON Format
/// ```json
/// { "dead_psf": 20.0, "live_psf": 40.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadSet {
    /// Superimposed dead load (psf), not including slab self-weight
    pub dead_psf: f64,

    /// Live load (psf)
    pub live_psf: f64,
}

impl LoadSet {
    pub fn new(dead_psf: f64, live_psf: f64) -> Self {
        LoadSet { dead_psf, live_psf }
    }

    /// Reject negative or non-finite loads.
    ///
    /// A zero dead load is allowed here; the load-ratio check reports it.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [("dead_psf", self.dead_psf), ("live_psf", self.live_psf)] {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Load must be a non-negative number",
                ));
            }
        }
        Ok(())
    }

    /// Live/dead ratio, or `None` when dead load is zero
    pub fn live_dead_ratio(&self) -> Option<f64> {
        if self.dead_psf == 0.0 {
            None
        } else {
            Some(self.live_psf / self.dead_psf)
        }
    }
}

/// Loads after self-weight is added and the strength combination applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactoredLoads {
    /// Slab self-weight (psf), rounded to 0.01 psf
    pub self_weight_psf: f64,

    /// Superimposed dead + self-weight (psf)
    pub total_dead_psf: f64,

    /// Factored uniform load (ksf)
    pub wu_ksf: f64,
}

/// Self-weight of a slab of the given thickness (psf)
pub fn self_weight_psf(thickness_in: f64, settings: &DesignSettings) -> f64 {
    let thickness_ft: Feet = Inches(thickness_in).into();
    round_places(settings.concrete_unit_weight_pcf * thickness_ft.value(), 2)
}

/// Add self-weight to the dead load and apply the strength combination.
///
/// `wu = (1.2 × total_dead + 1.6 × live) / 1000` in ksf.
pub fn combine(thickness_in: f64, loads: &LoadSet, settings: &DesignSettings) -> FactoredLoads {
    let self_weight = self_weight_psf(thickness_in, settings);
    let total_dead = Psf(loads.dead_psf) + Psf(self_weight);

    let combo = LoadCombination::aci_strength(settings);
    let wu: Ksf = Psf(combo.apply(total_dead.value(), loads.live_psf)).into();

    debug!(
        self_weight_psf = self_weight,
        total_dead_psf = total_dead.value(),
        wu_ksf = wu.value(),
        combination = %combo.equation,
        "combined slab loads"
    );

    FactoredLoads {
        self_weight_psf: self_weight,
        total_dead_psf: total_dead.value(),
        wu_ksf: wu.value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_weight() {
        let s = DesignSettings::default();
        // 9 in = 0.75 ft, x 150 pcf = 112.5 psf
        assert_eq!(self_weight_psf(9.0, &s), 112.5);
        assert_eq!(self_weight_psf(6.0, &s), 75.0);
    }

    #[test]
    fn test_combine_reference_case() {
        let factored = combine(9.0, &LoadSet::new(20.0, 40.0), &DesignSettings::default());
        assert_eq!(factored.total_dead_psf, 132.5);
        // (1.2 * 132.5 + 1.6 * 40) / 1000 = 0.223
        assert!((factored.wu_ksf - 0.223).abs() < 1e-12);
    }

    #[test]
    fn test_zero_live_load() {
        let factored = combine(6.0, &LoadSet::new(10.0, 0.0), &DesignSettings::default());
        // 1.2 * 85 / 1000
        assert!((factored.wu_ksf - 0.102).abs() < 1e-12);
    }

    #[test]
    fn test_validate() {
        assert!(LoadSet::new(20.0, 40.0).validate().is_ok());
        assert!(LoadSet::new(0.0, 40.0).validate().is_ok());
        assert!(LoadSet::new(-1.0, 40.0).validate().is_err());
        assert!(LoadSet::new(20.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_live_dead_ratio() {
        assert_eq!(LoadSet::new(20.0, 40.0).live_dead_ratio(), Some(2.0));
        assert_eq!(LoadSet::new(0.0, 40.0).live_dead_ratio(), None);
    }
}
