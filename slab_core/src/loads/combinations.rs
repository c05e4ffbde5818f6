//! ACI 318-19 strength load combination
//!
//! Slab design here only needs gravity dead + live, so the combination is a
//! pair of factors rather than a full table.

use serde::{Deserialize, Serialize};

use crate::settings::DesignSettings;

/// A strength-design load combination for dead and live area loads
///
/// # Example
/// ```
/// use slab_core::loads::LoadCombination;
/// use slab_core::settings::DesignSettings;
///
/// let combo = LoadCombination::aci_strength(&DesignSettings::default());
/// assert_eq!(combo.equation, "1.2D + 1.6L");
/// assert!((combo.apply(132.5, 40.0) - 223.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Combination identifier (e.g., "ACI 5.3.1b")
    pub name: String,

    /// Human-readable equation for display
    pub equation: String,

    pub dead_factor: f64,
    pub live_factor: f64,
}

impl LoadCombination {
    /// Create a new load combination
    pub fn new(name: impl Into<String>, dead_factor: f64, live_factor: f64) -> Self {
        LoadCombination {
            name: name.into(),
            equation: format!("{}D + {}L", dead_factor, live_factor),
            dead_factor,
            live_factor,
        }
    }

    /// The ACI 318-19 Eq. 5.3.1b combination with factors taken from settings
    pub fn aci_strength(settings: &DesignSettings) -> Self {
        LoadCombination::new("ACI 5.3.1b", settings.dead_load_factor, settings.live_load_factor)
    }

    /// Factored load in the same units as the inputs (psf in, psf out)
    pub fn apply(&self, dead: f64, live: f64) -> f64 {
        self.dead_factor * dead + self.live_factor * live
    }
}
