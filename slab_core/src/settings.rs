//! # Design Settings
//!
//! Code constants used by every stage of a slab design run. The defaults are
//! the ACI 318-19 values; a JSON document may override any subset of them.
//!
//! ```rust
//! use slab_core::settings::DesignSettings;
//!
//! let settings = DesignSettings::from_json(r#"{ "live_load_factor": 1.6 }"#).unwrap();
//! assert_eq!(settings.concrete_unit_weight_pcf, 150.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Code constants for one-way slab design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Governing code edition (display only)
    pub code: String,

    /// Unit weight of normal-weight concrete (pcf)
    pub concrete_unit_weight_pcf: f64,

    /// Strength-design dead load factor
    pub dead_load_factor: f64,

    /// Strength-design live load factor
    pub live_load_factor: f64,

    /// Strength reduction factor for flexure (tension-controlled)
    pub phi_flexure: f64,

    /// Width of the design strip (in)
    pub strip_width_in: f64,

    /// Distance from the tension face to the steel centroid (in); d = t - this
    pub depth_to_steel_in: f64,

    /// Minimum shrinkage/temperature steel ratio (Grade 60)
    pub min_steel_ratio: f64,

    /// Bar number used for perpendicular shrinkage steel
    pub shrinkage_bar_number: u8,

    /// Nominal area of the shrinkage bar (in²)
    pub shrinkage_bar_area_in2: f64,

    /// Main bar spacing limit as a multiple of thickness
    pub main_spacing_limit_factor: f64,

    /// Shrinkage bar spacing limit as a multiple of thickness
    pub shrinkage_spacing_limit_factor: f64,

    /// Allowed difference between adjacent spans, as a fraction of the shorter
    pub max_span_difference_ratio: f64,

    /// Live/dead load ratio must be strictly below this
    pub max_live_dead_ratio: f64,

    /// Minimum thickness ratio L/h for one-end-continuous spans
    pub end_span_depth_ratio: f64,

    /// Minimum thickness ratio L/h for both-ends-continuous spans
    pub interior_span_depth_ratio: f64,

    /// Thickness is rounded up to a multiple of this (in)
    pub thickness_increment_in: f64,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            code: "ACI 318-19".to_string(),
            concrete_unit_weight_pcf: 150.0,
            dead_load_factor: 1.2,
            live_load_factor: 1.6,
            phi_flexure: 0.9,
            strip_width_in: 12.0,
            depth_to_steel_in: 1.0,
            min_steel_ratio: 0.0018,
            shrinkage_bar_number: 3,
            shrinkage_bar_area_in2: 0.11,
            main_spacing_limit_factor: 2.0,
            shrinkage_spacing_limit_factor: 5.0,
            max_span_difference_ratio: 0.2,
            max_live_dead_ratio: 3.0,
            end_span_depth_ratio: 24.0,
            interior_span_depth_ratio: 28.0,
            thickness_increment_in: 3.0,
        }
    }
}

impl DesignSettings {
    /// Parse settings from JSON, filling missing fields with defaults, then validate.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: DesignSettings = serde_json::from_str(json)
            .map_err(|e| CalcError::invalid_settings("<document>", "json", e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that would make the design chain meaningless.
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("concrete_unit_weight_pcf", self.concrete_unit_weight_pcf),
            ("dead_load_factor", self.dead_load_factor),
            ("live_load_factor", self.live_load_factor),
            ("strip_width_in", self.strip_width_in),
            ("min_steel_ratio", self.min_steel_ratio),
            ("shrinkage_bar_area_in2", self.shrinkage_bar_area_in2),
            ("main_spacing_limit_factor", self.main_spacing_limit_factor),
            ("shrinkage_spacing_limit_factor", self.shrinkage_spacing_limit_factor),
            ("max_span_difference_ratio", self.max_span_difference_ratio),
            ("max_live_dead_ratio", self.max_live_dead_ratio),
            ("end_span_depth_ratio", self.end_span_depth_ratio),
            ("interior_span_depth_ratio", self.interior_span_depth_ratio),
            ("thickness_increment_in", self.thickness_increment_in),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(CalcError::invalid_settings(
                    field,
                    value.to_string(),
                    "Must be a positive number",
                ));
            }
        }
        if !(self.phi_flexure > 0.0 && self.phi_flexure <= 1.0) {
            return Err(CalcError::invalid_settings(
                "phi_flexure",
                self.phi_flexure.to_string(),
                "Strength reduction factor must be in (0, 1]",
            ));
        }
        if !(self.depth_to_steel_in.is_finite() && self.depth_to_steel_in >= 0.0) {
            return Err(CalcError::invalid_settings(
                "depth_to_steel_in",
                self.depth_to_steel_in.to_string(),
                "Must be zero or positive",
            ));
        }
        Ok(())
    }
}
