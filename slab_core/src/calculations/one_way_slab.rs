//! # One-Way Continuous Slab Design
//!
//! Preliminary design of a one-way slab continuous over two or more spans,
//! ACI 318-19 moment-coefficient method.
//!
//! ## Stages
//!
//! 1. Configuration: at least 2 spans, settings and inputs in range
//! 2. Validation: span compatibility and live/dead ratio
//! 3. Thickness from the longest span, then self-weight and `wu`
//! 4. Moments per span from the coefficient tables
//! 5. Main and shrinkage reinforcement per moment location
//!
//! A run either returns the full [`SlabDesign`] or a single [`CalcError`];
//! there is no partial output.
//!
//! ## Assumptions
//!
//! - Normal-weight concrete, uniform gravity load only
//! - 12 in design strip, steel centroid 1 in from the tension face
//! - No shear, deflection or two-way action checks
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use slab_core::calculations::one_way_slab::{calculate, SlabInput};
//! use slab_core::loads::LoadSet;
//! use slab_core::materials::{MaterialSet, RebarSize};
//! use slab_core::settings::DesignSettings;
//!
//! let input = SlabInput {
//!     label: "S-1".to_string(),
//!     spans_ft: vec![15.0, 15.0, 15.0],
//!     loads: LoadSet::new(20.0, 40.0),
//!     materials: MaterialSet::new(4.0, 60.0, RebarSize(4)),
//! };
//!
//! let design = calculate(&input, &DesignSettings::default()).unwrap();
//! assert_eq!(design.thickness.thickness_in, 9.0);
//! assert!((design.thickness.wu_ksf - 0.223).abs() < 1e-9);
//! assert_eq!(design.moments.len(), 3);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use crate::calculations::moment_coefficients::{design_moments, SpanMoments};
use crate::calculations::reinforcement::{design_reinforcement, SpanReinforcement};
use crate::calculations::spans::SpanSequence;
use crate::calculations::thickness::{size_slab, ThicknessResult};
use crate::calculations::validation;
use crate::errors::CalcResult;
use crate::loads::LoadSet;
use crate::materials::MaterialSet;
use crate::settings::DesignSettings;

/// Input parameters for a one-way continuous slab.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "S-1",
///   "spans_ft": [15.0, 15.0, 15.0],
///   "loads": { "dead_psf": 20.0, "live_psf": 40.0 },
///   "materials": { "fc_ksi": 4.0, "fy_ksi": 60.0, "bar": 4 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabInput {
    /// User label for this slab (e.g., "S-1", "Level 2 slab")
    #[serde(default)]
    pub label: String,

    /// Clear spans in feet, left to right
    pub spans_ft: Vec<f64>,

    /// Superimposed dead and live loads
    pub loads: LoadSet,

    /// Concrete, steel and main bar
    pub materials: MaterialSet,
}

impl SlabInput {
    /// Configuration and range checks that come before the code checks.
    ///
    /// Span count is checked first, so a single-span slab is always reported
    /// as a configuration error even when other inputs are also bad.
    pub fn validate(&self) -> CalcResult<SpanSequence> {
        let spans = SpanSequence::new(self.spans_ft.clone())?;
        self.loads.validate()?;
        self.materials.validate()?;
        Ok(spans)
    }
}

/// Complete result bundle for a slab design run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabDesign {
    pub label: String,

    /// Code edition the constants came from
    pub code: String,

    /// Thickness, self-weight and factored load
    pub thickness: ThicknessResult,

    /// Moments per span, in span order
    pub moments: Vec<SpanMoments>,

    /// Reinforcement per span, in span order
    pub reinforcement: Vec<SpanReinforcement>,
}

impl SlabDesign {
    /// Largest design moment anywhere in the slab (kip-ft/ft)
    pub fn max_moment_kipft(&self) -> f64 {
        self.moments
            .iter()
            .map(|span| span.moments.max_kipft())
            .fold(0.0, f64::max)
    }

    /// Largest governing steel area anywhere in the slab (in²/ft)
    pub fn max_steel_in2(&self) -> f64 {
        self.reinforcement
            .iter()
            .flat_map(|span| span.locations.iter())
            .map(|loc| loc.as_final_in2)
            .fold(0.0, f64::max)
    }

    /// True if the 2t cap set main bar spacing anywhere
    pub fn any_spacing_limited(&self) -> bool {
        self.reinforcement
            .iter()
            .flat_map(|span| span.locations.iter())
            .any(|loc| loc.main_spacing.limited)
    }
}

/// Design a one-way continuous slab.
///
/// This is a pure function: no I/O, no shared state.
///
/// # Returns
///
/// * `Ok(SlabDesign)` - thickness, moments and reinforcement for every span
/// * `Err(CalcError)` - configuration, validation or design failure
pub fn calculate(input: &SlabInput, settings: &DesignSettings) -> CalcResult<SlabDesign> {
    let span = info_span!("slab_design", label = %input.label);
    let _guard = span.enter();

    settings.validate()?;
    let spans = input.validate()?;
    validation::validate(&spans, &input.loads, settings)?;

    let thickness = size_slab(&spans, &input.loads, settings);
    let moments = design_moments(&spans, thickness.wu_ksf);
    let reinforcement = design_reinforcement(&moments, thickness.thickness_in, &input.materials, settings)?;

    debug!(spans = spans.len(), "design stages complete");
    info!(
        thickness_in = thickness.thickness_in,
        wu_ksf = thickness.wu_ksf,
        "slab design complete"
    );

    Ok(SlabDesign {
        label: input.label.clone(),
        code: settings.code.clone(),
        thickness,
        moments,
        reinforcement,
    })
}
