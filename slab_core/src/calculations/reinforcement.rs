//! # Flexural and Shrinkage Reinforcement
//!
//! Sizes main bars for every moment location and the perpendicular
//! shrinkage/temperature bars, per 12 in design strip.
//!
//! ## Procedure (per location)
//!
//! 1. `Ru = Mu·12 / (b·d²)`, Mu in kip-ft, d = t - 1 in
//! 2. `term = 2·Ru / (0.85·φ·f'c)`; above 1 the section is over-reinforced
//! 3. `ρ = (0.85·φ·f'c / fy) · (1 - √(1 - term))`, `As = ρ·b·d`
//! 4. `As,min = 0.0018·b·t`, `As = max(As, As,min)`
//! 5. Main spacing `s = A_bar / As · 12`, capped at 2t, rounded to nearest inch
//!    (ties to even)
//! 6. Shrinkage spacing `s = 0.11 / (0.5·As,min) · 12`, capped at 5t, rounded down
//!
//! A rounded spacing never exceeds its cap: when the cap is not a whole
//! number it is taken down to the inch below.
//!
//! Ru is reported in the units the formula above produces (Mu carried in kip
//! units); step 2 uses it as-is.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::moment_coefficients::{MomentLocation, SpanMoments};
use crate::errors::{CalcError, CalcResult, InfeasibleLocation};
use crate::materials::MaterialSet;
use crate::rounding::{round3, round_sig};
use crate::settings::DesignSettings;
use crate::units::{KipFt, KipIn};

/// Spacing of a bar set, before and after the code cap and rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSpacing {
    /// Spacing from required area alone (in)
    pub theoretical_in: f64,

    /// Code maximum spacing (in)
    pub limit_in: f64,

    /// Whole-inch spacing to detail (in)
    pub spacing_in: f64,

    /// True when the code maximum governed
    pub limited: bool,

    /// e.g. "(limited to 2×t = 18 in)"
    pub note: Option<String>,
}

impl BarSpacing {
    fn capped(theoretical_in: f64, limit_factor: f64, thickness_in: f64, round: fn(f64) -> f64) -> Self {
        let limit_in = limit_factor * thickness_in;
        let limited = theoretical_in > limit_in;
        let spacing = if limited { limit_in } else { theoretical_in };
        BarSpacing {
            theoretical_in,
            limit_in,
            spacing_in: round(spacing).min(limit_in.floor()),
            limited,
            note: limited.then(|| format!("(limited to {}×t = {} in)", limit_factor, limit_in)),
        }
    }
}

/// Reinforcement at a single moment location.
///
/// ## JSON Example
///
/// ```json
/// {
///   "location": "C",
///   "moment_kipft": 5.02,
///   "ru_ksi": 0.0784,
///   "rho": 0.001324,
///   "as_required_in2": 0.127,
///   "as_min_in2": 0.194,
///   "as_final_in2": 0.194,
///   "bar_designation": "#4",
///   "main_spacing": { "theoretical_in": 12.12, "limit_in": 18.0, "spacing_in": 12.0, "limited": false, "note": null },
///   "main_callout": "@ 12 in C/C",
///   "shrinkage_spacing": { "theoretical_in": 13.58, "limit_in": 45.0, "spacing_in": 13.0, "limited": false, "note": null },
///   "shrinkage_callout": "#3 @ 13 in C/C"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationReinforcement {
    pub location: MomentLocation,

    /// Design moment Mu (kip-ft/ft)
    pub moment_kipft: f64,

    /// Strength coefficient Ru
    pub ru_ksi: f64,

    /// Required reinforcement ratio (4 significant figures)
    pub rho: f64,

    /// Steel area required for flexure (in²/ft)
    pub as_required_in2: f64,

    /// Shrinkage/temperature minimum (in²/ft)
    pub as_min_in2: f64,

    /// Governing steel area (in²/ft)
    pub as_final_in2: f64,

    /// Main bar, e.g. "#4"
    pub bar_designation: String,

    pub main_spacing: BarSpacing,

    /// e.g. "@ 12 in C/C"
    pub main_callout: String,

    pub shrinkage_spacing: BarSpacing,

    /// e.g. "#3 @ 13 in C/C"
    pub shrinkage_callout: String,
}

/// Reinforcement for one span, locations in the same order as its moments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanReinforcement {
    /// 1-based span number
    pub span: usize,

    pub locations: Vec<LocationReinforcement>,
}

impl SpanReinforcement {
    pub fn get(&self, location: MomentLocation) -> Option<&LocationReinforcement> {
        self.locations.iter().find(|r| r.location == location)
    }
}

/// Section constants shared by every location of a run
#[derive(Debug, Clone, Copy)]
struct Section {
    thickness_in: f64,
    b_in: f64,
    d_in: f64,
    phi: f64,
    fc_ksi: f64,
    fy_ksi: f64,
    bar_area_in2: f64,
}

/// Required reinforcement ratio, or the offending `term` when it exceeds 1.
///
/// ```rust
/// use slab_core::calculations::reinforcement::required_rho;
///
/// let rho = required_rho(0.0784, 4.0, 60.0, 0.9).unwrap();
/// assert!((rho - 0.001324).abs() < 1e-5);
///
/// // Demand far beyond the section: no real solution
/// assert!(required_rho(2.0, 4.0, 60.0, 0.9).is_err());
/// ```
pub fn required_rho(ru: f64, fc_ksi: f64, fy_ksi: f64, phi: f64) -> Result<f64, f64> {
    let capacity = 0.85 * phi * fc_ksi;
    let term = 2.0 * ru / capacity;
    // NaN (from overflowed inputs) has no solution either
    if term > 1.0 || term.is_nan() {
        return Err(term);
    }
    Ok((capacity / fy_ksi) * (1.0 - (1.0 - term).sqrt()))
}

/// Effective depth d = t - depth to steel, rejecting slabs with no depth left.
pub fn effective_depth_in(thickness_in: f64, settings: &DesignSettings) -> CalcResult<f64> {
    let d = thickness_in - settings.depth_to_steel_in;
    if !(d.is_finite() && d > 0.0) {
        return Err(CalcError::InvalidEffectiveDepth {
            thickness_in,
            effective_depth_in: d,
        });
    }
    Ok(d)
}

/// Design main and shrinkage steel for every span and location.
///
/// Every location is checked. If any is infeasible the whole run fails with a
/// single [`CalcError::DesignInfeasible`] listing all of them, so callers never
/// see a partial result.
pub fn design_reinforcement(
    spans: &[SpanMoments],
    thickness_in: f64,
    materials: &MaterialSet,
    settings: &DesignSettings,
) -> CalcResult<Vec<SpanReinforcement>> {
    let section = Section {
        thickness_in,
        b_in: settings.strip_width_in,
        d_in: effective_depth_in(thickness_in, settings)?,
        phi: settings.phi_flexure,
        fc_ksi: materials.fc_ksi,
        fy_ksi: materials.fy_ksi,
        bar_area_in2: materials.bar.area_in2(),
    };
    let bar_designation = materials.bar.designation();

    let mut failures = Vec::new();
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        let mut locations = Vec::with_capacity(span.moments.len());
        for (location, moment) in span.moments.iter() {
            match design_location(location, moment, &section, &bar_designation, settings) {
                Ok(design) => locations.push(design),
                Err(term) => {
                    warn!(span = span.span, %location, moment, term, "section over-reinforced");
                    failures.push(InfeasibleLocation {
                        span: span.span,
                        location,
                        moment_kipft: moment,
                        term,
                    });
                }
            }
        }
        result.push(SpanReinforcement {
            span: span.span,
            locations,
        });
    }

    if !failures.is_empty() {
        return Err(CalcError::DesignInfeasible { failures });
    }
    Ok(result)
}

fn design_location(
    location: MomentLocation,
    moment_kipft: f64,
    section: &Section,
    bar_designation: &str,
    settings: &DesignSettings,
) -> Result<LocationReinforcement, f64> {
    let Section {
        thickness_in,
        b_in,
        d_in,
        ..
    } = *section;

    let mu: KipIn = KipFt(moment_kipft).into();
    let ru = mu.value() / (b_in * d_in.powi(2));
    let rho = required_rho(ru, section.fc_ksi, section.fy_ksi, section.phi)?;

    let as_required = rho * b_in * d_in;
    let as_min = settings.min_steel_ratio * b_in * thickness_in;
    let as_final = as_required.max(as_min);

    let main_spacing = BarSpacing::capped(
        (section.bar_area_in2 / as_final) * b_in,
        settings.main_spacing_limit_factor,
        thickness_in,
        f64::round_ties_even,
    );

    let as_shrink = 0.5 * as_min;
    let shrinkage_spacing = BarSpacing::capped(
        (settings.shrinkage_bar_area_in2 / as_shrink) * b_in,
        settings.shrinkage_spacing_limit_factor,
        thickness_in,
        f64::floor,
    );

    if main_spacing.limited {
        debug!(%location, limit_in = main_spacing.limit_in, "main bar spacing capped");
    }

    Ok(LocationReinforcement {
        location,
        moment_kipft: round3(moment_kipft),
        ru_ksi: round3(ru),
        rho: round_sig(rho, 4),
        as_required_in2: round3(as_required),
        as_min_in2: round3(as_min),
        as_final_in2: round3(as_final),
        bar_designation: bar_designation.to_string(),
        main_callout: format!("@ {:.0} in C/C", main_spacing.spacing_in),
        main_spacing,
        shrinkage_callout: format!(
            "#{} @ {:.0} in C/C",
            settings.shrinkage_bar_number, shrinkage_spacing.spacing_in
        ),
        shrinkage_spacing,
    })
}
