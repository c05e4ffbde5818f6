//! # Slab Thickness
//!
//! Minimum thickness per ACI 318-19 Table 7.3.1.1, taken from the longest
//! span and applied to the whole slab:
//!
//! - one end continuous: h = L/24
//! - both ends continuous: h = L/28
//!
//! The larger of the two is rounded up to the next thickness increment
//! (3 in by default). It never rounds down.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::spans::SpanSequence;
use crate::loads::{combine, LoadCombination, LoadSet};
use crate::settings::DesignSettings;
use crate::units::{Feet, Inches};

/// Thickness and the loads that follow from it.
///
/// ## JSON Example
///
/// ```json
/// {
///   "thickness_in": 9.0,
///   "minimum_thickness_in": 7.5,
///   "governing_span_ft": 15.0,
///   "self_weight_psf": 112.5,
///   "total_dead_psf": 132.5,
///   "live_psf": 40.0,
///   "wu_ksf": 0.223,
///   "combination": "1.2D + 1.6L"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThicknessResult {
    /// Design thickness, a multiple of the thickness increment (in)
    pub thickness_in: f64,

    /// Code minimum before rounding (in)
    pub minimum_thickness_in: f64,

    /// Longest clear span, which governs thickness (ft)
    pub governing_span_ft: f64,

    /// Slab self-weight (psf)
    pub self_weight_psf: f64,

    /// Superimposed dead load + self-weight (psf)
    pub total_dead_psf: f64,

    /// Live load carried through for display (psf)
    pub live_psf: f64,

    /// Factored uniform load (ksf)
    pub wu_ksf: f64,

    /// Load combination used for `wu_ksf`
    pub combination: String,
}

/// Unrounded code-minimum thickness for a span (in)
pub fn minimum_thickness_in(span_ft: f64, settings: &DesignSettings) -> f64 {
    let span_in: Inches = Feet(span_ft).into();
    let end_span = span_in / settings.end_span_depth_ratio;
    let interior_span = span_in / settings.interior_span_depth_ratio;
    end_span.value().max(interior_span.value())
}

/// Design thickness for the slab (in), governed by the longest span.
///
/// ```rust
/// use slab_core::calculations::spans::SpanSequence;
/// use slab_core::calculations::thickness::slab_thickness;
/// use slab_core::settings::DesignSettings;
///
/// let spans = SpanSequence::new(vec![15.0, 15.0, 15.0]).unwrap();
/// // 15 x 12 / 24 = 7.5 in, rounded up to 9 in
/// assert_eq!(slab_thickness(&spans, &DesignSettings::default()), 9.0);
/// ```
pub fn slab_thickness(spans: &SpanSequence, settings: &DesignSettings) -> f64 {
    let minimum = minimum_thickness_in(spans.longest_ft(), settings);
    let increment = settings.thickness_increment_in;
    (minimum / increment).ceil() * increment
}

/// Size the slab and derive its factored load.
pub fn size_slab(spans: &SpanSequence, loads: &LoadSet, settings: &DesignSettings) -> ThicknessResult {
    let governing_span_ft = spans.longest_ft();
    let minimum_thickness_in = minimum_thickness_in(governing_span_ft, settings);
    let thickness_in = slab_thickness(spans, settings);

    debug!(
        governing_span_ft,
        minimum_thickness_in, thickness_in, "sized slab thickness"
    );

    let factored = combine(thickness_in, loads, settings);
    ThicknessResult {
        thickness_in,
        minimum_thickness_in,
        governing_span_ft,
        self_weight_psf: factored.self_weight_psf,
        total_dead_psf: factored.total_dead_psf,
        live_psf: loads.live_psf,
        wu_ksf: factored.wu_ksf,
        combination: LoadCombination::aci_strength(settings).equation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn spans(v: &[f64]) -> SpanSequence {
        SpanSequence::new(v.to_vec()).unwrap()
    }

    #[test]
    fn test_minimum_thickness() {
        let s = DesignSettings::default();
        // max(15*12/24, 15*12/28) = max(7.5, 6.43)
        assert_eq!(minimum_thickness_in(15.0, &s), 7.5);
    }

    #[test]
    fn test_rounds_up_to_increment() {
        let s = DesignSettings::default();
        assert_eq!(slab_thickness(&spans(&[15.0, 15.0, 15.0]), &s), 9.0);
        // 12 ft -> exactly 6 in, no bump
        assert_eq!(slab_thickness(&spans(&[12.0, 12.0]), &s), 6.0);
        // 12.5 ft -> 6.25 in -> 9 in
        assert_eq!(slab_thickness(&spans(&[12.5, 12.0]), &s), 9.0);
    }

    #[test]
    fn test_longest_span_governs() {
        let s = DesignSettings::default();
        assert_eq!(slab_thickness(&spans(&[10.0, 11.0, 13.0]), &s), 9.0);
        assert_eq!(slab_thickness(&spans(&[13.0, 11.0, 10.0]), &s), 9.0);
    }

    #[test]
    fn test_size_slab_reference_case() {
        let result = size_slab(
            &spans(&[15.0, 15.0, 15.0]),
            &LoadSet::new(20.0, 40.0),
            &DesignSettings::default(),
        );
        assert_eq!(result.thickness_in, 9.0);
        assert_eq!(result.self_weight_psf, 112.5);
        assert_eq!(result.total_dead_psf, 132.5);
        assert!((result.wu_ksf - 0.223).abs() < 1e-12);
        assert_eq!(result.combination, "1.2D + 1.6L");
    }

    proptest! {
        #[test]
        fn thickness_is_multiple_of_three_and_meets_minimum(
            seq in prop::collection::vec(1.0f64..60.0, 2..8),
        ) {
            let s = DesignSettings::default();
            let t = slab_thickness(&spans(&seq), &s);
            let longest = seq.iter().copied().fold(f64::MIN, f64::max);
            let minimum = (longest * 12.0 / 24.0).max(longest * 12.0 / 28.0);

            prop_assert!(t > 0.0);
            prop_assert_eq!(t % 3.0, 0.0);
            prop_assert!(t >= minimum);
            prop_assert!(t < minimum + 3.0);
        }
    }
}
