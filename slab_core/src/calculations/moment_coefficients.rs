//! # ACI Moment Coefficients
//!
//! Approximate design moments for continuous one-way slabs, ACI 318-19
//! Table 6.5.2: `Mu = C · wu · L²` with C taken from a fixed table per span
//! role. Moments are per foot width of slab (kip-ft/ft).
//!
//! | Role      | Locations and coefficients          |
//! |-----------|-------------------------------------|
//! | Two-span  | A = 1/24, B = 1/14, C = 1/9         |
//! | First     | A = 1/24, B = 1/14, C = 1/10        |
//! | Last      | same as First                       |
//! | Interior  | C = 1/10, D = 1/16, E = 1/11        |
//!
//! When the first and last clear spans are exactly equal, the last span's
//! moments are a copy of the first span's. No tolerance is applied.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::calculations::moment_coefficients::{design_moments, MomentLocation};
//! use slab_core::calculations::spans::SpanSequence;
//!
//! let spans = SpanSequence::new(vec![15.0, 15.0, 15.0]).unwrap();
//! let moments = design_moments(&spans, 0.223);
//!
//! // 0.223 x 15² / 10 = 5.0175 -> 5.02
//! assert_eq!(moments[0].moments.get(MomentLocation::C), Some(5.02));
//! assert_eq!(moments[0].moments, moments[2].moments);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::spans::{SpanRole, SpanSequence};
use crate::rounding::round3;

/// Named moment location within a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MomentLocation {
    A,
    B,
    C,
    D,
    E,
}

impl MomentLocation {
    pub fn display_name(&self) -> &'static str {
        match self {
            MomentLocation::A => "Moment at A",
            MomentLocation::B => "Moment at B",
            MomentLocation::C => "Moment at C",
            MomentLocation::D => "Moment at D",
            MomentLocation::E => "Moment at E",
        }
    }
}

impl std::fmt::Display for MomentLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

const TWO_SPAN: [(MomentLocation, f64); 3] = [
    (MomentLocation::A, 1.0 / 24.0),
    (MomentLocation::B, 1.0 / 14.0),
    (MomentLocation::C, 1.0 / 9.0),
];

const END_SPAN: [(MomentLocation, f64); 3] = [
    (MomentLocation::A, 1.0 / 24.0),
    (MomentLocation::B, 1.0 / 14.0),
    (MomentLocation::C, 1.0 / 10.0),
];

const INTERIOR_SPAN: [(MomentLocation, f64); 3] = [
    (MomentLocation::C, 1.0 / 10.0),
    (MomentLocation::D, 1.0 / 16.0),
    (MomentLocation::E, 1.0 / 11.0),
];

impl SpanRole {
    /// Coefficient table for this role
    pub fn coefficients(&self) -> &'static [(MomentLocation, f64)] {
        match self {
            SpanRole::TwoSpan => &TWO_SPAN,
            SpanRole::First | SpanRole::Last => &END_SPAN,
            SpanRole::Interior => &INTERIOR_SPAN,
        }
    }
}

/// Factored moments keyed by location (kip-ft/ft), rounded to 3 significant figures.
///
/// Serializes as a JSON object: `{ "A": 2.09, "B": 3.58, "C": 5.02 }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MomentSet(BTreeMap<MomentLocation, f64>);

impl MomentSet {
    /// Apply a coefficient table to `wu · L²`
    pub fn from_coefficients(coefficients: &[(MomentLocation, f64)], wu_l2: f64) -> Self {
        MomentSet(
            coefficients
                .iter()
                .map(|&(location, c)| (location, round3(c * wu_l2)))
                .collect(),
        )
    }

    pub fn get(&self, location: MomentLocation) -> Option<f64> {
        self.0.get(&location).copied()
    }

    /// Locations and moments in location order
    pub fn iter(&self) -> impl Iterator<Item = (MomentLocation, f64)> + '_ {
        self.0.iter().map(|(&location, &moment)| (location, moment))
    }

    pub fn locations(&self) -> Vec<MomentLocation> {
        self.0.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest moment in the set
    pub fn max_kipft(&self) -> f64 {
        self.0.values().copied().fold(0.0, f64::max)
    }
}

/// Moments for one span of the slab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanMoments {
    /// 1-based span number
    pub span: usize,

    /// Clear span (ft)
    pub span_ft: f64,

    pub role: SpanRole,

    /// True when copied from the first span (equal end spans)
    pub mirrored: bool,

    pub moments: MomentSet,
}

/// Moments for every span, in span order.
pub fn design_moments(spans: &SpanSequence, wu_ksf: f64) -> Vec<SpanMoments> {
    let mut result: Vec<SpanMoments> = Vec::with_capacity(spans.len());
    let ends_equal = spans.first_ft() == spans.last_ft();

    for (index, &span_ft) in spans.iter().enumerate() {
        let role = spans.role_of(index);

        let mirrored = match role {
            SpanRole::Last if ends_equal => result.first().map(|first| first.moments.clone()),
            _ => None,
        };
        let is_mirror = mirrored.is_some();
        let moments = mirrored
            .unwrap_or_else(|| MomentSet::from_coefficients(role.coefficients(), wu_ksf * span_ft.powi(2)));

        debug!(span = index + 1, span_ft, ?role, ?moments, "span moments");

        result.push(SpanMoments {
            span: index + 1,
            span_ft,
            role,
            mirrored: is_mirror,
            moments,
        });
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn spans(v: &[f64]) -> SpanSequence {
        SpanSequence::new(v.to_vec()).unwrap()
    }

    #[test]
    fn test_tables_are_declarative() {
        assert_eq!(SpanRole::TwoSpan.coefficients()[2], (MomentLocation::C, 1.0 / 9.0));
        assert_eq!(SpanRole::First.coefficients(), SpanRole::Last.coefficients());
        let interior: Vec<MomentLocation> =
            SpanRole::Interior.coefficients().iter().map(|(l, _)| *l).collect();
        assert_eq!(interior, vec![MomentLocation::C, MomentLocation::D, MomentLocation::E]);
    }

    #[test]
    fn test_three_equal_spans() {
        let moments = design_moments(&spans(&[15.0, 15.0, 15.0]), 0.223);
        assert_eq!(moments.len(), 3);

        // wu L² = 50.175
        let first = &moments[0].moments;
        assert_eq!(first.get(MomentLocation::A), Some(2.09));
        assert_eq!(first.get(MomentLocation::B), Some(3.58));
        assert_eq!(first.get(MomentLocation::C), Some(5.02));
        assert_eq!(first.get(MomentLocation::D), None);

        let interior = &moments[1].moments;
        assert_eq!(interior.get(MomentLocation::C), Some(5.02));
        assert_eq!(interior.get(MomentLocation::D), Some(3.14));
        assert_eq!(interior.get(MomentLocation::E), Some(4.56));
        assert_eq!(interior.get(MomentLocation::A), None);

        assert_eq!(moments[2].role, SpanRole::Last);
        assert!(moments[2].mirrored);
        assert_eq!(moments[2].moments, moments[0].moments);
    }

    #[test]
    fn test_two_spans_use_one_ninth() {
        let moments = design_moments(&spans(&[15.0, 16.0]), 0.2);
        assert!(moments.iter().all(|m| m.role == SpanRole::TwoSpan));
        // 0.2 x 225 / 9 = 5.0; 0.2 x 256 / 9 = 5.6889 -> 5.69
        assert_eq!(moments[0].moments.get(MomentLocation::C), Some(5.0));
        assert_eq!(moments[1].moments.get(MomentLocation::C), Some(5.69));
        assert!(!moments[1].mirrored);
    }

    #[test]
    fn test_unequal_end_spans_are_computed() {
        let moments = design_moments(&spans(&[15.0, 15.0, 16.0]), 0.2);
        assert!(!moments[2].mirrored);
        // 0.2 x 256 / 10 = 5.12
        assert_eq!(moments[2].moments.get(MomentLocation::C), Some(5.12));
        assert_eq!(moments[2].moments.locations(), moments[0].moments.locations());
    }

    #[test]
    fn test_near_equal_end_spans_are_not_mirrored() {
        let moments = design_moments(&spans(&[15.0, 15.0, 15.000001]), 0.2);
        assert!(!moments[2].mirrored);
    }

    #[test]
    fn test_zero_load_gives_zero_moments() {
        let moments = design_moments(&spans(&[10.0, 10.0, 10.0]), 0.0);
        assert!(moments.iter().all(|m| m.moments.max_kipft() == 0.0));
    }

    #[test]
    fn test_serializes_as_object() {
        let moments = design_moments(&spans(&[15.0, 15.0, 15.0]), 0.223);
        let json = serde_json::to_string(&moments[0].moments).unwrap();
        assert_eq!(json, r#"{"A":2.09,"B":3.58,"C":5.02}"#);
    }

    proptest! {
        #[test]
        fn equal_end_spans_mirror_exactly(
            end in 5.0f64..30.0,
            interior in prop::collection::vec(5.0f64..30.0, 1..5),
            wu in 0.05f64..1.0,
        ) {
            let mut seq = vec![end];
            seq.extend(interior);
            seq.push(end);
            let moments = design_moments(&spans(&seq), wu);
            let last = moments.len() - 1;
            prop_assert_eq!(&moments[0].moments, &moments[last].moments);
            prop_assert_eq!(
                serde_json::to_string(&moments[0].moments).unwrap(),
                serde_json::to_string(&moments[last].moments).unwrap()
            );
        }

        #[test]
        fn moments_are_non_negative(
            seq in prop::collection::vec(1.0f64..40.0, 2..7),
            wu in 0.0f64..2.0,
        ) {
            for span in design_moments(&spans(&seq), wu) {
                prop_assert_eq!(span.moments.len(), 3);
                for (_, m) in span.moments.iter() {
                    prop_assert!(m >= 0.0);
                }
            }
        }
    }
}
