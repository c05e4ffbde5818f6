//! # Input Checks
//!
//! The moment-coefficient method is only valid when adjacent spans are
//! similar in length and live load is modest relative to dead load
//! (ACI 318-19 6.5.1). Both checks always run; any violation stops the design
//! before thickness sizing.

use tracing::warn;

use crate::calculations::spans::SpanSequence;
use crate::errors::{CalcError, CalcResult, Violation};
use crate::loads::LoadSet;
use crate::settings::DesignSettings;

/// Every adjacent pair whose difference exceeds the allowed fraction of the shorter span.
pub fn check_span_limits(spans: &SpanSequence, settings: &DesignSettings) -> Vec<Violation> {
    spans
        .as_slice()
        .windows(2)
        .enumerate()
        .filter_map(|(i, pair)| {
            let (a, b) = (pair[0], pair[1]);
            let difference = (b - a).abs();
            let allowed = settings.max_span_difference_ratio * a.min(b);
            (difference > allowed).then(|| Violation::SpanDifference {
                first_span: i + 1,
                second_span: i + 2,
                first_ft: a,
                second_ft: b,
                difference_ft: difference,
                allowed_ft: allowed,
            })
        })
        .collect()
}

/// Dead load must be non-zero and live/dead strictly below the limit.
pub fn check_load_ratio(loads: &LoadSet, settings: &DesignSettings) -> Option<Violation> {
    match loads.live_dead_ratio() {
        None => Some(Violation::ZeroDeadLoad),
        Some(ratio) if ratio >= settings.max_live_dead_ratio => Some(Violation::LoadRatio {
            ratio,
            limit: settings.max_live_dead_ratio,
        }),
        Some(_) => None,
    }
}

/// Run both checks and fail with every violation found.
///
/// ```rust
/// use slab_core::calculations::spans::SpanSequence;
/// use slab_core::calculations::validation::validate;
/// use slab_core::loads::LoadSet;
/// use slab_core::settings::DesignSettings;
///
/// let settings = DesignSettings::default();
/// let spans = SpanSequence::new(vec![10.0, 20.0]).unwrap();
/// assert!(validate(&spans, &LoadSet::new(20.0, 40.0), &settings).is_err());
/// ```
pub fn validate(spans: &SpanSequence, loads: &LoadSet, settings: &DesignSettings) -> CalcResult<()> {
    let mut violations = check_span_limits(spans, settings);
    violations.extend(check_load_ratio(loads, settings));

    if violations.is_empty() {
        return Ok(());
    }
    for violation in &violations {
        warn!(%violation, "input check failed");
    }
    Err(CalcError::ValidationFailed { violations })
}

/// Boolean form of [`validate`]
pub fn is_valid(spans: &SpanSequence, loads: &LoadSet, settings: &DesignSettings) -> bool {
    validate(spans, loads, settings).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn spans(v: &[f64]) -> SpanSequence {
        SpanSequence::new(v.to_vec()).unwrap()
    }

    #[test]
    fn test_similar_spans_pass() {
        let s = DesignSettings::default();
        assert!(check_span_limits(&spans(&[15.0, 15.0, 15.0]), &s).is_empty());
        // 12 vs 10: difference 2 equals 0.2 x 10, allowed
        assert!(check_span_limits(&spans(&[10.0, 12.0]), &s).is_empty());
    }

    #[test]
    fn test_names_offending_pair() {
        let s = DesignSettings::default();
        let violations = check_span_limits(&spans(&[10.0, 20.0]), &s);
        assert_eq!(violations.len(), 1);
        match &violations[0] {
            Violation::SpanDifference {
                first_span,
                second_span,
                difference_ft,
                allowed_ft,
                ..
            } => {
                assert_eq!((*first_span, *second_span), (1, 2));
                assert_eq!(*difference_ft, 10.0);
                assert!((allowed_ft - 2.0).abs() < 1e-12);
            }
            other => panic!("unexpected violation {:?}", other),
        }
    }

    #[test]
    fn test_reports_every_pair() {
        let s = DesignSettings::default();
        let violations = check_span_limits(&spans(&[15.0, 15.0, 25.0, 15.0]), &s);
        let pairs: Vec<(usize, usize)> = violations
            .iter()
            .filter_map(|v| match v {
                Violation::SpanDifference {
                    first_span,
                    second_span,
                    ..
                } => Some((*first_span, *second_span)),
                _ => None,
            })
            .collect();
        assert_eq!(pairs, vec![(2, 3), (3, 4)]);
    }

    #[test]
    fn test_load_ratio() {
        let s = DesignSettings::default();
        assert_eq!(check_load_ratio(&LoadSet::new(0.0, 40.0), &s), Some(Violation::ZeroDeadLoad));
        assert_eq!(check_load_ratio(&LoadSet::new(0.0, 0.0), &s), Some(Violation::ZeroDeadLoad));
        assert_eq!(
            check_load_ratio(&LoadSet::new(20.0, 60.0), &s),
            Some(Violation::LoadRatio { ratio: 3.0, limit: 3.0 })
        );
        assert_eq!(check_load_ratio(&LoadSet::new(20.0, 59.0), &s), None);
        assert_eq!(check_load_ratio(&LoadSet::new(20.0, 0.0), &s), None);
    }

    #[test]
    fn test_validate_collects_both_rules() {
        let s = DesignSettings::default();
        let err = validate(&spans(&[10.0, 20.0]), &LoadSet::new(0.0, 40.0), &s).unwrap_err();
        match err {
            CalcError::ValidationFailed { violations } => {
                assert_eq!(violations.len(), 2);
                assert!(violations.contains(&Violation::ZeroDeadLoad));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_is_valid() {
        let s = DesignSettings::default();
        assert!(is_valid(&spans(&[15.0, 15.0, 15.0]), &LoadSet::new(20.0, 40.0), &s));
        assert!(!is_valid(&spans(&[15.0, 15.0, 15.0]), &LoadSet::new(20.0, 80.0), &s));
    }

    proptest! {
        #[test]
        fn close_spans_always_pass(
            base in 5.0f64..40.0,
            factors in prop::collection::vec(0.85f64..1.15, 1..6),
        ) {
            // Each span within 15% of the previous one stays under the 20% rule
            let mut seq = vec![base];
            for f in factors {
                let prev = *seq.last().unwrap();
                seq.push(prev * f);
            }
            prop_assert!(check_span_limits(&spans(&seq), &DesignSettings::default()).is_empty());
        }

        #[test]
        fn distant_pair_is_named(
            base in 5.0f64..40.0,
            factor in 1.25f64..3.0,
            leading in 0usize..3,
        ) {
            let mut seq = vec![base; leading + 1];
            seq.push(base * factor);
            let violations = check_span_limits(&spans(&seq), &DesignSettings::default());
            prop_assert_eq!(violations.len(), 1);
            let named = matches!(
                violations[0],
                Violation::SpanDifference { first_span, second_span, .. }
                    if first_span == leading + 1 && second_span == leading + 2
            );
            prop_assert!(named);
        }

        #[test]
        fn ratio_below_limit_passes(dead in 1.0f64..200.0, ratio in 0.0f64..2.99) {
            let loads = LoadSet::new(dead, dead * ratio);
            prop_assert!(check_load_ratio(&loads, &DesignSettings::default()).is_none());
        }

        #[test]
        fn ratio_at_or_above_limit_fails(dead in 1.0f64..200.0, ratio in 3.01f64..10.0) {
            let loads = LoadSet::new(dead, dead * ratio);
            prop_assert!(check_load_ratio(&loads, &DesignSettings::default()).is_some());
        }
    }
}
