//! Significant-figure rounding.
//!
//! Rounding here changes the numeric value the engine hands on (moments are
//! rounded before reinforcement is sized), so it is kept separate from any
//! display formatting.

/// Round `x` to `sig` significant figures.
///
/// Goes through the shortest decimal exponent form, so `0.00123` stays
/// `0.00123` rather than picking up binary noise.
///
/// ```rust
/// use slab_core::rounding::round_sig;
///
/// assert_eq!(round_sig(12345.0, 3), 12300.0);
/// assert_eq!(round_sig(0.001234, 3), 0.00123);
/// assert_eq!(round_sig(0.0, 3), 0.0);
/// ```
pub fn round_sig(x: f64, sig: usize) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    let digits = sig.max(1) - 1;
    let formatted = format!("{:.*e}", digits, x);
    // Exponent notation of a finite f64 always parses back.
    formatted.parse().unwrap_or(x)
}

/// Three significant figures, used for moments, Ru and steel areas
pub fn round3(x: f64) -> f64 {
    round_sig(x, 3)
}

/// Round to a fixed number of decimal places (used for self-weight in psf)
pub fn round_places(x: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (x * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_large_values() {
        assert_eq!(round_sig(12345.0, 3), 12300.0);
        assert_eq!(round_sig(98765.0, 3), 98800.0);
    }

    #[test]
    fn test_small_values() {
        assert_eq!(round_sig(0.001234, 3), 0.00123);
        assert_eq!(round_sig(0.00132456, 4), 0.001325);
    }

    #[test]
    fn test_zero_and_negative() {
        assert_eq!(round_sig(0.0, 3), 0.0);
        assert_eq!(round_sig(-2.0906, 3), -2.09);
    }

    #[test]
    fn test_moment_values() {
        // 0.223 ksf x 15^2 = 50.175 kip-ft; A = 1/24, B = 1/14, C = 1/10
        assert_eq!(round3(50.175 / 24.0), 2.09);
        assert_eq!(round3(50.175 / 14.0), 3.58);
    }

    #[test]
    fn test_round_places() {
        assert_eq!(round_places(112.5, 2), 112.5);
        assert_eq!(round_places(37.4999, 2), 37.5);
    }

    proptest! {
        #[test]
        fn rounding_is_idempotent(x in -1.0e6f64..1.0e6f64, sig in 1usize..6) {
            let once = round_sig(x, sig);
            prop_assert_eq!(round_sig(once, sig), once);
        }

        #[test]
        fn rounding_stays_close(x in 1.0e-4f64..1.0e6f64) {
            let rounded = round_sig(x, 3);
            prop_assert!(((rounded - x) / x).abs() <= 0.005 + 1e-12);
        }
    }
}
