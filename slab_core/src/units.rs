//! # Unit Types
//!
//! Type-safe wrappers for the handful of unit conversions the slab design
//! chain performs. These are plain f64 newtypes so JSON stays clean.
//!
//! ## US Customary Units
//!
//! - Length: feet (ft) for spans, inches (in) for thickness and spacing
//! - Area load: pounds per square foot (psf), kips per square foot (ksf)
//! - Moment per foot of slab: kip-feet (k-ft), kip-inches (k-in)
//!
//! ## Example
//!
//! ```rust
//! use slab_core::units::{Feet, Inches, Psf, Ksf};
//!
//! let span = Feet(15.0);
//! let span_inches: Inches = span.into();
//! assert_eq!(span_inches.0, 180.0);
//!
//! let wu: Ksf = Psf(223.0).into();
//! assert!((wu.0 - 0.223).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

// ============================================================================
// Area Load Units
// ============================================================================

/// Distributed area load in pounds per square foot (psf)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psf(pub f64);

/// Distributed area load in kips per square foot (ksf)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ksf(pub f64);

impl From<Psf> for Ksf {
    fn from(psf: Psf) -> Self {
        Ksf(psf.0 / 1000.0)
    }
}

impl From<Ksf> for Psf {
    fn from(ksf: Ksf) -> Self {
        Psf(ksf.0 * 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kip-feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KipFt(pub f64);

/// Moment in kip-inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KipIn(pub f64);

impl From<KipFt> for KipIn {
    fn from(kipft: KipFt) -> Self {
        KipIn(kipft.0 * 12.0)
    }
}

impl From<KipIn> for KipFt {
    fn from(kipin: KipIn) -> Self {
        KipFt(kipin.0 / 12.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(Psf);
impl_arithmetic!(Ksf);
impl_arithmetic!(KipFt);
impl_arithmetic!(KipIn);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feet_to_inches() {
        let inches: Inches = Feet(15.0).into();
        assert_eq!(inches.0, 180.0);
        let back: Feet = Inches(9.0).into();
        assert_eq!(back.0, 0.75);
    }

    #[test]
    fn test_psf_to_ksf() {
        let ksf: Ksf = Psf(1500.0).into();
        assert_eq!(ksf.0, 1.5);
    }

    #[test]
    fn test_kipft_to_kipin() {
        let m: KipIn = KipFt(5.02).into();
        assert!((m.0 - 60.24).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Psf(20.0);
        let b = Psf(112.5);
        assert_eq!((a + b).0, 132.5);
        assert_eq!((b - a).0, 92.5);
        assert_eq!((a * 1.2).0, 24.0);
        assert_eq!((a / 2.0).value(), 10.0);
    }

    #[test]
    fn test_serialization() {
        let ft = Feet(12.5);
        let json = serde_json::to_string(&ft).unwrap();
        assert_eq!(json, "12.5");
    }
}
