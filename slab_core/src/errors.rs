//! # Error Types
//!
//! Structured error types for slab_core. Every failure a design run can hit is
//! reported as a [`CalcError`] variant carrying the rule that was violated and
//! the offending values, so a presentation layer can show an actionable
//! message without parsing strings.
//!
//! Errors fall into three classes (see [`ErrorCategory`]):
//!
//! - **Configuration** - the run cannot be set up (too few spans, bad settings,
//!   no effective depth)
//! - **Validation** - inputs fail the code-mandated geometry/load checks
//! - **Design** - a location cannot be reinforced with the chosen section
//!
//! ## Example
//!
//! ```rust
//! use slab_core::errors::{CalcError, CalcResult, ErrorCategory};
//!
//! fn check_fc(fc_ksi: f64) -> CalcResult<()> {
//!     if fc_ksi <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "fc_ksi",
//!             fc_ksi.to_string(),
//!             "Concrete strength must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! let err = check_fc(0.0).unwrap_err();
//! assert_eq!(err.category(), ErrorCategory::Validation);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::moment_coefficients::MomentLocation;

/// Result type alias for slab_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for slab design operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Fewer than two spans were supplied
    #[error("A continuous slab needs at least 2 spans, got {count}")]
    InsufficientSpans { count: usize },

    /// A settings value is out of range
    #[error("Invalid setting '{field}': {value} - {reason}")]
    InvalidSettings {
        field: String,
        value: String,
        reason: String,
    },

    /// Slab is too thin to leave any effective depth
    #[error("Effective depth {effective_depth_in} in is not positive for a {thickness_in} in slab")]
    InvalidEffectiveDepth {
        thickness_in: f64,
        effective_depth_in: f64,
    },

    /// An input value is invalid (non-positive, NaN, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Span and/or load checks failed
    #[error("Input checks failed: {}", join_display(violations))]
    ValidationFailed { violations: Vec<Violation> },

    /// One or more locations need more steel than the section can develop
    #[error("Design infeasible: {}", join_display(failures))]
    DesignInfeasible { failures: Vec<InfeasibleLocation> },
}

/// Broad error class, for callers that only need to know which stage refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    Design,
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidSettings error
    pub fn invalid_settings(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidSettings {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Which class of failure this is
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::InsufficientSpans { .. }
            | CalcError::InvalidSettings { .. }
            | CalcError::InvalidEffectiveDepth { .. } => ErrorCategory::Configuration,
            CalcError::InvalidInput { .. } | CalcError::ValidationFailed { .. } => ErrorCategory::Validation,
            CalcError::DesignInfeasible { .. } => ErrorCategory::Design,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InsufficientSpans { .. } => "INSUFFICIENT_SPANS",
            CalcError::InvalidSettings { .. } => "INVALID_SETTINGS",
            CalcError::InvalidEffectiveDepth { .. } => "INVALID_EFFECTIVE_DEPTH",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::ValidationFailed { .. } => "VALIDATION_FAILED",
            CalcError::DesignInfeasible { .. } => "DESIGN_INFEASIBLE",
        }
    }
}

/// A single failed input check.
///
/// Span numbers are 1-based, matching how spans are labelled to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "rule")]
pub enum Violation {
    /// Adjacent spans differ by more than the allowed fraction of the shorter one
    SpanDifference {
        first_span: usize,
        second_span: usize,
        first_ft: f64,
        second_ft: f64,
        difference_ft: f64,
        allowed_ft: f64,
    },

    /// Dead load is zero, so the live/dead ratio is undefined
    ZeroDeadLoad,

    /// Live/dead ratio at or above the limit
    LoadRatio { ratio: f64, limit: f64 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::SpanDifference {
                first_span,
                second_span,
                difference_ft,
                allowed_ft,
                ..
            } => write!(
                f,
                "span difference between Span {} and {} ({} ft) is more than {} ft allowed from the shorter span",
                first_span, second_span, difference_ft, allowed_ft
            ),
            Violation::ZeroDeadLoad => write!(f, "dead load cannot be zero"),
            Violation::LoadRatio { ratio, limit } => {
                write!(f, "live load / dead load ratio {:.2} must be less than {}", ratio, limit)
            }
        }
    }
}

/// A location where the required reinforcement ratio has no real solution.
///
/// `term` is `2·Ru / (0.85·φ·f'c)`; anything above 1 means the section is
/// over-reinforced and needs more thickness or stronger materials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InfeasibleLocation {
    /// 1-based span number
    pub span: usize,
    pub location: MomentLocation,
    pub moment_kipft: f64,
    pub term: f64,
}

impl fmt::Display for InfeasibleLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "span {} {} (Mu = {} kip-ft/ft, term = {:.3} > 1); increase thickness or adjust materials",
            self.span,
            self.location.display_name(),
            self.moment_kipft,
            self.term
        )
    }
}

fn join_display<T: fmt::Display>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
