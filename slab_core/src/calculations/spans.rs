//! # Span Sequence
//!
//! The ordered clear spans of a continuous slab. Position matters: the first
//! and last spans are end spans, everything between is interior, and a
//! two-span slab gets its own coefficient table.
//!
//! ## Notation
//!
//! - Spans are indexed 0 to N-1 internally and numbered 1 to N for display
//! - N must be at least 2

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Validated clear span lengths in feet, at least two of them.
///
/// Deserializing goes through [`SpanSequence::new`], so an invalid sequence
/// never exists.
///
/// ```rust
/// use slab_core::calculations::spans::SpanSequence;
///
/// let spans = SpanSequence::new(vec![15.0, 16.0, 15.0]).unwrap();
/// assert_eq!(spans.len(), 3);
/// assert_eq!(spans.longest_ft(), 16.0);
///
/// assert!(SpanSequence::new(vec![15.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct SpanSequence(Vec<f64>);

impl SpanSequence {
    /// Build a span sequence.
    ///
    /// Fewer than two spans is a configuration error and is reported before
    /// any span value is looked at.
    pub fn new(spans_ft: Vec<f64>) -> CalcResult<Self> {
        if spans_ft.len() < 2 {
            return Err(CalcError::InsufficientSpans {
                count: spans_ft.len(),
            });
        }
        for (i, &span) in spans_ft.iter().enumerate() {
            if !(span.is_finite() && span > 0.0) {
                return Err(CalcError::invalid_input(
                    format!("spans_ft[{}]", i),
                    span.to_string(),
                    "Clear span must be a positive length",
                ));
            }
        }
        Ok(SpanSequence(spans_ft))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a validated sequence
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    pub fn first_ft(&self) -> f64 {
        self.0[0]
    }

    pub fn last_ft(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// Longest clear span (governs thickness)
    pub fn longest_ft(&self) -> f64 {
        self.0.iter().copied().fold(f64::MIN, f64::max)
    }

    /// Role of the span at `index` within this sequence
    pub fn role_of(&self, index: usize) -> SpanRole {
        SpanRole::for_position(index, self.len())
    }
}

impl TryFrom<Vec<f64>> for SpanSequence {
    type Error = CalcError;

    fn try_from(spans_ft: Vec<f64>) -> CalcResult<Self> {
        SpanSequence::new(spans_ft)
    }
}

impl From<SpanSequence> for Vec<f64> {
    fn from(spans: SpanSequence) -> Self {
        spans.0
    }
}

/// Where a span sits in the sequence, which selects its moment coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpanRole {
    /// First span of a 3+ span slab
    First,
    /// Any span with continuity at both ends
    Interior,
    /// Last span of a 3+ span slab
    Last,
    /// Either span of a two-span slab
    TwoSpan,
}

impl SpanRole {
    /// Classify a span by index within `count` spans.
    ///
    /// ```rust
    /// use slab_core::calculations::spans::SpanRole;
    ///
    /// assert_eq!(SpanRole::for_position(1, 2), SpanRole::TwoSpan);
    /// assert_eq!(SpanRole::for_position(0, 4), SpanRole::First);
    /// assert_eq!(SpanRole::for_position(2, 4), SpanRole::Interior);
    /// assert_eq!(SpanRole::for_position(3, 4), SpanRole::Last);
    /// ```
    pub fn for_position(index: usize, count: usize) -> SpanRole {
        if count == 2 {
            SpanRole::TwoSpan
        } else if index == 0 {
            SpanRole::First
        } else if index + 1 == count {
            SpanRole::Last
        } else {
            SpanRole::Interior
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            SpanRole::First => "End span (first)",
            SpanRole::Interior => "Interior span",
            SpanRole::Last => "End span (last)",
            SpanRole::TwoSpan => "Two-span",
        }
    }
}

impl std::fmt::Display for SpanRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_single_span() {
        let err = SpanSequence::new(vec![12.0]).unwrap_err();
        assert_eq!(err, CalcError::InsufficientSpans { count: 1 });
        assert!(SpanSequence::new(vec![]).is_err());
    }

    #[test]
    fn test_rejects_non_positive_span() {
        let err = SpanSequence::new(vec![12.0, 0.0, 12.0]).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "spans_ft[1]"));
        assert!(SpanSequence::new(vec![12.0, f64::NAN]).is_err());
    }

    #[test]
    fn test_accessors() {
        let spans = SpanSequence::new(vec![14.0, 16.0, 15.0]).unwrap();
        assert_eq!(spans.first_ft(), 14.0);
        assert_eq!(spans.last_ft(), 15.0);
        assert_eq!(spans.longest_ft(), 16.0);
        assert!(!spans.is_empty());
    }

    #[test]
    fn test_roles() {
        let spans = SpanSequence::new(vec![15.0, 15.0, 15.0, 15.0]).unwrap();
        let roles: Vec<SpanRole> = (0..spans.len()).map(|i| spans.role_of(i)).collect();
        assert_eq!(
            roles,
            vec![SpanRole::First, SpanRole::Interior, SpanRole::Interior, SpanRole::Last]
        );

        let two = SpanSequence::new(vec![15.0, 16.0]).unwrap();
        assert_eq!(two.role_of(0), SpanRole::TwoSpan);
        assert_eq!(two.role_of(1), SpanRole::TwoSpan);
    }

    #[test]
    fn test_deserialize_validates() {
        let spans: SpanSequence = serde_json::from_str("[15.0, 15.0]").unwrap();
        assert_eq!(spans.len(), 2);
        assert!(serde_json::from_str::<SpanSequence>("[15.0]").is_err());
        assert_eq!(serde_json::to_string(&spans).unwrap(), "[15.0,15.0]");
    }
}
