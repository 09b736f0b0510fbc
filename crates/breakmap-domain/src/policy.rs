//! Mapping policy - how a classifier resolves no-data and misses

use crate::{BoundaryMode, ClassValue};
use serde::{Deserialize, Serialize};

/// Configuration bundle shared by every classification call
///
/// Missing fields deserialize to the preset for `B`.
///
/// # Examples
///
/// ```
/// use breakmap_domain::{BoundaryMode, MappingPolicy};
///
/// // Integer preset: LTE boundary, 0 for no-data and fallback, lenient
/// let policy = MappingPolicy::integer();
/// assert_eq!(policy.boundary, BoundaryMode::LessThanOrEqualTo);
/// assert_eq!(policy.fallback_value, 0);
///
/// // Tighten it for an exact lookup table
/// let policy = MappingPolicy::integer()
///     .with_boundary(BoundaryMode::Exact)
///     .with_strict(true);
/// assert!(policy.strict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(
    default,
    bound(
        serialize = "B: Serialize",
        deserialize = "B: ClassValue + Deserialize<'de>"
    )
)]
pub struct MappingPolicy<B> {
    /// Relation that decides which breakpoint owns a value
    pub boundary: BoundaryMode,

    /// Output for no-data inputs
    pub no_data_value: B,

    /// Output when no breakpoint owns the value (lenient mode)
    pub fallback_value: B,

    /// Report unowned values as errors instead of falling back
    pub strict: bool,
}

impl<B: ClassValue> Default for MappingPolicy<B> {
    fn default() -> Self {
        Self {
            boundary: BoundaryMode::LessThanOrEqualTo,
            no_data_value: B::UNMAPPED,
            fallback_value: B::UNMAPPED,
            strict: false,
        }
    }
}

impl<B> MappingPolicy<B> {
    /// Replace the boundary mode
    pub fn with_boundary(mut self, boundary: BoundaryMode) -> Self {
        self.boundary = boundary;
        self
    }

    /// Replace the no-data output
    pub fn with_no_data_value(mut self, value: B) -> Self {
        self.no_data_value = value;
        self
    }

    /// Replace the fallback output
    pub fn with_fallback_value(mut self, value: B) -> Self {
        self.fallback_value = value;
        self
    }

    /// Enable or disable strict mode
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl MappingPolicy<i32> {
    /// Preset for integer classes (no-data and fallback map to 0)
    pub fn integer() -> Self {
        Self::default()
    }
}

impl MappingPolicy<f64> {
    /// Preset for floating classes (no-data and fallback map to NaN)
    pub fn floating() -> Self {
        Self::default()
    }
}
