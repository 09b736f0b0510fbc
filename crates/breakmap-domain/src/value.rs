//! Numeric value traits for the domain (input) and class (output) sides
//!
//! Both traits are implemented for primitive numbers only, so every
//! classifier is monomorphized for its concrete numeric pair.

use std::fmt::Debug;

/// A domain value that can be classified
///
/// Carries the no-data predicate for its numeric representation:
/// integer rasters reserve the minimum value of the type, floating-point
/// rasters reserve NaN.
pub trait DomainValue: Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// The reserved no-data sentinel
    const NODATA: Self;

    /// Whether this value is the no-data sentinel
    fn is_no_data(self) -> bool;
}

/// A class value produced by classification
pub trait ClassValue: Copy + Debug + Send + Sync + 'static {
    /// Preset used for both the no-data and fallback outputs
    /// (`0` for integer classes, NaN for floating classes)
    const UNMAPPED: Self;
}

macro_rules! integer_values {
    ($($t:ty),*) => {
        $(
            impl DomainValue for $t {
                const NODATA: Self = <$t>::MIN;

                #[inline]
                fn is_no_data(self) -> bool {
                    self == <$t>::MIN
                }
            }

            impl ClassValue for $t {
                const UNMAPPED: Self = 0;
            }
        )*
    };
}

macro_rules! float_values {
    ($($t:ty),*) => {
        $(
            impl DomainValue for $t {
                const NODATA: Self = <$t>::NAN;

                #[inline]
                fn is_no_data(self) -> bool {
                    self.is_nan()
                }
            }

            impl ClassValue for $t {
                const UNMAPPED: Self = <$t>::NAN;
            }
        )*
    };
}

integer_values!(i8, i16, i32, i64);
float_values!(f32, f64);

// Unsigned types have no reserved bit pattern in the domain, but are common
// class outputs (palette indices, packed colors).
macro_rules! unsigned_classes {
    ($($t:ty),*) => {
        $(
            impl ClassValue for $t {
                const UNMAPPED: Self = 0;
            }
        )*
    };
}

unsigned_classes!(u8, u16, u32, u64);
