//! Breakmap Domain Layer
//!
//! Value-to-class mapping over a fixed set of breakpoints, the core of
//! threshold (choropleth-style) classification of raster cell values.
//!
//! ## Key Concepts
//!
//! - **Breakpoint**: a domain value paired with the class it owns
//! - **Boundary mode**: which breakpoint owns a value (`<`, `<=`, `>`, `>=`, `==`)
//! - **Break tree**: balanced search tree built once over the breakpoints
//! - **No-data sentinel**: reserved domain value that short-circuits lookup
//! - **Strict mode**: unowned values are errors instead of fallbacks
//!
//! ## Example
//!
//! ```
//! use breakmap_domain::{BoundaryMode, MappingPolicy, ValueClassifier};
//!
//! let policy = MappingPolicy::floating().with_boundary(BoundaryMode::GreaterThanOrEqualTo);
//! let classifier: ValueClassifier<f64, f64> =
//!     ValueClassifier::new([(0.0, 1.0), (10.0, 2.0), (20.0, 3.0)], policy).unwrap();
//!
//! assert_eq!(classifier.classify(15.0), Ok(2.0));
//! assert!(classifier.classify(f64::NAN).unwrap().is_nan());
//! ```
//!
//! ## Architecture
//!
//! Everything here is immutable after construction and free of I/O.
//! Configuration loading and bulk evaluation live in `breakmap-engine`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod boundary;
pub mod breakpoint;
pub mod classifier;
pub mod error;
pub mod policy;
pub mod tree;
pub mod value;

// Re-exports for convenience
pub use boundary::{BoundaryMode, NodeBounds, Step, Strategy};
pub use breakpoint::Breakpoint;
pub use classifier::{Resolution, ValueClassifier};
pub use error::{ClassificationError, ConstructionError};
pub use policy::MappingPolicy;
pub use tree::BreakTree;
pub use value::{ClassValue, DomainValue};
