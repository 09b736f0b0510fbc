//! Breakmap Engine
//!
//! Infrastructure around the breakmap domain classifier:
//! - TOML configuration for mapping policies and breakpoint tables
//! - Parallel classification of value slices with abort-or-substitute control
//! - Per-outcome statistics for bulk passes
//!
//! Logging goes through `tracing`; installing a subscriber is up to the
//! application.
//!
//! # Examples
//!
//! ```
//! use breakmap_engine::{classify_slice_with_stats, ClassifierConfig};
//!
//! let classifier = ClassifierConfig::<f64, u8>::from_toml_str(r#"
//!     [policy]
//!     boundary = "lt"
//!     fallback_value = 255
//!
//!     [[breaks]]
//!     value = 0.25
//!     class = 1
//!
//!     [[breaks]]
//!     value = 0.75
//!     class = 2
//! "#)?
//! .build()?;
//!
//! let (classes, stats) = classify_slice_with_stats(&classifier, &[0.1, 0.5, 0.9, f64::NAN], 0);
//! assert_eq!(classes, vec![1, 2, 255, 0]);
//! assert_eq!(stats.fallback, 1);
//! # Ok::<(), breakmap_engine::ConfigError>(())
//! ```

#![warn(missing_docs)]

mod bulk;
mod config;
mod error;
mod stats;

pub use bulk::{classify_slice, classify_slice_or, classify_slice_with_stats};
pub use config::{load_classifier, ClassifierConfig};
pub use error::ConfigError;
pub use stats::{BulkStats, CellOutcome};

pub use breakmap_domain as domain;
