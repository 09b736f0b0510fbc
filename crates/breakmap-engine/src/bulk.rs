//! Parallel classification of value slices
//!
//! The grid container that owns cell storage is not part of this crate; it
//! hands over a slice of cell values and receives the classes back in the
//! same order. Work is split across the rayon thread pool. Results are
//! identical to classifying each value in sequence.

use crate::stats::{BulkStats, CellOutcome};
use breakmap_domain::{
    ClassValue, ClassificationError, DomainValue, Resolution, ValueClassifier,
};
use rayon::prelude::*;

/// Classify every value, aborting on a strict-mode miss
///
/// When several cells miss, which one is reported depends on scheduling.
///
/// # Examples
///
/// ```
/// use breakmap_domain::ValueClassifier;
/// use breakmap_engine::classify_slice;
///
/// let classifier = ValueClassifier::int_to_int([(10, 1), (20, 2)]).unwrap();
/// let classes = classify_slice(&classifier, &[5, 15, i32::MIN, 25]).unwrap();
/// assert_eq!(classes, vec![1, 2, 0, 0]);
/// ```
pub fn classify_slice<A, B>(
    classifier: &ValueClassifier<A, B>,
    values: &[A],
) -> Result<Vec<B>, ClassificationError<A>>
where
    A: DomainValue,
    B: ClassValue,
{
    let result = values
        .par_iter()
        .map(|&z| classifier.classify(z))
        .collect::<Result<Vec<B>, ClassificationError<A>>>();

    if let Err(e) = &result {
        tracing::warn!(cells = values.len(), error = %e, "Bulk classification aborted");
    }

    result
}

/// Classify every value, replacing strict-mode misses with `substitute`
pub fn classify_slice_or<A, B>(
    classifier: &ValueClassifier<A, B>,
    values: &[A],
    substitute: B,
) -> Vec<B>
where
    A: DomainValue,
    B: ClassValue,
{
    values
        .par_iter()
        .map(|&z| classify_cell(classifier, z, substitute).0)
        .collect()
}

/// Classify every value like [`classify_slice_or`] and count the outcomes
pub fn classify_slice_with_stats<A, B>(
    classifier: &ValueClassifier<A, B>,
    values: &[A],
    substitute: B,
) -> (Vec<B>, BulkStats)
where
    A: DomainValue,
    B: ClassValue,
{
    let mut classes = vec![substitute; values.len()];

    let stats = classes
        .par_iter_mut()
        .zip(values.par_iter())
        .fold(BulkStats::new, |mut stats, (slot, &z)| {
            let (class, outcome) = classify_cell(classifier, z, substitute);
            *slot = class;
            stats.record(outcome);
            stats
        })
        .reduce(BulkStats::new, BulkStats::merge);

    tracing::debug!(
        cells = stats.total(),
        mapped = stats.mapped,
        no_data = stats.no_data,
        fallback = stats.fallback,
        substituted = stats.substituted,
        "Bulk classification finished"
    );

    (classes, stats)
}

fn classify_cell<A, B>(classifier: &ValueClassifier<A, B>, z: A, substitute: B) -> (B, CellOutcome)
where
    A: DomainValue,
    B: ClassValue,
{
    let policy = classifier.policy();
    match classifier.resolve(z) {
        Resolution::Mapped(class) => (class, CellOutcome::Mapped),
        Resolution::NoData => (policy.no_data_value, CellOutcome::NoData),
        Resolution::Unmapped if policy.strict => (substitute, CellOutcome::Substituted),
        Resolution::Unmapped => (policy.fallback_value, CellOutcome::Fallback),
    }
}
