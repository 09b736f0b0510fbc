//! Value classifier - no-data check, tree search, and policy resolution

use crate::boundary::Strategy;
use crate::{
    Breakpoint, BreakTree, ClassValue, ClassificationError, ConstructionError, DomainValue,
    MappingPolicy,
};

/// Outcome of looking a value up, before the policy turns misses into
/// fallbacks or errors
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<B> {
    /// The input was the no-data sentinel
    NoData,
    /// A breakpoint owns the input
    Mapped(B),
    /// No breakpoint satisfies the boundary relation
    Unmapped,
}

/// Maps domain values to class values through a break tree
///
/// Immutable once built; `classify` takes `&self`, allocates nothing (a
/// strict-mode error carries the query by value), and can be called from
/// any number of threads at once.
///
/// # Examples
///
/// ```
/// use breakmap_domain::{MappingPolicy, ValueClassifier};
///
/// let classifier: ValueClassifier<i32, i32> = ValueClassifier::new(
///     [(1, 100), (5, 200), (10, 300)],
///     MappingPolicy::integer().with_strict(true),
/// ).unwrap();
///
/// assert_eq!(classifier.classify(4), Ok(200));
/// assert_eq!(classifier.classify(i32::MIN), Ok(0)); // no-data
/// assert!(classifier.classify(11).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ValueClassifier<A, B> {
    tree: BreakTree<A, B>,
    policy: MappingPolicy<B>,
    strategy: Strategy<A>,
    is_no_data: fn(A) -> bool,
}

impl<A: DomainValue, B: ClassValue> ValueClassifier<A, B> {
    /// Build a classifier from breakpoints in any order and a policy
    pub fn new<I>(breakpoints: I, policy: MappingPolicy<B>) -> Result<Self, ConstructionError>
    where
        I: IntoIterator,
        I::Item: Into<Breakpoint<A, B>>,
    {
        Ok(Self {
            tree: BreakTree::build(breakpoints)?,
            strategy: policy.boundary.strategy(),
            policy,
            is_no_data: A::is_no_data,
        })
    }

    /// Build a classifier with the preset policy for `B`
    pub fn with_defaults<I>(breakpoints: I) -> Result<Self, ConstructionError>
    where
        I: IntoIterator,
        I::Item: Into<Breakpoint<A, B>>,
    {
        Self::new(breakpoints, MappingPolicy::default())
    }

    /// Replace the per-type no-data predicate
    pub fn with_no_data_predicate(mut self, predicate: fn(A) -> bool) -> Self {
        self.is_no_data = predicate;
        self
    }

    /// Look a value up without applying the fallback/strict policy
    #[inline]
    pub fn resolve(&self, z: A) -> Resolution<B> {
        if (self.is_no_data)(z) {
            return Resolution::NoData;
        }

        match self.tree.search(z, self.strategy) {
            Some(bp) => Resolution::Mapped(bp.class),
            None => Resolution::Unmapped,
        }
    }

    /// Classify a value
    ///
    /// No-data inputs yield the policy's no-data value. Unowned inputs yield
    /// the fallback value, or [`ClassificationError::Unmapped`] in strict mode.
    #[inline]
    pub fn classify(&self, z: A) -> Result<B, ClassificationError<A>> {
        match self.resolve(z) {
            Resolution::NoData => Ok(self.policy.no_data_value),
            Resolution::Mapped(class) => Ok(class),
            Resolution::Unmapped if self.policy.strict => Err(ClassificationError::Unmapped {
                value: z,
                boundary: self.policy.boundary,
            }),
            Resolution::Unmapped => Ok(self.policy.fallback_value),
        }
    }

    /// Classify a value, falling back even when the policy is strict
    #[inline]
    pub fn classify_or_fallback(&self, z: A) -> B {
        match self.resolve(z) {
            Resolution::NoData => self.policy.no_data_value,
            Resolution::Mapped(class) => class,
            Resolution::Unmapped => self.policy.fallback_value,
        }
    }

    /// The policy in effect
    pub fn policy(&self) -> &MappingPolicy<B> {
        &self.policy
    }

    /// The underlying break tree
    pub fn tree(&self) -> &BreakTree<A, B> {
        &self.tree
    }
}

impl ValueClassifier<i32, i32> {
    /// Integer domain to integer classes, integer preset policy
    pub fn int_to_int<I>(breakpoints: I) -> Result<Self, ConstructionError>
    where
        I: IntoIterator,
        I::Item: Into<Breakpoint<i32, i32>>,
    {
        Self::new(breakpoints, MappingPolicy::integer())
    }
}

impl ValueClassifier<i32, f64> {
    /// Integer domain to floating classes, floating preset policy
    pub fn int_to_float<I>(breakpoints: I) -> Result<Self, ConstructionError>
    where
        I: IntoIterator,
        I::Item: Into<Breakpoint<i32, f64>>,
    {
        Self::new(breakpoints, MappingPolicy::floating())
    }
}

impl ValueClassifier<f64, i32> {
    /// Floating domain to integer classes, integer preset policy
    pub fn float_to_int<I>(breakpoints: I) -> Result<Self, ConstructionError>
    where
        I: IntoIterator,
        I::Item: Into<Breakpoint<f64, i32>>,
    {
        Self::new(breakpoints, MappingPolicy::integer())
    }
}

impl ValueClassifier<f64, f64> {
    /// Floating domain to floating classes, floating preset policy
    pub fn float_to_float<I>(breakpoints: I) -> Result<Self, ConstructionError>
    where
        I: IntoIterator,
        I::Item: Into<Breakpoint<f64, f64>>,
    {
        Self::new(breakpoints, MappingPolicy::floating())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoundaryMode;

    const BREAKS: [(i32, i32); 3] = [(1, 10), (5, 20), (10, 30)];

    fn classifier(boundary: BoundaryMode, strict: bool) -> ValueClassifier<i32, i32> {
        let policy = MappingPolicy::integer()
            .with_boundary(boundary)
            .with_fallback_value(-1)
            .with_no_data_value(-9)
            .with_strict(strict);
        ValueClassifier::new(BREAKS, policy).unwrap()
    }

    fn classify_all(c: &ValueClassifier<i32, i32>, inputs: &[i32]) -> Vec<i32> {
        inputs.iter().map(|&z| c.classify(z).unwrap()).collect()
    }

    #[test]
    fn test_less_than_or_equal_to() {
        let c = classifier(BoundaryMode::LessThanOrEqualTo, false);
        assert_eq!(
            classify_all(&c, &[0, 1, 4, 5, 9, 10, 11]),
            vec![10, 10, 20, 20, 30, 30, -1]
        );
    }

    #[test]
    fn test_greater_than_or_equal_to() {
        let c = classifier(BoundaryMode::GreaterThanOrEqualTo, false);
        assert_eq!(
            classify_all(&c, &[0, 1, 4, 5, 6, 10, 11]),
            vec![-1, 10, 10, 20, 20, 30, 30]
        );
    }

    #[test]
    fn test_less_than() {
        let c = classifier(BoundaryMode::LessThan, false);
        assert_eq!(
            classify_all(&c, &[0, 1, 4, 5, 9, 10, 11]),
            vec![10, 20, 20, 30, 30, -1, -1]
        );
    }

    #[test]
    fn test_greater_than() {
        let c = classifier(BoundaryMode::GreaterThan, false);
        assert_eq!(
            classify_all(&c, &[0, 1, 2, 5, 6, 10, 11]),
            vec![-1, -1, 10, 10, 20, 20, 30]
        );
    }

    #[test]
    fn test_exact() {
        let c = classifier(BoundaryMode::Exact, false);
        assert_eq!(
            classify_all(&c, &[0, 1, 4, 5, 9, 10, 11]),
            vec![-1, 10, -1, 20, -1, 30, -1]
        );
    }

    #[test]
    fn test_strict_miss_is_error() {
        let c = classifier(BoundaryMode::LessThanOrEqualTo, true);
        assert_eq!(c.classify(10), Ok(30));
        assert_eq!(
            c.classify(11),
            Err(ClassificationError::Unmapped {
                value: 11,
                boundary: BoundaryMode::LessThanOrEqualTo,
            })
        );
        assert_eq!(c.classify_or_fallback(11), -1);
    }

    #[test]
    fn test_error_message() {
        let c = classifier(BoundaryMode::Exact, true);
        let err = c.classify(3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "No breakpoint owns value 3 under exact boundary"
        );
    }

    #[test]
    fn test_error_carries_float_query() {
        let c: ValueClassifier<f64, i32> = ValueClassifier::new(
            [(0.5, 1), (1.5, 2)],
            MappingPolicy::integer().with_strict(true),
        )
        .unwrap();
        let err = c.classify(2.25).unwrap_err();
        assert_eq!(
            err,
            ClassificationError::Unmapped {
                value: 2.25,
                boundary: BoundaryMode::LessThanOrEqualTo,
            }
        );
        assert_eq!(
            err.to_string(),
            "No breakpoint owns value 2.25 under lte boundary"
        );
    }

    #[test]
    fn test_no_data_short_circuits() {
        for mode in BoundaryMode::ALL {
            let c = classifier(mode, true);
            assert_eq!(c.classify(i32::MIN), Ok(-9));
            assert_eq!(c.resolve(i32::MIN), Resolution::NoData);
        }
    }

    #[test]
    fn test_no_data_wins_over_matching_breakpoint() {
        let c: ValueClassifier<i32, i32> = ValueClassifier::new(
            [(i32::MIN, 1), (0, 2)],
            MappingPolicy::integer().with_boundary(BoundaryMode::Exact),
        )
        .unwrap();
        assert_eq!(c.classify(i32::MIN), Ok(0));
    }

    #[test]
    fn test_custom_no_data_predicate() {
        let c = ValueClassifier::int_to_int(BREAKS)
            .unwrap()
            .with_no_data_predicate(|z| z == 0);
        assert_eq!(c.resolve(0), Resolution::NoData);
        assert_eq!(c.resolve(i32::MIN), Resolution::Mapped(10));
    }

    #[test]
    fn test_convenience_constructors() {
        let ii = ValueClassifier::int_to_int([(1, 1), (2, 2)]).unwrap();
        assert_eq!(ii.classify(3), Ok(0));
        assert_eq!(ii.classify(i32::MIN), Ok(0));

        let i_f = ValueClassifier::int_to_float([(1, 0.5), (2, 1.5)]).unwrap();
        assert_eq!(i_f.classify(2), Ok(1.5));
        assert!(i_f.classify(3).unwrap().is_nan());

        let fi = ValueClassifier::float_to_int([(0.25, 1), (0.75, 2)]).unwrap();
        assert_eq!(fi.classify(0.5), Ok(2));
        assert_eq!(fi.classify(f64::NAN), Ok(0));

        let ff = ValueClassifier::float_to_float([(0.25, 1.0), (0.75, 2.0)]).unwrap();
        assert_eq!(ff.classify(-3.0), Ok(1.0));
        assert!(ff.classify(f64::NAN).unwrap().is_nan());
        assert!(ff.classify(0.8).unwrap().is_nan());
    }

    #[test]
    fn test_with_defaults_uses_class_preset() {
        let c: ValueClassifier<i16, u8> =
            ValueClassifier::with_defaults([(0i16, 1u8), (100, 2)]).unwrap();
        assert_eq!(c.policy().fallback_value, 0);
        assert_eq!(c.classify(50), Ok(2));
        assert_eq!(c.classify(i16::MIN), Ok(0));
        assert_eq!(c.tree().len(), 2);
    }

    #[test]
    fn test_construction_error_propagates() {
        let result = ValueClassifier::int_to_int(Vec::<(i32, i32)>::new());
        assert_eq!(result.unwrap_err(), ConstructionError::Empty);
    }
}
