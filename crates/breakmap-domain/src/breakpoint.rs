//! Breakpoint module - a bucket boundary paired with its class

use serde::{Deserialize, Serialize};

/// A domain value paired with the class value it owns
///
/// Deserializes from `{ value = .., class = .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint<A, B> {
    /// Domain value marking the bucket boundary
    pub value: A,
    /// Output class for values owned by this breakpoint
    pub class: B,
}

impl<A, B> Breakpoint<A, B> {
    /// Create a new breakpoint
    pub fn new(value: A, class: B) -> Self {
        Self { value, class }
    }
}

impl<A, B> From<(A, B)> for Breakpoint<A, B> {
    fn from((value, class): (A, B)) -> Self {
        Self { value, class }
    }
}
