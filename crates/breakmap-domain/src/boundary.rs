//! Boundary modes and the search strategies they select
//!
//! Each mode maps to a pure step function that inspects one tree node and
//! decides whether its breakpoint owns the query, or which side to descend.
//! The step functions only see a [`NodeBounds`] so they can be exercised
//! without building a tree.
//!
//! | Mode | Owner of `z` |
//! |------|--------------|
//! | `LessThan` | smallest break `b` with `z < b` |
//! | `LessThanOrEqualTo` | smallest break `b` with `z <= b` |
//! | `GreaterThan` | largest break `b` with `b < z` |
//! | `GreaterThanOrEqualTo` | largest break `b` with `b <= z` |
//! | `Exact` | break `b` with `b == z` |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relation a query must satisfy against a breakpoint to be owned by it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BoundaryMode {
    /// Query strictly below the break
    #[serde(rename = "lt", alias = "less_than")]
    LessThan,

    /// Query at or below the break
    #[default]
    #[serde(rename = "lte", alias = "less_than_or_equal_to")]
    LessThanOrEqualTo,

    /// Query strictly above the break
    #[serde(rename = "gt", alias = "greater_than")]
    GreaterThan,

    /// Query at or above the break
    #[serde(rename = "gte", alias = "greater_than_or_equal_to")]
    GreaterThanOrEqualTo,

    /// Query equal to the break
    #[serde(rename = "exact")]
    Exact,
}

/// Decision taken by a strategy at a single node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The node's breakpoint owns the query
    Accept,
    /// Continue in the left subtree
    Left,
    /// Continue in the right subtree
    Right,
}

/// What a strategy may look at when visiting a node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeBounds<A> {
    /// The node's own key
    pub key: A,
    /// Greatest key of the left subtree, if there is one
    pub left_greatest: Option<A>,
    /// Least key of the right subtree, if there is one
    pub right_least: Option<A>,
}

/// A pure per-node decision function
pub type Strategy<A> = fn(A, &NodeBounds<A>) -> Step;

impl BoundaryMode {
    /// Every mode, in declaration order
    pub const ALL: [BoundaryMode; 5] = [
        BoundaryMode::LessThan,
        BoundaryMode::LessThanOrEqualTo,
        BoundaryMode::GreaterThan,
        BoundaryMode::GreaterThanOrEqualTo,
        BoundaryMode::Exact,
    ];

    /// Get the short mode name
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryMode::LessThan => "lt",
            BoundaryMode::LessThanOrEqualTo => "lte",
            BoundaryMode::GreaterThan => "gt",
            BoundaryMode::GreaterThanOrEqualTo => "gte",
            BoundaryMode::Exact => "exact",
        }
    }

    /// Parse a mode from its short or long name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "lt" | "less_than" => Some(BoundaryMode::LessThan),
            "lte" | "less_than_or_equal_to" => Some(BoundaryMode::LessThanOrEqualTo),
            "gt" | "greater_than" => Some(BoundaryMode::GreaterThan),
            "gte" | "greater_than_or_equal_to" => Some(BoundaryMode::GreaterThanOrEqualTo),
            "exact" => Some(BoundaryMode::Exact),
            _ => None,
        }
    }

    /// Select the step function for this mode
    pub fn strategy<A: PartialOrd + Copy>(self) -> Strategy<A> {
        match self {
            BoundaryMode::LessThan => less_than::<A>,
            BoundaryMode::LessThanOrEqualTo => less_than_or_equal_to::<A>,
            BoundaryMode::GreaterThan => greater_than::<A>,
            BoundaryMode::GreaterThanOrEqualTo => greater_than_or_equal_to::<A>,
            BoundaryMode::Exact => exact::<A>,
        }
    }

    /// Apply this mode's strategy to a single node
    pub fn step<A: PartialOrd + Copy>(self, query: A, node: &NodeBounds<A>) -> Step {
        (self.strategy())(query, node)
    }
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BoundaryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid boundary mode: {}", s))
    }
}

/// Accept only a literal key match
pub fn exact<A: PartialOrd + Copy>(query: A, node: &NodeBounds<A>) -> Step {
    if query == node.key {
        Step::Accept
    } else if query < node.key {
        Step::Left
    } else {
        Step::Right
    }
}

/// Accept the nearest key strictly above the query
pub fn less_than<A: PartialOrd + Copy>(query: A, node: &NodeBounds<A>) -> Step {
    if query < node.key && node.left_greatest.is_none_or(|g| query >= g) {
        Step::Accept
    } else if query < node.key {
        Step::Left
    } else {
        Step::Right
    }
}

/// Accept the nearest key at or above the query
pub fn less_than_or_equal_to<A: PartialOrd + Copy>(query: A, node: &NodeBounds<A>) -> Step {
    if query <= node.key && node.left_greatest.is_none_or(|g| query > g) {
        Step::Accept
    } else if query < node.key {
        // strict on purpose: a query equal to the key was accepted above
        Step::Left
    } else {
        Step::Right
    }
}

/// Accept the nearest key at or below the query
pub fn greater_than_or_equal_to<A: PartialOrd + Copy>(query: A, node: &NodeBounds<A>) -> Step {
    if query >= node.key && node.right_least.is_none_or(|l| query < l) {
        Step::Accept
    } else if query < node.key {
        Step::Left
    } else {
        Step::Right
    }
}

/// Accept the nearest key strictly below the query
pub fn greater_than<A: PartialOrd + Copy>(query: A, node: &NodeBounds<A>) -> Step {
    if query > node.key && node.right_least.is_none_or(|l| query <= l) {
        Step::Accept
    } else if query <= node.key {
        // a query equal to the key is owned by a smaller break
        Step::Left
    } else {
        Step::Right
    }
}
