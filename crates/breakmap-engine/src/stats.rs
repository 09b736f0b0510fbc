//! Statistics collected during bulk classification

use std::fmt;

/// How a single cell was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellOutcome {
    /// A breakpoint owned the value
    Mapped,
    /// The value was the no-data sentinel
    NoData,
    /// No breakpoint owned the value; the policy fallback was used
    Fallback,
    /// Strict-mode miss replaced by the caller's substitute
    Substituted,
}

/// Per-outcome cell counts for one bulk pass
///
/// Counts from independently processed chunks combine with [`BulkStats::merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkStats {
    /// Cells owned by a breakpoint
    pub mapped: usize,

    /// No-data cells
    pub no_data: usize,

    /// Cells resolved to the fallback value
    pub fallback: usize,

    /// Strict-mode misses replaced by a substitute
    pub substituted: usize,
}

impl BulkStats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one cell
    pub fn record(&mut self, outcome: CellOutcome) {
        match outcome {
            CellOutcome::Mapped => self.mapped += 1,
            CellOutcome::NoData => self.no_data += 1,
            CellOutcome::Fallback => self.fallback += 1,
            CellOutcome::Substituted => self.substituted += 1,
        }
    }

    /// Combine counts from two disjoint passes
    pub fn merge(self, other: Self) -> Self {
        Self {
            mapped: self.mapped + other.mapped,
            no_data: self.no_data + other.no_data,
            fallback: self.fallback + other.fallback,
            substituted: self.substituted + other.substituted,
        }
    }

    /// Total cells seen
    pub fn total(&self) -> usize {
        self.mapped + self.no_data + self.fallback + self.substituted
    }

    /// Cells no breakpoint owned, however they were filled
    pub fn unmapped(&self) -> usize {
        self.fallback + self.substituted
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let lines = [
            "Bulk Classification Summary".to_string(),
            "===========================".to_string(),
            format!("Cells: {}", self.total()),
            format!("  Mapped: {}", self.mapped),
            format!("  No-data: {}", self.no_data),
            format!("  Fallback: {}", self.fallback),
            format!("  Substituted: {}", self.substituted),
        ];
        lines.join("\n")
    }
}

impl fmt::Display for BulkStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cells ({} mapped, {} no-data, {} fallback, {} substituted)",
            self.total(),
            self.mapped,
            self.no_data,
            self.fallback,
            self.substituted
        )
    }
}

impl FromIterator<CellOutcome> for BulkStats {
    fn from_iter<I: IntoIterator<Item = CellOutcome>>(iter: I) -> Self {
        let mut stats = Self::new();
        for outcome in iter {
            stats.record(outcome);
        }
        stats
    }
}
