//! Coverage counters and the percentage helpers shared by aggregation and
//! badge rendering.

/// Compute a coverage ratio from covered and missed counts.
///
/// Returns exactly `1.0` when nothing was missed, which also covers the case
/// of a class with no instructions or a method with no branches.
#[must_use]
pub fn ratio(covered: u64, missed: u64) -> f64 {
    if missed == 0 {
        1.0
    } else {
        covered as f64 / (covered as f64 + missed as f64)
    }
}

/// Parse a percentage given in any of the forms `60.2%`, `60.2` or `0.602`.
///
/// A bare number greater than 1 is read as a percentage. Anything that does
/// not parse yields `0.0`; the result is not clamped.
#[must_use]
pub fn parse_percentage(s: &str) -> f64 {
    let (number, is_percent) = match s.strip_suffix('%') {
        Some(rest) => (rest.trim(), true),
        None => (s.trim(), false),
    };
    if number.is_empty() {
        return 0.0;
    }
    let Ok(value) = number.parse::<f64>() else {
        return 0.0;
    };
    if is_percent || value > 1.0 {
        value / 100.0
    } else {
        value
    }
}

/// Covered/missed counts for one metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoverageCounts {
    pub covered: u64,
    pub missed: u64,
}

impl CoverageCounts {
    pub fn new(covered: u64, missed: u64) -> Self {
        Self { covered, missed }
    }

    #[must_use]
    pub fn ratio(&self) -> f64 {
        ratio(self.covered, self.missed)
    }

    /// Sum two sets of counts, or `None` if either field overflows.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self {
            covered: self.covered.checked_add(rhs.covered)?,
            missed: self.missed.checked_add(rhs.missed)?,
        })
    }
}

/// Instruction and branch counters accumulated from one or more reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportCounts {
    pub instructions: CoverageCounts,
    pub branches: CoverageCounts,
}

impl ReportCounts {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn coverage(&self) -> Coverage {
        Coverage {
            instructions: self.instructions.ratio(),
            branches: self.branches.ratio(),
        }
    }

    /// Sum two reports' counters, or `None` on overflow.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self {
            instructions: self.instructions.checked_add(rhs.instructions)?,
            branches: self.branches.checked_add(rhs.branches)?,
        })
    }
}

/// Final coverage ratios, each normally within `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coverage {
    /// Instruction coverage.
    pub instructions: f64,
    /// Branch coverage.
    pub branches: f64,
}
