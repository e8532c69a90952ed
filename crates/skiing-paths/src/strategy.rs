use std::fmt;
use std::str::FromStr;

/// How [`PathFinder::solve_with`](crate::PathFinder::solve_with) visits the
/// grid. Every strategy returns the same path; they differ only in cost
/// and stack usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Resolve every cell in row-major order, then take the best.
    #[default]
    Exhaustive,
    /// Only consider peaks (cells without a strictly higher neighbour) as
    /// global candidates.
    Peaks,
    /// Resolve cells in ascending elevation order without a traversal stack.
    Ascending,
    /// Like `Ascending`, computing each elevation level on the rayon pool.
    /// Falls back to `Ascending` without the `parallel` feature.
    Parallel,
}

impl Strategy {
    /// All strategies, in declaration order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Exhaustive,
        Strategy::Peaks,
        Strategy::Ascending,
        Strategy::Parallel,
    ];

    /// Lower-case name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exhaustive => "exhaustive",
            Self::Peaks => "peaks",
            Self::Ascending => "ascending",
            Self::Parallel => "parallel",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(pub String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy {:?} (expected exhaustive, peaks, ascending or parallel)",
            self.0
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|st| st.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseStrategyError(s.to_string()))
    }
}
