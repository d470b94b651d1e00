//! Problems reported against sketch tabs.

use serde::Serialize;

/// Whether a problem belongs to a line or to the sketch as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProblemKind {
    /// A parse problem located on a tab line.
    Syntax,
    /// A problem with the sketch layout itself.
    Sketch,
}

/// What a problem's range is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RangeBasis {
    /// Character offsets into the tab's document.
    Document,
    /// Character offsets into the problem's line.
    Line,
}

/// How much of a line a problem covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum IssueShape {
    /// The whole line.
    FullLine,
    /// `max(column, 1)` characters from the start of the line.
    #[default]
    Column,
}

/// A problem attributed to a tab line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    /// Index of the tab in the sketch.
    pub tab_index: usize,
    /// Line within the tab, 0-based.
    pub line: usize,
    /// Message shown to the user.
    pub message: String,
    /// Start of the highlighted range.
    pub range_start: usize,
    /// End of the highlighted range, exclusive.
    pub range_end: usize,
    /// Line or sketch problem.
    pub kind: ProblemKind,
    /// What the range offsets count from.
    pub basis: RangeBasis,
}

impl Problem {
    /// A sketch-level problem shown on the first line of the primary tab.
    pub fn sketch(message: impl Into<String>) -> Self {
        Self {
            tab_index: 0,
            line: 0,
            message: message.into(),
            range_start: 0,
            range_end: 1,
            kind: ProblemKind::Sketch,
            basis: RangeBasis::Line,
        }
    }

    /// Length of the highlighted range.
    #[must_use]
    pub fn range_len(&self) -> usize {
        self.range_end.saturating_sub(self.range_start)
    }
}
