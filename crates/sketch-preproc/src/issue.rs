//! Issues reported against the generated program.

use serde::{Deserialize, Serialize};

/// A problem as reported by the parser: absolute 0-based line and column in
/// the generated program, plus the parser's message.
///
/// Line and column are signed so that negative values, which violate the
/// parser contract, can be detected instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawIssue {
    /// Program line, 0-based.
    pub line: i64,
    /// Character column within the line, 0-based.
    pub column: i64,
    /// The parser's message.
    pub message: String,
}

impl RawIssue {
    /// Creates an issue.
    pub fn new(line: i64, column: i64, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            message: message.into(),
        }
    }
}

/// A problem found by the preprocessing pass itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PassIssue {
    /// An `import` nested inside a class or method body.
    ImportNotAllowed {
        /// Program line of the `import` keyword.
        line: usize,
        /// Character column of the `import` keyword.
        column: usize,
    },
}

impl PassIssue {
    /// Localization key of the message.
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::ImportNotAllowed { .. } => "editor.status.bad.import",
        }
    }

    /// Generated-program line of the issue.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::ImportNotAllowed { line, .. } => *line,
        }
    }

    /// Column of the issue within its line.
    #[must_use]
    pub fn column(&self) -> usize {
        match self {
            Self::ImportNotAllowed { column, .. } => *column,
        }
    }

    /// Converts the issue into a raw issue carrying `message`.
    #[must_use]
    pub fn to_raw(&self, message: impl Into<String>) -> RawIssue {
        RawIssue {
            line: i64::try_from(self.line()).unwrap_or(i64::MAX),
            column: i64::try_from(self.column()).unwrap_or(i64::MAX),
            message: message.into(),
        }
    }
}
