//! Preprocessing and configuration errors.

#![allow(missing_docs)]

use std::path::PathBuf;

use smol_str::SmolStr;
use thiserror::Error;

/// Errors raised while preprocessing a sketch.
///
/// `NoTabs`, `DuplicateTabName` and `PrimaryTabNotSketch` fail the whole
/// pass. `TabLineCountMismatch` is reported as a sketch-level problem and the
/// pass carries on with the line count taken from the tab content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreprocessError {
    /// The sketch has no tabs at all.
    #[error("sketch has no tabs")]
    NoTabs,

    /// Two tabs share a name.
    #[error("duplicate tab name '{0}'")]
    DuplicateTabName(SmolStr),

    /// Tab 0 must be written in the sketch dialect.
    #[error("primary tab '{0}' is not a sketch tab")]
    PrimaryTabNotSketch(SmolStr),

    /// The editor-reported line count disagrees with the tab content.
    #[error("tab '{name}' reports {reported} lines but its content has {actual}")]
    TabLineCountMismatch {
        name: SmolStr,
        reported: usize,
        actual: usize,
    },

    /// An inserted or replacement text contains a line break.
    #[error("edit text may not contain a line break")]
    LineBreakInEdit,
}

impl PreprocessError {
    /// Whether this error aborts the pass.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::TabLineCountMismatch { .. })
    }
}

/// Errors raised while loading `sketchpp.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read sketch config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for the expected schema.
    #[error("failed to parse sketch config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
