//! `sketch-preproc` - Turns a multi-tab sketch into one compilable program.
//!
//! A pass merges the sketch-dialect tabs in order, rewrites the dialect
//! constructs the target language lacks, and wraps the result in a generated
//! header and footer:
//!
//! - **Tab Offset Index**: the program line at which each tab begins
//! - **Imports**: runtime, code-folder, hoisted and convenience imports
//! - **Rewriting**: line-preserving edits over the token stream
//! - **Line origins**: the tab line behind every program line
//!
//! Every edit keeps line breaks in place, so a tab line `n` always lands on
//! program line `start + n`. Diagnostics reported against the program can be
//! mapped back with [`TabOffsetTable::locate`], or with
//! [`PreprocessedSketch::source_position`] when columns matter too.
//!
//! # Example
//!
//! ```
//! use sketch_preproc::{preprocess, SketchConfig, Sketch, Tab};
//!
//! let sketch = Sketch::new("Dots", vec![Tab::sketch("Dots", "ellipse(50, 50, 10, 10);")]);
//! let mut config = SketchConfig::default();
//! config.preprocessor.testing = true;
//!
//! let result = preprocess(&sketch, &config).unwrap();
//! let first_line = result.offsets.starts().next().unwrap();
//! let line = result.program.lines().nth(first_line).unwrap();
//! assert_eq!(line, "ellipse(50, 50, 10, 10);");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
mod error;
pub mod imports;
pub mod issue;
pub mod offsets;
pub mod origins;
pub mod pass;
pub mod rewrite;
pub mod service;
pub mod tab;

pub use config::{ExportConfig, PreprocessorConfig, SketchConfig};
pub use error::{ConfigError, PreprocessError};
pub use imports::{imports_changed, ImportGroups, ImportStatement};
pub use issue::{PassIssue, RawIssue};
pub use offsets::{TabLocation, TabOffsetTable, TabStart};
pub use origins::{LineOrigin, LineOrigins};
pub use pass::{preprocess, PreprocessedSketch, SourcePosition};
pub use rewrite::analysis::{SizeInfo, SketchMode};
pub use rewrite::{Edit, OffsetMap, Rewriter};
pub use service::{PassSequencer, PassTicket, PreprocessService};
pub use tab::{Sketch, Tab, TabKind};
