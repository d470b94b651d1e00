//! `sketch-diag` - Diagnostics for preprocessed sketches.
//!
//! A parser run over the generated program reports issues against program
//! lines with terse grammar messages. This crate turns them into problems a
//! sketch author can act on:
//!
//! - **Simplification**: an ordered chain of strategies rewrites the message
//!   into a short localized hint
//! - **Relocation**: issues such as a missing `;` move back to the token that
//!   caused them
//! - **Mapping**: program lines resolve to a tab, a tab line and a range
//!
//! # Example
//!
//! ```
//! use sketch_diag::simplify;
//!
//! let hint = simplify("missing ';' at '{'").unwrap();
//! assert_eq!(hint.message, "Syntax Error - Missing '}'");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod document;
pub mod emitter;
mod error;
pub mod localize;
pub mod mapper;
pub mod prior_token;
pub mod problem;
pub mod simplify;

pub use document::{DocumentLines, DocumentSource, LineOffsets, NoDocuments};
pub use emitter::IssueEmitter;
pub use error::MappingError;
pub use localize::{DefaultStrings, Localizer, Strings};
pub use mapper::{map, map_in_pass};
pub use prior_token::{relocate, PriorTokenFinder};
pub use problem::{IssueShape, Problem, ProblemKind, RangeBasis};
pub use simplify::{simplify, Simplification, Simplifier, Strategy, STRATEGY_ORDER};
