//! Turning everything a pass and its parser reported into problems.

use sketch_preproc::{PreprocessedSketch, RawIssue};
use tracing::{debug, warn};

use crate::document::DocumentSource;
use crate::error::MappingError;
use crate::localize::Localizer;
use crate::mapper::{map, map_in_pass};
use crate::prior_token::relocate;
use crate::problem::{IssueShape, Problem};
use crate::simplify::Simplifier;

/// Simplifies, relocates and maps issues for one pass.
#[derive(Debug, Clone, Copy)]
pub struct IssueEmitter<'a> {
    simplifier: Simplifier<'a>,
    shape: IssueShape,
}

impl<'a> IssueEmitter<'a> {
    /// Creates an emitter producing column ranges.
    pub fn new(localizer: &'a dyn Localizer) -> Self {
        Self {
            simplifier: Simplifier::new(localizer),
            shape: IssueShape::default(),
        }
    }

    /// Uses `shape` for the ranges of line problems.
    #[must_use]
    pub fn with_shape(mut self, shape: IssueShape) -> Self {
        self.shape = shape;
        self
    }

    /// The simplifier applied to every message.
    pub fn simplifier(&self) -> &Simplifier<'a> {
        &self.simplifier
    }

    /// Problems for a pass and the raw issues its parser reported.
    ///
    /// All sketch-level problems are folded into one problem that comes
    /// first, followed by the pass's own issues and then `raw_issues` in
    /// order. Issues that cannot be mapped are skipped.
    pub fn problems<D>(
        &self,
        pass: &PreprocessedSketch,
        raw_issues: &[RawIssue],
        documents: &D,
    ) -> Vec<Problem>
    where
        D: DocumentSource + ?Sized,
    {
        let mut problems = Vec::new();
        if !pass.sketch_problems.is_empty() {
            let messages: Vec<String> =
                pass.sketch_problems.iter().map(ToString::to_string).collect();
            problems.push(Problem::sketch(messages.join("; ")));
        }

        // Pass issues are already in tab coordinates.
        let strings = self.simplifier.strings();
        for issue in &pass.issues {
            let raw = issue.to_raw(strings.local_str(issue.message_key()));
            match map(&raw, &pass.offsets, documents, self.shape) {
                Ok(problem) => problems.push(problem),
                Err(err) => warn!(line = raw.line, column = raw.column, "skipping issue: {err}"),
            }
        }
        for issue in raw_issues {
            match self.emit(pass, issue, documents) {
                Ok(problem) => problems.push(problem),
                Err(err) => warn!(
                    line = issue.line,
                    column = issue.column,
                    "skipping issue: {err}"
                ),
            }
        }
        debug!(
            raw = raw_issues.len(),
            problems = problems.len(),
            "emitted problems"
        );
        problems
    }

    /// Maps a single issue reported against `pass.program`, simplifying its
    /// message first.
    pub fn emit<D>(
        &self,
        pass: &PreprocessedSketch,
        issue: &RawIssue,
        documents: &D,
    ) -> Result<Problem, MappingError>
    where
        D: DocumentSource + ?Sized,
    {
        let Some(simplification) = self.simplifier.simplify(&issue.message) else {
            return map_in_pass(issue, pass, documents, self.shape);
        };
        let mut located = RawIssue::new(issue.line, issue.column, simplification.message);
        if simplification.attribute_to_prior_token {
            if let (Ok(line), Ok(column)) =
                (usize::try_from(issue.line), usize::try_from(issue.column))
            {
                let (line, column) = relocate(&pass.program, line, column);
                located.line = i64::try_from(line).unwrap_or(i64::MAX);
                located.column = i64::try_from(column).unwrap_or(i64::MAX);
            }
        }
        map_in_pass(&located, pass, documents, self.shape)
    }
}
