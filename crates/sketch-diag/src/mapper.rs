//! Mapping raw issues from the generated program back to tab lines.

use sketch_preproc::{PreprocessedSketch, RawIssue, TabLocation, TabOffsetTable};

use crate::document::DocumentSource;
use crate::error::MappingError;
use crate::problem::{IssueShape, Problem, ProblemKind, RangeBasis};

/// Maps one raw issue to a problem on a tab line.
///
/// The issue's message is attached unchanged; simplify it first if wanted.
/// Lines past the end of the table are clamped to the last line. Columns are
/// taken as tab columns; use [`map_in_pass`] for issues whose columns refer
/// to the generated program.
pub fn map<D>(
    issue: &RawIssue,
    offsets: &TabOffsetTable,
    documents: &D,
    shape: IssueShape,
) -> Result<Problem, MappingError>
where
    D: DocumentSource + ?Sized,
{
    let (line, column) = position(issue)?;
    let location = offsets
        .locate(line)
        .ok_or(MappingError::EmptyOffsetTable)?;
    Ok(problem_at(location, column, &issue.message, documents, shape))
}

/// Maps a raw issue reported against `pass.program` to a problem.
///
/// Scaffolding lines and the trailing blank lines dropped from the program
/// resolve through the pass's line origins. The column is traced back
/// through the rewrite first, so it counts characters of the tab as written.
pub fn map_in_pass<D>(
    issue: &RawIssue,
    pass: &PreprocessedSketch,
    documents: &D,
    shape: IssueShape,
) -> Result<Problem, MappingError>
where
    D: DocumentSource + ?Sized,
{
    let (line, column) = position(issue)?;
    let source = pass
        .source_position(line, column)
        .ok_or(MappingError::EmptyOffsetTable)?;
    let location = TabLocation {
        tab_index: source.tab_index,
        local_line: source.line,
    };
    Ok(problem_at(location, source.column, &issue.message, documents, shape))
}

fn position(issue: &RawIssue) -> Result<(usize, usize), MappingError> {
    let line = usize::try_from(issue.line).map_err(|_| MappingError::NegativeLine(issue.line))?;
    let column =
        usize::try_from(issue.column).map_err(|_| MappingError::NegativeColumn(issue.column))?;
    Ok((line, column))
}

fn problem_at<D>(
    location: TabLocation,
    column: usize,
    message: &str,
    documents: &D,
    shape: IssueShape,
) -> Problem
where
    D: DocumentSource + ?Sized,
{
    let width = column.max(1);
    let (range_start, range_end, basis) = match documents.document(location.tab_index) {
        Some(document) => {
            let start = document.line_start_offset(location.local_line);
            let end = match shape {
                IssueShape::FullLine => {
                    let stop = document.line_stop_offset(location.local_line).max(start);
                    if stop == start {
                        stop + 1
                    } else {
                        stop
                    }
                }
                IssueShape::Column => start + width,
            };
            (start, end, RangeBasis::Document)
        }
        None => (0, width, RangeBasis::Line),
    };

    Problem {
        tab_index: location.tab_index,
        line: location.local_line,
        message: message.to_string(),
        range_start,
        range_end,
        kind: ProblemKind::Syntax,
        basis,
    }
}
