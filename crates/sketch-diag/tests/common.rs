//! Shared helpers for diagnostics tests.
#![allow(dead_code, unused_imports)]

use std::fmt::Write as _;

pub use sketch_diag::{
    map, map_in_pass, simplify, DefaultStrings, DocumentLines, IssueEmitter, IssueShape, MappingError,
    NoDocuments, Problem, ProblemKind, RangeBasis, Simplifier, Strategy, STRATEGY_ORDER,
};
pub use sketch_preproc::{
    preprocess, LineOrigin, PreprocessedSketch, RawIssue, Sketch, SketchConfig, Tab, TabOffsetTable,
};

/// Preprocesses `tabs` as a sketch named `Sketch` without the date line.
pub fn run_tabs(tabs: Vec<Tab>) -> (Sketch, PreprocessedSketch) {
    let mut config = SketchConfig::default();
    config.preprocessor.testing = true;
    let sketch = Sketch::new("Sketch", tabs);
    let result = preprocess(&sketch, &config).expect("preprocess");
    (sketch, result)
}

/// A raw issue on line `local_line` of tab `tab_index`.
pub fn issue_at(
    result: &PreprocessedSketch,
    tab_index: usize,
    local_line: usize,
    column: i64,
    message: &str,
) -> RawIssue {
    let line = result
        .offsets
        .global_line(tab_index, local_line)
        .expect("tab is merged");
    RawIssue::new(line as i64, column, message)
}

/// One problem per line: kind, tab and line, range, message.
pub fn render(problems: &[Problem]) -> String {
    let mut out = String::new();
    for problem in problems {
        let _ = writeln!(
            out,
            "{:?} {}:{} [{}..{}] {}",
            problem.kind,
            problem.tab_index,
            problem.line,
            problem.range_start,
            problem.range_end,
            problem.message
        );
    }
    out
}
