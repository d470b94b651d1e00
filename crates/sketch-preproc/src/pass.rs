//! The preprocessing pass: merge, rewrite, wrap.

use serde::Serialize;
use smol_str::SmolStr;
use text_size::TextSize;
use tracing::debug;

use crate::config::SketchConfig;
use crate::error::PreprocessError;
use crate::imports::ImportGroups;
use crate::issue::PassIssue;
use crate::offsets::TabOffsetTable;
use crate::origins::{LineOrigin, LineOrigins};
use crate::rewrite::analysis::{analyze, SizeInfo, SketchMode};
use crate::rewrite::codegen::{CodeWriter, Scaffold};
use crate::rewrite::{OffsetMap, Rewriter};
use crate::tab::{Sketch, TabKind};

/// Result of one preprocessing pass.
#[derive(Debug, Clone, Serialize)]
pub struct PreprocessedSketch {
    /// Name of the generated class.
    pub class_name: SmolStr,
    /// Header, rewritten sketch tabs and footer.
    pub program: String,
    /// Lines before the first tab's content.
    pub header_line_count: usize,
    /// Start line of each merged tab.
    pub offsets: TabOffsetTable,
    /// Origin of every program line.
    pub origins: LineOrigins,
    /// Byte offsets of the merged tabs before and after rewriting.
    #[serde(skip)]
    pub offset_map: OffsetMap,
    /// The merged tabs before rewriting.
    #[serde(skip)]
    pub source_body: String,
    /// How the sketch was wrapped.
    pub mode: SketchMode,
    /// Imports emitted in the header.
    pub imports: ImportGroups,
    /// The `size()` call moved into `settings()`, if any.
    pub size: Option<SizeInfo>,
    /// Issues found by the pass itself.
    pub issues: Vec<PassIssue>,
    /// Non-fatal sketch-level problems.
    #[serde(skip)]
    pub sketch_problems: Vec<PreprocessError>,
    /// Indices of tabs passed through untouched.
    pub java_tabs: Vec<usize>,
    /// Whether the imports differ from the previously published pass. Set
    /// by [`PreprocessService`](crate::service::PreprocessService).
    pub imports_changed: bool,
}

/// A program position traced back to the tab text it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourcePosition {
    /// Index of the tab in the sketch.
    pub tab_index: usize,
    /// Line within the tab, 0-based.
    pub line: usize,
    /// Character column within the line, 0-based.
    pub column: usize,
}

impl PreprocessedSketch {
    /// Number of lines in the generated program.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.program.bytes().filter(|b| *b == b'\n').count()
    }

    /// Traces a program line and character column back to the tab.
    ///
    /// Columns on rewritten lines go back through [`OffsetMap::to_input`], so
    /// they point into the tab as written. Scaffolding lines resolve like
    /// [`LineOrigins::resolve`], at column 0. Returns `None` when no tab
    /// was merged.
    #[must_use]
    pub fn source_position(&self, line: usize, column: usize) -> Option<SourcePosition> {
        let location = self.origins.resolve(line)?;
        let at_line_start = SourcePosition {
            tab_index: location.tab_index,
            line: location.local_line,
            column: 0,
        };
        if !matches!(self.origins.get(line), Some(LineOrigin::Source { .. })) {
            return Some(at_line_start);
        }
        let column = self.source_column(line, column).unwrap_or(0);
        Some(SourcePosition {
            column,
            ..at_line_start
        })
    }

    fn source_column(&self, line: usize, column: usize) -> Option<usize> {
        let body_line = line.checked_sub(self.header_line_count)?;
        let body_start = line_start(&self.program, self.header_line_count)?;
        let program_start = line_start(&self.program, line)?;
        let program_line = self.program[program_start..].split('\n').next().unwrap_or("");
        let byte_column = program_line
            .char_indices()
            .nth(column)
            .map_or(program_line.len(), |(idx, _)| idx);

        let output = TextSize::try_from(program_start + byte_column - body_start).ok()?;
        let input = usize::from(self.offset_map.to_input(output));

        let source_start = line_start(&self.source_body, body_line)?;
        let source_end = self.source_body[source_start..]
            .find('\n')
            .map_or(self.source_body.len(), |idx| source_start + idx);
        let input = input.clamp(source_start, source_end);
        Some(self.source_body[source_start..input].chars().count())
    }
}

/// Runs a preprocessing pass over an immutable sketch snapshot.
pub fn preprocess(
    sketch: &Sketch,
    config: &SketchConfig,
) -> Result<PreprocessedSketch, PreprocessError> {
    sketch.validate()?;
    let sketch_problems = sketch.line_count_mismatches();
    let settings = &config.preprocessor;

    let mut body = String::new();
    let mut merged = Vec::new();
    for (index, tab) in sketch.sketch_tabs() {
        body.push_str(&tab.content);
        body.push('\n');
        merged.push((index, tab.counted_lines()));
    }
    let java_tabs = sketch
        .tabs()
        .iter()
        .enumerate()
        .filter(|(_, tab)| tab.kind() == TabKind::Java)
        .map(|(index, _)| index)
        .collect();

    let analysis = analyze(&body, &settings.runtime_class);
    let mode = analysis.mode();

    let mut rewriter = Rewriter::new(&body);
    let size = analysis.apply(mode, &mut rewriter, settings.substitute_unicode)?;
    let (mut rewritten, offset_map) = rewriter.finish();
    let body_lines = normalize_trailing_newlines(&mut rewritten);

    let found = analysis
        .imports
        .iter()
        .map(|import| import.statement.clone())
        .collect();
    let imports = ImportGroups::new(
        &settings.code_folder_packages,
        &settings.default_imports,
        found,
    );

    let scaffold = Scaffold {
        class_name: sketch.name(),
        mode,
        config: settings,
        export: &config.export,
        imports: &imports,
        size: size.as_ref(),
        found_main: analysis.found_main,
    };
    let mut header = CodeWriter::new();
    scaffold.write_header(&mut header);
    let header_line_count = header.line_count();
    let mut footer = CodeWriter::new();
    scaffold.write_footer(&mut footer);
    let footer_line_count = footer.line_count();

    let offsets = TabOffsetTable::build(header_line_count, merged.iter().copied());

    let mut origins = LineOrigins::new();
    origins.push_synthetic(header_line_count);
    for (index, lines) in &merged {
        origins.push_tab(*index, *lines);
    }
    origins.truncate(header_line_count + body_lines);
    origins.push_synthetic(footer_line_count);

    let issues = analysis
        .nested_imports
        .iter()
        .map(|offset| {
            let (line, column) = line_column(&body, *offset);
            PassIssue::ImportNotAllowed {
                line: header_line_count + line,
                column,
            }
        })
        .collect();

    let mut program = header.finish();
    program.push_str(&rewritten);
    program.push_str(&footer.finish());

    debug!(
        sketch = %sketch.name(),
        ?mode,
        tabs = merged.len(),
        header_lines = header_line_count,
        lines = origins.len(),
        "preprocessed sketch"
    );

    Ok(PreprocessedSketch {
        class_name: SmolStr::new(sketch.name()),
        program,
        header_line_count,
        offsets,
        origins,
        offset_map,
        source_body: body,
        mode,
        imports,
        size,
        issues,
        sketch_problems,
        java_tabs,
        imports_changed: false,
    })
}

/// Leaves exactly one trailing line break and returns the line count.
fn normalize_trailing_newlines(text: &mut String) -> usize {
    let keep = text.trim_end_matches(['\n', '\r']).len();
    text.truncate(keep);
    text.push('\n');
    text.bytes().filter(|b| *b == b'\n').count()
}

/// Byte offset at which 0-based `line` of `text` starts.
fn line_start(text: &str, line: usize) -> Option<usize> {
    match line.checked_sub(1) {
        None => Some(0),
        Some(previous) => text.match_indices('\n').nth(previous).map(|(idx, _)| idx + 1),
    }
}

/// 0-based line and character column of `offset` in `text`.
fn line_column(text: &str, offset: TextSize) -> (usize, usize) {
    let before = &text[..usize::from(offset)];
    let line = before.bytes().filter(|b| *b == b'\n').count();
    let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
    (line, before[line_start..].chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_newlines_collapse() {
        let mut text = "a;\n\n\n".to_string();
        assert_eq!(normalize_trailing_newlines(&mut text), 1);
        assert_eq!(text, "a;\n");

        let mut empty = "\n".to_string();
        assert_eq!(normalize_trailing_newlines(&mut empty), 1);
    }

    #[test]
    fn columns_count_characters() {
        let text = "a\n  \u{e9}import x;";
        assert_eq!(line_column(text, TextSize::from(6)), (1, 3));
        assert_eq!(line_column(text, TextSize::from(0)), (0, 0));
    }

    #[test]
    fn line_starts() {
        let text = "ab\n\ncd";
        assert_eq!(line_start(text, 0), Some(0));
        assert_eq!(line_start(text, 1), Some(3));
        assert_eq!(line_start(text, 2), Some(4));
        assert_eq!(line_start(text, 3), None);
    }
}
