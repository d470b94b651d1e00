//! Sketch and tab model.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::error::PreprocessError;

/// Extension of tabs written in the sketch dialect.
pub const SKETCH_EXTENSION: &str = "pde";

/// Extension of tabs holding plain program text.
pub const JAVA_EXTENSION: &str = "java";

/// How a tab's content is treated by the preprocessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabKind {
    /// Sketch dialect; merged and rewritten.
    Sketch,
    /// Already-valid program text; passed through untouched.
    Java,
}

/// One named unit of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    /// Tab name without extension, unique within a sketch.
    pub name: SmolStr,
    /// File extension, `pde` or `java`.
    pub extension: SmolStr,
    /// Current text of the tab.
    pub content: String,
    /// Line count as reported by the editing surface, if any.
    pub line_count: Option<usize>,
}

impl Tab {
    /// Creates a tab without an editor-reported line count.
    pub fn new(
        name: impl Into<SmolStr>,
        extension: impl Into<SmolStr>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            extension: extension.into(),
            content: content.into(),
            line_count: None,
        }
    }

    /// Creates a sketch-dialect tab.
    pub fn sketch(name: impl Into<SmolStr>, content: impl Into<String>) -> Self {
        Self::new(name, SKETCH_EXTENSION, content)
    }

    /// Creates a plain program tab.
    pub fn java(name: impl Into<SmolStr>, content: impl Into<String>) -> Self {
        Self::new(name, JAVA_EXTENSION, content)
    }

    /// Attaches the line count reported by the editor.
    #[must_use]
    pub fn with_line_count(mut self, line_count: usize) -> Self {
        self.line_count = Some(line_count);
        self
    }

    /// Returns how this tab is processed. Anything but `pde` passes through.
    #[must_use]
    pub fn kind(&self) -> TabKind {
        if self.extension.eq_ignore_ascii_case(SKETCH_EXTENSION) {
            TabKind::Sketch
        } else {
            TabKind::Java
        }
    }

    /// Returns the number of lines the tab occupies once merged.
    ///
    /// Every merged tab is followed by a line break, so a tab always occupies
    /// at least one line and a trailing newline adds an empty line.
    #[must_use]
    pub fn counted_lines(&self) -> usize {
        self.content.bytes().filter(|b| *b == b'\n').count() + 1
    }

    /// Returns the file name of the tab.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }
}

/// An ordered list of tabs; tab 0 is primary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sketch {
    name: SmolStr,
    tabs: Vec<Tab>,
}

impl Sketch {
    /// Creates a sketch. The name becomes the generated class name.
    pub fn new(name: impl Into<SmolStr>, tabs: Vec<Tab>) -> Self {
        Self {
            name: name.into(),
            tabs,
        }
    }

    /// Returns the sketch name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns all tabs in order.
    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Returns the primary tab.
    #[must_use]
    pub fn primary(&self) -> Option<&Tab> {
        self.tabs.first()
    }

    /// Iterates over the sketch-dialect tabs with their sketch indices.
    pub fn sketch_tabs(&self) -> impl Iterator<Item = (usize, &Tab)> {
        self.tabs
            .iter()
            .enumerate()
            .filter(|(_, tab)| tab.kind() == TabKind::Sketch)
    }

    /// Checks the structural invariants a pass depends on.
    pub fn validate(&self) -> Result<(), PreprocessError> {
        let primary = self.tabs.first().ok_or(PreprocessError::NoTabs)?;
        if primary.kind() != TabKind::Sketch {
            return Err(PreprocessError::PrimaryTabNotSketch(primary.name.clone()));
        }
        let mut seen = FxHashSet::default();
        for tab in &self.tabs {
            if !seen.insert(tab.name.as_str()) {
                return Err(PreprocessError::DuplicateTabName(tab.name.clone()));
            }
        }
        Ok(())
    }

    /// Returns one mismatch per tab whose editor-reported line count
    /// disagrees with its content.
    #[must_use]
    pub fn line_count_mismatches(&self) -> Vec<PreprocessError> {
        self.tabs
            .iter()
            .filter_map(|tab| {
                let reported = tab.line_count?;
                let actual = tab.counted_lines();
                (reported != actual).then(|| PreprocessError::TabLineCountMismatch {
                    name: tab.name.clone(),
                    reported,
                    actual,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counted_lines_includes_trailing_line() {
        assert_eq!(Tab::sketch("a", "").counted_lines(), 1);
        assert_eq!(Tab::sketch("a", "x;").counted_lines(), 1);
        assert_eq!(Tab::sketch("a", "x;\ny;").counted_lines(), 2);
        assert_eq!(Tab::sketch("a", "x;\ny;\n").counted_lines(), 3);
    }

    #[test]
    fn validate_rejects_bad_layouts() {
        assert_eq!(Sketch::new("s", vec![]).validate(), Err(PreprocessError::NoTabs));

        let java_first = Sketch::new("s", vec![Tab::java("Util", "class Util {}")]);
        assert_eq!(
            java_first.validate(),
            Err(PreprocessError::PrimaryTabNotSketch("Util".into()))
        );

        let dup = Sketch::new("s", vec![Tab::sketch("s", ""), Tab::sketch("s", "")]);
        assert_eq!(
            dup.validate(),
            Err(PreprocessError::DuplicateTabName("s".into()))
        );
    }

    #[test]
    fn line_count_mismatch_is_reported_per_tab() {
        let sketch = Sketch::new(
            "s",
            vec![
                Tab::sketch("s", "a;\nb;").with_line_count(2),
                Tab::sketch("t", "c;").with_line_count(4),
            ],
        );
        let mismatches = sketch.line_count_mismatches();
        assert_eq!(mismatches.len(), 1);
        assert!(!mismatches[0].is_fatal());
    }
}
