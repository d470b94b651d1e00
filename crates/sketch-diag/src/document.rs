//! Line offsets of the editor documents behind each tab.

use sketch_preproc::Sketch;

/// Character offsets of lines in a tab's document.
pub trait LineOffsets {
    /// Offset of the first character of `line`.
    fn line_start_offset(&self, line: usize) -> usize;

    /// Offset just past the last character of `line`, before its terminator.
    fn line_stop_offset(&self, line: usize) -> usize;
}

/// Looks up the document of a tab.
pub trait DocumentSource {
    /// Line offsets of tab `tab_index`, if its document is open.
    fn document(&self, tab_index: usize) -> Option<&dyn LineOffsets>;
}

/// Line offsets computed from a tab's text.
///
/// Offsets count characters, not bytes. Lines past the end resolve to the
/// last line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLines {
    lines: Vec<(usize, usize)>,
}

impl DocumentLines {
    /// Computes the line offsets of `text`.
    pub fn new(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut start = 0;
        let mut prev = None;
        let mut idx = 0;
        for ch in text.chars() {
            if ch == '\n' {
                let stop = if prev == Some('\r') { idx - 1 } else { idx };
                lines.push((start, stop));
                start = idx + 1;
            }
            prev = Some(ch);
            idx += 1;
        }
        lines.push((start, idx));
        Self { lines }
    }

    /// Documents for every tab of `sketch`, in tab order.
    pub fn for_sketch(sketch: &Sketch) -> Vec<Self> {
        sketch
            .tabs()
            .iter()
            .map(|tab| Self::new(&tab.content))
            .collect()
    }

    /// Number of lines, counting the one after a trailing line break.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, line: usize) -> (usize, usize) {
        let idx = line.min(self.lines.len().saturating_sub(1));
        self.lines.get(idx).copied().unwrap_or((0, 0))
    }
}

impl LineOffsets for DocumentLines {
    fn line_start_offset(&self, line: usize) -> usize {
        self.line(line).0
    }

    fn line_stop_offset(&self, line: usize) -> usize {
        self.line(line).1
    }
}

impl DocumentSource for [DocumentLines] {
    fn document(&self, tab_index: usize) -> Option<&dyn LineOffsets> {
        self.get(tab_index).map(|doc| doc as &dyn LineOffsets)
    }
}

impl DocumentSource for Vec<DocumentLines> {
    fn document(&self, tab_index: usize) -> Option<&dyn LineOffsets> {
        self.as_slice().document(tab_index)
    }
}

/// A source without documents; problems get line-relative ranges.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDocuments;

impl DocumentSource for NoDocuments {
    fn document(&self, _tab_index: usize) -> Option<&dyn LineOffsets> {
        None
    }
}
