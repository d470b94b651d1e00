//! Tab offset index.
//!
//! Records the merged-program line at which each merged tab begins and turns
//! absolute merged lines back into `(tab, local line)` pairs.

use serde::Serialize;

/// Start line of one merged tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabStart {
    /// Index of the tab in the sketch (pass-through tabs are skipped, so
    /// indices may have gaps).
    pub tab_index: usize,
    /// First merged-program line holding this tab's content.
    pub start_line: usize,
}

/// A merged line resolved to its tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TabLocation {
    /// Index of the tab in the sketch.
    pub tab_index: usize,
    /// Line within the tab, 0-based.
    pub local_line: usize,
}

/// Per-pass table of tab start lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TabOffsetTable {
    entries: Vec<TabStart>,
    header_line_count: usize,
    total_lines: usize,
}

impl TabOffsetTable {
    /// Builds the table from the header size and `(tab_index, line_count)`
    /// pairs in merge order.
    ///
    /// A tab always occupies at least one line, which keeps the starts
    /// strictly increasing.
    pub fn build(
        header_line_count: usize,
        tabs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Self {
        let mut entries = Vec::new();
        let mut next = header_line_count;
        for (tab_index, line_count) in tabs {
            entries.push(TabStart {
                tab_index,
                start_line: next,
            });
            next += line_count.max(1);
        }
        Self {
            entries,
            header_line_count,
            total_lines: next,
        }
    }

    /// Returns the entries in merge order.
    #[must_use]
    pub fn entries(&self) -> &[TabStart] {
        &self.entries
    }

    /// Returns the start line of every merged tab.
    pub fn starts(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|entry| entry.start_line)
    }

    /// Number of header lines before the first tab.
    #[must_use]
    pub fn header_line_count(&self) -> usize {
        self.header_line_count
    }

    /// Header lines plus all merged tab lines.
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Returns `true` if no tab was merged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of merged tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Resolves a merged line to its tab.
    ///
    /// Lines past the end are clamped to the last line, since parsers report
    /// end-of-file errors one line past the end. Header lines resolve to the
    /// first line of the first tab. Returns `None` only for an empty table.
    #[must_use]
    pub fn locate(&self, global_line: usize) -> Option<TabLocation> {
        let first = self.entries.first()?;
        let line = global_line.min(self.total_lines.saturating_sub(1));
        let idx = self
            .entries
            .partition_point(|entry| entry.start_line <= line);
        if idx == 0 {
            return Some(TabLocation {
                tab_index: first.tab_index,
                local_line: 0,
            });
        }
        let entry = self.entries[idx - 1];
        Some(TabLocation {
            tab_index: entry.tab_index,
            local_line: line - entry.start_line,
        })
    }

    /// Returns the merged line of `local_line` in tab `tab_index`.
    #[must_use]
    pub fn global_line(&self, tab_index: usize, local_line: usize) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.tab_index == tab_index)
            .map(|entry| entry.start_line + local_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_tabs_after_header() {
        let table = TabOffsetTable::build(3, [(0, 10), (1, 5)]);
        assert_eq!(table.starts().collect::<Vec<_>>(), vec![3, 13]);
        assert_eq!(table.total_lines(), 18);
        assert_eq!(
            table.locate(15),
            Some(TabLocation {
                tab_index: 1,
                local_line: 2
            })
        );
    }

    #[test]
    fn tab_boundaries() {
        let table = TabOffsetTable::build(0, [(0, 5), (1, 5), (2, 10)]);
        let at = |line| table.locate(line).map(|loc| (loc.tab_index, loc.local_line));
        assert_eq!(at(0), Some((0, 0)));
        assert_eq!(at(5), Some((1, 0)));
        assert_eq!(at(7), Some((1, 2)));
        assert_eq!(at(10), Some((2, 0)));
        assert_eq!(at(15), Some((2, 5)));
    }

    #[test]
    fn one_past_end_is_clamped() {
        let table = TabOffsetTable::build(2, [(0, 8), (1, 10)]);
        assert_eq!(table.total_lines(), 20);
        assert_eq!(table.locate(20), table.locate(19));
        assert_eq!(table.locate(500), table.locate(19));
    }

    #[test]
    fn header_lines_resolve_to_first_tab() {
        let table = TabOffsetTable::build(4, [(0, 3)]);
        assert_eq!(
            table.locate(1),
            Some(TabLocation {
                tab_index: 0,
                local_line: 0
            })
        );
    }

    #[test]
    fn skipped_tabs_keep_their_sketch_index() {
        let table = TabOffsetTable::build(0, [(0, 2), (2, 2)]);
        assert_eq!(table.locate(3).map(|loc| loc.tab_index), Some(2));
        assert_eq!(table.global_line(2, 1), Some(3));
        assert_eq!(table.global_line(1, 0), None);
    }

    #[test]
    fn empty_table_locates_nothing() {
        let table = TabOffsetTable::build(3, []);
        assert!(table.is_empty());
        assert_eq!(table.locate(0), None);
    }
}
