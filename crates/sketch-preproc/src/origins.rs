//! Where each line of the generated program came from.

use serde::Serialize;

use crate::offsets::TabLocation;

/// Origin of one line of the generated program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LineOrigin {
    /// A line of a sketch tab, 0-based.
    Source {
        /// Index of the tab in the sketch.
        tab_index: usize,
        /// Line within the tab.
        line: usize,
    },
    /// Header or footer scaffolding.
    Synthetic,
}

/// Per-line origins of a generated program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineOrigins {
    lines: Vec<LineOrigin>,
}

impl LineOrigins {
    /// Creates an empty origin list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `count` scaffolding lines.
    pub fn push_synthetic(&mut self, count: usize) {
        self.lines
            .extend(std::iter::repeat(LineOrigin::Synthetic).take(count));
    }

    /// Appends the first `count` lines of tab `tab_index`.
    pub fn push_tab(&mut self, tab_index: usize, count: usize) {
        self.lines
            .extend((0..count).map(|line| LineOrigin::Source { tab_index, line }));
    }

    /// Drops every line from `len` on.
    pub fn truncate(&mut self, len: usize) {
        self.lines.truncate(len);
    }

    /// Number of lines recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if no line is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the origin of a program line.
    #[must_use]
    pub fn get(&self, line: usize) -> Option<LineOrigin> {
        self.lines.get(line).copied()
    }

    /// Iterates over the origins in program order.
    pub fn iter(&self) -> impl Iterator<Item = LineOrigin> + '_ {
        self.lines.iter().copied()
    }

    /// Resolves a program line to a tab line.
    ///
    /// Scaffolding lines resolve to the nearest preceding source line, or to
    /// the first source line when none precedes. Lines past the end are
    /// treated as the last line.
    #[must_use]
    pub fn resolve(&self, line: usize) -> Option<TabLocation> {
        let last = self.lines.len().checked_sub(1)?;
        let line = line.min(last);
        self.lines[..=line]
            .iter()
            .rev()
            .chain(self.lines[line + 1..].iter())
            .find_map(|origin| match *origin {
                LineOrigin::Source { tab_index, line } => Some(TabLocation {
                    tab_index,
                    local_line: line,
                }),
                LineOrigin::Synthetic => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LineOrigins {
        let mut origins = LineOrigins::new();
        origins.push_synthetic(2);
        origins.push_tab(0, 2);
        origins.push_tab(3, 1);
        origins.push_synthetic(3);
        origins
    }

    fn at(tab_index: usize, local_line: usize) -> Option<TabLocation> {
        Some(TabLocation {
            tab_index,
            local_line,
        })
    }

    #[test]
    fn source_lines_resolve_directly() {
        let origins = sample();
        assert_eq!(origins.len(), 8);
        assert_eq!(origins.resolve(3), at(0, 1));
        assert_eq!(origins.resolve(4), at(3, 0));
    }

    #[test]
    fn scaffolding_falls_back() {
        let origins = sample();
        assert_eq!(origins.resolve(0), at(0, 0));
        assert_eq!(origins.resolve(6), at(3, 0));
        assert_eq!(origins.resolve(100), at(3, 0));
    }

    #[test]
    fn nothing_to_resolve() {
        let mut origins = LineOrigins::new();
        assert_eq!(origins.resolve(0), None);
        origins.push_synthetic(2);
        assert_eq!(origins.resolve(1), None);
    }
}
