//! Line-preserving source rewriting.
//!
//! Edits are insertions and in-line replacements. An inserted text may not
//! contain a line break, and a replacement re-emits every line break of the
//! text it replaces, so line `n` of the input is always line `n` of the
//! output. The diagnostic mapping relies on that.

pub mod analysis;
pub mod codegen;

use text_size::{TextRange, TextSize};
use tracing::debug;

use crate::error::PreprocessError;

/// A single pending edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Input range to replace; empty for an insertion.
    pub range: TextRange,
    /// Replacement text, never containing a line break.
    pub text: String,
}

impl Edit {
    /// Whether this edit only inserts text.
    #[must_use]
    pub fn is_insert(&self) -> bool {
        self.range.is_empty()
    }
}

/// Collects edits over a source text and applies them in one go.
#[derive(Debug)]
pub struct Rewriter<'src> {
    source: &'src str,
    edits: Vec<Edit>,
}

impl<'src> Rewriter<'src> {
    /// Creates a rewriter with no edits.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            edits: Vec::new(),
        }
    }

    /// Returns the text being rewritten.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Inserts `text` before `offset`.
    pub fn insert(
        &mut self,
        offset: TextSize,
        text: impl Into<String>,
    ) -> Result<(), PreprocessError> {
        self.replace(TextRange::empty(offset), text)
    }

    /// Replaces `range` with `text`, keeping the range's line breaks.
    pub fn replace(
        &mut self,
        range: TextRange,
        text: impl Into<String>,
    ) -> Result<(), PreprocessError> {
        let text = text.into();
        if text.contains('\n') || text.contains('\r') {
            return Err(PreprocessError::LineBreakInEdit);
        }
        self.edits.push(Edit { range, text });
        Ok(())
    }

    /// Deletes `range`, keeping its line breaks.
    pub fn delete(&mut self, range: TextRange) {
        self.edits.push(Edit {
            range,
            text: String::new(),
        });
    }

    /// Returns the number of pending edits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Returns `true` if there are no pending edits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Applies all edits and returns the output with its offset map.
    ///
    /// Edits are applied in source order. At a shared offset insertions come
    /// before a replacement and keep the order they were added in. An edit
    /// overlapping an earlier replacement is dropped.
    #[must_use]
    pub fn finish(mut self) -> (String, OffsetMap) {
        self.edits
            .sort_by_key(|edit| (edit.range.start(), !edit.is_insert()));

        let mut output = String::with_capacity(self.source.len() + self.edits.len() * 8);
        let mut pieces = Vec::with_capacity(self.edits.len() * 2 + 1);
        let mut cursor = TextSize::from(0);
        let mut dropped = 0usize;

        for edit in &self.edits {
            if edit.range.start() < cursor {
                dropped += 1;
                continue;
            }
            push_copied(&mut output, &mut pieces, self.source, cursor, edit.range.start());

            let out_start = text_len(&output);
            output.push_str(&edit.text);
            output.extend(self.source[edit.range].chars().filter(|c| *c == '\n'));
            pieces.push(Piece {
                input: edit.range,
                output: TextRange::new(out_start, text_len(&output)),
                copied: false,
            });
            cursor = edit.range.end();
        }
        push_copied(&mut output, &mut pieces, self.source, cursor, text_len(self.source));

        debug!(
            edits = self.edits.len(),
            dropped,
            "applied rewrite edits"
        );

        let map = OffsetMap {
            pieces,
            input_len: text_len(self.source),
            output_len: text_len(&output),
        };
        (output, map)
    }
}

fn text_len(text: &str) -> TextSize {
    TextSize::of(text)
}

fn push_copied(
    output: &mut String,
    pieces: &mut Vec<Piece>,
    source: &str,
    from: TextSize,
    to: TextSize,
) {
    if from >= to {
        return;
    }
    let out_start = text_len(output);
    output.push_str(&source[TextRange::new(from, to)]);
    pieces.push(Piece {
        input: TextRange::new(from, to),
        output: TextRange::new(out_start, text_len(output)),
        copied: true,
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Piece {
    input: TextRange,
    output: TextRange,
    copied: bool,
}

/// Maps byte offsets between a rewriter's input and output.
///
/// Offsets inside copied text map exactly. Offsets inside a replaced range
/// map to the start of its replacement, and the other way round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetMap {
    pieces: Vec<Piece>,
    input_len: TextSize,
    output_len: TextSize,
}

impl OffsetMap {
    /// The map of a text that was not rewritten.
    #[must_use]
    pub fn identity(len: TextSize) -> Self {
        let range = TextRange::up_to(len);
        Self {
            pieces: vec![Piece {
                input: range,
                output: range,
                copied: true,
            }],
            input_len: len,
            output_len: len,
        }
    }

    /// Maps an input offset to the output.
    #[must_use]
    pub fn to_output(&self, offset: TextSize) -> TextSize {
        if offset >= self.input_len {
            return self.output_len;
        }
        let idx = self
            .pieces
            .partition_point(|piece| piece.input.end() <= offset);
        let Some(piece) = self.pieces.get(idx) else {
            return self.output_len;
        };
        if piece.copied {
            piece.output.start() + (offset - piece.input.start())
        } else {
            piece.output.start()
        }
    }

    /// Maps an output offset back to the input.
    #[must_use]
    pub fn to_input(&self, offset: TextSize) -> TextSize {
        if offset >= self.output_len {
            return self.input_len;
        }
        let idx = self
            .pieces
            .partition_point(|piece| piece.output.end() <= offset);
        let Some(piece) = self.pieces.get(idx) else {
            return self.input_len;
        };
        if piece.copied {
            piece.input.start() + (offset - piece.output.start())
        } else {
            piece.input.start()
        }
    }
}
