//! Moving an issue back to the token before it.
//!
//! A missing `;` is reported on the first token after the gap, which usually
//! sits on the next line. Reading the program backwards from the reported
//! line finds the last real token before it, skipping whitespace and
//! comments.

/// States of the backwards scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Not yet sure whether the input is code or skipped text.
    Unknown,
    /// Inside something that looks like code, unless a `//` turns up.
    PossibleToken,
    /// Code followed by a `/`; another `/` makes it a line comment.
    TokenOrMaybeLineComment,
    /// A lone `/`, which may close a block comment or start a line comment.
    TokenOrMaybeComment,
    BlockComment,
    /// A `*` inside a block comment; a `/` leaves the comment.
    MaybeLeaveBlockComment,
    /// Terminal.
    Token,
}

/// Finds the last token of a text when fed its characters in reverse.
#[derive(Debug, Clone)]
pub struct PriorTokenFinder {
    state: State,
    token_position: Option<usize>,
    char_position: usize,
}

impl Default for PriorTokenFinder {
    fn default() -> Self {
        Self {
            state: State::Unknown,
            token_position: None,
            char_position: 0,
        }
    }
}

impl PriorTokenFinder {
    /// Creates a finder that has read nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once a whole line holding a token has been read.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state == State::Token
    }

    /// Number of characters read before the last character of the token.
    #[must_use]
    pub fn token_position(&self) -> Option<usize> {
        self.token_position
    }

    /// Feeds the next character, going backwards.
    pub fn step(&mut self, ch: char) {
        match self.state {
            State::Unknown => {
                if !is_whitespace(ch) {
                    self.token_position = Some(self.char_position);
                    self.state = if ch == '/' {
                        State::TokenOrMaybeComment
                    } else {
                        State::PossibleToken
                    };
                }
            }
            State::PossibleToken => match ch {
                '\n' => self.state = State::Token,
                '/' => self.state = State::TokenOrMaybeLineComment,
                _ => {}
            },
            State::TokenOrMaybeLineComment => match ch {
                '\n' => self.state = State::Token,
                '/' => self.back_to_unknown(),
                _ => self.state = State::PossibleToken,
            },
            State::TokenOrMaybeComment => match ch {
                '\n' => self.state = State::Token,
                '/' => self.back_to_unknown(),
                '*' => {
                    self.token_position = Some(self.char_position);
                    self.state = State::BlockComment;
                }
                _ => self.state = State::PossibleToken,
            },
            State::BlockComment => {
                if ch == '*' {
                    self.state = State::MaybeLeaveBlockComment;
                }
            }
            State::MaybeLeaveBlockComment => match ch {
                '/' => self.state = State::Unknown,
                '*' => {}
                _ => self.state = State::BlockComment,
            },
            State::Token => {}
        }
        self.char_position += 1;
    }

    fn back_to_unknown(&mut self) {
        self.token_position = None;
        self.state = State::Unknown;
    }
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n' | '\x0C')
}

/// Moves an issue at `(line, column)` of `program` to the end of the last
/// token on an earlier line.
///
/// Lines and columns are 0-based; columns count characters. Issues on the
/// first line stay where they are.
#[must_use]
pub fn relocate(program: &str, line: usize, column: usize) -> (usize, usize) {
    if line == 0 {
        return (line, column);
    }
    let prior: Vec<char> = contents_before_line(program, line).chars().collect();

    let mut finder = PriorTokenFinder::new();
    for ch in prior.iter().rev() {
        if finder.is_done() {
            break;
        }
        finder.step(*ch);
    }

    let (start, lines_offset) = match finder.token_position() {
        Some(position) => {
            let start = prior.len() - position;
            let lines = prior[start..].iter().filter(|ch| **ch == '\n').count();
            (start, lines)
        }
        None => (prior.len(), 0),
    };
    let line_start = prior[..start]
        .iter()
        .rposition(|ch| *ch == '\n')
        .map_or(0, |idx| idx + 1);
    (line.saturating_sub(lines_offset), start - line_start)
}

/// Everything before `line`, line breaks included.
fn contents_before_line(program: &str, line: usize) -> &str {
    let mut seen = 0;
    for (idx, byte) in program.bytes().enumerate() {
        if seen == line {
            return &program[..idx];
        }
        if byte == b'\n' {
            seen += 1;
        }
    }
    program
}

#[cfg(test)]
mod tests {
    use super::*;

    fn last_token(text: &str) -> Option<usize> {
        let mut finder = PriorTokenFinder::new();
        for ch in text.chars().rev() {
            if finder.is_done() {
                break;
            }
            finder.step(ch);
        }
        finder.token_position()
    }

    #[test]
    fn skips_trailing_whitespace() {
        assert_eq!(last_token("int x = 1\n  \n"), Some(4));
        assert_eq!(last_token("   \n\t"), None);
    }

    #[test]
    fn skips_line_comments() {
        let text = "x = 1 // set x\n";
        assert_eq!(last_token(text), Some(text.len() - "x = 1".len()));
    }

    #[test]
    fn skips_block_comments() {
        let text = "x = 1 /* done */\n";
        assert_eq!(last_token(text), Some(text.len() - "x = 1".len()));
    }

    #[test]
    fn moves_missing_semicolon_to_previous_line() {
        let program = "class A {\n  int x = 1\n\n  int y = 2;\n}\n";
        assert_eq!(relocate(program, 3, 2), (1, 11));
    }

    #[test]
    fn comments_between_are_skipped() {
        let program = "foo()\n// note\n\nbar();\n";
        assert_eq!(relocate(program, 3, 0), (0, 5));
    }

    #[test]
    fn first_line_is_kept() {
        assert_eq!(relocate("x\n", 0, 4), (0, 4));
    }

    #[test]
    fn token_on_first_line_without_break_before() {
        assert_eq!(relocate("a\nb\n", 1, 0), (0, 1));
    }
}
