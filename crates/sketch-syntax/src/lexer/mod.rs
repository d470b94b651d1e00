//! Lexer for the sketch dialect.
//!
//! This module provides a lexer that tokenizes sketch source code into a
//! stream of tokens with their positions in the source text.

mod tokens;

pub use tokens::TokenKind;

use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The byte range of the token in the source text.
    pub range: TextRange,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, range: TextRange) -> Self {
        Self { kind, range }
    }

    /// Returns the length of the token in bytes.
    #[must_use]
    pub fn len(&self) -> TextSize {
        self.range.len()
    }

    /// Returns true if the token has zero length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Returns the text of this token within `source`.
    #[must_use]
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[self.range]
    }
}

/// Lexer for sketch source code.
///
/// The lexer is an iterator over tokens. Unrecognized characters (and
/// unterminated string or character literals) come back as
/// `TokenKind::Error` so the stream always covers the whole input.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    source: &'src str,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            source,
        }
    }

    /// Returns the source text being lexed.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Returns the text of the current token.
    #[must_use]
    pub fn slice(&self) -> &'src str {
        self.inner.slice()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let kind = self.inner.next()?;
        let span = self.inner.span();

        let kind = kind.unwrap_or(TokenKind::Error);
        let range = TextRange::new(
            TextSize::from(span.start as u32),
            TextSize::from(span.end as u32),
        );

        Some(Token::new(kind, range))
    }
}

/// Lex the entire source and return all tokens.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Lex source and return tokens paired with their text.
///
/// Useful for debugging and testing.
#[must_use]
pub fn lex_with_text(source: &str) -> Vec<(Token, &str)> {
    Lexer::new(source)
        .map(|token| (token, token.text(source)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_basic() {
        let source = "int x = 42;";
        let tokens = lex(source);

        let non_trivia: Vec<_> = tokens.iter().filter(|t| !t.kind.is_trivia()).collect();
        assert_eq!(non_trivia.len(), 5);
        assert_eq!(non_trivia[0].kind, TokenKind::KwInt);
        assert_eq!(non_trivia[1].kind, TokenKind::Ident);
        assert_eq!(non_trivia[2].kind, TokenKind::Assign);
        assert_eq!(non_trivia[3].kind, TokenKind::IntLiteral);
        assert_eq!(non_trivia[4].kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_lexer_preserves_positions() {
        let source = "abc = 123";
        let tokens = lex(source);

        assert_eq!(tokens[0].range, TextRange::new(0.into(), 3.into()));
        assert_eq!(tokens[1].range, TextRange::new(3.into(), 4.into()));
        assert_eq!(tokens[2].range, TextRange::new(4.into(), 5.into()));
    }

    #[test]
    fn test_tokens_cover_input() {
        let source = "void draw() {\n  ellipse(50, 50, 80.5, 80); // circle\n}\n";
        let tokens = lex(source);

        let mut cursor = TextSize::from(0);
        for token in &tokens {
            assert_eq!(token.range.start(), cursor);
            cursor = token.range.end();
        }
        assert_eq!(usize::from(cursor), source.len());
    }

    #[test]
    fn test_lex_with_text() {
        let source = "float f = .5;";
        let tokens = lex_with_text(source);

        let non_trivia: Vec<_> = tokens.iter().filter(|(t, _)| !t.kind.is_trivia()).collect();
        assert_eq!(non_trivia[0].1, "float");
        assert_eq!(non_trivia[1].1, "f");
        assert_eq!(non_trivia[3].1, ".5");
        assert_eq!(non_trivia[3].0.kind, TokenKind::FloatLiteral);
    }

    #[test]
    fn test_active_sketch() {
        let source = r#"
import java.util.List;

color bg = #336699;

void setup() {
  size(400, 400);
}

void draw() {
  background(bg);
  text("hi", 10, 20);
}
"#;

        let tokens = lex(source);
        let non_trivia: Vec<_> = tokens.iter().filter(|t| !t.kind.is_trivia()).collect();

        assert!(non_trivia.iter().any(|t| t.kind == TokenKind::KwImport));
        assert!(non_trivia.iter().any(|t| t.kind == TokenKind::HexColor));
        assert!(non_trivia.iter().any(|t| t.kind == TokenKind::KwVoid));
        assert!(non_trivia
            .iter()
            .any(|t| t.kind == TokenKind::StringLiteral));
        assert!(!non_trivia.iter().any(|t| t.kind == TokenKind::Error));
    }
}
