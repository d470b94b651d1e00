//! Token definitions for the sketch dialect.
//!
//! The dialect is lexically Java plus a handful of extensions. Only the
//! distinctions the preprocessor acts on get their own kinds; the remaining
//! operators share [`TokenKind::Operator`].

use logos::Logos;

fn lex_block_comment(lex: &mut logos::Lexer<TokenKind>) -> bool {
    let bytes = lex.remainder().as_bytes();
    let mut i = 0usize;

    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            lex.bump(i + 2);
            return true;
        }
        i += 1;
    }

    lex.bump(bytes.len());
    false
}

/// All token kinds of the sketch dialect.
///
/// Token kinds are divided into categories:
/// - Trivia (whitespace, comments) - preserved but not semantically significant
/// - Punctuation and operators
/// - Keywords the preprocessor looks at
/// - Literals (numbers, strings, colors)
/// - Identifiers
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[derive(Default)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    /// Whitespace (spaces, tabs, newlines, form feeds)
    #[regex(r"[ \t\r\n\x0C]+")]
    Whitespace,

    /// Single-line comment: // ...
    #[regex(r"//[^\r\n]*", allow_greedy = true)]
    LineComment,

    /// Block comment: /* ... */ (does not nest).
    #[token("/*", lex_block_comment)]
    BlockComment,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    /// `;`
    #[token(";")]
    Semicolon,

    /// `,`
    #[token(",")]
    Comma,

    /// `.`
    #[token(".")]
    Dot,

    /// `...`
    #[token("...")]
    Ellipsis,

    /// `(`
    #[token("(")]
    LParen,

    /// `)`
    #[token(")")]
    RParen,

    /// `{`
    #[token("{")]
    LBrace,

    /// `}`
    #[token("}")]
    RBrace,

    /// `[`
    #[token("[")]
    LBracket,

    /// `]`
    #[token("]")]
    RBracket,

    /// `@`
    #[token("@")]
    At,

    /// `<`
    #[token("<")]
    Lt,

    /// `>`
    #[token(">")]
    Gt,

    /// `=`
    #[token("=")]
    Assign,

    /// `*`
    #[token("*")]
    Star,

    /// Any other operator. `>>` is deliberately lexed as two `Gt` tokens so
    /// nested generic arguments close one level at a time.
    #[token("+")]
    #[token("-")]
    #[token("/")]
    #[token("%")]
    #[token("&")]
    #[token("|")]
    #[token("^")]
    #[token("!")]
    #[token("~")]
    #[token("?")]
    #[token(":")]
    #[token("==")]
    #[token("!=")]
    #[token("<=")]
    #[token(">=")]
    #[token("&&")]
    #[token("||")]
    #[token("++")]
    #[token("--")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("%=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("<<")]
    #[token("<<=")]
    #[token(">>=")]
    #[token(">>>=")]
    #[token("->")]
    #[token("::")]
    Operator,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    /// `import`
    #[token("import")]
    KwImport,

    /// `package`
    #[token("package")]
    KwPackage,

    /// `static`
    #[token("static")]
    KwStatic,

    /// `class`
    #[token("class")]
    KwClass,

    /// `interface`
    #[token("interface")]
    KwInterface,

    /// `enum`
    #[token("enum")]
    KwEnum,

    /// `extends`
    #[token("extends")]
    KwExtends,

    /// `implements`
    #[token("implements")]
    KwImplements,

    /// `throws`
    #[token("throws")]
    KwThrows,

    /// `public`
    #[token("public")]
    KwPublic,

    /// `private`
    #[token("private")]
    KwPrivate,

    /// `protected`
    #[token("protected")]
    KwProtected,

    /// `abstract`
    #[token("abstract")]
    KwAbstract,

    /// `final`
    #[token("final")]
    KwFinal,

    /// `synchronized`
    #[token("synchronized")]
    KwSynchronized,

    /// `void`
    #[token("void")]
    KwVoid,

    /// `new`
    #[token("new")]
    KwNew,

    /// Statement and expression keywords that never start a declaration.
    #[token("return")]
    #[token("if")]
    #[token("else")]
    #[token("for")]
    #[token("while")]
    #[token("do")]
    #[token("switch")]
    #[token("case")]
    #[token("default")]
    #[token("break")]
    #[token("continue")]
    #[token("try")]
    #[token("catch")]
    #[token("finally")]
    #[token("throw")]
    #[token("this")]
    #[token("super")]
    #[token("null")]
    #[token("true")]
    #[token("false")]
    #[token("instanceof")]
    #[token("transient")]
    #[token("volatile")]
    #[token("native")]
    KwOther,

    // Primitive types
    /// `boolean`
    #[token("boolean")]
    KwBoolean,

    /// `byte`
    #[token("byte")]
    KwByte,

    /// `char`
    #[token("char")]
    KwChar,

    /// `short`
    #[token("short")]
    KwShort,

    /// `int`
    #[token("int")]
    KwInt,

    /// `long`
    #[token("long")]
    KwLong,

    /// `float`
    #[token("float")]
    KwFloat,

    /// `double`
    #[token("double")]
    KwDouble,

    /// `color` (sketch extension, an alias for `int`)
    #[token("color")]
    KwColor,

    // =========================================================================
    // LITERALS
    // =========================================================================
    /// Integer literal: 42, 1_000, 0xFF, 0b1010, 10L
    #[regex(r"[0-9][0-9_]*[lL]?")]
    #[regex(r"0[xX][0-9A-Fa-f][0-9A-Fa-f_]*[lL]?")]
    #[regex(r"0[bB][01][01_]*[lL]?")]
    IntLiteral,

    /// Floating point literal: 1.5, .5, 1e3, 2f, 3.0d
    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9]+)?[fFdD]?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?[fFdD]?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+[fFdD]?")]
    #[regex(r"[0-9][0-9_]*[fFdD]")]
    FloatLiteral,

    /// Web-style color literal: #RRGGBB or #AARRGGBB
    #[regex(r"#[0-9A-Fa-f]{6}([0-9A-Fa-f]{2})?")]
    HexColor,

    /// String literal: "..."
    #[regex(r#""([^"\\\r\n]|\\.)*""#)]
    StringLiteral,

    /// Character literal: 'a', '\n'
    #[regex(r"'([^'\\\r\n]|\\.)*'")]
    CharLiteral,

    // =========================================================================
    // IDENTIFIERS
    // =========================================================================
    /// Identifier: starts with letter, underscore or dollar sign
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,

    // =========================================================================
    // SPECIAL TOKENS
    // =========================================================================
    /// Lexer error - unrecognized character or unterminated literal
    #[default]
    Error,
}

impl TokenKind {
    /// Returns `true` if this token is trivia (whitespace or comment).
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::LineComment | Self::BlockComment
        )
    }

    /// Returns `true` for the primitive type keywords, `color` included.
    pub fn is_primitive_type(self) -> bool {
        matches!(
            self,
            Self::KwBoolean
                | Self::KwByte
                | Self::KwChar
                | Self::KwShort
                | Self::KwInt
                | Self::KwLong
                | Self::KwFloat
                | Self::KwDouble
                | Self::KwColor
        )
    }

    /// Returns `true` for `public`, `private` and `protected`.
    pub fn is_visibility(self) -> bool {
        matches!(self, Self::KwPublic | Self::KwPrivate | Self::KwProtected)
    }

    /// Returns `true` for declaration modifiers (visibility included).
    pub fn is_modifier(self) -> bool {
        self.is_visibility()
            || matches!(
                self,
                Self::KwStatic | Self::KwAbstract | Self::KwFinal | Self::KwSynchronized
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<(TokenKind, &str)> {
        TokenKind::lexer(input)
            .spanned()
            .map(|(tok, span)| (tok.unwrap_or(TokenKind::Error), &input[span]))
            .collect()
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        lex(input)
            .into_iter()
            .map(|(kind, _)| kind)
            .filter(|kind| !kind.is_trivia())
            .collect()
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(kinds("import Import"), vec![TokenKind::KwImport, TokenKind::Ident]);
        assert_eq!(kinds("color Color"), vec![TokenKind::KwColor, TokenKind::Ident]);
    }

    #[test]
    fn test_integer_literals() {
        let tokens = kinds("42 1_000 0xFF 0b1010 10L");
        assert!(tokens.iter().all(|k| *k == TokenKind::IntLiteral));
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn test_float_literals() {
        let tokens = kinds("1.5 .5 1e3 2f 3.0d 4.");
        assert!(tokens.iter().all(|k| *k == TokenKind::FloatLiteral));
        assert_eq!(tokens.len(), 6);
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(kinds("#ff00CC"), vec![TokenKind::HexColor]);
        assert_eq!(kinds("#80FF00CC"), vec![TokenKind::HexColor]);
    }

    #[test]
    fn test_comments() {
        let tokens = lex("a // line\n/* block\n comment */ b");
        let comments: Vec<_> = tokens
            .iter()
            .filter(|(k, _)| matches!(k, TokenKind::LineComment | TokenKind::BlockComment))
            .map(|(_, text)| *text)
            .collect();
        assert_eq!(comments, vec!["// line", "/* block\n comment */"]);
    }

    #[test]
    fn test_unterminated_block_comment_is_error() {
        let tokens = lex("/* never closed");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].0, TokenKind::Error);
    }

    #[test]
    fn test_generics_close_one_level_at_a_time() {
        assert_eq!(
            kinds("List<List<String>>"),
            vec![
                TokenKind::Ident,
                TokenKind::Lt,
                TokenKind::Ident,
                TokenKind::Lt,
                TokenKind::Ident,
                TokenKind::Gt,
                TokenKind::Gt,
            ]
        );
    }

    #[test]
    fn test_strings() {
        let tokens = lex(r#""a \"quoted\" word" 'x' '\n'"#);
        let literals: Vec<_> = tokens
            .iter()
            .filter(|(k, _)| !k.is_trivia())
            .map(|(k, _)| *k)
            .collect();
        assert_eq!(
            literals,
            vec![
                TokenKind::StringLiteral,
                TokenKind::CharLiteral,
                TokenKind::CharLiteral
            ]
        );
    }
}
