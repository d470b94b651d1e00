//! `sketch-syntax` - Lexer for the sketch dialect.
//!
//! The sketch dialect is a Java-like language with a few additions (a
//! `color` primitive, `#RRGGBB` color literals, conversion calls such as
//! `int(x)`). This crate only tokenizes; parsing is done by an external
//! grammar-based parser. The preprocessor uses the token stream to find the
//! places it rewrites.
//!
//! - **Lossless**: every byte of the input is covered by exactly one token,
//!   including whitespace and comments
//! - **Error-tolerant**: unrecognized input becomes `TokenKind::Error`
//!
//! # Example
//!
//! ```
//! use sketch_syntax::lexer::{lex, TokenKind};
//!
//! let source = "color c = #FF0000;";
//! let tokens = lex(source);
//!
//! let meaningful: Vec<_> = tokens.iter()
//!     .filter(|t| !t.kind.is_trivia())
//!     .collect();
//!
//! assert_eq!(meaningful[0].kind, TokenKind::KwColor);
//! assert_eq!(meaningful[1].kind, TokenKind::Ident);
//! assert_eq!(meaningful[2].kind, TokenKind::Assign);
//! assert_eq!(meaningful[3].kind, TokenKind::HexColor);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod lexer;

pub use lexer::{lex, lex_with_text, Lexer, Token, TokenKind};
