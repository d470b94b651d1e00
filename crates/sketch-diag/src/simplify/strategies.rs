//! The individual simplification strategies.

use once_cell::sync::Lazy;
use regex::Regex;

use super::offending::offending_area;
use super::Simplification;
use crate::localize::Strings;

macro_rules! regex {
    ($name:ident, $pattern:literal) => {
        static $name: Lazy<Regex> =
            Lazy::new(|| Regex::new($pattern).expect(concat!(stringify!($name), " regex should compile")));
    };
}

regex!(MISSING_GENERIC_RE, r"<>'?$");
regex!(INVALID_ASSIGNMENT_RE, r"[.\n]*[0-9a-zA-Z_<>]+\s*=[\s';]*$");
regex!(MISSING_TYPE_RE, r"[a-zA-Z_]+[0-9a-zA-Z_]*\s*(=[^\n;]*)?;'?$");
regex!(
    INVALID_IDENTIFIER_RE,
    r"([.\s]*[0-9]+[a-zA-Z_<>]+[0-9a-zA-Z_<>]*|\s+\d+[a-zA-Z_<>]+|[0-9a-zA-Z_<>]+\s+[0-9]+)"
);
regex!(
    MISSING_CLASS_NAME_RE,
    r".*(class|interface)\s*[a-zA-Z0-9_]*\s+(extends|implements|<.*>)?\s*[a-zA-Z0-9_]*\s*\{.*"
);
regex!(METHOD_MISSING_NAME_RE, r"[a-zA-Z0-9_]+\s*\(.*\)\s*\{");
regex!(ERROR_ON_PARAMETER_RE, r"([a-zA-Z0-9_]+\s*,|[a-zA-Z0-9_]+\)|\([^\)]+)");
regex!(KNOWN_MISSING_RE, r".*missing '(.*)' at .*");
regex!(MISMATCHED_INPUT_RE, r"mismatched input '(.*)' expecting ");

/// A single rule that may rewrite a parser message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// A declaration header is followed by something other than `{`.
    MissingCurlyAtStart,
    /// `missing ';' at '{'`, which means a `}` is missing.
    MissingCurlyAtSemicolon,
    /// A generic type without arguments, `List<>`.
    MissingGenericType,
    /// An identifier was expected.
    MissingIdentifier,
    /// The parser names the missing token.
    KnownMissing,
    /// Code the parser did not expect.
    ExtraneousInput,
    /// A token where an operator or `;` was expected.
    MismatchedInput,
    /// An assignment with nothing on the right-hand side.
    InvalidAssignment,
    /// A declaration without a type or name.
    VariableDeclarationMissingType,
    /// An identifier starting with digits.
    InvalidIdentifier,
    /// A class or interface header without a name.
    MissingClassName,
    /// A method declaration without a name.
    MethodMissingName,
    /// A broken parameter list.
    ErrorOnParameter,
    /// An unterminated string literal.
    MissingDoubleQuote,
    /// An unterminated character literal.
    MissingSingleQuote,
    /// More `{` than `}` or the other way round.
    UnbalancedCurly,
    /// Unbalanced parentheses.
    UnbalancedParen,
    /// Unbalanced angle brackets.
    UnbalancedChevron,
    /// Catch-all for "no viable alternative" messages.
    ViableAlternative,
}

/// Strategies in the order they are tried. The first match wins.
pub const STRATEGY_ORDER: [Strategy; 19] = [
    Strategy::MissingCurlyAtStart,
    Strategy::MissingCurlyAtSemicolon,
    Strategy::MissingGenericType,
    Strategy::MissingIdentifier,
    Strategy::KnownMissing,
    Strategy::ExtraneousInput,
    Strategy::MismatchedInput,
    Strategy::InvalidAssignment,
    Strategy::VariableDeclarationMissingType,
    Strategy::InvalidIdentifier,
    Strategy::MissingClassName,
    Strategy::MethodMissingName,
    Strategy::ErrorOnParameter,
    Strategy::MissingDoubleQuote,
    Strategy::MissingSingleQuote,
    Strategy::UnbalancedCurly,
    Strategy::UnbalancedParen,
    Strategy::UnbalancedChevron,
    Strategy::ViableAlternative,
];

impl Strategy {
    /// Applies this strategy alone.
    #[must_use]
    pub fn apply(self, message: &str, strings: &Strings<'_>) -> Option<Simplification> {
        match self {
            Self::MissingCurlyAtStart => {
                let matches = message.ends_with("expecting {'throws', '{'}")
                    || message.ends_with("expecting {'throws', '{', '[', ';'}");
                matches.then(|| {
                    Simplification::new(
                        strings.local_str("editor.status.missing.left_curly_bracket"),
                    )
                })
            }
            Self::MissingCurlyAtSemicolon => (message == "missing ';' at '{'").then(|| {
                Simplification::new(strings.local_str("editor.status.missing.right_curly_bracket"))
            }),
            Self::MissingGenericType => {
                regex_hint(&MISSING_GENERIC_RE, "editor.status.bad.generic", message, strings)
            }
            Self::MissingIdentifier => message
                .to_lowercase()
                .contains("missing identifier at")
                .then(|| {
                    let name = message.replace("missing Identifier at", "");
                    Simplification::new(strings.format("editor.status.missing.name", &name))
                }),
            Self::KnownMissing => {
                if !message.to_lowercase().contains("missing") {
                    return None;
                }
                let piece = KNOWN_MISSING_RE
                    .captures(message)
                    .and_then(|caps| caps.get(1))
                    .map_or("character", |m| m.as_str());
                let mut simplification =
                    Simplification::new(strings.format("editor.status.missing.default", piece));
                simplification.attribute_to_prior_token = piece == ";";
                Some(simplification)
            }
            Self::ExtraneousInput => message.to_lowercase().contains("extraneous").then(|| {
                Simplification::new(
                    strings.format("editor.status.extraneous", &offending_area(message)),
                )
            }),
            Self::MismatchedInput => {
                if !message.to_lowercase().contains("mismatched input") {
                    return None;
                }
                let input = MISMATCHED_INPUT_RE
                    .captures(message)
                    .and_then(|caps| caps.get(1))
                    .map_or(message, |m| m.as_str());
                Some(Simplification::new(
                    strings.format("editor.status.mismatched", input),
                ))
            }
            Self::InvalidAssignment => regex_hint(
                &INVALID_ASSIGNMENT_RE,
                "editor.status.bad.assignment",
                message,
                strings,
            ),
            Self::VariableDeclarationMissingType => {
                regex_hint(&MISSING_TYPE_RE, "editor.status.missing.type", message, strings)
            }
            Self::InvalidIdentifier => regex_hint(
                &INVALID_IDENTIFIER_RE,
                "editor.status.bad.identifier",
                message,
                strings,
            ),
            Self::MissingClassName => regex_hint(
                &MISSING_CLASS_NAME_RE,
                "editor.status.missing.name",
                message,
                strings,
            ),
            Self::MethodMissingName => regex_hint(
                &METHOD_MISSING_NAME_RE,
                "editor.status.missing.name",
                message,
                strings,
            ),
            Self::ErrorOnParameter => regex_hint(
                &ERROR_ON_PARAMETER_RE,
                "editor.status.bad.parameter",
                message,
                strings,
            ),
            Self::MissingDoubleQuote => odd_count("\"", "\\\"", message, strings),
            Self::MissingSingleQuote => odd_count("'", "\\'", message, strings),
            Self::UnbalancedCurly => unbalanced("{", "}", message, strings),
            Self::UnbalancedParen => unbalanced("(", ")", message, strings),
            Self::UnbalancedChevron => unbalanced("<", ">", message, strings),
            Self::ViableAlternative => message.contains("viable alternative").then(|| {
                Simplification::new(strings.format("editor.status.error_on", &offending_area(message)))
            }),
        }
    }
}

fn regex_hint(
    pattern: &Regex,
    key: &str,
    message: &str,
    strings: &Strings<'_>,
) -> Option<Simplification> {
    pattern
        .is_match(message)
        .then(|| Simplification::new(strings.format(key, &offending_area(message))))
}

fn odd_count(
    token: &str,
    escaped: &str,
    message: &str,
    strings: &Strings<'_>,
) -> Option<Simplification> {
    let content = offending_area(message).replace(escaped, "");
    let count = content.matches(token).count();
    (count % 2 == 1)
        .then(|| Simplification::new(strings.format("editor.status.missing.default", token)))
}

fn unbalanced(
    open: &str,
    close: &str,
    message: &str,
    strings: &Strings<'_>,
) -> Option<Simplification> {
    let content = offending_area(message);
    let opens = content.matches(open).count();
    let closes = content.matches(close).count();
    if opens == closes {
        return None;
    }
    let missing = if opens < closes { open } else { close };
    Some(Simplification::new(
        strings.format("editor.status.missing.default", missing),
    ))
}
