//! Message localization.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Key of the template every simplified message is wrapped in.
pub const SYNTAX_ERROR_KEY: &str = "editor.status.error.syntax";

/// Keys of every template a hint is rendered from.
pub const HINT_KEYS: [&str; 13] = [
    "editor.status.bad.assignment",
    "editor.status.bad.generic",
    "editor.status.bad.identifier",
    "editor.status.bad.import",
    "editor.status.bad.parameter",
    "editor.status.error_on",
    "editor.status.extraneous",
    "editor.status.mismatched",
    "editor.status.missing.default",
    "editor.status.missing.left_curly_bracket",
    "editor.status.missing.name",
    "editor.status.missing.right_curly_bracket",
    "editor.status.missing.type",
];

/// Looks up localized message templates.
///
/// Templates contain one `%s` (or `%c`) placeholder.
pub trait Localizer {
    /// The template for `key`, or `None` to use the built-in one.
    fn text(&self, key: &str) -> Option<String>;
}

impl<F> Localizer for F
where
    F: Fn(&str) -> Option<String>,
{
    fn text(&self, key: &str) -> Option<String> {
        self(key)
    }
}

impl Localizer for BTreeMap<String, String> {
    fn text(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

static DEFAULT_STRINGS: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("editor.status.error", "Error"),
        (SYNTAX_ERROR_KEY, "Syntax Error - %s"),
        ("editor.status.error_on", "Error on \"%s\""),
        ("editor.status.bad.assignment", "Error on variable assignment near %s?"),
        ("editor.status.bad.identifier", "Identifier cannot start with digits near %s?"),
        ("editor.status.bad.parameter", "Error on parameter or method declaration near %s?"),
        ("editor.status.bad.generic", "Possibly missing type in generic near %s?"),
        ("editor.status.bad.import", "Import not allowed here."),
        ("editor.status.extraneous", "Unexpected extra code near %s?"),
        ("editor.status.mismatched", "Missing operator or semicolon near %s?"),
        ("editor.status.missing.name", "Missing name near %s?"),
        ("editor.status.missing.type", "Missing name or type near %s?"),
        ("editor.status.missing.default", "Missing '%s'?"),
        ("editor.status.missing.right_curly_bracket", "Missing '}'"),
        ("editor.status.missing.left_curly_bracket", "Missing '{'"),
    ]
    .into_iter()
    .collect()
});

/// Built-in English strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStrings;

impl Localizer for DefaultStrings {
    fn text(&self, key: &str) -> Option<String> {
        DEFAULT_STRINGS.get(key).map(|text| (*text).to_string())
    }
}

/// A localizer backed by the built-in strings.
#[derive(Clone, Copy)]
pub struct Strings<'a> {
    localizer: &'a dyn Localizer,
}

impl std::fmt::Debug for Strings<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Strings").finish_non_exhaustive()
    }
}

impl<'a> Strings<'a> {
    /// Looks keys up in `localizer` first, then in the built-in strings.
    pub fn new(localizer: &'a dyn Localizer) -> Self {
        Self { localizer }
    }

    /// Template for `key`; unknown keys render as the key itself.
    #[must_use]
    pub fn text(&self, key: &str) -> String {
        self.localizer
            .text(key)
            .or_else(|| DefaultStrings.text(key))
            .unwrap_or_else(|| key.to_string())
    }

    /// The template for `key` wrapped in the syntax error template.
    #[must_use]
    pub fn local_str(&self, key: &str) -> String {
        render(&self.syntax_template(), &self.text(key))
    }

    /// `local_str(key)` with its placeholder filled with `arg`.
    #[must_use]
    pub fn format(&self, key: &str, arg: &str) -> String {
        render(&self.local_str(key), arg)
    }

    /// The text every simplified message starts with; empty when the syntax
    /// error template has no placeholder.
    #[must_use]
    pub fn simplified_prefix(&self) -> String {
        let outer = self.syntax_template();
        match placeholder(&outer) {
            Some(idx) => outer[..idx].to_string(),
            None => String::new(),
        }
    }

    /// Whether `message` reads like `local_str(key)` with its placeholder
    /// filled in.
    ///
    /// A template that is nothing but a placeholder matches no message.
    #[must_use]
    pub fn is_rendered(&self, key: &str, message: &str) -> bool {
        let template = self.local_str(key);
        let Some(idx) = placeholder(&template) else {
            return message == template;
        };
        let (head, tail) = (&template[..idx], &template[idx + 2..]);
        if head.is_empty() && tail.is_empty() {
            return false;
        }
        message
            .strip_prefix(head)
            .is_some_and(|rest| rest.ends_with(tail))
    }

    fn syntax_template(&self) -> String {
        self.localizer
            .text(SYNTAX_ERROR_KEY)
            .or_else(|| DefaultStrings.text(SYNTAX_ERROR_KEY))
            .unwrap_or_else(|| "Error".to_string())
    }
}

/// Fills the first `%s` or `%c` placeholder of `template` with `arg`.
///
/// `arg` is inserted verbatim; placeholders inside it stay as they are.
#[must_use]
pub fn render(template: &str, arg: &str) -> String {
    match placeholder(template) {
        Some(idx) => {
            let mut out = String::with_capacity(template.len() + arg.len());
            out.push_str(&template[..idx]);
            out.push_str(arg);
            out.push_str(&template[idx + 2..]);
            out
        }
        None => template.to_string(),
    }
}

fn placeholder(template: &str) -> Option<usize> {
    [template.find("%s"), template.find("%c")]
        .into_iter()
        .flatten()
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_strings() {
        let strings = Strings::new(&DefaultStrings);
        assert_eq!(strings.local_str("editor.status.missing.left_curly_bracket"), "Syntax Error - Missing '{'");
        assert_eq!(strings.format("editor.status.missing.default", ";"), "Syntax Error - Missing ';'?");
        assert_eq!(strings.text("no.such.key"), "no.such.key");
        assert_eq!(strings.simplified_prefix(), "Syntax Error - ");
    }

    #[test]
    fn overrides_fall_back_to_defaults() {
        let mut overrides = BTreeMap::new();
        overrides.insert("editor.status.missing.default".to_string(), "Falta '%c'".to_string());
        let strings = Strings::new(&overrides);
        assert_eq!(strings.format("editor.status.missing.default", ")"), "Syntax Error - Falta ')'");

        let closure = |key: &str| (key == SYNTAX_ERROR_KEY).then(|| "Fehler: %s".to_string());
        let strings = Strings::new(&closure);
        assert_eq!(strings.local_str("editor.status.missing.right_curly_bracket"), "Fehler: Missing '}'");
        assert_eq!(strings.simplified_prefix(), "Fehler: ");
    }

    #[test]
    fn arguments_are_inserted_verbatim() {
        assert_eq!(render("near %s?", "printf(\"%c %s\")"), "near printf(\"%c %s\")?");
        assert_eq!(render("%c then %s", "x"), "x then %s");
        assert_eq!(render("no placeholder", "x"), "no placeholder");

        let strings = Strings::new(&DefaultStrings);
        assert_eq!(
            strings.format("editor.status.extraneous", "printf(\"%c\")"),
            "Syntax Error - Unexpected extra code near printf(\"%c\")?"
        );
    }

    #[test]
    fn rendered_messages_are_recognized() {
        let bare = |key: &str| (key == SYNTAX_ERROR_KEY).then(|| "%s".to_string());
        let strings = Strings::new(&bare);
        assert!(strings.is_rendered("editor.status.missing.default", "Missing ';'?"));
        assert!(strings.is_rendered("editor.status.missing.right_curly_bracket", "Missing '}'"));
        assert!(!strings.is_rendered("editor.status.missing.default", "missing ';' at 'x'"));
        assert!(!strings.is_rendered("editor.status.missing.default", "Missing '"));

        let all_placeholder = |_: &str| Some("%s".to_string());
        let strings = Strings::new(&all_placeholder);
        assert!(!strings.is_rendered("editor.status.extraneous", "anything"));
    }
}
