//! Rewriting of terse parser messages into short hints.
//!
//! Strategies are tried in [`STRATEGY_ORDER`]; the first one that matches
//! produces the hint. Messages no strategy matches are left alone.

pub mod offending;
pub mod strategies;

use serde::Serialize;
use tracing::trace;

use crate::localize::{DefaultStrings, Localizer, Strings, HINT_KEYS};
pub use strategies::{Strategy, STRATEGY_ORDER};

/// A simplified message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Simplification {
    /// The hint shown instead of the parser's message.
    pub message: String,
    /// Whether the issue belongs to the token before the reported position,
    /// as for a missing `;` reported on the next line.
    pub attribute_to_prior_token: bool,
}

impl Simplification {
    /// A hint that stays on the reported token.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            attribute_to_prior_token: false,
        }
    }
}

/// Runs the strategy chain against one localizer.
#[derive(Debug, Clone, Copy)]
pub struct Simplifier<'a> {
    strings: Strings<'a>,
}

impl<'a> Simplifier<'a> {
    /// Creates a simplifier rendering hints through `localizer`.
    pub fn new(localizer: &'a dyn Localizer) -> Self {
        Self {
            strings: Strings::new(localizer),
        }
    }

    /// The strings hints are rendered with.
    pub fn strings(&self) -> &Strings<'a> {
        &self.strings
    }

    /// Simplifies `message`, or returns `None` when no strategy applies.
    ///
    /// Messages that are already simplified come back as `None`, so a second
    /// pass never changes a hint.
    #[must_use]
    pub fn simplify(&self, message: &str) -> Option<Simplification> {
        if self.is_simplified(message) {
            return None;
        }
        STRATEGY_ORDER.iter().find_map(|strategy| {
            let simplification = strategy.apply(message, &self.strings)?;
            trace!(?strategy, "simplified parser message");
            Some(simplification)
        })
    }

    /// Whether `message` is a hint this simplifier could have produced.
    ///
    /// Starting with the syntax error prefix is enough. A localizer whose
    /// syntax template is a bare placeholder has no prefix, so the message is
    /// checked against every hint template as well.
    #[must_use]
    pub fn is_simplified(&self, message: &str) -> bool {
        let prefix = self.strings.simplified_prefix();
        if !prefix.is_empty() && message.starts_with(&prefix) {
            return true;
        }
        HINT_KEYS
            .iter()
            .any(|key| self.strings.is_rendered(key, message))
    }

    /// The first strategy that matches `message`.
    #[must_use]
    pub fn matching_strategy(&self, message: &str) -> Option<Strategy> {
        STRATEGY_ORDER
            .iter()
            .copied()
            .find(|strategy| strategy.apply(message, &self.strings).is_some())
    }

    /// The simplified message, falling back to `message` itself.
    #[must_use]
    pub fn message_for(&self, message: &str) -> String {
        self.simplify(message)
            .map_or_else(|| message.to_string(), |simplification| simplification.message)
    }
}

/// Simplifies `message` with the built-in English strings.
#[must_use]
pub fn simplify(message: &str) -> Option<Simplification> {
    Simplifier::new(&DefaultStrings).simplify(message)
}
