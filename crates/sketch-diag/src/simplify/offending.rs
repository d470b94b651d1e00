//! Extraction of the code a parser message complains about.

const VIABLE_ALTERNATIVE: &str = "viable alternative";
const VIABLE_ALTERNATIVE_PREFIX: &str = "no viable alternative at input '";

/// Returns the offending code echoed by a "no viable alternative" message.
///
/// Only the last non-empty line of the echo is kept, without its closing
/// quote. Any other message is returned unchanged.
#[must_use]
pub fn offending_area(message: &str) -> String {
    if !message.contains(VIABLE_ALTERNATIVE) {
        return message.to_string();
    }
    let content = message
        .replace(VIABLE_ALTERNATIVE_PREFIX, "")
        .replace('\n', "\\n");
    let last = content
        .rsplit("\\n")
        .find(|piece| !piece.is_empty())
        .unwrap_or("");
    last.strip_suffix('\'').unwrap_or(last).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_last_line_of_the_echo() {
        assert_eq!(
            offending_area("no viable alternative at input 'ellipse(\n\nellipse();'"),
            "ellipse();"
        );
    }

    #[test]
    fn other_messages_are_unchanged() {
        let message = "ambig at input 'ellipse(\n\nellipse();'";
        assert_eq!(offending_area(message), message);
    }

    #[test]
    fn escaped_line_breaks_split_too() {
        assert_eq!(
            offending_area("no viable alternative at input 'int x\\nfloat y'"),
            "float y"
        );
        assert_eq!(offending_area("no viable alternative at input 'a\n'"), "");
        assert_eq!(offending_area("no viable alternative at input '\n"), "");
    }
}
