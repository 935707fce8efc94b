//! Final whitespace pass over rendered text.

use crate::patterns::SPACES_AFTER_ANCHOR;

/// Collapse spaces following a newline or space into that single
/// character, then trim the whole text.
///
/// Runs once per top-level parse, never during recursion. Idempotent.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    SPACES_AFTER_ANCHOR.replace_all(text, "$1").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_space_runs() {
        assert_eq!(normalize_whitespace("a    b"), "a b");
    }

    #[test]
    fn test_drops_indent_after_newline() {
        assert_eq!(normalize_whitespace("line\n    next\n\n  last"), "line\nnext\n\nlast");
    }

    #[test]
    fn test_keeps_newlines() {
        assert_eq!(normalize_whitespace("a\n\n\nb"), "a\n\n\nb");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(normalize_whitespace("  \n padded \n "), "padded");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "a    b",
            " x \n  y  z ",
            "\n-----\n  tail",
            "[quote=Alice] Hello  [/quote]",
            "",
        ];
        for input in inputs {
            let once = normalize_whitespace(input);
            assert_eq!(normalize_whitespace(&once), once, "input {input:?}");
        }
    }
}
