//! Version marker rewriting.
//!
//! The marker document carries the runtime-readable `__version__` string.
//! Unlike the manifest, the declaration may legitimately be missing, in
//! which case one is appended rather than treated as an error.

use std::sync::OnceLock;

use regex::Regex;

use crate::version::Version;

fn marker_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?m)^__version__\s*=\s*".*"$"#).unwrap())
}

/// Rewrite the `__version__` declaration, or append one if missing.
///
/// When a declaration is present it is replaced in place (first matching
/// line only). Otherwise trailing whitespace is stripped and the declaration
/// is appended after a separating blank line, with a trailing newline.
pub fn replace_or_append(text: &str, new_version: &Version) -> String {
    if text.contains("__version__") {
        marker_line_re()
            .replace(text, format!("__version__ = \"{}\"", new_version))
            .into_owned()
    } else {
        format!("{}\n\n__version__ = \"{}\"\n", text.trim_end(), new_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_existing_declaration() {
        let text = "from .core import run\n\n__version__ = \"0.1.52\"\n";
        let rewritten = replace_or_append(text, &Version::new(0, 1, 53));
        assert_eq!(rewritten, "from .core import run\n\n__version__ = \"0.1.53\"\n");
    }

    #[test]
    fn test_append_when_missing() {
        let text = "from .core import run\n";
        let rewritten = replace_or_append(text, &Version::new(0, 1, 53));
        assert_eq!(
            rewritten,
            "from .core import run\n\n__version__ = \"0.1.53\"\n"
        );
    }

    #[test]
    fn test_append_strips_trailing_whitespace_first() {
        let text = "from .core import run\n\n\n";
        let rewritten = replace_or_append(text, &Version::new(1, 0, 0));
        assert_eq!(rewritten, "from .core import run\n\n__version__ = \"1.0.0\"\n");
    }

    #[test]
    fn test_append_to_empty_document() {
        let rewritten = replace_or_append("", &Version::new(0, 1, 0));
        assert_eq!(rewritten, "\n\n__version__ = \"0.1.0\"\n");
    }

    #[test]
    fn test_append_happens_exactly_once() {
        let first = replace_or_append("from .core import run\n", &Version::new(0, 1, 53));
        let second = replace_or_append(&first, &Version::new(0, 1, 54));

        let declarations = second
            .lines()
            .filter(|line| line.starts_with("__version__"))
            .count();
        assert_eq!(declarations, 1);
        assert!(second.contains("__version__ = \"0.1.54\""));
    }

    #[test]
    fn test_preserves_unrelated_lines() {
        let text = "\"\"\"Package docstring.\"\"\"\n\nfrom . import db\nfrom . import api\n\n__version__ = \"2.3.4\"\n";
        let rewritten = replace_or_append(text, &Version::new(2, 3, 5));
        assert!(rewritten.contains("\"\"\"Package docstring.\"\"\""));
        assert!(rewritten.contains("from . import db"));
        assert!(rewritten.contains("from . import api"));
        assert_eq!(rewritten.lines().count(), text.lines().count());
    }

    #[test]
    fn test_mentioned_but_not_declared_is_left_unchanged() {
        // The substring appears (e.g. in a comment) but no declaration line
        // matches, so the rewrite quietly does nothing.
        let text = "# __version__ is set by the release tool\n";
        assert_eq!(replace_or_append(text, &Version::new(1, 0, 0)), text);
    }
}
