//! Manifest version extraction and rewriting.
//!
//! The manifest is treated as opaque text: only the single
//! `version = "X.Y.Z"` declaration line is recognized, and rewriting touches
//! that line alone, leaving the rest of the document byte-for-byte intact.

use std::sync::OnceLock;

use regex::Regex;

use crate::version::Version;

fn version_capture_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?m)^version\s*=\s*"(\d+)\.(\d+)\.(\d+)""#).unwrap())
}

fn version_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?m)^version\s*=\s*".*"$"#).unwrap())
}

/// Extract the current version from manifest text.
///
/// Matches the first line of the form `version = "X.Y.Z"`. Returns `None`
/// when no such line exists; the caller decides how fatal that is.
pub fn extract_version(text: &str) -> Option<Version> {
    let caps = version_capture_re().captures(text)?;

    let major = caps[1].parse::<u32>().ok()?;
    let minor = caps[2].parse::<u32>().ok()?;
    let patch = caps[3].parse::<u32>().ok()?;

    Some(Version::new(major, minor, patch))
}

/// Rewrite the version declaration line with the new version.
///
/// Replaces at most one occurrence. When no line matches, the text is
/// returned unchanged: existence was already validated at parse time, so a
/// vanished declaration at write time is a soft no-op rather than an error.
pub fn replace_version(text: &str, new_version: &Version) -> String {
    version_line_re()
        .replace(text, format!("version = \"{}\"", new_version))
        .into_owned()
}
