//! Filesystem-safe output names derived from session names.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9_]").unwrap());

/// Extension appended to every generated file name.
pub const SDP_EXTENSION: &str = ".sdp";

/// Normalize a name to lowercase `[a-z0-9_]` with whitespace runs folded into `_`.
///
/// Applying this twice yields the same string as applying it once.
pub fn normalize_stem(name: &str) -> String {
    let lowered = name.to_lowercase();
    let underscored = WHITESPACE_RUN.replace_all(lowered.trim(), "_");
    DISALLOWED.replace_all(&underscored, "").into_owned()
}

/// Turn an arbitrary session name into a base file name ending in `.sdp`.
///
/// Total: an empty or fully-stripped name produces `".sdp"`.
pub fn sanitize_filename(name: &str) -> String {
    format!("{}{}", normalize_stem(name), SDP_EXTENSION)
}
