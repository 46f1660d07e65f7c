use std::sync::LazyLock;

use regex::Regex;

static HORIZONTAL_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t ]+").unwrap());
static GAP_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\t ]{2,}").unwrap());
static TRAILING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)[\t ]+$").unwrap());

/// Collapse runs of spaces and tabs into one space, drop spaces and tabs at
/// the end of every line, and trim the whole text.
///
/// Line breaks are kept.
pub fn normalize_whitespace(raw: &str) -> String {
    let collapsed = HORIZONTAL_RUN_REGEX.replace_all(raw, " ");
    let trimmed = TRAILING_REGEX.replace_all(&collapsed, "");
    trimmed.trim().to_string()
}

// Like normalize_whitespace, but a lone tab stays a tab: only gaps of two or
// more characters collapse.
pub(crate) fn close_gaps(raw: &str) -> String {
    let collapsed = GAP_REGEX.replace_all(raw, " ");
    let trimmed = TRAILING_REGEX.replace_all(&collapsed, "");
    trimmed.trim().to_string()
}
