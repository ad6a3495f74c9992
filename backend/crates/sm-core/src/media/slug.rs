use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("static pattern is valid"));
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("static pattern is valid"));

/// Convert `value` into a lowercase, URL-safe slug.
///
/// The input is NFKD-decomposed and every remaining non-ASCII character is
/// dropped, so `Č` becomes `c` and `ﬁ` becomes `fi`. Characters that are not
/// alphanumerics, underscores, hyphens or whitespace are removed, runs of
/// whitespace and hyphens collapse into a single `-`, and leading or
/// trailing `-`/`_` are stripped.
pub fn slugify(value: &str) -> String {
    let ascii: String = value.nfkd().filter(char::is_ascii).collect();
    let lowered = ascii.to_lowercase();
    let cleaned = DISALLOWED.replace_all(&lowered, "");
    SEPARATORS
        .replace_all(&cleaned, "-")
        .trim_matches(|c| c == '-' || c == '_')
        .to_string()
}
