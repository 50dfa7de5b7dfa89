//! Tweet text normalization
//!
//! Strips URLs, @mentions, hashtags and anything outside `[0-9A-Za-z \t]`,
//! then collapses whitespace. The result is what lands in the export.

use regex::Regex;
use std::sync::LazyLock;

// URL first so `http://x.co` goes as one span instead of leaving `http`.
static RE_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\w+://\S+|@[A-Za-z0-9]+|#[A-Za-z0-9_]*|[^0-9A-Za-z \t]").unwrap()
});

/// Clean raw post text. Pure and idempotent; empty input gives empty output.
pub fn clean(text: &str) -> String {
    let stripped = RE_NOISE.replace_all(text, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
