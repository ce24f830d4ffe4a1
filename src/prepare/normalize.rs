// Text normalization applied before analysis.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Lowercase `raw` and blank out every character that is neither a word
/// character nor whitespace. Each punctuation mark becomes exactly one space,
/// so `l'état` becomes `l état`.
pub fn normalize_text(raw: &str) -> String {
    let lower = raw.to_lowercase();
    PUNCTUATION.replace_all(&lower, " ").into_owned()
}

/// Remove every word found in `stop_words`, leaving the surrounding
/// whitespace in place.
pub fn strip_stop_words(text: &str, stop_words: &HashSet<String>) -> String {
    WORD.replace_all(text, |caps: &Captures| {
        let word = &caps[0];
        if stop_words.contains(word) {
            String::new()
        } else {
            word.to_string()
        }
    })
    .into_owned()
}
