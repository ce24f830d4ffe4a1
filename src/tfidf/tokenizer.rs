// Word tokenizer for normalized text.
//
// A token is a maximal run of word characters (Unicode letters, digits,
// underscore). Everything else is a separator. The input is expected to be
// lowercased already, so no case folding happens here.

use std::sync::LazyLock;

use regex::Regex;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Split `text` into word tokens, in order of appearance.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    WORD.find_iter(text).map(|m| m.as_str())
}
