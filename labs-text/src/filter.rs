use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::letter::Letter;
use crate::whitespace::close_gaps;

// A word is a run of letters, possibly joined by apostrophes, as in "don't"
// or "п’ять".
static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\p{L}+(?:['’]\p{L}+)*\b").unwrap());

/// The outcome of [`remove_words`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filtered {
    pub text: String,
    pub removed: usize,
}

/// Remove every word that is exactly `length` code points long and starts
/// with a consonant.
///
/// The gaps left behind are cleaned up afterwards: runs of spaces and tabs
/// collapse into a single space, and lines lose their trailing whitespace.
pub fn remove_words(text: &str, length: usize) -> Result<Filtered> {
    if length == 0 {
        return Err(Error::InvalidLength);
    }
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyText);
    }

    let mut output = String::with_capacity(text.len());
    let mut last_end = 0;
    let mut removed = 0;
    for word in WORD_REGEX.find_iter(text) {
        let mut chars = word.as_str().chars();
        let starts_with_consonant = chars
            .next()
            .is_some_and(|c| Letter::new(c).is_consonant());
        if starts_with_consonant && chars.count() + 1 == length {
            output.push_str(&text[last_end..word.start()]);
            last_end = word.end();
            removed += 1;
        }
    }
    output.push_str(&text[last_end..]);

    Ok(Filtered {
        text: close_gaps(&output),
        removed,
    })
}
