//! Tokenization helpers

/// Remove every ASCII punctuation character
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Whitespace separated tokens
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Terminal token of a line
pub fn last_word(line: &str) -> Option<&str> {
    line.split_whitespace().next_back()
}
