//! Token normalization
//!
//! Maps a raw wordlist line to its canonical lowercase form.

/// Normalize a raw token
///
/// Trims whitespace, strips one leading and one trailing double quote (some
/// wordlists quote every entry), trims again and lowercases. Returns an empty
/// string when nothing is left, which callers treat as "discard".
pub fn normalize_word(raw: &str) -> String {
    let word = raw.trim();
    if word.is_empty() {
        return String::new();
    }

    let word = word.strip_prefix('"').unwrap_or(word);
    let word = word.strip_suffix('"').unwrap_or(word);

    word.trim().to_lowercase()
}
