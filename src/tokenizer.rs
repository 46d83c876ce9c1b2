use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;

/// A run of ASCII letters and digits, optionally joined to a second run by
/// a single apostrophe (`don't`, `o'clock`).
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-z0-9]+(?:'[a-z0-9]+)?").expect("token pattern is valid")
});

/// Lowercase `text` and collect its unique tokens.
///
/// Anything outside the token pattern is a separator.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    TOKEN
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        tokenize(text).into_iter().collect()
    }

    #[test]
    fn splits_on_punctuation() {
        assert_eq!(tokens("fever, cough."), vec!["cough", "fever"]);
    }

    #[test]
    fn lowercases() {
        assert_eq!(tokens("High FEVER"), vec!["fever", "high"]);
    }

    #[test]
    fn keeps_apostrophe_contractions() {
        assert_eq!(tokens("don't"), vec!["don't"]);
    }

    #[test]
    fn trailing_apostrophe_is_a_separator() {
        assert_eq!(tokens("patients' pain"), vec!["pain", "patients"]);
    }

    #[test]
    fn digits_are_tokens() {
        assert_eq!(tokens("fever 39c for 3 days"), vec![
            "3", "39c", "days", "fever", "for"
        ]);
    }

    #[test]
    fn deduplicates() {
        assert_eq!(tokens("cough cough COUGH"), vec!["cough"]);
    }

    #[test]
    fn non_latin_text_has_no_tokens() {
        assert!(tokenize("头痛 ¿?").is_empty());
    }

    #[test]
    fn empty_text() {
        assert!(tokenize("").is_empty());
    }
}
