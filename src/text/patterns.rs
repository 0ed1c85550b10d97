// file: src/text/patterns.rs
// description: compiled regex patterns for text cleaning
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Mentions, anything outside [0-9A-Za-z space tab], URLs, a leading "rt",
    // and "http" followed by a single character.
    pub static ref NOISE: Regex = Regex::new(
        r"(@[A-Za-z0-9]+)|([^0-9A-Za-z \t])|(\w+://\S+)|^rt|http.+?"
    ).expect("NOISE regex is valid");

    pub static ref DIGITS: Regex = Regex::new(r"\d+").expect("DIGITS regex is valid");
}

pub fn strip_noise(text: &str) -> String {
    NOISE.replace_all(text, "").into_owned()
}

pub fn strip_digits(text: &str) -> String {
    DIGITS.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_mentions_and_punctuation() {
        assert_eq!(strip_noise("hello @world, again!"), "hello  again");
    }

    #[test]
    fn test_strip_urls() {
        assert_eq!(strip_noise("see ftp://host/path now"), "see  now");
        assert_eq!(strip_noise("visit https://example.com/a"), "visit ");
    }

    #[test]
    fn test_leading_rt_only() {
        assert_eq!(strip_noise("rt great paper"), " great paper");
        assert_eq!(strip_noise("art smart"), "art smart");
    }

    #[test]
    fn test_newlines_are_removed_not_spaced() {
        assert_eq!(strip_noise("deep\nlearning"), "deeplearning");
    }

    #[test]
    fn test_strip_digits() {
        assert_eq!(strip_digits("gpt 4 and 2024 models"), "gpt  and  models");
    }
}
