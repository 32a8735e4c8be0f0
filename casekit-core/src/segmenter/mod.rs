//! Word segmentation for identifier-like and free text
//!
//! A token is split on the most frequent separator (`_ - . / \`, ties going
//! to the earlier one), and every mixed-case part is further split at
//! camelCase / PascalCase boundaries. Text containing whitespace is never
//! run through these heuristics; it is split on whitespace instead.

mod camel_case;
mod multi_line;
mod separator;

pub use camel_case::{has_mixed_case, split_camel_case};
pub use multi_line::{detect_words_multi_line, LineSegmentation, MultiLineSegmentation};
pub use separator::{SeparatorStatistics, SEPARATORS};

use serde::Serialize;

/// Outcome of segmenting a single token
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordDetection {
    /// True when the token was split into two or more words
    pub has_separator: bool,
    /// Separator used for splitting (absent for pure camelCase splits)
    pub separator: Option<char>,
    /// Detected words
    pub words: Vec<String>,
}

/// Segment a single token into words.
///
/// - blank input yields no words
/// - input containing whitespace is split on whitespace and reported as not
///   separated
/// - a separator or camelCase split that produces fewer than two words falls
///   back to the untouched input as the single word
pub fn detect_words(input: &str) -> WordDetection {
    if input.trim().is_empty() {
        return WordDetection::default();
    }

    if input.chars().any(char::is_whitespace) {
        return WordDetection {
            has_separator: false,
            separator: None,
            words: input.split_whitespace().map(str::to_string).collect(),
        };
    }

    let separator = SeparatorStatistics::collect(input).dominant();
    if separator.is_none() && !has_mixed_case(input) {
        return single_word(input);
    }

    let words = extract_words(input, separator);
    if words.len() <= 1 {
        return single_word(input);
    }

    WordDetection {
        has_separator: true,
        separator,
        words,
    }
}

fn single_word(input: &str) -> WordDetection {
    WordDetection {
        has_separator: false,
        separator: None,
        words: vec![input.to_string()],
    }
}

/// Split on `separator` only, then camel-split each mixed-case part.
/// Without a separator the whole token is camel-split.
pub(crate) fn extract_words(token: &str, separator: Option<char>) -> Vec<String> {
    match separator {
        Some(sep) => token
            .split(sep)
            .filter(|part| !part.is_empty())
            .flat_map(|part| {
                if has_mixed_case(part) {
                    split_camel_case(part)
                } else {
                    vec![part.to_string()]
                }
            })
            .collect(),
        None => split_camel_case(token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input() {
        assert_eq!(detect_words(""), WordDetection::default());
        assert_eq!(detect_words("  \t"), WordDetection::default());
    }

    #[test]
    fn test_whitespace_input_is_split_literally() {
        let detection = detect_words("  foo_bar  bazQux ");
        assert!(!detection.has_separator);
        assert_eq!(detection.separator, None);
        assert_eq!(detection.words, vec!["foo_bar", "bazQux"]);
    }

    #[test]
    fn test_plain_word() {
        let detection = detect_words("hello");
        assert!(!detection.has_separator);
        assert_eq!(detection.words, vec!["hello"]);
    }

    #[test]
    fn test_snake_case() {
        let detection = detect_words("foo_bar_baz");
        assert!(detection.has_separator);
        assert_eq!(detection.separator, Some('_'));
        assert_eq!(detection.words, vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_tie_break_keeps_other_separators_embedded() {
        let detection = detect_words("a_b-c_d-e");
        assert_eq!(detection.separator, Some('_'));
        assert_eq!(detection.words, vec!["a", "b-c", "d-e"]);
    }

    #[test]
    fn test_separator_with_camel_parts() {
        let detection = detect_words("getHTTPResponse.statusCode");
        assert_eq!(detection.separator, Some('.'));
        assert_eq!(
            detection.words,
            vec!["get", "HTTP", "Response", "status", "Code"]
        );
    }

    #[test]
    fn test_camel_case_only() {
        let detection = detect_words("XMLHttpRequest");
        assert!(detection.has_separator);
        assert_eq!(detection.separator, None);
        assert_eq!(detection.words, vec!["XML", "Http", "Request"]);
    }

    #[test]
    fn test_single_trailing_separator_is_not_a_split() {
        let detection = detect_words("word_");
        assert!(!detection.has_separator);
        assert_eq!(detection.separator, None);
        assert_eq!(detection.words, vec!["word_"]);
    }

    #[test]
    fn test_path_like_input() {
        let detection = detect_words("src/main/resources");
        assert_eq!(detection.separator, Some('/'));
        assert_eq!(detection.words, vec!["src", "main", "resources"]);
    }
}
