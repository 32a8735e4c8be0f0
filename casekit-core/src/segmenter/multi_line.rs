//! Multi-line segmentation with one globally dominant separator

use super::{extract_words, has_mixed_case, split_camel_case, SeparatorStatistics};
use crate::lines::split_lines;
use serde::Serialize;

/// Segmentation of one physical line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineSegmentation {
    /// 1-based line number
    pub line_number: usize,
    /// Line as it appeared in the input
    pub original_line: String,
    /// False only for blank lines
    pub has_words: bool,
    /// Words of the line (empty for blank lines)
    pub words: Vec<String>,
    /// Line was split on interior whitespace
    pub has_inner_whitespace: bool,
}

impl LineSegmentation {
    fn blank(line_number: usize, original_line: &str) -> Self {
        Self {
            line_number,
            original_line: original_line.to_string(),
            ..Default::default()
        }
    }

    /// More than one word was found
    pub fn was_parsed(&self) -> bool {
        self.words.len() > 1
    }
}

/// Segmentation of a whole, possibly multi-line, input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MultiLineSegmentation {
    /// One record per physical line, in order
    pub lines: Vec<LineSegmentation>,
    /// Separator counts over the entire input
    pub statistics: SeparatorStatistics,
    /// Separator applied to every line
    pub dominant_separator: Option<char>,
    /// A separator was found, or some line was split at case boundaries
    pub has_special_separators: bool,
    /// Some line contains interior whitespace
    pub has_inner_whitespace: bool,
}

impl MultiLineSegmentation {
    /// Lines rebuilt as space-separated words.
    ///
    /// Only available for identifier-like input: a separator or case split
    /// was detected and no line already contains whitespace.
    pub fn recompose(&self) -> Option<String> {
        if !self.has_special_separators || self.has_inner_whitespace {
            return None;
        }

        let text = self
            .lines
            .iter()
            .map(|line| line.words.join(" "))
            .collect::<Vec<_>>()
            .join("\n");

        Some(text.trim().to_string())
    }
}

/// Segment every line of `input` using a separator chosen once for the
/// whole input, so noise lines in a paste with a dominant convention are
/// split consistently.
pub fn detect_words_multi_line(input: &str) -> MultiLineSegmentation {
    if input.is_empty() {
        return MultiLineSegmentation::default();
    }

    let statistics = SeparatorStatistics::collect(input);
    let dominant_separator = statistics.dominant();

    let mut result = MultiLineSegmentation {
        statistics,
        dominant_separator,
        ..Default::default()
    };
    let mut any_line_split = false;

    for (index, line) in split_lines(input).into_iter().enumerate() {
        let mut record = LineSegmentation::blank(index + 1, line);
        let trimmed = line.trim();

        if trimmed.is_empty() {
            result.lines.push(record);
            continue;
        }

        record.has_words = true;

        if trimmed.chars().any(char::is_whitespace) {
            record.words = trimmed.split_whitespace().map(str::to_string).collect();
            record.has_inner_whitespace = true;
            result.has_inner_whitespace = true;
            result.lines.push(record);
            continue;
        }

        let mut words = extract_words(trimmed, dominant_separator);
        if words.len() == 1 && has_mixed_case(&words[0]) {
            let camel_words = split_camel_case(&words[0]);
            if camel_words.len() > 1 {
                words = camel_words;
            }
        }

        if words.len() > 1 {
            any_line_split = true;
        } else {
            words = vec![trimmed.to_string()];
        }

        record.words = words;
        result.lines.push(record);
    }

    result.has_special_separators = dominant_separator.is_some() || any_line_split;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(result: &MultiLineSegmentation) -> Vec<Vec<&str>> {
        result
            .lines
            .iter()
            .map(|line| line.words.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let result = detect_words_multi_line("");
        assert!(result.lines.is_empty());
        assert!(!result.has_special_separators);
        assert_eq!(result.recompose(), None);
    }

    #[test]
    fn test_global_separator_applies_to_every_line() {
        let result = detect_words_multi_line("foo_bar\nbaz_qux\nkebab-line");
        assert_eq!(result.dominant_separator, Some('_'));
        assert!(result.has_special_separators);
        assert_eq!(
            words(&result),
            vec![vec!["foo", "bar"], vec!["baz", "qux"], vec!["kebab-line"]]
        );
        assert!(!result.lines[2].was_parsed());
    }

    #[test]
    fn test_statistics_keep_secondary_separators() {
        let result = detect_words_multi_line("a_b_c\nd-e");
        assert_eq!(result.statistics.count('_'), 2);
        assert_eq!(result.statistics.count('-'), 1);
        assert_eq!(result.dominant_separator, Some('_'));
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let result = detect_words_multi_line("fooBar\n\n  \nbazQux");
        assert_eq!(result.lines.len(), 4);
        assert!(!result.lines[1].has_words);
        assert!(result.lines[1].words.is_empty());
        assert!(!result.lines[2].has_words);
        assert_eq!(result.lines[3].line_number, 4);
        assert_eq!(words(&result)[3], vec!["baz", "Qux"]);
    }

    #[test]
    fn test_inner_whitespace_line() {
        let result = detect_words_multi_line("foo_bar\nhello  big world");
        assert!(result.has_inner_whitespace);
        assert!(result.lines[1].has_inner_whitespace);
        assert!(!result.lines[0].has_inner_whitespace);
        assert_eq!(words(&result)[1], vec!["hello", "big", "world"]);
        assert_eq!(result.recompose(), None);
    }

    #[test]
    fn test_camel_case_only_input_counts_as_special() {
        let result = detect_words_multi_line("someValue\nanotherValue");
        assert_eq!(result.dominant_separator, None);
        assert!(result.has_special_separators);
        assert_eq!(
            result.recompose().as_deref(),
            Some("some Value\nanother Value")
        );
    }

    #[test]
    fn test_plain_words_are_not_special() {
        let result = detect_words_multi_line("hello\nworld");
        assert!(!result.has_special_separators);
        assert_eq!(words(&result), vec![vec!["hello"], vec!["world"]]);
    }

    #[test]
    fn test_lines_are_trimmed_before_splitting() {
        let result = detect_words_multi_line("  foo_bar  \r\nx_y");
        assert_eq!(words(&result), vec![vec!["foo", "bar"], vec!["x", "y"]]);
        assert_eq!(result.lines[0].original_line, "  foo_bar  ");
    }

    #[test]
    fn test_separator_only_line_is_kept_whole() {
        let result = detect_words_multi_line("___\na_b");
        assert_eq!(words(&result)[0], vec!["___"]);
        assert!(result.lines[0].has_words);
    }

    #[test]
    fn test_unicode_line_separators() {
        let result = detect_words_multi_line("a_b\u{2028}c_d\u{2029}e_f");
        assert_eq!(result.lines.len(), 3);
        assert_eq!(
            result.recompose().as_deref(),
            Some("a b\nc d\ne f")
        );
    }
}
