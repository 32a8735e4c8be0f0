//! Line splitting shared by the segmenter and the batch transformer

/// Split into physical lines on `\r\n`, `\r`, `\n`, U+2028 and U+2029.
///
/// No line is dropped: empty input yields one empty line and a trailing
/// break yields a trailing empty line.
pub fn split_lines(input: &str) -> Vec<&str> {
    split_on(input, |ch| {
        matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
    })
}

/// Split on `\r\n`, `\r` and `\n`, trimming every line.
///
/// Blank input (empty or whitespace only) yields no lines at all.
pub fn to_lines(input: &str) -> Vec<&str> {
    if input.trim().is_empty() {
        return Vec::new();
    }

    split_on(input, |ch| matches!(ch, '\n' | '\r'))
        .into_iter()
        .map(str::trim)
        .collect()
}

fn split_on(input: &str, is_break: impl Fn(char) -> bool) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = input.char_indices().peekable();

    while let Some((index, ch)) = chars.next() {
        if !is_break(ch) {
            continue;
        }

        lines.push(&input[start..index]);
        start = index + ch.len_utf8();

        // \r\n is a single break
        if ch == '\r' {
            if let Some(&(next_index, '\n')) = chars.peek() {
                chars.next();
                start = next_index + 1;
            }
        }
    }

    lines.push(&input[start..]);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_mixed_breaks() {
        assert_eq!(
            split_lines("a\r\nb\rc\nd\u{2028}e\u{2029}f"),
            vec!["a", "b", "c", "d", "e", "f"]
        );
    }

    #[test]
    fn test_split_lines_keeps_empty_lines() {
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b", ""]);
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("\r\n"), vec!["", ""]);
    }

    #[test]
    fn test_to_lines_trims() {
        assert_eq!(to_lines("  one \r\n two\t\n\nthree "), vec!["one", "two", "", "three"]);
    }

    #[test]
    fn test_to_lines_blank_input() {
        assert!(to_lines("").is_empty());
        assert!(to_lines(" \n\t ").is_empty());
    }

    #[test]
    fn test_to_lines_ignores_unicode_separators() {
        assert_eq!(to_lines("a\u{2028}b"), vec!["a\u{2028}b"]);
    }
}
