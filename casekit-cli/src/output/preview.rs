//! Result previews and Markdown fencing

const ELLIPSIS: char = '…';
const MIN_FENCE: usize = 3;

/// At most `max_lines` lines of at most `max_width` characters.
///
/// A cut line gets `…` appended, and so does the last shown line when lines
/// were dropped.
pub fn preview(lines: &[String], max_lines: usize, max_width: usize) -> Vec<String> {
    let mut shown: Vec<String> = lines
        .iter()
        .take(max_lines)
        .map(|line| truncate(line, max_width))
        .collect();

    if lines.len() > max_lines {
        if let Some(last) = shown.last_mut() {
            if !last.ends_with(ELLIPSIS) {
                last.push(ELLIPSIS);
            }
        }
    }

    shown
}

fn truncate(line: &str, max_width: usize) -> String {
    match line.char_indices().nth(max_width) {
        Some((cut, _)) => {
            let mut shortened = line[..cut].to_string();
            shortened.push(ELLIPSIS);
            shortened
        }
        None => line.to_string(),
    }
}

/// A backtick fence longer than any backtick run inside `content`
pub fn code_fence(content: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for ch in content.chars() {
        if ch == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat((longest + 1).max(MIN_FENCE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &[&str]) -> Vec<String> {
        input.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_preview_within_limits() {
        assert_eq!(preview(&lines(&["a", "b"]), 2, 10), lines(&["a", "b"]));
        assert!(preview(&[], 2, 10).is_empty());
    }

    #[test]
    fn test_preview_drops_lines() {
        assert_eq!(preview(&lines(&["a", "b", "c"]), 2, 10), lines(&["a", "b…"]));
    }

    #[test]
    fn test_preview_cuts_long_lines() {
        assert_eq!(preview(&lines(&["abcdef"]), 2, 3), lines(&["abc…"]));
        assert_eq!(preview(&lines(&["žluťoučký"]), 1, 4), lines(&["žluť…"]));
        assert_eq!(
            preview(&lines(&["abcdef", "x", "y"]), 1, 3),
            lines(&["abc…"])
        );
    }

    #[test]
    fn test_code_fence() {
        assert_eq!(code_fence("plain"), "```");
        assert_eq!(code_fence("a `tick`"), "```");
        assert_eq!(code_fence("```rust\n```"), "````");
        assert_eq!(code_fence("``````"), "```````");
    }
}
