//! Text cleanup: diacritics, special characters and whitespace runs

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

const MAX_LINE_BREAKS: usize = 2;
const NO_BREAK_SPACE: char = '\u{00A0}';

fn is_kept(ch: char) -> bool {
    ch.is_alphanumeric() || ch.is_whitespace()
}

/// Decompose canonically, drop combining marks, recompose
pub fn remove_diacritics(input: &str) -> String {
    input
        .nfd()
        .filter(|&ch| !is_combining_mark(ch))
        .nfc()
        .collect()
}

/// Collapse each run of characters that are neither letter, digit nor
/// whitespace into one space.
///
/// The space is only emitted when a kept character follows the run, and a
/// single trailing space in the result is trimmed.
pub fn replace_special_characters(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_special_run = false;

    for ch in input.chars() {
        if is_kept(ch) {
            if in_special_run {
                out.push(' ');
                in_special_run = false;
            }
            out.push(ch);
        } else {
            in_special_run = true;
        }
    }

    if out.ends_with(' ') {
        out.pop();
    }

    out
}

/// Drop every character that is neither letter, digit nor whitespace
pub fn remove_special_characters(input: &str) -> String {
    input.chars().filter(|&ch| is_kept(ch)).collect()
}

/// Collapse every whitespace run to its highest-priority kind.
///
/// A run containing line breaks becomes at most two `\n` (one blank line,
/// `\r\n` counting as one break); otherwise a run containing a tab becomes
/// one tab; anything else becomes one space.
pub fn remove_duplicate_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if !ch.is_whitespace() {
            out.push(ch);
            continue;
        }

        let mut line_breaks = 0;
        let mut has_tab = false;
        let mut current = Some(ch);

        while let Some(ws) = current {
            match ws {
                '\r' => {
                    chars.next_if_eq(&'\n');
                    line_breaks += 1;
                }
                '\n' => line_breaks += 1,
                '\t' => has_tab = true,
                _ => {}
            }
            current = chars.next_if(|next| next.is_whitespace());
        }

        if line_breaks > 0 {
            for _ in 0..line_breaks.min(MAX_LINE_BREAKS) {
                out.push('\n');
            }
        } else if has_tab {
            out.push('\t');
        } else {
            out.push(' ');
        }
    }

    out
}

/// Collapse runs of U+0020 and U+00A0 only.
///
/// A run becomes one regular space if it holds any regular space, otherwise
/// one no-break space. Tabs and line breaks pass through untouched.
pub fn remove_duplicate_spaces(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != ' ' && ch != NO_BREAK_SPACE {
            out.push(ch);
            continue;
        }

        let mut has_space = ch == ' ';
        while let Some(next) = chars.next_if(|&next| next == ' ' || next == NO_BREAK_SPACE) {
            has_space |= next == ' ';
        }

        out.push(if has_space { ' ' } else { NO_BREAK_SPACE });
    }

    out
}
