//! Chicago Manual of Style title casing
//!
//! The input is tokenized into words and delimiters. Delimiters (spaces,
//! punctuation) are copied verbatim. A word is a run of word characters in
//! which hyphens and apostrophes may appear between two word characters, so
//! `state-of-the-art` and `don't` are single words.
//!
//! Rules, in priority order:
//! 1. the first and last word are capitalized
//! 2. articles, coordinating conjunctions and short prepositions inside the
//!    title are lowercased
//! 3. every other word is capitalized
//! 4. hyphenated words apply rules 2 and 3 per part; only the first part of
//!    the first word and the last part of the last word are forced to
//!    capitals
//! 5. capitalizing preserves acronyms (`NASA`) and words like `iPhone`

use super::word_list::WordList;
use unicode_normalization::char::is_combining_mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Word(&'a str),
    Other(&'a str),
}

#[derive(Debug, Clone, Copy, Default)]
struct Position {
    first: bool,
    last: bool,
}

/// Title-case `input` with the embedded Chicago word list
pub fn to_chicago_title_case(input: &str) -> String {
    to_title_case_with(input, WordList::chicago())
}

/// Title-case `input` with a caller-supplied minor word list
pub fn to_title_case_with(input: &str, words: &WordList) -> String {
    if input.trim().is_empty() {
        return input.to_string();
    }

    let tokens = tokenize(input);
    let word_indices: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| matches!(token, Token::Word(_)))
        .map(|(index, _)| index)
        .collect();
    let first = word_indices.first().copied();
    let last = word_indices.last().copied();

    let mut out = String::with_capacity(input.len());
    for (index, token) in tokens.into_iter().enumerate() {
        match token {
            Token::Other(text) => out.push_str(text),
            Token::Word(word) => {
                let position = Position {
                    first: Some(index) == first,
                    last: Some(index) == last,
                };
                if word.contains('-') {
                    out.push_str(&process_hyphenated(word, position, words));
                } else {
                    out.push_str(&process_word(word, position, words));
                }
            }
        }
    }

    out
}

fn process_word(word: &str, position: Position, words: &WordList) -> String {
    if position.first || position.last {
        capitalize_word(word)
    } else if words.is_minor(word) {
        word.to_lowercase()
    } else {
        capitalize_word(word)
    }
}

fn process_hyphenated(word: &str, position: Position, words: &WordList) -> String {
    let parts: Vec<&str> = word.split('-').collect();
    let last_part = parts.len() - 1;

    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let forced = (position.first && i == 0) || (position.last && i == last_part);
            if forced || !words.is_minor(part) {
                capitalize_word(part)
            } else {
                part.to_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

fn capitalize_word(word: &str) -> String {
    // `FBI's` is judged by `FBI`
    let stem = word
        .find(['\'', '\u{2019}'])
        .map_or(word, |index| &word[..index]);
    let letters = stem.chars().filter(|c| c.is_alphabetic()).count();
    let is_acronym = letters >= 2 && stem.chars().all(|c| !c.is_lowercase());
    if is_acronym {
        return word.to_string();
    }

    let mut chars = word.chars();
    let starts_lower = chars.next().is_some_and(char::is_lowercase);
    if starts_lower && chars.any(char::is_uppercase) {
        return word.to_string();
    }

    super::capitalize(word)
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || is_combining_mark(ch)
}

fn is_joiner(ch: char) -> bool {
    matches!(ch, '-' | '\'' | '\u{2019}')
}

fn tokenize(input: &str) -> Vec<Token<'_>> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let start = chars[i].0;
        let in_word = is_word_char(chars[i].1);
        let mut j = i + 1;

        while j < chars.len() {
            let ch = chars[j].1;
            let continues = if in_word {
                is_word_char(ch)
                    || (is_joiner(ch) && chars.get(j + 1).is_some_and(|&(_, n)| is_word_char(n)))
            } else {
                !is_word_char(ch)
            };
            if !continues {
                break;
            }
            j += 1;
        }

        let end = chars.get(j).map_or(input.len(), |&(offset, _)| offset);
        let text = &input[start..end];
        tokens.push(if in_word {
            Token::Word(text)
        } else {
            Token::Other(text)
        });
        i = j;
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_words() {
        assert_eq!(
            to_chicago_title_case("the iPhone vs NASA policy"),
            "The iPhone vs NASA Policy"
        );
    }

    #[test]
    fn test_minor_words_inside_title() {
        assert_eq!(
            to_chicago_title_case("a tale OF two cities and the sea"),
            "A Tale of Two Cities and the Sea"
        );
    }

    #[test]
    fn test_first_and_last_minor_words_are_capitalized() {
        assert_eq!(
            to_chicago_title_case("the world we live in"),
            "The World We Live In"
        );
    }

    #[test]
    fn test_long_prepositions_are_capitalized() {
        assert_eq!(
            to_chicago_title_case("walking between the lines"),
            "Walking Between the Lines"
        );
    }

    #[test]
    fn test_delimiters_preserved() {
        assert_eq!(
            to_chicago_title_case("  hello,   world!  (again)"),
            "  Hello,   World!  (Again)"
        );
    }

    #[test]
    fn test_hyphenated_words() {
        assert_eq!(
            to_chicago_title_case("a state-of-the-art design"),
            "A State-of-the-Art Design"
        );
        assert_eq!(
            to_chicago_title_case("the-end of a run-in"),
            "The-End of a Run-In"
        );
    }

    #[test]
    fn test_apostrophes_stay_inside_words() {
        assert_eq!(
            to_chicago_title_case("don't stop believin'"),
            "Don't Stop Believin'"
        );
    }

    #[test]
    fn test_acronym_possessives_keep_capitals() {
        assert_eq!(
            to_chicago_title_case("report on FBI's files"),
            "Report on FBI's Files"
        );
        assert_eq!(
            to_chicago_title_case("the CEO\u{2019}s plan"),
            "The CEO\u{2019}s Plan"
        );
        assert_eq!(to_chicago_title_case("it's over"), "It's Over");
    }

    #[test]
    fn test_blank_input_unchanged() {
        assert_eq!(to_chicago_title_case(""), "");
        assert_eq!(to_chicago_title_case("   "), "   ");
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("it's a-b, c"),
            vec![
                Token::Word("it's"),
                Token::Other(" "),
                Token::Word("a-b"),
                Token::Other(", "),
                Token::Word("c"),
            ]
        );
        assert_eq!(
            tokenize("-x-"),
            vec![Token::Other("-"), Token::Word("x"), Token::Other("-")]
        );
    }
}
