//! Case transforms
//!
//! Two families:
//! - [`string`]: whole-string transforms that walk the raw text and keep
//!   every non-letter character in place
//! - [`words`]: transforms over a pre-segmented word array, all of the shape
//!   `join(words.map(rule), separator)`
//!
//! Casing is locale-invariant and delegates to Unicode simple and special
//! case mappings from the standard library.

pub mod string;
pub mod title_case;
mod word_list;
pub mod words;

pub use title_case::to_chicago_title_case;
pub use word_list::WordList;

/// Uppercase first character, lowercase the rest
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
    }
}

/// Apply `map` to the first character only
pub(crate) fn map_first(input: &str, map: impl Fn(char) -> String) -> String {
    let mut chars = input.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out = map(first);
            out.push_str(chars.as_str());
            out
        }
    }
}
