//! Word-array case transforms
//!
//! Every transform here maps an empty word array to an empty string.

use super::{capitalize, string};

fn join_with(words: &[String], separator: &str, rule: impl Fn(usize, &str) -> String) -> String {
    words
        .iter()
        .enumerate()
        .map(|(index, word)| rule(index, word))
        .collect::<Vec<_>>()
        .join(separator)
}

fn lower(_: usize, word: &str) -> String {
    word.to_lowercase()
}

fn upper(_: usize, word: &str) -> String {
    word.to_uppercase()
}

fn capital(_: usize, word: &str) -> String {
    capitalize(word)
}

/// `camelCase`
pub fn to_camel_case(words: &[String]) -> String {
    join_with(words, "", |index, word| {
        if index == 0 {
            word.to_lowercase()
        } else {
            capitalize(word)
        }
    })
}

/// `PascalCase`
pub fn to_pascal_case(words: &[String]) -> String {
    join_with(words, "", capital)
}

/// `snake_case`
pub fn to_snake_case(words: &[String]) -> String {
    join_with(words, "_", lower)
}

/// `UPPER_SNAKE_CASE`
pub fn to_upper_snake_case(words: &[String]) -> String {
    join_with(words, "_", upper)
}

/// `CONSTANT_CASE`, same shape as upper snake case
pub fn to_constant_case(words: &[String]) -> String {
    join_with(words, "_", upper)
}

/// `Pascal_Snake_Case`
pub fn to_pascal_snake_case(words: &[String]) -> String {
    join_with(words, "_", capital)
}

/// `Upper first Snake_Case`
pub fn to_upper_first_snake_case(words: &[String]) -> String {
    join_with(words, "_", capital)
}

/// `kebab-case`
pub fn to_kebab_case(words: &[String]) -> String {
    join_with(words, "-", lower)
}

/// `KEBAB-UPPER-CASE`
pub fn to_kebab_upper_case(words: &[String]) -> String {
    join_with(words, "-", upper)
}

/// `Header-Case`
pub fn to_header_case(words: &[String]) -> String {
    join_with(words, "-", capital)
}

/// `Upper first Kebab-Case`
pub fn to_upper_first_kebab_case(words: &[String]) -> String {
    join_with(words, "-", capital)
}

/// `dot.case`
pub fn to_dot_case(words: &[String]) -> String {
    join_with(words, ".", lower)
}

/// `path/case`
pub fn to_path_case(words: &[String]) -> String {
    join_with(words, "/", lower)
}

/// `path\case\backslash`
pub fn to_path_backslash_case(words: &[String]) -> String {
    join_with(words, "\\", lower)
}

/// `space case`
pub fn to_space_case(words: &[String]) -> String {
    join_with(words, " ", lower)
}

/// Words rejoined with single spaces, case untouched
pub fn to_no_case(words: &[String]) -> String {
    words.join(" ")
}

/// Passthrough, identical to [`to_no_case`]
pub fn as_is(words: &[String]) -> String {
    to_no_case(words)
}

/// `lower case` over the joined words
pub fn to_lower_case(words: &[String]) -> String {
    join_with(words, " ", lower)
}

/// `UPPER CASE` over the joined words
pub fn to_upper_case(words: &[String]) -> String {
    join_with(words, " ", upper)
}

/// `Capital Case`: every word capitalized
pub fn to_capital_case(words: &[String]) -> String {
    join_with(words, " ", capital)
}

/// `Sentence case`: first word capitalized, the rest lowercased
pub fn to_sentence_case(words: &[String]) -> String {
    join_with(words, " ", |index, word| {
        if index == 0 {
            capitalize(word)
        } else {
            word.to_lowercase()
        }
    })
}

/// `sWAP cASE` over the joined words
pub fn to_swap_case(words: &[String]) -> String {
    string::to_swap_case(&words.join(" "))
}

/// `rAndOm cAsE` over the joined words
pub fn to_random_case(words: &[String]) -> String {
    string::to_random_case(&words.join(" "))
}

/// `lower First` over the joined words
pub fn to_lower_first(words: &[String]) -> String {
    string::to_lower_first(&words.join(" "))
}

/// `Upper first` over the joined words
pub fn to_upper_first(words: &[String]) -> String {
    string::to_upper_first(&words.join(" "))
}

/// Chicago title case over the joined words
pub fn to_title_case(words: &[String]) -> String {
    string::to_title_case(&words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &[&str]) -> Vec<String> {
        input.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_identifier_styles() {
        let w = words(&["xml", "HTTP", "request"]);
        assert_eq!(to_camel_case(&w), "xmlHttpRequest");
        assert_eq!(to_pascal_case(&w), "XmlHttpRequest");
        assert_eq!(to_snake_case(&w), "xml_http_request");
        assert_eq!(to_upper_snake_case(&w), "XML_HTTP_REQUEST");
        assert_eq!(to_constant_case(&w), "XML_HTTP_REQUEST");
        assert_eq!(to_pascal_snake_case(&w), "Xml_Http_Request");
        assert_eq!(to_upper_first_snake_case(&w), "Xml_Http_Request");
        assert_eq!(to_kebab_case(&w), "xml-http-request");
        assert_eq!(to_kebab_upper_case(&w), "XML-HTTP-REQUEST");
        assert_eq!(to_header_case(&w), "Xml-Http-Request");
        assert_eq!(to_upper_first_kebab_case(&w), "Xml-Http-Request");
    }

    #[test]
    fn test_separator_styles() {
        let w = words(&["Some", "Path", "Here"]);
        assert_eq!(to_dot_case(&w), "some.path.here");
        assert_eq!(to_path_case(&w), "some/path/here");
        assert_eq!(to_path_backslash_case(&w), r"some\path\here");
        assert_eq!(to_space_case(&w), "some path here");
    }

    #[test]
    fn test_no_case_keeps_casing() {
        let w = words(&["MiXeD", "case", "WORDS"]);
        assert_eq!(to_no_case(&w), "MiXeD case WORDS");
        assert_eq!(as_is(&w), "MiXeD case WORDS");
    }

    #[test]
    fn test_text_styles() {
        let w = words(&["hELLO", "wORLD"]);
        assert_eq!(to_lower_case(&w), "hello world");
        assert_eq!(to_upper_case(&w), "HELLO WORLD");
        assert_eq!(to_capital_case(&w), "Hello World");
        assert_eq!(to_sentence_case(&w), "Hello world");
        assert_eq!(to_swap_case(&w), "Hello World");
        assert_eq!(to_lower_first(&w), "hELLO wORLD");
        assert_eq!(to_upper_first(&w), "HELLO wORLD");
        assert_eq!(to_title_case(&words(&["war", "and", "peace"])), "War and Peace");
    }

    #[test]
    fn test_single_character_words() {
        let w = words(&["a", "b"]);
        assert_eq!(to_camel_case(&w), "aB");
        assert_eq!(to_pascal_case(&w), "AB");
    }

    #[test]
    fn test_empty_array_yields_empty_string() {
        let empty: Vec<String> = Vec::new();
        let transforms: [fn(&[String]) -> String; 12] = [
            to_camel_case,
            to_pascal_case,
            to_snake_case,
            to_constant_case,
            to_kebab_case,
            to_header_case,
            to_dot_case,
            to_path_case,
            to_no_case,
            to_sentence_case,
            to_random_case,
            to_title_case,
        ];
        for transform in transforms {
            assert_eq!(transform(&empty), "");
        }
    }
}
