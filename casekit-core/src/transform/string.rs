//! Whole-string case transforms

use super::{map_first, title_case};
use rand::Rng;

const SENTENCE_ENDINGS: [char; 3] = ['.', '!', '?'];

/// `lower case`
pub fn to_lower_case(input: &str) -> String {
    input.to_lowercase()
}

/// `UPPER CASE`
pub fn to_upper_case(input: &str) -> String {
    input.to_uppercase()
}

/// `Capital Case`: the first letter of every maximal letter run is
/// uppercased, the rest of the run lowercased.
pub fn to_capital_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut previous_is_letter = false;

    for ch in input.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(ch);
            previous_is_letter = false;
        }
    }

    out
}

/// `Sentence case`: a letter is uppercased when no letter appears between
/// it and the previous `.`, `!`, `?` (or the start of the input); every
/// other letter is lowercased.
pub fn to_sentence_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_sentence_start = true;

    for ch in input.chars() {
        if ch.is_alphabetic() {
            if at_sentence_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_sentence_start = false;
        } else {
            if SENTENCE_ENDINGS.contains(&ch) {
                at_sentence_start = true;
            }
            out.push(ch);
        }
    }

    out
}

/// `sWAP cASE`: every letter independently inverted
pub fn to_swap_case(input: &str) -> String {
    if input.trim().is_empty() {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_uppercase() {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
    }
    out
}

/// `rAndOm cAsE` using the calling thread's generator.
///
/// Not reproducible; see [`to_random_case_with`] for a caller-supplied
/// generator.
pub fn to_random_case(input: &str) -> String {
    to_random_case_with(input, &mut rand::rng())
}

/// `rAndOm cAsE` with an unbiased coin flip per character from `rng`
pub fn to_random_case_with<R: Rng>(input: &str, rng: &mut R) -> String {
    if input.trim().is_empty() {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if rng.random::<bool>() {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// `lower First`: only the first character is lowercased
pub fn to_lower_first(input: &str) -> String {
    if input.trim().is_empty() {
        return input.to_string();
    }
    map_first(input, |ch| ch.to_lowercase().collect())
}

/// `Upper first`: only the first character is uppercased
pub fn to_upper_first(input: &str) -> String {
    if input.trim().is_empty() {
        return input.to_string();
    }
    map_first(input, |ch| ch.to_uppercase().collect())
}

/// `Title Case` following the Chicago Manual of Style
pub fn to_title_case(input: &str) -> String {
    title_case::to_chicago_title_case(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_lower_upper() {
        assert_eq!(to_lower_case("Hello WORLD"), "hello world");
        assert_eq!(to_upper_case("Hello world"), "HELLO WORLD");
        assert_eq!(to_upper_case("straße"), "STRASSE");
    }

    #[test]
    fn test_capital_case() {
        assert_eq!(to_capital_case("hello wORLD"), "Hello World");
        assert_eq!(to_capital_case("foo_bar-baz"), "Foo_Bar-Baz");
        assert_eq!(to_capital_case("état civil"), "État Civil");
        assert_eq!(to_capital_case("abc123def"), "Abc123Def");
        assert_eq!(to_capital_case(""), "");
    }

    #[test]
    fn test_sentence_case() {
        assert_eq!(
            to_sentence_case("hello world. this IS a TEST."),
            "Hello world. This is a test."
        );
        assert_eq!(
            to_sentence_case("WHAT?! no way... 42 apples"),
            "What?! No way... 42 Apples"
        );
    }

    #[test]
    fn test_sentence_case_leading_punctuation() {
        assert_eq!(to_sentence_case("  \"quoted\" TEXT"), "  \"Quoted\" text");
        assert_eq!(to_sentence_case("1. first\n2. second"), "1. First\n2. Second");
    }

    #[test]
    fn test_swap_case() {
        assert_eq!(to_swap_case("Hello World 1"), "hELLO wORLD 1");
        assert_eq!(to_swap_case("   "), "   ");
    }

    #[test]
    fn test_random_case_structure() {
        let input = "The quick brown fox jumps over 13 lazy dogs!";
        let output = to_random_case(input);
        assert_eq!(output.len(), input.len());
        assert_eq!(output.to_lowercase(), input.to_lowercase());
    }

    #[test]
    fn test_random_case_with_seeded_rng() {
        let mut first = StdRng::seed_from_u64(7);
        let mut second = StdRng::seed_from_u64(7);
        let input = "reproducible only with a fixed seed";
        assert_eq!(
            to_random_case_with(input, &mut first),
            to_random_case_with(input, &mut second)
        );
    }

    #[test]
    fn test_random_case_blank() {
        assert_eq!(to_random_case(""), "");
        assert_eq!(to_random_case(" \t"), " \t");
    }

    #[test]
    fn test_first_letter() {
        assert_eq!(to_lower_first("Hello World"), "hello World");
        assert_eq!(to_upper_first("hello world"), "Hello world");
        assert_eq!(to_upper_first(" hello"), " hello");
        assert_eq!(to_upper_first(""), "");
    }
}
