//! camelCase / PascalCase boundary detection

/// True when the token holds at least one uppercase and one lowercase letter
pub fn has_mixed_case(token: &str) -> bool {
    let mut has_upper = false;
    let mut has_lower = false;

    for ch in token.chars() {
        has_upper |= ch.is_uppercase();
        has_lower |= ch.is_lowercase();
        if has_upper && has_lower {
            return true;
        }
    }

    false
}

/// Split a token at case transitions.
///
/// A new word starts at an uppercase letter that follows a lowercase letter
/// (`fooBar`), or at an uppercase letter followed by a lowercase one when the
/// current word is non-empty, which closes an acronym run (`XMLParser` becomes
/// `XML`, `Parser`). Single left-to-right pass.
pub fn split_camel_case(token: &str) -> Vec<String> {
    let chars: Vec<char> = token.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if i > 0 && ch.is_uppercase() && !current.is_empty() {
            let after_lower = chars[i - 1].is_lowercase();
            let closes_acronym = chars.get(i + 1).is_some_and(|next| next.is_lowercase());

            if after_lower || closes_acronym {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(ch);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_case() {
        assert!(has_mixed_case("fooBar"));
        assert!(has_mixed_case("Hello"));
        assert!(!has_mixed_case("hello"));
        assert!(!has_mixed_case("HTTP"));
        assert!(!has_mixed_case("a"));
        assert!(!has_mixed_case("123_456"));
    }

    #[test]
    fn test_camel_and_pascal() {
        assert_eq!(split_camel_case("fooBarBaz"), vec!["foo", "Bar", "Baz"]);
        assert_eq!(split_camel_case("FooBar"), vec!["Foo", "Bar"]);
    }

    #[test]
    fn test_acronym_boundary() {
        assert_eq!(
            split_camel_case("XMLHttpRequest"),
            vec!["XML", "Http", "Request"]
        );
        assert_eq!(split_camel_case("XMLParser"), vec!["XML", "Parser"]);
        assert_eq!(split_camel_case("parseURL"), vec!["parse", "URL"]);
    }

    #[test]
    fn test_no_boundary() {
        assert_eq!(split_camel_case("lower"), vec!["lower"]);
        assert_eq!(split_camel_case("UPPER"), vec!["UPPER"]);
        assert!(split_camel_case("").is_empty());
    }

    #[test]
    fn test_digits_do_not_split() {
        assert_eq!(split_camel_case("utf8String"), vec!["utf8", "String"]);
        assert_eq!(split_camel_case("Base64"), vec!["Base64"]);
    }

    #[test]
    fn test_non_ascii_letters() {
        assert_eq!(split_camel_case("žlutýKůň"), vec!["žlutý", "Kůň"]);
    }
}
