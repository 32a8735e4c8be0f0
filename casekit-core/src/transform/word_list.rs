use crate::error::{CoreError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::OnceLock;

static CHICAGO: OnceLock<WordList> = OnceLock::new();

const CHICAGO_TOML: &str = include_str!("../../configs/title_case/chicago.toml");

#[derive(Debug, Deserialize)]
struct WordListConfig {
    metadata: MetadataConfig,
    words: WordsConfig,
}

#[derive(Debug, Deserialize)]
struct MetadataConfig {
    style: String,
    short_preposition_max_len: usize,
}

#[derive(Debug, Deserialize)]
struct WordsConfig {
    articles: Vec<String>,
    coordinating_conjunctions: Vec<String>,
    #[serde(default)]
    short_prepositions: Vec<String>,
}

/// Minor words of a title-case style guide, matched case-insensitively
#[derive(Debug, Clone)]
pub struct WordList {
    style: String,
    articles: HashSet<String>,
    conjunctions: HashSet<String>,
    short_prepositions: HashSet<String>,
    short_preposition_max_len: usize,
}

impl WordList {
    /// Parse a word list from its TOML form
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: WordListConfig =
            toml::from_str(content).map_err(|e| CoreError::WordList(e.to_string()))?;

        if config.words.articles.is_empty() {
            return Err(CoreError::WordList(format!(
                "style '{}' defines no articles",
                config.metadata.style
            )));
        }

        let lowered = |words: Vec<String>| -> HashSet<String> {
            words.into_iter().map(|w| w.to_lowercase()).collect()
        };

        Ok(Self {
            style: config.metadata.style,
            articles: lowered(config.words.articles),
            conjunctions: lowered(config.words.coordinating_conjunctions),
            short_prepositions: lowered(config.words.short_prepositions),
            short_preposition_max_len: config.metadata.short_preposition_max_len,
        })
    }

    /// The embedded Chicago Manual of Style list
    pub fn chicago() -> &'static WordList {
        CHICAGO.get_or_init(|| Self::from_toml_or_empty(CHICAGO_TOML))
    }

    fn from_toml_or_empty(content: &str) -> Self {
        Self::from_toml(content).unwrap_or_else(|e| {
            log::warn!("Falling back to an empty title case word list: {e}");
            Self::empty()
        })
    }

    fn empty() -> Self {
        Self {
            style: "none".to_string(),
            articles: HashSet::new(),
            conjunctions: HashSet::new(),
            short_prepositions: HashSet::new(),
            short_preposition_max_len: 0,
        }
    }

    /// Style guide name
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Article, coordinating conjunction or short preposition
    pub fn is_minor(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.articles.contains(&lower)
            || self.conjunctions.contains(&lower)
            || (lower.chars().count() <= self.short_preposition_max_len
                && self.short_prepositions.contains(&lower))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_list_parses() {
        let list = WordList::from_toml(CHICAGO_TOML).unwrap();
        assert_eq!(list.style(), "chicago");
    }

    #[test]
    fn test_unparsable_list_falls_back_to_empty() {
        let list = WordList::from_toml_or_empty("[metadata\nstyle =");
        assert_eq!(list.style(), "none");
        assert!(!list.is_minor("the"));

        let list = WordList::from_toml_or_empty(CHICAGO_TOML);
        assert_eq!(list.style(), "chicago");
    }

    #[test]
    fn test_minor_words() {
        let list = WordList::chicago();
        for word in ["a", "An", "THE", "and", "nor", "of", "vs", "with", "from"] {
            assert!(list.is_minor(word), "{word} should be minor");
        }
        for word in ["policy", "about", "between", "iPhone"] {
            assert!(!list.is_minor(word), "{word} should not be minor");
        }
    }

    #[test]
    fn test_length_limit_applies_to_prepositions_only() {
        let list = WordList::from_toml(
            r#"
            [metadata]
            style = "strict"
            short_preposition_max_len = 2

            [words]
            articles = ["the"]
            coordinating_conjunctions = ["and"]
            short_prepositions = ["of", "with"]
            "#,
        )
        .unwrap();

        assert!(list.is_minor("of"));
        assert!(!list.is_minor("with"));
        assert!(list.is_minor("and"));
    }

    #[test]
    fn test_invalid_list() {
        assert!(matches!(
            WordList::from_toml("not = [valid"),
            Err(CoreError::WordList(_))
        ));

        let empty = r#"
            [metadata]
            style = "empty"
            short_preposition_max_len = 4

            [words]
            articles = []
            coordinating_conjunctions = []
        "#;
        assert!(matches!(
            WordList::from_toml(empty),
            Err(CoreError::WordList(_))
        ));
    }
}
