//! Immutable transformation catalog

use crate::category::CategoryId;
use crate::definition::TransformationDefinition;
use crate::error::{EngineError, Result};
use casekit_core::normalizer;
use casekit_core::transform::{string, words};
use casekit_core::TransformationType as T;
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

static STANDARD: OnceLock<Arc<Registry>> = OnceLock::new();

/// Ordered, duplicate-free list of transformation definitions
#[derive(Debug, Clone)]
pub struct Registry {
    definitions: Vec<TransformationDefinition>,
}

impl Registry {
    /// Build a registry, rejecting definitions that repeat a type
    pub fn new(definitions: Vec<TransformationDefinition>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(definitions.len());
        for definition in &definitions {
            let ty = definition.transformation_type();
            if !seen.insert(ty) {
                return Err(EngineError::DuplicateTransformation(ty));
            }
        }
        Ok(Self { definitions })
    }

    /// The shared standard catalog
    pub fn standard() -> Arc<Registry> {
        Arc::clone(STANDARD.get_or_init(|| Arc::new(Registry {
            definitions: standard_definitions(),
        })))
    }

    /// Definitions in display order
    pub fn definitions(&self) -> &[TransformationDefinition] {
        &self.definitions
    }

    /// Look up a definition by type
    pub fn get(&self, ty: T) -> Option<&TransformationDefinition> {
        self.definitions
            .iter()
            .find(|d| d.transformation_type() == ty)
    }

    /// Whether `ty` is registered
    pub fn contains(&self, ty: T) -> bool {
        self.get(ty).is_some()
    }

    /// Categories in order of first appearance, each with its definitions
    pub fn by_category(&self) -> Vec<(CategoryId, Vec<&TransformationDefinition>)> {
        let mut groups: Vec<(CategoryId, Vec<&TransformationDefinition>)> = Vec::new();
        for definition in &self.definitions {
            let id = definition.category_id();
            match groups.iter_mut().find(|(group, _)| *group == id) {
                Some((_, members)) => members.push(definition),
                None => groups.push((id, vec![definition])),
            }
        }
        groups
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn standard_definitions() -> Vec<TransformationDefinition> {
    use CategoryId::{Cleanup, Separators, Technical, Text};
    use TransformationDefinition as D;

    vec![
        D::all(T::LowerCase, "lower case", Text, string::to_lower_case),
        D::all(T::UpperCase, "UPPER CASE", Text, string::to_upper_case),
        D::all(T::SentenceCase, "Sentence case", Text, string::to_sentence_case),
        D::all(T::LowerFirst, "lower First", Text, string::to_lower_first),
        D::all(T::UpperFirst, "Upper first", Text, string::to_upper_first),
        D::all(T::CapitalCase, "Capital Case", Text, string::to_capital_case),
        D::all(T::TitleCase, "Title Case (Chicago style)", Text, string::to_title_case),
        D::all(T::SwapCase, "sWAP cASE", Text, string::to_swap_case),
        D::all(T::RandomCase, "rAndOm cAsE", Text, string::to_random_case),
        D::words(T::CamelCase, "camelCase", Technical, words::to_camel_case),
        D::words(T::PascalCase, "PascalCase", Technical, words::to_pascal_case),
        D::words(T::SnakeCase, "snake_case", Technical, words::to_snake_case),
        D::words(T::UpperSnakeCase, "UPPER_SNAKE_CASE", Technical, words::to_upper_snake_case),
        D::words(T::PascalSnakeCase, "Pascal_Snake_Case", Technical, words::to_pascal_snake_case),
        D::words(T::ConstantCase, "CONSTANT_CASE", Technical, words::to_constant_case),
        D::words(T::KebabCase, "kebab-case", Technical, words::to_kebab_case),
        D::words(T::KebabUpperCase, "KEBAB-UPPER-CASE", Technical, words::to_kebab_upper_case),
        D::words(T::HeaderCase, "Header-Case", Technical, words::to_header_case),
        D::words(
            T::UpperFirstSnakeCase,
            "Upper first Snake_Case",
            Technical,
            words::to_upper_first_snake_case,
        ),
        D::words(
            T::UpperFirstKebabCase,
            "Upper first Kebab-Case",
            Technical,
            words::to_upper_first_kebab_case,
        ),
        D::words(T::SpaceCase, "space case", Separators, words::to_space_case),
        D::words(T::DotCase, "dot.case", Separators, words::to_dot_case),
        D::words(T::PathCase, "path/case", Separators, words::to_path_case),
        D::words(
            T::PathBackslashCase,
            "path\\case\\backslash",
            Separators,
            words::to_path_backslash_case,
        ),
        D::all(T::RemoveDiacritics, "Remove diacritics", Cleanup, normalizer::remove_diacritics),
        D::all(
            T::RemoveSpecialCharacters,
            "Remove special characters",
            Cleanup,
            normalizer::remove_special_characters,
        ),
        D::all(
            T::RemoveDuplicateWhitespace,
            "Remove duplicate spaces, lines and tabs",
            Cleanup,
            normalizer::remove_duplicate_whitespace,
        ),
        D::all(
            T::RemoveDuplicateSpaces,
            "Remove duplicate spaces",
            Cleanup,
            normalizer::remove_duplicate_spaces,
        ),
    ]
}
