//! Transformation categories and their preprocessing contracts
//!
//! A category decides what a transform sees. Transforms in one category
//! share the prepared input, so preprocessing runs once per category rather
//! than once per transform.

use casekit_core::normalizer::{remove_diacritics, replace_special_characters};
use casekit_core::segmenter::{detect_words_multi_line, has_mixed_case, split_camel_case};
use std::borrow::Cow;
use std::fmt;

/// Splits one line into words
pub type LinePreprocessor = fn(&str) -> Vec<String>;

/// Rewrites the whole input before it is split into lines
pub type FilePreprocessor = fn(&str) -> String;

/// Identity of one of the fixed categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryId {
    /// Linguistic case styles
    Text,
    /// Code identifier styles
    Technical,
    /// Separator-only styles
    Separators,
    /// Stand-alone cleanup operations
    Cleanup,
}

impl CategoryId {
    /// All categories in display order
    pub const ALL: [CategoryId; 4] = [
        CategoryId::Text,
        CategoryId::Technical,
        CategoryId::Separators,
        CategoryId::Cleanup,
    ];

    /// The category this id names
    pub fn category(self) -> &'static TransformationCategory {
        match self {
            CategoryId::Text => &TEXT,
            CategoryId::Technical => &TECHNICAL,
            CategoryId::Separators => &SEPARATORS,
            CategoryId::Cleanup => &CLEANUP,
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category().display_name())
    }
}

/// Which features of the input a category leaves intact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preservation {
    /// Accents and other combining marks
    pub diacritics: bool,
    /// Letter case of the input
    pub casing: bool,
    /// `_ - . / \`
    pub separators: bool,
    /// Punctuation and symbols
    pub special_characters: bool,
}

/// A group of transforms sharing one preprocessing contract
#[derive(Debug)]
pub struct TransformationCategory {
    id: CategoryId,
    display_name: &'static str,
    description: &'static str,
    preserves: Preservation,
    line_preprocessor: Option<LinePreprocessor>,
    file_preprocessor: Option<FilePreprocessor>,
}

static TEXT: TransformationCategory = TransformationCategory {
    id: CategoryId::Text,
    display_name: "Text",
    description: "Preserves diacritics and linguistic features.",
    preserves: Preservation {
        diacritics: true,
        casing: true,
        separators: true,
        special_characters: true,
    },
    line_preprocessor: None,
    file_preprocessor: None,
};

static TECHNICAL: TransformationCategory = TransformationCategory {
    id: CategoryId::Technical,
    display_name: "Technical",
    description: "Normalizes for code identifiers (removes diacritics, etc.).",
    preserves: Preservation {
        diacritics: false,
        casing: false,
        separators: false,
        special_characters: false,
    },
    line_preprocessor: Some(identifier_words),
    file_preprocessor: None,
};

static SEPARATORS: TransformationCategory = TransformationCategory {
    id: CategoryId::Separators,
    display_name: "Separators",
    description: "Handles separators but doesn't change case.",
    preserves: Preservation {
        diacritics: true,
        casing: true,
        separators: true,
        special_characters: false,
    },
    line_preprocessor: None,
    file_preprocessor: Some(spread_dominant_separator),
};

static CLEANUP: TransformationCategory = TransformationCategory {
    id: CategoryId::Cleanup,
    display_name: "Special",
    description: "Custom behavior that may not fit other categories.",
    preserves: Preservation {
        diacritics: false,
        casing: false,
        separators: false,
        special_characters: true,
    },
    line_preprocessor: None,
    file_preprocessor: None,
};

impl TransformationCategory {
    /// Id of this category
    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Name shown to users
    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// One-sentence description
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Preservation flags
    pub fn preserves(&self) -> Preservation {
        self.preserves
    }

    /// Whether a line preprocessor replaces the default whitespace split
    pub fn has_line_preprocessor(&self) -> bool {
        self.line_preprocessor.is_some()
    }

    /// Whether the whole input is rewritten before line splitting
    pub fn has_file_preprocessor(&self) -> bool {
        self.file_preprocessor.is_some()
    }

    /// Apply the file preprocessor, borrowing the input when there is none
    pub fn prepare<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match self.file_preprocessor {
            Some(preprocess) => Cow::Owned(preprocess(input)),
            None => Cow::Borrowed(input),
        }
    }

    /// Split one line into non-empty words
    pub fn words(&self, line: &str) -> Vec<String> {
        let words = match self.line_preprocessor {
            Some(preprocess) => preprocess(line),
            None => line.split_whitespace().map(str::to_string).collect(),
        };
        words.into_iter().filter(|w| !w.is_empty()).collect()
    }
}

/// Technical words: ASCII-folded, punctuation as boundaries, camelCase split
fn identifier_words(line: &str) -> Vec<String> {
    let normalized = replace_special_characters(&remove_diacritics(line));
    normalized
        .split_whitespace()
        .flat_map(|token| {
            if has_mixed_case(token) {
                split_camel_case(token)
            } else {
                vec![token.to_string()]
            }
        })
        .collect()
}

/// Replace the dominant separator with spaces when the input is a pure
/// identifier list, otherwise return it untouched
fn spread_dominant_separator(input: &str) -> String {
    let segmentation = detect_words_multi_line(input);

    if segmentation.has_inner_whitespace || !segmentation.has_special_separators {
        return input.to_string();
    }

    match segmentation.dominant_separator {
        Some(separator) => input.replace(separator, " "),
        None => input.to_string(),
    }
}
