//! Transformation identity

use crate::error::{CoreError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Stable identity of every transformation casekit knows about.
///
/// The discriminants are persisted (pinned list, history), so variants are
/// only ever appended. Serialization uses the ordinal; the kebab-case name
/// is the human-facing form used on the command line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum TransformationType {
    AsIs = 0,
    LowerCase = 1,
    UpperCase = 2,
    CamelCase = 3,
    PascalCase = 4,
    CapitalCase = 5,
    SnakeCase = 6,
    UpperSnakeCase = 7,
    PascalSnakeCase = 8,
    ConstantCase = 9,
    KebabCase = 10,
    KebabUpperCase = 11,
    HeaderCase = 12,
    DotCase = 13,
    PathCase = 14,
    PathBackslashCase = 15,
    SentenceCase = 16,
    LowerFirst = 17,
    UpperFirst = 18,
    NoCase = 19,
    SwapCase = 20,
    RandomCase = 21,
    TitleCase = 22,
    TitleCaseInvariant = 23,
    UpperFirstSnakeCase = 24,
    UpperFirstKebabCase = 25,
    RemoveDiacritics = 26,
    RemoveSpecialCharacters = 27,
    RemoveDuplicateWhitespace = 28,
    SpaceCase = 29,
    RemoveDuplicateSpaces = 30,
}

impl TransformationType {
    /// Persisted ordinal of this type
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Kebab-case name, e.g. `snake-case`
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Parse a kebab-case name (case-insensitive)
    pub fn from_name(name: &str) -> Result<Self> {
        name.trim()
            .parse()
            .map_err(|_| CoreError::UnknownTransformation(name.to_string()))
    }

    /// All types in ordinal order
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

impl TryFrom<u8> for TransformationType {
    type Error = CoreError;

    fn try_from(ordinal: u8) -> Result<Self> {
        Self::iter()
            .find(|t| t.ordinal() == ordinal)
            .ok_or(CoreError::InvalidOrdinal(ordinal))
    }
}

impl Serialize for TransformationType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.ordinal())
    }
}

impl<'de> Deserialize<'de> for TransformationType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let ordinal = u8::deserialize(deserializer)?;
        Self::try_from(ordinal).map_err(serde::de::Error::custom)
    }
}
