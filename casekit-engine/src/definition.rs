//! Transformation definitions

use crate::category::{CategoryId, TransformationCategory};
use casekit_core::TransformationType;
use std::fmt;
use std::hash::{Hash, Hasher};

/// How a transform consumes its prepared input
#[derive(Clone, Copy)]
pub enum TransformKind {
    /// Applied to the words of each line, one output per line
    Words(fn(&[String]) -> String),
    /// Applied once to the whole prepared input
    All(fn(&str) -> String),
}

impl fmt::Debug for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformKind::Words(_) => f.write_str("Words"),
            TransformKind::All(_) => f.write_str("All"),
        }
    }
}

/// A single entry of the transformation catalog.
///
/// Equality and hashing consider the type only; the type is the identity
/// that history and pinning persist.
#[derive(Debug, Clone)]
pub struct TransformationDefinition {
    ty: TransformationType,
    title: &'static str,
    category: CategoryId,
    kind: TransformKind,
}

impl TransformationDefinition {
    /// Word-array transform
    pub fn words(
        ty: TransformationType,
        title: &'static str,
        category: CategoryId,
        transform: fn(&[String]) -> String,
    ) -> Self {
        Self {
            ty,
            title,
            category,
            kind: TransformKind::Words(transform),
        }
    }

    /// Whole-input transform
    pub fn all(
        ty: TransformationType,
        title: &'static str,
        category: CategoryId,
        transform: fn(&str) -> String,
    ) -> Self {
        Self {
            ty,
            title,
            category,
            kind: TransformKind::All(transform),
        }
    }

    /// Persisted identity
    pub fn transformation_type(&self) -> TransformationType {
        self.ty
    }

    /// Title shown to users
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Category id
    pub fn category_id(&self) -> CategoryId {
        self.category
    }

    /// Category preprocessing contract
    pub fn category(&self) -> &'static TransformationCategory {
        self.category.category()
    }

    /// Transform function
    pub fn kind(&self) -> TransformKind {
        self.kind
    }
}

impl PartialEq for TransformationDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty
    }
}

impl Eq for TransformationDefinition {}

impl Hash for TransformationDefinition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ty.hash(state);
    }
}
