//! Batch evaluation of every registered transform
//!
//! Preprocessing runs once per category. Each transform then runs in
//! isolation: a panic inside one transform is caught, logged and recorded
//! against that transform only, so the remaining results are unaffected.

use crate::config::{EngineConfig, FailurePolicy};
use crate::definition::{TransformKind, TransformationDefinition};
use crate::registry::Registry;
use casekit_core::{to_lines, TransformationType};
use std::any::Any;
use std::collections::{BTreeMap, BTreeSet};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

/// First line of the diagnostic payload stored for a failed transform
pub const FAILURE_HEADER: &str = "Transformation failed";

/// Output lines per transform, keyed and iterated by type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformResults {
    entries: BTreeMap<TransformationType, Vec<String>>,
    failed: BTreeSet<TransformationType>,
}

impl TransformResults {
    /// Output lines of one transform
    pub fn get(&self, ty: TransformationType) -> Option<&[String]> {
        self.entries.get(&ty).map(Vec::as_slice)
    }

    /// Output lines of one transform joined with `\n`
    pub fn text(&self, ty: TransformationType) -> Option<String> {
        self.entries.get(&ty).map(|lines| lines.join("\n"))
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ordinal order
    pub fn iter(&self) -> impl Iterator<Item = (TransformationType, &[String])> + '_ {
        self.entries.iter().map(|(ty, lines)| (*ty, lines.as_slice()))
    }

    /// Transforms that panicked, whether or not an entry was stored for them
    pub fn failures(&self) -> impl Iterator<Item = TransformationType> + '_ {
        self.failed.iter().copied()
    }

    /// Whether `ty` panicked
    pub fn is_failure(&self, ty: TransformationType) -> bool {
        self.failed.contains(&ty)
    }
}

/// Runs a registry's transforms against one input
#[derive(Debug, Clone)]
pub struct BatchTransformer {
    registry: Arc<Registry>,
    config: EngineConfig,
}

impl Default for BatchTransformer {
    fn default() -> Self {
        Self::new(Registry::standard(), EngineConfig::default())
    }
}

impl BatchTransformer {
    /// Transformer over `registry`
    pub fn new(registry: Arc<Registry>, config: EngineConfig) -> Self {
        Self { registry, config }
    }

    /// Transformer over the standard catalog
    pub fn standard(config: EngineConfig) -> Self {
        Self::new(Registry::standard(), config)
    }

    /// The registry in use
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The configuration in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Apply every registered transform to `input`.
    ///
    /// Word transforms yield exactly one output line per line of the
    /// prepared input. Whole-input transforms yield the lines of their
    /// output. Blank input yields an empty entry for every transform.
    pub fn transform_all(&self, input: &str) -> TransformResults {
        let started = Instant::now();
        let mut results = TransformResults::default();

        for (category_id, definitions) in self.registry.by_category() {
            let category = category_id.category();
            let prepared = category.prepare(input);
            let lines: Vec<Vec<String>> = to_lines(&prepared)
                .into_iter()
                .map(|line| category.words(line))
                .collect();

            for definition in definitions {
                self.run(definition, &prepared, &lines, &mut results);
            }
        }

        log::debug!(
            "transformed {} bytes with {} definitions in {:?} ({} failed)",
            input.len(),
            self.registry.len(),
            started.elapsed(),
            results.failed.len()
        );

        results
    }

    fn run(
        &self,
        definition: &TransformationDefinition,
        prepared: &str,
        lines: &[Vec<String>],
        results: &mut TransformResults,
    ) {
        let ty = definition.transformation_type();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| apply(definition.kind(), prepared, lines)));

        match outcome {
            Ok(output) => {
                results.entries.insert(ty, output);
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                let full = format!(
                    "transformation '{}' ({}) panicked: {}",
                    ty,
                    definition.title(),
                    message
                );
                log::error!("{full}");

                results.failed.insert(ty);
                if self.config.failure_policy == FailurePolicy::Diagnostic {
                    results
                        .entries
                        .insert(ty, vec![FAILURE_HEADER.to_string(), message, full]);
                }
            }
        }
    }
}

fn apply(kind: TransformKind, prepared: &str, lines: &[Vec<String>]) -> Vec<String> {
    match kind {
        TransformKind::Words(transform) => lines.iter().map(|words| transform(words)).collect(),
        TransformKind::All(transform) => to_lines(&transform(prepared))
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CategoryId;
    use casekit_core::transform::words;

    fn explode(_: &[String]) -> String {
        panic!("boom")
    }

    fn failing_registry() -> Arc<Registry> {
        Arc::new(
            Registry::new(vec![
                TransformationDefinition::words(
                    TransformationType::SnakeCase,
                    "snake_case",
                    CategoryId::Technical,
                    words::to_snake_case,
                ),
                TransformationDefinition::words(
                    TransformationType::KebabCase,
                    "kebab-case",
                    CategoryId::Technical,
                    explode,
                ),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_panic_message_variants() {
        let owned: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(owned.as_ref()), "owned");
        let borrowed: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(panic_message(borrowed.as_ref()), "static");
        let other: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(other.as_ref()), "unknown panic payload");
    }

    #[test]
    fn test_diagnostic_policy_records_payload() {
        let transformer = BatchTransformer::new(failing_registry(), EngineConfig::diagnostic());
        let results = transformer.transform_all("foo bar");

        assert_eq!(results.text(TransformationType::SnakeCase).as_deref(), Some("foo_bar"));
        let payload = results.get(TransformationType::KebabCase).unwrap();
        assert_eq!(payload.len(), 3);
        assert_eq!(payload[0], FAILURE_HEADER);
        assert_eq!(payload[1], "boom");
        assert!(payload[2].contains("kebab-case"));
        assert_eq!(
            results.failures().collect::<Vec<_>>(),
            vec![TransformationType::KebabCase]
        );
    }

    #[test]
    fn test_omit_policy_drops_entry() {
        let config = EngineConfig::builder()
            .failure_policy(FailurePolicy::Omit)
            .build()
            .unwrap();
        let transformer = BatchTransformer::new(failing_registry(), config);
        let results = transformer.transform_all("foo bar");

        assert_eq!(results.len(), 1);
        assert!(results.get(TransformationType::KebabCase).is_none());
        assert!(results.is_failure(TransformationType::KebabCase));
    }

    #[test]
    fn test_iteration_in_ordinal_order() {
        let results = BatchTransformer::default().transform_all("x");
        let ordinals: Vec<u8> = results.iter().map(|(ty, _)| ty.ordinal()).collect();
        let mut sorted = ordinals.clone();
        sorted.sort_unstable();
        assert_eq!(ordinals, sorted);
    }
}
