//! Transform command implementation

use super::AppContext;
use crate::config::{HistoryConfig, SectionOrder};
use crate::input::{InputArgs, NamedInput};
use crate::output::{create_formatter, OutputFormat, PreviewLimits, ResultEntry, Section};
use anyhow::Result;
use casekit_core::TransformationType;
use casekit_engine::{BatchTransformer, Registry, TransformResults, TransformationDefinition};
use clap::Args;
use std::io::{self, BufWriter};

/// Arguments for the transform command
#[derive(Debug, Args)]
pub struct TransformArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format (default from configuration)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Only these transformations, in this order
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub types: Vec<String>,

    /// List the catalog only, without recent and pinned sections
    #[arg(long)]
    pub all: bool,
}

impl TransformArgs {
    /// Execute the transform command
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        let filter = self
            .types
            .iter()
            .map(|name| ctx.catalog_type(name))
            .collect::<Result<Vec<_>>>()?;

        let inputs: Vec<NamedInput> = self
            .input
            .read()?
            .into_iter()
            .filter(|input| {
                let blank = input.text.trim().is_empty();
                if blank {
                    log::info!("Skipping blank input {}", input.source);
                }
                !blank
            })
            .collect();
        if inputs.is_empty() {
            return Ok(());
        }

        let state = ctx.open_state()?;
        let entries = listing(
            ctx.registry(),
            state.history(),
            state.pinned(),
            &ctx.config.history,
            (!filter.is_empty()).then_some(filter.as_slice()),
            self.all,
        );

        let results = transform_inputs(&ctx.transformer, &inputs);

        let output = &ctx.config.output;
        let format = match self.format {
            Some(format) => format,
            None => output.format()?,
        };
        let limits = PreviewLimits {
            lines: output.preview_lines,
            width: output.preview_width,
        };
        let mut formatter = create_formatter(
            format,
            BufWriter::new(io::stdout()),
            limits,
            output.pretty_json,
        );

        for (input, results) in inputs.iter().zip(&results) {
            if inputs.len() > 1 {
                formatter.start_input(&input.source)?;
            }

            for (section, definition) in &entries {
                let ty = definition.transformation_type();
                let Some(lines) = results.get(ty) else {
                    continue;
                };
                formatter.format_entry(&ResultEntry {
                    section: *section,
                    ty,
                    title: definition.title(),
                    category: definition.category().display_name(),
                    lines,
                    failed: results.is_failure(ty),
                })?;
            }
        }

        formatter.finish()
    }
}

#[cfg(feature = "parallel")]
fn transform_inputs(transformer: &BatchTransformer, inputs: &[NamedInput]) -> Vec<TransformResults> {
    use rayon::prelude::*;

    inputs
        .par_iter()
        .map(|input| transformer.transform_all(&input.text))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn transform_inputs(transformer: &BatchTransformer, inputs: &[NamedInput]) -> Vec<TransformResults> {
    inputs
        .iter()
        .map(|input| transformer.transform_all(&input.text))
        .collect()
}

/// Order in which results are listed.
///
/// With a filter, exactly the filtered types. Otherwise the leading recent
/// and pinned sections (skipped with `catalog_only`), each type listed once
/// across them, followed by the whole catalog.
pub(crate) fn listing<'r>(
    registry: &'r Registry,
    history: &[TransformationType],
    pinned: &[TransformationType],
    config: &HistoryConfig,
    filter: Option<&[TransformationType]>,
    catalog_only: bool,
) -> Vec<(Section, &'r TransformationDefinition)> {
    let mut entries: Vec<(Section, &TransformationDefinition)> = Vec::new();

    if let Some(types) = filter {
        for &ty in types {
            let listed = entries.iter().any(|(_, d)| d.transformation_type() == ty);
            if let (false, Some(definition)) = (listed, registry.get(ty)) {
                entries.push((Section::All, definition));
            }
        }
        return entries;
    }

    if !catalog_only {
        let recent: Vec<&TransformationDefinition> = history
            .iter()
            .filter_map(|&ty| registry.get(ty))
            .take(config.recent_items)
            .collect();
        let pins: Vec<&TransformationDefinition> =
            pinned.iter().filter_map(|&ty| registry.get(ty)).collect();

        let sections = match config.order {
            SectionOrder::RecentFirst => [(Section::Recent, recent), (Section::Pinned, pins)],
            SectionOrder::PinnedFirst => [(Section::Pinned, pins), (Section::Recent, recent)],
        };

        for (section, definitions) in sections {
            for definition in definitions {
                if !entries.iter().any(|(_, listed)| *listed == definition) {
                    entries.push((section, definition));
                }
            }
        }
    }

    entries.extend(registry.definitions().iter().map(|d| (Section::All, d)));
    entries
}
