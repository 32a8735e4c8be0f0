//! List command implementation

use super::{AppContext, ListCommands};
use anyhow::Result;
use casekit_engine::{Preservation, Registry};

/// Execute a list subcommand
pub fn execute(subcommand: ListCommands, ctx: &AppContext) -> Result<()> {
    let lines = match subcommand {
        ListCommands::Transformations => transformations(ctx.registry()),
        ListCommands::Categories => categories(ctx.registry()),
    };
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn transformations(registry: &Registry) -> Vec<String> {
    registry
        .definitions()
        .iter()
        .map(|d| {
            format!(
                "{:<28} {:<28} {}",
                d.transformation_type().name(),
                d.title(),
                d.category().display_name()
            )
        })
        .collect()
}

fn categories(registry: &Registry) -> Vec<String> {
    let mut lines = Vec::new();
    for (id, definitions) in registry.by_category() {
        let category = id.category();
        lines.push(format!(
            "{} ({} transformations): {}",
            category.display_name(),
            definitions.len(),
            category.description()
        ));
        lines.push(format!("    keeps: {}", kept(category.preserves())));
    }
    lines
}

fn kept(preserves: Preservation) -> String {
    let features = [
        (preserves.diacritics, "diacritics"),
        (preserves.casing, "casing"),
        (preserves.separators, "separators"),
        (preserves.special_characters, "special characters"),
    ];
    let kept: Vec<&str> = features
        .iter()
        .filter(|(kept, _)| *kept)
        .map(|(_, name)| *name)
        .collect();

    if kept.is_empty() {
        "nothing".to_string()
    } else {
        kept.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transformations_in_display_order() {
        let registry = Registry::standard();
        let lines = transformations(&registry);
        assert_eq!(lines.len(), registry.len());
        assert!(lines[0].starts_with("lower-case"));
        assert!(lines.iter().any(|l| l.starts_with("snake-case") && l.ends_with("Technical")));
    }

    #[test]
    fn test_categories_listing() {
        let lines = categories(&Registry::standard());
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("Text (9 transformations)"));
        assert_eq!(lines[3], "    keeps: nothing");
        assert!(lines[6].starts_with("Special"));
    }
}
