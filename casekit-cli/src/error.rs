//! Error handling for the CLI application

use std::fmt;

/// User-facing failures of the CLI
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Name does not match any transformation
    UnknownTransformation(String),
    /// Transformation exists but is not in the catalog
    NotInCatalog(String),
    /// Transformation failed while producing the requested output
    TransformationFailed(String),
    /// Input has no separator or case boundary to split on
    NothingToSplit,
    /// Command needs exactly one input
    MultipleInputs(usize),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::UnknownTransformation(name) => write!(
                f,
                "Unknown transformation: {name} (see `casekit list transformations`)"
            ),
            CliError::NotInCatalog(name) => {
                write!(f, "Transformation is not available: {name}")
            }
            CliError::TransformationFailed(name) => write!(f, "Transformation failed: {name}"),
            CliError::NothingToSplit => {
                write!(f, "Input has no separators or case boundaries to split on")
            }
            CliError::MultipleInputs(count) => {
                write!(f, "Expected a single input, got {count} files")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("test.txt".to_string());
        assert_eq!(error.to_string(), "File not found: test.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_transformation_errors_display() {
        let error = CliError::UnknownTransformation("snek-case".to_string());
        assert!(error.to_string().starts_with("Unknown transformation: snek-case"));

        let error = CliError::NotInCatalog("as-is".to_string());
        assert_eq!(error.to_string(), "Transformation is not available: as-is");
    }

    #[test]
    fn test_input_errors_display() {
        assert_eq!(
            CliError::MultipleInputs(3).to_string(),
            "Expected a single input, got 3 files"
        );
        assert!(CliError::NothingToSplit.to_string().contains("split"));
    }

    #[test]
    fn test_converts_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::ConfigError("bad".to_string()).into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert_eq!(err.to_string(), "Configuration error: bad");
    }
}
