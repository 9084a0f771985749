//! Error types for plan execution.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for generation.
pub type GenerationResult<T> = Result<T, GenerationError>;

/// A failure while executing a plan directive or preparing the tree.
///
/// Always carries the identity of the failing directive or path so a caller
/// can report exactly where generation stopped.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("rendering '{template}' for {output} failed: {source}")]
    Template {
        template: String,
        output: PathBuf,
        #[source]
        source: forge_templates::TemplateError,
    },

    #[error("filesystem operation at {path} failed: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
