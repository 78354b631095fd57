//! HTML and plain-text rendering of theorems.
//!
//! Every renderer is a pure function from entity values to text. File
//! output is the caller's concern; see
//! [`Registry::generate_site`](crate::registry::Registry::generate_site).
//! Rendering is deterministic: the same inputs always produce
//! byte-identical output.

mod html;
mod index;
mod summary;
mod theorem;

use camino::Utf8PathBuf;

pub use html::{condition_label, escape};
pub use index::{INDEX_FILE_NAME, render_index_document};
pub use summary::render_theorem_summary;
pub use theorem::{document_file_name, render_theorem_document};

/// Errors that can occur while rendering or writing documents.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The solver configuration could not be serialized.
    #[error("failed to serialize solver configuration for theorem '{theorem_id}': {source}")]
    SolverConfig {
        /// Theorem whose projection failed to serialize.
        theorem_id: String,
        /// Underlying encoder failure.
        source: serde_json::Error,
    },

    /// The output directory could not be created or opened.
    #[error("output directory '{path}' is unusable: {source}")]
    OutputDirectory {
        /// Requested output directory.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// A theorem's document name collides with the index document.
    #[error("theorem '{theorem_id}' would overwrite the index document")]
    ReservedName {
        /// The colliding theorem id.
        theorem_id: String,
    },

    /// A theorem document could not be written.
    #[error("failed to write document '{file}' for theorem '{theorem_id}': {source}")]
    Document {
        /// Theorem whose document failed.
        theorem_id: String,
        /// File name inside the output directory.
        file: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The index document could not be written.
    #[error("failed to write index document in '{path}': {source}")]
    Index {
        /// Output directory.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
}

impl RenderError {
    /// The theorem the failure concerns, if it is specific to one.
    #[must_use]
    pub fn theorem_id(&self) -> Option<&str> {
        match self {
            Self::SolverConfig { theorem_id, .. }
            | Self::ReservedName { theorem_id }
            | Self::Document { theorem_id, .. } => Some(theorem_id),
            Self::OutputDirectory { .. } | Self::Index { .. } => None,
        }
    }
}
