//! Error types for theorem document loading and export.

use camino::Utf8PathBuf;

use super::diagnostic::{SchemaDiagnostic, SchemaDiagnosticCode};

/// Placeholder used in diagnostics when the theorem id itself is absent.
pub(crate) const UNIDENTIFIED: &str = "<unidentified>";

/// Errors that can occur when loading, parsing, or exporting theorem
/// documents.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The input could not be read.
    #[error("theorem source '{path}' is unavailable: {source}")]
    SourceUnavailable {
        /// Path of the unreadable source.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The input is not a well-formed theorem document.
    #[error("malformed theorem document: {message}")]
    MalformedDocument {
        /// Decoder message.
        message: String,
        /// 1-indexed line of the failure, or 0 when unknown.
        line: usize,
        /// 1-indexed column of the failure, or 0 when unknown.
        column: usize,
    },

    /// A required field is absent.
    #[error("theorem '{theorem}' is missing required field `{field}`")]
    MissingField {
        /// Theorem id, or a placeholder when the id is the missing field.
        theorem: String,
        /// Name of the absent field.
        field: &'static str,
    },

    /// An enumerated field holds a value outside its closed set.
    #[error(
        "theorem '{theorem}': field `{field}` has unrecognized value '{value}' \
         (expected one of: {expected})"
    )]
    InvalidEnum {
        /// Theorem id, or a placeholder when absent.
        theorem: String,
        /// Path of the offending field, e.g. `hypotheses[1].type`.
        field: String,
        /// The rejected value.
        value: String,
        /// The accepted values.
        expected: &'static str,
    },

    /// An open tag field is present but blank.
    #[error("theorem '{theorem}': field `{field}` must be non-empty after trimming")]
    BlankTag {
        /// Theorem id, or a placeholder when absent.
        theorem: String,
        /// Name of the blank tag field.
        field: &'static str,
    },

    /// Serializing a theorem for export failed.
    #[error("failed to serialize theorem '{theorem}': {source}")]
    Serialize {
        /// Id of the theorem being exported.
        theorem: String,
        /// Underlying encoder failure.
        source: serde_json::Error,
    },

    /// Writing an exported theorem failed.
    #[error("failed to write theorem export '{path}': {source}")]
    ExportUnwritable {
        /// Destination path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
}

impl SchemaError {
    /// Returns the stable diagnostic classification for this error.
    #[must_use]
    pub const fn code(&self) -> SchemaDiagnosticCode {
        match self {
            Self::SourceUnavailable { .. } => SchemaDiagnosticCode::SourceUnavailable,
            Self::MalformedDocument { .. } => SchemaDiagnosticCode::MalformedDocument,
            Self::MissingField { .. } => SchemaDiagnosticCode::MissingField,
            Self::InvalidEnum { .. } => SchemaDiagnosticCode::InvalidEnum,
            Self::BlankTag { .. } => SchemaDiagnosticCode::BlankTag,
            Self::Serialize { .. } | Self::ExportUnwritable { .. } => {
                SchemaDiagnosticCode::ExportFailure
            }
        }
    }

    /// Builds a structured diagnostic attributing this error to `source`.
    #[must_use]
    pub fn diagnostic(&self, source: &str) -> SchemaDiagnostic {
        let subject = match self {
            Self::SourceUnavailable { path, .. } | Self::ExportUnwritable { path, .. } => {
                format!("path={path}")
            }
            Self::MalformedDocument { line, column, .. } if *line > 0 => {
                format!("line={line} column={column}")
            }
            Self::MalformedDocument { .. } => "-".to_owned(),
            Self::MissingField { theorem, field } | Self::BlankTag { theorem, field } => {
                format!("theorem={theorem} field={field}")
            }
            Self::InvalidEnum { theorem, field, .. } => format!("theorem={theorem} field={field}"),
            Self::Serialize { theorem, .. } => format!("theorem={theorem}"),
        };
        SchemaDiagnostic {
            code: self.code(),
            source: source.to_owned(),
            subject,
            message: self.to_string(),
        }
    }
}
