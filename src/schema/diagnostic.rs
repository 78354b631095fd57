//! Structured diagnostics for schema loading and validation failures.
//!
//! This module defines the stable machine-readable diagnostic payload used
//! to report parser and validator failures against the source they came
//! from and the theorem field they concern.

/// Stable diagnostic classification codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaDiagnosticCode {
    /// The input could not be read.
    SourceUnavailable,
    /// The input is not a well-formed document.
    MalformedDocument,
    /// A required field is absent.
    MissingField,
    /// An enumerated value is unrecognized.
    InvalidEnum,
    /// An open tag is blank.
    BlankTag,
    /// Export serialization or writing failed.
    ExportFailure,
    /// A post-parse validation rule was violated.
    ValidationFailure,
}

impl SchemaDiagnosticCode {
    /// Returns the stable, machine-readable code string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SourceUnavailable => "schema.source_unavailable",
            Self::MalformedDocument => "schema.malformed_document",
            Self::MissingField => "schema.missing_field",
            Self::InvalidEnum => "schema.invalid_enum",
            Self::BlankTag => "schema.blank_tag",
            Self::ExportFailure => "schema.export_failure",
            Self::ValidationFailure => "schema.validation_failure",
        }
    }
}

/// Structured schema diagnostic payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDiagnostic {
    /// Stable diagnostic code for programmatic handling.
    pub code: SchemaDiagnosticCode,
    /// Source file or source identifier.
    pub source: String,
    /// What the diagnostic is about: a theorem field, a position, or a path.
    pub subject: String,
    /// Deterministic human-readable message.
    pub message: String,
}

impl SchemaDiagnostic {
    /// Renders the diagnostic into a deterministic single-line format
    /// suitable for snapshot tests.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "{} | {} | {} | {}",
            self.code.as_str(),
            self.source,
            self.subject,
            first_line(&self.message)
        )
    }
}

fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or(message)
}
