//! Theorem document loading and export.
//!
//! [`parse_theorem`] converts an already-decoded JSON value into a
//! [`Theorem`]. [`load_theorem_str`] and [`load_theorem_file`] are thin
//! callers that decode text from a string or a file first, surfacing
//! unreadable sources and malformed JSON as distinct errors.
//! [`export_theorem`] writes the canonical form back out.

use camino::Utf8Path;
use serde::Deserialize;
use serde_json::Value;

use super::error::SchemaError;
use super::raw::RawTheorem;
use super::types::Theorem;

/// Parses a decoded JSON document into a [`Theorem`].
///
/// Absent optional fields take their documented defaults and absent lists
/// become empty. Unknown keys are ignored. This is a pure transformation.
///
/// # Errors
///
/// Returns [`SchemaError::MalformedDocument`] if the value is not an
/// object or a field has the wrong JSON type,
/// [`SchemaError::MissingField`] if `theorem_id`, `name`, `statement`, or
/// `formal_statement` is absent, [`SchemaError::InvalidEnum`] if a
/// hypothesis `type` or the theorem `status` is unrecognized, and
/// [`SchemaError::BlankTag`] if `proof_strategy` or `difficulty_level` is
/// present but blank.
///
/// # Examples
///
///     use serde_json::json;
///     use theoremsite::schema::parse_theorem;
///
///     let document = json!({
///         "theorem_id": "t1",
///         "name": "Sample",
///         "statement": "A implies A",
///         "formal_statement": "A -> A",
///     });
///     let theorem = parse_theorem(&document).unwrap();
///     assert_eq!(theorem.difficulty_level, "medium");
pub fn parse_theorem(document: &Value) -> Result<Theorem, SchemaError> {
    if !document.is_object() {
        return Err(SchemaError::MalformedDocument {
            message: "expected a JSON object at the top level".to_owned(),
            line: 0,
            column: 0,
        });
    }
    let raw = RawTheorem::deserialize(document).map_err(malformed)?;
    raw.into_theorem()
}

/// Decodes a JSON string and parses it into a [`Theorem`].
///
/// # Errors
///
/// Returns [`SchemaError::MalformedDocument`] if `input` is not valid JSON,
/// otherwise any error from [`parse_theorem`].
pub fn load_theorem_str(input: &str) -> Result<Theorem, SchemaError> {
    let document: Value = serde_json::from_str(input).map_err(malformed)?;
    parse_theorem(&document)
}

/// Reads a JSON file and parses it into a [`Theorem`].
///
/// # Errors
///
/// Returns [`SchemaError::SourceUnavailable`] if the file cannot be read,
/// otherwise any error from [`load_theorem_str`].
pub fn load_theorem_file(path: &Utf8Path) -> Result<Theorem, SchemaError> {
    let input = crate::fs::read_utf8(path).map_err(|source| SchemaError::SourceUnavailable {
        path: path.to_owned(),
        source,
    })?;
    load_theorem_str(&input)
}

/// Serializes a theorem to pretty-printed JSON in the canonical document
/// shape. Absent optional values are written as explicit `null`.
///
/// # Errors
///
/// Returns [`SchemaError::Serialize`] if encoding fails.
pub fn export_theorem(theorem: &Theorem) -> Result<String, SchemaError> {
    serde_json::to_string_pretty(theorem).map_err(|source| SchemaError::Serialize {
        theorem: theorem.theorem_id.clone(),
        source,
    })
}

/// Exports a theorem to a JSON file, replacing any existing file.
///
/// # Errors
///
/// Returns [`SchemaError::Serialize`] if encoding fails and
/// [`SchemaError::ExportUnwritable`] if the file cannot be written.
pub fn export_theorem_file(theorem: &Theorem, path: &Utf8Path) -> Result<(), SchemaError> {
    let json = export_theorem(theorem)?;
    crate::fs::write_utf8(path, &json).map_err(|source| SchemaError::ExportUnwritable {
        path: path.to_owned(),
        source,
    })
}

fn malformed(error: serde_json::Error) -> SchemaError {
    SchemaError::MalformedDocument {
        message: error.to_string(),
        line: error.line(),
        column: error.column(),
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
