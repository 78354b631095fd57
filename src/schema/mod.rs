//! Schema types and loading for theorem documents.
//!
//! This module provides strongly-typed Rust representations of the JSON
//! theorem document format. Documents are decoded leniently into an
//! internal raw shape (absent optional fields take their defaults) and then
//! converted into the entity model, rejecting missing required fields and
//! unrecognized enumerated values.

mod diagnostic;
mod error;
mod loader;
mod newtypes;
mod raw;
mod types;
mod validate;

pub use diagnostic::{SchemaDiagnostic, SchemaDiagnosticCode};
pub use error::SchemaError;
pub use loader::{
    export_theorem, export_theorem_file, load_theorem_file, load_theorem_str, parse_theorem,
};
pub use newtypes::{Tag, TagError};
pub use types::{
    DEFAULT_DIFFICULTY_LEVEL, DEFAULT_PROOF_STRATEGY, Hypothesis, HypothesisKind, ProofStatus,
    ProofStep, Theorem,
};
pub use validate::{Validation, ValidationIssue, validate_theorem};
