//! `theoremsite` ingests structured theorem descriptions, validates their
//! internal consistency, and renders them into a static document set.
//!
//! The crate loads theorem documents written in JSON into a strongly-typed
//! entity model, checks theorem-level invariants, derives the configuration
//! an external prover would need, and renders one HTML page per theorem plus
//! an index page. No proof search is performed.

/// Process-wide processing configuration.
pub mod config;
mod fs;
/// Tracing subscriber installation.
pub mod logging;
/// Theorem registry and site generation.
pub mod registry;
/// HTML and plain-text rendering of theorems.
pub mod render;
/// Entity model, loading, export, and validation of theorem documents.
pub mod schema;
/// Projection of theorems into solver-facing configuration.
pub mod solver;

pub use config::{ConfigError, Configuration};
pub use registry::{
    InvalidTheorem, LoadOutcome, Registry, RegistryError, SiteReport, TheoremState,
};
pub use render::RenderError;
pub use schema::{SchemaError, Theorem, Validation, validate_theorem};
pub use solver::{SolverConfig, project};
