//! Solver-facing configuration derived from a theorem.
//!
//! [`project`] combines a theorem with the active [`Configuration`] into the
//! payload an external prover would need. Nothing here invokes a prover.

use serde::Serialize;

use crate::config::Configuration;
use crate::schema::{Hypothesis, Tag, Theorem};

/// What an external solver would need to attempt a theorem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolverConfig {
    /// Theorem display name.
    pub goal_name: String,
    /// Theorem identifier.
    pub goal_id: String,
    /// Solver backend name.
    pub solver: Tag,
    /// Per-goal timeout in seconds.
    pub timeout: u32,
    /// Symbolic statement to prove.
    pub formal_statement: String,
    /// Hypotheses in their canonical serialized form.
    pub hypotheses: Vec<Hypothesis>,
    /// Proof strategy tag.
    pub proof_strategy: Tag,
    /// Whether certificates should be produced.
    pub generate_certificates: bool,
}

impl SolverConfig {
    /// Pretty-printed JSON form of the configuration.
    ///
    /// # Errors
    ///
    /// Returns the encoder error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Derives the solver configuration for `theorem` under `config`.
///
/// # Examples
///
///     use theoremsite::{Configuration, Theorem, project};
///
///     let theorem = Theorem::new("t1", "Sample", "A implies A", "A -> A");
///     let solver = project(&theorem, &Configuration::default());
///     assert_eq!(solver.goal_id, "t1");
///     assert_eq!(solver.timeout, 30);
#[must_use]
pub fn project(theorem: &Theorem, config: &Configuration) -> SolverConfig {
    SolverConfig {
        goal_name: theorem.name.clone(),
        goal_id: theorem.theorem_id.clone(),
        solver: config.solver_backend().clone(),
        timeout: config.timeout_seconds().get(),
        formal_statement: theorem.formal_statement.clone(),
        hypotheses: theorem.hypotheses.clone(),
        proof_strategy: theorem.proof_strategy.clone(),
        generate_certificates: config.generate_certificates(),
    }
}
