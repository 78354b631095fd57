//! Theorem-level semantic validation.
//!
//! These checks enforce invariants the parser does not: required text must
//! be non-blank after trimming, and proof steps must be numbered `1..=N` in
//! storage order. Every rule is checked independently and all violations
//! are collected, so a caller sees the complete list at once.
//!
//! Step references to hypotheses or other theorems are deliberately not
//! resolved here.

use std::fmt;

use super::diagnostic::{SchemaDiagnostic, SchemaDiagnosticCode};
use super::types::Theorem;

/// A single violated validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// The theorem field the rule concerns.
    pub field: &'static str,
    /// Deterministic explanation of the violation.
    pub reason: String,
}

impl ValidationIssue {
    /// Builds a structured diagnostic attributing this issue to `theorem_id`
    /// loaded from `source`.
    #[must_use]
    pub fn diagnostic(&self, theorem_id: &str, source: &str) -> SchemaDiagnostic {
        SchemaDiagnostic {
            code: SchemaDiagnosticCode::ValidationFailure,
            source: source.to_owned(),
            subject: format!("theorem={theorem_id} field={}", self.field),
            message: self.to_string(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Outcome of validating a theorem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// Every rule holds.
    Valid,
    /// At least one rule is violated; all violations are listed.
    Invalid(Vec<ValidationIssue>),
}

impl Validation {
    /// Returns `true` for [`Validation::Valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the violations, empty when valid.
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Self::Valid => &[],
            Self::Invalid(issues) => issues,
        }
    }

    /// Returns the violations rendered as diagnostic strings.
    #[must_use]
    pub fn reasons(&self) -> Vec<String> {
        self.issues().iter().map(ToString::to_string).collect()
    }
}

// ── Public entry point ──────────────────────────────────────────────

/// Validates a parsed theorem.
///
/// Rules:
///
/// - `name` is non-blank after trimming.
/// - `statement` is non-blank after trimming.
/// - `formal_statement` is non-blank after trimming.
/// - If any proof steps exist, their `step_number` values in storage order
///   are exactly `1, 2, …, N`. No steps at all is valid.
///
/// # Examples
///
///     use theoremsite::schema::{ProofStep, Theorem, validate_theorem};
///
///     let mut theorem = Theorem::new("t1", "Sample", "A implies A", "A -> A");
///     theorem.proof_steps = vec![ProofStep::new(2, "late", "skipped one")];
///     let outcome = validate_theorem(&theorem);
///     assert!(!outcome.is_valid());
///     assert_eq!(outcome.issues()[0].field, "proof_steps");
#[must_use]
pub fn validate_theorem(theorem: &Theorem) -> Validation {
    let mut issues = Vec::new();
    check_non_blank(&mut issues, "name", &theorem.name);
    check_non_blank(&mut issues, "statement", &theorem.statement);
    check_non_blank(&mut issues, "formal_statement", &theorem.formal_statement);
    check_step_numbering(&mut issues, theorem);

    if issues.is_empty() {
        Validation::Valid
    } else {
        Validation::Invalid(issues)
    }
}

// ── Individual rules ────────────────────────────────────────────────

fn check_non_blank(issues: &mut Vec<ValidationIssue>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue {
            field,
            reason: "must be non-empty after trimming".to_owned(),
        });
    }
}

/// Step numbers must equal `[1..=N]` as an ordered sequence, so a complete
/// but shuffled set such as `[1, 3, 2]` is still rejected.
fn check_step_numbering(issues: &mut Vec<ValidationIssue>, theorem: &Theorem) {
    let found: Vec<u32> = theorem
        .proof_steps
        .iter()
        .map(|step| step.step_number)
        .collect();
    let in_order = found
        .iter()
        .zip(1_u32..)
        .all(|(number, expected)| *number == expected);
    if in_order {
        return;
    }

    let listed = found
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    issues.push(ValidationIssue {
        field: "proof_steps",
        reason: format!(
            "step numbers must run 1..={} in storage order, found [{listed}]",
            found.len()
        ),
    });
}
