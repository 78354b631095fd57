//! Strongly-typed entity model for theorem documents.
//!
//! `Theorem` is the aggregate root; its hypotheses and proof steps have no
//! identity outside it. Serialization produces the canonical document
//! shape, so exporting a theorem and parsing the output yields an equal
//! value.

use serde::Serialize;

use super::newtypes::Tag;

/// Proof strategy assumed when a document does not name one.
pub const DEFAULT_PROOF_STRATEGY: &str = "structured";

/// Difficulty level assumed when a document does not name one.
pub const DEFAULT_DIFFICULTY_LEVEL: &str = "medium";

// ── Enumerations ────────────────────────────────────────────────────

/// The role a hypothesis plays in a theorem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HypothesisKind {
    /// Introduces a term or notation.
    #[serde(rename = "definition")]
    Definition,
    /// A premise taken as given.
    #[serde(rename = "assumption")]
    Assumption,
    /// A restriction on the objects involved.
    #[serde(rename = "constraint")]
    Constraint,
    /// A reference to a previously established theorem.
    #[serde(rename = "theorem")]
    TheoremReference,
}

impl HypothesisKind {
    /// All kinds in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Definition,
        Self::Assumption,
        Self::Constraint,
        Self::TheoremReference,
    ];

    /// Human-readable list of accepted wire values, for diagnostics.
    pub(crate) const EXPECTED: &'static str = "definition, assumption, constraint, theorem";

    /// Returns the wire value for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Definition => "definition",
            Self::Assumption => "assumption",
            Self::Constraint => "constraint",
            Self::TheoremReference => "theorem",
        }
    }

    /// Maps a wire value back to a kind, or `None` if it is unrecognized.
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

/// Verification status of a theorem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProofStatus {
    /// Not yet attempted.
    #[default]
    Pending,
    /// Work on the proof has started.
    InProgress,
    /// The proof has been checked.
    Verified,
    /// The proof attempt failed.
    Failed,
}

impl ProofStatus {
    /// All statuses in declaration order.
    pub const ALL: [Self; 4] = [Self::Pending, Self::InProgress, Self::Verified, Self::Failed];

    /// Human-readable list of accepted wire values, for diagnostics.
    pub(crate) const EXPECTED: &'static str = "pending, in_progress, verified, failed";

    /// Returns the wire value for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Verified => "verified",
            Self::Failed => "failed",
        }
    }

    /// Maps a wire value back to a status, or `None` if it is unrecognized.
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

// ── Hypothesis ──────────────────────────────────────────────────────

/// A named logical assumption declared by a theorem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hypothesis {
    /// Identifier that proof steps use to refer to this hypothesis.
    pub name: String,
    /// The role of the hypothesis.
    #[serde(rename = "type")]
    pub kind: HypothesisKind,
    /// Informal or symbolic statement of the hypothesis.
    pub expression: String,
    /// Optional prose explanation.
    pub description: Option<String>,
    /// Optional formal notation.
    pub formal_notation: Option<String>,
}

// ── Proof step ──────────────────────────────────────────────────────

/// One numbered step of a structured proof.
///
/// References to hypotheses and theorems are kept verbatim; they are not
/// checked against the declaring theorem or the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProofStep {
    /// Authoritative, 1-based step index.
    pub step_number: u32,
    /// What the step establishes.
    pub description: String,
    /// Why the step holds.
    pub justification: String,
    /// Names of hypotheses the step relies on, duplicates allowed.
    pub referenced_hypotheses: Vec<String>,
    /// Identifiers of theorems the step relies on.
    pub referenced_theorems: Vec<String>,
    /// Optional formal rendering of the step.
    pub formal_expression: Option<String>,
}

impl ProofStep {
    /// Creates a step with no references and no formal expression.
    #[must_use]
    pub fn new(
        step_number: u32,
        description: impl Into<String>,
        justification: impl Into<String>,
    ) -> Self {
        Self {
            step_number,
            description: description.into(),
            justification: justification.into(),
            referenced_hypotheses: Vec::new(),
            referenced_theorems: Vec::new(),
            formal_expression: None,
        }
    }

    /// Returns `true` if the step references any hypothesis or theorem.
    #[must_use]
    pub fn has_references(&self) -> bool {
        !self.referenced_hypotheses.is_empty() || !self.referenced_theorems.is_empty()
    }
}

// ── Theorem ─────────────────────────────────────────────────────────

/// A named mathematical claim with its hypotheses, conditions, and proof.
///
/// # Examples
///
///     use theoremsite::schema::{ProofStatus, Theorem};
///
///     let theorem = Theorem::new("t1", "Sample", "A implies A", "A -> A");
///     assert_eq!(theorem.status, ProofStatus::Pending);
///     assert_eq!(theorem.proof_strategy, "structured");
///     assert!(theorem.proof_steps.is_empty());
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theorem {
    /// Unique registry key.
    pub theorem_id: String,
    /// Display name.
    pub name: String,
    /// Prose description.
    pub description: String,
    /// Informal statement.
    pub statement: String,
    /// Symbolic statement.
    pub formal_statement: String,
    /// Declared hypotheses in document order.
    pub hypotheses: Vec<Hypothesis>,
    /// Free-text side conditions in document order.
    pub conditions: Vec<String>,
    /// What the proof concludes.
    pub conclusion: String,
    /// Proof steps in storage order.
    pub proof_steps: Vec<ProofStep>,
    /// Open tag naming the proof method.
    pub proof_strategy: Tag,
    /// Verification status.
    pub status: ProofStatus,
    /// Optional bibliographic source.
    pub source: Option<String>,
    /// Open tag describing difficulty.
    pub difficulty_level: Tag,
    /// Optional free-form notes.
    pub notes: Option<String>,
}

impl Theorem {
    /// Creates a theorem from its required fields, defaulting the rest.
    #[must_use]
    pub fn new(
        theorem_id: impl Into<String>,
        name: impl Into<String>,
        statement: impl Into<String>,
        formal_statement: impl Into<String>,
    ) -> Self {
        Self {
            theorem_id: theorem_id.into(),
            name: name.into(),
            description: String::new(),
            statement: statement.into(),
            formal_statement: formal_statement.into(),
            hypotheses: Vec::new(),
            conditions: Vec::new(),
            conclusion: String::new(),
            proof_steps: Vec::new(),
            proof_strategy: Tag::from_static(DEFAULT_PROOF_STRATEGY),
            status: ProofStatus::default(),
            source: None,
            difficulty_level: Tag::from_static(DEFAULT_DIFFICULTY_LEVEL),
            notes: None,
        }
    }

    /// Number of proof steps.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.proof_steps.len()
    }

    /// Returns `true` if the theorem's status is [`ProofStatus::Verified`].
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.status == ProofStatus::Verified
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::definition("definition", Some(HypothesisKind::Definition))]
    #[case::theorem("theorem", Some(HypothesisKind::TheoremReference))]
    #[case::corollary("corollary", None)]
    #[case::title_case("Assumption", None)]
    fn hypothesis_kind_wire_values(#[case] wire: &str, #[case] expected: Option<HypothesisKind>) {
        assert_eq!(HypothesisKind::from_wire(wire), expected);
    }

    #[rstest]
    #[case::in_progress("in_progress", Some(ProofStatus::InProgress))]
    #[case::verified("verified", Some(ProofStatus::Verified))]
    #[case::camel("inProgress", None)]
    fn status_wire_values(#[case] wire: &str, #[case] expected: Option<ProofStatus>) {
        assert_eq!(ProofStatus::from_wire(wire), expected);
    }

    #[test]
    fn serialized_kind_matches_wire_value() {
        for kind in HypothesisKind::ALL {
            let json = serde_json::to_string(&kind).expect("kind should serialize");
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
        for status in ProofStatus::ALL {
            let json = serde_json::to_string(&status).expect("status should serialize");
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn hypothesis_serializes_kind_under_type_key() {
        let hypothesis = Hypothesis {
            name: "h1".to_owned(),
            kind: HypothesisKind::Constraint,
            expression: "x > 0".to_owned(),
            description: None,
            formal_notation: None,
        };
        let value = serde_json::to_value(&hypothesis).expect("hypothesis should serialize");
        assert_eq!(value["type"], "constraint");
        assert!(value["description"].is_null());
    }
}
