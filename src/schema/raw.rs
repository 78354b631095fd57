//! Internal lenient wire shape for theorem documents.
//!
//! Every field is optional here so that absent values can be defaulted and
//! missing required fields reported with the theorem and field they
//! concern, rather than as an opaque decoder error. Explicit `null` is
//! treated the same as an absent key.

use serde::Deserialize;

use super::error::{SchemaError, UNIDENTIFIED};
use super::newtypes::Tag;
use super::types::{
    DEFAULT_DIFFICULTY_LEVEL, DEFAULT_PROOF_STRATEGY, Hypothesis, HypothesisKind, ProofStatus,
    ProofStep, Theorem,
};

/// Raw theorem document as decoded from JSON.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(expecting = "a theorem object")]
pub(crate) struct RawTheorem {
    pub(crate) theorem_id: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) statement: Option<String>,
    pub(crate) formal_statement: Option<String>,
    pub(crate) hypotheses: Option<Vec<RawHypothesis>>,
    pub(crate) conditions: Option<Vec<String>>,
    pub(crate) conclusion: Option<String>,
    pub(crate) proof_steps: Option<Vec<RawProofStep>>,
    pub(crate) proof_strategy: Option<String>,
    pub(crate) status: Option<String>,
    pub(crate) source: Option<String>,
    pub(crate) difficulty_level: Option<String>,
    pub(crate) notes: Option<String>,
}

/// Raw hypothesis sub-object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(expecting = "a hypothesis object")]
pub(crate) struct RawHypothesis {
    pub(crate) name: Option<String>,
    #[serde(rename = "type")]
    pub(crate) kind: Option<String>,
    pub(crate) expression: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) formal_notation: Option<String>,
}

/// Raw proof-step sub-object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(expecting = "a proof step object")]
pub(crate) struct RawProofStep {
    pub(crate) step_number: Option<u32>,
    pub(crate) description: Option<String>,
    pub(crate) justification: Option<String>,
    pub(crate) referenced_hypotheses: Option<Vec<String>>,
    pub(crate) referenced_theorems: Option<Vec<String>>,
    pub(crate) formal_expression: Option<String>,
}

impl RawTheorem {
    /// Converts this raw document into the entity model.
    ///
    /// Required fields are checked in document order (`theorem_id`, `name`,
    /// `statement`, `formal_statement`) and the first absent one is
    /// reported. Enumerated values must belong to their closed set; the
    /// whole conversion fails on the first unrecognized value.
    pub(crate) fn into_theorem(self) -> Result<Theorem, SchemaError> {
        let label = self
            .theorem_id
            .clone()
            .unwrap_or_else(|| UNIDENTIFIED.to_owned());

        let theorem_id = require(self.theorem_id, &label, "theorem_id")?;
        let name = require(self.name, &label, "name")?;
        let statement = require(self.statement, &label, "statement")?;
        let formal_statement = require(self.formal_statement, &label, "formal_statement")?;

        let hypotheses = self
            .hypotheses
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.into_hypothesis(&label, index))
            .collect::<Result<Vec<_>, _>>()?;

        let proof_steps = self
            .proof_steps
            .unwrap_or_default()
            .into_iter()
            .map(RawProofStep::into_proof_step)
            .collect();

        let status = match self.status {
            None => ProofStatus::default(),
            Some(value) => ProofStatus::from_wire(&value).ok_or_else(|| {
                SchemaError::InvalidEnum {
                    theorem: label.clone(),
                    field: "status".to_owned(),
                    value,
                    expected: ProofStatus::EXPECTED,
                }
            })?,
        };

        Ok(Theorem {
            proof_strategy: tag_or_default(
                self.proof_strategy,
                DEFAULT_PROOF_STRATEGY,
                &label,
                "proof_strategy",
            )?,
            difficulty_level: tag_or_default(
                self.difficulty_level,
                DEFAULT_DIFFICULTY_LEVEL,
                &label,
                "difficulty_level",
            )?,
            theorem_id,
            name,
            description: self.description.unwrap_or_default(),
            statement,
            formal_statement,
            hypotheses,
            conditions: self.conditions.unwrap_or_default(),
            conclusion: self.conclusion.unwrap_or_default(),
            proof_steps,
            status,
            source: self.source,
            notes: self.notes,
        })
    }
}

impl RawHypothesis {
    fn into_hypothesis(self, label: &str, index: usize) -> Result<Hypothesis, SchemaError> {
        let kind = match self.kind {
            None => HypothesisKind::Assumption,
            Some(value) => {
                HypothesisKind::from_wire(&value).ok_or_else(|| SchemaError::InvalidEnum {
                    theorem: label.to_owned(),
                    field: format!("hypotheses[{index}].type"),
                    value,
                    expected: HypothesisKind::EXPECTED,
                })?
            }
        };
        Ok(Hypothesis {
            name: self.name.unwrap_or_default(),
            kind,
            expression: self.expression.unwrap_or_default(),
            description: self.description,
            formal_notation: self.formal_notation,
        })
    }
}

impl RawProofStep {
    /// Step numbers are not checked here; an absent number becomes 0 and is
    /// left for the validator to reject.
    fn into_proof_step(self) -> ProofStep {
        ProofStep {
            step_number: self.step_number.unwrap_or(0),
            description: self.description.unwrap_or_default(),
            justification: self.justification.unwrap_or_default(),
            referenced_hypotheses: self.referenced_hypotheses.unwrap_or_default(),
            referenced_theorems: self.referenced_theorems.unwrap_or_default(),
            formal_expression: self.formal_expression,
        }
    }
}

fn require(value: Option<String>, label: &str, field: &'static str) -> Result<String, SchemaError> {
    value.ok_or_else(|| SchemaError::MissingField {
        theorem: label.to_owned(),
        field,
    })
}

fn tag_or_default(
    value: Option<String>,
    default: &'static str,
    label: &str,
    field: &'static str,
) -> Result<Tag, SchemaError> {
    value.map_or_else(
        || Ok(Tag::from_static(default)),
        |raw| {
            Tag::new(raw).map_err(|_| SchemaError::BlankTag {
                theorem: label.to_owned(),
                field,
            })
        },
    )
}
