//! Property tests for the export then parse round trip.

use proptest::prelude::*;
use theoremsite::render::render_theorem_document;
use theoremsite::schema::{
    Hypothesis, HypothesisKind, ProofStatus, ProofStep, Tag, Theorem, export_theorem,
    load_theorem_str,
};
use theoremsite::{Configuration, project};

/// Strategy for free text, including markup and non-ASCII characters.
fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 <>&\"'→∀λ_.-]{0,16}"
}

/// Strategy for open tags, which must be non-blank.
fn tag() -> impl Strategy<Value = Tag> {
    "[a-z_]{1,12}".prop_map(|value| Tag::new(value).expect("pattern is non-blank"))
}

fn hypothesis() -> impl Strategy<Value = Hypothesis> {
    (
        text(),
        prop::sample::select(HypothesisKind::ALL.to_vec()),
        text(),
        prop::option::of(text()),
        prop::option::of(text()),
    )
        .prop_map(|(name, kind, expression, description, formal_notation)| Hypothesis {
            name,
            kind,
            expression,
            description,
            formal_notation,
        })
}

fn proof_step() -> impl Strategy<Value = ProofStep> {
    (
        any::<u32>(),
        text(),
        text(),
        prop::collection::vec(text(), 0..3),
        prop::collection::vec(text(), 0..3),
        prop::option::of(text()),
    )
        .prop_map(
            |(step_number, description, justification, hypotheses, theorems, formal)| {
                let mut step = ProofStep::new(step_number, description, justification);
                step.referenced_hypotheses = hypotheses;
                step.referenced_theorems = theorems;
                step.formal_expression = formal;
                step
            },
        )
}

prop_compose! {
    fn theorem()(
        ids in ("[a-z_]{1,12}", text(), text(), text(), text()),
        hypotheses in prop::collection::vec(hypothesis(), 0..4),
        conditions in prop::collection::vec(text(), 0..4),
        proof_steps in prop::collection::vec(proof_step(), 0..4),
        tags in (tag(), tag()),
        status in prop::sample::select(ProofStatus::ALL.to_vec()),
        optional in (prop::option::of(text()), prop::option::of(text())),
        conclusion in text(),
    ) -> Theorem {
        let (theorem_id, name, description, statement, formal_statement) = ids;
        let mut theorem = Theorem::new(theorem_id, name, statement, formal_statement);
        theorem.description = description;
        theorem.hypotheses = hypotheses;
        theorem.conditions = conditions;
        theorem.conclusion = conclusion;
        theorem.proof_steps = proof_steps;
        (theorem.proof_strategy, theorem.difficulty_level) = tags;
        theorem.status = status;
        (theorem.source, theorem.notes) = optional;
        theorem
    }
}

proptest! {
    #[test]
    fn exported_theorem_parses_back_unchanged(original in theorem()) {
        let json = export_theorem(&original).expect("export should succeed");
        let reparsed = load_theorem_str(&json).expect("export should parse");
        prop_assert_eq!(reparsed, original);
    }

    #[test]
    fn rendering_is_deterministic(sample in theorem()) {
        let solver = project(&sample, &Configuration::default());
        let first = render_theorem_document(&sample, &solver).expect("should render");
        let second = render_theorem_document(&sample, &solver).expect("should render");
        prop_assert_eq!(first, second);
    }
}
