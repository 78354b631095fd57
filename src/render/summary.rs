//! Plain-text theorem summary for console output.

use super::html::condition_label;
use crate::schema::{ProofStep, Theorem};

const RULE_WIDTH: usize = 80;

/// Renders a plain-text overview of `theorem`.
///
/// Hypotheses, conditions, proof steps, and notes appear only when present.
/// The text is returned rather than printed.
///
/// # Examples
///
///     use theoremsite::Theorem;
///     use theoremsite::render::render_theorem_summary;
///
///     let theorem = Theorem::new("t1", "Sample", "A implies A", "A -> A");
///     let summary = render_theorem_summary(&theorem);
///     assert!(summary.contains("THEOREM: Sample"));
///     assert!(summary.contains("Status: pending"));
#[must_use]
pub fn render_theorem_summary(theorem: &Theorem) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        rule.clone(),
        format!("THEOREM: {}", theorem.name),
        rule.clone(),
        format!("ID: {}", theorem.theorem_id),
        format!("Status: {}", theorem.status.as_str()),
        format!("Difficulty: {}", theorem.difficulty_level),
        String::new(),
        "Description:".to_owned(),
        theorem.description.clone(),
        String::new(),
        "Statement (informal):".to_owned(),
        theorem.statement.clone(),
        String::new(),
        "Formal statement:".to_owned(),
        theorem.formal_statement.clone(),
    ];

    if !theorem.hypotheses.is_empty() {
        lines.push(String::new());
        lines.push(format!("Hypotheses ({}):", theorem.hypotheses.len()));
        for hypothesis in &theorem.hypotheses {
            lines.push(format!("  - {} ({}):", hypothesis.name, hypothesis.kind.as_str()));
            lines.push(format!("    {}", hypothesis.expression));
            if let Some(description) = &hypothesis.description {
                lines.push(format!("    ({description})"));
            }
        }
    }

    if !theorem.conditions.is_empty() {
        lines.push(String::new());
        lines.push(format!("Conditions ({}):", theorem.conditions.len()));
        lines.extend(
            theorem
                .conditions
                .iter()
                .enumerate()
                .map(|(index, condition)| format!("  ({}) {condition}", condition_label(index + 1))),
        );
    }

    lines.push(String::new());
    lines.push("Conclusion:".to_owned());
    lines.push(theorem.conclusion.clone());

    if !theorem.proof_steps.is_empty() {
        lines.push(String::new());
        lines.push(format!("Proof ({} steps):", theorem.step_count()));
        for step in &theorem.proof_steps {
            push_step(&mut lines, step);
        }
    }

    if let Some(notes) = &theorem.notes {
        lines.push(String::new());
        lines.push("Notes:".to_owned());
        lines.push(notes.clone());
    }

    lines.push(rule);
    let mut summary = lines.join("\n");
    summary.push('\n');
    summary
}

fn push_step(lines: &mut Vec<String>, step: &ProofStep) {
    lines.push(String::new());
    lines.push(format!("  Step {}: {}", step.step_number, step.description));
    lines.push(format!("    Justification: {}", step.justification));
    if let Some(formal) = &step.formal_expression {
        lines.push(format!("    Formal: {formal}"));
    }
    if !step.referenced_hypotheses.is_empty() {
        lines.push(format!("    Hypotheses: {}", step.referenced_hypotheses.join(", ")));
    }
    if !step.referenced_theorems.is_empty() {
        lines.push(format!("    Theorems: {}", step.referenced_theorems.join(", ")));
    }
}
