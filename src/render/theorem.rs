//! Per-theorem HTML document.

use super::RenderError;
use super::html::{condition_label, escape, page, status_badge};
use crate::schema::{Hypothesis, ProofStep, Theorem};
use crate::solver::SolverConfig;

/// Stylesheet additions for theorem documents.
const THEOREM_CSS: &str = r"
        .section { margin: 30px 0; }
        .section-title {
            color: #667eea;
            font-size: 1.6em;
            margin-bottom: 15px;
            padding-bottom: 10px;
            border-bottom: 2px solid #667eea;
        }
        .description { background: #f8f9fa; padding: 20px; border-radius: 8px; }
        .formal-statement, .code-block {
            background: #1e1e1e;
            color: #d4d4d4;
            padding: 20px;
            border-radius: 8px;
            font-family: 'Courier New', monospace;
            overflow-x: auto;
            white-space: pre-wrap;
        }
        .metadata { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 15px; }
        .metadata-item { background: #f8f9fa; padding: 15px; border-radius: 8px; }
        .metadata-label { font-size: 0.85em; color: #666; text-transform: uppercase; }
        .metadata-value { font-weight: bold; }
        .toc { background: #f8f9fa; padding: 20px; border-radius: 8px; margin: 30px 0; }
        .toc ul { margin-left: 20px; }
        .toc a { color: #667eea; text-decoration: none; }
        .hypothesis-item, .condition-item {
            background: #f8f9fa;
            padding: 15px;
            margin: 10px 0;
            border-left: 4px solid #667eea;
            border-radius: 4px;
        }
        .hypothesis-item.definition { border-left-color: #28a745; }
        .hypothesis-item.assumption { border-left-color: #007bff; }
        .hypothesis-item.constraint { border-left-color: #ffc107; }
        .hypothesis-name { font-weight: bold; color: #333; }
        .hypothesis-type {
            font-size: 0.75em;
            background: #667eea;
            color: white;
            padding: 2px 8px;
            border-radius: 10px;
            margin-left: 10px;
        }
        .hypothesis-expression { font-family: 'Courier New', monospace; margin-top: 8px; }
        .hypothesis-note { font-size: 0.9em; color: #666; margin-top: 8px; }
        .proof-step { background: #f8f9fa; padding: 20px; margin: 15px 0; border-radius: 8px; }
        .proof-step-number {
            display: inline-block;
            background: #667eea;
            color: white;
            width: 32px;
            height: 32px;
            line-height: 32px;
            text-align: center;
            border-radius: 50%;
            margin-right: 10px;
        }
        .proof-step-title { font-weight: bold; }
        .proof-step-justification { margin-top: 10px; color: #555; }
        .proof-step-formal { font-family: 'Courier New', monospace; margin-top: 10px; color: #764ba2; }
        .references { margin-top: 10px; font-size: 0.9em; }
        .reference-tag {
            display: inline-block;
            background: #e9ecef;
            padding: 2px 10px;
            border-radius: 12px;
            margin: 3px;
            font-family: 'Courier New', monospace;
        }
        .solver-flow { display: flex; align-items: center; gap: 15px; margin: 15px 0; flex-wrap: wrap; }
        .solver-flow-item { background: #667eea; color: white; padding: 10px 20px; border-radius: 6px; }
        .config-table { width: 100%; border-collapse: collapse; margin: 15px 0; }
        .config-table th, .config-table td { padding: 10px; border-bottom: 1px solid #ddd; text-align: left; }
        .config-table th { background: #667eea; color: white; }
        .config-key { color: #569cd6; font-weight: bold; font-family: 'Courier New', monospace; }
";

/// File name of a theorem's document inside the output directory.
#[must_use]
pub fn document_file_name(theorem_id: &str) -> String {
    format!("{theorem_id}.html")
}

/// Renders the self-contained HTML document for one theorem.
///
/// Empty hypothesis or proof-step lists render as empty sections; empty
/// conditions and absent notes omit their block.
///
/// # Errors
///
/// Returns [`RenderError::SolverConfig`] if the solver configuration cannot
/// be serialized.
pub fn render_theorem_document(
    theorem: &Theorem,
    solver: &SolverConfig,
) -> Result<String, RenderError> {
    let solver_json = solver
        .to_json_pretty()
        .map_err(|source| RenderError::SolverConfig {
            theorem_id: theorem.theorem_id.clone(),
            source,
        })?;

    let body = [
        metadata_section(theorem),
        table_of_contents(theorem),
        description_section(theorem),
        statement_section(theorem),
        hypotheses_section(&theorem.hypotheses),
        conditions_section(&theorem.conditions),
        proof_section(theorem),
        solver_section(solver, &solver_json),
        conclusion_section(theorem),
        notes_section(theorem.notes.as_deref()),
    ]
    .concat();

    let content = format!("        <div class=\"content\">\n{body}        </div>");
    Ok(page(&theorem.name, THEOREM_CSS, &content))
}

fn metadata_section(theorem: &Theorem) -> String {
    format!(
        r#"            <div class="section">
                <h1 class="theorem-name">{name}</h1>
                <div class="metadata">
                    <div class="metadata-item"><div class="metadata-label">ID</div><div class="metadata-value">{id}</div></div>
                    <div class="metadata-item"><div class="metadata-label">Status</div><div class="metadata-value">{status}</div></div>
                    <div class="metadata-item"><div class="metadata-label">Difficulty</div><div class="metadata-value">{difficulty}</div></div>
                    <div class="metadata-item"><div class="metadata-label">Source</div><div class="metadata-value">{source}</div></div>
                </div>
            </div>
"#,
        name = escape(&theorem.name),
        id = escape(&theorem.theorem_id),
        status = status_badge(theorem.status),
        difficulty = escape(&theorem.difficulty_level.as_str().to_uppercase()),
        source = escape(theorem.source.as_deref().unwrap_or("Unknown")),
    )
}

fn table_of_contents(theorem: &Theorem) -> String {
    let mut entries = vec![
        ("description", "Description"),
        ("statement", "Statement"),
        ("hypotheses", "Hypotheses"),
    ];
    if !theorem.conditions.is_empty() {
        entries.push(("conditions", "Conditions"));
    }
    entries.extend([
        ("proof", "Proof"),
        ("solver", "Solver configuration"),
        ("conclusion", "Conclusion"),
    ]);
    if theorem.notes.is_some() {
        entries.push(("notes", "Notes"));
    }

    let items: String = entries
        .iter()
        .map(|(anchor, label)| {
            format!("                    <li><a href=\"#{anchor}\">{label}</a></li>\n")
        })
        .collect();
    format!(
        "            <div class=\"toc\">\n                <h3>Contents</h3>\n                <ul>\n{items}                </ul>\n            </div>\n"
    )
}

fn description_section(theorem: &Theorem) -> String {
    format!(
        r#"            <div class="section" id="description">
                <h2 class="section-title">Description</h2>
                <div class="description">{description}</div>
            </div>
"#,
        description = escape(&theorem.description),
    )
}

fn statement_section(theorem: &Theorem) -> String {
    format!(
        r#"            <div class="section" id="statement">
                <h2 class="section-title">Statement</h2>
                <p><strong>Informal:</strong></p>
                <div class="description">{statement}</div>
                <p><strong>Formal:</strong></p>
                <div class="formal-statement">{formal}</div>
            </div>
"#,
        statement = escape(&theorem.statement),
        formal = escape(&theorem.formal_statement),
    )
}

fn hypotheses_section(hypotheses: &[Hypothesis]) -> String {
    let items: String = hypotheses.iter().map(hypothesis_item).collect();
    format!(
        r#"            <div class="section" id="hypotheses">
                <h2 class="section-title">Hypotheses ({count})</h2>
                <div class="hypothesis-list">
{items}                </div>
            </div>
"#,
        count = hypotheses.len(),
    )
}

fn hypothesis_item(hypothesis: &Hypothesis) -> String {
    let description = hypothesis
        .description
        .as_deref()
        .map(|text| format!("\n                        <p class=\"hypothesis-note\">{}</p>", escape(text)))
        .unwrap_or_default();
    let notation = hypothesis
        .formal_notation
        .as_deref()
        .map(|text| {
            format!(
                "\n                        <p class=\"hypothesis-note\">Formal: <code>{}</code></p>",
                escape(text)
            )
        })
        .unwrap_or_default();
    format!(
        r#"                    <div class="hypothesis-item {kind}">
                        <div class="hypothesis-name">{name}<span class="hypothesis-type">{kind_label}</span></div>
                        <div class="hypothesis-expression">{expression}</div>{description}{notation}
                    </div>
"#,
        kind = hypothesis.kind.as_str(),
        kind_label = hypothesis.kind.as_str().to_uppercase(),
        name = escape(&hypothesis.name),
        expression = escape(&hypothesis.expression),
    )
}

fn conditions_section(conditions: &[String]) -> String {
    if conditions.is_empty() {
        return String::new();
    }
    let items: String = conditions
        .iter()
        .enumerate()
        .map(|(index, condition)| {
            format!(
                "                    <div class=\"condition-item\"><strong>({label})</strong> {text}</div>\n",
                label = condition_label(index + 1),
                text = escape(condition),
            )
        })
        .collect();
    format!(
        r#"            <div class="section" id="conditions">
                <h2 class="section-title">Conditions ({count})</h2>
                <div class="conditions-list">
{items}                </div>
            </div>
"#,
        count = conditions.len(),
    )
}

fn proof_section(theorem: &Theorem) -> String {
    let steps: String = theorem.proof_steps.iter().map(proof_step_item).collect();
    format!(
        r#"            <div class="section" id="proof">
                <h2 class="section-title">Proof ({count} steps)</h2>
                <p><strong>Strategy:</strong> {strategy}</p>
                <div class="proof-steps">
{steps}                </div>
            </div>
"#,
        count = theorem.step_count(),
        strategy = escape(theorem.proof_strategy.as_str()),
    )
}

fn proof_step_item(step: &ProofStep) -> String {
    let formal = step
        .formal_expression
        .as_deref()
        .map(|text| {
            format!(
                "\n                        <div class=\"proof-step-formal\">{}</div>",
                escape(text)
            )
        })
        .unwrap_or_default();
    let references = if step.has_references() {
        let tags: String = step
            .referenced_hypotheses
            .iter()
            .chain(&step.referenced_theorems)
            .map(|name| format!("<span class=\"reference-tag\">{}</span>", escape(name)))
            .collect();
        format!(
            "\n                        <div class=\"references\"><strong>References:</strong> {tags}</div>"
        )
    } else {
        String::new()
    };
    format!(
        r#"                    <div class="proof-step">
                        <div><span class="proof-step-number">{number}</span><span class="proof-step-title">{description}</span></div>
                        <div class="proof-step-justification">{justification}</div>{formal}{references}
                    </div>
"#,
        number = step.step_number,
        description = escape(&step.description),
        justification = escape(&step.justification),
    )
}

fn solver_section(solver: &SolverConfig, solver_json: &str) -> String {
    let rows = [
        ("goal_name", escape(&solver.goal_name), "Name of the proof goal"),
        ("goal_id", escape(&solver.goal_id), "Unique identifier"),
        ("solver", escape(solver.solver.as_str()), "Solver backend"),
        ("timeout", format!("{}s", solver.timeout), "Time limit per goal"),
        (
            "proof_strategy",
            escape(solver.proof_strategy.as_str()),
            "Proof method",
        ),
        (
            "hypotheses_count",
            solver.hypotheses.len().to_string(),
            "Number of hypotheses",
        ),
        (
            "generate_certificates",
            solver.generate_certificates.to_string(),
            "Produce certificates",
        ),
    ];
    let table_rows: String = rows
        .iter()
        .map(|(key, value, meaning)| {
            format!(
                "                    <tr><td><span class=\"config-key\">{key}</span></td><td>{value}</td><td>{meaning}</td></tr>\n"
            )
        })
        .collect();
    let solver_hypotheses: String = solver
        .hypotheses
        .iter()
        .map(|hypothesis| {
            let notation = hypothesis
                .formal_notation
                .as_deref()
                .map(|text| format!(" &rarr; <code>{}</code>", escape(text)))
                .unwrap_or_default();
            format!(
                "                    <div class=\"hypothesis-item {kind}\"><span class=\"hypothesis-name\">{name}</span><span class=\"hypothesis-type\">{kind_label}</span> <span class=\"hypothesis-expression\">{expression}</span>{notation}</div>\n",
                kind = hypothesis.kind.as_str(),
                kind_label = hypothesis.kind.as_str().to_uppercase(),
                name = escape(&hypothesis.name),
                expression = escape(&hypothesis.expression),
            )
        })
        .collect();

    format!(
        r#"            <div class="section" id="solver">
                <h2 class="section-title">Solver configuration</h2>
                <div class="solver-flow">
                    <div class="solver-flow-item">Formal statement</div>
                    <div>&rarr;</div>
                    <div class="solver-flow-item">{backend}</div>
                    <div>&rarr;</div>
                    <div class="solver-flow-item">Verification</div>
                </div>
                <h3>Solver input</h3>
                <table class="config-table">
                    <tr><th>Parameter</th><th>Value</th><th>Meaning</th></tr>
{table_rows}                </table>
                <h3>Formal statement sent to the solver</h3>
                <div class="code-block"><pre>{formal}</pre></div>
                <h3>Full configuration (JSON)</h3>
                <div class="code-block"><pre>{json}</pre></div>
                <h3>Hypotheses used by the solver</h3>
                <div class="solver-hypotheses">
{solver_hypotheses}                </div>
            </div>
"#,
        backend = escape(solver.solver.as_str()),
        formal = escape(&solver.formal_statement),
        json = escape(solver_json),
    )
}

fn conclusion_section(theorem: &Theorem) -> String {
    format!(
        r#"            <div class="section" id="conclusion">
                <h2 class="section-title">Conclusion</h2>
                <div class="formal-statement">{conclusion}</div>
            </div>
"#,
        conclusion = escape(&theorem.conclusion),
    )
}

fn notes_section(notes: Option<&str>) -> String {
    notes
        .map(|text| {
            format!(
                r#"            <div class="section" id="notes">
                <h2 class="section-title">Notes</h2>
                <div class="description">{notes}</div>
            </div>
"#,
                notes = escape(text),
            )
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::schema::{HypothesisKind, Tag};
    use crate::solver::project;

    fn sample() -> Theorem {
        let mut theorem = Theorem::new("t1", "Sample", "A implies A", "A -> A");
        theorem.description = "Reflexivity of implication".to_owned();
        theorem.hypotheses = vec![Hypothesis {
            name: "h_a".to_owned(),
            kind: HypothesisKind::Definition,
            expression: "A : Prop".to_owned(),
            description: Some("A is a proposition".to_owned()),
            formal_notation: Some("A ∈ Prop".to_owned()),
        }];
        theorem.conditions = vec!["A is decidable".to_owned(), "A & B".to_owned()];
        theorem.conclusion = "A -> A holds".to_owned();
        let mut step = ProofStep::new(1, "trivial", "identity");
        step.referenced_hypotheses = vec!["h_a".to_owned()];
        step.referenced_theorems = vec!["id_lemma".to_owned()];
        step.formal_expression = Some("fun a => a".to_owned());
        theorem.proof_steps = vec![step];
        theorem.proof_strategy = Tag::new("direct").expect("tag");
        theorem.notes = Some("Classical and constructive".to_owned());
        theorem
    }

    fn render(theorem: &Theorem) -> String {
        let solver = project(theorem, &Configuration::default());
        render_theorem_document(theorem, &solver).expect("should render")
    }

    #[test]
    fn document_includes_every_theorem_part() {
        let html = render(&sample());
        for fragment in [
            "<title>Sample</title>",
            ">t1<",
            "status-pending",
            "MEDIUM",
            "Reflexivity of implication",
            "A implies A",
            "A -&gt; A",
            "h_a",
            "DEFINITION",
            "A is a proposition",
            "A ∈ Prop",
            "<strong>(a)</strong> A is decidable",
            "<strong>(b)</strong> A &amp; B",
            "<strong>Strategy:</strong> direct",
            "proof-step-number\">1<",
            "trivial",
            "identity",
            "fun a =&gt; a",
            "<span class=\"reference-tag\">h_a</span><span class=\"reference-tag\">id_lemma</span>",
            "A -&gt; A holds",
            "Classical and constructive",
            "&quot;goal_id&quot;: &quot;t1&quot;",
            "hypotheses_count",
        ] {
            assert!(html.contains(fragment), "missing {fragment:?} in rendered page");
        }
    }

    #[test]
    fn empty_sections_render_without_error() {
        let theorem = Theorem::new("bare", "Bare", "S", "F");
        let html = render(&theorem);
        assert!(html.contains("Hypotheses (0)"));
        assert!(html.contains("Proof (0 steps)"));
        assert!(!html.contains("id=\"conditions\""));
        assert!(!html.contains("id=\"notes\""));
        assert!(!html.contains("href=\"#notes\""));
        assert!(html.contains("<div class=\"metadata-value\">Unknown</div>"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let theorem = sample();
        assert_eq!(render(&theorem), render(&theorem));
    }

    #[test]
    fn user_text_is_escaped() {
        let mut theorem = sample();
        theorem.name = "<b>bold</b>".to_owned();
        let html = render(&theorem);
        assert!(!html.contains("<b>bold</b>"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }
}
