//! Site index document.

use super::html::{escape, link_target, page, status_badge};
use super::theorem::document_file_name;
use crate::schema::Theorem;

/// File name of the index document inside the output directory.
pub const INDEX_FILE_NAME: &str = "index.html";

const INDEX_CSS: &str = r"
        .stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 20px; margin-bottom: 30px; }
        .stat-card {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 20px;
            border-radius: 10px;
            text-align: center;
        }
        .stat-number { font-size: 2em; font-weight: bold; }
        .theorem-table { width: 100%; border-collapse: collapse; }
        .theorem-table th { background: #667eea; color: white; padding: 12px; text-align: left; }
        .theorem-table td { padding: 12px; border-bottom: 1px solid #ddd; }
        .theorem-table tr:hover { background: #f8f9fa; }
        .theorem-link { color: #667eea; text-decoration: none; font-weight: bold; }
        .theorem-id { font-family: 'Courier New', monospace; color: #666; }
";

/// Renders the index page listing `theorems` in the given order.
///
/// Each row links to the theorem's document; the summary cards count the
/// theorems, the verified theorems, and the total number of proof steps.
#[must_use]
pub fn render_index_document(theorems: &[&Theorem]) -> String {
    let verified = theorems.iter().filter(|theorem| theorem.is_verified()).count();
    let total_steps: usize = theorems.iter().map(|theorem| theorem.step_count()).sum();
    let rows: String = theorems.iter().map(|theorem| index_row(theorem)).collect();

    let content = format!(
        r#"        <div class="content">
            <div class="stats">
                <div class="stat-card"><div class="stat-number">{total}</div><div>Theorems</div></div>
                <div class="stat-card"><div class="stat-number">{verified}</div><div>Verified</div></div>
                <div class="stat-card"><div class="stat-number">{total_steps}</div><div>Proof steps</div></div>
            </div>
            <table class="theorem-table">
                <thead>
                    <tr><th>Name</th><th>ID</th><th>Status</th><th>Difficulty</th><th>Source</th><th>Steps</th></tr>
                </thead>
                <tbody>
{rows}                </tbody>
            </table>
        </div>"#,
        total = theorems.len(),
    );
    page("Theorem Index", INDEX_CSS, &content)
}

fn index_row(theorem: &Theorem) -> String {
    format!(
        r#"                    <tr>
                        <td><a class="theorem-link" href="{href}">{name}</a></td>
                        <td class="theorem-id">{id}</td>
                        <td>{status}</td>
                        <td>{difficulty}</td>
                        <td>{source}</td>
                        <td>{steps}</td>
                    </tr>
"#,
        href = link_target(&document_file_name(&theorem.theorem_id)),
        name = escape(&theorem.name),
        id = escape(&theorem.theorem_id),
        status = status_badge(theorem.status),
        difficulty = escape(theorem.difficulty_level.as_str()),
        source = escape(theorem.source.as_deref().unwrap_or("-")),
        steps = theorem.step_count(),
    )
}
