//! Unit tests for theorem document loading and export.

use rstest::*;
use serde_json::json;

use super::*;
use crate::schema::{HypothesisKind, ProofStatus, SchemaDiagnosticCode};

/// Minimal valid JSON for a theorem document.
const MINIMAL_JSON: &str = r#"{
  "theorem_id": "t1",
  "name": "Sample",
  "statement": "A implies A",
  "formal_statement": "A -> A"
}"#;

/// Parsed `valid_full.json` fixture document.
#[fixture]
fn full_theorem() -> Theorem {
    let input =
        std::fs::read_to_string("tests/fixtures/valid_full.json").expect("should read fixture");
    load_theorem_str(&input).expect("should parse fixture")
}

#[rstest]
fn minimal_document_takes_defaults() {
    let theorem = load_theorem_str(MINIMAL_JSON).expect("should parse");
    assert_eq!(theorem.theorem_id, "t1");
    assert_eq!(theorem.description, "");
    assert_eq!(theorem.conclusion, "");
    assert!(theorem.hypotheses.is_empty());
    assert!(theorem.conditions.is_empty());
    assert!(theorem.proof_steps.is_empty());
    assert_eq!(theorem.proof_strategy, "structured");
    assert_eq!(theorem.difficulty_level, "medium");
    assert_eq!(theorem.status, ProofStatus::Pending);
    assert!(theorem.source.is_none());
    assert!(theorem.notes.is_none());
}

#[rstest]
fn full_fixture_populates_nested_entities(full_theorem: Theorem) {
    assert_eq!(full_theorem.theorem_id, "lhopital_rule");
    assert_eq!(full_theorem.status, ProofStatus::InProgress);
    assert_eq!(full_theorem.hypotheses.len(), 3);
    assert_eq!(
        full_theorem.hypotheses.first().map(|h| h.kind),
        Some(HypothesisKind::Definition)
    );
    assert_eq!(full_theorem.conditions.len(), 2);
    assert_eq!(full_theorem.proof_steps.len(), 3);
    let step = full_theorem.proof_steps.get(1).expect("second step");
    assert_eq!(step.step_number, 2);
    assert_eq!(step.referenced_hypotheses, vec!["h_diff", "h_limit"]);
    assert_eq!(step.referenced_theorems, vec!["cauchy_mvt"]);
}

#[rstest]
#[case::theorem_id("theorem_id")]
#[case::name("name")]
#[case::statement("statement")]
#[case::formal_statement("formal_statement")]
fn each_required_field_is_enforced(#[case] field: &str) {
    let mut document: Value = serde_json::from_str(MINIMAL_JSON).expect("valid JSON");
    document
        .as_object_mut()
        .map(|object| object.remove(field))
        .expect("document is an object");
    let result = parse_theorem(&document);
    let Err(SchemaError::MissingField { field: missing, .. }) = result else {
        panic!("expected MissingField for {field}, got: {result:?}");
    };
    assert_eq!(missing, field);
}

#[rstest]
fn missing_theorem_id_uses_placeholder_label() {
    let document = json!({ "name": "N", "statement": "S", "formal_statement": "F" });
    let message = parse_theorem(&document)
        .err()
        .map(|e| e.to_string())
        .unwrap_or_default();
    assert_eq!(
        message,
        "theorem '<unidentified>' is missing required field `theorem_id`"
    );
}

#[rstest]
fn null_required_field_counts_as_missing() {
    let document = json!({
        "theorem_id": "t1", "name": null, "statement": "S", "formal_statement": "F"
    });
    assert!(matches!(
        parse_theorem(&document),
        Err(SchemaError::MissingField { field: "name", .. })
    ));
}

#[rstest]
fn unknown_hypothesis_kind_names_field_and_value() {
    let document = json!({
        "theorem_id": "t1", "name": "N", "statement": "S", "formal_statement": "F",
        "hypotheses": [
            { "name": "h0", "type": "definition", "expression": "e" },
            { "name": "h1", "type": "corollary", "expression": "e" }
        ]
    });
    let result = parse_theorem(&document);
    let Err(SchemaError::InvalidEnum { field, value, .. }) = &result else {
        panic!("expected InvalidEnum, got: {result:?}");
    };
    assert_eq!(field, "hypotheses[1].type");
    assert_eq!(value, "corollary");
}

#[rstest]
fn unknown_status_is_rejected() {
    let document = json!({
        "theorem_id": "t1", "name": "N", "statement": "S", "formal_statement": "F",
        "status": "proven"
    });
    let message = parse_theorem(&document)
        .err()
        .map(|e| e.to_string())
        .unwrap_or_default();
    assert!(message.contains("`status`"), "got: {message}");
    assert!(message.contains("'proven'"), "got: {message}");
}

#[rstest]
fn absent_hypothesis_type_defaults_to_assumption() {
    let document = json!({
        "theorem_id": "t1", "name": "N", "statement": "S", "formal_statement": "F",
        "hypotheses": [{ "name": "h", "expression": "x = x" }]
    });
    let theorem = parse_theorem(&document).expect("should parse");
    assert_eq!(
        theorem.hypotheses.first().map(|h| h.kind),
        Some(HypothesisKind::Assumption)
    );
}

#[rstest]
fn absent_step_number_defaults_to_zero() {
    let document = json!({
        "theorem_id": "t1", "name": "N", "statement": "S", "formal_statement": "F",
        "proof_steps": [{ "description": "d", "justification": "j" }]
    });
    let theorem = parse_theorem(&document).expect("parsing does not check numbering");
    assert_eq!(theorem.proof_steps.first().map(|s| s.step_number), Some(0));
}

#[rstest]
fn blank_proof_strategy_is_rejected() {
    let document = json!({
        "theorem_id": "t1", "name": "N", "statement": "S", "formal_statement": "F",
        "proof_strategy": "  "
    });
    assert!(matches!(
        parse_theorem(&document),
        Err(SchemaError::BlankTag { field: "proof_strategy", .. })
    ));
}

#[rstest]
fn unknown_keys_are_ignored() {
    let document = json!({
        "theorem_id": "t1", "name": "N", "statement": "S", "formal_statement": "F",
        "author": "someone"
    });
    assert!(parse_theorem(&document).is_ok());
}

#[rstest]
#[case::array("[1, 2, 3]")]
#[case::string("\"theorem\"")]
fn non_object_documents_are_malformed(#[case] input: &str) {
    assert!(matches!(
        load_theorem_str(input),
        Err(SchemaError::MalformedDocument { .. })
    ));
}

#[rstest]
fn wrong_field_type_is_malformed() {
    let document = json!({
        "theorem_id": "t1", "name": 7, "statement": "S", "formal_statement": "F"
    });
    assert!(matches!(
        parse_theorem(&document),
        Err(SchemaError::MalformedDocument { .. })
    ));
}

#[rstest]
fn invalid_json_reports_position() {
    let result = load_theorem_str("{\n  \"theorem_id\": \"t1\",\n  oops\n}");
    let Err(SchemaError::MalformedDocument { line, column, .. }) = result else {
        panic!("expected MalformedDocument, got: {result:?}");
    };
    assert_eq!(line, 3);
    assert!(column > 0);
}

#[rstest]
fn diagnostic_names_theorem_and_field() {
    let document = json!({ "theorem_id": "t9", "name": "N", "statement": "S" });
    let error = parse_theorem(&document).expect_err("formal_statement is missing");
    let diagnostic = error.diagnostic("inline.json");
    assert_eq!(diagnostic.code, SchemaDiagnosticCode::MissingField);
    assert_eq!(diagnostic.subject, "theorem=t9 field=formal_statement");
}

#[rstest]
fn export_then_parse_is_lossless(full_theorem: Theorem) {
    let json = export_theorem(&full_theorem).expect("should export");
    let reparsed = load_theorem_str(&json).expect("export should parse");
    assert_eq!(reparsed, full_theorem);
}

#[rstest]
fn export_writes_explicit_nulls() {
    let theorem = load_theorem_str(MINIMAL_JSON).expect("should parse");
    let json = export_theorem(&theorem).expect("should export");
    let value: Value = serde_json::from_str(&json).expect("export is JSON");
    assert!(value["source"].is_null());
    assert!(value["notes"].is_null());
    assert_eq!(value["status"], "pending");
}

#[rstest]
fn export_file_round_trips_through_disk(full_theorem: Theorem) {
    let temp = tempfile::tempdir().expect("tempdir");
    let dir = camino::Utf8Path::from_path(temp.path()).expect("UTF-8 temp path");
    let path = dir.join("exported.json");
    export_theorem_file(&full_theorem, &path).expect("should write export");
    let reloaded = load_theorem_file(&path).expect("should reload export");
    assert_eq!(reloaded, full_theorem);
}

#[rstest]
fn unreadable_file_is_source_unavailable() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dir = camino::Utf8Path::from_path(temp.path()).expect("UTF-8 temp path");
    let result = load_theorem_file(&dir.join("absent.json"));
    assert!(matches!(
        result,
        Err(SchemaError::SourceUnavailable { .. })
    ));
}
