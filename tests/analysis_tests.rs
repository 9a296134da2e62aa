// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end: source text, parser collaborator, rubric, verdicts

use inspectorate::analysis::JsonAstParser;
use inspectorate::ast::{Equation, Expression, Pattern};
use inspectorate::{analyze, AnalysisOutcome, CompilerConfig, Expectation, ParseError, Rubric};
use std::fs;
use tempfile::TempDir;

fn program_source() -> String {
    let program = Expression::sequence(vec![
        Expression::function(
            "square",
            vec![Equation::unguarded(
                vec![Pattern::variable("x")],
                Expression::apply(
                    Expression::reference("*"),
                    vec![Expression::reference("x"), Expression::reference("x")],
                ),
            )],
        ),
        Expression::variable("answer", Expression::Number(42.0)),
    ]);
    serde_json::to_string(&program).unwrap()
}

fn create_rubric(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_analyze_json_source() {
    let expectations = vec![
        Expectation::new("", "HasFunction:square"),
        Expectation::new("square", "HasUsage:x"),
        Expectation::new("square", "HasDirectRecursion"),
        Expectation::new("", "HasFrobnicate"),
    ];
    let outcome = analyze(
        &JsonAstParser,
        &program_source(),
        &expectations,
        &CompilerConfig::default(),
    );
    let passed: Vec<_> = outcome
        .results()
        .expect("source should parse")
        .iter()
        .map(|r| r.passed)
        .collect();
    assert_eq!(passed, vec![true, true, false, true]);
}

#[test]
fn test_parse_failure_is_not_all_false() {
    let expectations = vec![Expectation::new("", "Not:HasWhile")];
    let outcome = analyze(
        &JsonAstParser,
        "square x = x * x",
        &expectations,
        &CompilerConfig::default(),
    );
    assert!(matches!(outcome, AnalysisOutcome::Unavailable { .. }));
    assert!(outcome.results().is_none());
}

#[test]
fn test_closure_parser_collaborator() {
    let parser = |source: &str| -> Result<Expression, ParseError> {
        match source.trim() {
            "" => Err(ParseError::new("empty source")),
            name => Ok(Expression::variable(name, Expression::Nil)),
        }
    };
    let expectations = vec![Expectation::new("", "HasVariable:total")];
    let outcome = analyze(&parser, "total", &expectations, &CompilerConfig::default());
    assert_eq!(outcome.results().map(|r| r[0].passed), Some(true));

    let outcome = analyze(&parser, "   ", &expectations, &CompilerConfig::default());
    assert!(!outcome.is_available());
}

#[test]
fn test_rubric_file_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = create_rubric(
        &dir,
        "square.yaml",
        r#"
expectations:
  - inspection: "HasFunction:~Square"
  - scope: "square"
    inspection: "HasArity1"
  - scope: "square"
    inspection: "Not:HasIf"
  - scope: "answer"
    inspection: "HasUsage:x"
"#,
    );
    let rubric = Rubric::load(&path).expect("rubric should load");
    let outcome = rubric.analyze(&JsonAstParser, &program_source());
    let passed: Vec<_> = outcome
        .results()
        .expect("source should parse")
        .iter()
        .map(|r| r.passed)
        .collect();
    assert_eq!(passed, vec![true, true, true, false]);
}

#[test]
fn test_outcome_serializes_with_status_tag() {
    let outcome = AnalysisOutcome::Unavailable {
        reason: ParseError::new("boom"),
    };
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "unavailable");
    assert_eq!(json["reason"]["message"], "boom");
}

#[test]
fn test_deeply_nested_source_stays_available() {
    // 60 nested applications of `+` nest about 180 levels of JSON.
    let deep = (0..60).fold(Expression::Number(0.0), |inner, _| {
        Expression::apply(Expression::reference("+"), vec![inner, Expression::Number(1.0)])
    });
    let source = serde_json::to_string(&deep).unwrap();
    let expectations = vec![Expectation::new("", "HasUsage:+")];
    let outcome = analyze(&JsonAstParser, &source, &expectations, &CompilerConfig::default());
    assert!(outcome.is_available(), "{:?}", outcome);
    assert_eq!(outcome.results().map(|r| r[0].passed), Some(true));
}
