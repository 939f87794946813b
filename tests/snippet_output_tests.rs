//! End-to-end tests: every snippet prints exactly what it demonstrates.

use std::io::Write as _;

use jargon::config::RunnerConfig;
use jargon::contract::{ContractError, Kind};
use jargon::error::SnippetError;
use jargon::snippets::{self, CATALOG};
use rstest::rstest;

fn output_of(name: &str, config: &RunnerConfig) -> Result<String, SnippetError> {
    let mut out = Vec::new();
    snippets::run_by_name(name, &mut out, config)?;
    Ok(String::from_utf8(out).expect("snippets write UTF-8"))
}

// =============================================================================
// Deterministic Snippets
// =============================================================================

#[rstest]
#[case("closure", "8\n")]
#[case("currying", "42\n12\n12\n")]
#[case("function", "[2, 4, 6]\n")]
#[case("lambda", "[2, 3]\n[2, 3]\n")]
#[case("predicate", "[3, 4]\n")]
#[case("higher-order-functions", "[Int(0), Int(2)]\n")]
#[case("function-composition", "\"121\"\n")]
#[case("partial-application", "9\n9\n")]
#[case("point-free-style", "[5, 4, 3]\n[5, 4, 3]\n")]
#[case("arity", "2\n")]
#[case("purity", "\"Hi, Brianne\"\n\"Hi, Brianne\"\n\"Hi, Brianne\"\n")]
#[case("functor", "[1, 2, 3]\n[3, 5, 7]\n[3, 5, 7]\n")]
#[case("applicative-functor", "[2]\n[5, 6, 7, 8]\n")]
#[case(
    "monad",
    "[\"cat\", \"dog\", \"fish\", \"bird\"]\n[[\"cat\", \"dog\"], [\"fish\", \"bird\"]]\n"
)]
#[case("comonad", "1\nCoIdentity(2)\n")]
#[case("monoid", "true\n[1, 2, 3, 4]\n[1, 2]\n")]
#[case(
    "morphisms",
    "\"OREOS\"\n4\nRight(2)\n(1, 2)\nCoords { x: 1, y: 2 }\ntrue\n15\n"
)]
fn snippet_prints_expected_output(#[case] name: &str, #[case] expected: &str) {
    let output = output_of(name, &RunnerConfig::default()).unwrap();
    assert_eq!(output, expected);
}

// =============================================================================
// Snippets With Inputs
// =============================================================================

#[rstest]
fn lazy_evaluation_is_reproducible_with_a_seed() {
    let config = RunnerConfig::default().with_seed(2024);
    let first = output_of("lazy-evaluation", &config).unwrap();
    let second = output_of("lazy-evaluation", &config).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.lines().count(), 4);
    assert!(first.ends_with("false\n55\ntrue\n"));
}

#[rstest]
fn continuation_reads_the_data_file() {
    let path = std::env::temp_dir().join(format!("jargon-data-{}", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "forty-two").unwrap();
    drop(file);

    let output = output_of("continuation", &RunnerConfig::default().with_data_file(&path)).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(output, "Given 3\nData is: 'forty-two'\n");
}

#[rstest]
fn continuation_survives_a_missing_file() {
    let config = RunnerConfig::default().with_data_file("no/such/file");
    assert_eq!(output_of("continuation", &config).unwrap(), "Given 3\n");
}

// =============================================================================
// Failures
// =============================================================================

#[rstest]
fn contracts_fail_after_the_valid_call() {
    let mut out = Vec::new();
    let result = snippets::run_by_name("contracts", &mut out, &RunnerConfig::default());

    assert_eq!(out, b"3\n");
    let error = result.unwrap_err();
    assert!(matches!(
        error,
        SnippetError::Contract(ContractError::Violated {
            expected: Kind::Int,
            found: Kind::Text
        })
    ));
    assert_eq!(error.to_string(), "Contract violated: expected an Int");
}

#[rstest]
fn unknown_names_are_rejected() {
    let error = output_of("no-such-snippet", &RunnerConfig::default()).unwrap_err();
    assert!(matches!(error, SnippetError::UnknownSnippet(name) if name == "no-such-snippet"));
}

#[rstest]
fn every_snippet_except_contracts_succeeds() {
    let config = RunnerConfig::default().with_seed(1).with_data_file("no/such/file");
    for snippet in &CATALOG {
        let mut out = Vec::new();
        let result = snippet.run(&mut out, &config);
        assert_eq!(result.is_ok(), snippet.name != "contracts", "{}", snippet.name);
        assert!(!out.is_empty(), "{} printed nothing", snippet.name);
    }
}

// =============================================================================
// Runner
// =============================================================================

#[rstest]
fn run_all_keeps_going_past_the_failing_snippet() {
    let config = RunnerConfig::default().with_seed(3).with_data_file("no/such/file");
    let selected: Vec<&snippets::Snippet> = CATALOG.iter().collect();
    let mut out = Vec::new();

    let failures = snippets::run_all(&selected, &mut out, &config).unwrap();

    assert_eq!(failures, 1);
    let output = String::from_utf8(out).unwrap();
    for snippet in &CATALOG {
        assert!(output.contains(&format!("== {} ==\n", snippet.name)), "{}", snippet.name);
    }
    let after_contracts = output.split("== contracts ==\n").nth(1).unwrap();
    assert_eq!(after_contracts, "3\n");
}

#[rstest]
fn run_all_runs_in_the_given_order() {
    let selected = snippets::select(&["arity", "closure"]).unwrap();
    let mut out = Vec::new();

    let failures = snippets::run_all(&selected, &mut out, &RunnerConfig::default()).unwrap();

    assert_eq!(failures, 0);
    assert_eq!(out, b"== arity ==\n2\n== closure ==\n8\n");
}

#[rstest]
fn run_all_counts_every_failure() {
    let selected = snippets::select(&["contracts", "closure", "contracts"]).unwrap();
    let mut out = Vec::new();

    let failures = snippets::run_all(&selected, &mut out, &RunnerConfig::default()).unwrap();

    assert_eq!(failures, 2);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "== contracts ==\n3\n== closure ==\n8\n== contracts ==\n3\n"
    );
}

#[rstest]
fn select_rejects_an_unknown_name_before_running_anything() {
    let error = snippets::select(&["closure", "category-theory", "monad"]).unwrap_err();
    assert!(matches!(error, SnippetError::UnknownSnippet(name) if name == "category-theory"));
}

#[rstest]
fn list_prints_every_name_and_concept() {
    let mut out = Vec::new();
    snippets::list(&mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    let concept_column = "higher-order-functions".len() + 2;
    assert_eq!(output.lines().count(), CATALOG.len());
    for (line, snippet) in output.lines().zip(&CATALOG) {
        assert_eq!(line[..concept_column].trim_end(), snippet.name);
        assert_eq!(&line[concept_column..], snippet.concept);
    }
}
