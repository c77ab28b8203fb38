use super::common::load_suite;
use restdiff::{compare, Expectation, Received};
use serde_json::Value;

#[derive(Debug, serde::Deserialize)]
struct CompareCase {
    name: String,
    expectation: Expectation,
    received: Received,
    report: Value,
}

#[test]
fn compare_suite() {
    let cases: Vec<CompareCase> = load_suite("compare.yaml");

    let mut failed = 0;
    for case in &cases {
        let report = compare(&case.expectation, &case.received);
        let got = serde_json::to_value(&report).unwrap();
        if got != case.report {
            eprintln!("  FAIL {}: got {}, want {}", case.name, got, case.report);
            failed += 1;
        }
    }

    assert_eq!(failed, 0, "{} compare cases failed out of {}", failed, cases.len());
}
