use super::common::{diff_to_value, load_suite};
use restdiff::{diff_dicts, diff_lists, diff_values};
use serde_json::Value;

// ─── diff_values ────────────────────────────────────────────────────────────

#[derive(Debug, serde::Deserialize)]
struct ValueCase {
    name: String,
    expected: Value,
    actual: Value,
    diff: Value,
    cost: usize,
}

#[test]
fn values_suite() {
    let cases: Vec<ValueCase> = load_suite("values.yaml");

    let mut failed = 0;
    for case in &cases {
        let (diff, cost) = diff_values(&case.expected, &case.actual);
        let got = diff_to_value(&diff);
        if got != case.diff || cost != case.cost {
            eprintln!(
                "  FAIL {}: got ({}, {}), want ({}, {})",
                case.name, got, cost, case.diff, case.cost
            );
            failed += 1;
        }
    }

    assert_eq!(failed, 0, "{} value cases failed out of {}", failed, cases.len());
}

// ─── diff_dicts / diff_lists ────────────────────────────────────────────────

// `actual` is optional in these suites: a null fixture value stands for the
// absent container handed to the differ as `None`.
#[derive(Debug, serde::Deserialize)]
struct ContainerCase {
    name: String,
    expected: Value,
    actual: Option<Value>,
    diff: Value,
    cost: usize,
}

#[test]
fn dicts_suite() {
    let cases: Vec<ContainerCase> = load_suite("dicts.yaml");

    let mut failed = 0;
    for case in &cases {
        let expected = case.expected.as_object().expect("expected side must be a mapping");
        let actual = case.actual.as_ref().map(|v| {
            v.as_object().expect("actual side must be a mapping or null")
        });

        let (diff, cost) = diff_dicts(expected, actual);
        let got = diff_to_value(&diff);
        if got != case.diff || cost != case.cost {
            eprintln!(
                "  FAIL {}: got ({}, {}), want ({}, {})",
                case.name, got, cost, case.diff, case.cost
            );
            failed += 1;
        }
    }

    assert_eq!(failed, 0, "{} dict cases failed out of {}", failed, cases.len());
}

#[test]
fn lists_suite() {
    let cases: Vec<ContainerCase> = load_suite("lists.yaml");

    let mut failed = 0;
    for case in &cases {
        let expected = case.expected.as_array().expect("expected side must be a sequence");
        let actual = case.actual.as_ref().map(|v| {
            v.as_array().expect("actual side must be a sequence or null").as_slice()
        });

        let (diff, cost) = diff_lists(expected, actual);
        let got = diff_to_value(&diff);
        if got != case.diff || cost != case.cost {
            eprintln!(
                "  FAIL {}: got ({}, {}), want ({}, {})",
                case.name, got, cost, case.diff, case.cost
            );
            failed += 1;
        }
    }

    assert_eq!(failed, 0, "{} list cases failed out of {}", failed, cases.len());
}
