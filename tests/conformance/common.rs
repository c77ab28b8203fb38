use restdiff::Diff;
use serde_json::Value;
use std::path::PathBuf;

/// Directory holding the YAML case suites.
pub fn cases_dir() -> PathBuf {
    std::env::var("RESTDIFF_CASES_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("cases"))
}

/// Load a suite of cases from a YAML file, deserialized through
/// serde_json::Value so fixtures and engine output compare in one domain.
pub fn load_suite<T: serde::de::DeserializeOwned>(file: &str) -> Vec<T> {
    let path = cases_dir().join(file);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {:?}: {}", path, e));
    let value: Value = serde_saphyr::from_str(&content).unwrap();
    serde_json::from_value(value).unwrap()
}

/// Render an engine result as a JSON value for comparison against fixtures:
/// a full match renders as null, everything else as its serialized form.
pub fn diff_to_value(diff: &Option<Diff>) -> Value {
    match diff {
        None => Value::Null,
        Some(diff) => serde_json::to_value(diff).unwrap(),
    }
}
