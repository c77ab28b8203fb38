#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use restdiff::diff_values;
use serde_json::Value;

/// Generate an arbitrary JSON value from fuzzer bytes, bounded in depth.
fn arbitrary_value(u: &mut Unstructured<'_>, depth: u8) -> arbitrary::Result<Value> {
    let max_choice = if depth == 0 { 3 } else { 5 };
    match u.int_in_range(0..=max_choice)? {
        0 => Ok(Value::Null),
        1 => Ok(Value::Bool(bool::arbitrary(u)?)),
        2 => {
            let n = f64::arbitrary(u)?;
            Ok(serde_json::Number::from_f64(n)
                .map(Value::Number)
                .unwrap_or(Value::Null))
        }
        3 => Ok(Value::String(String::arbitrary(u)?)),
        4 => {
            let len = u.int_in_range(0..=4)?;
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(arbitrary_value(u, depth - 1)?);
            }
            Ok(Value::Array(items))
        }
        _ => {
            let len = u.int_in_range(0..=4)?;
            let mut map = serde_json::Map::new();
            for _ in 0..len {
                let key = String::arbitrary(u)?;
                map.insert(key, arbitrary_value(u, depth - 1)?);
            }
            Ok(Value::Object(map))
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);

    let expected = match arbitrary_value(&mut u, 3) {
        Ok(v) => v,
        Err(_) => return,
    };
    let actual = match arbitrary_value(&mut u, 3) {
        Ok(v) => v,
        Err(_) => return,
    };

    let (diff, cost) = diff_values(&expected, &actual);

    // A reported difference always costs something; a match costs nothing.
    assert_eq!(diff.is_some(), cost > 0);

    // Reports must always serialize.
    let _ = serde_json::to_value(&diff).unwrap();
});
