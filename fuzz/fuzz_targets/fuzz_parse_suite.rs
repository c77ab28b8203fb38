#![no_main]

use libfuzzer_sys::fuzz_target;
use restdiff::parse_suite;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Must never panic: malformed suites are structured errors.
        let _ = parse_suite(input);
    }
});
