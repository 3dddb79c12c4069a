#![no_main]

use libfuzzer_sys::fuzz_target;
use paracl_ete::harness::comparator::judge;

fuzz_target!(|data: &[u8]| {
    // Split the input into a reference and an actual output at the first NUL
    if let Ok(s) = std::str::from_utf8(data) {
        let (expected, actual) = s.split_once('\0').unwrap_or((s, ""));
        // Verdict and diff rendering must never panic on arbitrary text
        let _ = judge(expected, actual, true);
    }
});
