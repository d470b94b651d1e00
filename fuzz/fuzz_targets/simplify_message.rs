#![no_main]

use libfuzzer_sys::fuzz_target;
use sketch_diag::simplify::offending::offending_area;
use sketch_diag::{DefaultStrings, Simplifier};

fuzz_target!(|data: &[u8]| {
    let message = String::from_utf8_lossy(&data[..data.len().min(1024)]);
    let _ = offending_area(&message);

    let simplifier = Simplifier::new(&DefaultStrings);
    if let Some(first) = simplifier.simplify(&message) {
        assert!(simplifier.simplify(&first.message).is_none());
    }
});
