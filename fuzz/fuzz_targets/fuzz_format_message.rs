#![no_main]
use libfuzzer_sys::fuzz_target;
use lognest::fmt::format_message;

fuzz_target!(|data: &str| {
    // Malformed templates must be rejected, never panic
    let _ = format_message(data, &[&"first", &2, &-3.5_f64]);
    let _ = format_message(data, &[]);
});
