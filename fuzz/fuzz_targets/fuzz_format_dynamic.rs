#![no_main]
use libfuzzer_sys::fuzz_target;
use valuefmt::ValueFormatter;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    // Strings and numbers format, everything else is rejected
    let result = ValueFormatter::default().format_dynamic(&input);
    assert_eq!(result.is_ok(), input.is_string() || input.is_number());
});
