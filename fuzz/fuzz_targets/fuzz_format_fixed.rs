#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First 8 bytes are the value, the next byte picks the digit count
    let Some((value, rest)) = data.split_first_chunk::<8>() else {
        return;
    };
    let v = f64::from_be_bytes(*value);
    let digits = rest.first().map_or(2, |d| usize::from(*d % 21));

    let out = valuefmt::formatter::format_fixed(v, digits);
    if v.is_finite() {
        let fraction = out.split_once('.').map_or("", |(_, f)| f);
        assert_eq!(fraction.len(), digits);
        assert!(out.trim_start_matches('-').bytes().all(|b| b.is_ascii_digit() || b == b'.'));
    }
});
