#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = json_value::from_slice(data) {
        // Decoded doubles are either fractional or outside the `i64` range, so the round trip is exact
        let text = value.to_string();
        let decoded = json_value::from_str(&text).expect("Encoded value is valid JSON");
        assert_eq!(decoded, value);
        let buffered: serde_json::Value = value.clone().into();
        assert_eq!(buffered, value);
    }
});
