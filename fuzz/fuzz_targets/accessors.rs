#![no_main]
use json_value::JsonValue;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (f64, &str)| {
    let (number, text) = data;
    let double = JsonValue::Double(number);
    if let Some(int) = double.as_i64() {
        #[allow(clippy::cast_precision_loss)]
        let widened = int as f64;
        assert_eq!(widened, number);
    }
    let string = JsonValue::from(text);
    if let Some(int) = string.as_i64() {
        assert_eq!(JsonValue::from(int.to_string()).as_i64(), Some(int));
    }
    let _ = string.as_f64();
    let _ = string.as_int();
});
