use fyyur_page_shared::timestamp::TimestampFields;
use js_sys::Date;
use wasm_bindgen::prelude::*;

/// Parses a digit-delimited UTC timestamp string (e.g. `2019-05-21T19:30:15.500Z`) into a JS `Date`.
///
/// Never throws: input the parser can't make a time out of gives an Invalid Date.
#[wasm_bindgen(js_name = parseISOString)]
pub fn parse_iso_string(s: &str) -> Date {
	Date::new(&JsValue::from_f64(time_value(s)))
}

fn time_value(s: &str) -> f64 {
	// Time values never exceed 8.64e15 in magnitude, so the cast is exact.
	TimestampFields::split(s)
		.epoch_millis()
		.map_or(f64::NAN, |millis| millis as f64)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn time_value_is_epoch_millis() {
		assert_eq!(time_value("2019-05-21T19:30:15.500Z"), 1_558_467_015_500.0);
		assert_eq!(time_value("1970-01-01 00:00:00.000"), 0.0);
	}

	#[test]
	fn invalid_input_is_nan() {
		assert!(time_value("2019-05-21").is_nan());
		assert!(time_value("").is_nan());
	}
}
