use super::{JsonValue, JsonWriter};

pub fn stringify(json: &JsonValue) -> String {
	let mut writer = JsonWriter::compact();
	writer.value(json);
	writer.into_string()
}

pub fn stringify_pretty(json: &JsonValue) -> String {
	let mut writer = JsonWriter::pretty();
	writer.value(json);
	writer.into_string()
}

pub fn escape_json_string(input: &str) -> String {
	let mut output = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'"' => output.push_str("\\\""),
			'\\' => output.push_str("\\\\"),
			'\n' => output.push_str("\\n"),
			'\r' => output.push_str("\\r"),
			'\t' => output.push_str("\\t"),
			'\u{08}' => output.push_str("\\b"),
			'\u{0c}' => output.push_str("\\f"),
			c if c.is_control() => output.push_str(&format!("\\u{:04x}", c as u32)),
			c => output.push(c),
		}
	}
	output
}

#[cfg(test)]
mod tests {
	use super::super::parse_json_str;
	use super::*;
	use anyhow::Result;
	use rstest::rstest;

	#[rstest]
	#[case("\"Hello, World!\"", "\"Hello, World!\"")]
	#[case("42", "42")]
	#[case("4.2e1", "42")]
	#[case("true", "true")]
	#[case("null", "null")]
	#[case("\"Line1\\nLine2\\rTab\\tBackslash\\\\\"", "\"Line1\\nLine2\\rTab\\tBackslash\\\\\"")]
	#[case("\"Unicode: 😊\"", "\"Unicode: 😊\"")]
	#[case("[\"item1\", 123, false, null]", "[\"item1\",123,false,null]")]
	#[case("{\"key2\": \"value\", \"key1\": 42}", "{\"key2\":\"value\",\"key1\":42}")]
	#[case("{\"nested\": {\"array\": [\"value\", {\"inner_key\": 3.14}]}}", "{\"nested\":{\"array\":[\"value\",{\"inner_key\":3.14}]}}")]
	fn test_stringify(#[case] input: &str, #[case] expected: &str) -> Result<()> {
		assert_eq!(stringify(&parse_json_str(input)?), expected);
		Ok(())
	}

	#[test]
	fn test_stringify_pretty() -> Result<()> {
		let json = parse_json_str("{\"a\":1,\"bb\":[true]}")?;
		assert_eq!(stringify_pretty(&json), "{\n  \"a\": 1,\n  \"bb\": [\n    true\n  ]\n}");
		Ok(())
	}

	#[test]
	fn test_escape_json_string_control() {
		assert_eq!(escape_json_string("Control:\x01\x02"), "Control:\\u0001\\u0002");
	}
}
