//! JSON parsing into [`JsonValue`] and skipping of values that are not needed.

use super::{JsonObject, JsonValue};
use crate::byte_iterator::*;
use anyhow::{Context, Result};

/// Arrays and objects deeper than this are rejected instead of exhausting the stack.
pub const MAX_DEPTH: usize = 512;

/// Parse a complete JSON document. Trailing non-whitespace is an error.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let mut iter = ByteIterator::from_text(json);
	parse_json_iter(&mut iter)
		.and_then(|value| expect_end(&mut iter).map(|()| value))
		.with_context(|| format!("while parsing JSON '{}'", shorten(json)))
}

fn shorten(json: &str) -> String {
	const MAX: usize = 64;
	if json.len() <= MAX {
		json.to_string()
	} else {
		let mut end = MAX;
		while !json.is_char_boundary(end) {
			end -= 1;
		}
		format!("{}...", &json[..end])
	}
}

/// Parse the JSON value at the current iterator position.
pub fn parse_json_iter(iter: &mut ByteIterator) -> Result<JsonValue> {
	parse_value(iter, 0)
}

fn check_depth(iter: &ByteIterator, depth: usize) -> Result<()> {
	if depth >= MAX_DEPTH {
		return Err(iter.format_error("nesting too deep"));
	}
	Ok(())
}

fn parse_value(iter: &mut ByteIterator, depth: usize) -> Result<JsonValue> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' => {
			check_depth(iter, depth)?;
			parse_array_entries(iter, |iter2| parse_value(iter2, depth + 1)).map(JsonValue::Array)
		}
		b'{' => parse_object(iter, depth).map(JsonValue::Object),
		b'"' => parse_quoted_json_string(iter).map(JsonValue::String),
		d if d.is_ascii_digit() || d == b'-' => parse_number_as::<f64>(iter).map(JsonValue::Number),
		b't' => parse_tag(iter, "true").map(|()| JsonValue::Boolean(true)),
		b'f' => parse_tag(iter, "false").map(|()| JsonValue::Boolean(false)),
		b'n' => parse_tag(iter, "null").map(|()| JsonValue::Null),
		c => Err(iter.format_error(&format!("unexpected character '{}'", c as char))),
	}
}

/// Parse the JSON object at the current iterator position. Later duplicates of a key win.
pub fn parse_json_object(iter: &mut ByteIterator) -> Result<JsonObject> {
	parse_object(iter, 0)
}

fn parse_object(iter: &mut ByteIterator, depth: usize) -> Result<JsonObject> {
	check_depth(iter, depth)?;
	let mut object = JsonObject::new();
	parse_object_entries(iter, |key, iter2| {
		let value = parse_value(iter2, depth + 1)?;
		object.set(&key, value);
		Ok(())
	})?;
	Ok(object)
}

/// Consume the JSON value at the current iterator position without building it.
pub fn skip_json_value(iter: &mut ByteIterator) -> Result<()> {
	skip_value(iter, 0)
}

fn skip_value(iter: &mut ByteIterator, depth: usize) -> Result<()> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' => {
			check_depth(iter, depth)?;
			parse_array_entries(iter, |iter2| skip_value(iter2, depth + 1)).map(|_| ())
		}
		b'{' => {
			check_depth(iter, depth)?;
			parse_object_entries(iter, |_, iter2| skip_value(iter2, depth + 1))
		}
		b'"' => parse_quoted_json_string(iter).map(|_| ()),
		d if d.is_ascii_digit() || d == b'-' => parse_number_as_string(iter).map(|_| ()),
		b't' => parse_tag(iter, "true"),
		b'f' => parse_tag(iter, "false"),
		b'n' => parse_tag(iter, "null"),
		c => Err(iter.format_error(&format!("unexpected character '{}'", c as char))),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_parse_nested() -> Result<()> {
		let value = parse_json_str(r#" {"a": [1, -2.5, "x", true, false, null], "b": {"c": {}}} "#)?;
		let object = value.as_object()?;
		assert_eq!(
			object.get("a"),
			Some(&JsonValue::Array(vec![
				JsonValue::Number(1.0),
				JsonValue::Number(-2.5),
				JsonValue::from("x"),
				JsonValue::Boolean(true),
				JsonValue::Boolean(false),
				JsonValue::Null,
			]))
		);
		assert_eq!(object.get_object("b")?.and_then(|b| b.get("c")), Some(&JsonValue::Object(JsonObject::new())));
		Ok(())
	}

	#[test]
	fn test_error_context() {
		let error = parse_json_str("{invalid json}").unwrap_err();
		assert_eq!(
			format!("{error:#}"),
			"while parsing JSON '{invalid json}': parsing object, expected '\"' at position 1: {i"
		);
	}

	#[rstest]
	#[case("")]
	#[case("[1, 2")]
	#[case("{\"a\": }")]
	#[case("nul")]
	#[case("1 2")]
	#[case("'single'")]
	fn test_parse_errors(#[case] json: &str) {
		assert!(parse_json_str(json).is_err());
	}

	#[test]
	fn test_skip_json_value() -> Result<()> {
		let mut iter = ByteIterator::from_text(r#"{"skip": [1, {"deep": [true, null]}, "s"]} 42"#);
		skip_json_value(&mut iter)?;
		iter.skip_whitespace();
		assert_eq!(parse_number_as::<i32>(&mut iter)?, 42);
		Ok(())
	}

	fn nested(depth: usize) -> String {
		format!("{}{}", "[".repeat(depth), "]".repeat(depth))
	}

	// the error points at the first bracket beyond the limit
	#[rstest]
	#[case::arrays(nested(100_000), 512)]
	#[case::objects("{\"a\":".repeat(100_000), 2560)]
	#[case::just_too_deep(nested(MAX_DEPTH + 1), 512)]
	fn test_nesting_too_deep(#[case] json: String, #[case] position: usize) {
		let expected = format!("nesting too deep at position {position}");

		let error = parse_json_str(&json).unwrap_err();
		assert!(format!("{error:#}").contains(&expected));

		let error = skip_json_value(&mut ByteIterator::from_text(&json)).unwrap_err();
		assert!(error.to_string().starts_with(&expected));
	}

	#[test]
	fn test_nesting_at_the_limit() -> Result<()> {
		let json = nested(MAX_DEPTH);
		parse_json_str(&json)?;
		let mut iter = ByteIterator::from_text(&json);
		skip_json_value(&mut iter)?;
		expect_end(&mut iter)?;

		let object = format!("{}1{}", "{\"a\":".repeat(MAX_DEPTH), "}".repeat(MAX_DEPTH));
		assert_eq!(parse_json_object(&mut ByteIterator::from_text(&object))?.len(), 1);
		Ok(())
	}

	#[test]
	fn test_shorten() {
		let long = "x".repeat(100);
		assert_eq!(shorten(&long).len(), 67);
		assert_eq!(shorten("short"), "short");
	}
}
