//! Streaming JSON writer.
//!
//! `JsonWriter` emits tokens directly into a `String`, so callers can serialize their own types
//! member by member, in a fixed order, without first building a [`JsonValue`] tree.

use super::{JsonValue, escape_json_string};
use log::warn;

#[derive(Clone, Copy, Debug)]
struct Frame {
	is_object: bool,
	count: usize,
}

/// Writes JSON tokens into an internal buffer, compact or indented by two spaces.
#[derive(Debug)]
pub struct JsonWriter {
	output: String,
	pretty: bool,
	stack: Vec<Frame>,
	after_key: bool,
	non_finite: Option<f64>,
}

impl JsonWriter {
	#[must_use]
	pub fn new(pretty: bool) -> Self {
		JsonWriter {
			output: String::with_capacity(256),
			pretty,
			stack: Vec::new(),
			after_key: false,
			non_finite: None,
		}
	}

	#[must_use]
	pub fn compact() -> Self {
		Self::new(false)
	}

	#[must_use]
	pub fn pretty() -> Self {
		Self::new(true)
	}

	fn newline(&mut self) {
		if self.pretty {
			self.output.push('\n');
			for _ in 0..self.stack.len() {
				self.output.push_str("  ");
			}
		}
	}

	// Writes the separator that goes in front of the next array element or object key.
	fn separate(&mut self) {
		if let Some(frame) = self.stack.last_mut() {
			let first = frame.count == 0;
			frame.count += 1;
			if !first {
				self.output.push(',');
			}
			self.newline();
		}
	}

	fn before_value(&mut self) {
		if self.after_key {
			self.after_key = false;
		} else {
			debug_assert!(
				!self.stack.last().is_some_and(|f| f.is_object),
				"object values need a key"
			);
			self.separate();
		}
	}

	pub fn begin_object(&mut self) -> &mut Self {
		self.before_value();
		self.output.push('{');
		self.stack.push(Frame {
			is_object: true,
			count: 0,
		});
		self
	}

	pub fn end_object(&mut self) -> &mut Self {
		self.close('}')
	}

	pub fn begin_array(&mut self) -> &mut Self {
		self.before_value();
		self.output.push('[');
		self.stack.push(Frame {
			is_object: false,
			count: 0,
		});
		self
	}

	pub fn end_array(&mut self) -> &mut Self {
		self.close(']')
	}

	fn close(&mut self, bracket: char) -> &mut Self {
		let frame = self.stack.pop();
		debug_assert!(frame.is_some(), "unbalanced '{bracket}'");
		if frame.is_some_and(|f| f.count > 0) {
			self.newline();
		}
		self.output.push(bracket);
		self
	}

	/// Writes an object key. The next call must write its value.
	pub fn key(&mut self, key: &str) -> &mut Self {
		debug_assert!(!self.after_key, "key without value");
		self.separate();
		self.output.push('"');
		self.output.push_str(&escape_json_string(key));
		self.output.push_str(if self.pretty { "\": " } else { "\":" });
		self.after_key = true;
		self
	}

	/// Writes a number in its shortest round-trip form. Non-finite numbers are written as `null`
	/// and remembered, see [`non_finite`](Self::non_finite).
	pub fn number(&mut self, value: f64) -> &mut Self {
		self.before_value();
		if value.is_finite() {
			self.output.push_str(&value.to_string());
		} else {
			warn!("writing non-finite number {value} as null");
			self.non_finite.get_or_insert(value);
			self.output.push_str("null");
		}
		self
	}

	/// The first non-finite number that was written, if any.
	#[must_use]
	pub fn non_finite(&self) -> Option<f64> {
		self.non_finite
	}

	pub fn string(&mut self, value: &str) -> &mut Self {
		self.before_value();
		self.output.push('"');
		self.output.push_str(&escape_json_string(value));
		self.output.push('"');
		self
	}

	pub fn boolean(&mut self, value: bool) -> &mut Self {
		self.before_value();
		self.output.push_str(if value { "true" } else { "false" });
		self
	}

	pub fn null(&mut self) -> &mut Self {
		self.before_value();
		self.output.push_str("null");
		self
	}

	/// Writes a complete [`JsonValue`] tree.
	pub fn value(&mut self, value: &JsonValue) -> &mut Self {
		match value {
			JsonValue::Array(array) => {
				self.begin_array();
				for item in array {
					self.value(item);
				}
				self.end_array()
			}
			JsonValue::Boolean(b) => self.boolean(*b),
			JsonValue::Null => self.null(),
			JsonValue::Number(n) => self.number(*n),
			JsonValue::Object(object) => {
				self.begin_object();
				for (key, item) in object {
					self.key(key).value(item);
				}
				self.end_object()
			}
			JsonValue::String(s) => self.string(s),
		}
	}

	#[must_use]
	pub fn into_string(self) -> String {
		debug_assert!(self.stack.is_empty(), "unclosed JSON containers");
		self.output
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn test_compact() {
		let mut writer = JsonWriter::compact();
		writer.begin_object();
		writer.key("type").string("Point");
		writer.key("coordinates").begin_array().number(100.0).number(-0.5).end_array();
		writer.key("empty").begin_array().end_array();
		writer.key("flag").boolean(false);
		writer.key("nothing").null();
		writer.end_object();
		assert_eq!(
			writer.into_string(),
			r#"{"type":"Point","coordinates":[100,-0.5],"empty":[],"flag":false,"nothing":null}"#
		);
	}

	#[test]
	fn test_pretty() {
		let mut writer = JsonWriter::pretty();
		writer.begin_object();
		writer.key("a").begin_array().number(1.0).begin_array().number(2.0).end_array().end_array();
		writer.key("b").begin_object().end_object();
		writer.end_object();
		assert_eq!(
			writer.into_string(),
			"{\n  \"a\": [\n    1,\n    [\n      2\n    ]\n  ],\n  \"b\": {}\n}"
		);
	}

	#[test]
	fn test_non_finite_numbers() {
		let mut writer = JsonWriter::compact();
		writer.begin_array().number(1.25);
		assert_eq!(writer.non_finite(), None);
		writer.number(f64::INFINITY).number(f64::NAN).end_array();
		assert_eq!(writer.non_finite(), Some(f64::INFINITY));
		assert_eq!(writer.into_string(), "[1.25,null,null]");
	}

	#[test]
	fn test_escaping() {
		let mut writer = JsonWriter::compact();
		writer.begin_object().key("say \"hi\"").string("line\nbreak").end_object();
		assert_eq!(writer.into_string(), r#"{"say \"hi\"":"line\nbreak"}"#);
	}

	#[test]
	fn test_scalar_document() {
		let mut writer = JsonWriter::compact();
		writer.number(1e21);
		assert_eq!(writer.into_string(), "1000000000000000000000");
	}
}
