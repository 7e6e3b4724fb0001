//! JSON value enum representing any valid JSON data.

use super::{JsonObject, parse_json_str, stringify, stringify_pretty};
use anyhow::{Result, bail};
use std::hash::{Hash, Hasher};

/// Represents any JSON data: arrays, objects, numbers, strings, booleans, and null.
///
/// Equality is structural. Numbers compare by value, with `NaN` equal to itself so that
/// `Eq` and `Hash` hold.
#[derive(Clone, Debug)]
pub enum JsonValue {
	Array(Vec<JsonValue>),
	Boolean(bool),
	Null,
	Number(f64),
	Object(JsonObject),
	String(String),
}

impl JsonValue {
	/// Parse a JSON string into a `JsonValue`.
	pub fn parse_str(json: &str) -> Result<JsonValue> {
		parse_json_str(json)
	}

	/// Return the JSON type as a lowercase string (`"array"`, `"object"`, etc.).
	#[must_use]
	pub fn type_as_str(&self) -> &'static str {
		use JsonValue::*;
		match self {
			Array(_) => "array",
			Boolean(_) => "boolean",
			Null => "null",
			Number(_) => "number",
			Object(_) => "object",
			String(_) => "string",
		}
	}

	/// Serialize to a compact JSON string.
	#[must_use]
	pub fn stringify(&self) -> String {
		stringify(self)
	}

	/// Serialize to a multi-line JSON string indented by two spaces.
	#[must_use]
	pub fn stringify_pretty(&self) -> String {
		stringify_pretty(self)
	}

	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, JsonValue::Null)
	}

	pub fn as_array(&self) -> Result<&Vec<JsonValue>> {
		match self {
			JsonValue::Array(array) => Ok(array),
			_ => bail!("expected an array, found a {}", self.type_as_str()),
		}
	}

	pub fn as_object(&self) -> Result<&JsonObject> {
		match self {
			JsonValue::Object(object) => Ok(object),
			_ => bail!("expected an object, found a {}", self.type_as_str()),
		}
	}

	pub fn into_object(self) -> Result<JsonObject> {
		match self {
			JsonValue::Object(object) => Ok(object),
			_ => bail!("expected an object, found a {}", self.type_as_str()),
		}
	}

	pub fn as_str(&self) -> Result<&str> {
		match self {
			JsonValue::String(text) => Ok(text),
			_ => bail!("expected a string, found a {}", self.type_as_str()),
		}
	}

	pub fn as_number(&self) -> Result<f64> {
		match self {
			JsonValue::Number(value) => Ok(*value),
			_ => bail!("expected a number, found a {}", self.type_as_str()),
		}
	}

	pub fn as_bool(&self) -> Result<bool> {
		match self {
			JsonValue::Boolean(value) => Ok(*value),
			_ => bail!("expected a boolean, found a {}", self.type_as_str()),
		}
	}
}

/// Bit pattern used to hash a float consistently with [`number_eq`].
fn number_bits(value: f64) -> u64 {
	if value == 0.0 {
		0
	} else if value.is_nan() {
		f64::NAN.to_bits()
	} else {
		value.to_bits()
	}
}

fn number_eq(a: f64, b: f64) -> bool {
	a == b || (a.is_nan() && b.is_nan())
}

impl PartialEq for JsonValue {
	fn eq(&self, other: &Self) -> bool {
		use JsonValue::*;
		match (self, other) {
			(Array(a), Array(b)) => a == b,
			(Boolean(a), Boolean(b)) => a == b,
			(Null, Null) => true,
			(Number(a), Number(b)) => number_eq(*a, *b),
			(Object(a), Object(b)) => a == b,
			(String(a), String(b)) => a == b,
			_ => false,
		}
	}
}

impl Eq for JsonValue {}

impl Hash for JsonValue {
	fn hash<H: Hasher>(&self, state: &mut H) {
		std::mem::discriminant(self).hash(state);
		match self {
			JsonValue::Array(a) => a.hash(state),
			JsonValue::Boolean(b) => b.hash(state),
			JsonValue::Null => {}
			JsonValue::Number(n) => number_bits(*n).hash(state),
			JsonValue::Object(o) => o.hash(state),
			JsonValue::String(s) => s.hash(state),
		}
	}
}

impl From<&str> for JsonValue {
	fn from(input: &str) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<String> for JsonValue {
	fn from(input: String) -> Self {
		JsonValue::String(input)
	}
}

impl From<bool> for JsonValue {
	fn from(input: bool) -> Self {
		JsonValue::Boolean(input)
	}
}

impl From<f64> for JsonValue {
	fn from(input: f64) -> Self {
		JsonValue::Number(input)
	}
}

impl From<i32> for JsonValue {
	fn from(input: i32) -> Self {
		JsonValue::Number(f64::from(input))
	}
}

impl From<JsonObject> for JsonValue {
	fn from(input: JsonObject) -> Self {
		JsonValue::Object(input)
	}
}

impl<T> From<Vec<T>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonValue::Array(input.into_iter().map(JsonValue::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn test_type_as_str() {
		assert_eq!(JsonValue::from(vec![1, 2]).type_as_str(), "array");
		assert_eq!(JsonValue::from(true).type_as_str(), "boolean");
		assert_eq!(JsonValue::Null.type_as_str(), "null");
		assert_eq!(JsonValue::from(1.5).type_as_str(), "number");
		assert_eq!(JsonValue::from(JsonObject::new()).type_as_str(), "object");
		assert_eq!(JsonValue::from("x").type_as_str(), "string");
	}

	#[test]
	fn test_accessors() -> Result<()> {
		assert_eq!(JsonValue::from("hello").as_str()?, "hello");
		assert_eq!(JsonValue::from(2.5).as_number()?, 2.5);
		assert!(JsonValue::from(true).as_bool()?);
		assert_eq!(JsonValue::from(vec![1, 2]).as_array()?.len(), 2);
		assert!(JsonValue::Null.is_null());

		assert_eq!(
			JsonValue::from(1).as_str().unwrap_err().to_string(),
			"expected a string, found a number"
		);
		assert_eq!(
			JsonValue::from("a").as_object().unwrap_err().to_string(),
			"expected an object, found a string"
		);
		Ok(())
	}

	#[test]
	fn test_number_equality() {
		assert_eq!(JsonValue::from(0.0), JsonValue::from(-0.0));
		assert_eq!(JsonValue::Number(f64::NAN), JsonValue::Number(f64::NAN));
		assert_ne!(JsonValue::from(1.0), JsonValue::from("1"));
	}

	#[test]
	fn test_hash_matches_equality() {
		let mut set = HashSet::new();
		set.insert(JsonValue::from(0.0));
		set.insert(JsonValue::from(-0.0));
		set.insert(JsonValue::Number(f64::NAN));
		set.insert(JsonValue::Number(f64::NAN));
		set.insert(JsonValue::from(vec!["a", "b"]));
		set.insert(JsonValue::from(vec!["a", "b"]));
		assert_eq!(set.len(), 3);
	}
}
