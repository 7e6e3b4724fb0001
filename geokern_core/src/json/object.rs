//! JSON object type with insertion-ordered keys and typed getters.

use super::JsonValue;
use anyhow::Result;
use indexmap::IndexMap;
use std::{
	collections::hash_map::DefaultHasher,
	fmt::Debug,
	hash::{Hash, Hasher},
};

/// A JSON object backed by an `IndexMap<String, JsonValue>`.
///
/// Keys keep their insertion order, so serialization reproduces the document order. Equality
/// and hashing ignore the order.
#[derive(Clone, Default)]
pub struct JsonObject(IndexMap<String, JsonValue>);

impl JsonObject {
	#[must_use]
	pub fn new() -> Self {
		Self(IndexMap::new())
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Get a reference to the raw `JsonValue` for the specified key, if present.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	/// Insert or replace the value under `key`. A replaced key keeps its position.
	pub fn set<T: Into<JsonValue>>(&mut self, key: &str, value: T) {
		self.0.insert(key.to_string(), value.into());
	}

	/// Remove `key`, keeping the order of the remaining entries.
	pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
		self.0.shift_remove(key)
	}

	/// Retrieve a string value. `Ok(None)` if missing, an error if present with another type.
	pub fn get_str(&self, key: &str) -> Result<Option<&str>> {
		self.get(key).map(JsonValue::as_str).transpose()
	}

	pub fn get_number(&self, key: &str) -> Result<Option<f64>> {
		self.get(key).map(JsonValue::as_number).transpose()
	}

	pub fn get_bool(&self, key: &str) -> Result<Option<bool>> {
		self.get(key).map(JsonValue::as_bool).transpose()
	}

	pub fn get_object(&self, key: &str) -> Result<Option<&JsonObject>> {
		self.get(key).map(JsonValue::as_object).transpose()
	}

	pub fn get_array(&self, key: &str) -> Result<Option<&Vec<JsonValue>>> {
		self.get(key).map(JsonValue::as_array).transpose()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
		self.0.iter()
	}

	pub fn keys(&self) -> impl Iterator<Item = &String> {
		self.0.keys()
	}

	#[must_use]
	pub fn stringify(&self) -> String {
		JsonValue::Object(self.clone()).stringify()
	}
}

impl PartialEq for JsonObject {
	fn eq(&self, other: &Self) -> bool {
		// IndexMap equality is order-independent
		self.0 == other.0
	}
}

impl Eq for JsonObject {}

impl Hash for JsonObject {
	fn hash<H: Hasher>(&self, state: &mut H) {
		let mut sum: u64 = 0;
		for entry in &self.0 {
			let mut hasher = DefaultHasher::new();
			entry.hash(&mut hasher);
			sum = sum.wrapping_add(hasher.finish());
		}
		self.0.len().hash(state);
		sum.hash(state);
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.0.iter()).finish()
	}
}

impl<'a> IntoIterator for &'a JsonObject {
	type Item = (&'a String, &'a JsonValue);
	type IntoIter = indexmap::map::Iter<'a, String, JsonValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl<K: Into<String>, V: Into<JsonValue>> FromIterator<(K, V)> for JsonObject {
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		JsonObject(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}
