use super::*;
use geokern_core::json::{JsonObject, JsonValue};
use std::{
	fmt::Display,
	hash::{Hash, Hasher},
};

/// A feature identifier. RFC 7946 allows a string or a number.
#[derive(Clone, Debug)]
pub enum FeatureId {
	String(String),
	Number(f64),
}

impl PartialEq for FeatureId {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(FeatureId::String(a), FeatureId::String(b)) => a == b,
			(FeatureId::Number(a), FeatureId::Number(b)) => a.to_bits() == b.to_bits() || a == b,
			_ => false,
		}
	}
}

impl Eq for FeatureId {}

impl Hash for FeatureId {
	fn hash<H: Hasher>(&self, state: &mut H) {
		match self {
			FeatureId::String(s) => {
				0u8.hash(state);
				s.hash(state);
			}
			FeatureId::Number(n) => {
				1u8.hash(state);
				// -0.0 == 0.0
				let n = if *n == 0.0 { 0.0 } else { *n };
				n.to_bits().hash(state);
			}
		}
	}
}

impl Display for FeatureId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			FeatureId::String(s) => f.write_str(s),
			FeatureId::Number(n) => write!(f, "{n}"),
		}
	}
}

impl From<&str> for FeatureId {
	fn from(value: &str) -> Self {
		FeatureId::String(value.to_string())
	}
}

impl From<String> for FeatureId {
	fn from(value: String) -> Self {
		FeatureId::String(value)
	}
}

impl From<f64> for FeatureId {
	fn from(value: f64) -> Self {
		FeatureId::Number(value)
	}
}

impl From<u32> for FeatureId {
	fn from(value: u32) -> Self {
		FeatureId::Number(f64::from(value))
	}
}

/// One optional geometry with an open set of properties.
///
/// All `with_*` methods return a new feature and leave `self` untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GeoFeature {
	pub(crate) geometry: Option<Geometry>,
	pub(crate) properties: JsonObject,
	pub(crate) id: Option<FeatureId>,
	pub(crate) bbox: Option<BoundingBox>,
}

impl GeoFeature {
	#[must_use]
	pub fn from_geometry(geometry: Option<Geometry>) -> Self {
		GeoFeature {
			geometry,
			..Default::default()
		}
	}

	#[must_use]
	pub fn with_id(self, id: Option<FeatureId>) -> Self {
		Self { id, ..self }
	}

	#[must_use]
	pub fn with_properties(self, properties: JsonObject) -> Self {
		Self { properties, ..self }
	}

	#[must_use]
	pub fn with_property<T: Into<JsonValue>>(mut self, key: &str, value: T) -> Self {
		self.properties.set(key, value);
		self
	}

	#[must_use]
	pub fn without_property(mut self, key: &str) -> Self {
		self.properties.remove(key);
		self
	}

	#[must_use]
	pub fn with_bbox(self, bbox: Option<BoundingBox>) -> Self {
		Self { bbox, ..self }
	}

	#[must_use]
	pub fn geometry(&self) -> Option<&Geometry> {
		self.geometry.as_ref()
	}

	#[must_use]
	pub fn properties(&self) -> &JsonObject {
		&self.properties
	}

	#[must_use]
	pub fn id(&self) -> Option<&FeatureId> {
		self.id.as_ref()
	}

	#[must_use]
	pub fn bbox(&self) -> Option<&BoundingBox> {
		self.bbox.as_ref()
	}

	/// The string value of `key`. Missing keys and other value types yield `None`.
	#[must_use]
	pub fn get_string_property(&self, key: &str) -> Option<&str> {
		self.properties.get_str(key).ok().flatten()
	}

	#[must_use]
	pub fn get_number_property(&self, key: &str) -> Option<f64> {
		self.properties.get_number(key).ok().flatten()
	}

	#[must_use]
	pub fn get_boolean_property(&self, key: &str) -> Option<bool> {
		self.properties.get_bool(key).ok().flatten()
	}

	/// `true` if `key` is present, even with a `null` value.
	#[must_use]
	pub fn has_property(&self, key: &str) -> bool {
		self.properties.contains_key(key)
	}

	#[must_use]
	pub fn has_non_null_value_for_property(&self, key: &str) -> bool {
		self.properties.get(key).is_some_and(|value| !value.is_null())
	}

	/// The extent of the geometry, or `None` for a feature without one.
	#[must_use]
	pub fn compute_bbox(&self) -> Option<BoundingBox> {
		self.geometry.as_ref().and_then(Geometry::compute_bbox)
	}
}
