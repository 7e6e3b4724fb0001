//! Reading GeoJSON objects from the token stream.
//!
//! An object is scanned once: `type` is decoded, the payload members are skipped and only their
//! start positions are kept. Once the type is known, each payload member is parsed from its
//! recorded position. Member order in the document therefore does not matter.

use super::coordinates::{CoordinateGeometry, CoordinatePayload, read_bbox};
use crate::{
	BoundingBox, CoordinateShifter, FeatureId, GeoFeature, GeoFeatureCollection, GeoJsonError, GeoJsonType,
	Geometry, GeometryCollection, LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry,
	MultiPolygonGeometry, PointGeometry, PolygonGeometry,
};
use anyhow::Result;
use geokern_core::{
	byte_iterator::{
		ByteIterator, parse_array_entries, parse_number_as, parse_object_entries, parse_quoted_json_string, parse_tag,
	},
	json::{JsonObject, parse_json_object, skip_json_value},
};
use log::trace;

/// The members of one GeoJSON object, with payloads kept as positions into the document.
pub(crate) struct RawObject<'a> {
	source: ByteIterator<'a>,
	type_name: Option<String>,
	bbox: Option<usize>,
	coordinates: Option<usize>,
	geometries: Option<usize>,
	geometry: Option<usize>,
	properties: Option<usize>,
	id: Option<usize>,
	features: Option<usize>,
}

impl<'a> RawObject<'a> {
	pub(crate) fn scan(iter: &mut ByteIterator<'a>) -> Result<Self> {
		let mut raw = RawObject {
			source: iter.clone(),
			type_name: None,
			bbox: None,
			coordinates: None,
			geometries: None,
			geometry: None,
			properties: None,
			id: None,
			features: None,
		};

		parse_object_entries(iter, |key, iter2| {
			let slot = match key.as_str() {
				"type" => {
					raw.type_name = Some(parse_quoted_json_string(iter2)?);
					return Ok(());
				}
				"bbox" => &mut raw.bbox,
				"coordinates" => &mut raw.coordinates,
				"geometries" => &mut raw.geometries,
				"geometry" => &mut raw.geometry,
				"properties" => &mut raw.properties,
				"id" => &mut raw.id,
				"features" => &mut raw.features,
				_ => {
					trace!("skipping member '{key}'");
					return skip_json_value(iter2);
				}
			};
			*slot = Some(iter2.position());
			skip_json_value(iter2)
		})?;

		Ok(raw)
	}

	/// The value of `type`. A missing member is malformed, an unknown name is an unknown discriminator.
	pub(crate) fn kind(&self) -> Result<GeoJsonType> {
		let name = self
			.type_name
			.as_deref()
			.ok_or_else(|| GeoJsonError::malformed("missing member 'type'"))?;
		Ok(name.parse::<GeoJsonType>()?)
	}

	fn member(&self, position: Option<usize>) -> Option<ByteIterator<'a>> {
		position.map(|position| self.source.fork_at(position))
	}

	// Like `member`, but an explicit `null` counts as absent.
	fn non_null(&self, position: Option<usize>) -> Result<Option<ByteIterator<'a>>> {
		let Some(mut iter) = self.member(position) else {
			return Ok(None);
		};
		iter.skip_whitespace();
		if iter.peek() == Some(b'n') {
			parse_tag(&mut iter, "null")?;
			return Ok(None);
		}
		Ok(Some(iter))
	}

	fn required(&self, position: Option<usize>, kind: GeoJsonType, name: &str) -> Result<ByteIterator<'a>> {
		self
			.member(position)
			.ok_or_else(|| GeoJsonError::malformed(format!("{kind} is missing member '{name}'")).into())
	}

	fn bbox(&self) -> Result<Option<BoundingBox>> {
		match self.member(self.bbox) {
			Some(mut iter) => read_bbox(&mut iter),
			None => Ok(None),
		}
	}
}

/// Scans an object and checks that its type is `expected`.
pub(crate) fn scan_expecting<'a>(iter: &mut ByteIterator<'a>, expected: GeoJsonType) -> Result<RawObject<'a>> {
	let raw = RawObject::scan(iter)?;
	let kind = raw.kind()?;
	if kind != expected {
		return Err(GeoJsonError::TypeMismatch {
			expected: expected.as_str(),
			found: kind.as_str().to_string(),
		}
		.into());
	}
	Ok(raw)
}

pub(crate) fn coordinate_geometry_from_raw<G: CoordinateGeometry>(
	raw: &RawObject,
	shifter: &dyn CoordinateShifter,
) -> Result<G> {
	let bbox = raw.bbox()?;
	let mut iter = raw.required(raw.coordinates, G::TYPE, "coordinates")?;
	let payload = G::Payload::read(&mut iter, shifter)?;
	Ok(G::from_payload(payload, bbox)?)
}

pub(crate) fn geometry_collection_from_raw(
	raw: &RawObject,
	shifter: &dyn CoordinateShifter,
) -> Result<GeometryCollection> {
	let bbox = raw.bbox()?;
	let mut iter = raw.required(raw.geometries, GeoJsonType::GeometryCollection, "geometries")?;
	let geometries = parse_array_entries(&mut iter, |iter2| read_geometry(iter2, shifter))?;
	Ok(GeometryCollection { geometries, bbox })
}

/// Builds the geometry selected by `kind`. Features are not geometries.
pub(crate) fn geometry_from_raw(raw: &RawObject, kind: GeoJsonType, shifter: &dyn CoordinateShifter) -> Result<Geometry> {
	use GeoJsonType as T;
	Ok(match kind {
		T::Point => Geometry::from(coordinate_geometry_from_raw::<PointGeometry>(raw, shifter)?),
		T::MultiPoint => Geometry::from(coordinate_geometry_from_raw::<MultiPointGeometry>(raw, shifter)?),
		T::LineString => Geometry::from(coordinate_geometry_from_raw::<LineStringGeometry>(raw, shifter)?),
		T::MultiLineString => Geometry::from(coordinate_geometry_from_raw::<MultiLineStringGeometry>(raw, shifter)?),
		T::Polygon => Geometry::from(coordinate_geometry_from_raw::<PolygonGeometry>(raw, shifter)?),
		T::MultiPolygon => Geometry::from(coordinate_geometry_from_raw::<MultiPolygonGeometry>(raw, shifter)?),
		T::GeometryCollection => Geometry::from(geometry_collection_from_raw(raw, shifter)?),
		T::Feature | T::FeatureCollection => {
			return Err(GeoJsonError::UnknownDiscriminator(kind.as_str().to_string()).into());
		}
	})
}

/// Reads any of the seven geometry types.
pub(crate) fn read_geometry(iter: &mut ByteIterator, shifter: &dyn CoordinateShifter) -> Result<Geometry> {
	let raw = RawObject::scan(iter)?;
	let kind = raw.kind()?;
	geometry_from_raw(&raw, kind, shifter)
}

fn read_feature_id(iter: &mut ByteIterator) -> Result<Option<FeatureId>> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'"' => Ok(Some(FeatureId::String(parse_quoted_json_string(iter)?))),
		b'n' => parse_tag(iter, "null").map(|()| None),
		d if d.is_ascii_digit() || d == b'-' => Ok(Some(FeatureId::Number(parse_number_as::<f64>(iter)?))),
		_ => Err(GeoJsonError::malformed(format!(
			"a feature id must be a string or a number, at position {}",
			iter.position()
		))
		.into()),
	}
}

pub(crate) fn feature_from_raw(raw: &RawObject, shifter: &dyn CoordinateShifter) -> Result<GeoFeature> {
	let geometry = raw
		.non_null(raw.geometry)?
		.map(|mut iter| read_geometry(&mut iter, shifter))
		.transpose()?;
	let properties = match raw.non_null(raw.properties)? {
		Some(mut iter) => parse_json_object(&mut iter)?,
		None => JsonObject::new(),
	};
	let id = match raw.member(raw.id) {
		Some(mut iter) => read_feature_id(&mut iter)?,
		None => None,
	};
	Ok(GeoFeature {
		geometry,
		properties,
		id,
		bbox: raw.bbox()?,
	})
}

/// Reads a feature. Any other type is rejected as not allowed at this place.
pub(crate) fn read_feature(iter: &mut ByteIterator, shifter: &dyn CoordinateShifter) -> Result<GeoFeature> {
	let raw = RawObject::scan(iter)?;
	let kind = raw.kind()?;
	if kind != GeoJsonType::Feature {
		return Err(GeoJsonError::UnknownDiscriminator(kind.as_str().to_string()).into());
	}
	feature_from_raw(&raw, shifter)
}

pub(crate) fn feature_collection_from_raw(
	raw: &RawObject,
	shifter: &dyn CoordinateShifter,
) -> Result<GeoFeatureCollection> {
	let bbox = raw.bbox()?;
	let mut iter = raw.required(raw.features, GeoJsonType::FeatureCollection, "features")?;
	let features = parse_array_entries(&mut iter, |iter2| read_feature(iter2, shifter))?;
	Ok(GeoFeatureCollection { features, bbox })
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{IdentityShifter, Position};
	use geokern_core::json::JsonValue;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn geometry(json: &str) -> Result<Geometry, GeoJsonError> {
		Ok(read_geometry(&mut ByteIterator::from_text(json), &IdentityShifter)?)
	}

	fn feature(json: &str) -> Result<GeoFeature, GeoJsonError> {
		Ok(read_feature(&mut ByteIterator::from_text(json), &IdentityShifter)?)
	}

	#[test]
	fn test_member_order_does_not_matter() {
		let a = geometry(r#"{"type":"LineString","bbox":[0,0,1,1],"coordinates":[[0,0],[1,1]]}"#).unwrap();
		let b = geometry(r#"{"coordinates":[[0,0],[1,1]],"bbox":[0,0,1,1],"type":"LineString"}"#).unwrap();
		assert_eq!(a, b);
		assert_eq!(a.bbox(), Some(&BoundingBox::from_lng_lats(0.0, 0.0, 1.0, 1.0)));
	}

	#[test]
	fn test_unknown_members_are_ignored() {
		let point = geometry(r#"{"crs":{"name":"x"},"type":"Point","extra":[1,[2]],"coordinates":[1,2]}"#).unwrap();
		assert_eq!(point, Geometry::from(PointGeometry::from_lng_lat(1.0, 2.0)));
	}

	#[test]
	fn test_missing_members() {
		assert!(matches!(
			geometry(r#"{"coordinates":[1,2]}"#),
			Err(GeoJsonError::MalformedDocument(_))
		));
		assert_eq!(
			geometry(r#"{"type":"Point"}"#),
			Err(GeoJsonError::MalformedDocument(
				"Point is missing member 'coordinates'".to_string()
			))
		);
		assert!(matches!(
			geometry(r#"{"type":"GeometryCollection"}"#),
			Err(GeoJsonError::MalformedDocument(_))
		));
	}

	#[test]
	fn test_unknown_type() {
		assert_eq!(
			geometry(r#"{"type":"Circle","coordinates":[1,2]}"#),
			Err(GeoJsonError::UnknownDiscriminator("Circle".to_string()))
		);
		assert_eq!(
			geometry(r#"{"type":"Feature","geometry":null}"#),
			Err(GeoJsonError::UnknownDiscriminator("Feature".to_string()))
		);
	}

	#[test]
	fn test_depth_mismatch() {
		assert!(matches!(
			geometry(r#"{"type":"Point","coordinates":[[1,2]]}"#),
			Err(GeoJsonError::ShapeMismatch(_))
		));
		assert!(matches!(
			geometry(r#"{"type":"Polygon","coordinates":[[1,2],[3,4]]}"#),
			Err(GeoJsonError::ShapeMismatch(_))
		));
		assert!(matches!(
			geometry(r#"{"type":"MultiPoint","coordinates":[[[1,2]]]}"#),
			Err(GeoJsonError::ShapeMismatch(_))
		));
	}

	#[test]
	fn test_nested_collection() {
		let json = r#"{"type":"GeometryCollection","geometries":[
			{"type":"Point","coordinates":[100,0]},
			{"type":"GeometryCollection","geometries":[{"type":"LineString","coordinates":[[101,0],[102,1]]}]}
		]}"#;
		let Geometry::GeometryCollection(collection) = geometry(json).unwrap() else {
			panic!("expected a GeometryCollection");
		};
		assert_eq!(collection.geometries().len(), 2);
		assert_eq!(collection.geometries()[1].kind(), GeoJsonType::GeometryCollection);
	}

	fn deep_array(depth: usize) -> String {
		format!("{}{}", "[".repeat(depth), "]".repeat(depth))
	}

	#[rstest]
	#[case::properties(format!(r#"{{"type":"Feature","geometry":null,"properties":{{"a":{}}}}}"#, deep_array(100_000)))]
	#[case::unknown_member(format!(r#"{{"type":"Feature","extra":{},"geometry":null}}"#, deep_array(100_000)))]
	#[case::id(format!(r#"{{"type":"Feature","id":{}}}"#, deep_array(100_000)))]
	#[case::collections(format!(
		r#"{{"type":"Feature","geometry":{}{}}}"#,
		r#"{"type":"GeometryCollection","geometries":["#.repeat(300),
		"]}".repeat(300)
	))]
	fn test_deep_nesting_is_malformed(#[case] json: String) {
		let Err(GeoJsonError::MalformedDocument(message)) = feature(&json) else {
			panic!("expected a malformed document");
		};
		assert!(message.contains("nesting too deep"), "{message}");
	}

	#[test]
	fn test_feature() {
		let feature = feature(
			r#"{"properties":{"name":"Dinagat","area":12.5},"id":42,"type":"Feature","geometry":{"type":"Point","coordinates":[125.6,10.1]}}"#,
		)
		.unwrap();
		assert_eq!(feature.id(), Some(&FeatureId::Number(42.0)));
		assert_eq!(feature.get_string_property("name"), Some("Dinagat"));
		assert_eq!(feature.properties().get("area"), Some(&JsonValue::Number(12.5)));
		assert_eq!(
			feature.geometry(),
			Some(&Geometry::from(PointGeometry::new(Position::new(125.6, 10.1))))
		);
	}

	#[test]
	fn test_feature_without_geometry() {
		let feature = feature(r#"{"type":"Feature","geometry":null,"properties":null}"#).unwrap();
		assert!(feature.geometry().is_none());
		assert!(feature.properties().is_empty());
		assert!(feature.id().is_none());
	}

	#[test]
	fn test_feature_id_kinds() {
		let feature = feature(r#"{"type":"Feature","id":"a-1","geometry":null}"#).unwrap();
		assert_eq!(feature.id(), Some(&FeatureId::from("a-1")));
		assert!(matches!(
			read_feature(&mut ByteIterator::from_text(r#"{"type":"Feature","id":true}"#), &IdentityShifter)
				.map_err(GeoJsonError::from),
			Err(GeoJsonError::MalformedDocument(_))
		));
	}

	#[test]
	fn test_type_mismatch() {
		let result = scan_expecting(
			&mut ByteIterator::from_text(r#"{"type":"Polygon","coordinates":[]}"#),
			GeoJsonType::Point,
		);
		assert_eq!(
			result.map(|_| ()).map_err(GeoJsonError::from),
			Err(GeoJsonError::TypeMismatch {
				expected: "Point",
				found: "Polygon".to_string()
			})
		);
	}
}
