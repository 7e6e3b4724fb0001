use super::{
	GeoJsonCodec,
	read::{
		RawObject, coordinate_geometry_from_raw, feature_collection_from_raw, feature_from_raw,
		geometry_collection_from_raw, geometry_from_raw, read_geometry, scan_expecting,
	},
	write::{write_coordinate_geometry, write_feature, write_feature_collection, write_geometry, write_geometry_collection},
};
use crate::{
	BoundingBox, CoordinateShifter, GeoFeature, GeoFeatureCollection, GeoJsonType, GeoResult, Geometry,
	GeometryCollection, GeometryTrait, LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry,
	MultiPolygonGeometry, PointGeometry, PolygonGeometry,
};
use anyhow::Result;
use geokern_core::{byte_iterator::ByteIterator, json::JsonWriter};

/// A value that can be read from and written to GeoJSON.
///
/// `from_json` and `to_json` use the identity shifter and compact output. Use a
/// [`GeoJsonCodec`] for anything else.
pub trait GeoJsonObject: Sized {
	/// Reads one object at the cursor. Failures are [`GeoJsonError`](crate::GeoJsonError)s
	/// wrapped in `anyhow`, or tokenizer errors for invalid JSON.
	fn read_geojson(iter: &mut ByteIterator, shifter: &dyn CoordinateShifter) -> Result<Self>;

	fn write_geojson(&self, writer: &mut JsonWriter, shifter: &dyn CoordinateShifter);

	fn from_json(json: &str) -> GeoResult<Self> {
		GeoJsonCodec::default().read_as(json)
	}

	fn to_json(&self) -> GeoResult<String> {
		GeoJsonCodec::default().write_string(self)
	}
}

macro_rules! impl_coordinate_geojson {
	($($t:ty),* $(,)?) => {$(
		impl GeoJsonObject for $t {
			fn read_geojson(iter: &mut ByteIterator, shifter: &dyn CoordinateShifter) -> Result<Self> {
				let raw = scan_expecting(iter, <$t as GeometryTrait>::TYPE)?;
				coordinate_geometry_from_raw(&raw, shifter)
			}

			fn write_geojson(&self, writer: &mut JsonWriter, shifter: &dyn CoordinateShifter) {
				write_coordinate_geometry(self, writer, shifter);
			}
		}
	)*}
}

impl_coordinate_geojson!(
	PointGeometry,
	MultiPointGeometry,
	LineStringGeometry,
	MultiLineStringGeometry,
	PolygonGeometry,
	MultiPolygonGeometry,
);

impl GeoJsonObject for GeometryCollection {
	fn read_geojson(iter: &mut ByteIterator, shifter: &dyn CoordinateShifter) -> Result<Self> {
		let raw = scan_expecting(iter, GeoJsonType::GeometryCollection)?;
		geometry_collection_from_raw(&raw, shifter)
	}

	fn write_geojson(&self, writer: &mut JsonWriter, shifter: &dyn CoordinateShifter) {
		write_geometry_collection(self, writer, shifter);
	}
}

impl GeoJsonObject for Geometry {
	fn read_geojson(iter: &mut ByteIterator, shifter: &dyn CoordinateShifter) -> Result<Self> {
		read_geometry(iter, shifter)
	}

	fn write_geojson(&self, writer: &mut JsonWriter, shifter: &dyn CoordinateShifter) {
		write_geometry(self, writer, shifter);
	}
}

impl GeoJsonObject for GeoFeature {
	fn read_geojson(iter: &mut ByteIterator, shifter: &dyn CoordinateShifter) -> Result<Self> {
		let raw = scan_expecting(iter, GeoJsonType::Feature)?;
		feature_from_raw(&raw, shifter)
	}

	fn write_geojson(&self, writer: &mut JsonWriter, shifter: &dyn CoordinateShifter) {
		write_feature(self, writer, shifter);
	}
}

impl GeoJsonObject for GeoFeatureCollection {
	fn read_geojson(iter: &mut ByteIterator, shifter: &dyn CoordinateShifter) -> Result<Self> {
		let raw = scan_expecting(iter, GeoJsonType::FeatureCollection)?;
		feature_collection_from_raw(&raw, shifter)
	}

	fn write_geojson(&self, writer: &mut JsonWriter, shifter: &dyn CoordinateShifter) {
		write_feature_collection(self, writer, shifter);
	}
}

/// Any GeoJSON document: a geometry, a feature or a feature collection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GeoJson {
	Geometry(Geometry),
	Feature(GeoFeature),
	FeatureCollection(GeoFeatureCollection),
}

impl GeoJson {
	#[must_use]
	pub fn kind(&self) -> GeoJsonType {
		match self {
			GeoJson::Geometry(geometry) => geometry.kind(),
			GeoJson::Feature(_) => GeoJsonType::Feature,
			GeoJson::FeatureCollection(_) => GeoJsonType::FeatureCollection,
		}
	}

	#[must_use]
	pub fn bbox(&self) -> Option<&BoundingBox> {
		match self {
			GeoJson::Geometry(geometry) => geometry.bbox(),
			GeoJson::Feature(feature) => feature.bbox(),
			GeoJson::FeatureCollection(collection) => collection.bbox(),
		}
	}

	#[must_use]
	pub fn compute_bbox(&self) -> Option<BoundingBox> {
		match self {
			GeoJson::Geometry(geometry) => geometry.compute_bbox(),
			GeoJson::Feature(feature) => feature.compute_bbox(),
			GeoJson::FeatureCollection(collection) => collection.compute_bbox(),
		}
	}
}

impl GeoJsonObject for GeoJson {
	fn read_geojson(iter: &mut ByteIterator, shifter: &dyn CoordinateShifter) -> Result<Self> {
		let raw = RawObject::scan(iter)?;
		Ok(match raw.kind()? {
			GeoJsonType::Feature => GeoJson::Feature(feature_from_raw(&raw, shifter)?),
			GeoJsonType::FeatureCollection => GeoJson::FeatureCollection(feature_collection_from_raw(&raw, shifter)?),
			kind => GeoJson::Geometry(geometry_from_raw(&raw, kind, shifter)?),
		})
	}

	fn write_geojson(&self, writer: &mut JsonWriter, shifter: &dyn CoordinateShifter) {
		match self {
			GeoJson::Geometry(geometry) => write_geometry(geometry, writer, shifter),
			GeoJson::Feature(feature) => write_feature(feature, writer, shifter),
			GeoJson::FeatureCollection(collection) => write_feature_collection(collection, writer, shifter),
		}
	}
}

impl From<Geometry> for GeoJson {
	fn from(geometry: Geometry) -> Self {
		GeoJson::Geometry(geometry)
	}
}

impl From<GeoFeature> for GeoJson {
	fn from(feature: GeoFeature) -> Self {
		GeoJson::Feature(feature)
	}
}

impl From<GeoFeatureCollection> for GeoJson {
	fn from(collection: GeoFeatureCollection) -> Self {
		GeoJson::FeatureCollection(collection)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CompositeGeometryTrait, FeatureId, GeoJsonError, Position};
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case::point(r#"{"type":"Point","coordinates":[100,0]}"#)]
	#[case::point_3d(r#"{"type":"Point","coordinates":[100,0,-12.5]}"#)]
	#[case::multi_point(r#"{"type":"MultiPoint","coordinates":[[100,0],[101,1]]}"#)]
	#[case::line_string(r#"{"type":"LineString","bbox":[100,0,101,1],"coordinates":[[100,0],[101,1]]}"#)]
	#[case::multi_line_string(r#"{"type":"MultiLineString","coordinates":[[[100,0],[101,1]],[[102,2],[103,3]]]}"#)]
	#[case::polygon_with_hole(
		r#"{"type":"Polygon","coordinates":[[[100,0],[101,0],[101,1],[100,1],[100,0]],[[100.8,0.8],[100.8,0.2],[100.2,0.2],[100.2,0.8],[100.8,0.8]]]}"#
	)]
	#[case::multi_polygon(
		r#"{"type":"MultiPolygon","coordinates":[[[[102,2],[103,2],[103,3],[102,3],[102,2]]],[[[100,0],[101,0],[101,1],[100,1],[100,0]]]]}"#
	)]
	#[case::geometry_collection(
		r#"{"type":"GeometryCollection","bbox":[-1,-2,3,4],"geometries":[{"type":"Point","coordinates":[100,0]},{"type":"GeometryCollection","geometries":[]}]}"#
	)]
	#[case::feature(
		r#"{"type":"Feature","id":"f-1","geometry":{"type":"Point","coordinates":[102,0.5]},"properties":{"prop0":"value0","nested":{"list":[1,true,null]}}}"#
	)]
	#[case::feature_numeric_id(r#"{"type":"Feature","id":17,"geometry":null,"properties":{}}"#)]
	#[case::feature_collection(
		r#"{"type":"FeatureCollection","bbox":[100,0,105,1],"features":[{"type":"Feature","geometry":{"type":"LineString","coordinates":[[102,0],[103,1],[104,0],[105,1]]},"properties":{"prop1":0}}]}"#
	)]
	fn test_round_trip(#[case] json: &str) {
		let value = GeoJson::from_json(json).unwrap();
		assert_eq!(value.to_json().unwrap(), json);
		assert_eq!(GeoJson::from_json(&value.to_json().unwrap()).unwrap(), value);
	}

	#[test]
	fn test_polygon_rings() {
		let polygon =
			PolygonGeometry::from_json(r#"{"type":"Polygon","coordinates":[[[100,0],[101,0],[101,1],[100,1],[100,0]]]}"#)
				.unwrap();
		assert_eq!(polygon.outer().map(|ring| ring.len()), Some(5));
		assert!(polygon.inner().is_empty());
		assert!(polygon.bbox().is_none());
	}

	#[test]
	fn test_typed_entry_points() {
		let json = r#"{"type":"LineString","coordinates":[[0,0],[1,1]]}"#;
		assert!(LineStringGeometry::from_json(json).is_ok());
		assert!(Geometry::from_json(json).is_ok());
		assert_eq!(
			PointGeometry::from_json(json),
			Err(GeoJsonError::TypeMismatch {
				expected: "Point",
				found: "LineString".to_string()
			})
		);
		assert!(matches!(
			GeoFeature::from_json(json),
			Err(GeoJsonError::TypeMismatch { expected: "Feature", .. })
		));
		assert_eq!(
			Geometry::from_json(r#"{"type":"FeatureCollection","features":[]}"#),
			Err(GeoJsonError::UnknownDiscriminator("FeatureCollection".to_string()))
		);
	}

	#[test]
	fn test_line_string_needs_two_positions() {
		assert!(matches!(
			LineStringGeometry::from_json(r#"{"type":"LineString","coordinates":[[0,0]]}"#),
			Err(GeoJsonError::InvalidGeometry {
				kind: "LineString",
				..
			})
		));
	}

	#[test]
	fn test_bad_feature_aborts_collection() {
		let json = r#"{"type":"FeatureCollection","features":[
			{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"properties":{}},
			{"type":"Point","coordinates":[1,2]}
		]}"#;
		assert_eq!(
			GeoFeatureCollection::from_json(json),
			Err(GeoJsonError::UnknownDiscriminator("Point".to_string()))
		);
	}

	#[test]
	fn test_invalid_json() {
		assert!(matches!(
			GeoJson::from_json(r#"{"type":"Point","coordinates":[1,2]"#),
			Err(GeoJsonError::MalformedDocument(_))
		));
		assert!(matches!(
			GeoJson::from_json(r#"{"type":"Point","coordinates":[1,2]} x"#),
			Err(GeoJsonError::MalformedDocument(_))
		));
	}

	#[test]
	fn test_geojson_dispatch() {
		let feature = GeoJson::from_json(r#"{"type":"Feature","id":3,"geometry":null}"#).unwrap();
		assert_eq!(feature.kind(), GeoJsonType::Feature);
		let GeoJson::Feature(feature) = feature else {
			panic!("expected a Feature");
		};
		assert_eq!(feature.id(), Some(&FeatureId::Number(3.0)));
		assert!(feature.geometry().is_none());

		let point = GeoJson::from(Geometry::from(PointGeometry::new(Position::new(1.0, 2.0))));
		assert_eq!(point.kind(), GeoJsonType::Point);
		assert_eq!(point.to_json().unwrap(), r#"{"type":"Point","coordinates":[1,2]}"#);
	}
}
