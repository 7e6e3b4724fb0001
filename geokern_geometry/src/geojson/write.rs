//! Writing GeoJSON objects with a fixed member order: `type`, then `id` for features, then
//! `bbox` if present, then the payload.

use super::coordinates::{CoordinateGeometry, CoordinatePayload, write_bbox};
use crate::{
	CoordinateShifter, FeatureId, GeoFeature, GeoFeatureCollection, Geometry, GeometryCollection, GeometryTrait,
};
use geokern_core::json::JsonWriter;

pub(crate) fn write_coordinate_geometry<G: CoordinateGeometry>(
	geometry: &G,
	writer: &mut JsonWriter,
	shifter: &dyn CoordinateShifter,
) {
	writer.begin_object().key("type").string(G::TYPE.as_str());
	write_bbox(writer, geometry.bbox());
	writer.key("coordinates");
	geometry.payload().write(writer, shifter);
	writer.end_object();
}

pub(crate) fn write_geometry_collection(
	collection: &GeometryCollection,
	writer: &mut JsonWriter,
	shifter: &dyn CoordinateShifter,
) {
	writer.begin_object().key("type").string("GeometryCollection");
	write_bbox(writer, collection.bbox());
	writer.key("geometries").begin_array();
	for geometry in collection.geometries() {
		write_geometry(geometry, writer, shifter);
	}
	writer.end_array().end_object();
}

pub(crate) fn write_geometry(geometry: &Geometry, writer: &mut JsonWriter, shifter: &dyn CoordinateShifter) {
	match geometry {
		Geometry::Point(g) => write_coordinate_geometry(g, writer, shifter),
		Geometry::MultiPoint(g) => write_coordinate_geometry(g, writer, shifter),
		Geometry::LineString(g) => write_coordinate_geometry(g, writer, shifter),
		Geometry::MultiLineString(g) => write_coordinate_geometry(g, writer, shifter),
		Geometry::Polygon(g) => write_coordinate_geometry(g, writer, shifter),
		Geometry::MultiPolygon(g) => write_coordinate_geometry(g, writer, shifter),
		Geometry::GeometryCollection(g) => write_geometry_collection(g, writer, shifter),
	}
}

pub(crate) fn write_feature(feature: &GeoFeature, writer: &mut JsonWriter, shifter: &dyn CoordinateShifter) {
	writer.begin_object().key("type").string("Feature");
	match feature.id() {
		Some(FeatureId::String(id)) => _ = writer.key("id").string(id),
		Some(FeatureId::Number(id)) => _ = writer.key("id").number(*id),
		None => {}
	}
	write_bbox(writer, feature.bbox());

	writer.key("geometry");
	match feature.geometry() {
		Some(geometry) => write_geometry(geometry, writer, shifter),
		None => _ = writer.null(),
	}

	writer.key("properties").begin_object();
	for (key, value) in feature.properties() {
		writer.key(key).value(value);
	}
	writer.end_object().end_object();
}

pub(crate) fn write_feature_collection(
	collection: &GeoFeatureCollection,
	writer: &mut JsonWriter,
	shifter: &dyn CoordinateShifter,
) {
	writer.begin_object().key("type").string("FeatureCollection");
	write_bbox(writer, collection.bbox());
	writer.key("features").begin_array();
	for feature in collection.features() {
		write_feature(feature, writer, shifter);
	}
	writer.end_array().end_object();
}
