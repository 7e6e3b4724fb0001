use crate::GeoJsonError;
use std::{fmt::Display, str::FromStr};

/// The closed set of values the `type` member may take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeoJsonType {
	Point,
	MultiPoint,
	LineString,
	MultiLineString,
	Polygon,
	MultiPolygon,
	GeometryCollection,
	Feature,
	FeatureCollection,
}

impl GeoJsonType {
	pub const ALL: [GeoJsonType; 9] = [
		GeoJsonType::Point,
		GeoJsonType::MultiPoint,
		GeoJsonType::LineString,
		GeoJsonType::MultiLineString,
		GeoJsonType::Polygon,
		GeoJsonType::MultiPolygon,
		GeoJsonType::GeometryCollection,
		GeoJsonType::Feature,
		GeoJsonType::FeatureCollection,
	];

	#[must_use]
	pub fn as_str(&self) -> &'static str {
		use GeoJsonType::*;
		match self {
			Point => "Point",
			MultiPoint => "MultiPoint",
			LineString => "LineString",
			MultiLineString => "MultiLineString",
			Polygon => "Polygon",
			MultiPolygon => "MultiPolygon",
			GeometryCollection => "GeometryCollection",
			Feature => "Feature",
			FeatureCollection => "FeatureCollection",
		}
	}

	/// Nesting depth of the `coordinates` array, for types that have one.
	#[must_use]
	pub fn coordinate_depth(&self) -> Option<usize> {
		use GeoJsonType::*;
		match self {
			Point => Some(1),
			MultiPoint | LineString => Some(2),
			MultiLineString | Polygon => Some(3),
			MultiPolygon => Some(4),
			GeometryCollection | Feature | FeatureCollection => None,
		}
	}

	#[must_use]
	pub fn is_geometry(&self) -> bool {
		!matches!(self, GeoJsonType::Feature | GeoJsonType::FeatureCollection)
	}
}

impl FromStr for GeoJsonType {
	type Err = GeoJsonError;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		GeoJsonType::ALL
			.into_iter()
			.find(|t| t.as_str() == name)
			.ok_or_else(|| GeoJsonError::UnknownDiscriminator(name.to_string()))
	}
}

impl Display for GeoJsonType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
