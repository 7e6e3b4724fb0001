use super::*;

/// Any of the seven geometry types.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Geometry {
	Point(PointGeometry),
	MultiPoint(MultiPointGeometry),
	LineString(LineStringGeometry),
	MultiLineString(MultiLineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(GeometryCollection),
}

macro_rules! dispatch {
	($self:expr, $g:ident => $body:expr) => {
		match $self {
			Geometry::Point($g) => $body,
			Geometry::MultiPoint($g) => $body,
			Geometry::LineString($g) => $body,
			Geometry::MultiLineString($g) => $body,
			Geometry::Polygon($g) => $body,
			Geometry::MultiPolygon($g) => $body,
			Geometry::GeometryCollection($g) => $body,
		}
	};
}

impl Geometry {
	#[must_use]
	pub fn kind(&self) -> GeoJsonType {
		match self {
			Geometry::Point(_) => GeoJsonType::Point,
			Geometry::MultiPoint(_) => GeoJsonType::MultiPoint,
			Geometry::LineString(_) => GeoJsonType::LineString,
			Geometry::MultiLineString(_) => GeoJsonType::MultiLineString,
			Geometry::Polygon(_) => GeoJsonType::Polygon,
			Geometry::MultiPolygon(_) => GeoJsonType::MultiPolygon,
			Geometry::GeometryCollection(_) => GeoJsonType::GeometryCollection,
		}
	}

	#[must_use]
	pub fn type_name(&self) -> &'static str {
		self.kind().as_str()
	}

	#[must_use]
	pub fn bbox(&self) -> Option<&BoundingBox> {
		dispatch!(self, g => g.bbox())
	}

	#[must_use]
	pub fn with_bbox(self, bbox: Option<BoundingBox>) -> Self {
		dispatch!(self, g => Geometry::from(g.with_bbox(bbox)))
	}

	pub fn for_each_position(&self, f: &mut dyn FnMut(&Position)) {
		dispatch!(self, g => g.for_each_position(f))
	}

	#[must_use]
	pub fn compute_bbox(&self) -> Option<BoundingBox> {
		dispatch!(self, g => g.compute_bbox())
	}

	/// Wraps single geometries into their multi counterpart. Others are returned unchanged.
	#[must_use]
	pub fn into_multi(self) -> Self {
		match self {
			Geometry::Point(g) => Geometry::MultiPoint(g.into_multi()),
			Geometry::LineString(g) => Geometry::MultiLineString(g.into_multi()),
			Geometry::Polygon(g) => Geometry::MultiPolygon(g.into_multi()),
			other => other,
		}
	}
}

macro_rules! impl_from_variant {
	($($variant:ident($t:ty)),* $(,)?) => {$(
		impl From<$t> for Geometry {
			fn from(geometry: $t) -> Self {
				Geometry::$variant(geometry)
			}
		}
	)*}
}

impl_from_variant!(
	Point(PointGeometry),
	MultiPoint(MultiPointGeometry),
	LineString(LineStringGeometry),
	MultiLineString(MultiLineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(GeometryCollection),
);
