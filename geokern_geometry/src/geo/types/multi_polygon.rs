use crate::{BoundingBox, CoordinateGeometry, GeoResult, PolygonGeometry, Position};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MultiPolygonGeometry {
	pub(crate) coordinates: Vec<Vec<Vec<Position>>>,
	pub(crate) bbox: Option<BoundingBox>,
}

impl MultiPolygonGeometry {
	#[must_use]
	pub fn from_lng_lats(polygons: Vec<Vec<Vec<Position>>>) -> Self {
		MultiPolygonGeometry {
			coordinates: polygons,
			bbox: None,
		}
	}

	#[must_use]
	pub fn from_polygons(polygons: Vec<PolygonGeometry>) -> Self {
		Self::from_lng_lats(polygons.into_iter().map(|polygon| polygon.coordinates).collect())
	}

	#[must_use]
	pub fn from_polygon(polygon: PolygonGeometry) -> Self {
		Self::from_polygons(vec![polygon])
	}

	#[must_use]
	pub fn coordinates(&self) -> &[Vec<Vec<Position>>] {
		&self.coordinates
	}

	/// The member polygons, built fresh on each call.
	#[must_use]
	pub fn polygons(&self) -> Vec<PolygonGeometry> {
		self
			.coordinates
			.iter()
			.map(|rings| PolygonGeometry::from_lng_lats(rings.clone()))
			.collect()
	}
}

crate::impl_geometry_trait!(MultiPolygonGeometry => MultiPolygon);
crate::impl_composite_geometry!(MultiPolygonGeometry => Vec<Vec<Position>>);

impl CoordinateGeometry for MultiPolygonGeometry {
	type Payload = Vec<Vec<Vec<Position>>>;

	fn from_payload(coordinates: Vec<Vec<Vec<Position>>>, bbox: Option<BoundingBox>) -> GeoResult<Self> {
		Ok(MultiPolygonGeometry { coordinates, bbox })
	}

	fn payload(&self) -> &Vec<Vec<Vec<Position>>> {
		&self.coordinates
	}
}
