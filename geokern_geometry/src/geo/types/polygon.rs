use super::{MultiPolygonGeometry, SingleGeometryTrait};
use crate::{BoundingBox, CoordinateGeometry, GeoResult, LineStringGeometry, Position, RingViolation};

/// A surface given by an outer ring followed by zero or more holes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PolygonGeometry {
	pub(crate) coordinates: Vec<Vec<Position>>,
	pub(crate) bbox: Option<BoundingBox>,
}

/// Checks the linear ring rule: 4 or more positions, first equal to last.
pub fn check_linear_ring(ring: &[Position]) -> Result<(), RingViolation> {
	if ring.len() < 4 {
		return Err(RingViolation::TooFewPositions { count: ring.len() });
	}
	if ring.first() != ring.last() {
		return Err(RingViolation::NotClosed);
	}
	Ok(())
}

impl PolygonGeometry {
	/// Builds a polygon from raw rings. The rings are stored as given, without the linear ring
	/// check that [`from_outer_inner`](Self::from_outer_inner) applies.
	#[must_use]
	pub fn from_lng_lats(rings: Vec<Vec<Position>>) -> Self {
		PolygonGeometry {
			coordinates: rings,
			bbox: None,
		}
	}

	/// Builds a polygon from an outer ring and holes, each of which must be a linear ring.
	pub fn from_outer_inner(outer: &LineStringGeometry, inner: &[LineStringGeometry]) -> GeoResult<Self> {
		let mut rings = Vec::with_capacity(inner.len() + 1);
		for ring in std::iter::once(outer).chain(inner) {
			check_linear_ring(ring.coordinates())?;
			rings.push(ring.coordinates().to_vec());
		}
		Ok(Self::from_lng_lats(rings))
	}

	#[must_use]
	pub fn coordinates(&self) -> &[Vec<Position>] {
		&self.coordinates
	}

	/// The first ring, or `None` for a polygon without rings.
	#[must_use]
	pub fn outer(&self) -> Option<LineStringGeometry> {
		self.coordinates.first().map(|ring| LineStringGeometry {
			coordinates: ring.clone(),
			bbox: None,
		})
	}

	/// All rings after the first one.
	#[must_use]
	pub fn inner(&self) -> Vec<LineStringGeometry> {
		self
			.coordinates
			.iter()
			.skip(1)
			.map(|ring| LineStringGeometry {
				coordinates: ring.clone(),
				bbox: None,
			})
			.collect()
	}
}

crate::impl_geometry_trait!(PolygonGeometry => Polygon);
crate::impl_composite_geometry!(PolygonGeometry => Vec<Position>);

impl CoordinateGeometry for PolygonGeometry {
	type Payload = Vec<Vec<Position>>;

	fn from_payload(coordinates: Vec<Vec<Position>>, bbox: Option<BoundingBox>) -> GeoResult<Self> {
		Ok(PolygonGeometry { coordinates, bbox })
	}

	fn payload(&self) -> &Vec<Vec<Position>> {
		&self.coordinates
	}
}

impl SingleGeometryTrait<MultiPolygonGeometry> for PolygonGeometry {
	fn into_multi(self) -> MultiPolygonGeometry {
		MultiPolygonGeometry {
			coordinates: vec![self.coordinates],
			bbox: self.bbox,
		}
	}
}
