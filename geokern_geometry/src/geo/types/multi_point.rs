use crate::{BoundingBox, CoordinateGeometry, CoordinateShifter, GeoResult, PointGeometry, Position};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MultiPointGeometry {
	pub(crate) coordinates: Vec<Position>,
	pub(crate) bbox: Option<BoundingBox>,
}

impl MultiPointGeometry {
	#[must_use]
	pub fn from_lng_lats(positions: Vec<Position>) -> Self {
		MultiPointGeometry {
			coordinates: positions,
			bbox: None,
		}
	}

	#[must_use]
	pub fn from_lng_lats_shifted(positions: &[Position], shifter: &dyn CoordinateShifter) -> Self {
		Self::from_lng_lats(positions.iter().map(|p| shifter.shift(p)).collect())
	}

	#[must_use]
	pub fn coordinates(&self) -> &[Position] {
		&self.coordinates
	}

	/// The positions as individual points.
	#[must_use]
	pub fn points(&self) -> Vec<PointGeometry> {
		self.coordinates.iter().copied().map(PointGeometry::new).collect()
	}
}

crate::impl_geometry_trait!(MultiPointGeometry => MultiPoint);
crate::impl_composite_geometry!(MultiPointGeometry => Position);

impl CoordinateGeometry for MultiPointGeometry {
	type Payload = Vec<Position>;

	fn from_payload(coordinates: Vec<Position>, bbox: Option<BoundingBox>) -> GeoResult<Self> {
		Ok(MultiPointGeometry { coordinates, bbox })
	}

	fn payload(&self) -> &Vec<Position> {
		&self.coordinates
	}
}

impl<T> From<Vec<T>> for MultiPointGeometry
where
	Position: From<T>,
{
	fn from(value: Vec<T>) -> Self {
		Self::from_lng_lats(value.into_iter().map(Position::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CompositeGeometryTrait, GeometryTrait};

	#[test]
	fn test_empty_is_allowed() {
		let multi = MultiPointGeometry::from_lng_lats(vec![]);
		assert!(multi.is_empty());
		assert_eq!(multi.compute_bbox(), None);
	}

	#[test]
	fn test_points() {
		let multi = MultiPointGeometry::from(vec![[100.0, 0.0], [101.0, 1.0]]);
		assert_eq!(multi.len(), 2);
		assert_eq!(multi.points()[1], PointGeometry::from_lng_lat(101.0, 1.0));
		assert_eq!(multi.compute_bbox(), Some(BoundingBox::from_lng_lats(100.0, 0.0, 101.0, 1.0)));
	}
}
