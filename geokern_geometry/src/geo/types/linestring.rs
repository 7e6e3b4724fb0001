use super::{MultiLineStringGeometry, SingleGeometryTrait};
use crate::{
	BoundingBox, CoordinateGeometry, CoordinateShifter, GeoJsonError, GeoResult, MultiPointGeometry, Position, polyline,
};

/// A connected sequence of at least two positions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LineStringGeometry {
	pub(crate) coordinates: Vec<Position>,
	pub(crate) bbox: Option<BoundingBox>,
}

pub(crate) fn check_line_positions(positions: &[Position]) -> GeoResult<()> {
	if positions.len() < 2 {
		return Err(GeoJsonError::InvalidGeometry {
			kind: "LineString",
			reason: format!("needs at least 2 positions, found {}", positions.len()),
		});
	}
	Ok(())
}

impl LineStringGeometry {
	pub fn from_lng_lats(positions: Vec<Position>) -> GeoResult<Self> {
		check_line_positions(&positions)?;
		Ok(LineStringGeometry {
			coordinates: positions,
			bbox: None,
		})
	}

	pub fn from_lng_lats_shifted(positions: &[Position], shifter: &dyn CoordinateShifter) -> GeoResult<Self> {
		Self::from_lng_lats(positions.iter().map(|p| shifter.shift(p)).collect())
	}

	/// Connects the positions of a multi-point, in order.
	pub fn from_multi_point(multi_point: &MultiPointGeometry) -> GeoResult<Self> {
		Self::from_lng_lats(multi_point.coordinates().to_vec())
	}

	/// Decodes an encoded polyline. `precision` must match the one used for encoding.
	pub fn from_polyline(encoded: &str, precision: u8) -> GeoResult<Self> {
		Self::from_lng_lats(polyline::decode(encoded, precision)?)
	}

	/// Encodes the positions as a polyline. Altitudes are dropped.
	pub fn to_polyline(&self, precision: u8) -> GeoResult<String> {
		polyline::encode(&self.coordinates, precision)
	}

	#[must_use]
	pub fn coordinates(&self) -> &[Position] {
		&self.coordinates
	}

	/// `true` if the first and last positions are equal.
	#[must_use]
	pub fn is_closed(&self) -> bool {
		self.coordinates.first() == self.coordinates.last()
	}
}

crate::impl_geometry_trait!(LineStringGeometry => LineString);
crate::impl_composite_geometry!(LineStringGeometry => Position);

impl CoordinateGeometry for LineStringGeometry {
	type Payload = Vec<Position>;

	fn from_payload(coordinates: Vec<Position>, bbox: Option<BoundingBox>) -> GeoResult<Self> {
		check_line_positions(&coordinates)?;
		Ok(LineStringGeometry { coordinates, bbox })
	}

	fn payload(&self) -> &Vec<Position> {
		&self.coordinates
	}
}

impl SingleGeometryTrait<MultiLineStringGeometry> for LineStringGeometry {
	fn into_multi(self) -> MultiLineStringGeometry {
		MultiLineStringGeometry {
			coordinates: vec![self.coordinates],
			bbox: self.bbox,
		}
	}
}

impl<T> TryFrom<Vec<T>> for LineStringGeometry
where
	Position: From<T>,
{
	type Error = GeoJsonError;

	fn try_from(value: Vec<T>) -> GeoResult<Self> {
		Self::from_lng_lats(value.into_iter().map(Position::from).collect())
	}
}
