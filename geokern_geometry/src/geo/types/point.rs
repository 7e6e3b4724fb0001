use super::{MultiPointGeometry, SingleGeometryTrait};
use crate::{BoundingBox, CoordinateGeometry, CoordinateShifter, GeoJsonError, GeoResult, Position};

/// A single position.
///
/// This is the simplest geometric type and the building block of the multi-point and line types.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointGeometry {
	pub(crate) coordinates: Position,
	pub(crate) bbox: Option<BoundingBox>,
}

impl PointGeometry {
	#[must_use]
	pub fn new(position: Position) -> Self {
		PointGeometry {
			coordinates: position,
			bbox: None,
		}
	}

	#[must_use]
	pub fn from_lng_lat(longitude: f64, latitude: f64) -> Self {
		Self::new(Position::new(longitude, latitude))
	}

	#[must_use]
	pub fn from_lng_lat_alt(longitude: f64, latitude: f64, altitude: f64) -> Self {
		Self::new(Position::with_altitude(longitude, latitude, altitude))
	}

	/// Passes the input through `shifter` and stores the shifted position.
	#[must_use]
	pub fn from_lng_lat_shifted(longitude: f64, latitude: f64, shifter: &dyn CoordinateShifter) -> Self {
		Self::new(shifter.shift_lon_lat(longitude, latitude))
	}

	/// Builds a point from 2 or 3 raw ordinates.
	pub fn from_coordinates(ordinates: &[f64]) -> GeoResult<Self> {
		if ordinates.len() < 2 {
			return Err(GeoJsonError::InvalidGeometry {
				kind: "Point",
				reason: format!("needs at least 2 ordinates, found {}", ordinates.len()),
			});
		}
		Position::from_slice(ordinates).map(Self::new)
	}

	#[must_use]
	pub fn coordinates(&self) -> &Position {
		&self.coordinates
	}

	#[must_use]
	pub fn longitude(&self) -> f64 {
		self.coordinates.longitude()
	}

	#[must_use]
	pub fn latitude(&self) -> f64 {
		self.coordinates.latitude()
	}

	/// The altitude, or `NaN` if the point has none.
	#[must_use]
	pub fn altitude(&self) -> f64 {
		self.coordinates.altitude()
	}

	#[must_use]
	pub fn has_altitude(&self) -> bool {
		self.coordinates.has_altitude()
	}
}

crate::impl_geometry_trait!(PointGeometry => Point);

impl CoordinateGeometry for PointGeometry {
	type Payload = Position;

	fn from_payload(coordinates: Position, bbox: Option<BoundingBox>) -> GeoResult<Self> {
		Ok(PointGeometry { coordinates, bbox })
	}

	fn payload(&self) -> &Position {
		&self.coordinates
	}
}

impl SingleGeometryTrait<MultiPointGeometry> for PointGeometry {
	fn into_multi(self) -> MultiPointGeometry {
		MultiPointGeometry {
			coordinates: vec![self.coordinates],
			bbox: self.bbox,
		}
	}
}

impl From<Position> for PointGeometry {
	fn from(position: Position) -> Self {
		Self::new(position)
	}
}
