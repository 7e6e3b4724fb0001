use super::Position;
use crate::{GeoJsonError, GeoResult};

/// An axis-aligned extent given by its southwest and northeast corners.
///
/// The corners are not reordered or checked against each other: a box whose west edge lies east
/// of its east edge is a valid antimeridian-crossing box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundingBox {
	southwest: Position,
	northeast: Position,
}

impl BoundingBox {
	#[must_use]
	pub fn new(southwest: Position, northeast: Position) -> Self {
		BoundingBox { southwest, northeast }
	}

	#[must_use]
	pub fn from_lng_lats(west: f64, south: f64, east: f64, north: f64) -> Self {
		Self::new(Position::new(west, south), Position::new(east, north))
	}

	#[must_use]
	pub fn from_lng_lats_alt(
		west: f64,
		south: f64,
		southwest_altitude: f64,
		east: f64,
		north: f64,
		northeast_altitude: f64,
	) -> Self {
		Self::new(
			Position::with_altitude(west, south, southwest_altitude),
			Position::with_altitude(east, north, northeast_altitude),
		)
	}

	/// Reads the GeoJSON layout: an even number of values, the first half is the southwest
	/// corner and the second half the northeast corner.
	pub fn from_slice(values: &[f64]) -> GeoResult<Self> {
		if values.len() < 4 || values.len() % 2 != 0 {
			return Err(GeoJsonError::shape(format!(
				"a bbox needs an even number of at least 4 values, found {}",
				values.len()
			)));
		}
		let (southwest, northeast) = values.split_at(values.len() / 2);
		Ok(Self::new(Position::from_slice(southwest)?, Position::from_slice(northeast)?))
	}

	/// The GeoJSON layout. Altitudes are written only when both corners have one.
	#[must_use]
	pub fn to_vec(&self) -> Vec<f64> {
		let (sw, ne) = (&self.southwest, &self.northeast);
		if sw.has_altitude() && ne.has_altitude() {
			vec![
				sw.longitude(),
				sw.latitude(),
				sw.altitude(),
				ne.longitude(),
				ne.latitude(),
				ne.altitude(),
			]
		} else {
			vec![sw.longitude(), sw.latitude(), ne.longitude(), ne.latitude()]
		}
	}

	#[must_use]
	pub fn southwest(&self) -> &Position {
		&self.southwest
	}

	#[must_use]
	pub fn northeast(&self) -> &Position {
		&self.northeast
	}

	#[must_use]
	pub fn west(&self) -> f64 {
		self.southwest.longitude()
	}

	#[must_use]
	pub fn south(&self) -> f64 {
		self.southwest.latitude()
	}

	#[must_use]
	pub fn east(&self) -> f64 {
		self.northeast.longitude()
	}

	#[must_use]
	pub fn north(&self) -> f64 {
		self.northeast.latitude()
	}

	/// Grows the box so that it also covers `other`. Used to fold extents together.
	#[must_use]
	pub fn union(&self, other: &BoundingBox) -> BoundingBox {
		let altitudes = self.southwest.has_altitude()
			&& self.northeast.has_altitude()
			&& other.southwest.has_altitude()
			&& other.northeast.has_altitude();
		let west = self.west().min(other.west());
		let south = self.south().min(other.south());
		let east = self.east().max(other.east());
		let north = self.north().max(other.north());
		if altitudes {
			Self::from_lng_lats_alt(
				west,
				south,
				self.southwest.altitude().min(other.southwest.altitude()),
				east,
				north,
				self.northeast.altitude().max(other.northeast.altitude()),
			)
		} else {
			Self::from_lng_lats(west, south, east, north)
		}
	}
}
