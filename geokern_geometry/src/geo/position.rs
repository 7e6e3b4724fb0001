use crate::{GeoJsonError, GeoResult};
use std::{
	fmt::Debug,
	hash::{Hash, Hasher},
};

/// A longitude/latitude pair with an optional altitude.
///
/// A missing altitude is stored as `NaN`, so every position has the same arity.
/// Use [`has_altitude`](Self::has_altitude) to tell the two cases apart.
#[derive(Clone, Copy)]
pub struct Position([f64; 3]);

impl Position {
	#[must_use]
	pub fn new(longitude: f64, latitude: f64) -> Self {
		Position([longitude, latitude, f64::NAN])
	}

	#[must_use]
	pub fn with_altitude(longitude: f64, latitude: f64, altitude: f64) -> Self {
		Position([longitude, latitude, altitude])
	}

	/// Builds a position from 2 or 3 finite ordinates. Further ordinates are ignored.
	pub fn from_slice(ordinates: &[f64]) -> GeoResult<Self> {
		if let Some(value) = ordinates.iter().take(3).find(|value| !value.is_finite()) {
			return Err(GeoJsonError::NonFiniteNumber(value.to_string()));
		}
		match ordinates {
			[lon, lat] => Ok(Self::new(*lon, *lat)),
			[lon, lat, alt, ..] => Ok(Self::with_altitude(*lon, *lat, *alt)),
			_ => Err(GeoJsonError::shape(format!(
				"a position needs at least 2 ordinates, found {}",
				ordinates.len()
			))),
		}
	}

	#[must_use]
	pub fn longitude(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn latitude(&self) -> f64 {
		self.0[1]
	}

	/// The altitude, or `NaN` if there is none.
	#[must_use]
	pub fn altitude(&self) -> f64 {
		self.0[2]
	}

	#[must_use]
	pub fn has_altitude(&self) -> bool {
		!self.0[2].is_nan()
	}

	/// The ordinates as written to GeoJSON: 2 values, or 3 with an altitude.
	#[must_use]
	pub fn to_vec(&self) -> Vec<f64> {
		if self.has_altitude() {
			self.0.to_vec()
		} else {
			self.0[..2].to_vec()
		}
	}
}

fn ordinate_bits(value: f64) -> u64 {
	if value == 0.0 {
		0
	} else if value.is_nan() {
		f64::NAN.to_bits()
	} else {
		value.to_bits()
	}
}

impl PartialEq for Position {
	fn eq(&self, other: &Self) -> bool {
		self.0[0] == other.0[0]
			&& self.0[1] == other.0[1]
			&& (self.0[2] == other.0[2] || (self.0[2].is_nan() && other.0[2].is_nan()))
	}
}

impl Eq for Position {}

impl Hash for Position {
	fn hash<H: Hasher>(&self, state: &mut H) {
		for value in self.0 {
			ordinate_bits(value).hash(state);
		}
	}
}

impl Debug for Position {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.to_vec()).finish()
	}
}

impl From<[f64; 2]> for Position {
	fn from(value: [f64; 2]) -> Self {
		Position::new(value[0], value[1])
	}
}

impl From<[f64; 3]> for Position {
	fn from(value: [f64; 3]) -> Self {
		Position(value)
	}
}

impl From<(f64, f64)> for Position {
	fn from(value: (f64, f64)) -> Self {
		Position::new(value.0, value.1)
	}
}
