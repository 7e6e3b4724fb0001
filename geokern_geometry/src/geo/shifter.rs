//! Strategies that transform raw longitude/latitude input before it is stored.
//!
//! A shifter is handed to the `*_shifted` constructors or carried by a
//! [`GeoJsonCodec`](crate::GeoJsonCodec). Geometries keep the shifted values; swapping the
//! strategy later does not touch geometries that already exist.

use super::Position;
use std::fmt::Debug;

pub trait CoordinateShifter: Debug + Send + Sync {
	fn shift_lon_lat(&self, longitude: f64, latitude: f64) -> Position;

	fn shift_lon_lat_alt(&self, longitude: f64, latitude: f64, altitude: f64) -> Position;

	/// The inverse transformation, applied when writing a position back out.
	fn unshift(&self, position: &Position) -> Position;

	fn shift(&self, position: &Position) -> Position {
		if position.has_altitude() {
			self.shift_lon_lat_alt(position.longitude(), position.latitude(), position.altitude())
		} else {
			self.shift_lon_lat(position.longitude(), position.latitude())
		}
	}
}

/// Stores coordinates unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityShifter;

impl CoordinateShifter for IdentityShifter {
	fn shift_lon_lat(&self, longitude: f64, latitude: f64) -> Position {
		Position::new(longitude, latitude)
	}

	fn shift_lon_lat_alt(&self, longitude: f64, latitude: f64, altitude: f64) -> Position {
		Position::with_altitude(longitude, latitude, altitude)
	}

	fn unshift(&self, position: &Position) -> Position {
		*position
	}
}

/// Rounds every ordinate to a fixed number of decimal digits.
///
/// Rounding is not reversible, so `unshift` returns the stored (rounded) values.
#[derive(Clone, Copy, Debug)]
pub struct PrecisionShifter {
	precision: u8,
	factor: f64,
}

impl PrecisionShifter {
	#[must_use]
	pub fn new(precision: u8) -> Self {
		PrecisionShifter {
			precision,
			factor: 10f64.powi(i32::from(precision)),
		}
	}

	#[must_use]
	pub fn precision(&self) -> u8 {
		self.precision
	}

	fn round(&self, value: f64) -> f64 {
		(value * self.factor).round() / self.factor
	}
}

impl CoordinateShifter for PrecisionShifter {
	fn shift_lon_lat(&self, longitude: f64, latitude: f64) -> Position {
		Position::new(self.round(longitude), self.round(latitude))
	}

	fn shift_lon_lat_alt(&self, longitude: f64, latitude: f64, altitude: f64) -> Position {
		Position::with_altitude(self.round(longitude), self.round(latitude), self.round(altitude))
	}

	fn unshift(&self, position: &Position) -> Position {
		*position
	}
}
