//! Coordinate payloads of the six coordinate-bearing geometry types.
//!
//! One reader and one writer cover every nesting depth: [`CoordinatePayload`] is implemented for
//! [`Position`] and recursively for `Vec<T>`, so `Vec<Vec<Position>>` reads exactly the arrays a
//! polygon needs and reports anything nested deeper or shallower as a shape mismatch.

use crate::{BoundingBox, CoordinateShifter, GeoJsonError, GeoResult, GeometryTrait, Position, PositionTree};
use anyhow::Result;
use geokern_core::{
	byte_iterator::{ByteIterator, expect_end, parse_array_entries, parse_number_as, parse_tag},
	json::JsonWriter,
};

pub trait CoordinatePayload: PositionTree + Sized {
	/// Reads the payload and passes every position through `shifter`.
	fn read(iter: &mut ByteIterator, shifter: &dyn CoordinateShifter) -> Result<Self>;

	/// Writes the payload, passing every position through `shifter.unshift`.
	fn write(&self, writer: &mut JsonWriter, shifter: &dyn CoordinateShifter);
}

fn shape_error(iter: &ByteIterator, reason: &str) -> anyhow::Error {
	GeoJsonError::shape(format!("{reason} at position {}", iter.position())).into()
}

// The payload of a depth `n` type must start with an array.
fn expect_array(iter: &mut ByteIterator, depth: usize) -> Result<()> {
	iter.skip_whitespace();
	if iter.peek() == Some(b'[') {
		Ok(())
	} else {
		Err(shape_error(
			iter,
			&format!("coordinates are nested less deeply than expected, a depth of {depth} is required"),
		))
	}
}

impl CoordinatePayload for Position {
	fn read(iter: &mut ByteIterator, shifter: &dyn CoordinateShifter) -> Result<Self> {
		expect_array(iter, Self::DEPTH)?;
		let ordinates = parse_array_entries(iter, |iter2| {
			if iter2.peek() == Some(b'[') {
				return Err(shape_error(iter2, "coordinates are nested deeper than expected"));
			}
			parse_number_as::<f64>(iter2)
		})?;
		let position = Position::from_slice(&ordinates)?;
		Ok(shifter.shift(&position))
	}

	fn write(&self, writer: &mut JsonWriter, shifter: &dyn CoordinateShifter) {
		writer.begin_array();
		for value in shifter.unshift(self).to_vec() {
			writer.number(value);
		}
		writer.end_array();
	}
}

impl<T: CoordinatePayload> CoordinatePayload for Vec<T> {
	fn read(iter: &mut ByteIterator, shifter: &dyn CoordinateShifter) -> Result<Self> {
		expect_array(iter, Self::DEPTH)?;
		parse_array_entries(iter, |iter2| T::read(iter2, shifter))
	}

	fn write(&self, writer: &mut JsonWriter, shifter: &dyn CoordinateShifter) {
		writer.begin_array();
		for item in self {
			item.write(writer, shifter);
		}
		writer.end_array();
	}
}

/// A geometry that is fully described by one coordinate payload plus an optional bbox.
pub trait CoordinateGeometry: GeometryTrait {
	type Payload: CoordinatePayload;

	/// Builds the geometry from a parsed payload, applying the type's construction checks.
	fn from_payload(payload: Self::Payload, bbox: Option<BoundingBox>) -> GeoResult<Self>;

	fn payload(&self) -> &Self::Payload;
}

/// Reads a `bbox` member. `null` is accepted as "no bbox".
pub(crate) fn read_bbox(iter: &mut ByteIterator) -> Result<Option<BoundingBox>> {
	iter.skip_whitespace();
	if iter.peek() == Some(b'n') {
		parse_tag(iter, "null")?;
		return Ok(None);
	}
	let values = parse_array_entries(iter, |iter2| {
		if iter2.peek() == Some(b'[') {
			return Err(shape_error(iter2, "a bbox must be a flat array of numbers"));
		}
		parse_number_as::<f64>(iter2)
	})?;
	Ok(Some(BoundingBox::from_slice(&values)?))
}

/// Writes the `bbox` member, if there is one. Bounding boxes are not passed through the shifter.
pub(crate) fn write_bbox(writer: &mut JsonWriter, bbox: Option<&BoundingBox>) {
	if let Some(bbox) = bbox {
		writer.key("bbox").begin_array();
		for value in bbox.to_vec() {
			writer.number(value);
		}
		writer.end_array();
	}
}

impl BoundingBox {
	/// Parses the GeoJSON layout of a bbox, e.g. `[-10, -20, 10, 20]`.
	pub fn from_json(json: &str) -> GeoResult<Self> {
		let mut iter = ByteIterator::from_text(json);
		let bbox = read_bbox(&mut iter).and_then(|bbox| expect_end(&mut iter).map(|()| bbox))?;
		bbox.ok_or_else(|| GeoJsonError::malformed("a bbox must not be null"))
	}

	pub fn to_json(&self) -> GeoResult<String> {
		let mut writer = JsonWriter::compact();
		writer.begin_array();
		for value in self.to_vec() {
			writer.number(value);
		}
		writer.end_array();
		super::codec::finish(writer)
	}
}
