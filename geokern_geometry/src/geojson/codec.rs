use super::{GeoJson, GeoJsonObject};
use crate::{CoordinateShifter, GeoJsonError, GeoResult, IdentityShifter};
use anyhow::{Context, Result};
use geokern_core::{
	byte_iterator::{ByteIterator, expect_end},
	json::JsonWriter,
};
use log::{debug, trace};
use std::{
	io::{BufRead, Read},
	sync::Arc,
};

/// Reads and writes GeoJSON with a configurable coordinate shifter and output layout.
///
/// The shifter is applied to every position that is read, and its inverse to every position
/// that is written. Bounding boxes are passed through unchanged.
///
/// ```
/// use geokern_geometry::{GeoJsonCodec, PointGeometry, PrecisionShifter};
/// use std::sync::Arc;
///
/// let codec = GeoJsonCodec::new(Arc::new(PrecisionShifter::new(2)));
/// let point: PointGeometry = codec.read_as(r#"{"type":"Point","coordinates":[1.23456,2.34567]}"#).unwrap();
/// assert_eq!(codec.write_string(&point).unwrap(), r#"{"type":"Point","coordinates":[1.23,2.35]}"#);
/// ```
#[derive(Clone, Debug)]
pub struct GeoJsonCodec {
	shifter: Arc<dyn CoordinateShifter>,
	pretty: bool,
}

impl Default for GeoJsonCodec {
	fn default() -> Self {
		Self::new(Arc::new(IdentityShifter))
	}
}

impl GeoJsonCodec {
	#[must_use]
	pub fn new(shifter: Arc<dyn CoordinateShifter>) -> Self {
		GeoJsonCodec { shifter, pretty: false }
	}

	/// Indent the output by two spaces per level.
	#[must_use]
	pub fn with_pretty(self, pretty: bool) -> Self {
		Self { pretty, ..self }
	}

	#[must_use]
	pub fn shifter(&self) -> &dyn CoordinateShifter {
		self.shifter.as_ref()
	}

	/// Reads any GeoJSON document.
	pub fn read_str(&self, json: &str) -> GeoResult<GeoJson> {
		let value: GeoJson = self.read_as(json)?;
		debug!("read {} from {} bytes", value.kind(), json.len());
		Ok(value)
	}

	/// Reads a document that must be of the type `T` stands for. Trailing content is an error.
	pub fn read_as<T: GeoJsonObject>(&self, json: &str) -> GeoResult<T> {
		trace!("reading {}", std::any::type_name::<T>());
		let mut iter = ByteIterator::from_text(json);
		T::read_geojson(&mut iter, self.shifter())
			.and_then(|value| expect_end(&mut iter).map(|()| value))
			.map_err(GeoJsonError::from)
	}

	/// Writes `value` as a GeoJSON string. Fails if any number is NaN or infinite, since JSON
	/// cannot represent it.
	pub fn write_string<T: GeoJsonObject>(&self, value: &T) -> GeoResult<String> {
		let mut writer = JsonWriter::new(self.pretty);
		value.write_geojson(&mut writer, self.shifter());
		finish(writer)
	}

	/// Reads one GeoJSON document from `reader`.
	pub fn read_reader(&self, mut reader: impl Read) -> Result<GeoJson> {
		let mut buffer = String::new();
		reader.read_to_string(&mut buffer).context("failed to read GeoJSON input")?;
		Ok(self.read_str(&buffer)?)
	}

	/// Reads newline-delimited GeoJSON, one document per line. Blank lines are skipped.
	///
	/// Every line is read independently, so an error only affects its own item. Errors name
	/// the line they occurred in.
	pub fn read_lines<R: BufRead>(self, reader: R) -> impl Iterator<Item = Result<GeoJson>> {
		reader.lines().enumerate().filter_map(move |(index, line)| {
			let line_number = index + 1;
			match line {
				Ok(line) if line.trim().is_empty() => None,
				Ok(line) => Some(
					self
						.read_str(&line)
						.with_context(|| format!("error in line {line_number}")),
				),
				Err(error) => Some(Err(error).with_context(|| format!("error in line {line_number}"))),
			}
		})
	}
}

pub(crate) fn finish(writer: JsonWriter) -> GeoResult<String> {
	match writer.non_finite() {
		Some(value) => Err(GeoJsonError::NonFiniteNumber(value.to_string())),
		None => Ok(writer.into_string()),
	}
}

/// Reads one GeoJSON document with the default codec.
pub fn read_geojson(reader: impl Read) -> Result<GeoJson> {
	GeoJsonCodec::default().read_reader(reader)
}

/// Reads newline-delimited GeoJSON with the default codec.
pub fn read_ndgeojson_iter(reader: impl BufRead) -> impl Iterator<Item = Result<GeoJson>> {
	GeoJsonCodec::default().read_lines(reader)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{GeoFeature, GeoJsonType, Geometry, PointGeometry, Position, PrecisionShifter};
	use pretty_assertions::assert_eq;
	use std::io::{BufReader, Cursor};

	#[test]
	fn test_read_geojson() -> Result<()> {
		let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{}}]}"#;
		let GeoJson::FeatureCollection(collection) = read_geojson(Cursor::new(json))? else {
			panic!("expected a FeatureCollection");
		};
		assert_eq!(collection.features().len(), 1);
		assert_eq!(collection.features()[0].geometry().map(Geometry::type_name), Some("Point"));
		Ok(())
	}

	#[test]
	fn test_read_ndgeojson_iter_with_empty_lines() {
		let json = r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,1]},"properties":{}}"#;
		let input = format!("{json}\n\n  \n{json}");
		let results: Vec<_> = read_ndgeojson_iter(BufReader::new(Cursor::new(input))).collect();
		assert_eq!(results.len(), 2);
		for result in results {
			assert_eq!(result.unwrap().kind(), GeoJsonType::Feature);
		}
	}

	#[test]
	fn test_read_ndgeojson_iter_reports_line() {
		let input = "{\"type\":\"Point\",\"coordinates\":[1,1]}\n{\"type\":\"Blob\"}\n{\"type\":\"Point\",\"coordinates\":[2,2]}\n";
		let results: Vec<_> = read_ndgeojson_iter(Cursor::new(input)).collect();
		assert_eq!(results.len(), 3);
		assert!(results[0].is_ok());
		assert!(results[2].is_ok());

		let error = results[1].as_ref().unwrap_err();
		assert_eq!(format!("{error:#}"), "error in line 2: unknown GeoJSON type 'Blob'");
		assert_eq!(
			error.downcast_ref::<GeoJsonError>(),
			Some(&GeoJsonError::UnknownDiscriminator("Blob".to_string()))
		);
	}

	#[test]
	fn test_shifter_on_read_not_on_bbox() {
		let codec = GeoJsonCodec::new(Arc::new(PrecisionShifter::new(1)));
		let value = codec
			.read_str(r#"{"type":"Point","bbox":[1.26,2.34,1.26,2.34],"coordinates":[1.26,2.34]}"#)
			.unwrap();
		assert_eq!(
			codec.write_string(&value).unwrap(),
			r#"{"type":"Point","bbox":[1.26,2.34,1.26,2.34],"coordinates":[1.3,2.3]}"#
		);
	}

	#[test]
	fn test_pretty() {
		let codec = GeoJsonCodec::default().with_pretty(true);
		let feature = GeoFeature::from_geometry(Some(Geometry::from(PointGeometry::new(Position::new(1.0, 2.0)))));
		let json = codec.write_string(&feature).unwrap();
		assert!(json.contains("\n  \"geometry\": {"));
		assert_eq!(codec.read_as::<GeoFeature>(&json).unwrap(), feature);
	}

	#[test]
	fn test_non_finite_positions_are_not_written() {
		let point = PointGeometry::new(Position::new(f64::NAN, 1.0));
		assert_eq!(
			GeoJsonCodec::default().write_string(&point),
			Err(GeoJsonError::NonFiniteNumber("NaN".to_string()))
		);

		let feature = GeoFeature::from_geometry(Some(Geometry::from(PointGeometry::new(Position::new(
			1.0,
			f64::INFINITY,
		)))));
		assert_eq!(
			feature.to_json(),
			Err(GeoJsonError::NonFiniteNumber("inf".to_string()))
		);
	}

	#[test]
	fn test_non_finite_numbers_are_not_read() {
		assert_eq!(
			PointGeometry::from_json(r#"{"type":"Point","coordinates":[1e400,1]}"#),
			Err(GeoJsonError::NonFiniteNumber("inf".to_string()))
		);
	}

	#[test]
	fn test_codec_is_shareable() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<GeoJsonCodec>();
		assert_send_sync::<GeoJson>();
	}
}
