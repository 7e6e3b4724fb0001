use crate::{GeoJsonError, GeoResult, Position};

fn invalid(position: usize, reason: impl Into<String>) -> GeoJsonError {
	GeoJsonError::InvalidPolylineEncoding {
		position,
		reason: reason.into(),
	}
}

// Reads one zigzag encoded value starting at `*index` and advances past it.
fn next_value(bytes: &[u8], index: &mut usize) -> GeoResult<i64> {
	let mut result: u64 = 0;
	let mut shift = 0u32;
	loop {
		let Some(&byte) = bytes.get(*index) else {
			return Err(invalid(*index, "truncated value"));
		};
		if !(63..=126).contains(&byte) {
			return Err(invalid(*index, format!("byte 0x{byte:02x} is outside the polyline alphabet")));
		}
		let chunk = u64::from(byte - 63);
		// The 13th chunk holds bits 60..64: only 4 bits are left and it must be the last one.
		if shift == 60 && chunk >= 0x10 {
			return Err(invalid(*index, "value does not fit into 64 bits"));
		}
		result |= (chunk & 0x1f) << shift;
		shift += 5;
		*index += 1;
		if chunk < 0x20 {
			break;
		}
	}
	let value = (result >> 1) as i64;
	Ok(if result & 1 == 1 { !value } else { value })
}

/// Decodes an encoded polyline into positions without altitude.
///
/// `precision` must be the one used for encoding. An empty string decodes to no positions.
/// Malformed input is an error, it is never cut short silently.
pub fn decode(encoded: &str, precision: u8) -> GeoResult<Vec<Position>> {
	let factor = super::factor(precision);
	let bytes = encoded.as_bytes();
	let mut positions = Vec::new();
	let mut index = 0;
	let (mut lat, mut lng) = (0i64, 0i64);

	while index < bytes.len() {
		let delta_lat = next_value(bytes, &mut index)?;
		if index >= bytes.len() {
			return Err(invalid(index, "latitude without a longitude"));
		}
		let delta_lng = next_value(bytes, &mut index)?;

		lat = lat
			.checked_add(delta_lat)
			.ok_or_else(|| invalid(index, "latitude overflows"))?;
		lng = lng
			.checked_add(delta_lng)
			.ok_or_else(|| invalid(index, "longitude overflows"))?;
		positions.push(Position::new(lng as f64 / factor, lat as f64 / factor));
	}

	Ok(positions)
}
