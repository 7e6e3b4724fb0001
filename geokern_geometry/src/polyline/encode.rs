use crate::{GeoJsonError, GeoResult, Position};

// i64::MIN and i64::MAX + 1 are both exact as f64.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Rounds halves towards positive infinity, the way the reference encoders do.
/// `None` if the result is not finite or does not fit into an `i64`.
fn to_fixed(value: f64, factor: f64) -> Option<i64> {
	let scaled = (value * factor + 0.5).floor();
	(scaled >= I64_LOWER && scaled < I64_UPPER).then_some(scaled as i64)
}

fn push_value(delta: i64, output: &mut String) {
	// zigzag: 0, -1, 1, -2, ... become 0, 1, 2, 3, ...
	let mut value = ((delta << 1) ^ (delta >> 63)) as u64;
	while value >= 0x20 {
		output.push(char::from((0x20 | (value & 0x1f)) as u8 + 63));
		value >>= 5;
	}
	output.push(char::from(value as u8 + 63));
}

/// Encodes positions as an encoded polyline. Altitudes are ignored.
///
/// `precision` is the number of decimal digits kept: 5 for the common format, 6 for OSRM.
/// Fails with [`GeoJsonError::PolylineOutOfRange`] if an ordinate is not finite, or if the
/// rounded values or their deltas do not fit into 64 bits.
///
/// ```
/// use geokern_geometry::{Position, polyline};
///
/// let path = [
/// 	Position::new(-120.2, 38.5),
/// 	Position::new(-120.95, 40.7),
/// 	Position::new(-126.453, 43.252),
/// ];
/// assert_eq!(polyline::encode(&path, 5).unwrap(), "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
/// ```
pub fn encode(positions: &[Position], precision: u8) -> GeoResult<String> {
	let factor = super::factor(precision);
	let mut output = String::with_capacity(positions.len() * 8);
	let (mut last_lat, mut last_lng) = (0i64, 0i64);

	for (index, position) in positions.iter().enumerate() {
		let out_of_range = || GeoJsonError::PolylineOutOfRange { index, precision };
		let lat = to_fixed(position.latitude(), factor).ok_or_else(out_of_range)?;
		let lng = to_fixed(position.longitude(), factor).ok_or_else(out_of_range)?;
		push_value(lat.checked_sub(last_lat).ok_or_else(out_of_range)?, &mut output);
		push_value(lng.checked_sub(last_lng).ok_or_else(out_of_range)?, &mut output);
		last_lat = lat;
		last_lng = lng;
	}

	Ok(output)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::polyline::decode;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case(0, "?")]
	#[case(1, "A")]
	#[case(-1, "@")]
	#[case(16, "_@")]
	#[case(-17_998_321, "`~oia@")]
	#[case(i64::MAX, "}~~~~~~~~~~~N")]
	#[case(i64::MIN, "~~~~~~~~~~~~N")]
	fn test_push_value(#[case] delta: i64, #[case] expected: &str) {
		let mut output = String::new();
		push_value(delta, &mut output);
		assert_eq!(output, expected);
	}

	#[rstest]
	#[case(0.000_005, Some(1))]
	#[case(-0.000_005, Some(0))]
	#[case(38.5, Some(3_850_000))]
	#[case(-120.2, Some(-12_020_000))]
	#[case(1e15, None)]
	#[case(-1e15, None)]
	#[case(f64::NAN, None)]
	#[case(f64::INFINITY, None)]
	fn test_to_fixed(#[case] value: f64, #[case] expected: Option<i64>) {
		assert_eq!(to_fixed(value, 1e5), expected);
	}

	#[test]
	fn test_empty() {
		assert_eq!(encode(&[], 6).unwrap(), "");
	}

	#[test]
	fn test_altitude_is_ignored() {
		assert_eq!(
			encode(&[Position::with_altitude(-120.2, 38.5, 100.0)], 5).unwrap(),
			encode(&[Position::new(-120.2, 38.5)], 5).unwrap()
		);
	}

	#[rstest]
	// the delta between -90 and 90 overflows
	#[case::delta_overflow(17, &[[0.0, -90.0], [0.0, 90.0]], 1)]
	// 90 * 10^18 is beyond i64
	#[case::value_overflow(18, &[[0.0, 90.0]], 0)]
	#[case::max_precision(255, &[[0.0, 0.0], [0.0, 1.0]], 1)]
	#[case::not_finite(5, &[[1.0, 1.0], [f64::NAN, 1.0]], 1)]
	fn test_out_of_range(#[case] precision: u8, #[case] points: &[[f64; 2]], #[case] index: usize) {
		let positions: Vec<Position> = points.iter().map(|p| Position::from(*p)).collect();
		assert_eq!(
			encode(&positions, precision),
			Err(GeoJsonError::PolylineOutOfRange { index, precision })
		);
	}

	#[test]
	fn test_high_precision_within_range() {
		let positions = [Position::new(0.0, -90.0), Position::new(0.0, 0.0)];
		let encoded = encode(&positions, 17).unwrap();
		assert_eq!(decode(&encoded, 17).unwrap(), positions);
	}
}
