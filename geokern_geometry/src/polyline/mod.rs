//! The encoded polyline format: each position becomes a latitude and a longitude delta,
//! zigzag encoded and written as 5-bit chunks in the ASCII range 63..=126.
//!
//! The format does not record its precision, so callers must decode with the value used for
//! encoding.

mod decode;
mod encode;
mod simplify;

pub use decode::decode;
pub use encode::encode;
pub use simplify::{DEFAULT_TOLERANCE, simplify};

/// Precision of the common format. OSRM uses 6.
pub const DEFAULT_PRECISION: u8 = 5;

fn factor(precision: u8) -> f64 {
	10f64.powi(i32::from(precision))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Position;
	use approx::assert_abs_diff_eq;
	use pretty_assertions::assert_eq;

	const TEST_LINE: &str = r"_cqeFf~cjVf@p@fA}AtAoB`ArAx@hA`GbIvDiFv@gAh@t@X\|@z@`@Z\Xf@Vf@VpA\tATJ@NBBkC";
	const TEST_LINE6: &str = "qn_iHgp}LzCy@xCsAsC}PoEeD_@{A@uD_@Sg@Je@a@I_@FcAoFyGcCqFgQ{L{CmD";

	#[test]
	fn test_decode_path() {
		let path = decode(TEST_LINE, DEFAULT_PRECISION).unwrap();
		assert_eq!(path.len(), 21);
		let last = path[20];
		assert_abs_diff_eq!(last.latitude(), 37.76953, epsilon = 1e-6);
		assert_abs_diff_eq!(last.longitude(), -122.41488, epsilon = 1e-6);
		assert!(!last.has_altitude());
	}

	#[test]
	fn test_round_trip_precision_5() {
		let path = decode(TEST_LINE, 5).unwrap();
		assert_eq!(encode(&path, 5).unwrap(), TEST_LINE);
	}

	#[test]
	fn test_round_trip_precision_6() {
		let path = decode(TEST_LINE6, 6).unwrap();
		assert_eq!(encode(&path, 6).unwrap(), TEST_LINE6);
	}

	#[test]
	fn test_encode_decode_rounds_to_precision() {
		let original = [Position::new(2.286_203_6, 48.826_786_8), Position::new(2.4, 48.9)];
		let path = decode(&encode(&original, 6).unwrap(), 6).unwrap();
		assert_eq!(path.len(), original.len());
		for (a, b) in original.iter().zip(&path) {
			assert_abs_diff_eq!(a.latitude(), b.latitude(), epsilon = 1e-6);
			assert_abs_diff_eq!(a.longitude(), b.longitude(), epsilon = 1e-6);
		}
		assert_eq!(path[0], Position::new(2.286_204, 48.826_787));
	}
}
