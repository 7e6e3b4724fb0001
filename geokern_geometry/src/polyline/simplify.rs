//! Line simplification: a radial distance pre-pass followed by Ramer-Douglas-Peucker.
//!
//! Distances are planar, in the unit of the coordinates.

use crate::Position;

pub const DEFAULT_TOLERANCE: f64 = 1.0;

fn sq_dist(p1: &Position, p2: &Position) -> f64 {
	let dx = p1.longitude() - p2.longitude();
	let dy = p1.latitude() - p2.latitude();
	dx * dx + dy * dy
}

// Squared distance from `point` to the segment `p1`-`p2`.
fn sq_seg_dist(point: &Position, p1: &Position, p2: &Position) -> f64 {
	let (mut x, mut y) = (p1.longitude(), p1.latitude());
	let dx = p2.longitude() - x;
	let dy = p2.latitude() - y;

	if dx != 0.0 || dy != 0.0 {
		let t = ((point.longitude() - x) * dx + (point.latitude() - y) * dy) / (dx * dx + dy * dy);
		if t > 1.0 {
			x = p2.longitude();
			y = p2.latitude();
		} else if t > 0.0 {
			x += dx * t;
			y += dy * t;
		}
	}

	let dx = point.longitude() - x;
	let dy = point.latitude() - y;
	dx * dx + dy * dy
}

// Drops points closer than the tolerance to the last kept one. The last point is always kept.
fn simplify_radial_dist(points: &[Position], sq_tolerance: f64) -> Vec<Position> {
	let mut prev = points[0];
	let mut kept = vec![prev];

	for point in &points[1..] {
		if sq_dist(point, &prev) > sq_tolerance {
			kept.push(*point);
			prev = *point;
		}
	}

	let last = points[points.len() - 1];
	if prev != last {
		kept.push(last);
	}
	kept
}

fn simplify_dp_step(points: &[Position], first: usize, last: usize, sq_tolerance: f64, simplified: &mut Vec<Position>) {
	let mut max_sq_dist = sq_tolerance;
	let mut index = 0;

	for i in first + 1..last {
		let sq_dist = sq_seg_dist(&points[i], &points[first], &points[last]);
		if sq_dist > max_sq_dist {
			index = i;
			max_sq_dist = sq_dist;
		}
	}

	if max_sq_dist > sq_tolerance {
		if index - first > 1 {
			simplify_dp_step(points, first, index, sq_tolerance, simplified);
		}
		simplified.push(points[index]);
		if last - index > 1 {
			simplify_dp_step(points, index, last, sq_tolerance, simplified);
		}
	}
}

fn simplify_douglas_peucker(points: &[Position], sq_tolerance: f64) -> Vec<Position> {
	let last = points.len() - 1;
	let mut simplified = vec![points[0]];
	simplify_dp_step(points, 0, last, sq_tolerance, &mut simplified);
	simplified.push(points[last]);
	simplified
}

/// Reduces the number of points of a line while keeping its shape.
///
/// `tolerance` is in the unit of the coordinates. With `highest_quality` the radial distance
/// pre-pass is skipped, which is slower but can keep more detail. Lines of 2 or fewer points are
/// returned unchanged.
#[must_use]
pub fn simplify(points: &[Position], tolerance: f64, highest_quality: bool) -> Vec<Position> {
	if points.len() <= 2 {
		return points.to_vec();
	}

	let sq_tolerance = tolerance * tolerance;
	if highest_quality {
		simplify_douglas_peucker(points, sq_tolerance)
	} else {
		simplify_douglas_peucker(&simplify_radial_dist(points, sq_tolerance), sq_tolerance)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn line(points: &[[f64; 2]]) -> Vec<Position> {
		points.iter().map(|p| Position::from(*p)).collect()
	}

	#[test]
	fn test_short_lines_are_unchanged() {
		assert!(simplify(&[], DEFAULT_TOLERANCE, false).is_empty());
		let two = line(&[[0.0, 0.0], [10.0, 0.0]]);
		assert_eq!(simplify(&two, 6.0, true), two);
	}

	#[test]
	fn test_removes_collinear_points() {
		let points = line(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0], [4.0, 0.0]]);
		assert_eq!(simplify(&points, 0.1, true), line(&[[0.0, 0.0], [4.0, 0.0]]));
	}

	#[test]
	fn test_keeps_corners() {
		let points = line(&[[0.0, 0.0], [5.0, 0.1], [10.0, 0.0], [10.0, 5.0], [10.1, 10.0]]);
		assert_eq!(
			simplify(&points, 1.0, true),
			line(&[[0.0, 0.0], [10.0, 0.0], [10.1, 10.0]])
		);
	}

	#[test]
	fn test_radial_pre_pass() {
		let points = line(&[[0.0, 0.0], [0.1, 0.0], [0.2, 0.0], [5.0, 5.0], [5.05, 5.0]]);
		assert_eq!(
			simplify_radial_dist(&points, 1.0),
			line(&[[0.0, 0.0], [5.0, 5.0], [5.05, 5.0]])
		);
		assert_eq!(simplify(&points, 1.0, false), line(&[[0.0, 0.0], [5.05, 5.0]]));
	}

	#[test]
	fn test_sq_seg_dist() {
		let (a, b) = (Position::new(0.0, 0.0), Position::new(10.0, 0.0));
		assert_eq!(sq_seg_dist(&Position::new(5.0, 3.0), &a, &b), 9.0);
		assert_eq!(sq_seg_dist(&Position::new(-3.0, 4.0), &a, &b), 25.0);
		assert_eq!(sq_seg_dist(&Position::new(13.0, 4.0), &a, &b), 25.0);
		assert_eq!(sq_seg_dist(&Position::new(3.0, 4.0), &a, &a), 25.0);
	}
}
