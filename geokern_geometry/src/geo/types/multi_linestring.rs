use crate::{BoundingBox, CoordinateGeometry, GeoResult, LineStringGeometry, Position};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MultiLineStringGeometry {
	pub(crate) coordinates: Vec<Vec<Position>>,
	pub(crate) bbox: Option<BoundingBox>,
}

impl MultiLineStringGeometry {
	/// Builds from raw member lines. Like a raw polygon, the members are not validated.
	#[must_use]
	pub fn from_lng_lats(lines: Vec<Vec<Position>>) -> Self {
		MultiLineStringGeometry {
			coordinates: lines,
			bbox: None,
		}
	}

	#[must_use]
	pub fn from_line_strings(lines: Vec<LineStringGeometry>) -> Self {
		MultiLineStringGeometry {
			coordinates: lines.into_iter().map(|line| line.coordinates).collect(),
			bbox: None,
		}
	}

	#[must_use]
	pub fn from_line_string(line: LineStringGeometry) -> Self {
		Self::from_line_strings(vec![line])
	}

	#[must_use]
	pub fn coordinates(&self) -> &[Vec<Position>] {
		&self.coordinates
	}

	/// The member lines, built fresh on each call.
	#[must_use]
	pub fn line_strings(&self) -> Vec<LineStringGeometry> {
		self
			.coordinates
			.iter()
			.map(|positions| LineStringGeometry {
				coordinates: positions.clone(),
				bbox: None,
			})
			.collect()
	}
}

crate::impl_geometry_trait!(MultiLineStringGeometry => MultiLineString);
crate::impl_composite_geometry!(MultiLineStringGeometry => Vec<Position>);

impl CoordinateGeometry for MultiLineStringGeometry {
	type Payload = Vec<Vec<Position>>;

	fn from_payload(coordinates: Vec<Vec<Position>>, bbox: Option<BoundingBox>) -> GeoResult<Self> {
		Ok(MultiLineStringGeometry { coordinates, bbox })
	}

	fn payload(&self) -> &Vec<Vec<Position>> {
		&self.coordinates
	}
}
