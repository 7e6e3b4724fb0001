use crate::{BoundingBox, CompositeGeometryTrait, GeoJsonType, Geometry, GeometryTrait, Position};

/// An ordered list of geometries of any type, nested collections included.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GeometryCollection {
	pub(crate) geometries: Vec<Geometry>,
	pub(crate) bbox: Option<BoundingBox>,
}

impl GeometryCollection {
	#[must_use]
	pub fn from_geometries(geometries: Vec<Geometry>) -> Self {
		GeometryCollection { geometries, bbox: None }
	}

	#[must_use]
	pub fn from_geometry(geometry: Geometry) -> Self {
		Self::from_geometries(vec![geometry])
	}

	#[must_use]
	pub fn geometries(&self) -> &[Geometry] {
		&self.geometries
	}
}

impl GeometryTrait for GeometryCollection {
	const TYPE: GeoJsonType = GeoJsonType::GeometryCollection;

	fn bbox(&self) -> Option<&BoundingBox> {
		self.bbox.as_ref()
	}

	fn with_bbox(self, bbox: Option<BoundingBox>) -> Self {
		Self { bbox, ..self }
	}

	fn for_each_position(&self, f: &mut dyn FnMut(&Position)) {
		for geometry in &self.geometries {
			geometry.for_each_position(f);
		}
	}
}

impl CompositeGeometryTrait<Geometry> for GeometryCollection {
	fn as_slice(&self) -> &[Geometry] {
		&self.geometries
	}
}

impl FromIterator<Geometry> for GeometryCollection {
	fn from_iter<T: IntoIterator<Item = Geometry>>(iter: T) -> Self {
		Self::from_geometries(iter.into_iter().collect())
	}
}
