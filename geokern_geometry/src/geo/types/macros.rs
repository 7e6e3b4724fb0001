/// Implements [`GeometryTrait`](crate::GeometryTrait) for a geometry struct with the fields
/// `coordinates` and `bbox`.
#[macro_export]
macro_rules! impl_geometry_trait {
	($($t:ty => $kind:ident),* $(,)?) => {$(
		impl $crate::GeometryTrait for $t {
			const TYPE: $crate::GeoJsonType = $crate::GeoJsonType::$kind;

			fn bbox(&self) -> Option<&$crate::BoundingBox> {
				self.bbox.as_ref()
			}

			fn with_bbox(self, bbox: Option<$crate::BoundingBox>) -> Self {
				Self { bbox, ..self }
			}

			fn for_each_position(&self, f: &mut dyn FnMut(&$crate::Position)) {
				$crate::PositionTree::for_each_position(&self.coordinates, f);
			}
		}
	)*}
}

/// Implements [`CompositeGeometryTrait`](crate::CompositeGeometryTrait) over the `coordinates`
/// field.
#[macro_export]
macro_rules! impl_composite_geometry {
	($($t:ty => $item:ty),* $(,)?) => {$(
		impl $crate::CompositeGeometryTrait<$item> for $t {
			fn as_slice(&self) -> &[$item] {
				&self.coordinates
			}
		}
	)*}
}
