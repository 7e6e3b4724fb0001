use crate::geo::{BoundingBox, GeoJsonType, Position};
use std::{fmt::Debug, hash::Hash};

/// Shared interface of the seven geometry types.
pub trait GeometryTrait: Debug + Clone + PartialEq + Eq + Hash {
	/// The `type` discriminator written for this geometry.
	const TYPE: GeoJsonType;

	fn type_name(&self) -> &'static str {
		Self::TYPE.as_str()
	}

	/// The bounding box that was supplied or parsed. It is never derived automatically.
	fn bbox(&self) -> Option<&BoundingBox>;

	/// Returns a copy carrying `bbox` instead of the current one.
	fn with_bbox(self, bbox: Option<BoundingBox>) -> Self;

	/// Calls `f` for every position, in document order.
	fn for_each_position(&self, f: &mut dyn FnMut(&Position));

	/// Computes the extent of all positions. Returns `None` for an empty geometry.
	///
	/// Altitudes are included only when every position has one.
	fn compute_bbox(&self) -> Option<BoundingBox> {
		let mut extent: Option<BoundingBox> = None;
		self.for_each_position(&mut |position| {
			let single = BoundingBox::new(*position, *position);
			extent = Some(match extent {
				Some(current) => current.union(&single),
				None => single,
			});
		});
		extent
	}
}

/// Represents geometries that can be wrapped into a corresponding multi-geometry.
/// For example, a single `PointGeometry` can be converted into a `MultiPointGeometry`.
pub trait SingleGeometryTrait<Multi>: Debug + Clone {
	/// Converts the single geometry into its multi-geometry equivalent. The bbox is kept.
	fn into_multi(self) -> Multi;
}

/// Read access to geometries that are sequences of simpler elements.
/// For example, a polygon is made of rings, and a multi-polygon is made of polygon payloads.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	fn as_slice(&self) -> &[Item];

	fn iter(&self) -> std::slice::Iter<'_, Item> {
		self.as_slice().iter()
	}

	fn is_empty(&self) -> bool {
		self.as_slice().is_empty()
	}

	fn len(&self) -> usize {
		self.as_slice().len()
	}

	fn first(&self) -> Option<&Item> {
		self.as_slice().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_slice().last()
	}
}

/// Nested position sequences of a fixed depth, the coordinate payload of a geometry.
pub trait PositionTree: Debug + Clone + PartialEq + Eq + Hash {
	/// Array nesting depth on the wire: 1 for a single position.
	const DEPTH: usize;

	fn for_each_position(&self, f: &mut dyn FnMut(&Position));
}

impl PositionTree for Position {
	const DEPTH: usize = 1;

	fn for_each_position(&self, f: &mut dyn FnMut(&Position)) {
		f(self);
	}
}

impl<T: PositionTree> PositionTree for Vec<T> {
	const DEPTH: usize = T::DEPTH + 1;

	fn for_each_position(&self, f: &mut dyn FnMut(&Position)) {
		for item in self {
			item.for_each_position(f);
		}
	}
}
