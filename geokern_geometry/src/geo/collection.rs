use super::{BoundingBox, GeoFeature};

/// An ordered list of features.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GeoFeatureCollection {
	pub(crate) features: Vec<GeoFeature>,
	pub(crate) bbox: Option<BoundingBox>,
}

impl GeoFeatureCollection {
	#[must_use]
	pub fn from_features(features: Vec<GeoFeature>) -> Self {
		Self { features, bbox: None }
	}

	#[must_use]
	pub fn from_feature(feature: GeoFeature) -> Self {
		Self::from_features(vec![feature])
	}

	#[must_use]
	pub fn features(&self) -> &[GeoFeature] {
		&self.features
	}

	#[must_use]
	pub fn bbox(&self) -> Option<&BoundingBox> {
		self.bbox.as_ref()
	}

	#[must_use]
	pub fn with_bbox(self, bbox: Option<BoundingBox>) -> Self {
		Self { bbox, ..self }
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.features.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	/// The extent of all feature geometries.
	#[must_use]
	pub fn compute_bbox(&self) -> Option<BoundingBox> {
		self
			.features
			.iter()
			.filter_map(GeoFeature::compute_bbox)
			.reduce(|a, b| a.union(&b))
	}
}

impl FromIterator<GeoFeature> for GeoFeatureCollection {
	fn from_iter<T: IntoIterator<Item = GeoFeature>>(iter: T) -> Self {
		Self::from_features(iter.into_iter().collect())
	}
}
