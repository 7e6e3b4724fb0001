//! Typed errors returned by the geometry kernel.

/// The two ways a ring can fail the linear ring rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RingViolation {
	#[error("linear rings need to be made up of 4 or more positions, found {count}")]
	TooFewPositions { count: usize },
	#[error("linear rings require the first and last position to be identical")]
	NotClosed,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeoJsonError {
	/// Invalid JSON, or a required member is missing.
	#[error("malformed GeoJSON: {0}")]
	MalformedDocument(String),

	/// `type` is not a known GeoJSON type, or not allowed at this place.
	#[error("unknown GeoJSON type '{0}'")]
	UnknownDiscriminator(String),

	/// A typed reader got a document of another known type.
	#[error("expected GeoJSON type '{expected}', found '{found}'")]
	TypeMismatch { expected: &'static str, found: String },

	/// Coordinate nesting or ordinate count does not fit the type.
	#[error("shape mismatch: {0}")]
	ShapeMismatch(String),

	#[error("invalid linear ring: {0}")]
	InvalidLinearRing(#[from] RingViolation),

	#[error("invalid {kind}: {reason}")]
	InvalidGeometry { kind: &'static str, reason: String },

	#[error("invalid polyline encoding at byte {position}: {reason}")]
	InvalidPolylineEncoding { position: usize, reason: String },

	/// The rounded ordinates or their deltas leave the 64-bit range of the polyline format.
	#[error("position {index} cannot be encoded as a polyline with precision {precision}")]
	PolylineOutOfRange { index: usize, precision: u8 },

	/// JSON has no representation for NaN or infinity.
	#[error("non-finite number {0}, GeoJSON numbers must be finite")]
	NonFiniteNumber(String),
}

pub type GeoResult<T> = std::result::Result<T, GeoJsonError>;

impl GeoJsonError {
	pub(crate) fn shape(reason: impl Into<String>) -> Self {
		GeoJsonError::ShapeMismatch(reason.into())
	}

	pub(crate) fn malformed(reason: impl Into<String>) -> Self {
		GeoJsonError::MalformedDocument(reason.into())
	}
}

/// Kernel errors travel through the tokenizer as `anyhow::Error`. This recovers them, and turns
/// anything else into `MalformedDocument` carrying the whole context chain.
impl From<anyhow::Error> for GeoJsonError {
	fn from(error: anyhow::Error) -> Self {
		match error.downcast_ref::<GeoJsonError>() {
			Some(inner) => inner.clone(),
			None => GeoJsonError::MalformedDocument(format!("{error:#}")),
		}
	}
}
