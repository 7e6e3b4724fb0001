//! GeoJSON (RFC 7946) geometry kernel: immutable geometry values, features, a streaming
//! GeoJSON codec and the encoded polyline format.
//!
//! ```
//! use geokern_geometry::{GeoJsonObject, PolygonGeometry};
//!
//! let json = r#"{"type":"Polygon","coordinates":[[[100,0],[101,0],[101,1],[100,1],[100,0]]]}"#;
//! let polygon = PolygonGeometry::from_json(json).unwrap();
//! assert_eq!(polygon.outer().unwrap().coordinates().len(), 5);
//! assert_eq!(polygon.to_json().unwrap(), json);
//! ```

mod error;
mod geo;
pub mod geojson;
pub mod polyline;

pub use error::*;
pub use geo::*;
pub use geojson::*;
