// The seven geometry types. Each is an immutable value with private coordinates and an optional
// bounding box. They share `GeometryTrait`, and the sequence types also implement
// `CompositeGeometryTrait` for read access to their members.

mod geometry_collection;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod traits;

pub use geometry_collection::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use traits::*;
