#![allow(clippy::module_inception)]

mod bbox;
mod collection;
mod feature;
mod geojson_type;
mod geometry;
mod position;
mod shifter;
mod types;

pub use bbox::*;
pub use collection::*;
pub use feature::*;
pub use geojson_type::*;
pub use geometry::*;
pub use position::*;
pub use shifter::*;
pub use types::*;
