//! The GeoJSON codec.
//!
//! Reading and writing is streamed through the tokenizer and writer of `geokern_core`; no
//! intermediate JSON tree is built for geometries. Property bags are the exception and are kept
//! as [`JsonObject`](geokern_core::json::JsonObject)s.

mod codec;
mod coordinates;
mod object;
mod read;
mod write;

pub use codec::*;
pub use coordinates::{CoordinateGeometry, CoordinatePayload};
pub use object::*;
