//! Owned JSON values, a parser built on [`crate::byte_iterator`], and a streaming writer.

mod object;
mod parse;
mod stringify;
mod value;
mod writer;

pub use object::JsonObject;
pub use parse::{MAX_DEPTH, parse_json_iter, parse_json_object, parse_json_str, skip_json_value};
pub use stringify::*;
pub use value::JsonValue;
pub use writer::JsonWriter;
