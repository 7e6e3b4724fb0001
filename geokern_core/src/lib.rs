//! Shared low-level building blocks for geokern: a byte-level JSON tokenizer, an owned JSON
//! value tree, and a streaming JSON writer.

pub mod byte_iterator;
pub mod json;
