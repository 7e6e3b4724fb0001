//! A byte-level cursor over an in-memory document.
//!
//! `ByteIterator` walks a borrowed byte slice one byte at a time. It supports peeking at the next
//! byte without consuming it, advancing, and forking a second cursor at an earlier position of the
//! same document. Errors carry the byte position and a short snippet of the surrounding input.

use anyhow::{Error, Result, anyhow};

const SNIPPET_SIZE: usize = 16;

/// A cursor over a borrowed byte slice with support for peeking, consuming, and error reporting.
///
/// `position` always points at the byte returned by [`peek`](Self::peek).
#[derive(Clone)]
pub struct ByteIterator<'a> {
	bytes: &'a [u8],
	position: usize,
}

impl<'a> ByteIterator<'a> {
	/// Creates a new `ByteIterator` positioned at the first byte of `bytes`.
	#[must_use]
	pub fn from_bytes(bytes: &'a [u8]) -> Self {
		ByteIterator { bytes, position: 0 }
	}

	/// Creates a new `ByteIterator` over the UTF-8 bytes of `text`.
	#[must_use]
	pub fn from_text(text: &'a str) -> Self {
		Self::from_bytes(text.as_bytes())
	}

	/// Returns a second cursor over the same document, positioned at `position`.
	///
	/// Used to come back to a value that was skipped earlier. Positions past the end are clamped.
	#[must_use]
	pub fn fork_at(&self, position: usize) -> ByteIterator<'a> {
		ByteIterator {
			bytes: self.bytes,
			position: position.min(self.bytes.len()),
		}
	}

	/// Formats an error message including the current byte position and a snapshot of the
	/// bytes leading up to it.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		let start = self.position.saturating_sub(SNIPPET_SIZE - 1);
		let end = (self.position + 1).min(self.bytes.len());
		let mut snippet = String::from_utf8_lossy(&self.bytes[start..end]).into_owned();
		if self.peek().is_none() {
			snippet.push_str("<EOF>");
		}
		anyhow!("{msg} at position {}: {snippet}", self.position)
	}

	/// Returns the current absolute position in the document.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	/// Peeks at the next byte without consuming it.
	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.position).copied()
	}

	/// Advances to the next byte. Does nothing at the end of the document.
	#[inline]
	pub fn advance(&mut self) {
		if self.position < self.bytes.len() {
			self.position += 1;
		}
	}

	/// Consumes and returns the current byte, or `None` at the end of the document.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let current_byte = self.peek();
		self.advance();
		current_byte
	}

	/// Consumes and returns the current byte.
	///
	/// # Errors
	///
	/// Returns an error if the end of the document is reached unexpectedly.
	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8> {
		if let Some(current_byte) = self.peek() {
			self.advance();
			Ok(current_byte)
		} else {
			Err(self.format_error("unexpected end"))
		}
	}

	/// Returns the current byte without advancing.
	///
	/// # Errors
	///
	/// Returns an error if the end of the document is reached unexpectedly.
	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peek().ok_or_else(|| self.format_error("unexpected end"))
	}

	/// Skips over any ASCII whitespace.
	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}

	/// Returns `true` once every byte has been consumed.
	#[must_use]
	pub fn is_at_end(&self) -> bool {
		self.position >= self.bytes.len()
	}
}
