//! Small parsing helpers built on top of [`ByteIterator`](super::iterator::ByteIterator).
//!
//! These functions implement the token layer of a JSON reader:
//! - `parse_tag` for matching fixed ASCII tags (`null`, `true`, `false`)
//! - `parse_quoted_json_string` for JSON string literals with escapes, including surrogate pairs
//! - `parse_number_as_string` and `parse_number_as<T>` for JSON number syntax
//! - `parse_object_entries` and `parse_array_entries` to iterate over object/array contents
//!
//! Parsing functions consume only as much as needed and leave the iterator positioned at the
//! next token (e.g., after a closing `]` or `}`).

use super::iterator::ByteIterator;
use anyhow::{Context, Result, bail};
use std::str::FromStr;

/// Match a fixed ASCII tag at the current iterator position.
///
/// # Errors
/// Returns an error if the upcoming bytes do not exactly match `tag`.
///
/// # Example
/// ```
/// # use geokern_core::byte_iterator::{ByteIterator, parse_tag};
/// let mut it = ByteIterator::from_text("null");
/// parse_tag(&mut it, "null").unwrap();
/// ```
pub fn parse_tag(iter: &mut ByteIterator, tag: &str) -> Result<()> {
	for c in tag.bytes() {
		if iter.expect_next_byte()? != c {
			return Err(iter.format_error(&format!("unexpected character while parsing tag '{tag}'")));
		}
	}
	Ok(())
}

fn parse_utf16_unit(iter: &mut ByteIterator) -> Result<u16> {
	let mut hex = [0u8; 4];
	for i in &mut hex {
		*i = iter.expect_next_byte()?;
	}
	if !hex.iter().all(u8::is_ascii_hexdigit) {
		return Err(iter.format_error("invalid unicode escape"));
	}
	let text = std::str::from_utf8(&hex)?;
	Ok(u16::from_str_radix(text, 16)?)
}

/// Parse a JSON quoted string literal and return it as `String`.
///
/// Supports the JSON escapes (`\" \\ \/ \b \f \n \r \t`) and `\uXXXX`, where a high surrogate
/// must be followed by an escaped low surrogate. Leaves the iterator positioned **after** the
/// closing quote.
///
/// # Example
/// ```
/// # use geokern_core::byte_iterator::{ByteIterator, parse_quoted_json_string};
/// let mut it = ByteIterator::from_text("\"he\\nllo\"");
/// assert_eq!(parse_quoted_json_string(&mut it).unwrap(), "he\nllo");
/// ```
pub fn parse_quoted_json_string(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'"' {
		bail!(iter.format_error("expected '\"' while parsing a string"));
	}

	let mut bytes = Vec::with_capacity(32);

	loop {
		match iter.expect_next_byte()? {
			b'"' => break,
			b'\\' => match iter.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(b'\x08'),
				b'f' => bytes.push(b'\x0C'),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					let mut units = vec![parse_utf16_unit(iter)?];
					if (0xD800..0xDC00).contains(&units[0]) {
						if iter.consume() != Some(b'\\') || iter.consume() != Some(b'u') {
							return Err(iter.format_error("expected a low surrogate escape"));
						}
						units.push(parse_utf16_unit(iter)?);
					}
					let decoded = String::from_utf16(&units).map_err(|_| iter.format_error("invalid unicode code point"))?;
					bytes.extend_from_slice(decoded.as_bytes());
				}
				_ => return Err(iter.format_error("invalid escape sequence")),
			},
			c => bytes.push(c),
		}
	}
	String::from_utf8(bytes).context("string is not valid UTF-8")
}

/// Parse a JSON number and return its textual representation.
///
/// Accepts an optional sign, integer digits, an optional fraction and an optional exponent.
/// Leaves the iterator at the first non-number byte.
///
/// # Example
/// ```
/// # use geokern_core::byte_iterator::{ByteIterator, parse_number_as_string};
/// let mut it = ByteIterator::from_text("-12.3e+4,");
/// assert_eq!(parse_number_as_string(&mut it).unwrap(), "-12.3e+4");
/// ```
pub fn parse_number_as_string(iter: &mut ByteIterator) -> Result<String> {
	let mut number = String::with_capacity(16);

	if let Some(b'+' | b'-') = iter.peek() {
		number.push(char::from(iter.expect_next_byte()?));
	}

	let mut has_digits = false;
	while let Some(b'0'..=b'9') = iter.peek() {
		has_digits = true;
		number.push(char::from(iter.expect_next_byte()?));
	}
	if !has_digits {
		return Err(iter.format_error("expected digits in number"));
	}

	if let Some(b'.') = iter.peek() {
		number.push(char::from(iter.expect_next_byte()?));
		let mut fractional_digits = false;
		while let Some(b'0'..=b'9') = iter.peek() {
			fractional_digits = true;
			number.push(char::from(iter.expect_next_byte()?));
		}
		if !fractional_digits {
			return Err(iter.format_error("expected digits after decimal point"));
		}
		if let Some(b'.') = iter.peek() {
			return Err(iter.format_error("unexpected '.' in number"));
		}
	}

	if let Some(b'e' | b'E') = iter.peek() {
		number.push(char::from(iter.expect_next_byte()?));
		if let Some(b'+' | b'-') = iter.peek() {
			number.push(char::from(iter.expect_next_byte()?));
		}
		let mut exponent_digits = false;
		while let Some(b'0'..=b'9') = iter.peek() {
			exponent_digits = true;
			number.push(char::from(iter.expect_next_byte()?));
		}
		if !exponent_digits {
			return Err(iter.format_error("expected digits after exponent"));
		}
	}

	Ok(number)
}

/// Parse a JSON number and convert it to a concrete type `R`.
///
/// # Example
/// ```
/// # use geokern_core::byte_iterator::{ByteIterator, parse_number_as};
/// let mut it = ByteIterator::from_text("42");
/// let n: i32 = parse_number_as(&mut it).unwrap();
/// assert_eq!(n, 42);
/// ```
pub fn parse_number_as<R: FromStr>(iter: &mut ByteIterator) -> Result<R> {
	parse_number_as_string(iter)?
		.parse::<R>()
		.map_err(|_| iter.format_error("invalid number"))
}

/// Iterate over JSON object entries, invoking `parse_value` for each key.
///
/// The closure receives the key and the iterator positioned at the start of the value. It must
/// consume exactly that value. Errors returned by the closure are passed through unchanged.
///
/// # Example
/// ```
/// # use geokern_core::byte_iterator::{ByteIterator, parse_object_entries, parse_quoted_json_string};
/// let mut it = ByteIterator::from_text("{\"k\":\"v\"}");
/// let mut got = None;
/// parse_object_entries(&mut it, |k, it| { got = Some((k, parse_quoted_json_string(it)?)); Ok(()) }).unwrap();
/// assert_eq!(got, Some(("k".into(), "v".into())));
/// ```
pub fn parse_object_entries<'a>(
	iter: &mut ByteIterator<'a>,
	mut parse_value: impl FnMut(String, &mut ByteIterator<'a>) -> Result<()>,
) -> Result<()> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'{' {
		bail!(iter.format_error("expected '{' while parsing an object"));
	}

	iter.skip_whitespace();
	if let Some(b'}') = iter.peek() {
		iter.advance();
		return Ok(());
	}

	loop {
		iter.skip_whitespace();
		if iter.expect_peeked_byte()? != b'"' {
			return Err(iter.format_error("parsing object, expected '\"'"));
		}
		let key = parse_quoted_json_string(iter)?;

		iter.skip_whitespace();
		if iter.expect_next_byte()? != b':' {
			return Err(iter.format_error("expected ':'"));
		}

		iter.skip_whitespace();
		parse_value(key, iter)?;

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => continue,
			b'}' => break,
			_ => return Err(iter.format_error("expected ',' or '}'")),
		}
	}
	Ok(())
}

/// Iterate over JSON array entries, collecting the results from `parse_value`.
///
/// # Example
/// ```
/// # use geokern_core::byte_iterator::{ByteIterator, parse_array_entries, parse_number_as};
/// let mut it = ByteIterator::from_text("[1, 2, 3]");
/// let nums: Vec<i32> = parse_array_entries(&mut it, parse_number_as).unwrap();
/// assert_eq!(nums, vec![1, 2, 3]);
/// ```
pub fn parse_array_entries<'a, R>(
	iter: &mut ByteIterator<'a>,
	mut parse_value: impl FnMut(&mut ByteIterator<'a>) -> Result<R>,
) -> Result<Vec<R>> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'[' {
		bail!(iter.format_error("expected '[' while parsing an array"));
	}

	let mut result = Vec::new();

	iter.skip_whitespace();
	if let Some(b']') = iter.peek() {
		iter.advance();
		return Ok(result);
	}

	loop {
		iter.skip_whitespace();
		result.push(parse_value(iter)?);

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b']' => break,
			b',' => continue,
			_ => return Err(iter.format_error("parsing array, expected ',' or ']'")),
		}
	}

	Ok(result)
}

/// Ensure that nothing but whitespace follows the current position.
pub fn expect_end(iter: &mut ByteIterator) -> Result<()> {
	iter.skip_whitespace();
	if iter.is_at_end() {
		Ok(())
	} else {
		Err(iter.format_error("unexpected trailing characters"))
	}
}
