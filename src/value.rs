/* src/value.rs */

//! Dynamically typed values handed across a scripting or binding boundary.
//!
//! Host runtimes pass loosely typed arguments; the `*_value` entry points on
//! [`StreamReader`] check them and report malformed input as [`Error`]s
//! without touching the stream.

use alloc::vec::Vec;

use bytes::Bytes;
use log::warn;

use crate::{Error, StreamReader};

/// A loosely typed host value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Absent / null.
	Null,
	/// Boolean.
	Bool(bool),
	/// Number; hosts commonly represent every number as a double.
	Number(f64),
	/// Immutable byte chunk.
	Bytes(Bytes),
	/// Ordered list of values.
	List(Vec<Value>),
}

impl Value {
	/// Short name of the value kind, used in error messages.
	#[must_use]
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Number(_) => "number",
			Self::Bytes(_) => "bytes",
			Self::List(_) => "list",
		}
	}

	/// The byte chunk, if this value is one.
	#[must_use]
	pub fn as_bytes(&self) -> Option<&Bytes> {
		match self {
			Self::Bytes(b) => Some(b),
			_ => None,
		}
	}
}

impl From<Bytes> for Value {
	fn from(b: Bytes) -> Self {
		Self::Bytes(b)
	}
}

impl From<Vec<u8>> for Value {
	fn from(b: Vec<u8>) -> Self {
		Self::Bytes(Bytes::from(b))
	}
}

impl From<&[u8]> for Value {
	fn from(b: &[u8]) -> Self {
		Self::Bytes(Bytes::copy_from_slice(b))
	}
}

impl From<f64> for Value {
	fn from(n: f64) -> Self {
		Self::Number(n)
	}
}

impl From<u32> for Value {
	fn from(n: u32) -> Self {
		Self::Number(f64::from(n))
	}
}

impl From<i32> for Value {
	fn from(n: i32) -> Self {
		Self::Number(f64::from(n))
	}
}

/// Largest integer magnitude a double holds exactly (2^53).
const MAX_EXACT_INTEGER: u64 = 1 << 53;

fn inexact() -> Error {
	Error::InvalidArgument {
		field: "number",
		reason: "not exactly representable as a double",
	}
}

impl TryFrom<u64> for Value {
	type Error = Error;

	fn try_from(n: u64) -> Result<Self, Error> {
		if n > MAX_EXACT_INTEGER {
			return Err(inexact());
		}
		Ok(Self::Number(n as f64))
	}
}

impl TryFrom<usize> for Value {
	type Error = Error;

	fn try_from(n: usize) -> Result<Self, Error> {
		let n = u64::try_from(n).map_err(|_| inexact())?;
		Self::try_from(n)
	}
}

impl TryFrom<i64> for Value {
	type Error = Error;

	fn try_from(n: i64) -> Result<Self, Error> {
		if n.unsigned_abs() > MAX_EXACT_INTEGER {
			return Err(inexact());
		}
		Ok(Self::Number(n as f64))
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Self::Bool(b)
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Self>) -> Self {
		Self::List(items)
	}
}

impl FromIterator<Value> for Value {
	fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
		Self::List(iter.into_iter().collect())
	}
}

/// Convert a host number into a byte position.
fn position(value: &Value, field: &'static str) -> Result<usize, Error> {
	let invalid = |reason| Error::InvalidArgument { field, reason };
	let Value::Number(n) = *value else {
		return Err(invalid("expected a number"));
	};
	if !n.is_finite() {
		return Err(invalid("must be finite"));
	}
	if n < 0.0 {
		return Err(invalid("must not be negative"));
	}
	// usize::MAX as f64 rounds up to 2^64 on 64-bit targets. On 32-bit targets it
	// is exact, so usize::MAX itself is rejected; no stream reaches that length.
	if n >= usize::MAX as f64 {
		return Err(invalid("out of range"));
	}
	let int = n as usize;
	if int as f64 != n {
		return Err(invalid("must be an integer"));
	}
	Ok(int)
}

fn optional_position(value: Option<&Value>, field: &'static str) -> Result<usize, Error> {
	match value {
		None | Some(Value::Null) => Ok(0),
		Some(v) => position(v, field),
	}
}

impl StreamReader {
	/// Append a host value as a slice.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidSlice`] when `value` is not a byte chunk. The
	/// stream is left unchanged.
	pub fn add_slice_value(&mut self, value: &Value) -> Result<(), Error> {
		let Some(slice) = value.as_bytes() else {
			warn!("rejected slice of kind {}", value.kind());
			return Err(Error::InvalidSlice {
				found: value.kind(),
			});
		};
		self.store.push(slice.clone());
		Ok(())
	}

	/// Append a host value as a payload: a list of byte chunks.
	///
	/// Every element is checked before anything is appended, so the stream
	/// either gains all slices or none.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidPayload`] when `value` is not a list, and
	/// [`Error::InvalidSliceInPayload`] when an element is not a byte chunk.
	pub fn add_payload_value(&mut self, value: &Value) -> Result<(), Error> {
		let Value::List(items) = value else {
			warn!("rejected payload of kind {}", value.kind());
			return Err(Error::InvalidPayload {
				found: value.kind(),
			});
		};
		let slices = items
			.iter()
			.enumerate()
			.map(|(index, item)| {
				item.as_bytes().cloned().ok_or(Error::InvalidSliceInPayload {
					index,
					found: item.kind(),
				})
			})
			.collect::<Result<Vec<_>, _>>()
			.inspect_err(|e| warn!("rejected payload: {e}"))?;
		self.store.extend(slices);
		Ok(())
	}

	/// [`read`](Self::read) with host-supplied arguments.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] when `length` or `offset` is not a
	/// non-negative integral number.
	pub fn read_value(&self, length: &Value, offset: &Value) -> Result<Option<Bytes>, Error> {
		let length = position(length, "length")?;
		let offset = position(offset, "offset")?;
		Ok(self.read(length, offset))
	}

	/// [`search`](Self::search) with host-supplied arguments.
	///
	/// A missing or null `offset` searches from the start.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] when `pattern` is not a byte chunk
	/// or `offset` is not a non-negative integral number.
	pub fn search_value(
		&self,
		pattern: &Value,
		offset: Option<&Value>,
	) -> Result<Option<usize>, Error> {
		let Some(pattern) = pattern.as_bytes() else {
			return Err(Error::InvalidArgument {
				field: "pattern",
				reason: "expected bytes",
			});
		};
		let offset = optional_position(offset, "offset")?;
		Ok(self.search(pattern, offset))
	}
}
