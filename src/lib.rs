/* src/lib.rs */

//! Scatter-gather byte stream over shared, immutable slices.
//!
//! A [`StreamReader`] accumulates independently allocated chunks (packet
//! payload fragments, reassembled segments) and exposes them as one logical,
//! randomly addressable byte stream without first copying them into a
//! contiguous buffer.
//!
//! - [`StreamReader::read`] returns a zero-copy view when the requested range
//!   lies inside one slice, and copies only the spanned bytes otherwise.
//! - [`StreamReader::search`] finds a pattern even when it straddles slice
//!   boundaries, returning the position just past the match.
//!
//! ```
//! use slicestream::StreamReader;
//!
//! let mut reader = StreamReader::new();
//! reader.push(&b"GET / HTTP/1.1\r"[..]);
//! reader.push(&b"\nHost: example.com\r\n"[..]);
//!
//! let end = reader.search(b"\r\n", 0).unwrap();
//! assert_eq!(end, 16);
//! assert_eq!(reader.read(end - 2, 0).unwrap(), &b"GET / HTTP/1.1"[..]);
//! ```
//!
//! The reader is not synchronized. Appends and queries from different threads
//! must be serialized by the owner, typically one reader per reassembled flow.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod config;
mod error;
mod payload;
mod read;
mod resolver;
mod search;
mod store;
mod value;

use bytes::Bytes;
use log::debug;

pub use crate::config::{Config, EmptyPatternMatch};
pub use crate::error::Error;
pub use crate::payload::Payload;
pub use crate::resolver::Span;
pub use crate::value::Value;

use crate::store::SliceStore;

/// Logical byte stream assembled from appended slices.
///
/// Slices are held by shared ownership and never mutated, split or merged.
/// Dropping the reader releases its references to them.
#[derive(Debug, Clone, Default)]
pub struct StreamReader {
	store: SliceStore,
	config: Config,
}

impl StreamReader {
	/// Create an empty reader with the default configuration.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an empty reader with the given configuration.
	#[must_use]
	pub fn with_config(config: Config) -> Self {
		Self {
			store: SliceStore::new(),
			config,
		}
	}

	/// The active configuration.
	#[must_use]
	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Append a slice to the end of the stream.
	///
	/// `Bytes` inputs are stored without copying.
	pub fn push(&mut self, slice: impl Into<Bytes>) {
		self.store.push(slice.into());
	}

	/// Append every slice of `payload`, in order.
	///
	/// Equivalent to calling [`push`](Self::push) once per contained slice.
	pub fn add_payload<P>(&mut self, payload: &P)
	where
		P: Payload + ?Sized,
	{
		let slices = payload.slices();
		debug!("append payload of {} slices", slices.len());
		self.store.extend(slices.iter().cloned());
	}

	/// Total number of bytes in the stream.
	#[must_use]
	pub fn len(&self) -> usize {
		self.store.len()
	}

	/// Whether the stream holds no bytes.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Number of slices appended so far, empty ones included.
	#[must_use]
	pub fn slice_count(&self) -> usize {
		self.store.slice_count()
	}

	/// Iterate over the held slices in stream order.
	pub fn slices(&self) -> impl ExactSizeIterator<Item = &Bytes> {
		self.store.slices().iter()
	}

	/// Resolve `[offset, offset + length)` to the slices covering it.
	///
	/// The range is truncated to the current stream end. Returns `None` when
	/// `offset >= len()`.
	#[must_use]
	pub fn resolve(&self, length: usize, offset: usize) -> Option<Span> {
		self.store.resolve(length, offset)
	}

	/// Materialize the whole stream.
	#[must_use]
	pub fn to_bytes(&self) -> Bytes {
		self.read(self.len(), 0).unwrap_or_default()
	}
}
