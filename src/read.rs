/* src/read.rs */

use bytes::{Bytes, BytesMut};
use log::debug;

use crate::StreamReader;
use crate::resolver::Span;

impl StreamReader {
	/// Read up to `length` bytes starting at logical `offset`.
	///
	/// Returns `None` when `offset >= len()`. Otherwise the result holds
	/// `min(length, len() - offset)` bytes: a short read means the stream has
	/// not received that much data yet.
	///
	/// A range inside a single slice is returned as a view into that slice;
	/// a range spanning slices is copied into a fresh buffer.
	///
	/// ```
	/// use slicestream::StreamReader;
	///
	/// let mut reader = StreamReader::new();
	/// reader.push(&b"AB"[..]);
	/// reader.push(&b"C"[..]);
	/// assert_eq!(reader.read(2, 1).unwrap(), &b"BC"[..]);
	/// assert_eq!(reader.read(5, 0).unwrap(), &b"ABC"[..]);
	/// assert!(reader.read(1, 3).is_none());
	/// ```
	#[must_use]
	pub fn read(&self, length: usize, offset: usize) -> Option<Bytes> {
		let span = self.store.resolve(length, offset)?;
		if span.is_single() {
			let slice = self.store.get(span.first);
			return Some(slice.slice(span.local..span.local + span.len));
		}

		debug!(
			"materialize {} bytes at {offset} across slices {}..={}",
			span.len, span.first, span.last
		);
		let mut out = BytesMut::with_capacity(span.len);
		for chunk in self.chunks(span) {
			out.extend_from_slice(chunk);
		}
		Some(out.freeze())
	}

	/// Copy bytes starting at logical `offset` into `buf`.
	///
	/// Returns the number of bytes written, at most `buf.len()`; `0` when
	/// `offset >= len()`.
	pub fn read_into(&self, buf: &mut [u8], offset: usize) -> usize {
		let Some(span) = self.store.resolve(buf.len(), offset) else {
			return 0;
		};
		let mut written = 0;
		for chunk in self.chunks(span) {
			buf[written..written + chunk.len()].copy_from_slice(chunk);
			written += chunk.len();
		}
		written
	}

	/// The covered part of each slice in `span`, in order.
	///
	/// The first chunk skips `span.local` bytes, the last stops at the end of
	/// the span, and slices in between are yielded whole.
	fn chunks(&self, span: Span) -> impl Iterator<Item = &[u8]> {
		let mut local = span.local;
		let mut remaining = span.len;
		self.store.slices()[span.first..=span.last]
			.iter()
			.map(move |slice| {
				let take = (slice.len() - local).min(remaining);
				let chunk = &slice[local..local + take];
				local = 0;
				remaining -= take;
				chunk
			})
	}
}
