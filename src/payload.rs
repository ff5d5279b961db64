/* src/payload.rs */

use alloc::vec::Vec;

use bytes::Bytes;

/// An ordered group of slices appended to a stream as a unit.
///
/// Capture layers hand reassembled segments to a reader through this trait;
/// [`StreamReader::add_payload`](crate::StreamReader::add_payload) appends the
/// slices in the order returned here.
pub trait Payload {
	/// The contained slices, in stream order.
	fn slices(&self) -> &[Bytes];
}

impl Payload for [Bytes] {
	fn slices(&self) -> &[Bytes] {
		self
	}
}

impl<const N: usize> Payload for [Bytes; N] {
	fn slices(&self) -> &[Bytes] {
		self
	}
}

impl Payload for Vec<Bytes> {
	fn slices(&self) -> &[Bytes] {
		self
	}
}
