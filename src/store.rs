/* src/store.rs */

use alloc::vec::Vec;

use bytes::Bytes;
use log::trace;

/// Append-only sequence of shared slices.
///
/// `ends[i]` is the logical offset one past the last byte of `slices[i]`, so
/// the total length is always `ends.last()` and cannot drift from the slices.
#[derive(Debug, Clone, Default)]
pub(crate) struct SliceStore {
	slices: Vec<Bytes>,
	ends: Vec<usize>,
}

impl SliceStore {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn len(&self) -> usize {
		self.ends.last().copied().unwrap_or(0)
	}

	pub(crate) fn slice_count(&self) -> usize {
		self.slices.len()
	}

	pub(crate) fn slices(&self) -> &[Bytes] {
		&self.slices
	}

	pub(crate) fn ends(&self) -> &[usize] {
		&self.ends
	}

	pub(crate) fn get(&self, index: usize) -> &Bytes {
		&self.slices[index]
	}

	/// Logical offset of the first byte of slice `index`.
	pub(crate) fn start_of(&self, index: usize) -> usize {
		self.ends[index] - self.slices[index].len()
	}

	pub(crate) fn push(&mut self, slice: Bytes) {
		let end = self.len() + slice.len();
		trace!("append slice #{} ({} bytes), total {end}", self.slices.len(), slice.len());
		self.ends.push(end);
		self.slices.push(slice);
	}

	pub(crate) fn extend<I>(&mut self, slices: I)
	where
		I: IntoIterator<Item = Bytes>,
	{
		let slices = slices.into_iter();
		let (lower, _) = slices.size_hint();
		self.slices.reserve(lower);
		self.ends.reserve(lower);
		for slice in slices {
			self.push(slice);
		}
	}
}
