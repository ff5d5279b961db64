/* src/resolver.rs */

use crate::store::SliceStore;

/// Run of stored slices covering a logical byte range.
///
/// Produced by [`StreamReader::resolve`](crate::StreamReader::resolve). The
/// range is already truncated to the bytes currently in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
	/// Index of the slice holding the first byte of the range.
	pub first: usize,
	/// Index of the slice holding the last byte of the range.
	pub last: usize,
	/// Offset of the first byte inside slice `first`.
	pub local: usize,
	/// Number of bytes covered.
	pub len: usize,
}

impl Span {
	/// Whether the whole range lies inside a single slice.
	#[must_use]
	pub fn is_single(&self) -> bool {
		self.first == self.last
	}
}

impl SliceStore {
	/// Map a logical offset to `(slice index, local offset)`.
	///
	/// An offset that lands on a boundary belongs to the slice starting there;
	/// empty slices never own an offset.
	pub(crate) fn locate(&self, offset: usize) -> Option<(usize, usize)> {
		let index = self.ends().partition_point(|&end| end <= offset);
		if index == self.slice_count() {
			return None;
		}
		Some((index, offset - self.start_of(index)))
	}

	pub(crate) fn resolve(&self, length: usize, offset: usize) -> Option<Span> {
		let (first, local) = self.locate(offset)?;
		let stop = offset.saturating_add(length).min(self.len());
		// `ends` is sorted and its last entry is `len() >= stop`, so `last` is in bounds.
		let last = first + self.ends()[first..].partition_point(|&end| end < stop);
		Some(Span {
			first,
			last,
			local,
			len: stop - offset,
		})
	}
}
