/* src/search.rs */

use core::ops::Range;

use log::trace;

use crate::StreamReader;
use crate::config::EmptyPatternMatch;

impl StreamReader {
	/// Find `pattern` at or after logical `offset`.
	///
	/// Returns the position just past the first occurrence, so a caller can
	/// resume scanning after a delimiter by passing the result back as the
	/// next offset. The occurrence may straddle any number of slices.
	/// Returns `None` when there is no occurrence in the data received so far.
	///
	/// An empty pattern matches according to
	/// [`Config::empty_pattern`](crate::Config::empty_pattern).
	///
	/// ```
	/// use slicestream::StreamReader;
	///
	/// let mut reader = StreamReader::new();
	/// reader.push(&b"ab"[..]);
	/// reader.push(&b"cd"[..]);
	/// assert_eq!(reader.search(b"bc", 0), Some(3));
	/// assert_eq!(reader.search(b"bc", 2), None);
	/// ```
	#[must_use]
	pub fn search(&self, pattern: &[u8], offset: usize) -> Option<usize> {
		self.search_range(pattern, offset).map(|range| range.end)
	}

	/// Find `pattern` at or after `offset`, returning the matched range.
	#[must_use]
	pub fn search_range(&self, pattern: &[u8], offset: usize) -> Option<Range<usize>> {
		let Some(&first_byte) = pattern.first() else {
			return self.empty_match(offset);
		};
		let (mut index, mut from) = self.store.locate(offset)?;
		let last_start = self.len().checked_sub(pattern.len())?;
		let mut base = self.store.start_of(index);

		while index < self.store.slice_count() {
			let slice = self.store.get(index);
			while let Some(hit) = slice[from..].iter().position(|&b| b == first_byte) {
				let start = base + from + hit;
				if start > last_start {
					trace!("pattern of {} bytes not found from {offset}", pattern.len());
					return None;
				}
				if self.matches_at(pattern, start) {
					trace!("pattern of {} bytes found at {start}", pattern.len());
					return Some(start..start + pattern.len());
				}
				from += hit + 1;
			}
			base += slice.len();
			index += 1;
			from = 0;
		}
		None
	}

	fn empty_match(&self, offset: usize) -> Option<Range<usize>> {
		match self.config.empty_pattern {
			EmptyPatternMatch::AtOffset => (offset <= self.len()).then_some(offset..offset),
			EmptyPatternMatch::AtStart => Some(0..0),
		}
	}

	/// Compare the window at `start` against `pattern`, byte for byte.
	fn matches_at(&self, pattern: &[u8], start: usize) -> bool {
		self.read(pattern.len(), start).is_some_and(|window| {
			window.len() == pattern.len() && window.iter().zip(pattern).all(|(a, b)| a == b)
		})
	}
}
