/* tests/properties.rs */
#![allow(missing_docs)]

mod helpers;

use quickcheck_macros::quickcheck;
use slicestream::StreamReader;

/// Turn arbitrary numbers into ascending cut points within `len`.
///
/// Duplicates are kept, so some partitions contain empty slices.
fn cuts(len: usize, raw: Vec<usize>) -> Vec<usize> {
	let mut cuts: Vec<usize> = raw.into_iter().map(|c| c % (len + 1)).collect();
	cuts.sort_unstable();
	cuts
}

/// Fold bytes onto a small alphabet so patterns actually occur.
fn narrow(bytes: Vec<u8>) -> Vec<u8> {
	bytes.into_iter().map(|b| b'a' + b % 3).collect()
}

#[quickcheck]
fn length_is_sum_of_slices(parts: Vec<Vec<u8>>) -> bool {
	let mut reader = StreamReader::new();
	let mut expected = 0;
	for part in parts {
		expected += part.len();
		reader.push(part);
		if reader.len() != expected {
			return false;
		}
	}
	true
}

#[quickcheck]
fn read_matches_contiguous(
	data: Vec<u8>,
	raw_cuts: Vec<usize>,
	length: usize,
	offset: usize,
) -> bool {
	let reader = helpers::split_at(&data, &cuts(data.len(), raw_cuts));
	let offset = offset % (data.len() + 2);
	let length = length % (data.len() + 2);
	let expected = (offset < data.len()).then(|| &data[offset..(offset + length).min(data.len())]);
	reader.read(length, offset).as_deref() == expected
}

#[quickcheck]
fn read_is_split_invariant(
	data: Vec<u8>,
	a: Vec<usize>,
	b: Vec<usize>,
	length: usize,
	offset: usize,
) -> bool {
	let left = helpers::split_at(&data, &cuts(data.len(), a));
	let right = helpers::split_at(&data, &cuts(data.len(), b));
	let offset = offset % (data.len() + 1);
	let length = length % (data.len() + 1);
	left.read(length, offset) == right.read(length, offset)
}

#[quickcheck]
fn read_into_matches_contiguous(
	data: Vec<u8>,
	raw_cuts: Vec<usize>,
	size: u8,
	offset: usize,
) -> bool {
	let reader = helpers::split_at(&data, &cuts(data.len(), raw_cuts));
	let offset = offset % (data.len() + 2);
	let mut buf = vec![0u8; usize::from(size)];
	let written = reader.read_into(&mut buf, offset);
	let expected = data.get(offset..).unwrap_or_default();
	let expected = &expected[..expected.len().min(buf.len())];
	buf[..written] == *expected
}

#[quickcheck]
fn search_matches_reference(
	data: Vec<u8>,
	raw_cuts: Vec<usize>,
	pattern: Vec<u8>,
	offset: usize,
) -> bool {
	let data = narrow(data);
	let mut pattern = narrow(pattern);
	pattern.truncate(4);
	let reader = helpers::split_at(&data, &cuts(data.len(), raw_cuts));
	let offset = offset % (data.len() + 2);
	reader.search(&pattern, offset) == helpers::reference_search(&data, &pattern, offset)
}

#[quickcheck]
fn search_finds_pattern_taken_from_stream(
	data: Vec<u8>,
	raw_cuts: Vec<usize>,
	start: usize,
	size: u8,
	offset: usize,
) -> bool {
	if data.is_empty() {
		return true;
	}
	let data = narrow(data);
	let start = start % data.len();
	let end = (start + usize::from(size % 6) + 1).min(data.len());
	let pattern = &data[start..end];
	let reader = helpers::split_at(&data, &cuts(data.len(), raw_cuts));
	let offset = offset % (start + 1);

	let Some(range) = reader.search_range(pattern, offset) else {
		return false;
	};
	range.start <= start
		&& range.end == range.start + pattern.len()
		&& Some(range.end) == helpers::reference_search(&data, pattern, offset)
}
