/* tests/helpers/mod.rs */

#![allow(dead_code)]

use bytes::Bytes;
use slicestream::StreamReader;

/// Build a reader from the given slices, appended in order.
pub(crate) fn reader(parts: &[&[u8]]) -> StreamReader {
	let mut reader = StreamReader::new();
	for part in parts {
		reader.push(Bytes::copy_from_slice(part));
	}
	reader
}

/// Split `data` at the given cut points and build a reader from the pieces.
///
/// Cut points must be ascending and within `data`; duplicates produce empty
/// slices.
pub(crate) fn split_at(data: &[u8], cuts: &[usize]) -> StreamReader {
	let mut reader = StreamReader::new();
	let mut start = 0;
	for &cut in cuts {
		reader.push(Bytes::copy_from_slice(&data[start..cut]));
		start = cut;
	}
	reader.push(Bytes::copy_from_slice(&data[start..]));
	reader
}

/// Split `data` into single-byte slices.
pub(crate) fn byte_per_slice(data: &[u8]) -> StreamReader {
	let cuts: Vec<usize> = (1..data.len()).collect();
	split_at(data, &cuts)
}

/// A captured HTTP request, as hex, used as a realistic fixture.
pub(crate) fn http_request() -> Vec<u8> {
	hex::decode(concat!(
		"474554202f696e6465782e68746d6c20485454502f312e310d0a", // GET /index.html HTTP/1.1\r\n
		"486f73743a206578616d706c652e636f6d0d0a",               // Host: example.com\r\n
		"436f6e74656e742d4c656e6774683a20350d0a",               // Content-Length: 5\r\n
		"0d0a",                                                 // \r\n
		"68656c6c6f",                                           // hello
	))
	.unwrap()
}

/// Naive reference search over a contiguous buffer.
pub(crate) fn reference_search(data: &[u8], pattern: &[u8], offset: usize) -> Option<usize> {
	if offset > data.len() {
		return None;
	}
	if pattern.is_empty() {
		return Some(offset);
	}
	data[offset..]
		.windows(pattern.len())
		.position(|w| w == pattern)
		.map(|p| offset + p + pattern.len())
}
