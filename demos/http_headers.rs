/* demos/http_headers.rs */
#![allow(missing_docs)]

use bytes::Bytes;
use slicestream::StreamReader;

/// Header-line state for one direction of a TCP stream.
#[derive(Debug, Default)]
struct HeaderScanner {
	offset: usize,
	done: bool,
	content_length: Option<usize>,
}

impl HeaderScanner {
	/// Consume every complete `\r\n`-terminated line received so far.
	fn advance(&mut self, reader: &StreamReader) {
		while !self.done {
			let Some(line) = reader.search_range(b"\r\n", self.offset) else {
				return;
			};
			let length = line.start - self.offset;
			if length == 0 {
				self.done = true;
				self.offset = line.end;
				break;
			}
			let Some(raw) = reader.read(length, self.offset) else {
				return;
			};
			self.header(&raw);
			self.offset = line.end;
		}
	}

	fn header(&mut self, raw: &[u8]) {
		let text = String::from_utf8_lossy(raw);
		match text.split_once(':') {
			Some((key, value)) => {
				let (key, value) = (key.trim(), value.trim());
				println!("  {key} = {value}");
				if key.eq_ignore_ascii_case("Content-Length") {
					self.content_length = value.parse().ok();
				}
			}
			None => println!("request line: {text}"),
		}
	}
}

fn main() {
	let request: &[u8] =
		b"POST /submit HTTP/1.1\r\nHost: example.com\r\nContent-Length: 11\r\n\r\nhello world";

	// Segment sizes as they might arrive off the wire.
	let mut reader = StreamReader::new();
	let mut scanner = HeaderScanner::default();
	let mut start = 0;
	for size in [5, 19, 2, 1, 30, 7, 100] {
		let end = (start + size).min(request.len());
		reader.push(Bytes::copy_from_slice(&request[start..end]));
		start = end;
		scanner.advance(&reader);
		if start == request.len() {
			break;
		}
	}

	if let Some(length) = scanner.content_length {
		match reader.read(length, scanner.offset) {
			Some(body) if body.len() == length => {
				println!("body: {}", String::from_utf8_lossy(&body));
			}
			Some(body) => println!("body incomplete: {} of {length} bytes", body.len()),
			None => println!("body not received"),
		}
	}
	println!("{} bytes in {} slices", reader.len(), reader.slice_count());
}
