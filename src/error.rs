/* src/error.rs */

/// Errors produced when input handed to a [`StreamReader`](crate::StreamReader)
/// is malformed.
///
/// Absence of data is never an error: reads past the end and failed searches
/// are reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// The value offered as a slice is not a byte sequence.
	#[error("invalid slice: expected bytes, got {found}")]
	InvalidSlice {
		/// Kind of the rejected value.
		found: &'static str,
	},

	/// The value offered as a payload is not an ordered sequence of slices.
	#[error("invalid payload: expected a list of slices, got {found}")]
	InvalidPayload {
		/// Kind of the rejected value.
		found: &'static str,
	},

	/// A payload contained an element that is not a byte sequence.
	///
	/// Nothing from the payload was appended.
	#[error("invalid slice at payload index {index}: expected bytes, got {found}")]
	InvalidSliceInPayload {
		/// Position of the offending element inside the payload.
		index: usize,
		/// Kind of the rejected value.
		found: &'static str,
	},

	/// A length, offset or pattern argument could not be used.
	#[error("invalid argument {field}: {reason}")]
	InvalidArgument {
		/// Name of the argument.
		field: &'static str,
		/// Why the argument was rejected.
		reason: &'static str,
	},
}
