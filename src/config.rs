/* src/config.rs */

/// How [`StreamReader::search`](crate::StreamReader::search) treats an empty
/// pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EmptyPatternMatch {
	/// Match at the search offset, provided it is within the stream
	/// (`offset <= len`).
	#[default]
	AtOffset,
	/// Always match at position `0`, whatever the offset.
	AtStart,
}

/// Reader configuration.
///
/// ```
/// use slicestream::{Config, EmptyPatternMatch};
///
/// let config = Config::new().empty_pattern(EmptyPatternMatch::AtStart);
/// assert_eq!(config.empty_pattern, EmptyPatternMatch::AtStart);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[non_exhaustive]
pub struct Config {
	/// Empty-pattern search behavior.
	pub empty_pattern: EmptyPatternMatch,
}

impl Config {
	/// Default configuration.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the empty-pattern search behavior.
	#[must_use]
	pub fn empty_pattern(mut self, mode: EmptyPatternMatch) -> Self {
		self.empty_pattern = mode;
		self
	}
}
