//! Text source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Literal used when no file is read.
pub const DEFAULT_TEXT: &str = "The quick brown fox jumps over the lazy dog.";

/// File read when `use_file` is set and no path is given.
pub const DEFAULT_FILE_PATH: &str = "sample.txt";

/// Where a driver takes its text from.
///
/// With `use_file` set, `file_path` is read and `fallback_text` is only
/// used if that file does not exist. Otherwise `fallback_text` is used
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
	/// Read `file_path` instead of using `fallback_text` directly.
	#[serde(default = "default_true")]
	pub use_file: bool,
	/// Text file to read.
	#[serde(default = "default_file_path")]
	pub file_path: PathBuf,
	/// Inline text, also used when `file_path` does not exist.
	#[serde(default = "default_fallback_text")]
	pub fallback_text: String,
}

fn default_true() -> bool {
	true
}
fn default_file_path() -> PathBuf {
	PathBuf::from(DEFAULT_FILE_PATH)
}
fn default_fallback_text() -> String {
	DEFAULT_TEXT.to_owned()
}

impl Default for SourceConfig {
	fn default() -> Self {
		Self {
			use_file: default_true(),
			file_path: default_file_path(),
			fallback_text: default_fallback_text(),
		}
	}
}

impl SourceConfig {
	/// Sets whether `file_path` is read at all.
	pub fn with_use_file(mut self, use_file: bool) -> Self {
		self.use_file = use_file;
		self
	}

	/// Sets the file to read.
	pub fn with_file_path<P: Into<PathBuf>>(mut self, file_path: P) -> Self {
		self.file_path = file_path.into();
		self
	}

	/// Sets the literal used inline or when the file is missing.
	pub fn with_fallback_text<S: Into<String>>(mut self, text: S) -> Self {
		self.fallback_text = text.into();
		self
	}
}
