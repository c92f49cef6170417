use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::config::SourceConfig;

/// Where a loaded text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextOrigin {
	/// Read from the configured file.
	File(PathBuf),
	/// The configured file was missing; the fallback literal was used instead.
	Fallback { missing: PathBuf },
	/// File reading was disabled; the fallback literal was used.
	Inline,
}

/// A text together with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedText {
	/// Full text contents.
	pub text: String,
	/// File, fallback or inline.
	pub origin: TextOrigin,
}

/// Reads a whole UTF-8 text file into memory.
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Loads the text described by `config`.
///
/// - `use_file == false` returns the fallback literal
/// - A missing file is recovered from by returning the fallback literal,
///   with `TextOrigin::Fallback` so the caller can report it
///
/// # Errors
/// Any I/O error other than `NotFound` (permissions, invalid UTF-8, ...).
pub fn load_text(config: &SourceConfig) -> io::Result<LoadedText> {
	if !config.use_file {
		return Ok(LoadedText { text: config.fallback_text.clone(), origin: TextOrigin::Inline });
	}

	match read_file(&config.file_path) {
		Ok(text) => {
			info!("read {} characters from {}", text.chars().count(), config.file_path.display());
			Ok(LoadedText { text, origin: TextOrigin::File(config.file_path.clone()) })
		}
		Err(e) if e.kind() == io::ErrorKind::NotFound => {
			warn!("{} not found, using fallback text", config.file_path.display());
			Ok(LoadedText {
				text: config.fallback_text.clone(),
				origin: TextOrigin::Fallback { missing: config.file_path.clone() },
			})
		}
		Err(e) => Err(e),
	}
}
