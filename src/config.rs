// ══════════════════════════════════════════════════════════════════════════════
// CONFIG MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Construction options for a logger. A config is plain data; it is checked and
// resolved once when the logger is built and never changes afterwards.

use std::path::{Path, PathBuf};
use crate::constants::DEFAULT_LOG_DIR;
use crate::error::{LoggerError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerConfig {
	pub save_to_file: bool,
	pub file_path: Option<PathBuf>,
}

impl LoggerConfig {
	pub fn new() -> Self {
		Self::default()
	}

	/// Enables or disables the per-level file sink.
	pub fn save_to_file(mut self, enabled: bool) -> Self {
		self.save_to_file = enabled;
		self
	}

	/// Directory holding the per-level files.
	pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
		self.file_path = Some(path.into());
		self
	}

	/// Validates the options and returns the directory the logger will use.
	///
	/// An empty path counts as unset: with the file sink enabled it falls back to
	/// [`DEFAULT_LOG_DIR`], with the sink disabled it is rejected.
	pub fn resolve(&self) -> Result<PathBuf> {
		let explicit = self.file_path.as_deref().filter(|p| !is_empty(p));

		if !self.save_to_file && self.file_path.is_some() && explicit.is_none() {
			return Err(LoggerError::Configuration(
				"file_path is empty while save_to_file is off".to_string(),
			));
		}

		Ok(explicit.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR)))
	}
}

fn is_empty(path: &Path) -> bool {
	path.as_os_str().is_empty()
}
