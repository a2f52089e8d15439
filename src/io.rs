// ══════════════════════════════════════════════════════════════════════════════
// I/O MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Filesystem helpers for the per-level file sink: creating the log directory
// and appending one line to a level file. Every failure carries the path it
// was about.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use crate::error::{LoggerError, Result};

/// Creates `dir` and any missing parents. Existing directories are left alone.
pub fn ensure_dir(dir: &Path) -> Result<()> {
	if dir.exists() {
		return Ok(());
	}
	fs::create_dir_all(dir).map_err(|source| LoggerError::Filesystem { path: dir.to_path_buf(), source })
}

/// Appends `line` plus a newline to `path`, creating the file if absent.
pub fn append_line(path: &Path, line: &str) -> Result<()> {
	let fs_err = |source| LoggerError::Filesystem { path: path.to_path_buf(), source };

	let mut file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.map_err(fs_err)?;
	writeln!(file, "{}", line).map_err(fs_err)
}
