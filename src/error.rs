// ══════════════════════════════════════════════════════════════════════════════
// ERROR MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Failures a logger can surface. Nothing is retried or swallowed: the first
// error hit during a call is handed back to the caller.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
	/// Rejected construction options.
	#[error("invalid logger configuration: {0}")]
	Configuration(String),

	/// Directory creation or file append failed.
	#[error("cannot write log file '{}': {source}", .path.display())]
	Filesystem {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// Writing to stdout/stderr failed.
	#[error("cannot write to console: {0}")]
	Console(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, LoggerError>;
