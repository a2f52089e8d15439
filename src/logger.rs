// ══════════════════════════════════════════════════════════════════════════════
// LOGGER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Provides colored, timestamped console logging with four fixed levels, plus an
// optional append-only text file per level. Every level is always emitted;
// there is no threshold. Each logger owns its configuration and console
// handles, so separate instances never share state.
//
// Routing:
//   info  → stdout, blue
//   warn  → stderr, yellow
//   error → stderr, red
//   debug → stdout, magenta (structured values print the inspect dump instead)
//
// The one-line form is appended to `<dir>/<level>.txt` in every case when the
// file sink is enabled, including structured debug values.

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use colored::*;
use parking_lot::Mutex;
use crate::config::LoggerConfig;
use crate::constants::LOG_FILE_EXTENSION;
use crate::error::{LoggerError, Result};
use crate::inspect::render_debug;
use crate::io::{append_line, ensure_dir};
use crate::message::Message;
use crate::timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
	Info,
	Warn,
	Error,
	Debug,
}

impl LogLevel {
	pub const ALL: [LogLevel; 4] = [LogLevel::Info, LogLevel::Warn, LogLevel::Error, LogLevel::Debug];

	pub fn as_str(&self) -> &'static str {
		match self {
			LogLevel::Info => "info",
			LogLevel::Warn => "warn",
			LogLevel::Error => "error",
			LogLevel::Debug => "debug",
		}
	}

	/// File name of this level's sink, e.g. `warn.txt`.
	pub fn file_name(&self) -> String {
		format!("{}.{}", self.as_str(), LOG_FILE_EXTENSION)
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// `[<timestamp>]-[<LEVEL>]: <message>`
pub fn format_line(timestamp: &str, level: LogLevel, message: &Message) -> String {
	format!("[{}]-[{}]: {}", timestamp, level.as_str().to_uppercase(), message)
}

/// Console destination for one stream.
pub type Sink = Box<dyn Write + Send>;

struct Console {
	out: Sink,
	err: Sink,
}

impl Console {
	fn write(sink: &mut Sink, line: impl fmt::Display) -> Result<()> {
		writeln!(sink, "{}", line)
			.and_then(|_| sink.flush())
			.map_err(LoggerError::Console)
	}
}

pub struct Logger {
	save_to_file: bool,
	file_path: PathBuf,
	console: Mutex<Console>,
}

impl Logger {
	/// Builds a logger printing to the process stdout/stderr.
	pub fn new(config: LoggerConfig) -> Result<Self> {
		Self::with_console(config, Box::new(io::stdout()), Box::new(io::stderr()))
	}

	/// Builds a logger printing to the given sinks. `out` receives info and
	/// debug lines, `err` receives warn and error lines.
	pub fn with_console(config: LoggerConfig, out: Sink, err: Sink) -> Result<Self> {
		let file_path = config.resolve()?;

		if config.save_to_file {
			ensure_dir(&file_path)?;
		}

		Ok(Logger {
			save_to_file: config.save_to_file,
			file_path,
			console: Mutex::new(Console { out, err }),
		})
	}

	pub fn save_to_file(&self) -> bool {
		self.save_to_file
	}

	pub fn file_path(&self) -> &Path {
		&self.file_path
	}

	/// Path of the file `level` appends to.
	pub fn level_file(&self, level: LogLevel) -> PathBuf {
		self.file_path.join(level.file_name())
	}

	/// One-line form of `message`, stamped with the current time.
	pub fn format_message(&self, level: LogLevel, message: &Message) -> String {
		format_line(&timestamp::now(), level, message)
	}

	/// Prints `message` at `level` and appends it to the level file when the
	/// file sink is enabled. The console lock is held for the whole call so
	/// concurrent callers never interleave lines or appends.
	pub fn log(&self, level: LogLevel, message: impl Into<Message>) -> Result<()> {
		let message = message.into();

		let mut console = self.console.lock();
		let formatted = self.format_message(level, &message);
		match level {
			LogLevel::Info => Console::write(&mut console.out, formatted.blue())?,
			LogLevel::Warn => Console::write(&mut console.err, formatted.yellow())?,
			LogLevel::Error => Console::write(&mut console.err, formatted.red())?,
			LogLevel::Debug if message.is_structured() => {
				for line in render_debug(&message) {
					Console::write(&mut console.out, line)?;
				}
			}
			LogLevel::Debug => Console::write(&mut console.out, formatted.magenta())?,
		}

		self.write_to_file(level, &formatted)
	}

	/// Appends `text` to the level file. No-op while the file sink is off.
	pub fn write_to_file(&self, level: LogLevel, text: &str) -> Result<()> {
		if !self.save_to_file {
			return Ok(());
		}
		append_line(&self.level_file(level), text)
	}

	pub fn info(&self, message: impl Into<Message>) -> Result<()> {
		self.log(LogLevel::Info, message)
	}

	pub fn warn(&self, message: impl Into<Message>) -> Result<()> {
		self.log(LogLevel::Warn, message)
	}

	pub fn error(&self, message: impl Into<Message>) -> Result<()> {
		self.log(LogLevel::Error, message)
	}

	/// Logs text, or dumps a structured value field by field.
	pub fn debug(&self, message: impl Into<Message>) -> Result<()> {
		self.log(LogLevel::Debug, message)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use std::sync::Arc;
	use serde_json::json;
	use tempfile::TempDir;

	#[derive(Clone, Default)]
	struct Captured(Arc<Mutex<Vec<u8>>>);

	impl Captured {
		fn lines(&self) -> Vec<String> {
			let text = String::from_utf8_lossy(&self.0.lock()).to_string();
			strip_ansi(&text).lines().map(str::to_string).collect()
		}
	}

	impl Write for Captured {
		fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
			self.0.lock().extend_from_slice(buf);
			Ok(buf.len())
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	fn strip_ansi(text: &str) -> String {
		let mut plain = String::with_capacity(text.len());
		let mut chars = text.chars();
		while let Some(c) = chars.next() {
			if c == '\x1b' {
				for code in chars.by_ref() {
					if code == 'm' {
						break;
					}
				}
			} else {
				plain.push(c);
			}
		}
		plain
	}

	fn capturing(config: LoggerConfig) -> (Logger, Captured, Captured) {
		let (out, err) = (Captured::default(), Captured::default());
		let logger = Logger::with_console(config, Box::new(out.clone()), Box::new(err.clone())).unwrap();
		(logger, out, err)
	}

	// [DD/MM/YYYY - H:M:S]-[LEVEL]: message
	fn assert_line(line: &str, level: &str, message: &str) {
		let rest = line.strip_prefix('[').unwrap_or_else(|| panic!("no opening bracket: {line}"));
		let (stamp, rest) = rest.split_once("]-[").unwrap_or_else(|| panic!("no level: {line}"));
		assert_eq!(rest, format!("{level}]: {message}"));

		let (date, time) = stamp.split_once(" - ").unwrap();
		let date: Vec<&str> = date.split('/').collect();
		assert_eq!(date.len(), 3);
		assert!(date[0].len() == 2 && date[1].len() == 2);
		assert!(date.iter().all(|part| part.parse::<u32>().is_ok()));
		let time: Vec<&str> = time.split(':').collect();
		assert_eq!(time.len(), 3);
		assert!(time.iter().all(|part| part.parse::<u32>().is_ok()));
	}

	#[test]
	fn levels_route_to_their_stream() {
		let (logger, out, err) = capturing(LoggerConfig::default());

		logger.info("This is an info message").unwrap();
		logger.warn("This is a warning message").unwrap();
		logger.error("This is an error message").unwrap();
		logger.debug("This is a debug message").unwrap();

		let out = out.lines();
		let err = err.lines();
		assert_eq!(out.len(), 2);
		assert_eq!(err.len(), 2);
		assert_line(&out[0], "INFO", "This is an info message");
		assert_line(&out[1], "DEBUG", "This is a debug message");
		assert_line(&err[0], "WARN", "This is a warning message");
		assert_line(&err[1], "ERROR", "This is an error message");
	}

	#[test]
	fn format_line_shape() {
		let line = format_line("27/11/2024 - 9:5:3", LogLevel::Warn, &Message::from("disk low"));
		assert_eq!(line, "[27/11/2024 - 9:5:3]-[WARN]: disk low");
	}

	#[test]
	fn format_message_is_stamped() {
		let logger = Logger::with_console(LoggerConfig::default(), Box::new(io::sink()), Box::new(io::sink())).unwrap();
		for level in LogLevel::ALL {
			let line = logger.format_message(level, &Message::from("m"));
			assert_line(&line, &level.as_str().to_uppercase(), "m");
		}
	}

	#[test]
	fn structured_debug_prints_dump_instead_of_line() {
		let (logger, out, _) = capturing(LoggerConfig::default());
		logger.debug(json!(["a", "b", "c"])).unwrap();

		let out = out.lines();
		assert_eq!(out[0], "----- Debug Log -----");
		assert!(out.contains(&"Is Array: true".to_string()));
		assert!(out.contains(&"Length: 3".to_string()));
		assert!(!out.iter().any(|line| line.contains("]-[DEBUG]: ")));
	}

	#[test]
	fn keyed_debug_lists_keys() {
		let (logger, out, _) = capturing(LoggerConfig::default());
		logger.debug(json!({ "a": 1, "b": 2 })).unwrap();
		assert!(out.lines().contains(&"Keys: a, b".to_string()));
	}

	#[test]
	fn null_and_callable_debug_use_the_plain_line() {
		let (logger, out, _) = capturing(LoggerConfig::default());
		logger.debug(json!(null)).unwrap();
		logger.debug(Message::callable(Some("f"), "function f() {}")).unwrap();

		let out = out.lines();
		assert_eq!(out.len(), 2);
		assert_line(&out[0], "DEBUG", "null");
		assert_line(&out[1], "DEBUG", "function f() {}");
	}

	#[test]
	fn structured_values_at_other_levels_are_coerced() {
		let (logger, out, err) = capturing(LoggerConfig::default());
		logger.info(json!({ "user": "bruno" })).unwrap();
		logger.error(json!([1, 2])).unwrap();

		assert_line(&out.lines()[0], "INFO", "[object Object]");
		assert_line(&err.lines()[0], "ERROR", "1,2");
	}

	#[test]
	fn console_only_logger_never_touches_disk() {
		let temp_dir = TempDir::new().unwrap();
		let dir = temp_dir.path().join("logs");
		let (logger, _, _) = capturing(LoggerConfig::new().file_path(&dir));

		for level in LogLevel::ALL {
			logger.log(level, "nothing on disk").unwrap();
		}

		assert!(!dir.exists());
		assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
	}

	#[test]
	fn file_sink_creates_directory() {
		let temp_dir = TempDir::new().unwrap();
		let dir = temp_dir.path().join("logs-test");
		assert!(!dir.exists());

		let (logger, _, _) = capturing(LoggerConfig::new().save_to_file(true).file_path(&dir));

		assert!(dir.is_dir());
		assert_eq!(logger.file_path(), dir.as_path());
		assert!(logger.save_to_file());
	}

	#[test]
	fn every_level_appends_to_its_file() {
		let temp_dir = TempDir::new().unwrap();
		let (logger, _, _) = capturing(LoggerConfig::new().save_to_file(true).file_path(temp_dir.path()));

		for level in LogLevel::ALL {
			logger.log(level, format!("{level} message")).unwrap();
		}

		for level in LogLevel::ALL {
			let content = fs::read_to_string(temp_dir.path().join(level.file_name())).unwrap();
			let lines: Vec<&str> = content.lines().collect();
			assert_eq!(lines.len(), 1);
			assert_line(lines[0], &level.as_str().to_uppercase(), &format!("{level} message"));
		}
	}

	#[test]
	fn repeated_calls_append_repeated_lines() {
		let temp_dir = TempDir::new().unwrap();
		let info = temp_dir.path().join("info.txt");
		fs::write(&info, "kept\n").unwrap();

		let (logger, out, _) = capturing(LoggerConfig::new().save_to_file(true).file_path(temp_dir.path()));
		logger.info("same").unwrap();
		logger.info("same").unwrap();

		let content = fs::read_to_string(&info).unwrap();
		let lines: Vec<&str> = content.lines().collect();
		assert_eq!(lines.len(), 3);
		assert_eq!(lines[0], "kept");
		assert_line(lines[1], "INFO", "same");
		assert_line(lines[2], "INFO", "same");
		assert_eq!(out.lines().len(), 2);
	}

	#[test]
	fn structured_debug_persists_only_the_coerced_line() {
		let temp_dir = TempDir::new().unwrap();
		let (logger, _, _) = capturing(LoggerConfig::new().save_to_file(true).file_path(temp_dir.path()));
		logger.debug(json!({ "name": "bruno" })).unwrap();

		let content = fs::read_to_string(temp_dir.path().join("debug.txt")).unwrap();
		let lines: Vec<&str> = content.lines().collect();
		assert_eq!(lines.len(), 1);
		assert_line(lines[0], "DEBUG", "[object Object]");
	}

	#[test]
	fn write_to_file_is_a_no_op_when_disabled() {
		let temp_dir = TempDir::new().unwrap();
		let (logger, _, _) = capturing(LoggerConfig::new().file_path(temp_dir.path()));
		logger.write_to_file(LogLevel::Error, "ignored").unwrap();
		assert!(!logger.level_file(LogLevel::Error).exists());
	}

	#[test]
	fn append_failure_propagates() {
		let temp_dir = TempDir::new().unwrap();
		let dir = temp_dir.path().join("logs");
		let (logger, _, _) = capturing(LoggerConfig::new().save_to_file(true).file_path(&dir));

		// A directory where the level file should be makes the append fail
		fs::create_dir(dir.join("warn.txt")).unwrap();
		let err = logger.warn("boom").unwrap_err();
		assert!(matches!(err, LoggerError::Filesystem { .. }));
	}

	#[test]
	fn invalid_config_is_rejected() {
		let result = Logger::with_console(LoggerConfig::new().file_path(""), Box::new(io::sink()), Box::new(io::sink()));
		assert!(matches!(result, Err(LoggerError::Configuration(_))));
	}

	#[test]
	fn instances_are_isolated() {
		let first = TempDir::new().unwrap();
		let second = TempDir::new().unwrap();
		let (a, _, _) = capturing(LoggerConfig::new().save_to_file(true).file_path(first.path()));
		let (b, _, _) = capturing(LoggerConfig::new().file_path(second.path()));

		a.info("only here").unwrap();
		b.info("nowhere").unwrap();

		assert!(first.path().join("info.txt").exists());
		assert!(!second.path().join("info.txt").exists());
	}

	struct Broken;

	impl Write for Broken {
		fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
			Err(io::Error::new(io::ErrorKind::BrokenPipe, "console closed"))
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	#[test]
	fn console_failure_stops_the_call_before_the_file() {
		let temp_dir = TempDir::new().unwrap();
		let config = LoggerConfig::new().save_to_file(true).file_path(temp_dir.path());
		let logger = Logger::with_console(config, Box::new(Broken), Box::new(io::sink())).unwrap();

		let err = logger.info("lost").unwrap_err();
		assert!(matches!(err, LoggerError::Console(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
		assert!(!logger.level_file(LogLevel::Info).exists());

		// The other stream still works
		logger.warn("kept").unwrap();
		assert!(logger.level_file(LogLevel::Warn).exists());
	}

	#[test]
	fn shared_logger_never_interleaves_lines() {
		const THREADS: usize = 8;
		const CALLS: usize = 200;

		let temp_dir = TempDir::new().unwrap();
		let (logger, _, err) = capturing(LoggerConfig::new().save_to_file(true).file_path(temp_dir.path()));
		let logger = Arc::new(logger);

		let handles: Vec<_> = (0..THREADS)
			.map(|t| {
				let logger = Arc::clone(&logger);
				std::thread::spawn(move || {
					for i in 0..CALLS {
						logger.warn(format!("thread {t} call {i}")).unwrap();
					}
				})
			})
			.collect();
		for handle in handles {
			handle.join().unwrap();
		}

		let content = fs::read_to_string(logger.level_file(LogLevel::Warn)).unwrap();
		let lines: Vec<&str> = content.lines().collect();
		assert_eq!(lines.len(), THREADS * CALLS);
		for line in &lines {
			let (_, message) = line.split_once("]: ").unwrap();
			assert_line(line, "WARN", message);
			assert!(message.starts_with("thread "));
		}

		let console = err.lines();
		assert_eq!(console.len(), THREADS * CALLS);
		assert_eq!(console.iter().map(String::as_str).collect::<Vec<_>>(), lines);
	}
}
