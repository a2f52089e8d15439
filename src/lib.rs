// ══════════════════════════════════════════════════════════════════════════════
// BF-LOGGER
// Leveled console logging with optional per-level files
// ══════════════════════════════════════════════════════════════════════════════
//
// Messages are stamped ("DD/MM/YYYY - H:M:S") and tagged with their level,
// printed in a per-level color, and optionally appended to `<dir>/<level>.txt`.
// Structured values logged at debug level print a field-by-field dump.
//
//   let logger = Logger::new(LoggerConfig::new().save_to_file(true))?;
//   logger.info("server started")?;
//   logger.debug(json!({ "port": 8080 }))?;
//
// Each logger is independent. There is no global instance.

pub mod config;
pub mod constants;
pub mod error;
pub mod inspect;
pub mod io;
pub mod logger;
pub mod message;
pub mod timestamp;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use inspect::{format_debug, Shape};
pub use logger::{format_line, LogLevel, Logger};
pub use message::Message;
