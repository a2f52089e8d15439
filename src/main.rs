// ╔══════════════════════════════════════════════════════════════════════════════╗
// ║                               BF-LOGGER                                      ║
// ║                   Leveled, colored, file-backed logging                      ║
// ╚══════════════════════════════════════════════════════════════════════════════╝
//
// Command-line front end for the logger. Emits one message at a chosen level,
// or runs the demo sequence showing every level and a structured debug dump.
//
// Options mirror the logger's construction options:
//   --save-to-file     append every line to <file-path>/<level>.txt
//   --file-path DIR    directory for the level files (default ./logs)
//
// ══════════════════════════════════════════════════════════════════════════════

use anyhow::{Context, Result};
use bf_logger::{Logger, LoggerConfig, Message};
use clap::{Parser, Subcommand};
use serde::Serialize;

/// Leveled console logging with optional per-level files
#[derive(Parser)]
#[command(name = "bf-logger")]
#[command(version)]
#[command(about = "Print timestamped, colored log lines", long_about = None)]
struct Cli {
	/// Append every line to <file-path>/<level>.txt
	#[arg(long, global = true)]
	save_to_file: bool,

	/// Directory holding the level files
	#[arg(long, global = true)]
	file_path: Option<String>,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Log an info message
	Info {
		message: String,
	},

	/// Log a warning
	Warn {
		message: String,
	},

	/// Log an error
	Error {
		message: String,
	},

	/// Log a debug message or dump a value
	Debug {
		message: String,

		/// Parse the message as JSON; arrays and objects print a full dump
		#[arg(long)]
		json: bool,
	},

	/// Run every level once, then dump a nested record
	Demo,
}

#[derive(Serialize)]
struct Address {
	street: &'static str,
	number: u32,
}

#[derive(Serialize)]
struct User {
	name: &'static str,
	age: u32,
	address: Address,
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	let mut config = LoggerConfig::new().save_to_file(cli.save_to_file);
	if let Some(path) = cli.file_path {
		config = config.file_path(path);
	}
	let logger = Logger::new(config)?;

	match cli.command {
		Commands::Info { message } => logger.info(message)?,
		Commands::Warn { message } => logger.warn(message)?,
		Commands::Error { message } => logger.error(message)?,
		Commands::Debug { message, json } => {
			let message = if json {
				let value: serde_json::Value = serde_json::from_str(&message)
					.with_context(|| format!("'{}' is not valid JSON", message))?;
				Message::from(value)
			} else {
				Message::from(message)
			};
			logger.debug(message)?;
		}
		Commands::Demo => demo(&logger)?,
	}

	Ok(())
}

fn demo(logger: &Logger) -> Result<()> {
	let user = User {
		name: "bruno",
		age: 28,
		address: Address { street: "vitoria", number: 184 },
	};

	logger.info("This is an info message")?;
	logger.warn("This is a warning message")?;
	logger.error("This is an error message")?;
	logger.debug("This is a debug message")?;
	logger.debug(Message::structured(&user)?)?;
	Ok(())
}
