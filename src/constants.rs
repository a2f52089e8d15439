// ══════════════════════════════════════════════════════════════════════════════
// CONSTANTS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Defines crate-wide constants used throughout the codebase.
// - DEFAULT_LOG_DIR: where per-level files land when no path is configured
// - LOG_FILE_EXTENSION: extension of each per-level file
// - DEBUG_HEADER / DEBUG_FOOTER: banners around the structured debug dump

pub const DEFAULT_LOG_DIR: &str = "./logs";

pub const LOG_FILE_EXTENSION: &str = "txt";

pub const DEBUG_HEADER: &str = "----- Debug Log -----";
pub const DEBUG_FOOTER: &str = "----- End Log -----";

/// Name printed for callables that carry no name of their own.
pub const ANONYMOUS_FUNCTION: &str = "anonymous function";

/// Printed in place of a length that is zero or undefined.
pub const NO_LENGTH: &str = "N/A";
