// ══════════════════════════════════════════════════════════════════════════════
// TIMESTAMP MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Renders the "DD/MM/YYYY - H:M:S" stamp at the front of every log line.
// Day and month are zero-padded; year, hour, minute and second are not.
// Seconds come from UTC while everything else is local time. The mix is kept
// as-is so existing log files stay comparable.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};

/// Stamp for the current instant.
pub fn now() -> String {
	format_timestamp(&Local::now())
}

pub fn format_timestamp<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
	let utc_seconds = date.with_timezone(&Utc).second();
	format!(
		"{:02}/{:02}/{} - {}:{}:{}",
		date.day(),
		date.month(),
		date.year(),
		date.hour(),
		date.minute(),
		utc_seconds,
	)
}
