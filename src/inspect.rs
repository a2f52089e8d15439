// ══════════════════════════════════════════════════════════════════════════════
// INSPECT MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Builds the verbose debug dump printed when a structured value is logged at
// debug level. A message is classified into a shape once, and the dump is
// produced from that shape: type name, shape flag, then size, keys or name,
// and the value itself (pretty-printed with 2-space indent where structured).

use colored::*;
use serde_json::{Map, Value};
use crate::constants::{ANONYMOUS_FUNCTION, DEBUG_FOOTER, DEBUG_HEADER, NO_LENGTH};
use crate::message::{coerce, Message};

/// What a message looks like at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
	Sequence(&'a [Value]),
	Keyed(&'a Map<String, Value>),
	Callable {
		name: Option<&'a str>,
		source: &'a str,
	},
	Primitive(&'a Message),
}

impl<'a> Shape<'a> {
	pub fn classify(message: &'a Message) -> Self {
		match message {
			Message::Value(Value::Array(items)) => Shape::Sequence(items),
			Message::Value(Value::Object(map)) => Shape::Keyed(map),
			Message::Callable { name, source } => Shape::Callable {
				name: name.as_deref(),
				source: source.as_str(),
			},
			other => Shape::Primitive(other),
		}
	}
}

/// One labeled line of the dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
	pub label: &'static str,
	pub value: String,
}

impl Field {
	fn new(label: &'static str, value: impl ToString) -> Self {
		Field { label, value: value.to_string() }
	}
}

/// Labeled fields describing `message`, without banners or color.
pub fn debug_fields(message: &Message) -> Vec<Field> {
	let mut fields = vec![Field::new("Type", message.type_name())];

	match Shape::classify(message) {
		Shape::Sequence(items) => {
			fields.push(Field::new("Is Array", true));
			fields.push(Field::new("Length", items.len()));
			fields.push(Field::new("Value", pretty(message)));
		}
		Shape::Keyed(map) => {
			let keys = map.keys().map(String::as_str).collect::<Vec<_>>().join(", ");
			fields.push(Field::new("Is Object", true));
			fields.push(Field::new("Keys", keys));
			fields.push(Field::new("Value", pretty(message)));
		}
		Shape::Callable { name, source } => {
			fields.push(Field::new("Is Function", true));
			fields.push(Field::new("Name", name.unwrap_or(ANONYMOUS_FUNCTION)));
			fields.push(Field::new("Function Body", source));
		}
		Shape::Primitive(value) => {
			fields.push(Field::new("Value", value));
			if let Some(length) = primitive_length(value) {
				fields.push(Field::new("Length", length));
			}
		}
	}

	fields
}

/// Plain-text dump: header, one `Label: value` line per field, footer and a
/// trailing blank line.
pub fn format_debug(message: &Message) -> Vec<String> {
	let mut lines = vec![DEBUG_HEADER.to_string()];
	lines.extend(debug_fields(message).iter().map(|f| format!("{}: {}", f.label, f.value)));
	lines.push(DEBUG_FOOTER.to_string());
	lines.push(String::new());
	lines
}

/// Colorized counterpart of [`format_debug`] for the console.
pub fn render_debug(message: &Message) -> Vec<String> {
	let mut lines = vec![DEBUG_HEADER.magenta().on_magenta().bold().to_string()];
	for field in debug_fields(message) {
		let label = format!("{}:", field.label);
		lines.push(format!("{} {}", label.as_str().magenta().bold(), field.value.as_str().magenta().italic()));
	}
	lines.push(DEBUG_FOOTER.magenta().on_magenta().bold().to_string());
	lines.push(String::new());
	lines
}

fn pretty(message: &Message) -> String {
	match message {
		Message::Value(value) => serde_json::to_string_pretty(&integral(value)).unwrap_or_else(|_| coerce(value)),
		other => other.to_string(),
	}
}

// Integral floats print as integers ("2", not "2.0"), matching the one-line form.
fn integral(value: &Value) -> Value {
	match value {
		Value::Number(n) if n.is_f64() => match n.as_f64() {
			Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Value::from(f as i64),
			_ => value.clone(),
		},
		Value::Array(items) => Value::Array(items.iter().map(integral).collect()),
		Value::Object(map) => Value::Object(map.iter().map(|(k, v)| (k.clone(), integral(v))).collect()),
		other => other.clone(),
	}
}

// Text reports its UTF-16 length; zero-length text and every number report
// "N/A". Other primitives get no length line at all.
fn primitive_length(message: &Message) -> Option<String> {
	let text_length = |s: &str| match s.encode_utf16().count() {
		0 => NO_LENGTH.to_string(),
		n => n.to_string(),
	};

	match message {
		Message::Text(s) | Message::Value(Value::String(s)) => Some(text_length(s)),
		Message::Value(Value::Number(_)) => Some(NO_LENGTH.to_string()),
		_ => None,
	}
}
