// ══════════════════════════════════════════════════════════════════════════════
// MESSAGE MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The payload handed to a logger. Most calls pass plain text, but any level
// accepts a structured value (or a callable description) as well. The one-line
// form written to console and file is the default string coercion below, never
// a full serialization: keyed structures read "[object Object]" and sequences
// are flattened with commas.

use std::fmt;
use serde::Serialize;
use serde_json::{Number, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
	Text(String),
	Value(Value),
	Callable {
		name: Option<String>,
		source: String,
	},
}

impl Message {
	/// Serializes any serde value into a structured message.
	pub fn structured<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Self> {
		serde_json::to_value(value).map(Message::Value)
	}

	pub fn callable(name: Option<&str>, source: impl Into<String>) -> Self {
		Message::Callable {
			name: name.filter(|n| !n.is_empty()).map(str::to_string),
			source: source.into(),
		}
	}

	/// Runtime type name, as a dynamic `typeof` would report it.
	pub fn type_name(&self) -> &'static str {
		match self {
			Message::Text(_) => "string",
			Message::Callable { .. } => "function",
			Message::Value(value) => match value {
				Value::String(_) => "string",
				Value::Number(_) => "number",
				Value::Bool(_) => "boolean",
				Value::Null | Value::Array(_) | Value::Object(_) => "object",
			},
		}
	}

	/// True for sequences and keyed structures; null is not structured.
	pub fn is_structured(&self) -> bool {
		matches!(self, Message::Value(Value::Array(_) | Value::Object(_)))
	}
}

impl fmt::Display for Message {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Message::Text(text) => f.write_str(text),
			Message::Callable { source, .. } => f.write_str(source),
			Message::Value(value) => f.write_str(&coerce(value)),
		}
	}
}

impl From<&str> for Message {
	fn from(text: &str) -> Self {
		Message::Text(text.to_string())
	}
}

impl From<String> for Message {
	fn from(text: String) -> Self {
		Message::Text(text)
	}
}

impl From<&String> for Message {
	fn from(text: &String) -> Self {
		Message::Text(text.clone())
	}
}

impl From<Value> for Message {
	fn from(value: Value) -> Self {
		Message::Value(value)
	}
}

/// Default string coercion of a structured value.
pub fn coerce(value: &Value) -> String {
	match value {
		Value::Null => "null".to_string(),
		Value::Bool(b) => b.to_string(),
		Value::Number(n) => number_text(n),
		Value::String(s) => s.clone(),
		Value::Array(items) => items
			.iter()
			.map(|item| match item {
				Value::Null => String::new(),
				other => coerce(other),
			})
			.collect::<Vec<_>>()
			.join(","),
		Value::Object(_) => "[object Object]".to_string(),
	}
}

// Integral floats print without a fractional part ("1", not "1.0"). Past
// 1e21, and below 1e-6, floats switch to exponent form ("1e+21", "1e-7").
fn number_text(n: &Number) -> String {
	if let Some(i) = n.as_i64() {
		return i.to_string();
	}
	if let Some(u) = n.as_u64() {
		return u.to_string();
	}
	match n.as_f64() {
		Some(f) => float_text(f),
		None => n.to_string(),
	}
}

fn float_text(f: f64) -> String {
	let magnitude = f.abs();
	if magnitude != 0.0 && (magnitude >= 1e21 || magnitude < 1e-6) {
		let exp = format!("{:e}", f);
		return match exp.split_once('e') {
			Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
			_ => exp,
		};
	}
	f.to_string()
}
