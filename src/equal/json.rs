use std::io::Read;

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::equal::Result;
use crate::equal::value::{Record, Value};

/// Parse a JSON document into a [`Value`], keeping object key order.
pub fn from_json_str(input: &str) -> Result<Value> {
	let json: JsonValue = serde_json::from_str(input)?;
	debug!(bytes = input.len(), "parsed json document");
	Ok(Value::from(json))
}

/// Read a JSON document from a stream into a [`Value`].
pub fn from_json_reader(reader: impl Read) -> Result<Value> {
	let json: JsonValue = serde_json::from_reader(reader)?;
	Ok(Value::from(json))
}

impl From<JsonValue> for Value {
	/// JSON has no absence marker or big integers: every number becomes an `f64`.
	fn from(json: JsonValue) -> Self {
		match json {
			JsonValue::Null => Self::Null,
			JsonValue::Bool(v) => Self::bool(v),
			JsonValue::Number(v) => Self::number(v.as_f64().unwrap_or(f64::NAN)),
			JsonValue::String(v) => Self::string(v),
			JsonValue::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
			JsonValue::Object(map) => Self::Record(map.into_iter().map(|(key, value)| (key, Self::from(value))).collect::<Record>()),
		}
	}
}
