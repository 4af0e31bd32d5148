use std::fmt;

use indexmap::IndexMap;
use num_bigint::BigInt;

/// Structural category of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
	/// Explicitly empty value.
	Null,
	/// No value supplied.
	Absent,
	/// Boolean, number, big integer, or string.
	Primitive,
	/// Ordered list of values.
	Sequence,
	/// String-keyed mapping.
	Record,
}

impl Variant {
	/// Stable lowercase label used in CLI output.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Absent => "absent",
			Self::Primitive => "primitive",
			Self::Sequence => "sequence",
			Self::Record => "record",
		}
	}
}

/// Scalar payload of a [`Value::Primitive`].
#[derive(Debug, Clone)]
pub enum Primitive {
	/// Boolean.
	Bool(bool),
	/// Double precision number.
	Number(f64),
	/// Arbitrary-precision integer.
	BigInt(BigInt),
	/// Text.
	String(Box<str>),
}

/// Loosely typed input to the comparator.
#[derive(Debug, Clone)]
pub enum Value {
	/// Explicitly empty value.
	Null,
	/// No value supplied.
	Absent,
	/// Scalar value.
	Primitive(Primitive),
	/// Ordered, arbitrarily nested list.
	Sequence(Vec<Value>),
	/// Key-value record in insertion order.
	Record(Record),
}

impl Value {
	/// Classify the value by its runtime tag.
	pub fn variant(&self) -> Variant {
		match self {
			Self::Null => Variant::Null,
			Self::Absent => Variant::Absent,
			Self::Primitive(_) => Variant::Primitive,
			Self::Sequence(_) => Variant::Sequence,
			Self::Record(_) => Variant::Record,
		}
	}

	/// Boolean primitive.
	pub fn bool(value: bool) -> Self {
		Self::Primitive(Primitive::Bool(value))
	}

	/// Number primitive.
	pub fn number(value: f64) -> Self {
		Self::Primitive(Primitive::Number(value))
	}

	/// Big integer primitive.
	pub fn bigint(value: impl Into<BigInt>) -> Self {
		Self::Primitive(Primitive::BigInt(value.into()))
	}

	/// String primitive.
	pub fn string(value: impl Into<Box<str>>) -> Self {
		Self::Primitive(Primitive::String(value.into()))
	}
}

/// String-keyed mapping that keeps insertion order.
#[derive(Debug, Clone, Default)]
pub struct Record {
	entries: IndexMap<Box<str>, Value>,
}

impl Record {
	/// Empty record.
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert a field. A repeated key replaces the earlier value in place.
	pub fn insert(&mut self, key: impl Into<Box<str>>, value: Value) {
		self.entries.insert(key.into(), value);
	}

	/// Look up a field by key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.get(key)
	}

	/// Fields in insertion order.
	pub fn entries(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> {
		self.entries.iter().map(|(key, value)| (&**key, value))
	}

	/// Number of fields.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the record has no fields.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	fn take_values(&mut self) -> impl Iterator<Item = Value> {
		std::mem::take(&mut self.entries).into_values()
	}
}

// Children are moved onto a work stack so deep nesting is freed without recursion.
impl Drop for Value {
	fn drop(&mut self) {
		let mut stack: Vec<Value> = match self {
			Self::Sequence(items) if !items.is_empty() => std::mem::take(items),
			Self::Record(record) if !record.is_empty() => record.take_values().collect(),
			_ => return,
		};
		while let Some(mut value) = stack.pop() {
			match &mut value {
				Self::Sequence(items) => stack.append(items),
				Self::Record(record) => stack.extend(record.take_values()),
				_ => {}
			}
		}
	}
}

impl<K: Into<Box<str>>> FromIterator<(K, Value)> for Record {
	fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
		let mut record = Self::new();
		for (key, value) in iter {
			record.insert(key, value);
		}
		record
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::bool(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::number(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::number(f64::from(value))
	}
}

impl From<BigInt> for Value {
	fn from(value: BigInt) -> Self {
		Self::bigint(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::string(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self {
		Self::Sequence(value)
	}
}

impl From<Record> for Value {
	fn from(value: Record) -> Self {
		Self::Record(value)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Absent, Into::into)
	}
}

impl fmt::Display for Primitive {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool(v) => write!(f, "{v}"),
			Self::Number(v) => write_number(f, *v),
			Self::BigInt(v) => write!(f, "{v}n"),
			Self::String(v) => write_quoted(f, v),
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => f.write_str("null"),
			Self::Absent => f.write_str("undefined"),
			Self::Primitive(v) => write!(f, "{v}"),
			Self::Sequence(items) => {
				f.write_str("[")?;
				for (idx, item) in items.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{item}")?;
				}
				f.write_str("]")
			}
			Self::Record(record) => {
				if record.is_empty() {
					return f.write_str("{}");
				}
				f.write_str("{ ")?;
				for (idx, (key, value)) in record.entries().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					if is_identifier(key) {
						f.write_str(key)?;
					} else {
						write_quoted(f, key)?;
					}
					write!(f, ": {value}")?;
				}
				f.write_str(" }")
			}
		}
	}
}

fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
	f.write_str(&number_to_string(value))
}

/// Render a number the way script runtimes convert numbers to strings.
///
/// Shortest round-trip digits, plain notation for decimal exponents in
/// `-7..21`, `1e+21` style otherwise, and `-0` renders as `0`.
pub(crate) fn number_to_string(value: f64) -> String {
	if value.is_nan() {
		return "NaN".to_owned();
	}
	if value.is_infinite() {
		return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
	}
	if value == 0.0 {
		return "0".to_owned();
	}

	let sci = format!("{:e}", value.abs());
	let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
	let exp: i32 = exp.parse().unwrap_or(0);
	let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
	let k = digits.len() as i32;
	let n = exp + 1;

	let mut out = String::new();
	if value < 0.0 {
		out.push('-');
	}
	if k <= n && n <= 21 {
		out.push_str(&digits);
		out.extend(std::iter::repeat_n('0', (n - k) as usize));
	} else if 0 < n && n <= 21 {
		out.push_str(&digits[..n as usize]);
		out.push('.');
		out.push_str(&digits[n as usize..]);
	} else if -6 < n && n <= 0 {
		out.push_str("0.");
		out.extend(std::iter::repeat_n('0', (-n) as usize));
		out.push_str(&digits);
	} else {
		out.push_str(&digits[..1]);
		if k > 1 {
			out.push('.');
			out.push_str(&digits[1..]);
		}
		out.push('e');
		out.push(if n > 0 { '+' } else { '-' });
		out.push_str(&(n - 1).abs().to_string());
	}
	out
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
	f.write_str("\"")?;
	for ch in text.chars() {
		match ch {
			'"' => f.write_str("\\\"")?,
			'\\' => f.write_str("\\\\")?,
			'\n' => f.write_str("\\n")?,
			'\r' => f.write_str("\\r")?,
			'\t' => f.write_str("\\t")?,
			c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
			c => write!(f, "{c}")?,
		}
	}
	f.write_str("\"")
}

fn is_identifier(text: &str) -> bool {
	let mut chars = text.chars();
	let Some(first) = chars.next() else {
		return false;
	};
	(first.is_ascii_alphabetic() || first == '_' || first == '$') && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
