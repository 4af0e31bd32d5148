use num_bigint::BigInt;
use tracing::debug;

use crate::equal::value::{Primitive, Record, Value, number_to_string};
use crate::equal::{EqError, Result};

/// Hard ceiling on nesting depth; parsing recurses once per level.
pub const MAX_PARSE_DEPTH: u32 = 512;

/// Limits for the literal reader.
#[derive(Debug, Clone)]
pub struct ParseOptions {
	/// Maximum nesting depth of sequences and records, clamped to [`MAX_PARSE_DEPTH`].
	pub max_depth: u32,
}

impl ParseOptions {
	/// Depth limit actually enforced.
	pub fn effective_max_depth(&self) -> u32 {
		self.max_depth.min(MAX_PARSE_DEPTH)
	}
}

impl Default for ParseOptions {
	fn default() -> Self {
		Self { max_depth: 256 }
	}
}

/// Parse script-style literal text into a [`Value`].
///
/// Accepts `undefined`, `null`, `true`, `false`, `NaN`, `Infinity`, decimal
/// numbers, big integers with an `n` suffix, single or double quoted strings,
/// `[..]` sequences and `{..}` records with bare, quoted, or numeric keys.
/// Trailing commas are allowed.
pub fn parse_literal(input: &str, opt: &ParseOptions) -> Result<Value> {
	let mut reader = Reader { input, pos: 0, opt };
	reader.skip_ws();
	let value = reader.value(0)?;
	reader.skip_ws();
	if reader.pos < input.len() {
		return Err(EqError::TrailingInput { at: reader.pos });
	}

	debug!(variant = value.variant().as_str(), bytes = input.len(), "parsed literal");
	Ok(value)
}

struct Reader<'a, 'o> {
	input: &'a str,
	pos: usize,
	opt: &'o ParseOptions,
}

impl<'a> Reader<'a, '_> {
	fn peek(&self) -> Option<char> {
		self.input[self.pos..].chars().next()
	}

	fn bump(&mut self) -> Option<char> {
		let ch = self.peek()?;
		self.pos += ch.len_utf8();
		Some(ch)
	}

	fn skip_ws(&mut self) {
		while self.peek().is_some_and(char::is_whitespace) {
			self.bump();
		}
	}

	fn expect(&mut self, want: char, expected: &'static str) -> Result<()> {
		match self.peek() {
			Some(ch) if ch == want => {
				self.bump();
				Ok(())
			}
			Some(found) => Err(EqError::UnexpectedChar { at: self.pos, found, expected }),
			None => Err(EqError::UnexpectedEnd { at: self.pos, expected }),
		}
	}

	fn value(&mut self, depth: u32) -> Result<Value> {
		match self.peek() {
			Some('[') => self.sequence(depth),
			Some('{') => self.record(depth),
			Some(quote @ ('"' | '\'')) => Ok(Value::string(self.string(quote)?)),
			Some(ch) if ch == '-' || ch.is_ascii_digit() => self.number(),
			Some(ch) if is_ident_start(ch) => self.keyword(),
			Some(found) => Err(EqError::UnexpectedChar {
				at: self.pos,
				found,
				expected: "value",
			}),
			None => Err(EqError::UnexpectedEnd { at: self.pos, expected: "value" }),
		}
	}

	fn enter(&self, depth: u32) -> Result<()> {
		let max_depth = self.opt.effective_max_depth();
		if depth >= max_depth {
			return Err(EqError::DepthExceeded { max_depth });
		}
		Ok(())
	}

	fn sequence(&mut self, depth: u32) -> Result<Value> {
		self.enter(depth)?;
		self.expect('[', "'['")?;
		let mut items = Vec::new();

		self.skip_ws();
		if self.peek() == Some(']') {
			self.bump();
			return Ok(Value::Sequence(items));
		}

		loop {
			items.push(self.value(depth + 1)?);
			if self.list_end(']', "',' or ']'")? {
				return Ok(Value::Sequence(items));
			}
		}
	}

	fn record(&mut self, depth: u32) -> Result<Value> {
		self.enter(depth)?;
		self.expect('{', "'{'")?;
		let mut record = Record::new();

		self.skip_ws();
		if self.peek() == Some('}') {
			self.bump();
			return Ok(Value::Record(record));
		}

		loop {
			let key = self.key()?;
			self.skip_ws();
			self.expect(':', "':'")?;
			self.skip_ws();
			let value = self.value(depth + 1)?;
			record.insert(key, value);
			if self.list_end('}', "',' or '}'")? {
				return Ok(Value::Record(record));
			}
		}
	}

	/// Consume the separator after a list item. Returns `true` once the closing bracket is consumed.
	fn list_end(&mut self, close: char, expected: &'static str) -> Result<bool> {
		self.skip_ws();
		match self.bump() {
			Some(',') => {
				self.skip_ws();
				if self.peek() == Some(close) {
					self.bump();
					return Ok(true);
				}
				Ok(false)
			}
			Some(ch) if ch == close => Ok(true),
			Some(found) => Err(EqError::UnexpectedChar {
				at: self.pos - found.len_utf8(),
				found,
				expected,
			}),
			None => Err(EqError::UnexpectedEnd { at: self.pos, expected }),
		}
	}

	fn key(&mut self) -> Result<String> {
		match self.peek() {
			Some(quote @ ('"' | '\'')) => self.string(quote),
			Some(ch) if is_ident_start(ch) => Ok(self.ident().to_owned()),
			Some(ch) if ch.is_ascii_digit() => {
				let at = self.pos;
				match &self.number()? {
					Value::Primitive(Primitive::Number(number)) => Ok(number_to_string(*number)),
					Value::Primitive(Primitive::BigInt(number)) => Ok(number.to_string()),
					_ => Err(EqError::InvalidNumber {
						at,
						text: self.input[at..self.pos].to_owned(),
					}),
				}
			}
			Some(found) => Err(EqError::UnexpectedChar {
				at: self.pos,
				found,
				expected: "record key",
			}),
			None => Err(EqError::UnexpectedEnd {
				at: self.pos,
				expected: "record key",
			}),
		}
	}

	fn ident(&mut self) -> &'a str {
		let input = self.input;
		let start = self.pos;
		while self.peek().is_some_and(is_ident_continue) {
			self.bump();
		}
		&input[start..self.pos]
	}

	fn keyword(&mut self) -> Result<Value> {
		let at = self.pos;
		match self.ident() {
			"undefined" => Ok(Value::Absent),
			"null" => Ok(Value::Null),
			"true" => Ok(Value::bool(true)),
			"false" => Ok(Value::bool(false)),
			"NaN" => Ok(Value::number(f64::NAN)),
			"Infinity" => Ok(Value::number(f64::INFINITY)),
			other => Err(EqError::UnknownIdentifier {
				at,
				ident: other.to_owned(),
			}),
		}
	}

	fn number(&mut self) -> Result<Value> {
		let input = self.input;
		let start = self.pos;
		let negative = self.peek() == Some('-');
		if negative {
			self.bump();
			if self.peek().is_some_and(is_ident_start) {
				let at = self.pos;
				return match self.ident() {
					"Infinity" => Ok(Value::number(f64::NEG_INFINITY)),
					other => Err(EqError::UnknownIdentifier {
						at,
						ident: other.to_owned(),
					}),
				};
			}
		}

		let int_digits = self.digits();
		let mut integral = true;
		if self.peek() == Some('.') {
			self.bump();
			integral = false;
			if self.digits() == 0 {
				return Err(self.invalid_number(start));
			}
		}
		if matches!(self.peek(), Some('e' | 'E')) {
			self.bump();
			integral = false;
			if matches!(self.peek(), Some('+' | '-')) {
				self.bump();
			}
			if self.digits() == 0 {
				return Err(self.invalid_number(start));
			}
		}
		if int_digits == 0 {
			return Err(self.invalid_number(start));
		}

		let text = &input[start..self.pos];
		if integral && self.peek() == Some('n') {
			self.bump();
			if self.peek().is_some_and(is_ident_continue) {
				return Err(self.invalid_number(start));
			}
			let value = text.parse::<BigInt>().map_err(|_| self.invalid_number(start))?;
			return Ok(Value::bigint(value));
		}
		if self.peek().is_some_and(is_ident_continue) {
			return Err(self.invalid_number(start));
		}

		let value = text.parse::<f64>().map_err(|_| self.invalid_number(start))?;
		Ok(Value::number(value))
	}

	fn digits(&mut self) -> usize {
		let mut count = 0;
		while self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
			self.bump();
			count += 1;
		}
		count
	}

	fn invalid_number(&self, start: usize) -> EqError {
		let end = self.input[self.pos..]
			.find(|ch: char| !is_ident_continue(ch) && ch != '.')
			.map_or(self.input.len(), |offset| self.pos + offset);
		EqError::InvalidNumber {
			at: start,
			text: self.input[start..end].to_owned(),
		}
	}

	fn string(&mut self, quote: char) -> Result<String> {
		self.bump();
		let mut out = String::new();
		loop {
			let at = self.pos;
			match self.bump() {
				Some(ch) if ch == quote => return Ok(out),
				Some('\\') => out.push(self.escape(at)?),
				Some(ch) => out.push(ch),
				None => {
					return Err(EqError::UnexpectedEnd {
						at: self.pos,
						expected: "closing quote",
					});
				}
			}
		}
	}

	fn escape(&mut self, at: usize) -> Result<char> {
		let ch = match self.bump() {
			Some('n') => '\n',
			Some('r') => '\r',
			Some('t') => '\t',
			Some('0') => '\0',
			Some(ch @ ('\\' | '"' | '\'')) => ch,
			Some('u') => {
				let hex = self
					.input
					.get(self.pos..self.pos + 4)
					.filter(|hex| hex.chars().all(|c| c.is_ascii_hexdigit()))
					.ok_or(EqError::InvalidEscape { at })?;
				let code = u32::from_str_radix(hex, 16).map_err(|_| EqError::InvalidEscape { at })?;
				self.pos += 4;
				char::from_u32(code).ok_or(EqError::InvalidEscape { at })?
			}
			Some(_) => return Err(EqError::InvalidEscape { at }),
			None => {
				return Err(EqError::UnexpectedEnd {
					at: self.pos,
					expected: "escape sequence",
				});
			}
		};
		Ok(ch)
	}
}

fn is_ident_start(ch: char) -> bool {
	ch.is_ascii_alphabetic() || ch == '_' || ch == '$'
}

fn is_ident_continue(ch: char) -> bool {
	ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'
}
