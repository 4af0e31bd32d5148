use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, EqError>;

/// Errors produced while reading values or running the scenario self-check.
///
/// Comparison itself is total and never produces one of these.
#[derive(Debug, Error)]
pub enum EqError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON input did not parse.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Literal input ended early.
	#[error("unexpected end of input at offset {at}, expected {expected}")]
	UnexpectedEnd {
		/// Byte offset where more input was needed.
		at: usize,
		/// Description of the expected token.
		expected: &'static str,
	},
	/// Literal input contained an unexpected character.
	#[error("unexpected {found:?} at offset {at}, expected {expected}")]
	UnexpectedChar {
		/// Byte offset of the character.
		at: usize,
		/// Offending character.
		found: char,
		/// Description of the expected token.
		expected: &'static str,
	},
	/// Numeric literal was malformed.
	#[error("invalid number {text:?} at offset {at}")]
	InvalidNumber {
		/// Byte offset where the literal starts.
		at: usize,
		/// Literal text.
		text: String,
	},
	/// String literal contained an unsupported escape.
	#[error("invalid escape sequence at offset {at}")]
	InvalidEscape {
		/// Byte offset of the backslash.
		at: usize,
	},
	/// Bare word was not a known literal.
	#[error("unknown identifier {ident:?} at offset {at}")]
	UnknownIdentifier {
		/// Byte offset where the identifier starts.
		at: usize,
		/// Identifier text.
		ident: String,
	},
	/// Literal nesting exceeded the configured limit.
	#[error("nesting depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Input continued after a complete value.
	#[error("trailing input at offset {at}")]
	TrailingInput {
		/// Byte offset of the first trailing character.
		at: usize,
	},
	/// Scenario self-check disagreed with expected results.
	#[error("{failed} of {total} scenarios disagreed with their expected result")]
	ScenarioMismatch {
		/// Number of failing scenarios.
		failed: usize,
		/// Number of scenarios run.
		total: usize,
	},
}
