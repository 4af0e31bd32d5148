use std::fs;
use std::path::Path;

use deepeq::equal::{MAX_PARSE_DEPTH, ParseOptions, Result, Value, from_json_str, parse_literal};
use tracing::debug;

/// Accepted input notations.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum InputFormat {
	/// Script-style literals (`undefined`, `1n`, `{ name: 1 }`).
	Literal,
	/// Strict JSON.
	Json,
}

/// Input options shared by commands that read values.
#[derive(Debug, Clone, clap::Args)]
pub struct InputArgs {
	#[arg(long, value_enum, default_value_t = InputFormat::Literal)]
	pub format: InputFormat,
	#[arg(long)]
	pub files: bool,
	#[arg(long = "max-depth", value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PARSE_DEPTH)))]
	pub max_depth: Option<u32>,
}

impl InputArgs {
	fn parse_options(&self) -> ParseOptions {
		let mut options = ParseOptions::default();
		if let Some(max_depth) = self.max_depth {
			options.max_depth = max_depth;
		}
		options
	}
}

/// Read one value from an argument, honoring `--files` and `--format`.
pub fn read_value(arg: &str, input: &InputArgs) -> Result<Value> {
	let text = if input.files {
		debug!(path = arg, "reading value file");
		fs::read_to_string(Path::new(arg))?
	} else {
		arg.to_owned()
	};

	match input.format {
		InputFormat::Literal => parse_literal(&text, &input.parse_options()),
		InputFormat::Json => from_json_str(&text),
	}
}

/// Pretty-print a JSON payload to stdout.
pub fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}
