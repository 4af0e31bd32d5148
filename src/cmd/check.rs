use deepeq::equal::{Result, equals};

use crate::cmd::util::{InputArgs, emit_json, read_value};

#[derive(clap::Args)]
pub struct Args {
	pub left: String,
	pub right: String,
	#[command(flatten)]
	pub input: InputArgs,
	#[arg(long)]
	pub json: bool,
}

/// Compare two values and print the result.
pub fn run(args: Args) -> Result<()> {
	let Args { left, right, input, json } = args;

	let left = read_value(&left, &input)?;
	let right = read_value(&right, &input)?;
	let equal = equals(&left, &right);

	if json {
		return emit_json(&CheckJson {
			left: left.to_string(),
			right: right.to_string(),
			left_variant: left.variant().as_str(),
			right_variant: right.variant().as_str(),
			equal,
		});
	}

	println!("{equal}");
	Ok(())
}

#[derive(serde::Serialize)]
struct CheckJson {
	left: String,
	right: String,
	left_variant: &'static str,
	right_variant: &'static str,
	equal: bool,
}
