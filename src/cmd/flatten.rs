use deepeq::equal::{Leaf, Result, Value, flatten, flatten_record};

use crate::cmd::util::{InputArgs, emit_json, read_value};

#[derive(clap::Args)]
pub struct Args {
	pub value: String,
	#[command(flatten)]
	pub input: InputArgs,
	#[arg(long)]
	pub json: bool,
}

/// Print the leaf run a value is compared by.
pub fn run(args: Args) -> Result<()> {
	let Args { value, input, json } = args;

	let value = read_value(&value, &input)?;
	let leaves: Vec<String> = match &value {
		Value::Sequence(items) => flatten(items).iter().map(Leaf::render).collect(),
		Value::Record(record) => flatten_record(record).iter().map(Leaf::render).collect(),
		other => vec![other.to_string()],
	};

	if json {
		return emit_json(&FlattenJson {
			variant: value.variant().as_str(),
			count: leaves.len(),
			leaves,
		});
	}

	println!("variant: {}", value.variant().as_str());
	println!("count: {}", leaves.len());
	println!("leaves:");
	for (idx, leaf) in leaves.iter().enumerate() {
		println!("  [{idx}] {leaf}");
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct FlattenJson {
	variant: &'static str,
	count: usize,
	leaves: Vec<String>,
}
