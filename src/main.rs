#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "deepeq", about = "Structural deep-equality checks for loosely typed values")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Compare two values.
	Check(cmd::check::Args),
	/// Show the flattened leaf run of a value.
	Flatten(cmd::flatten::Args),
	/// Run the built-in reference scenarios.
	Scenarios(cmd::scenarios::Args),
}

fn main() {
	init_tracing();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> deepeq::equal::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Check(args) => cmd::check::run(args),
		Commands::Flatten(args) => cmd::flatten::run(args),
		Commands::Scenarios(args) => cmd::scenarios::run(args),
	}
}

fn init_tracing() {
	let filter = EnvFilter::try_from_env("DEEPEQ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
