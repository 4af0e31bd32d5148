use deepeq::equal::{EqError, ParseOptions, Result, SCENARIOS, run_scenarios};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	#[arg(long)]
	pub json: bool,
}

/// Run the reference scenarios and fail if any disagrees with its expectation.
pub fn run(args: Args) -> Result<()> {
	let Args { json } = args;

	let outcomes = run_scenarios(SCENARIOS, &ParseOptions::default())?;
	let failed = outcomes.iter().filter(|outcome| !outcome.passed()).count();

	if json {
		let cases = outcomes
			.iter()
			.map(|outcome| ScenarioJson {
				left: outcome.scenario.left,
				right: outcome.scenario.right,
				expected: outcome.scenario.expected,
				actual: outcome.actual,
				passed: outcome.passed(),
			})
			.collect();
		emit_json(&ScenariosJson {
			total: outcomes.len(),
			failed,
			cases,
		})?;
	} else {
		for outcome in &outcomes {
			let status = if outcome.passed() { "ok" } else { "FAIL" };
			println!(
				"{status:<4} check({}, {}) = {} (expected {})",
				outcome.scenario.left, outcome.scenario.right, outcome.actual, outcome.scenario.expected
			);
		}
		println!("passed: {}/{}", outcomes.len() - failed, outcomes.len());
	}

	if failed > 0 {
		return Err(EqError::ScenarioMismatch {
			failed,
			total: outcomes.len(),
		});
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct ScenariosJson {
	total: usize,
	failed: usize,
	cases: Vec<ScenarioJson>,
}

#[derive(serde::Serialize)]
struct ScenarioJson {
	left: &'static str,
	right: &'static str,
	expected: bool,
	actual: bool,
	passed: bool,
}
