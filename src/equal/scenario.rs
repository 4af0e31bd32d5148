use tracing::{debug, warn};

use crate::equal::compare::equals;
use crate::equal::literal::{ParseOptions, parse_literal};
use crate::equal::Result;

/// One end-to-end comparison case written in literal syntax.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
	/// Left operand.
	pub left: &'static str,
	/// Right operand.
	pub right: &'static str,
	/// Expected comparison result.
	pub expected: bool,
}

const fn case(left: &'static str, right: &'static str, expected: bool) -> Scenario {
	Scenario { left, right, expected }
}

/// Reference cases, equal pairs first.
pub const SCENARIOS: &[Scenario] = &[
	case("1", "1", true),
	case("1099511627776n", "1099511627776n", true),
	case("null", "null", true),
	case("undefined", "undefined", true),
	case("[1, 2, 3]", "[1, 2, 3]", true),
	case("[1, 2, 3, [1, 23], [[1]]]", "[1, 2, 3, [1, 23], [[1]]]", true),
	case("{ name: 1 }", "{ name: 1 }", true),
	case("\"1\"", "\"2\"", false),
	case("null", "undefined", false),
	case("undefined", "1", false),
	case("undefined", "[1, 2, 3]", false),
	case("undefined", "{ name: 1 }", false),
	case("null", "{ name: 1 }", false),
	case("null", "[1, 2, 3]", false),
	case("null", "1", false),
	case("[1, 2, 3]", "[1, 2, 3, [1, 23], [[1]]]", false),
	case("{ name: 1 }", "{ name: 2 }", false),
	case("{ name: 1 }", "\"asda\"", false),
];

/// Result of running one [`Scenario`].
#[derive(Debug, Clone, Copy)]
pub struct ScenarioOutcome {
	/// Case that was run.
	pub scenario: Scenario,
	/// Result produced by [`equals`].
	pub actual: bool,
}

impl ScenarioOutcome {
	/// Whether the actual result matched the expectation.
	pub fn passed(&self) -> bool {
		self.actual == self.scenario.expected
	}
}

/// Parse and compare every case in `scenarios`.
pub fn run_scenarios(scenarios: &[Scenario], opt: &ParseOptions) -> Result<Vec<ScenarioOutcome>> {
	let mut out = Vec::with_capacity(scenarios.len());
	for scenario in scenarios {
		let left = parse_literal(scenario.left, opt)?;
		let right = parse_literal(scenario.right, opt)?;
		let outcome = ScenarioOutcome {
			scenario: *scenario,
			actual: equals(&left, &right),
		};
		if outcome.passed() {
			debug!(left = scenario.left, right = scenario.right, actual = outcome.actual, "scenario passed");
		} else {
			warn!(left = scenario.left, right = scenario.right, expected = scenario.expected, "scenario failed");
		}
		out.push(outcome);
	}
	Ok(out)
}
