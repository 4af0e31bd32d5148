mod compare;
mod error;
mod flatten;
mod json;
mod literal;
mod scenario;
mod value;

/// Structural equality entry point.
pub use compare::{equals, strict_eq};
/// Error and result aliases.
pub use error::{EqError, Result};
/// Flattened leaf runs.
pub use flatten::{Leaf, flatten, flatten_record};
/// JSON input bridge.
pub use json::{from_json_reader, from_json_str};
/// Literal reader and its options.
pub use literal::{MAX_PARSE_DEPTH, ParseOptions, parse_literal};
/// Built-in end-to-end scenario table.
pub use scenario::{SCENARIOS, Scenario, ScenarioOutcome, run_scenarios};
/// Runtime value types.
pub use value::{Primitive, Record, Value, Variant};
