use num_bigint::BigInt;

use super::{equals, strict_eq};
use crate::equal::{ParseOptions, Primitive, Record, Value, parse_literal};

fn lit(text: &str) -> Value {
	parse_literal(text, &ParseOptions::default()).expect("literal parses")
}

fn check(left: &str, right: &str) -> bool {
	let (a, b) = (lit(left), lit(right));
	let forward = equals(&a, &b);
	assert_eq!(forward, equals(&b, &a), "asymmetric result for {left} vs {right}");
	forward
}

#[test]
fn absent_and_null_only_equal_themselves() {
	assert!(equals(&Value::Absent, &Value::Absent));
	assert!(equals(&Value::Null, &Value::Null));
	assert!(!equals(&Value::Absent, &Value::Null));
	assert!(!equals(&Value::Null, &Value::Absent));
}

#[test]
fn null_and_absent_never_equal_other_variants() {
	for other in ["1", "\"\"", "false", "[]", "[1, 2, 3]", "{}", "{ name: 1 }"] {
		assert!(!check("null", other), "null vs {other}");
		assert!(!check("undefined", other), "undefined vs {other}");
	}
}

#[test]
fn primitives_compare_exactly() {
	assert!(check("1", "1"));
	assert!(check("1.5", "1.5"));
	assert!(check("0", "-0"));
	assert!(check("true", "true"));
	assert!(check("'abc'", "\"abc\""));
	assert!(!check("\"1\"", "\"2\""));
	assert!(!check("true", "false"));
	assert!(!check("NaN", "NaN"));
}

#[test]
fn primitive_kinds_do_not_coerce() {
	assert!(!check("1", "\"1\""));
	assert!(!check("1", "1n"));
	assert!(!check("1", "true"));
	assert!(!check("0", "false"));
	assert!(!check("\"\"", "false"));
}

#[test]
fn big_integers_keep_full_precision() {
	assert!(check("1099511627776n", "1099511627776n"));

	let a = Value::bigint(BigInt::from(2).pow(80) + 1);
	let b = Value::bigint(BigInt::from(2).pow(80));
	assert!(!equals(&a, &b));
	assert!(equals(&a, &a.clone()));

	// Both round to the same f64.
	assert!(!check("9007199254740993n", "9007199254740992n"));
	assert!(check("9007199254740993", "9007199254740992"));
}

#[test]
fn sequences_flatten_before_comparing() {
	assert!(check("[1, 2, 3]", "[1, 2, 3]"));
	assert!(check("[1, [2, 3]]", "[1, 2, 3]"));
	assert!(check("[[[1]], [], 2]", "[1, [2]]"));
	assert!(check("[1, 2, 3, [1, 23], [[1]]]", "[1, 2, 3, [1, 23], [[1]]]"));
	assert!(!check("[1, 2, 3]", "[1, 2, 3, [1, 23], [[1]]]"));
	assert!(!check("[1, 2, 3]", "[3, 2, 1]"));
	assert!(check("[]", "[[], [[]]]"));
}

#[test]
fn sequence_shape_is_ignored() {
	assert!(check("[[1, 2], 3]", "[1, [2, 3]]"));
}

#[test]
fn sequence_leaves_use_strict_equality() {
	assert!(check("[null, undefined]", "[null, undefined]"));
	assert!(!check("[null]", "[undefined]"));
	assert!(!check("[1]", "[\"1\"]"));
	assert!(!check("[NaN]", "[NaN]"));
}

#[test]
fn records_compare_by_flattened_entries() {
	assert!(check("{ name: 1 }", "{ name: 1 }"));
	assert!(!check("{ name: 1 }", "{ name: 2 }"));
	assert!(!check("{ name: 1 }", "{ title: 1 }"));
	assert!(check("{ a: [1, [2]] }", "{ a: [[1], 2] }"));
	assert!(check("{}", "{}"));
	assert!(!check("{ a: 1 }", "{ a: 1, b: 2 }"));
}

#[test]
fn record_field_order_is_significant() {
	assert!(!check("{ a: 1, b: 2 }", "{ b: 2, a: 1 }"));
}

#[test]
fn record_keys_and_values_share_one_run() {
	assert!(check("{ a: [\"b\", \"c\", \"d\"] }", "{ a: \"b\", c: \"d\" }"));
}

#[test]
fn nested_records_compare_by_identity() {
	assert!(!check("[{}]", "[{}]"));
	assert!(!check("{ inner: { a: 1 } }", "{ inner: { a: 1 } }"));

	let value = lit("[1, { a: 1 }, [{ b: 2 }]]");
	assert!(equals(&value, &value));

	let record = lit("{ inner: { a: 1 } }");
	assert!(equals(&record, &record));
	assert!(!equals(&record, &record.clone()));
}

#[test]
fn cross_variant_is_always_false() {
	assert!(!check("null", "[1, 2, 3]"));
	assert!(!check("{ name: 1 }", "\"asda\""));
	assert!(!check("[1]", "{ 0: 1 }"));
	assert!(!check("[]", "{}"));
	assert!(!check("[\"a\"]", "\"a\""));
}

#[test]
fn strict_eq_matches_kind_and_value() {
	let text = Primitive::String("x".into());
	assert!(strict_eq(&text, &Primitive::String("x".into())));
	assert!(!strict_eq(&text, &Primitive::Bool(true)));
	assert!(strict_eq(&Primitive::BigInt(BigInt::from(-5)), &Primitive::BigInt(BigInt::from(-5))));
}

#[test]
fn builder_values_match_parsed_values() {
	let built = Value::Record([("name", Value::from(1))].into_iter().collect::<Record>());
	let parsed = lit("{ name: 1 }");
	assert!(equals(&built, &parsed));
}
