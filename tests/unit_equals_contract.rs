#![allow(missing_docs)]

use std::thread;

use deepeq::equal::{ParseOptions, Record, Value, Variant, equals, parse_literal};
use num_bigint::BigInt;

fn lit(text: &str) -> Value {
	parse_literal(text, &ParseOptions::default()).expect("literal parses")
}

fn samples() -> Vec<Value> {
	[
		"undefined",
		"null",
		"0",
		"1",
		"-0",
		"NaN",
		"1n",
		"'1'",
		"''",
		"true",
		"false",
		"[]",
		"[1, 2, 3]",
		"[1, [2, 3]]",
		"[[1, 2], 3]",
		"[1, 2, 3, [1, 23], [[1]]]",
		"[null]",
		"[undefined]",
		"{}",
		"{ name: 1 }",
		"{ name: 2 }",
		"{ name: [1] }",
		"{ a: 1, b: 2 }",
		"{ b: 2, a: 1 }",
		"['name', 1]",
		"[{}]",
	]
	.into_iter()
	.map(lit)
	.collect()
}

#[test]
fn comparison_is_symmetric_for_every_pair() {
	let values = samples();
	for a in &values {
		for b in &values {
			assert_eq!(equals(a, b), equals(b, a), "asymmetric: {a} vs {b}");
		}
	}
}

#[test]
fn differing_variants_never_compare_equal() {
	let values = samples();
	for a in &values {
		for b in &values {
			if a.variant() != b.variant() {
				assert!(!equals(a, b), "{a} should not equal {b}");
			}
		}
	}
}

#[test]
fn reference_scenarios_hold() {
	let cases = [
		("1", "1", true),
		("null", "null", true),
		("undefined", "undefined", true),
		("[1, 2, 3]", "[1, 2, 3]", true),
		("{ name: 1 }", "{ name: 1 }", true),
		("'1'", "'2'", false),
		("null", "undefined", false),
		("undefined", "[1, 2, 3]", false),
		("{ name: 1 }", "'asda'", false),
	];
	for (left, right, expected) in cases {
		assert_eq!(equals(&lit(left), &lit(right)), expected, "{left} vs {right}");
	}
}

#[test]
fn big_integer_beyond_f64_precision() {
	let big = BigInt::from(2).pow(40);
	assert!(equals(&Value::bigint(big.clone()), &Value::bigint(big)));

	let exact = BigInt::from(2).pow(64) + 1;
	assert!(!equals(&Value::bigint(exact), &Value::bigint(BigInt::from(2).pow(64))));
}

#[test]
fn programmatic_values_compare_like_literals() {
	let record: Record = [("name", Value::from(1)), ("tags", Value::Sequence(vec!["x".into(), Value::from(None::<i32>)]))]
		.into_iter()
		.collect();
	let built = Value::Record(record);

	assert_eq!(built.variant(), Variant::Record);
	assert!(equals(&built, &lit("{ name: 1, tags: ['x', undefined] }")));
	assert!(equals(&built, &lit("{ name: 1, tags: [['x'], [undefined]] }")));
}

#[test]
fn values_can_be_shared_across_threads() {
	let value = std::sync::Arc::new(lit("[1, { a: 1 }, [2n, 'x']]"));
	let handles: Vec<_> = (0..4)
		.map(|_| {
			let value = std::sync::Arc::clone(&value);
			thread::spawn(move || equals(&value, &value))
		})
		.collect();

	for handle in handles {
		assert!(handle.join().expect("thread completes"));
	}
}
