use tracing::trace;

use crate::equal::flatten::{Leaf, flatten, flatten_record};
use crate::equal::value::{Primitive, Value};

/// Decide whether two values are structurally equal.
///
/// Rules are applied in order and the first match decides:
/// differing variants are unequal; `Null`/`Null` and `Absent`/`Absent` are
/// equal; primitives use [`strict_eq`]; sequences and records are flattened
/// (see [`flatten`] and [`flatten_record`]) and compared leaf by leaf.
///
/// Flattening discards nesting shape and record field order is significant.
/// Records found as leaves compare by identity rather than by content.
pub fn equals(a: &Value, b: &Value) -> bool {
	let (left, right) = (a.variant(), b.variant());
	if left != right {
		trace!(left = left.as_str(), right = right.as_str(), "variant mismatch");
		return false;
	}

	match (a, b) {
		(Value::Null, Value::Null) | (Value::Absent, Value::Absent) => true,
		(Value::Primitive(x), Value::Primitive(y)) => strict_eq(x, y),
		(Value::Sequence(x), Value::Sequence(y)) => leaves_match(&flatten(x), &flatten(y)),
		(Value::Record(x), Value::Record(y)) => leaves_match(&flatten_record(x), &flatten_record(y)),
		_ => false,
	}
}

/// Exact primitive equality.
///
/// Numbers compare by value (`NaN` is never equal, `0 == -0`), big integers
/// exactly, strings by content. Different kinds are never equal.
pub fn strict_eq(a: &Primitive, b: &Primitive) -> bool {
	match (a, b) {
		(Primitive::Bool(x), Primitive::Bool(y)) => x == y,
		(Primitive::Number(x), Primitive::Number(y)) => x == y,
		(Primitive::BigInt(x), Primitive::BigInt(y)) => x == y,
		(Primitive::String(x), Primitive::String(y)) => x == y,
		_ => false,
	}
}

fn leaves_match(left: &[Leaf<'_>], right: &[Leaf<'_>]) -> bool {
	if left.len() != right.len() {
		trace!(left = left.len(), right = right.len(), "leaf count mismatch");
		return false;
	}

	match left.iter().zip(right).position(|(x, y)| !leaf_eq(x, y)) {
		Some(at) => {
			trace!(at, "leaf mismatch");
			false
		}
		None => true,
	}
}

fn leaf_eq(a: &Leaf<'_>, b: &Leaf<'_>) -> bool {
	match (a, b) {
		(Leaf::Key(x), Leaf::Key(y)) => x == y,
		(Leaf::Key(key), Leaf::Value(Value::Primitive(Primitive::String(text))))
		| (Leaf::Value(Value::Primitive(Primitive::String(text))), Leaf::Key(key)) => *key == &**text,
		(Leaf::Key(_), _) | (_, Leaf::Key(_)) => false,
		(Leaf::Value(x), Leaf::Value(y)) => value_leaf_eq(x, y),
	}
}

fn value_leaf_eq(a: &Value, b: &Value) -> bool {
	match (a, b) {
		(Value::Null, Value::Null) | (Value::Absent, Value::Absent) => true,
		(Value::Primitive(x), Value::Primitive(y)) => strict_eq(x, y),
		(Value::Record(x), Value::Record(y)) => std::ptr::eq(x, y),
		_ => false,
	}
}

#[cfg(test)]
mod tests;
