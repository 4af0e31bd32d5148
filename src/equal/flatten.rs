use crate::equal::value::{Primitive, Record, Value};

/// One element of a flattened run.
#[derive(Debug, Clone, Copy)]
pub enum Leaf<'a> {
	/// Record key emitted by [`flatten_record`].
	Key(&'a str),
	/// Any non-sequence value.
	Value(&'a Value),
}

impl Leaf<'_> {
	/// Render the leaf in literal syntax. Keys render as strings.
	pub fn render(&self) -> String {
		match self {
			Self::Key(key) => Primitive::String((*key).into()).to_string(),
			Self::Value(value) => value.to_string(),
		}
	}
}

/// Collapse nested sequences into one ordered run of non-sequence leaves.
///
/// Depth is unlimited. Nesting shape is discarded, so `[[1, 2], 3]` and
/// `[1, [2, 3]]` produce the same run.
pub fn flatten(items: &[Value]) -> Vec<Leaf<'_>> {
	let mut out = Vec::with_capacity(items.len());
	push_flat(items, &mut out);
	out
}

/// Flatten a record into `key, value-leaves, key, value-leaves, ...` in entry order.
pub fn flatten_record(record: &Record) -> Vec<Leaf<'_>> {
	let mut out = Vec::with_capacity(record.len() * 2);
	for (key, value) in record.entries() {
		out.push(Leaf::Key(key));
		match value {
			Value::Sequence(items) => push_flat(items, &mut out),
			other => out.push(Leaf::Value(other)),
		}
	}
	out
}

fn push_flat<'a>(items: &'a [Value], out: &mut Vec<Leaf<'a>>) {
	let mut stack = vec![items.iter()];
	while let Some(iter) = stack.last_mut() {
		match iter.next() {
			Some(Value::Sequence(inner)) => stack.push(inner.iter()),
			Some(leaf) => out.push(Leaf::Value(leaf)),
			None => {
				stack.pop();
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{flatten, flatten_record};
	use crate::equal::{Record, Value};

	fn seq(items: Vec<Value>) -> Value {
		Value::Sequence(items)
	}

	fn rendered(leaves: &[super::Leaf<'_>]) -> Vec<String> {
		leaves.iter().map(|leaf| leaf.render()).collect()
	}

	#[test]
	fn nested_sequences_collapse_in_order() {
		let items = vec![Value::from(1), seq(vec![Value::from(2), seq(vec![seq(vec![Value::from(3)])])]), Value::from(4)];
		assert_eq!(rendered(&flatten(&items)), ["1", "2", "3", "4"]);
	}

	#[test]
	fn empty_sequences_vanish() {
		let items = vec![seq(vec![]), seq(vec![seq(vec![])]), Value::Null];
		assert_eq!(rendered(&flatten(&items)), ["null"]);
	}

	#[test]
	fn records_stay_leaves_inside_sequences() {
		let record: Record = [("a", Value::from(1))].into_iter().collect();
		let items = vec![seq(vec![Value::Record(record)])];
		assert_eq!(rendered(&flatten(&items)), ["{ a: 1 }"]);
	}

	#[test]
	fn record_entries_interleave_keys_and_values() {
		let record: Record = [("a", seq(vec![Value::from(1), seq(vec![Value::from(2)])])), ("b", Value::Absent)]
			.into_iter()
			.collect();
		assert_eq!(rendered(&flatten_record(&record)), ["\"a\"", "1", "2", "\"b\"", "undefined"]);
	}

	#[test]
	fn very_deep_nesting_does_not_recurse() {
		let mut value = Value::from(7);
		for _ in 0..100_000 {
			value = seq(vec![value]);
		}
		let items = vec![value];
		let leaves = flatten(&items);
		assert_eq!(rendered(&leaves), ["7"]);
		assert!(crate::equal::equals(&items[0], &items[0]));
	}
}
