// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use jsoncast_type::Value;

use crate::ColumnData;

impl ColumnData {
	/// Materializes slot `index`, nested children included. Undefined slots
	/// and out of range indices yield [`Value::Undefined`].
	pub fn get_value(&self, index: usize) -> Value {
		match self {
			ColumnData::Bool(container) => container.get_value(index),
			ColumnData::Int1(container) => container.get_value(index),
			ColumnData::Int2(container) => container.get_value(index),
			ColumnData::Int4(container) => container.get_value(index),
			ColumnData::Int8(container) => container.get_value(index),
			ColumnData::Float4(container) => container.get_value(index),
			ColumnData::Float8(container) => container.get_value(index),
			ColumnData::Utf8(container) => container.get_value(index),
			ColumnData::Json(container) => container.get(index).map(Value::json).unwrap_or(Value::Undefined),
			ColumnData::Date(container) => container.get_value(index),
			ColumnData::DateTime(container) => container.get_value(index),
			ColumnData::Array(container) => container.get_value(index),
			ColumnData::Map(container) => container.get_value(index),
			ColumnData::Row(container) => container.get_value(index),
			ColumnData::Undefined(_) => Value::Undefined,
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
		(0..self.len()).map(move |i| self.get_value(i))
	}
}

#[cfg(test)]
pub mod tests {
	use jsoncast_type::util::bitvec::BitVec;

	use super::*;

	#[test]
	fn test_get_value_json_keeps_text() {
		let data = ColumnData::json_with_bitvec(["[1, 2]", ""], BitVec::from_slice(&[true, false]));
		assert_eq!(data.get_value(0), Value::Json("[1, 2]".to_string()));
		assert_eq!(data.get_value(1), Value::Undefined);
	}

	#[test]
	fn test_iter() {
		let data = ColumnData::bool([true, false]);
		assert_eq!(data.iter().collect::<Vec<_>>(), vec![Value::Boolean(true), Value::Boolean(false)]);
	}
}
