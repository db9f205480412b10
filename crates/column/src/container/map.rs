// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use jsoncast_type::{Type, Value, util::bitvec::BitVec};
use serde::{Deserialize, Serialize};

use crate::{ColumnData, encoding::Column};

/// Lists of key value entries. Entry `i` covers `sizes[i]` slots of both
/// `keys` and `values` starting at `offsets[i]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapContainer {
	offsets: Vec<usize>,
	sizes: Vec<usize>,
	bitvec: BitVec,
	keys: Box<Column>,
	values: Box<Column>,
}

impl MapContainer {
	pub fn with_capacity(key: &Type, value: &Type, capacity: usize) -> Self {
		Self {
			offsets: Vec::with_capacity(capacity),
			sizes: Vec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
			keys: Box::new(Column::Flat(ColumnData::with_capacity(key, capacity))),
			values: Box::new(Column::Flat(ColumnData::with_capacity(value, capacity))),
		}
	}

	pub fn from_parts(offsets: Vec<usize>, sizes: Vec<usize>, bitvec: BitVec, keys: Column, values: Column) -> Self {
		assert_eq!(offsets.len(), sizes.len());
		assert_eq!(offsets.len(), bitvec.len());
		assert_eq!(keys.len(), values.len(), "map keys and values differ in length");
		for (i, (&offset, &size)) in offsets.iter().zip(&sizes).enumerate() {
			assert!(!bitvec.get(i) || offset + size <= keys.len(), "map entry {} spans past the end of its keys", i);
		}
		Self {
			offsets,
			sizes,
			bitvec,
			keys: Box::new(keys),
			values: Box::new(values),
		}
	}

	pub fn len(&self) -> usize {
		self.bitvec.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bitvec.is_empty()
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		idx < self.len() && self.bitvec.get(idx)
	}

	pub fn offset(&self, idx: usize) -> usize {
		self.offsets[idx]
	}

	pub fn size(&self, idx: usize) -> usize {
		self.sizes[idx]
	}

	pub fn keys(&self) -> &Column {
		&self.keys
	}

	pub fn values(&self) -> &Column {
		&self.values
	}

	/// Key and value storage of a container that is being built. Both must
	/// grow by the same number of slots before the entry is closed.
	pub fn entries_mut(&mut self) -> (&mut ColumnData, &mut ColumnData) {
		(self.keys.flat_mut(), self.values.flat_mut())
	}

	pub fn key_type(&self) -> Type {
		self.keys.get_type()
	}

	pub fn value_type(&self) -> Type {
		self.values.get_type()
	}

	pub fn push_undefined(&mut self) {
		self.offsets.push(self.keys.len());
		self.sizes.push(0);
		self.bitvec.push(false);
	}

	pub fn close_entry(&mut self, start: usize) {
		debug_assert_eq!(self.keys.len(), self.values.len());
		self.offsets.push(start);
		self.sizes.push(self.keys.len() - start);
		self.bitvec.push(true);
	}

	pub fn get_value(&self, idx: usize) -> Value {
		if !self.is_defined(idx) {
			return Value::Undefined;
		}
		let offset = self.offsets[idx];
		Value::Map(
			(offset..offset + self.sizes[idx])
				.map(|i| (self.keys.get_value(i), self.values.get_value(i)))
				.collect(),
		)
	}

	/// Drops entries past `len` together with their child slots, including
	/// slots appended for an entry that was never closed.
	pub fn truncate(&mut self, len: usize) {
		let len = len.min(self.len());
		let end = if len == 0 {
			0
		} else {
			self.offsets[len - 1] + self.sizes[len - 1]
		};
		self.offsets.truncate(len);
		self.sizes.truncate(len);
		self.bitvec.truncate(len);
		self.keys.truncate(end);
		self.values.truncate(end);
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use crate::push::Push;

	#[test]
	fn test_build_entries() {
		let mut container = MapContainer::with_capacity(&Type::Utf8, &Type::Int8, 1);
		let start = container.keys().len();
		let (keys, values) = container.entries_mut();
		keys.push("a");
		values.push(1i64);
		keys.push("b");
		values.push_undefined();
		container.close_entry(start);
		container.push_undefined();

		assert_eq!(
			container.get_value(0),
			Value::Map(vec![(Value::utf8("a"), Value::Int8(1)), (Value::utf8("b"), Value::Undefined)])
		);
		assert_eq!(container.get_value(1), Value::Undefined);
	}

	#[test]
	fn test_truncate() {
		let mut container = MapContainer::with_capacity(&Type::Utf8, &Type::Int8, 1);
		container.push_undefined();
		let start = container.keys().len();
		let (keys, values) = container.entries_mut();
		keys.push("a");
		values.push(1i64);
		container.close_entry(start);

		container.truncate(1);
		assert_eq!(container.len(), 1);
		assert_eq!(container.keys().len(), 0);
		assert_eq!(container.values().len(), 0);
	}
}
