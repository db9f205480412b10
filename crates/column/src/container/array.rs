// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use jsoncast_type::{Type, Value, util::bitvec::BitVec};
use serde::{Deserialize, Serialize};

use crate::{ColumnData, encoding::Column};

/// Variable length lists. Entry `i` covers `sizes[i]` slots of `elements`
/// starting at `offsets[i]`. Spans of different entries may overlap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrayContainer {
	offsets: Vec<usize>,
	sizes: Vec<usize>,
	bitvec: BitVec,
	elements: Box<Column>,
}

impl ArrayContainer {
	pub fn with_capacity(element: &Type, capacity: usize) -> Self {
		Self {
			offsets: Vec::with_capacity(capacity),
			sizes: Vec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
			elements: Box::new(Column::Flat(ColumnData::with_capacity(element, capacity))),
		}
	}

	pub fn from_parts(offsets: Vec<usize>, sizes: Vec<usize>, bitvec: BitVec, elements: Column) -> Self {
		assert_eq!(offsets.len(), sizes.len());
		assert_eq!(offsets.len(), bitvec.len());
		for (i, (&offset, &size)) in offsets.iter().zip(&sizes).enumerate() {
			assert!(
				!bitvec.get(i) || offset + size <= elements.len(),
				"array entry {} spans past the end of its elements",
				i
			);
		}
		Self {
			offsets,
			sizes,
			bitvec,
			elements: Box::new(elements),
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

	pub fn elements(&self) -> &Column {
		&self.elements
	}

	/// The element storage of a container that is being built.
	pub fn elements_mut(&mut self) -> &mut ColumnData {
		self.elements.flat_mut()
	}

	pub fn element_type(&self) -> Type {
		self.elements.get_type()
	}

	pub fn push_undefined(&mut self) {
		self.offsets.push(self.elements.len());
		self.sizes.push(0);
		self.bitvec.push(false);
	}

	/// Closes an entry whose elements were appended to `elements_mut()`
	/// starting at `start`.
	pub fn close_entry(&mut self, start: usize) {
		debug_assert!(start <= self.elements.len());
		self.offsets.push(start);
		self.sizes.push(self.elements.len() - start);
		self.bitvec.push(true);
	}

	pub fn get_value(&self, idx: usize) -> Value {
		if !self.is_defined(idx) {
			return Value::Undefined;
		}
		let offset = self.offsets[idx];
		Value::Array((offset..offset + self.sizes[idx]).map(|i| self.elements.get_value(i)).collect())
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
		self.elements.truncate(end);
	}
}
