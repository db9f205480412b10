// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::{util::bitvec::BitVec, value::Value};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoolContainer {
	data: BitVec,
	bitvec: BitVec,
}

impl BoolContainer {
	pub fn new(data: Vec<bool>, bitvec: BitVec) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self {
			data: BitVec::from_slice(&data),
			bitvec,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: BitVec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_vec(data: Vec<bool>) -> Self {
		let len = data.len();
		Self {
			data: BitVec::from_slice(&data),
			bitvec: BitVec::repeat(len, true),
		}
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.data.len(), self.bitvec.len());
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn push(&mut self, value: bool) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(false);
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<bool> {
		if self.is_defined(index) {
			Some(self.data.get(index))
		} else {
			None
		}
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		idx < self.len() && self.bitvec.get(idx)
	}

	pub fn is_fully_defined(&self) -> bool {
		self.bitvec.all_ones()
	}

	pub fn get_value(&self, index: usize) -> Value {
		self.get(index).map(Value::Boolean).unwrap_or(Value::Undefined)
	}

	pub fn truncate(&mut self, len: usize) {
		self.data.truncate(len);
		self.bitvec.truncate(len);
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<bool>> + '_ {
		self.data.iter().zip(self.bitvec.iter()).map(|(v, defined)| {
			if defined {
				Some(v)
			} else {
				None
			}
		})
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_new() {
		let container = BoolContainer::new(vec![true, false, true], BitVec::from_slice(&[true, true, true]));

		assert_eq!(container.len(), 3);
		assert_eq!(container.get(0), Some(true));
		assert_eq!(container.get(1), Some(false));
		assert_eq!(container.get(2), Some(true));
	}

	#[test]
	fn test_push() {
		let mut container = BoolContainer::with_capacity(3);

		container.push(true);
		container.push(false);
		container.push_undefined();

		assert_eq!(container.len(), 3);
		assert_eq!(container.get(2), None);
		assert!(container.is_defined(1));
		assert!(!container.is_defined(2));
		assert!(!container.is_fully_defined());
		assert_eq!(container.get_value(2), Value::Undefined);
	}

	#[test]
	fn test_iter() {
		let container = BoolContainer::new(vec![true, false, true], BitVec::from_slice(&[true, false, true]));
		let collected: Vec<Option<bool>> = container.iter().collect();
		assert_eq!(collected, vec![Some(true), None, Some(true)]);
	}

	#[test]
	fn test_truncate() {
		let mut container = BoolContainer::from_vec(vec![true, true, true]);
		container.truncate(1);
		container.push_undefined();
		assert_eq!(container.iter().collect::<Vec<_>>(), vec![Some(true), None]);
	}
}
