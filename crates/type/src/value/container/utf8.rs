// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::{util::bitvec::BitVec, value::Value};

/// Text storage. Holds both Utf8 and Json columns, the caller decides which
/// [`Value`] variant a slot maps to.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Utf8Container {
	data: Vec<String>,
	bitvec: BitVec,
}

impl Utf8Container {
	pub fn new(data: Vec<String>, bitvec: BitVec) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self {
			data,
			bitvec,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: Vec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_vec(data: Vec<String>) -> Self {
		let len = data.len();
		Self {
			data,
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

	pub fn push(&mut self, value: String) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(String::new());
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		if self.is_defined(index) {
			self.data.get(index).map(String::as_str)
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
		self.get(index).map(Value::utf8).unwrap_or(Value::Undefined)
	}

	pub fn truncate(&mut self, len: usize) {
		self.data.truncate(len);
		self.bitvec.truncate(len);
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
		self.data.iter().zip(self.bitvec.iter()).map(|(v, defined)| {
			if defined {
				Some(v.as_str())
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
	fn test_push() {
		let mut container = Utf8Container::with_capacity(2);
		container.push("hello".to_string());
		container.push_undefined();

		assert_eq!(container.get(0), Some("hello"));
		assert_eq!(container.get(1), None);
		assert_eq!(container.get_value(0), Value::Utf8("hello".to_string()));
	}

	#[test]
	fn test_from_vec_all_defined() {
		let container = Utf8Container::from_vec(vec!["a".to_string(), "".to_string()]);
		assert!(container.is_fully_defined());
		assert_eq!(container.iter().collect::<Vec<_>>(), vec![Some("a"), Some("")]);
	}
}
