// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::{
	util::bitvec::BitVec,
	value::{Value, is::IsTemporal},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemporalContainer<T>
where
	T: IsTemporal,
{
	data: Vec<T>,
	bitvec: BitVec,
}

impl<T: IsTemporal> Default for TemporalContainer<T> {
	fn default() -> Self {
		Self::with_capacity(0)
	}
}

impl<T: IsTemporal> TemporalContainer<T> {
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: Vec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_vec(data: Vec<T>) -> Self {
		let len = data.len();
		Self {
			data,
			bitvec: BitVec::repeat(len, true),
		}
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn push(&mut self, value: T) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(T::default());
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<&T> {
		if self.is_defined(index) {
			self.data.get(index)
		} else {
			None
		}
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		idx < self.len() && self.bitvec.get(idx)
	}

	pub fn get_value(&self, index: usize) -> Value {
		self.get(index).map(|v| (*v).into()).unwrap_or(Value::Undefined)
	}

	pub fn truncate(&mut self, len: usize) {
		self.data.truncate(len);
		self.bitvec.truncate(len);
	}
}
