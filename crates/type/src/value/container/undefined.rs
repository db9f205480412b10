// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// A column where every slot is undefined. Only the length is stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndefinedContainer {
	len: usize,
}

impl UndefinedContainer {
	pub fn new(len: usize) -> Self {
		Self {
			len,
		}
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn is_defined(&self, _idx: usize) -> bool {
		false
	}

	pub fn push_undefined(&mut self) {
		self.len += 1;
	}

	pub fn truncate(&mut self, len: usize) {
		self.len = self.len.min(len);
	}
}
