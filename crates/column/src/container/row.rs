// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use jsoncast_type::{RowField, Type, Value, util::bitvec::BitVec};
use serde::{Deserialize, Serialize};

use crate::{ColumnData, encoding::Column};

/// Fixed sets of named fields. Every field column has one slot per row,
/// also for rows that are undefined as a whole.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowContainer {
	names: Vec<String>,
	fields: Vec<Column>,
	bitvec: BitVec,
}

impl RowContainer {
	pub fn with_capacity(fields: &[RowField], capacity: usize) -> Self {
		Self {
			names: fields.iter().map(|f| f.name.clone()).collect(),
			fields: fields.iter().map(|f| Column::Flat(ColumnData::with_capacity(&f.ty, capacity))).collect(),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_parts(names: Vec<String>, fields: Vec<Column>, bitvec: BitVec) -> Self {
		assert_eq!(names.len(), fields.len());
		for field in &fields {
			assert_eq!(field.len(), bitvec.len(), "row field length differs from row count");
		}
		Self {
			names,
			fields,
			bitvec,
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

	pub fn names(&self) -> &[String] {
		&self.names
	}

	pub fn fields(&self) -> &[Column] {
		&self.fields
	}

	pub fn field_mut(&mut self, idx: usize) -> &mut ColumnData {
		self.fields[idx].flat_mut()
	}

	pub fn row_fields(&self) -> Vec<RowField> {
		self.names.iter().zip(&self.fields).map(|(name, field)| RowField::new(name.clone(), field.get_type())).collect()
	}

	pub fn push_undefined(&mut self) {
		for field in &mut self.fields {
			field.flat_mut().push_undefined();
		}
		self.bitvec.push(false);
	}

	/// Closes a row after one slot was appended to every field.
	pub fn close_row(&mut self) {
		debug_assert!(self.fields.iter().all(|f| f.len() == self.bitvec.len() + 1));
		self.bitvec.push(true);
	}

	pub fn get_value(&self, idx: usize) -> Value {
		if !self.is_defined(idx) {
			return Value::Undefined;
		}
		Value::Row(self.fields.iter().map(|f| f.get_value(idx)).collect())
	}

	pub fn truncate(&mut self, len: usize) {
		for field in &mut self.fields {
			field.truncate(len);
		}
		self.bitvec.truncate(len);
	}

	pub fn get_type(&self) -> Type {
		Type::Row(self.row_fields())
	}
}
