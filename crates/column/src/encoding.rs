// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use jsoncast_type::{Type, Value, util::bitvec::BitVec};
use serde::{Deserialize, Serialize};

use crate::ColumnData;

/// A column as handed to the cast engine. Besides flat storage it may be a
/// dictionary (indices into an inner column) or a constant (one inner slot
/// repeated). Encodings nest, and every layer may add undefined slots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Column {
	Flat(ColumnData),
	Dictionary {
		indices: Vec<usize>,
		/// Slot `i` is undefined when bit `i` is unset.
		nulls: Option<BitVec>,
		inner: Box<Column>,
	},
	Constant {
		index: usize,
		len: usize,
		inner: Box<Column>,
	},
}

/// The outcome of looking up one logical slot through all encoding layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
	Null,
	Value {
		data: &'a ColumnData,
		position: usize,
	},
}

impl Column {
	pub fn dictionary(indices: Vec<usize>, nulls: Option<BitVec>, inner: Column) -> Self {
		assert!(nulls.as_ref().is_none_or(|n| n.len() == indices.len()), "dictionary nulls differ in length");
		assert!(indices.iter().all(|&i| i < inner.len()), "dictionary index out of range");
		Column::Dictionary {
			indices,
			nulls,
			inner: Box::new(inner),
		}
	}

	pub fn constant(index: usize, len: usize, inner: Column) -> Self {
		assert!(len == 0 || index < inner.len(), "constant index out of range");
		Column::Constant {
			index,
			len,
			inner: Box::new(inner),
		}
	}

	/// A constant column of `len` undefined slots of type `ty`.
	pub fn null_constant(ty: &Type, len: usize) -> Self {
		let mut inner = ColumnData::with_capacity(ty, 1);
		inner.push_undefined();
		Column::constant(0, len, Column::Flat(inner))
	}

	pub fn len(&self) -> usize {
		match self {
			Column::Flat(data) => data.len(),
			Column::Dictionary {
				indices,
				..
			} => indices.len(),
			Column::Constant {
				len,
				..
			} => *len,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn get_type(&self) -> Type {
		match self {
			Column::Flat(data) => data.get_type(),
			Column::Dictionary {
				inner,
				..
			}
			| Column::Constant {
				inner,
				..
			} => inner.get_type(),
		}
	}

	/// Peels every encoding layer for `row`. The slot is null as soon as any
	/// layer marks it undefined.
	pub fn resolve(&self, row: usize) -> Resolved<'_> {
		let mut column = self;
		let mut row = row;
		loop {
			match column {
				Column::Flat(data) => {
					return if data.is_defined(row) {
						Resolved::Value {
							data,
							position: row,
						}
					} else {
						Resolved::Null
					};
				}
				Column::Dictionary {
					indices,
					nulls,
					inner,
				} => {
					if nulls.as_ref().is_some_and(|n| !n.get(row)) {
						return Resolved::Null;
					}
					row = indices[row];
					column = inner;
				}
				Column::Constant {
					index,
					inner,
					..
				} => {
					row = *index;
					column = inner;
				}
			}
		}
	}

	pub fn is_defined(&self, row: usize) -> bool {
		matches!(self.resolve(row), Resolved::Value { .. })
	}

	pub fn get_value(&self, row: usize) -> Value {
		match self.resolve(row) {
			Resolved::Null => Value::Undefined,
			Resolved::Value {
				data,
				position,
			} => data.get_value(position),
		}
	}

	pub fn as_flat(&self) -> Option<&ColumnData> {
		match self {
			Column::Flat(data) => Some(data),
			_ => None,
		}
	}

	/// Output columns are always built flat.
	pub(crate) fn flat_mut(&mut self) -> &mut ColumnData {
		match self {
			Column::Flat(data) => data,
			_ => unreachable!("only flat columns are appended to"),
		}
	}

	pub(crate) fn truncate(&mut self, len: usize) {
		self.flat_mut().truncate(len)
	}
}

impl From<ColumnData> for Column {
	fn from(data: ColumnData) -> Self {
		Column::Flat(data)
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_flat_resolve() {
		let column = Column::Flat(ColumnData::int8_with_bitvec([1, 0], BitVec::from_slice(&[true, false])));
		assert_eq!(column.get_value(0), Value::Int8(1));
		assert_eq!(column.resolve(1), Resolved::Null);
	}

	#[test]
	fn test_dictionary_resolve() {
		let inner = Column::Flat(ColumnData::utf8(["a", "b"]));
		let column = Column::dictionary(vec![1, 1, 0], None, inner);
		assert_eq!(column.len(), 3);
		assert_eq!(column.get_value(0), Value::utf8("b"));
		assert_eq!(column.get_value(2), Value::utf8("a"));
	}

	#[test]
	fn test_nested_null_overlays() {
		let flat = Column::Flat(ColumnData::int8_with_bitvec([1, 2, 0], BitVec::from_slice(&[true, true, false])));
		let inner = Column::dictionary(vec![0, 1, 2], Some(BitVec::from_slice(&[true, false, true])), flat);
		let outer = Column::dictionary(vec![0, 1, 2, 0], Some(BitVec::from_slice(&[true, true, true, false])), inner);

		assert_eq!(outer.get_value(0), Value::Int8(1));
		assert!(!outer.is_defined(1));
		assert!(!outer.is_defined(2));
		assert!(!outer.is_defined(3));
	}

	#[test]
	fn test_constant() {
		let column = Column::constant(1, 4, Column::Flat(ColumnData::bool([false, true])));
		assert_eq!(column.len(), 4);
		assert!((0..4).all(|i| column.get_value(i) == Value::Boolean(true)));
	}

	#[test]
	fn test_null_constant() {
		let column = Column::null_constant(&Type::array(Type::Int4), 3);
		assert_eq!(column.len(), 3);
		assert_eq!(column.get_type(), Type::array(Type::Int4));
		assert!((0..3).all(|i| !column.is_defined(i)));
	}
}
