// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod factory;
mod get;

use jsoncast_type::{
	Date, DateTime, Type,
	value::container::{BoolContainer, NumberContainer, TemporalContainer, UndefinedContainer, Utf8Container},
};
use serde::{Deserialize, Serialize};

use crate::container::{ArrayContainer, MapContainer, RowContainer};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	Bool(BoolContainer),
	Int1(NumberContainer<i8>),
	Int2(NumberContainer<i16>),
	Int4(NumberContainer<i32>),
	Int8(NumberContainer<i64>),
	Float4(NumberContainer<f32>),
	Float8(NumberContainer<f64>),
	Utf8(Utf8Container),
	// same storage as Utf8, every defined slot holds one JSON document
	Json(Utf8Container),
	Date(TemporalContainer<Date>),
	DateTime(TemporalContainer<DateTime>),
	Array(ArrayContainer),
	Map(MapContainer),
	Row(RowContainer),
	// special case: all undefined
	Undefined(UndefinedContainer),
}

/// Runs the same expression against whichever container `self` holds.
macro_rules! with_container {
	($self:expr, |$c:ident| $body:expr) => {
		match $self {
			ColumnData::Bool($c) => $body,
			ColumnData::Int1($c) => $body,
			ColumnData::Int2($c) => $body,
			ColumnData::Int4($c) => $body,
			ColumnData::Int8($c) => $body,
			ColumnData::Float4($c) => $body,
			ColumnData::Float8($c) => $body,
			ColumnData::Utf8($c) => $body,
			ColumnData::Json($c) => $body,
			ColumnData::Date($c) => $body,
			ColumnData::DateTime($c) => $body,
			ColumnData::Array($c) => $body,
			ColumnData::Map($c) => $body,
			ColumnData::Row($c) => $body,
			ColumnData::Undefined($c) => $body,
		}
	};
}

impl ColumnData {
	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Bool(_) => Type::Boolean,
			ColumnData::Int1(_) => Type::Int1,
			ColumnData::Int2(_) => Type::Int2,
			ColumnData::Int4(_) => Type::Int4,
			ColumnData::Int8(_) => Type::Int8,
			ColumnData::Float4(_) => Type::Float4,
			ColumnData::Float8(_) => Type::Float8,
			ColumnData::Utf8(_) => Type::Utf8,
			ColumnData::Json(_) => Type::Json,
			ColumnData::Date(_) => Type::Date,
			ColumnData::DateTime(_) => Type::DateTime,
			ColumnData::Array(container) => Type::array(container.element_type()),
			ColumnData::Map(container) => Type::map(container.key_type(), container.value_type()),
			ColumnData::Row(container) => container.get_type(),
			ColumnData::Undefined(_) => Type::Undefined,
		}
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		with_container!(self, |c| c.is_defined(idx))
	}

	pub fn len(&self) -> usize {
		with_container!(self, |c| c.len())
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Shortens the column to `len` rows, nested children included.
	pub fn truncate(&mut self, len: usize) {
		with_container!(self, |c| c.truncate(len))
	}

	pub fn push_undefined(&mut self) {
		with_container!(self, |c| c.push_undefined())
	}
}

impl ColumnData {
	pub fn with_capacity(target: &Type, capacity: usize) -> Self {
		match target {
			Type::Boolean => ColumnData::Bool(BoolContainer::with_capacity(capacity)),
			Type::Int1 => ColumnData::Int1(NumberContainer::with_capacity(capacity)),
			Type::Int2 => ColumnData::Int2(NumberContainer::with_capacity(capacity)),
			Type::Int4 => ColumnData::Int4(NumberContainer::with_capacity(capacity)),
			Type::Int8 => ColumnData::Int8(NumberContainer::with_capacity(capacity)),
			Type::Float4 => ColumnData::Float4(NumberContainer::with_capacity(capacity)),
			Type::Float8 => ColumnData::Float8(NumberContainer::with_capacity(capacity)),
			Type::Utf8 => ColumnData::Utf8(Utf8Container::with_capacity(capacity)),
			Type::Json => ColumnData::Json(Utf8Container::with_capacity(capacity)),
			Type::Date => ColumnData::Date(TemporalContainer::with_capacity(capacity)),
			Type::DateTime => ColumnData::DateTime(TemporalContainer::with_capacity(capacity)),
			Type::Array(element) => ColumnData::Array(ArrayContainer::with_capacity(element, capacity)),
			Type::Map {
				key,
				value,
			} => ColumnData::Map(MapContainer::with_capacity(key, value, capacity)),
			Type::Row(fields) => ColumnData::Row(RowContainer::with_capacity(fields, capacity)),
			Type::Undefined => ColumnData::Undefined(UndefinedContainer::new(0)),
		}
	}
}
