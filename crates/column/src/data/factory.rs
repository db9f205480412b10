// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use jsoncast_type::{
	Date, DateTime,
	util::bitvec::BitVec,
	value::container::{BoolContainer, NumberContainer, TemporalContainer, UndefinedContainer, Utf8Container},
};

use crate::ColumnData;

impl ColumnData {
	pub fn bool(data: impl IntoIterator<Item = bool>) -> Self {
		ColumnData::Bool(BoolContainer::from_vec(data.into_iter().collect()))
	}

	pub fn bool_with_bitvec(data: impl IntoIterator<Item = bool>, bitvec: BitVec) -> Self {
		ColumnData::Bool(BoolContainer::new(data.into_iter().collect(), bitvec))
	}

	pub fn int1(data: impl IntoIterator<Item = i8>) -> Self {
		ColumnData::Int1(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn int1_with_bitvec(data: impl IntoIterator<Item = i8>, bitvec: BitVec) -> Self {
		ColumnData::Int1(NumberContainer::new(data.into_iter().collect(), bitvec))
	}

	pub fn int2(data: impl IntoIterator<Item = i16>) -> Self {
		ColumnData::Int2(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn int4(data: impl IntoIterator<Item = i32>) -> Self {
		ColumnData::Int4(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn int8(data: impl IntoIterator<Item = i64>) -> Self {
		ColumnData::Int8(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn int8_with_bitvec(data: impl IntoIterator<Item = i64>, bitvec: BitVec) -> Self {
		ColumnData::Int8(NumberContainer::new(data.into_iter().collect(), bitvec))
	}

	pub fn float4(data: impl IntoIterator<Item = f32>) -> Self {
		ColumnData::Float4(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn float8(data: impl IntoIterator<Item = f64>) -> Self {
		ColumnData::Float8(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn float8_with_bitvec(data: impl IntoIterator<Item = f64>, bitvec: BitVec) -> Self {
		ColumnData::Float8(NumberContainer::new(data.into_iter().collect(), bitvec))
	}

	pub fn utf8<'a>(data: impl IntoIterator<Item = &'a str>) -> Self {
		ColumnData::Utf8(Utf8Container::from_vec(data.into_iter().map(str::to_string).collect()))
	}

	pub fn utf8_with_bitvec<'a>(data: impl IntoIterator<Item = &'a str>, bitvec: BitVec) -> Self {
		ColumnData::Utf8(Utf8Container::new(data.into_iter().map(str::to_string).collect(), bitvec))
	}

	pub fn json<'a>(data: impl IntoIterator<Item = &'a str>) -> Self {
		ColumnData::Json(Utf8Container::from_vec(data.into_iter().map(str::to_string).collect()))
	}

	pub fn json_with_bitvec<'a>(data: impl IntoIterator<Item = &'a str>, bitvec: BitVec) -> Self {
		ColumnData::Json(Utf8Container::new(data.into_iter().map(str::to_string).collect(), bitvec))
	}

	pub fn date(data: impl IntoIterator<Item = Date>) -> Self {
		ColumnData::Date(TemporalContainer::from_vec(data.into_iter().collect()))
	}

	pub fn datetime(data: impl IntoIterator<Item = DateTime>) -> Self {
		ColumnData::DateTime(TemporalContainer::from_vec(data.into_iter().collect()))
	}

	pub fn undefined(len: usize) -> Self {
		ColumnData::Undefined(UndefinedContainer::new(len))
	}
}
