// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod value;

use jsoncast_type::{Date, DateTime};

use crate::ColumnData;

/// Appends one defined slot of a native type.
///
/// # Panics
///
/// When the column does not store values of type `T`.
pub trait Push<T> {
	fn push(&mut self, value: T);
}

macro_rules! impl_push {
	($t:ty, $variant:ident) => {
		impl Push<$t> for ColumnData {
			fn push(&mut self, value: $t) {
				match self {
					ColumnData::$variant(container) => container.push(value),
					other => panic!(
						"cannot push {} into a {} column",
						stringify!($t),
						other.get_type()
					),
				}
			}
		}
	};
}

impl_push!(bool, Bool);
impl_push!(i8, Int1);
impl_push!(i16, Int2);
impl_push!(i32, Int4);
impl_push!(i64, Int8);
impl_push!(f32, Float4);
impl_push!(f64, Float8);
impl_push!(Date, Date);
impl_push!(DateTime, DateTime);

impl Push<String> for ColumnData {
	fn push(&mut self, value: String) {
		match self {
			ColumnData::Utf8(container) | ColumnData::Json(container) => container.push(value),
			other => panic!("cannot push text into a {} column", other.get_type()),
		}
	}
}

impl Push<&str> for ColumnData {
	fn push(&mut self, value: &str) {
		self.push(value.to_string())
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_push_matching_type() {
		let mut data = ColumnData::int4([]);
		data.push(7i32);
		assert_eq!(data, ColumnData::int4([7]));
	}

	#[test]
	fn test_push_text_into_json() {
		let mut data = ColumnData::json([]);
		data.push("{}");
		assert_eq!(data, ColumnData::json(["{}"]));
	}

	#[test]
	#[should_panic(expected = "cannot push i64 into a Int4 column")]
	fn test_push_mismatch() {
		let mut data = ColumnData::int4([]);
		data.push(7i64);
	}
}
