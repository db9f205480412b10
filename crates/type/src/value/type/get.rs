// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{Date, DateTime, Type};

pub trait GetType {
	fn get_type() -> Type;
}

impl GetType for bool {
	fn get_type() -> Type {
		Type::Boolean
	}
}

impl GetType for f32 {
	fn get_type() -> Type {
		Type::Float4
	}
}

impl GetType for f64 {
	fn get_type() -> Type {
		Type::Float8
	}
}

impl GetType for i8 {
	fn get_type() -> Type {
		Type::Int1
	}
}

impl GetType for i16 {
	fn get_type() -> Type {
		Type::Int2
	}
}

impl GetType for i32 {
	fn get_type() -> Type {
		Type::Int4
	}
}

impl GetType for i64 {
	fn get_type() -> Type {
		Type::Int8
	}
}

impl GetType for String {
	fn get_type() -> Type {
		Type::Utf8
	}
}

impl GetType for Date {
	fn get_type() -> Type {
		Type::Date
	}
}

impl GetType for DateTime {
	fn get_type() -> Type {
		Type::DateTime
	}
}
