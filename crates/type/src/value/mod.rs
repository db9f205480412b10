// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod container;
mod date;
mod datetime;
pub mod is;
mod r#type;

pub use date::Date;
pub use datetime::DateTime;
pub use r#type::{GetType, RowField, Type};

/// A single value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 1-byte signed integer
	Int1(i8),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A 4-byte floating point
	Float4(f32),
	/// An 8-byte floating point
	Float8(f64),
	/// A UTF-8 encoded text
	Utf8(String),
	/// The text of one JSON document
	Json(String),
	/// A calendar date
	Date(Date),
	/// A point in time
	DateTime(DateTime),
	/// The elements of an array
	Array(Vec<Value>),
	/// The entries of a map, in storage order
	Map(Vec<(Value, Value)>),
	/// The fields of a row, in declaration order
	Row(Vec<Value>),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn json(v: impl Into<String>) -> Self {
		Value::Json(v.into())
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Boolean(v) => write!(f, "{}", v),
			Value::Int1(v) => write!(f, "{}", v),
			Value::Int2(v) => write!(f, "{}", v),
			Value::Int4(v) => write!(f, "{}", v),
			Value::Int8(v) => write!(f, "{}", v),
			Value::Float4(v) => write!(f, "{}", v),
			Value::Float8(v) => write!(f, "{}", v),
			Value::Utf8(v) => write!(f, "'{}'", v),
			Value::Json(v) => f.write_str(v),
			Value::Date(v) => write!(f, "{}", v),
			Value::DateTime(v) => write!(f, "{}", v),
			Value::Array(elements) => {
				f.write_str("[")?;
				for (i, element) in elements.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}", element)?;
				}
				f.write_str("]")
			}
			Value::Map(entries) => {
				f.write_str("{")?;
				for (i, (key, value)) in entries.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}: {}", key, value)?;
				}
				f.write_str("}")
			}
			Value::Row(fields) => {
				f.write_str("(")?;
				for (i, field) in fields.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}", field)?;
				}
				f.write_str(")")
			}
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Boolean(v)
	}
}

impl From<i8> for Value {
	fn from(v: i8) -> Self {
		Value::Int1(v)
	}
}

impl From<i16> for Value {
	fn from(v: i16) -> Self {
		Value::Int2(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int4(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int8(v)
	}
}

impl From<f32> for Value {
	fn from(v: f32) -> Self {
		Value::Float4(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Float8(v)
	}
}

impl From<Date> for Value {
	fn from(v: Date) -> Self {
		Value::Date(v)
	}
}

impl From<DateTime> for Value {
	fn from(v: DateTime) -> Self {
		Value::DateTime(v)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		v.map(Into::into).unwrap_or(Value::Undefined)
	}
}
