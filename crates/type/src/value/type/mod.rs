// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod get;
mod parse;

pub use get::GetType;

/// A named field of a [`Type::Row`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowField {
	pub name: String,
	pub ty: Type,
}

impl RowField {
	pub fn new(name: impl Into<String>, ty: Type) -> Self {
		Self {
			name: name.into(),
			ty,
		}
	}
}

/// The logical type of a column or of a nested element.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Boolean,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// A UTF-8 encoded text
	Utf8,
	/// UTF-8 text holding one JSON document
	Json,
	/// A calendar date
	Date,
	/// A point in time with nanosecond precision
	DateTime,
	/// The type of a column that only holds undefined values
	Undefined,
	/// A variable length list of elements of the same type
	Array(Box<Type>),
	/// A list of key value entries
	Map {
		key: Box<Type>,
		value: Box<Type>,
	},
	/// A fixed sequence of named fields
	Row(Vec<RowField>),
}

impl Type {
	pub fn array(element: Type) -> Self {
		Type::Array(Box::new(element))
	}

	pub fn map(key: Type, value: Type) -> Self {
		Type::Map {
			key: Box::new(key),
			value: Box::new(value),
		}
	}

	/// Builds a row type, naming the fields `c0`, `c1`, ...
	pub fn row(fields: impl IntoIterator<Item = Type>) -> Self {
		Type::Row(fields.into_iter().enumerate().map(|(i, ty)| RowField::new(format!("c{}", i), ty)).collect())
	}

	pub fn is_bool(&self) -> bool {
		matches!(self, Type::Boolean)
	}

	pub fn is_integer(&self) -> bool {
		matches!(self, Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8)
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Type::Float4 | Type::Float8)
	}

	pub fn is_number(&self) -> bool {
		self.is_integer() || self.is_floating_point()
	}

	pub fn is_utf8(&self) -> bool {
		matches!(self, Type::Utf8)
	}

	pub fn is_json(&self) -> bool {
		matches!(self, Type::Json)
	}

	pub fn is_temporal(&self) -> bool {
		matches!(self, Type::Date | Type::DateTime)
	}

	/// Scalar types have no children.
	pub fn is_scalar(&self) -> bool {
		!self.is_nested()
	}

	pub fn is_nested(&self) -> bool {
		matches!(self, Type::Array(_) | Type::Map { .. } | Type::Row(_))
	}

	/// Whether a column of type `actual` can stand in where `self` is
	/// expected. Undefined columns are accepted anywhere, recursively.
	pub fn accepts(&self, actual: &Type) -> bool {
		match (self, actual) {
			(_, Type::Undefined) => true,
			(Type::Array(expected), Type::Array(actual)) => expected.accepts(actual),
			(
				Type::Map {
					key: ek,
					value: ev,
				},
				Type::Map {
					key: ak,
					value: av,
				},
			) => ek.accepts(ak) && ev.accepts(av),
			(Type::Row(expected), Type::Row(actual)) => {
				expected.len() == actual.len()
					&& expected.iter().zip(actual).all(|(e, a)| e.name == a.name && e.ty.accepts(&a.ty))
			}
			(expected, actual) => expected == actual,
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
		match self {
			Type::Boolean => f.write_str("Boolean"),
			Type::Int1 => f.write_str("Int1"),
			Type::Int2 => f.write_str("Int2"),
			Type::Int4 => f.write_str("Int4"),
			Type::Int8 => f.write_str("Int8"),
			Type::Float4 => f.write_str("Float4"),
			Type::Float8 => f.write_str("Float8"),
			Type::Utf8 => f.write_str("Utf8"),
			Type::Json => f.write_str("Json"),
			Type::Date => f.write_str("Date"),
			Type::DateTime => f.write_str("DateTime"),
			Type::Undefined => f.write_str("Undefined"),
			Type::Array(element) => write!(f, "Array<{}>", element),
			Type::Map {
				key,
				value,
			} => write!(f, "Map<{},{}>", key, value),
			Type::Row(fields) => {
				f.write_str("Row<")?;
				for (i, field) in fields.iter().enumerate() {
					if i > 0 {
						f.write_str(",")?;
					}
					write!(f, "{}:{}", field.name, field.ty)?;
				}
				f.write_str(">")
			}
		}
	}
}
