// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Rendering of typed values as JSON text.

mod estimate;
mod render;

use jsoncast_type::Type;

use crate::{error::JsonCastError, key::KeyPlan};

pub(crate) use render::render_row;

/// The writer strategy for one source type, resolved once per cast.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum WritePlan {
	Undefined,
	Boolean,
	Int1,
	Int2,
	Int4,
	Int8,
	Float4,
	Float8,
	Utf8,
	Json,
	Date,
	DateTime,
	Array(Box<WritePlan>),
	Map {
		key: KeyPlan,
		value: Box<WritePlan>,
	},
	Row(Vec<WritePlan>),
}

impl WritePlan {
	/// Fails with the first key type that has no canonical form.
	pub(crate) fn build(ty: &Type) -> Result<Self, JsonCastError> {
		Ok(match ty {
			Type::Undefined => WritePlan::Undefined,
			Type::Boolean => WritePlan::Boolean,
			Type::Int1 => WritePlan::Int1,
			Type::Int2 => WritePlan::Int2,
			Type::Int4 => WritePlan::Int4,
			Type::Int8 => WritePlan::Int8,
			Type::Float4 => WritePlan::Float4,
			Type::Float8 => WritePlan::Float8,
			Type::Utf8 => WritePlan::Utf8,
			Type::Json => WritePlan::Json,
			Type::Date => WritePlan::Date,
			Type::DateTime => WritePlan::DateTime,
			Type::Array(element) => WritePlan::Array(Box::new(Self::build(element)?)),
			Type::Map {
				key,
				value,
			} => WritePlan::Map {
				key: KeyPlan::build(key)?,
				value: Box::new(Self::build(value)?),
			},
			Type::Row(fields) => {
				WritePlan::Row(fields.iter().map(|f| Self::build(&f.ty)).collect::<Result<_, _>>()?)
			}
		})
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_build_nested() {
		let plan = WritePlan::build(&Type::map(Type::Utf8, Type::array(Type::Json))).unwrap();
		assert_eq!(
			plan,
			WritePlan::Map {
				key: KeyPlan::Utf8,
				value: Box::new(WritePlan::Array(Box::new(WritePlan::Json))),
			}
		);
	}

	#[test]
	fn test_build_rejects_timestamp_keys_at_any_depth() {
		let ty = Type::array(Type::row([Type::Int8, Type::map(Type::DateTime, Type::Int8)]));
		assert_eq!(
			WritePlan::build(&ty),
			Err(JsonCastError::UnsupportedKeyType {
				ty: Type::DateTime
			})
		);
	}
}
