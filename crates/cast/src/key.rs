// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use jsoncast_column::ColumnData;
use jsoncast_type::{Type, Value};

use crate::{
	error::JsonCastError,
	format::{write_bool, write_float, write_integer, write_string},
};

/// How keys of one map key type are canonicalized. Canonical text is the
/// sort key of map entries and the basis of the rendered object key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyPlan {
	Boolean,
	Int1,
	Int2,
	Int4,
	Int8,
	Float4,
	Float8,
	Utf8,
	Json,
}

impl KeyPlan {
	pub(crate) fn build(ty: &Type) -> Result<Self, JsonCastError> {
		Ok(match ty {
			Type::Boolean => KeyPlan::Boolean,
			Type::Int1 => KeyPlan::Int1,
			Type::Int2 => KeyPlan::Int2,
			Type::Int4 => KeyPlan::Int4,
			Type::Int8 => KeyPlan::Int8,
			Type::Float4 => KeyPlan::Float4,
			Type::Float8 => KeyPlan::Float8,
			Type::Utf8 => KeyPlan::Utf8,
			Type::Json => KeyPlan::Json,
			_ => {
				return Err(JsonCastError::UnsupportedKeyType {
					ty: ty.clone(),
				});
			}
		})
	}

	/// Appends the canonical text of the defined key at `position`.
	pub(crate) fn write_canonical(&self, data: &ColumnData, position: usize, out: &mut String) {
		match (self, data) {
			(KeyPlan::Boolean, ColumnData::Bool(c)) => write_bool(out, c.get(position).unwrap_or_default()),
			(KeyPlan::Int1, ColumnData::Int1(c)) => write_integer(out, c[position]),
			(KeyPlan::Int2, ColumnData::Int2(c)) => write_integer(out, c[position]),
			(KeyPlan::Int4, ColumnData::Int4(c)) => write_integer(out, c[position]),
			(KeyPlan::Int8, ColumnData::Int8(c)) => write_integer(out, c[position]),
			(KeyPlan::Float4, ColumnData::Float4(c)) => write_float(out, c[position]),
			(KeyPlan::Float8, ColumnData::Float8(c)) => write_float(out, c[position]),
			(KeyPlan::Utf8, ColumnData::Utf8(c)) | (KeyPlan::Json, ColumnData::Json(c)) => {
				out.push_str(c.get(position).unwrap_or_default())
			}
			(plan, data) => unreachable!("{:?} key plan over a {} column", plan, data.get_type()),
		}
	}

	/// Appends the object key for an entry whose canonical text is `canonical`.
	/// JSON keys are spliced as they are, everything else is quoted.
	pub(crate) fn write_object_key(&self, canonical: &str, out: &mut String) {
		match self {
			KeyPlan::Json => out.push_str(canonical),
			KeyPlan::Utf8 => write_string(out, canonical),
			_ => {
				out.push('"');
				out.push_str(canonical);
				out.push('"');
			}
		}
	}

	/// Upper bound of the rendered object key for the key at `position`.
	pub(crate) fn estimate(&self, data: &ColumnData, position: usize) -> usize {
		match (self, data) {
			(KeyPlan::Boolean, _) => 2 + 5,
			(KeyPlan::Int1, _) => 2 + 4,
			(KeyPlan::Int2, _) => 2 + 6,
			(KeyPlan::Int4, _) => 2 + 11,
			(KeyPlan::Int8, _) => 2 + 20,
			(KeyPlan::Float4, _) => 2 + 16,
			(KeyPlan::Float8, _) => 2 + 25,
			(KeyPlan::Utf8, ColumnData::Utf8(c)) => 2 + 6 * c.get(position).map_or(0, str::len),
			(KeyPlan::Json, ColumnData::Json(c)) => c.get(position).map_or(0, str::len),
			(plan, data) => unreachable!("{:?} key plan over a {} column", plan, data.get_type()),
		}
	}
}

/// The canonical key text of a scalar value: strings and JSON text as they
/// are, other scalars as their JSON literal. Goes through the same
/// `KeyPlan` the writer sorts map entries by.
pub fn canonical_key(value: &Value) -> Result<String, JsonCastError> {
	let ty = match value {
		Value::Undefined => return Err(JsonCastError::NullMapKey),
		Value::Boolean(_) => Type::Boolean,
		Value::Int1(_) => Type::Int1,
		Value::Int2(_) => Type::Int2,
		Value::Int4(_) => Type::Int4,
		Value::Int8(_) => Type::Int8,
		Value::Float4(_) => Type::Float4,
		Value::Float8(_) => Type::Float8,
		Value::Utf8(_) => Type::Utf8,
		Value::Json(_) => Type::Json,
		Value::Date(_) => Type::Date,
		Value::DateTime(_) => Type::DateTime,
		Value::Array(_) => Type::array(Type::Undefined),
		Value::Map(_) => Type::map(Type::Undefined, Type::Undefined),
		Value::Row(_) => Type::Row(vec![]),
	};
	let plan = KeyPlan::build(&ty)?;

	let mut data = ColumnData::with_capacity(&ty, 1);
	data.push_value(value);

	let mut out = String::new();
	plan.write_canonical(&data, 0, &mut out);
	Ok(out)
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_canonical_scalars() {
		assert_eq!(canonical_key(&Value::Float8(10.0)).unwrap(), "10.0");
		assert_eq!(canonical_key(&Value::Float8(-100000000.5)).unwrap(), "-1.000000005E8");
		assert_eq!(canonical_key(&Value::Int2(-3)).unwrap(), "-3");
		assert_eq!(canonical_key(&Value::Boolean(true)).unwrap(), "true");
	}

	#[test]
	fn test_canonical_text_is_raw() {
		assert_eq!(canonical_key(&Value::utf8("a\"b")).unwrap(), "a\"b");
		assert_eq!(canonical_key(&Value::json("\"a\"")).unwrap(), "\"a\"");
	}

	#[test]
	fn test_equal_values_equal_keys() {
		assert_eq!(canonical_key(&Value::Float4(1.5)).unwrap(), canonical_key(&Value::Float4(1.5)).unwrap());
	}

	#[test]
	fn test_matches_writer_sort_key() {
		let data = ColumnData::float8([10.0, -0.0, 1e-7, f64::NAN]);
		for position in 0..data.len() {
			let mut written = String::new();
			KeyPlan::Float8.write_canonical(&data, position, &mut written);
			assert_eq!(canonical_key(&data.get_value(position)).unwrap(), written);
		}

		let data = ColumnData::utf8(["", "tab\t", "\u{1F64F}"]);
		for position in 0..data.len() {
			let mut written = String::new();
			KeyPlan::Utf8.write_canonical(&data, position, &mut written);
			assert_eq!(canonical_key(&data.get_value(position)).unwrap(), written);
		}
	}

	#[test]
	fn test_temporal_key() {
		assert_eq!(
			canonical_key(&Value::Date(jsoncast_type::Date::from_days_since_epoch(0))),
			Err(JsonCastError::UnsupportedKeyType {
				ty: Type::Date
			})
		);
	}

	#[test]
	fn test_null_key() {
		assert_eq!(canonical_key(&Value::Undefined), Err(JsonCastError::NullMapKey));
	}

	#[test]
	fn test_container_key() {
		assert!(matches!(
			canonical_key(&Value::Array(vec![])),
			Err(JsonCastError::UnsupportedKeyType { .. })
		));
	}

	#[test]
	fn test_build_rejects_temporal_and_nested() {
		assert!(KeyPlan::build(&Type::DateTime).is_err());
		assert!(KeyPlan::build(&Type::array(Type::Int8)).is_err());
		assert_eq!(KeyPlan::build(&Type::Json).unwrap(), KeyPlan::Json);
	}

	#[test]
	fn test_object_key_quoting() {
		let mut out = String::new();
		KeyPlan::Float8.write_object_key("3.3", &mut out);
		KeyPlan::Utf8.write_object_key("é", &mut out);
		KeyPlan::Json.write_object_key("f", &mut out);
		assert_eq!(out, "\"3.3\"\"\\u00e9\"f");
	}
}
