// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use jsoncast_type::Value;

use crate::{ColumnData, push::Push};

impl ColumnData {
	/// Appends a materialized value, recursing into nested containers.
	/// [`Value::Undefined`] appends an undefined slot at any level.
	///
	/// # Panics
	///
	/// When the shape of `value` does not match the column type.
	pub fn push_value(&mut self, value: &Value) {
		match (self, value) {
			(data, Value::Undefined) => data.push_undefined(),
			(data @ ColumnData::Bool(_), Value::Boolean(v)) => data.push(*v),
			(data @ ColumnData::Int1(_), Value::Int1(v)) => data.push(*v),
			(data @ ColumnData::Int2(_), Value::Int2(v)) => data.push(*v),
			(data @ ColumnData::Int4(_), Value::Int4(v)) => data.push(*v),
			(data @ ColumnData::Int8(_), Value::Int8(v)) => data.push(*v),
			(data @ ColumnData::Float4(_), Value::Float4(v)) => data.push(*v),
			(data @ ColumnData::Float8(_), Value::Float8(v)) => data.push(*v),
			(data @ ColumnData::Utf8(_), Value::Utf8(v)) => data.push(v.as_str()),
			(data @ ColumnData::Json(_), Value::Json(v)) => data.push(v.as_str()),
			(data @ ColumnData::Date(_), Value::Date(v)) => data.push(*v),
			(data @ ColumnData::DateTime(_), Value::DateTime(v)) => data.push(*v),
			(ColumnData::Array(container), Value::Array(elements)) => {
				let start = container.elements().len();
				let child = container.elements_mut();
				for element in elements {
					child.push_value(element);
				}
				container.close_entry(start);
			}
			(ColumnData::Map(container), Value::Map(entries)) => {
				let start = container.keys().len();
				let (keys, values) = container.entries_mut();
				for (key, value) in entries {
					keys.push_value(key);
					values.push_value(value);
				}
				container.close_entry(start);
			}
			(ColumnData::Row(container), Value::Row(fields)) => {
				assert_eq!(fields.len(), container.fields().len(), "row value has the wrong number of fields");
				for (i, field) in fields.iter().enumerate() {
					container.field_mut(i).push_value(field);
				}
				container.close_row();
			}
			(data, value) => panic!("cannot push {} into a {} column", value, data.get_type()),
		}
	}
}
