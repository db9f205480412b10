// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use jsoncast_column::{Column, ColumnData, Resolved};
use smallvec::SmallVec;

use crate::{
	context::CastContext,
	error::JsonCastError,
	format::{write_bool, write_float, write_integer, write_string},
	write::{WritePlan, estimate::estimate},
};

/// Renders the defined row `row` into a buffer sized by the estimator.
pub(crate) fn render_row(
	ctx: &CastContext<'_>,
	plan: &WritePlan,
	column: &Column,
	row: usize,
) -> Result<String, JsonCastError> {
	let bound = estimate(ctx, plan, column, row);
	let mut out = String::with_capacity(bound);
	render(ctx, plan, column, row, &mut out)?;
	debug_assert!(out.len() <= bound, "estimated {} bytes but rendered {}: {}", bound, out.len(), out);
	out.shrink_to_fit();
	Ok(out)
}

fn render(
	ctx: &CastContext<'_>,
	plan: &WritePlan,
	column: &Column,
	row: usize,
	out: &mut String,
) -> Result<(), JsonCastError> {
	match column.resolve(row) {
		Resolved::Null => {
			out.push_str("null");
			Ok(())
		}
		Resolved::Value {
			data,
			position,
		} => render_value(ctx, plan, data, position, out),
	}
}

fn render_value(
	ctx: &CastContext<'_>,
	plan: &WritePlan,
	data: &ColumnData,
	position: usize,
	out: &mut String,
) -> Result<(), JsonCastError> {
	match (plan, data) {
		(WritePlan::Undefined, _) => out.push_str("null"),
		(WritePlan::Boolean, ColumnData::Bool(c)) => write_bool(out, c.get(position).unwrap_or_default()),
		(WritePlan::Int1, ColumnData::Int1(c)) => write_integer(out, c[position]),
		(WritePlan::Int2, ColumnData::Int2(c)) => write_integer(out, c[position]),
		(WritePlan::Int4, ColumnData::Int4(c)) => write_integer(out, c[position]),
		(WritePlan::Int8, ColumnData::Int8(c)) => write_integer(out, c[position]),
		(WritePlan::Float4, ColumnData::Float4(c)) => write_float(out, c[position]),
		(WritePlan::Float8, ColumnData::Float8(c)) => write_float(out, c[position]),
		(WritePlan::Utf8, ColumnData::Utf8(c)) => write_string(out, c.get(position).unwrap_or_default()),
		(WritePlan::Json, ColumnData::Json(c)) => out.push_str(c.get(position).unwrap_or("null")),
		(WritePlan::Date, ColumnData::Date(c)) => {
			if let Some(date) = c.get(position) {
				ctx.calendar().format_date(*date, out)?;
			}
		}
		(WritePlan::DateTime, ColumnData::DateTime(c)) => {
			if let Some(timestamp) = c.get(position) {
				ctx.calendar().format_timestamp(*timestamp, ctx.timestamp_offset(), out)?;
			}
		}
		(WritePlan::Array(element), ColumnData::Array(c)) => {
			let offset = c.offset(position);
			out.push('[');
			for i in 0..c.size(position) {
				if i > 0 {
					out.push(',');
				}
				render(ctx, element, c.elements(), offset + i, out)?;
			}
			out.push(']');
		}
		(
			WritePlan::Map {
				key,
				value,
			},
			ColumnData::Map(c),
		) => {
			let offset = c.offset(position);
			let mut entries: SmallVec<[(String, usize); 16]> = SmallVec::with_capacity(c.size(position));
			for i in offset..offset + c.size(position) {
				let Resolved::Value {
					data: key_data,
					position: key_position,
				} = c.keys().resolve(i)
				else {
					return Err(JsonCastError::NullMapKey);
				};
				let mut canonical = String::new();
				key.write_canonical(key_data, key_position, &mut canonical);
				entries.push((canonical, i));
			}
			entries.sort_by(|(l, _), (r, _)| l.as_bytes().cmp(r.as_bytes()));

			out.push('{');
			for (n, (canonical, i)) in entries.iter().enumerate() {
				if n > 0 {
					out.push(',');
				}
				key.write_object_key(canonical, out);
				out.push(':');
				render(ctx, value, c.values(), *i, out)?;
			}
			out.push('}');
		}
		(WritePlan::Row(fields), ColumnData::Row(c)) => {
			out.push('[');
			for (n, (plan, field)) in fields.iter().zip(c.fields()).enumerate() {
				if n > 0 {
					out.push(',');
				}
				render(ctx, plan, field, position, out)?;
			}
			out.push(']');
		}
		(plan, data) => unreachable!("{:?} write plan over a {} column", plan, data.get_type()),
	}
	Ok(())
}

#[cfg(test)]
pub mod tests {
	use jsoncast_column::container::ArrayContainer;
	use jsoncast_type::{Type, Value, util::bitvec::BitVec};

	use super::*;
	use crate::{calendar::ChronoCalendar, config::CastConfig};

	fn render_all(ty: &Type, column: &Column) -> Vec<Result<String, JsonCastError>> {
		let calendar = ChronoCalendar;
		let config = CastConfig::default();
		let ctx = CastContext::new(&config, ty, &Type::Json, &calendar).unwrap();
		let plan = WritePlan::build(ty).unwrap();
		(0..column.len()).map(|row| render_row(&ctx, &plan, column, row)).collect()
	}

	fn column_of(ty: &Type, values: &[Value]) -> Column {
		let mut data = ColumnData::with_capacity(ty, values.len());
		for value in values {
			data.push_value(value);
		}
		Column::Flat(data)
	}

	#[test]
	fn test_map_sorted_by_canonical_key() {
		let ty = Type::map(Type::Float8, Type::Int8);
		let column = column_of(
			&ty,
			&[Value::Map(vec![
				(Value::Float8(4.4), Value::Undefined),
				(Value::Float8(3.3), Value::Int8(2)),
				(Value::Float8(10.0), Value::Int8(9)),
				(Value::Float8(-100000000.5), Value::Int8(99)),
			])],
		);
		assert_eq!(render_all(&ty, &column), vec![Ok(r#"{"-1.000000005E8":99,"10.0":9,"3.3":2,"4.4":null}"#.to_string())]);
	}

	#[test]
	fn test_map_null_key_fails_row() {
		let ty = Type::map(Type::Utf8, Type::Int8);
		let column = column_of(&ty, &[Value::Map(vec![(Value::Undefined, Value::Int8(1))])]);
		assert_eq!(render_all(&ty, &column), vec![Err(JsonCastError::NullMapKey)]);
	}

	#[test]
	fn test_json_keys_and_elements_are_spliced() {
		let ty = Type::map(Type::Json, Type::array(Type::Json));
		let column = column_of(
			&ty,
			&[Value::Map(vec![
				(Value::json("g"), Value::Undefined),
				(Value::json("f"), Value::Array(vec![Value::Undefined, Value::json("red"), Value::json("1.1")])),
			])],
		);
		assert_eq!(render_all(&ty, &column), vec![Ok("{f:[null,red,1.1],g:null}".to_string())]);
	}

	#[test]
	fn test_row_renders_as_array() {
		let ty = Type::row([Type::Int8, Type::Utf8, Type::Boolean]);
		let column = column_of(&ty, &[Value::Row(vec![Value::Int8(1), Value::Undefined, Value::Boolean(false)])]);
		assert_eq!(render_all(&ty, &column), vec![Ok("[1,null,false]".to_string())]);
	}

	#[test]
	fn test_empty_containers() {
		let ty = Type::array(Type::Int8);
		let column = column_of(&ty, &[Value::Array(vec![])]);
		assert_eq!(render_all(&ty, &column), vec![Ok("[]".to_string())]);

		let ty = Type::map(Type::Utf8, Type::Int8);
		let column = column_of(&ty, &[Value::Map(vec![])]);
		assert_eq!(render_all(&ty, &column), vec![Ok("{}".to_string())]);
	}

	#[test]
	fn test_estimate_covers_worst_case_strings() {
		let ty = Type::array(Type::Utf8);
		let mut data = ColumnData::with_capacity(&ty, 1);
		data.push_value(&Value::Array(vec![Value::utf8("\u{1F64F}\u{0001}é\"")]));
		let rendered = render_all(&ty, &Column::Flat(data));
		assert_eq!(rendered, vec![Ok(r#"["\ud83d\ude4f\u0001\u00e9\""]"#.to_string())]);
	}

	#[test]
	fn test_dictionary_elements() {
		let ty = Type::array(Type::Int8);
		let dictionary = Column::dictionary(
			vec![2, 0, 1],
			Some(BitVec::from_slice(&[true, false, true])),
			Column::Flat(ColumnData::int8([10, 20, 30])),
		);
		let column = Column::Flat(ColumnData::Array(ArrayContainer::from_parts(
			vec![0],
			vec![3],
			BitVec::repeat(1, true),
			dictionary,
		)));
		assert_eq!(render_all(&ty, &column), vec![Ok("[30,null,20]".to_string())]);
	}
}
