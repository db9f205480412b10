// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use jsoncast_column::{Column, ColumnData, Resolved};

use crate::{context::CastContext, write::WritePlan};

const NULL_LEN: usize = 4;

/// Upper bound of the rendered length of `row`. Undershooting is a bug, the
/// writer asserts the bound in debug builds.
pub(crate) fn estimate(ctx: &CastContext<'_>, plan: &WritePlan, column: &Column, row: usize) -> usize {
	match column.resolve(row) {
		Resolved::Null => NULL_LEN,
		Resolved::Value {
			data,
			position,
		} => estimate_value(ctx, plan, data, position),
	}
}

fn estimate_value(ctx: &CastContext<'_>, plan: &WritePlan, data: &ColumnData, position: usize) -> usize {
	match (plan, data) {
		(WritePlan::Undefined, _) => NULL_LEN,
		(WritePlan::Boolean, _) => 5,
		(WritePlan::Int1, _) => 4,
		(WritePlan::Int2, _) => 6,
		(WritePlan::Int4, _) => 11,
		(WritePlan::Int8, _) => 20,
		(WritePlan::Float4, _) => 16,
		(WritePlan::Float8, _) => 25,
		(WritePlan::Utf8, ColumnData::Utf8(c)) => 2 + 6 * c.get(position).map_or(0, str::len),
		(WritePlan::Json, ColumnData::Json(c)) => c.get(position).map_or(NULL_LEN, str::len),
		(WritePlan::Date, _) => ctx.calendar().max_date_len(),
		(WritePlan::DateTime, _) => ctx.calendar().max_timestamp_len(),
		(WritePlan::Array(element), ColumnData::Array(c)) => {
			let offset = c.offset(position);
			(offset..offset + c.size(position)).map(|i| estimate(ctx, element, c.elements(), i) + 1).sum::<usize>()
				+ 2
		}
		(
			WritePlan::Map {
				key,
				value,
			},
			ColumnData::Map(c),
		) => {
			let offset = c.offset(position);
			(offset..offset + c.size(position))
				.map(|i| {
					let key_len = match c.keys().resolve(i) {
						Resolved::Null => 0,
						Resolved::Value {
							data,
							position,
						} => key.estimate(data, position),
					};
					// colon and comma
					key_len + 2 + estimate(ctx, value, c.values(), i)
				})
				.sum::<usize>() + 2
		}
		(WritePlan::Row(fields), ColumnData::Row(c)) => {
			fields.iter().zip(c.fields()).map(|(plan, field)| estimate(ctx, plan, field, position) + 1).sum::<usize>()
				+ 2
		}
		(plan, data) => unreachable!("{:?} write plan over a {} column", plan, data.get_type()),
	}
}
