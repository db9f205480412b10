// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use jsoncast_column::{Column, ColumnData, Push, Resolved};
use jsoncast_type::Type;
use tracing::debug;

use crate::{
	context::CastContext,
	error::JsonCastError,
	read::{ReadPlan, read_document},
	write::{WritePlan, render_row},
};

/// The strategy for one pair of types, resolved once per cast and applied to
/// every row.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CastPlan {
	Identity,
	ToJson(WritePlan),
	FromJson(ReadPlan),
	Array(Box<CastPlan>),
	Map {
		key: Box<CastPlan>,
		value: Box<CastPlan>,
	},
	Row(Vec<CastPlan>),
}

impl CastPlan {
	/// Any unsupported leaf rejects the cast as a whole, naming the
	/// top-level types.
	pub(crate) fn new(from: &Type, to: &Type) -> Result<Self, JsonCastError> {
		Self::build(from, to).map_err(|err| {
			debug!(from = %from, to = %to, reason = %err, "cast rejected");
			JsonCastError::UnsupportedCastType {
				from: from.clone(),
				to: to.clone(),
			}
		})
	}

	fn build(from: &Type, to: &Type) -> Result<Self, JsonCastError> {
		Ok(match (from, to) {
			(from, to) if from == to => CastPlan::Identity,
			(from, Type::Json) => CastPlan::ToJson(WritePlan::build(from)?),
			(Type::Json, to) => CastPlan::FromJson(ReadPlan::build(to)?),
			(Type::Array(from), Type::Array(to)) => CastPlan::Array(Box::new(Self::build(from, to)?)),
			(
				Type::Map {
					key: from_key,
					value: from_value,
				},
				Type::Map {
					key: to_key,
					value: to_value,
				},
			) => CastPlan::Map {
				key: Box::new(Self::build(from_key, to_key)?),
				value: Box::new(Self::build(from_value, to_value)?),
			},
			(Type::Row(from), Type::Row(to)) if from.len() == to.len() => CastPlan::Row(
				from.iter().zip(to).map(|(f, t)| Self::build(&f.ty, &t.ty)).collect::<Result<_, _>>()?,
			),
			(from, to) => {
				return Err(JsonCastError::UnsupportedCastType {
					from: from.clone(),
					to: to.clone(),
				});
			}
		})
	}

	/// Appends the cast of `source[row]` to `out`.
	pub(crate) fn apply(
		&self,
		ctx: &CastContext<'_>,
		source: &Column,
		row: usize,
		out: &mut ColumnData,
	) -> Result<(), JsonCastError> {
		let (data, position) = match source.resolve(row) {
			Resolved::Null => {
				out.push_undefined();
				return Ok(());
			}
			Resolved::Value {
				data,
				position,
			} => (data, position),
		};

		match (self, data, out) {
			(CastPlan::Identity, data, out) => out.push_value(&data.get_value(position)),
			(CastPlan::ToJson(plan), _, out) => out.push(render_row(ctx, plan, source, row)?),
			(CastPlan::FromJson(plan), ColumnData::Json(c), out) => {
				read_document(plan, c.get(position).unwrap_or_default(), out)?
			}
			(CastPlan::Array(element), ColumnData::Array(c), ColumnData::Array(o)) => {
				let start = o.elements().len();
				let offset = c.offset(position);
				for i in offset..offset + c.size(position) {
					element.apply(ctx, c.elements(), i, o.elements_mut())?;
				}
				o.close_entry(start);
			}
			(
				CastPlan::Map {
					key,
					value,
				},
				ColumnData::Map(c),
				ColumnData::Map(o),
			) => {
				let start = o.keys().len();
				let offset = c.offset(position);
				let (keys, values) = o.entries_mut();
				for i in offset..offset + c.size(position) {
					key.apply(ctx, c.keys(), i, keys)?;
					if !keys.is_defined(keys.len() - 1) {
						return Err(JsonCastError::NullMapKey);
					}
					value.apply(ctx, c.values(), i, values)?;
				}
				o.close_entry(start);
			}
			(CastPlan::Row(fields), ColumnData::Row(c), ColumnData::Row(o)) => {
				for (i, (plan, field)) in fields.iter().zip(c.fields()).enumerate() {
					plan.apply(ctx, field, position, o.field_mut(i))?;
				}
				o.close_row();
			}
			(plan, data, out) => {
				unreachable!("{:?} cast plan from a {} column into a {} column", plan, data.get_type(), out.get_type())
			}
		}
		Ok(())
	}
}

#[cfg(test)]
pub mod tests {
	use jsoncast_type::RowField;

	use super::*;

	#[test]
	fn test_same_type_is_identity() {
		assert_eq!(CastPlan::new(&Type::Json, &Type::Json), Ok(CastPlan::Identity));
		let ty = Type::map(Type::DateTime, Type::Int8);
		assert_eq!(CastPlan::new(&ty, &ty), Ok(CastPlan::Identity));
	}

	#[test]
	fn test_direction() {
		assert_eq!(CastPlan::new(&Type::Float8, &Type::Json), Ok(CastPlan::ToJson(WritePlan::Float8)));
		assert_eq!(CastPlan::new(&Type::Json, &Type::Int1), Ok(CastPlan::FromJson(ReadPlan::Int1)));
	}

	#[test]
	fn test_structural() {
		let from = Type::array(Type::array(Type::Int8));
		let to = Type::array(Type::Json);
		assert_eq!(
			CastPlan::new(&from, &to),
			Ok(CastPlan::Array(Box::new(CastPlan::ToJson(WritePlan::Array(Box::new(WritePlan::Int8))))))
		);
		assert_eq!(
			CastPlan::new(&to, &from),
			Ok(CastPlan::Array(Box::new(CastPlan::FromJson(ReadPlan::Array(Box::new(ReadPlan::Int8))))))
		);
	}

	#[test]
	fn test_rejections_name_top_level_types() {
		let from = Type::map(Type::DateTime, Type::Int8);
		assert_eq!(
			CastPlan::new(&from, &Type::Json),
			Err(JsonCastError::UnsupportedCastType {
				from: from.clone(),
				to: Type::Json
			})
		);

		let to = Type::array(Type::map(Type::Json, Type::Int8));
		assert_eq!(
			CastPlan::new(&Type::Json, &to),
			Err(JsonCastError::UnsupportedCastType {
				from: Type::Json,
				to: to.clone()
			})
		);

		assert!(CastPlan::new(&Type::Int8, &Type::Utf8).is_err());
		assert!(CastPlan::new(&Type::Json, &Type::Date).is_err());
	}

	#[test]
	fn test_row_arity_must_match() {
		let from = Type::Row(vec![RowField::new("a", Type::Int8)]);
		let to = Type::Row(vec![RowField::new("a", Type::Json), RowField::new("b", Type::Json)]);
		assert!(CastPlan::new(&from, &to).is_err());
	}
}
