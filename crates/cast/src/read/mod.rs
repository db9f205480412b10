// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Mapping of JSON text onto typed columns.

mod document;
mod scalar;

use jsoncast_column::{ColumnData, Push};
use jsoncast_type::Type;
use serde_json::value::RawValue;

use crate::{
	error::JsonCastError,
	key::KeyPlan,
	read::{
		document::{Node, classify, parse_document},
		scalar::{int_from_text, is_json_number, read_bool, read_float, read_int, read_text},
	},
};

/// The reader strategy for one target type, resolved once per cast.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ReadPlan {
	Boolean,
	Int1,
	Int2,
	Int4,
	Int8,
	Float4,
	Float8,
	Utf8,
	Json,
	Array(Box<ReadPlan>),
	Map {
		key: KeyPlan,
		value: Box<ReadPlan>,
	},
	/// Field names with their readers, in declaration order
	Row(Vec<(String, ReadPlan)>),
}

impl ReadPlan {
	pub(crate) fn build(ty: &Type) -> Result<Self, JsonCastError> {
		Ok(match ty {
			Type::Boolean => ReadPlan::Boolean,
			Type::Int1 => ReadPlan::Int1,
			Type::Int2 => ReadPlan::Int2,
			Type::Int4 => ReadPlan::Int4,
			Type::Int8 => ReadPlan::Int8,
			Type::Float4 => ReadPlan::Float4,
			Type::Float8 => ReadPlan::Float8,
			Type::Utf8 => ReadPlan::Utf8,
			Type::Json => ReadPlan::Json,
			Type::Array(element) => ReadPlan::Array(Box::new(Self::build(element)?)),
			Type::Map {
				key,
				value,
			} => {
				let key = match KeyPlan::build(key)? {
					// object keys are strings, never documents
					KeyPlan::Json => {
						return Err(JsonCastError::UnsupportedKeyType {
							ty: Type::Json,
						});
					}
					key => key,
				};
				ReadPlan::Map {
					key,
					value: Box::new(Self::build(value)?),
				}
			}
			Type::Row(fields) => ReadPlan::Row(
				fields.iter().map(|f| Ok((f.name.clone(), Self::build(&f.ty)?))).collect::<Result<_, _>>()?,
			),
			Type::Date | Type::DateTime | Type::Undefined => {
				return Err(JsonCastError::UnsupportedCastType {
					from: Type::Json,
					to: ty.clone(),
				});
			}
		})
	}
}

/// Parses `text` and appends exactly one slot to `out`. On error, `out` may
/// hold a partially written slot the caller has to roll back.
pub(crate) fn read_document(plan: &ReadPlan, text: &str, out: &mut ColumnData) -> Result<(), JsonCastError> {
	let raw = parse_document(text)?;
	read_value(plan, raw, out)
}

fn read_value(plan: &ReadPlan, raw: &RawValue, out: &mut ColumnData) -> Result<(), JsonCastError> {
	// JSON targets keep the element text, `null` included
	if let ReadPlan::Json = plan {
		out.push(raw.get());
		return Ok(());
	}

	let node = classify(raw)?;
	if let Node::Null = node {
		out.push_undefined();
		return Ok(());
	}

	match (plan, out) {
		(ReadPlan::Boolean, out) => out.push(read_bool(&node)?),
		(ReadPlan::Int1, out) => out.push(read_int::<i8>(&node)?),
		(ReadPlan::Int2, out) => out.push(read_int::<i16>(&node)?),
		(ReadPlan::Int4, out) => out.push(read_int::<i32>(&node)?),
		(ReadPlan::Int8, out) => out.push(read_int::<i64>(&node)?),
		(ReadPlan::Float4, out) => out.push(read_float::<f32>(&node)?),
		(ReadPlan::Float8, out) => out.push(read_float::<f64>(&node)?),
		(ReadPlan::Utf8, out) => out.push(read_text(node)?),
		(ReadPlan::Array(element), ColumnData::Array(c)) => {
			let items = match node {
				Node::Array(items) => items,
				node => return Err(mismatch(Type::array(c.element_type()), &node)),
			};
			let start = c.elements().len();
			for item in items {
				read_value(element, item, c.elements_mut())?;
			}
			c.close_entry(start);
		}
		(
			ReadPlan::Map {
				key,
				value,
			},
			ColumnData::Map(c),
		) => {
			let entries = match node {
				Node::Object(entries) => entries,
				node => return Err(mismatch(Type::map(c.key_type(), c.value_type()), &node)),
			};
			let start = c.keys().len();
			let (keys, values) = c.entries_mut();
			for (name, item) in entries {
				read_key(*key, name, keys)?;
				read_value(value, item, values)?;
			}
			c.close_entry(start);
		}
		(ReadPlan::Row(fields), ColumnData::Row(c)) => {
			match node {
				Node::Array(items) if items.len() == fields.len() => {
					for (i, ((_, field), item)) in fields.iter().zip(items).enumerate() {
						read_value(field, item, c.field_mut(i))?;
					}
				}
				Node::Object(entries) => {
					for (i, (name, field)) in fields.iter().enumerate() {
						// the last duplicate wins
						match entries.iter().rev().find(|(k, _)| k == name) {
							Some((_, item)) => read_value(field, item, c.field_mut(i))?,
							None => c.field_mut(i).push_undefined(),
						}
					}
				}
				node => return Err(mismatch(c.get_type(), &node)),
			}
			c.close_row();
		}
		(plan, out) => unreachable!("{:?} read plan into a {} column", plan, out.get_type()),
	}
	Ok(())
}

/// Object keys arrive as strings and are re-read as the key type.
fn read_key(plan: KeyPlan, name: String, keys: &mut ColumnData) -> Result<(), JsonCastError> {
	match plan {
		KeyPlan::Utf8 => keys.push(name),
		KeyPlan::Boolean => keys.push(read_bool(&Node::String(name))?),
		KeyPlan::Float4 => keys.push(read_float::<f32>(&Node::String(name))?),
		KeyPlan::Float8 => keys.push(read_float::<f64>(&Node::String(name))?),
		KeyPlan::Int1 | KeyPlan::Int2 | KeyPlan::Int4 | KeyPlan::Int8 => {
			if !is_json_number(&name) {
				return Err(mismatch(keys.get_type(), &Node::String(name)));
			}
			match plan {
				KeyPlan::Int1 => keys.push(int_from_text::<i8>(&name)?),
				KeyPlan::Int2 => keys.push(int_from_text::<i16>(&name)?),
				KeyPlan::Int4 => keys.push(int_from_text::<i32>(&name)?),
				_ => keys.push(int_from_text::<i64>(&name)?),
			}
		}
		KeyPlan::Json => unreachable!("JSON map keys are rejected when planning"),
	}
	Ok(())
}

fn mismatch(expected: Type, node: &Node<'_>) -> JsonCastError {
	JsonCastError::TypeMismatch {
		expected,
		found: node.kind(),
	}
}
