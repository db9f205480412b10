// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::str::FromStr;

use crate::{
	error::TypeError,
	value::r#type::{RowField, Type},
};

impl FromStr for Type {
	type Err = TypeError;

	/// Parses the textual form produced by `Display`, e.g.
	/// `Map<Utf8,Array<Int8>>` or `Row<a:Int4,b:Json>`. Names are case
	/// insensitive and row field names are optional.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut parser = Parser {
			text: s,
			pos: 0,
		};
		let ty = parser.parse_type()?;
		parser.skip_whitespace();
		if parser.pos != s.len() {
			return Err(parser.malformed("unexpected trailing input"));
		}
		Ok(ty)
	}
}

struct Parser<'a> {
	text: &'a str,
	pos: usize,
}

impl<'a> Parser<'a> {
	fn parse_type(&mut self) -> Result<Type, TypeError> {
		let name = self.identifier()?;
		match name.to_ascii_lowercase().as_str() {
			"boolean" | "bool" => Ok(Type::Boolean),
			"int1" => Ok(Type::Int1),
			"int2" => Ok(Type::Int2),
			"int4" => Ok(Type::Int4),
			"int8" => Ok(Type::Int8),
			"float4" => Ok(Type::Float4),
			"float8" => Ok(Type::Float8),
			"utf8" => Ok(Type::Utf8),
			"json" => Ok(Type::Json),
			"date" => Ok(Type::Date),
			"datetime" => Ok(Type::DateTime),
			"undefined" => Ok(Type::Undefined),
			"array" => {
				self.expect('<')?;
				let element = self.parse_type()?;
				self.expect('>')?;
				Ok(Type::array(element))
			}
			"map" => {
				self.expect('<')?;
				let key = self.parse_type()?;
				self.expect(',')?;
				let value = self.parse_type()?;
				self.expect('>')?;
				Ok(Type::map(key, value))
			}
			"row" => {
				self.expect('<')?;
				let mut fields = Vec::new();
				loop {
					let field = self.parse_field(fields.len())?;
					fields.push(field);
					if !self.eat(',') {
						break;
					}
				}
				self.expect('>')?;
				Ok(Type::Row(fields))
			}
			_ => Err(TypeError::UnknownTypeName {
				name: name.to_string(),
			}),
		}
	}

	fn parse_field(&mut self, index: usize) -> Result<RowField, TypeError> {
		let start = self.pos;
		let name = self.identifier()?;
		if self.eat(':') {
			let ty = self.parse_type()?;
			return Ok(RowField::new(name, ty));
		}
		self.pos = start;
		let ty = self.parse_type()?;
		Ok(RowField::new(format!("c{}", index), ty))
	}

	fn identifier(&mut self) -> Result<&'a str, TypeError> {
		self.skip_whitespace();
		let start = self.pos;
		let rest = &self.text[start..];
		let len = rest.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_')).unwrap_or(rest.len());
		if len == 0 {
			return Err(self.malformed("expected a name"));
		}
		self.pos += len;
		Ok(&self.text[start..self.pos])
	}

	fn eat(&mut self, c: char) -> bool {
		self.skip_whitespace();
		if self.text[self.pos..].starts_with(c) {
			self.pos += c.len_utf8();
			true
		} else {
			false
		}
	}

	fn expect(&mut self, c: char) -> Result<(), TypeError> {
		if self.eat(c) {
			Ok(())
		} else {
			Err(self.malformed(&format!("expected '{}' at offset {}", c, self.pos)))
		}
	}

	fn skip_whitespace(&mut self) {
		let rest = &self.text[self.pos..];
		self.pos += rest.len() - rest.trim_start().len();
	}

	fn malformed(&self, reason: &str) -> TypeError {
		TypeError::MalformedType {
			text: self.text.to_string(),
			reason: reason.to_string(),
		}
	}
}
