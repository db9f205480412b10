// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt;

use serde::{
	Deserialize, Deserializer,
	de::{MapAccess, Visitor},
};
use serde_json::value::RawValue;

use crate::error::JsonCastError;

/// One JSON element with its children still unparsed. Children keep their
/// exact source text so JSON-typed targets can store them verbatim.
#[derive(Debug)]
pub(crate) enum Node<'a> {
	Null,
	Bool(bool),
	/// The literal text of the number, validated by the parser
	Number(&'a str),
	String(String),
	Array(Vec<&'a RawValue>),
	/// Entries in document order, duplicates included
	Object(Vec<(String, &'a RawValue)>),
}

impl Node<'_> {
	pub(crate) fn kind(&self) -> &'static str {
		match self {
			Node::Null => "null",
			Node::Bool(_) => "boolean",
			Node::Number(_) => "number",
			Node::String(_) => "string",
			Node::Array(_) => "array",
			Node::Object(_) => "object",
		}
	}
}

/// Validates `text` as exactly one JSON document.
pub(crate) fn parse_document(text: &str) -> Result<&RawValue, JsonCastError> {
	if text.trim().is_empty() {
		return Err(JsonCastError::NoJsonFound);
	}
	serde_json::from_str::<&RawValue>(text).map_err(malformed)
}

/// Splits an already validated element into its kind and direct children.
pub(crate) fn classify(raw: &RawValue) -> Result<Node<'_>, JsonCastError> {
	let text = raw.get();
	match text.as_bytes().first() {
		Some(b'n') => Ok(Node::Null),
		Some(b't') => Ok(Node::Bool(true)),
		Some(b'f') => Ok(Node::Bool(false)),
		Some(b'"') => serde_json::from_str::<String>(text).map(Node::String).map_err(malformed),
		Some(b'[') => serde_json::from_str::<Vec<&RawValue>>(text).map(Node::Array).map_err(malformed),
		Some(b'{') => serde_json::from_str::<Entries<'_>>(text).map(|e| Node::Object(e.0)).map_err(malformed),
		Some(b'-' | b'0'..=b'9') => Ok(Node::Number(text)),
		_ => Err(JsonCastError::MalformedDocument {
			detail: format!("unexpected element '{}'", text),
		}),
	}
}

fn malformed(err: serde_json::Error) -> JsonCastError {
	JsonCastError::MalformedDocument {
		detail: err.to_string(),
	}
}

struct Entries<'a>(Vec<(String, &'a RawValue)>);

impl<'de> Deserialize<'de> for Entries<'de> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		struct EntriesVisitor;

		impl<'de> Visitor<'de> for EntriesVisitor {
			type Value = Entries<'de>;

			fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
				f.write_str("a JSON object")
			}

			fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
				let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
				while let Some(key) = map.next_key::<String>()? {
					let value: &'de RawValue = map.next_value()?;
					entries.push((key, value));
				}
				Ok(Entries(entries))
			}
		}

		deserializer.deserialize_map(EntriesVisitor)
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_empty_and_blank() {
		assert_eq!(parse_document("").unwrap_err(), JsonCastError::NoJsonFound);
		assert_eq!(parse_document(" \n\t").unwrap_err(), JsonCastError::NoJsonFound);
	}

	#[test]
	fn test_malformed() {
		for text in ["Infinity", "NaN", "{null:3.3}", "{1:1.1}", "[1,2", "1 2", "tru", "'a'"] {
			assert!(
				matches!(parse_document(text), Err(JsonCastError::MalformedDocument { .. })),
				"{} should be malformed",
				text
			);
		}
	}

	#[test]
	fn test_surrounding_whitespace() {
		let raw = parse_document("  [1, 2]\n").unwrap();
		assert_eq!(raw.get(), "[1, 2]");
	}

	#[test]
	fn test_big_numbers_keep_their_text() {
		let raw = parse_document("233897314173811950000").unwrap();
		assert!(matches!(classify(raw).unwrap(), Node::Number("233897314173811950000")));
	}

	#[test]
	fn test_array_children_keep_whitespace() {
		let raw = parse_document(r#"[ {"a": 1,  "b": 2}, null ]"#).unwrap();
		let Node::Array(items) = classify(raw).unwrap() else {
			panic!("expected array");
		};
		assert_eq!(items.iter().map(|i| i.get()).collect::<Vec<_>>(), vec![r#"{"a": 1,  "b": 2}"#, "null"]);
	}

	#[test]
	fn test_object_keeps_duplicates_in_order() {
		let raw = parse_document(r#"{"c0":123,"c2":true,"c0":456}"#).unwrap();
		let Node::Object(entries) = classify(raw).unwrap() else {
			panic!("expected object");
		};
		let keys: Vec<_> = entries.iter().map(|(k, v)| (k.as_str(), v.get())).collect();
		assert_eq!(keys, vec![("c0", "123"), ("c2", "true"), ("c0", "456")]);
	}

	#[test]
	fn test_string_unescaped() {
		let raw = parse_document(r#""aé\n""#).unwrap();
		assert!(matches!(classify(raw).unwrap(), Node::String(s) if s == "a\u{e9}\n"));
	}
}
