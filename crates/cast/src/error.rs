// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use jsoncast_type::{Diagnostic, IntoDiagnostic, Type, error, error::diagnostic::cast};

/// A failure while casting one row, or while planning a cast.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JsonCastError {
	#[error("no JSON found")]
	NoJsonFound,

	#[error("The JSON document has an improper structure: {detail}")]
	MalformedDocument {
		detail: String,
	},

	#[error("The JSON element does not have the requested type: expected {expected}, found {found}")]
	TypeMismatch {
		expected: Type,
		found: &'static str,
	},

	#[error("The JSON number is too large or too small to fit within the requested type {target}")]
	NumericOverflow {
		target: Type,
		text: String,
	},

	#[error("Problem while parsing a number: {text}")]
	NumberParseError {
		text: String,
	},

	#[error("map key is null")]
	NullMapKey,

	#[error("map keys of type {ty} are not supported")]
	UnsupportedKeyType {
		ty: Type,
	},

	#[error("Cannot cast {from} to {to}")]
	UnsupportedCastType {
		from: Type,
		to: Type,
	},
}

impl JsonCastError {
	pub fn code(&self) -> &'static str {
		match self {
			JsonCastError::NoJsonFound => "JSON_001",
			JsonCastError::MalformedDocument {
				..
			} => "JSON_002",
			JsonCastError::TypeMismatch {
				..
			} => "JSON_003",
			JsonCastError::NumericOverflow {
				..
			} => "JSON_004",
			JsonCastError::NumberParseError {
				..
			} => "JSON_005",
			JsonCastError::NullMapKey => "JSON_006",
			JsonCastError::UnsupportedKeyType {
				..
			} => "JSON_007",
			JsonCastError::UnsupportedCastType {
				..
			} => "CAST_001",
		}
	}
}

impl IntoDiagnostic for JsonCastError {
	fn into_diagnostic(self) -> Diagnostic {
		if let JsonCastError::UnsupportedCastType {
			from,
			to,
		} = &self
		{
			return cast::unsupported_cast(from, to);
		}

		let code = self.code().to_string();
		let message = self.to_string();
		let (fragment, label, help) = match self {
			JsonCastError::NoJsonFound => (
				Some(String::new()),
				"empty document",
				Some("pass a JSON document or the JSON literal null"),
			),
			JsonCastError::MalformedDocument {
				..
			} => (None, "not valid JSON", None),
			JsonCastError::TypeMismatch {
				..
			} => (None, "unexpected JSON element", None),
			JsonCastError::NumericOverflow {
				text,
				..
			} => (Some(text), "number out of range", Some("cast into a wider numeric type")),
			JsonCastError::NumberParseError {
				text,
			} => (Some(text), "unparsable number", Some("cast into Float8 to accept very large numbers")),
			JsonCastError::NullMapKey => (None, "null map key", Some("JSON object keys can not be null")),
			JsonCastError::UnsupportedKeyType {
				..
			} => (None, "unsupported map key type", None),
			JsonCastError::UnsupportedCastType {
				..
			} => unreachable!(),
		};

		Diagnostic {
			code,
			message,
			fragment,
			label: Some(label.to_string()),
			help: help.map(str::to_string),
			notes: vec![],
			cause: None,
		}
	}
}

impl From<JsonCastError> for jsoncast_type::Error {
	fn from(err: JsonCastError) -> Self {
		error!(err.into_diagnostic())
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_messages_match_reference_wording() {
		assert_eq!(JsonCastError::NoJsonFound.to_string(), "no JSON found");
		let overflow = JsonCastError::NumericOverflow {
			target: Type::Int1,
			text: "128".to_string(),
		};
		assert!(
			overflow.to_string()
				.starts_with("The JSON number is too large or too small to fit within the requested type")
		);
	}

	#[test]
	fn test_unsupported_cast_diagnostic() {
		let err: jsoncast_type::Error = JsonCastError::UnsupportedCastType {
			from: Type::Json,
			to: Type::Date,
		}
		.into();
		assert_eq!(err.code(), "CAST_001");
		assert_eq!(err.0.message, "Cannot cast Json to Date");
	}

	#[test]
	fn test_row_diagnostic_carries_fragment() {
		let diagnostic = JsonCastError::NumberParseError {
			text: "233897314173811950000".to_string(),
		}
		.into_diagnostic();
		assert_eq!(diagnostic.code, "JSON_005");
		assert_eq!(diagnostic.fragment.as_deref(), Some("233897314173811950000"));
	}
}
