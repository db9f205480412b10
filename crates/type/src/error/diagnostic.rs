// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, IntoDiagnostic, TypeError};

pub mod cast;
pub mod config;

impl IntoDiagnostic for TypeError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			TypeError::UnknownTypeName {
				name,
			} => Diagnostic {
				code: "TYPE_001".to_string(),
				message: format!("unknown type name '{}'", name),
				fragment: Some(name),
				label: Some("not a known type".to_string()),
				help: Some(
					"use one of Boolean, Int1, Int2, Int4, Int8, Float4, Float8, Utf8, Json, Date, DateTime, Array<..>, Map<..,..> or Row<..>"
						.to_string(),
				),
				notes: vec![],
				cause: None,
			},
			TypeError::MalformedType {
				text,
				reason,
			} => Diagnostic {
				code: "TYPE_002".to_string(),
				message: format!("malformed type: {}", reason),
				fragment: Some(text),
				label: Some("cannot parse type".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},
		}
	}
}
