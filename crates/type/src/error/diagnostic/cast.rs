// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, value::Type};

/// The pair of types has no cast between them
pub fn unsupported_cast(from: &Type, to: &Type) -> Diagnostic {
	Diagnostic {
		code: "CAST_001".to_string(),
		message: format!("Cannot cast {} to {}", from, to),
		fragment: None,
		label: Some("unsupported cast".to_string()),
		help: Some("JSON casts are defined for Boolean, integer, float, Utf8, Json and nested Array, Map and Row types"
			.to_string()),
		notes: vec![],
		cause: None,
	}
}

/// A single row failed to cast under the strict policy
pub fn invalid_json_cast(from: &Type, to: &Type, row: usize, cause: Diagnostic) -> Diagnostic {
	let fragment = cause.fragment.clone();
	Diagnostic {
		code: "CAST_007".to_string(),
		message: format!("failed to cast {} to {}", from, to),
		fragment,
		label: Some(format!("row {}", row)),
		help: Some("use the try policy to turn failing rows into null".to_string()),
		notes: vec![],
		cause: Some(Box::new(cause)),
	}
}

/// The source column does not hold values of the declared source type
pub fn source_type_mismatch(declared: &Type, actual: &Type) -> Diagnostic {
	Diagnostic {
		code: "CAST_002".to_string(),
		message: format!("source column of type {} does not match declared type {}", actual, declared),
		fragment: None,
		label: Some("column type mismatch".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}
