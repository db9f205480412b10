// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

/// Session timezone is not a fixed offset the engine understands
pub fn invalid_timezone(timezone: &str) -> Diagnostic {
	Diagnostic {
		code: "CONFIG_001".to_string(),
		message: format!("invalid session timezone '{}'", timezone),
		fragment: Some(timezone.to_string()),
		label: Some("unrecognized timezone".to_string()),
		help: Some("use UTC, Z or a fixed offset such as +05:30".to_string()),
		notes: vec![],
		cause: None,
	}
}
