// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod diagnostic;

/// A structured, user facing description of a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	/// The offending input, when there is one (a JSON document, a type name).
	pub fragment: Option<String>,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	/// Walks the cause chain and returns the innermost diagnostic.
	pub fn root_cause(&self) -> &Diagnostic {
		let mut current = self;
		while let Some(cause) = &current.cause {
			current = cause;
		}
		current
	}
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.code, self.message)?;
		if let Some(label) = &self.label {
			write!(f, " ({})", label)?;
		}
		if let Some(cause) = &self.cause {
			write!(f, "\n  caused by {}", cause)?;
		}
		Ok(())
	}
}

/// Conversion of a domain specific error into a [`Diagnostic`].
pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Box<Diagnostic>);

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		*self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl std::error::Error for Error {}

/// Errors raised while handling types themselves, independent of any data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
	#[error("unknown type name '{name}'")]
	UnknownTypeName {
		name: String,
	},

	#[error("malformed type '{text}': {reason}")]
	MalformedType {
		text: String,
		reason: String,
	},
}

impl From<TypeError> for Error {
	fn from(err: TypeError) -> Self {
		crate::error!(err.into_diagnostic())
	}
}

/// Wraps a diagnostic into an [`Error`].
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::error::Error(Box::new($diagnostic))
	};
}

/// Shorthand for `Err(error!(..))`.
#[macro_export]
macro_rules! err {
	($diagnostic:expr) => {
		Err($crate::error!($diagnostic))
	};
}

#[cfg(test)]
pub mod tests {
	use super::*;

	fn leaf() -> Diagnostic {
		Diagnostic {
			code: "JSON_004".to_string(),
			message: "number out of range".to_string(),
			fragment: Some("128".to_string()),
			label: None,
			help: None,
			notes: vec![],
			cause: None,
		}
	}

	#[test]
	fn test_root_cause() {
		let outer = Diagnostic {
			code: "CAST_007".to_string(),
			message: "failed to cast".to_string(),
			fragment: None,
			label: Some("row 0".to_string()),
			help: None,
			notes: vec![],
			cause: Some(Box::new(leaf())),
		};
		assert_eq!(outer.root_cause().code, "JSON_004");
		assert_eq!(leaf().root_cause().code, "JSON_004");
	}

	#[test]
	fn test_display_renders_cause_chain() {
		let outer = Diagnostic {
			code: "CAST_007".to_string(),
			message: "failed to cast".to_string(),
			fragment: None,
			label: Some("row 0".to_string()),
			help: None,
			notes: vec![],
			cause: Some(Box::new(leaf())),
		};
		let err = crate::error!(outer);
		assert_eq!(err.to_string(), "CAST_007: failed to cast (row 0)\n  caused by JSON_004: number out of range");
		assert_eq!(err.code(), "CAST_007");
	}

	#[test]
	fn test_type_error_into_error() {
		let err: Error = TypeError::UnknownTypeName {
			name: "Int3".to_string(),
		}
		.into();
		assert_eq!(err.code(), "TYPE_001");
	}
}
