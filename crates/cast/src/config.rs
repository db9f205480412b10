// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::policy::ErrorPolicy;

/// Configuration of a [`CastEngine`](crate::CastEngine).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CastConfig {
	/// How row level failures are handled.
	///
	/// Default: [`ErrorPolicy::Strict`]
	pub policy: ErrorPolicy,

	/// Fixed offset of the session, as `UTC`, `Z`, `+HH:MM` or `-HH:MM`.
	///
	/// Default: none (UTC)
	pub session_timezone: Option<String>,

	/// Render timestamps in the session timezone instead of UTC. Has no
	/// effect without a session timezone.
	///
	/// Default: false
	pub adjust_timestamp_to_timezone: bool,
}

impl CastConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
		self.policy = policy;
		self
	}

	pub fn with_session_timezone(mut self, timezone: impl Into<String>) -> Self {
		self.session_timezone = Some(timezone.into());
		self
	}

	pub fn with_adjust_timestamp_to_timezone(mut self, adjust: bool) -> Self {
		self.adjust_timestamp_to_timezone = adjust;
		self
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = CastConfig::new();
		assert_eq!(config.policy, ErrorPolicy::Strict);
		assert_eq!(config.session_timezone, None);
		assert!(!config.adjust_timestamp_to_timezone);
	}

	#[test]
	fn test_deserialize_partial() {
		let config: CastConfig = serde_json::from_str(r#"{"policy":"try","session_timezone":"+02:00"}"#).unwrap();
		assert_eq!(config.policy, ErrorPolicy::Try);
		assert_eq!(config.session_timezone.as_deref(), Some("+02:00"));
		assert!(!config.adjust_timestamp_to_timezone);
	}

	#[test]
	fn test_builder() {
		let config = CastConfig::new()
			.with_policy(ErrorPolicy::Try)
			.with_session_timezone("UTC")
			.with_adjust_timestamp_to_timezone(true);
		assert_eq!(config.policy, ErrorPolicy::Try);
		assert!(config.adjust_timestamp_to_timezone);
	}
}
