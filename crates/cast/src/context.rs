// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use chrono::FixedOffset;
use jsoncast_type::{Type, err, error::diagnostic::config};

use crate::{calendar::Calendar, config::CastConfig, policy::ErrorPolicy};

/// Everything a single cast invocation needs besides the data. Built once
/// before the first row and never changed afterwards.
pub struct CastContext<'a> {
	from: &'a Type,
	to: &'a Type,
	policy: ErrorPolicy,
	timestamp_offset: Option<FixedOffset>,
	calendar: &'a dyn Calendar,
}

impl<'a> CastContext<'a> {
	pub fn new(config: &CastConfig, from: &'a Type, to: &'a Type, calendar: &'a dyn Calendar) -> crate::Result<Self> {
		let offset = match &config.session_timezone {
			Some(timezone) => Some(parse_timezone(timezone)?),
			None => None,
		};
		Ok(Self {
			from,
			to,
			policy: config.policy,
			timestamp_offset: offset.filter(|_| config.adjust_timestamp_to_timezone),
			calendar,
		})
	}

	pub fn from(&self) -> &Type {
		self.from
	}

	pub fn to(&self) -> &Type {
		self.to
	}

	pub fn policy(&self) -> ErrorPolicy {
		self.policy
	}

	/// The offset timestamps are rendered in, `None` for UTC.
	pub fn timestamp_offset(&self) -> Option<FixedOffset> {
		self.timestamp_offset
	}

	pub fn calendar(&self) -> &dyn Calendar {
		self.calendar
	}
}

/// Parses `UTC`, `Z`, `+HH:MM`, `-HH:MM`, `+HHMM` or `+HH`.
pub fn parse_timezone(timezone: &str) -> crate::Result<FixedOffset> {
	let trimmed = timezone.trim();
	if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
		if let Some(offset) = FixedOffset::east_opt(0) {
			return Ok(offset);
		}
	}

	let parsed = trimmed.split_at_checked(1).and_then(|(sign, rest)| {
		let sign = match sign {
			"+" => 1,
			"-" => -1,
			_ => return None,
		};
		let (hours, minutes) = match rest.split_once(':') {
			Some((h, m)) => (h, m),
			None if rest.len() == 4 => rest.split_at(2),
			None => (rest, "0"),
		};
		if hours.is_empty() || !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
			return None;
		}
		let hours: i32 = hours.parse().ok()?;
		let minutes: i32 = minutes.parse().ok()?;
		if hours > 23 || minutes > 59 {
			return None;
		}
		FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
	});

	match parsed {
		Some(offset) => Ok(offset),
		None => err!(config::invalid_timezone(timezone)),
	}
}
