// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use chrono::{FixedOffset, NaiveDate};
use jsoncast_type::{Date, DateTime, Type};

use crate::error::JsonCastError;

/// Days from 0001-01-01 (day 1 of the common era) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Renders temporal values. Implementations must never write more than the
/// advertised maximum lengths, the JSON writer sizes its buffers with them.
pub trait Calendar: Send + Sync {
	/// Appends `YYYY-MM-DD`.
	fn format_date(&self, date: Date, out: &mut String) -> Result<(), JsonCastError>;

	/// Appends `YYYY-MM-DDTHH:MM:SS.nnnnnnnnn`, in `offset` when given and
	/// in UTC otherwise.
	fn format_timestamp(
		&self,
		value: DateTime,
		offset: Option<FixedOffset>,
		out: &mut String,
	) -> Result<(), JsonCastError>;

	fn max_date_len(&self) -> usize;

	fn max_timestamp_len(&self) -> usize;
}

/// The default [`Calendar`], backed by chrono's proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoCalendar;

impl Calendar for ChronoCalendar {
	fn format_date(&self, date: Date, out: &mut String) -> Result<(), JsonCastError> {
		let naive = date
			.to_days_since_epoch()
			.checked_add(UNIX_EPOCH_DAYS_FROM_CE)
			.and_then(NaiveDate::from_num_days_from_ce_opt)
			.ok_or(JsonCastError::TypeMismatch {
				expected: Type::Date,
				found: "out of range date",
			})?;
		let _ = write!(out, "{}", naive.format("%Y-%m-%d"));
		Ok(())
	}

	fn format_timestamp(
		&self,
		value: DateTime,
		offset: Option<FixedOffset>,
		out: &mut String,
	) -> Result<(), JsonCastError> {
		let out_of_range = || JsonCastError::TypeMismatch {
			expected: Type::DateTime,
			found: "out of range timestamp",
		};
		let utc = chrono::DateTime::from_timestamp(value.seconds(), value.nanos()).ok_or_else(out_of_range)?;
		let local = match offset {
			Some(offset) => utc.with_timezone(&offset).naive_local(),
			None => utc.naive_utc(),
		};
		let _ = write!(out, "{}", local.format("%Y-%m-%dT%H:%M:%S%.9f"));
		Ok(())
	}

	// "+262143-12-31" is the widest date chrono represents
	fn max_date_len(&self) -> usize {
		16
	}

	fn max_timestamp_len(&self) -> usize {
		40
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	fn date(days: i32) -> Result<String, JsonCastError> {
		let mut out = String::new();
		ChronoCalendar.format_date(Date::from_days_since_epoch(days), &mut out)?;
		Ok(out)
	}

	fn timestamp(nanos: i64, offset: Option<FixedOffset>) -> String {
		let mut out = String::new();
		ChronoCalendar.format_timestamp(DateTime::from_nanos_since_epoch(nanos), offset, &mut out).unwrap();
		out
	}

	#[test]
	fn test_format_date() {
		assert_eq!(date(0).unwrap(), "1970-01-01");
		assert_eq!(date(1000).unwrap(), "1972-09-27");
		assert_eq!(date(-10000).unwrap(), "1942-08-16");
	}

	#[test]
	fn test_format_date_out_of_range() {
		assert_eq!(
			date(i32::MAX),
			Err(JsonCastError::TypeMismatch {
				expected: Type::Date,
				found: "out of range date"
			})
		);
	}

	#[test]
	fn test_format_timestamp() {
		assert_eq!(timestamp(0, None), "1970-01-01T00:00:00.000000000");
		assert_eq!(timestamp(-991_000, None), "1969-12-31T23:59:59.999009000");
	}

	#[test]
	fn test_format_timestamp_with_offset() {
		let offset = FixedOffset::east_opt(2 * 3600);
		assert_eq!(timestamp(0, offset), "1970-01-01T02:00:00.000000000");
	}

	#[test]
	fn test_max_lengths_hold_for_extremes() {
		let calendar = ChronoCalendar;
		let mut out = String::new();
		calendar.format_date(Date::from_days_since_epoch(-719_162), &mut out).unwrap();
		assert!(out.len() <= calendar.max_date_len());

		let mut out = String::new();
		calendar
			.format_timestamp(DateTime::new(-62_135_596_800, 999_999_999).unwrap(), None, &mut out)
			.unwrap();
		assert!(out.len() <= calendar.max_timestamp_len());
	}
}
