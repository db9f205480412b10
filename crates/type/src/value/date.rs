// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A calendar date without time information.
///
/// Internally stored as days since Unix epoch (1970-01-01).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Date {
	// Negative values represent dates before 1970
	days_since_epoch: i32,
}

impl Date {
	#[inline]
	fn is_leap_year(year: i32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	#[inline]
	fn days_in_month(year: i32, month: u32) -> u32 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 => {
				if Self::is_leap_year(year) {
					29
				} else {
					28
				}
			}
			_ => 0,
		}
	}

	// Howard Hinnant's days_from_civil, with March as the first month
	fn ymd_to_days_since_epoch(year: i32, month: u32, day: u32) -> Option<i32> {
		if !(1..=12).contains(&month) || day < 1 || day > Self::days_in_month(year, month) {
			return None;
		}

		let (y, m) = if month <= 2 {
			(year as i64 - 1, month as i64 + 9)
		} else {
			(year as i64, month as i64 - 3)
		};

		let era = y.div_euclid(400);
		let yoe = y - era * 400;
		let doy = (153 * m + 2) / 5 + day as i64 - 1;
		let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
		i32::try_from(era * 146097 + doe - 719468).ok()
	}

	fn days_since_epoch_to_ymd(days: i32) -> (i32, u32, u32) {
		let z = days as i64 + 719468;
		let era = z.div_euclid(146097);
		let doe = z - era * 146097;
		let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
		let y = yoe + era * 400;
		let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
		let mp = (5 * doy + 2) / 153;
		let d = doy - (153 * mp + 2) / 5 + 1;
		let m = if mp < 10 {
			mp + 3
		} else {
			mp - 9
		};
		let year = if m <= 2 {
			y + 1
		} else {
			y
		};

		(year as i32, m as u32, d as u32)
	}
}

impl Date {
	pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
		Self::ymd_to_days_since_epoch(year, month, day).map(|days_since_epoch| Self {
			days_since_epoch,
		})
	}

	pub fn from_days_since_epoch(days_since_epoch: i32) -> Self {
		Self {
			days_since_epoch,
		}
	}

	pub fn to_days_since_epoch(&self) -> i32 {
		self.days_since_epoch
	}

	pub fn year(&self) -> i32 {
		Self::days_since_epoch_to_ymd(self.days_since_epoch).0
	}

	pub fn month(&self) -> u32 {
		Self::days_since_epoch_to_ymd(self.days_since_epoch).1
	}

	pub fn day(&self) -> u32 {
		Self::days_since_epoch_to_ymd(self.days_since_epoch).2
	}
}

impl Display for Date {
	fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
		let (year, month, day) = Self::days_since_epoch_to_ymd(self.days_since_epoch);
		if year < 0 {
			write!(f, "-{:04}-{:02}-{:02}", -year, month, day)
		} else {
			write!(f, "{:04}-{:02}-{:02}", year, month, day)
		}
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_epoch() {
		let date = Date::new(1970, 1, 1).unwrap();
		assert_eq!(date.to_days_since_epoch(), 0);
		assert_eq!(date.to_string(), "1970-01-01");
	}

	#[test]
	fn test_from_days() {
		assert_eq!(Date::from_days_since_epoch(1000).to_string(), "1972-09-27");
		assert_eq!(Date::from_days_since_epoch(-10000).to_string(), "1942-08-16");
	}

	#[test]
	fn test_components() {
		let date = Date::new(2024, 2, 29).unwrap();
		assert_eq!((date.year(), date.month(), date.day()), (2024, 2, 29));
		assert_eq!(Date::from_days_since_epoch(date.to_days_since_epoch()), date);
	}

	#[test]
	fn test_invalid_dates() {
		assert_eq!(Date::new(2023, 2, 29), None);
		assert_eq!(Date::new(2024, 13, 1), None);
		assert_eq!(Date::new(2024, 4, 31), None);
		assert_eq!(Date::new(2024, 1, 0), None);
	}
}
