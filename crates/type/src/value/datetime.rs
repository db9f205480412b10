// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::Date;

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const SECONDS_PER_DAY: i64 = 86_400;

/// A point in time with nanosecond precision, relative to the Unix epoch in
/// UTC. `nanos` is always below one second, also for instants before 1970.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DateTime {
	seconds: i64,
	nanos: u32,
}

impl DateTime {
	pub fn new(seconds: i64, nanos: u32) -> Option<Self> {
		if nanos as i64 >= NANOS_PER_SECOND {
			return None;
		}
		Some(Self {
			seconds,
			nanos,
		})
	}

	pub fn from_nanos_since_epoch(nanos: i64) -> Self {
		Self {
			seconds: nanos.div_euclid(NANOS_PER_SECOND),
			nanos: nanos.rem_euclid(NANOS_PER_SECOND) as u32,
		}
	}

	pub fn seconds(&self) -> i64 {
		self.seconds
	}

	pub fn nanos(&self) -> u32 {
		self.nanos
	}

	/// The UTC calendar date, or `None` when it does not fit a [`Date`].
	pub fn date(&self) -> Option<Date> {
		i32::try_from(self.seconds.div_euclid(SECONDS_PER_DAY)).ok().map(Date::from_days_since_epoch)
	}
}

impl Display for DateTime {
	fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
		let Some(date) = self.date() else {
			return write!(f, "{}s+{}ns", self.seconds, self.nanos);
		};
		let second_of_day = self.seconds.rem_euclid(SECONDS_PER_DAY);
		write!(
			f,
			"{}T{:02}:{:02}:{:02}.{:09}Z",
			date,
			second_of_day / 3600,
			second_of_day % 3600 / 60,
			second_of_day % 60,
			self.nanos
		)
	}
}
