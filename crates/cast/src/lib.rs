// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Casts between typed columns and JSON text.
//!
//! A cast is planned once per invocation from the source and target types
//! and then applied row by row. Rows failing to cast either abort the whole
//! cast or become undefined, depending on the [`ErrorPolicy`].

use std::sync::Arc;

use jsoncast_column::{Column, ColumnData};
use jsoncast_type::{Type, err, error::diagnostic::cast};
use tracing::instrument;

mod calendar;
mod config;
mod context;
mod error;
pub mod format;
mod key;
mod plan;
mod policy;
mod read;
mod write;

pub use calendar::{Calendar, ChronoCalendar};
pub use config::CastConfig;
pub use context::{CastContext, parse_timezone};
pub use error::JsonCastError;
pub use key::canonical_key;
pub use policy::ErrorPolicy;

use crate::plan::CastPlan;

pub type Result<T> = std::result::Result<T, jsoncast_type::Error>;

/// Casts `source`, whose values are of type `from`, into a new column of type
/// `to` using the default configuration and the chrono calendar.
pub fn cast(source: &Column, from: &Type, to: &Type, policy: ErrorPolicy) -> Result<ColumnData> {
	CastEngine::new(CastConfig::new().with_policy(policy)).cast(source, from, to)
}

pub struct CastEngine {
	config: CastConfig,
	calendar: Arc<dyn Calendar>,
}

impl CastEngine {
	pub fn new(config: CastConfig) -> Self {
		Self {
			config,
			calendar: Arc::new(ChronoCalendar),
		}
	}

	pub fn with_calendar(mut self, calendar: Arc<dyn Calendar>) -> Self {
		self.calendar = calendar;
		self
	}

	pub fn config(&self) -> &CastConfig {
		&self.config
	}

	/// Produces one output row per source row. Unsupported type pairs fail
	/// before any row is read, regardless of the policy.
	#[instrument(name = "cast::json", level = "debug", skip_all, fields(from = %from, to = %to, rows = source.len()))]
	pub fn cast(&self, source: &Column, from: &Type, to: &Type) -> Result<ColumnData> {
		let actual = source.get_type();
		if !from.accepts(&actual) {
			return err!(cast::source_type_mismatch(from, &actual));
		}

		let ctx = CastContext::new(&self.config, from, to, &*self.calendar)?;
		let plan = CastPlan::new(from, to)?;

		let mut out = ColumnData::with_capacity(to, source.len());
		for row in 0..source.len() {
			policy::apply_row(&ctx, &mut out, row, |out| plan.apply(&ctx, source, row, out))?;
		}
		Ok(out)
	}
}

impl Default for CastEngine {
	fn default() -> Self {
		Self::new(CastConfig::default())
	}
}
