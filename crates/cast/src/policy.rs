// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use jsoncast_column::ColumnData;
use jsoncast_type::{IntoDiagnostic, error, error::diagnostic::cast};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{context::CastContext, error::JsonCastError};

/// What happens when a single row fails to cast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
	/// The first failing row aborts the whole cast.
	#[default]
	Strict,
	/// A failing row becomes undefined, the remaining rows are cast as usual.
	Try,
}

/// Casts one row through `f`, which appends exactly one slot to `out` on
/// success. On failure anything `f` appended is rolled back first.
pub(crate) fn apply_row<F>(ctx: &CastContext<'_>, out: &mut ColumnData, row: usize, f: F) -> crate::Result<()>
where
	F: FnOnce(&mut ColumnData) -> Result<(), JsonCastError>,
{
	let checkpoint = out.len();
	match f(out) {
		Ok(()) => {
			debug_assert_eq!(out.len(), checkpoint + 1);
			Ok(())
		}
		Err(err) => match ctx.policy() {
			ErrorPolicy::Strict => Err(error!(cast::invalid_json_cast(
				ctx.from(),
				ctx.to(),
				row,
				err.into_diagnostic()
			))),
			ErrorPolicy::Try => {
				trace!(row, code = err.code(), "row nulled: {}", err);
				out.truncate(checkpoint);
				out.push_undefined();
				Ok(())
			}
		},
	}
}
