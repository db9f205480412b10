// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Rendering of scalar values as JSON text. Every function appends to `out`.

mod float;
mod string;

use std::fmt::{Display, Write};

pub use float::write_float;
pub use string::write_string;

pub fn write_bool(out: &mut String, value: bool) {
	out.push_str(if value {
		"true"
	} else {
		"false"
	});
}

pub fn write_integer<T: Display>(out: &mut String, value: T) {
	// writing into a String never fails
	let _ = write!(out, "{}", value);
}
