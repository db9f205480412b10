// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::LowerExp;

use num_traits::Float;

/// Decimal exponents in `[PLAIN_MIN_EXP, PLAIN_MAX_EXP)` are rendered without
/// an exponent.
const PLAIN_MIN_EXP: i32 = -3;
const PLAIN_MAX_EXP: i32 = 7;

/// Renders the shortest digits that round-trip, as `12345.0`, `0.001`,
/// `1.0E7` or `1.2E-4`. Non-finite values become the bare literals `NaN`,
/// `Infinity` and `-Infinity`.
pub fn write_float<F: Float + LowerExp>(out: &mut String, value: F) {
	if value.is_nan() {
		out.push_str("NaN");
		return;
	}
	if value.is_sign_negative() {
		out.push('-');
	}
	if value.is_infinite() {
		out.push_str("Infinity");
		return;
	}
	if value.is_zero() {
		out.push_str("0.0");
		return;
	}

	// `{:e}` yields the shortest round-trip digits, e.g. `1.2345e4`
	let scientific = format!("{:e}", value.abs());
	let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
	let exponent: i32 = exponent.parse().unwrap_or(0);
	let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

	if (PLAIN_MIN_EXP..PLAIN_MAX_EXP).contains(&exponent) {
		write_plain(out, &digits, exponent);
	} else {
		write_scientific(out, &digits, exponent);
	}
}

fn write_plain(out: &mut String, digits: &str, exponent: i32) {
	if exponent < 0 {
		out.push_str("0.");
		for _ in 0..(-exponent - 1) {
			out.push('0');
		}
		out.push_str(digits);
		return;
	}

	let integer_len = exponent as usize + 1;
	if digits.len() > integer_len {
		out.push_str(&digits[..integer_len]);
		out.push('.');
		out.push_str(&digits[integer_len..]);
	} else {
		out.push_str(digits);
		for _ in digits.len()..integer_len {
			out.push('0');
		}
		out.push_str(".0");
	}
}

fn write_scientific(out: &mut String, digits: &str, exponent: i32) {
	out.push_str(&digits[..1]);
	out.push('.');
	if digits.len() > 1 {
		out.push_str(&digits[1..]);
	} else {
		out.push('0');
	}
	out.push('E');
	out.push_str(&exponent.to_string());
}
