// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Writes `value` as a quoted JSON string. Control characters use `\u00XX`
/// unless they have a short escape, and everything outside ASCII is written
/// as `\uXXXX` escapes, as a surrogate pair above the basic plane.
pub fn write_string(out: &mut String, value: &str) {
	out.push('"');
	for c in value.chars() {
		match c {
			'"' => out.push_str("\\\""),
			'\\' => out.push_str("\\\\"),
			'\u{08}' => out.push_str("\\b"),
			'\t' => out.push_str("\\t"),
			'\n' => out.push_str("\\n"),
			'\u{0c}' => out.push_str("\\f"),
			'\r' => out.push_str("\\r"),
			c if (c as u32) < 0x20 || !c.is_ascii() => {
				let mut units = [0u16; 2];
				for unit in c.encode_utf16(&mut units) {
					write_unicode_escape(out, *unit);
				}
			}
			c => out.push(c),
		}
	}
	out.push('"');
}

fn write_unicode_escape(out: &mut String, unit: u16) {
	out.push_str("\\u");
	for shift in [12, 8, 4, 0] {
		out.push(HEX[((unit >> shift) & 0xF) as usize] as char);
	}
}
