// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::str::FromStr;

use jsoncast_type::{GetType, Type};
use num_traits::{Float, NumCast, PrimInt};

use crate::{error::JsonCastError, read::document::Node};

fn mismatch(expected: Type, node: &Node<'_>) -> JsonCastError {
	JsonCastError::TypeMismatch {
		expected,
		found: node.kind(),
	}
}

pub(crate) fn read_bool(node: &Node<'_>) -> Result<bool, JsonCastError> {
	match node {
		Node::Bool(v) => Ok(*v),
		Node::Number(text) => Ok(parse_f64(text)? != 0.0),
		Node::String(s) if s == "true" => Ok(true),
		Node::String(s) if s == "false" => Ok(false),
		_ => Err(mismatch(Type::Boolean, node)),
	}
}

pub(crate) fn read_int<T: PrimInt + GetType>(node: &Node<'_>) -> Result<T, JsonCastError> {
	match node {
		Node::Bool(v) => Ok(if *v {
			T::one()
		} else {
			T::zero()
		}),
		Node::Number(text) => int_from_text(text),
		_ => Err(mismatch(T::get_type(), node)),
	}
}

/// Integral literals must fit 64 bits before narrowing, other literals are
/// truncated toward zero.
pub(crate) fn int_from_text<T: PrimInt + GetType>(text: &str) -> Result<T, JsonCastError> {
	let overflow = || JsonCastError::NumericOverflow {
		target: T::get_type(),
		text: text.to_string(),
	};
	if text.contains(['.', 'e', 'E']) {
		let value = parse_f64(text)?.trunc();
		<T as NumCast>::from(value).ok_or_else(overflow)
	} else {
		let value: i64 = text.parse().map_err(|_| JsonCastError::NumberParseError {
			text: text.to_string(),
		})?;
		<T as NumCast>::from(value).ok_or_else(overflow)
	}
}

pub(crate) fn read_float<F: Float + FromStr + GetType>(node: &Node<'_>) -> Result<F, JsonCastError> {
	match node {
		Node::Bool(v) => Ok(if *v {
			F::one()
		} else {
			F::zero()
		}),
		Node::Number(text) => float_from_text(text),
		Node::String(s) => match s.as_str() {
			"Infinity" => Ok(F::infinity()),
			"-Infinity" => Ok(F::neg_infinity()),
			"NaN" | "-NaN" => Ok(F::nan()),
			s if is_json_number(s) => float_from_text(s),
			_ => Err(mismatch(F::get_type(), node)),
		},
		_ => Err(mismatch(F::get_type(), node)),
	}
}

/// Parses a JSON number literal. Finite literals beyond the range of `F`
/// overflow instead of turning into infinity.
pub(crate) fn float_from_text<F: Float + FromStr + GetType>(text: &str) -> Result<F, JsonCastError> {
	let value: F = text.parse().map_err(|_| JsonCastError::NumberParseError {
		text: text.to_string(),
	})?;
	if value.is_infinite() {
		return Err(JsonCastError::NumericOverflow {
			target: F::get_type(),
			text: text.to_string(),
		});
	}
	Ok(value)
}

pub(crate) fn read_text(node: Node<'_>) -> Result<String, JsonCastError> {
	match node {
		Node::String(s) => Ok(s),
		Node::Number(text) => Ok(text.to_string()),
		Node::Bool(v) => Ok(v.to_string()),
		_ => Err(mismatch(Type::Utf8, &node)),
	}
}

fn parse_f64(text: &str) -> Result<f64, JsonCastError> {
	text.parse().map_err(|_| JsonCastError::NumberParseError {
		text: text.to_string(),
	})
}

/// Whether `text` follows the JSON number grammar
/// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`.
pub(crate) fn is_json_number(text: &str) -> bool {
	let bytes = text.as_bytes();
	let mut i = 0;
	let digits = |i: &mut usize| {
		let start = *i;
		while *i < bytes.len() && bytes[*i].is_ascii_digit() {
			*i += 1;
		}
		*i - start
	};

	if bytes.get(i) == Some(&b'-') {
		i += 1;
	}
	match bytes.get(i) {
		Some(b'0') => i += 1,
		Some(b'1'..=b'9') => {
			digits(&mut i);
		}
		_ => return false,
	}
	if bytes.get(i) == Some(&b'.') {
		i += 1;
		if digits(&mut i) == 0 {
			return false;
		}
	}
	if matches!(bytes.get(i), Some(b'e' | b'E')) {
		i += 1;
		if matches!(bytes.get(i), Some(b'+' | b'-')) {
			i += 1;
		}
		if digits(&mut i) == 0 {
			return false;
		}
	}
	i == bytes.len()
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_int_truncates_fractions() {
		assert_eq!(int_from_text::<i64>("10.23"), Ok(10));
		assert_eq!(int_from_text::<i64>("-10.23"), Ok(-10));
		assert_eq!(int_from_text::<i32>("1.5E2"), Ok(150));
	}

	#[test]
	fn test_int_overflow() {
		for text in ["128", "128.01", "-1223456", "-129"] {
			assert!(matches!(int_from_text::<i8>(text), Err(JsonCastError::NumericOverflow { .. })), "{}", text);
		}
		assert_eq!(int_from_text::<i8>("-128"), Ok(-128));
		assert_eq!(int_from_text::<i8>("127.9"), Ok(127));
	}

	#[test]
	fn test_int_too_large_to_parse() {
		assert_eq!(
			int_from_text::<i64>("233897314173811950000"),
			Err(JsonCastError::NumberParseError {
				text: "233897314173811950000".to_string()
			})
		);
		assert!(matches!(int_from_text::<i64>("1e300"), Err(JsonCastError::NumericOverflow { .. })));
	}

	#[test]
	fn test_int_from_bool() {
		assert_eq!(read_int::<i16>(&Node::Bool(true)), Ok(1));
		assert_eq!(read_int::<i16>(&Node::Bool(false)), Ok(0));
	}

	#[test]
	fn test_int_rejects_strings() {
		assert_eq!(
			read_int::<i8>(&Node::String("Infinity".to_string())),
			Err(JsonCastError::TypeMismatch {
				expected: Type::Int1,
				found: "string"
			})
		);
	}

	#[test]
	fn test_float_sentinels() {
		assert_eq!(read_float::<f64>(&Node::String("Infinity".to_string())), Ok(f64::INFINITY));
		assert_eq!(read_float::<f64>(&Node::String("-Infinity".to_string())), Ok(f64::NEG_INFINITY));
		assert!(read_float::<f32>(&Node::String("-NaN".to_string())).unwrap().is_nan());
		assert_eq!(read_float::<f64>(&Node::String("2".to_string())), Ok(2.0));
		assert!(matches!(
			read_float::<f64>(&Node::String("inf".to_string())),
			Err(JsonCastError::TypeMismatch { .. })
		));
	}

	#[test]
	fn test_float_overflow() {
		assert!(matches!(float_from_text::<f32>("1.7E+307"), Err(JsonCastError::NumericOverflow { .. })));
		assert!(matches!(float_from_text::<f32>("-1.7E+307"), Err(JsonCastError::NumericOverflow { .. })));
		assert_eq!(float_from_text::<f64>("1.7E+307"), Ok(1.7e307));
		assert_eq!(float_from_text::<f64>("233897314173811950000"), Ok(233897314173811950000.0));
	}

	#[test]
	fn test_bool() {
		assert_eq!(read_bool(&Node::Number("0.0")), Ok(false));
		assert_eq!(read_bool(&Node::Number("-3")), Ok(true));
		assert_eq!(read_bool(&Node::String("true".to_string())), Ok(true));
		assert!(matches!(read_bool(&Node::String("123".to_string())), Err(JsonCastError::TypeMismatch { .. })));
		assert!(matches!(read_bool(&Node::String("abc".to_string())), Err(JsonCastError::TypeMismatch { .. })));
	}

	#[test]
	fn test_text() {
		assert_eq!(read_text(Node::Number("-12.3")), Ok("-12.3".to_string()));
		assert_eq!(read_text(Node::Bool(true)), Ok("true".to_string()));
		assert!(matches!(read_text(Node::Array(vec![])), Err(JsonCastError::TypeMismatch { .. })));
	}

	#[test]
	fn test_is_json_number() {
		for text in ["0", "-0", "12", "1.5", "-1.5e10", "2E-3", "0.0"] {
			assert!(is_json_number(text), "{}", text);
		}
		for text in ["", "-", "01", "1.", ".5", "1e", "inf", "NaN", "+1", "1 "] {
			assert!(!is_json_number(text), "{}", text);
		}
	}
}
