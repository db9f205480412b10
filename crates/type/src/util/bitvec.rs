// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Debug, Formatter};

use serde::{Deserialize, Serialize};

/// A growable, packed vector of bits. Bit `i` lives in byte `i / 8` at
/// position `i % 8`. Bits past `len` are always zero.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitVec {
	bits: Vec<u8>,
	len: usize,
}

impl BitVec {
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			bits: Vec::with_capacity(capacity.div_ceil(8)),
			len: 0,
		}
	}

	pub fn repeat(len: usize, value: bool) -> Self {
		let fill = if value {
			0xFF
		} else {
			0x00
		};
		let mut result = Self {
			bits: vec![fill; len.div_ceil(8)],
			len,
		};
		result.clear_tail();
		result
	}

	pub fn from_slice(slice: &[bool]) -> Self {
		let mut result = Self::with_capacity(slice.len());
		for &bit in slice {
			result.push(bit);
		}
		result
	}

	pub fn from_raw(bits: Vec<u8>, len: usize) -> Self {
		debug_assert!(bits.len() >= len.div_ceil(8));
		let mut result = Self {
			bits,
			len,
		};
		result.bits.truncate(len.div_ceil(8));
		result.clear_tail();
		result
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn push(&mut self, bit: bool) {
		let byte = self.len / 8;
		if byte == self.bits.len() {
			self.bits.push(0);
		}
		if bit {
			self.bits[byte] |= 1 << (self.len % 8);
		}
		self.len += 1;
	}

	pub fn get(&self, index: usize) -> bool {
		assert!(index < self.len, "bit index {} out of bounds for length {}", index, self.len);
		self.bits[index / 8] & (1 << (index % 8)) != 0
	}

	pub fn set(&mut self, index: usize, bit: bool) {
		assert!(index < self.len, "bit index {} out of bounds for length {}", index, self.len);
		let mask = 1 << (index % 8);
		if bit {
			self.bits[index / 8] |= mask;
		} else {
			self.bits[index / 8] &= !mask;
		}
	}

	/// Shortens the vector to `len` bits. Has no effect when `len` is not
	/// smaller than the current length.
	pub fn truncate(&mut self, len: usize) {
		if len >= self.len {
			return;
		}
		self.len = len;
		self.bits.truncate(len.div_ceil(8));
		self.clear_tail();
	}

	pub fn count_ones(&self) -> usize {
		self.bits.iter().map(|b| b.count_ones() as usize).sum()
	}

	pub fn all_ones(&self) -> bool {
		self.count_ones() == self.len
	}

	pub fn iter(&self) -> BitIter<'_> {
		BitIter {
			bitvec: self,
			position: 0,
		}
	}

	fn clear_tail(&mut self) {
		let used = self.len % 8;
		if used != 0 {
			if let Some(last) = self.bits.last_mut() {
				*last &= (1u8 << used) - 1;
			}
		}
	}
}

impl Debug for BitVec {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "BitVec[")?;
		for bit in self.iter() {
			write!(f, "{}", if bit { '1' } else { '0' })?;
		}
		write!(f, "]")
	}
}

pub struct BitIter<'a> {
	bitvec: &'a BitVec,
	position: usize,
}

impl Iterator for BitIter<'_> {
	type Item = bool;

	fn next(&mut self) -> Option<bool> {
		if self.position >= self.bitvec.len {
			return None;
		}
		let bit = self.bitvec.get(self.position);
		self.position += 1;
		Some(bit)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.bitvec.len - self.position;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for BitIter<'_> {}

impl<'a> IntoIterator for &'a BitVec {
	type Item = bool;
	type IntoIter = BitIter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_push_and_get() {
		let mut bv = BitVec::empty();
		for i in 0..20 {
			bv.push(i % 3 == 0);
		}
		assert_eq!(bv.len(), 20);
		for i in 0..20 {
			assert_eq!(bv.get(i), i % 3 == 0, "bit {}", i);
		}
		assert_eq!(bv.count_ones(), 7);
	}

	#[test]
	fn test_repeat() {
		let bv = BitVec::repeat(10, true);
		assert_eq!(bv.len(), 10);
		assert_eq!(bv.count_ones(), 10);
		assert!(bv.all_ones());

		let bv = BitVec::repeat(10, false);
		assert_eq!(bv.count_ones(), 0);
	}

	#[test]
	fn test_set() {
		let mut bv = BitVec::repeat(9, false);
		bv.set(8, true);
		bv.set(0, true);
		bv.set(0, false);
		assert_eq!(bv.iter().collect::<Vec<_>>(), vec![false, false, false, false, false, false, false, false, true]);
	}

	#[test]
	fn test_truncate_clears_trailing_bits() {
		let mut bv = BitVec::repeat(12, true);
		bv.truncate(3);
		assert_eq!(bv.len(), 3);
		assert_eq!(bv.count_ones(), 3);

		bv.push(false);
		assert_eq!(bv.count_ones(), 3);
		assert!(!bv.get(3));
	}

	#[test]
	fn test_truncate_longer_is_noop() {
		let mut bv = BitVec::from_slice(&[true, false]);
		bv.truncate(5);
		assert_eq!(bv, BitVec::from_slice(&[true, false]));
	}

	#[test]
	fn test_equality_ignores_history() {
		let mut a = BitVec::from_slice(&[true, true, true]);
		a.truncate(1);
		let b = BitVec::from_slice(&[true]);
		assert_eq!(a, b);
	}

	#[test]
	#[should_panic(expected = "out of bounds")]
	fn test_get_out_of_bounds() {
		BitVec::repeat(3, true).get(3);
	}
}
