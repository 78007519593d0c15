// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

//! Little-endian base-128 varints with zig-zag signed encoding.
//!
//! This is the integer encoding plan gists are built from. Each byte
//! contributes seven value bits, the high bit marks continuation, and
//! signed values are zig-zagged so small magnitudes of either sign stay
//! short on the wire.

use thiserror::Error;

/// Maximum encoded length of a 64-bit varint.
pub const MAX_VARINT_LEN64: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VarintError {
	#[error("varint ends prematurely")]
	UnexpectedEof,
	#[error("varint overflows a 64-bit integer")]
	Overflow,
}

/// Read an unsigned varint from the front of `input`.
///
/// Returns the value and the number of bytes consumed. The tenth byte
/// of a maximal varint may only carry a single bit; anything larger is
/// an [`VarintError::Overflow`].
pub fn read_uvarint(input: &[u8]) -> Result<(u64, usize), VarintError> {
	let mut value = 0u64;
	let mut shift = 0u32;
	for (index, &byte) in input.iter().enumerate() {
		if index == MAX_VARINT_LEN64 - 1 {
			if byte > 1 {
				return Err(VarintError::Overflow);
			}
			return Ok((value | (byte as u64) << shift, index + 1));
		}
		if byte < 0x80 {
			return Ok((value | (byte as u64) << shift, index + 1));
		}
		value |= ((byte & 0x7F) as u64) << shift;
		shift += 7;
	}
	Err(VarintError::UnexpectedEof)
}

/// Read a zig-zagged signed varint from the front of `input`.
pub fn read_svarint(input: &[u8]) -> Result<(i64, usize), VarintError> {
	let (value, read) = read_uvarint(input)?;
	Ok((zigzag_decode(value), read))
}

/// Append an unsigned varint to `output`.
pub fn write_uvarint(output: &mut Vec<u8>, mut value: u64) {
	while value >= 0x80 {
		output.push(value as u8 | 0x80);
		value >>= 7;
	}
	output.push(value as u8);
}

/// Append a zig-zagged signed varint to `output`.
pub fn write_svarint(output: &mut Vec<u8>, value: i64) {
	write_uvarint(output, zigzag_encode(value));
}

pub const fn zigzag_encode(value: i64) -> u64 {
	((value << 1) ^ (value >> 63)) as u64
}

pub const fn zigzag_decode(value: u64) -> i64 {
	((value >> 1) as i64) ^ -((value & 1) as i64)
}
