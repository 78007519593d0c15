// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

//! Standard-alphabet base64, padded and unpadded.
//!
//! Plan gists arrive over channels that disagree on padding, so
//! decoders try [`engine::general_purpose::STANDARD`] first and fall
//! back to [`engine::general_purpose::STANDARD_NO_PAD`].

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
	#[error("invalid byte {1} at offset {0}")]
	InvalidByte(usize, u8),
	#[error("invalid input length {0}")]
	InvalidLength(usize),
	#[error("invalid last symbol {1} at offset {0}")]
	InvalidLastSymbol(usize, u8),
	#[error("invalid padding")]
	InvalidPadding,
}

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const fn build_inverse(alphabet: &[u8; 64]) -> [i8; 256] {
	let mut table = [-1i8; 256];
	let mut i = 0;
	while i < 64 {
		table[alphabet[i] as usize] = i as i8;
		i += 1;
	}
	table
}

const INVERSE: [i8; 256] = build_inverse(ALPHABET);

/// A base64 codec with a fixed alphabet and padding policy.
pub struct Engine {
	padding: bool,
}

impl Engine {
	const fn new(padding: bool) -> Self {
		Engine {
			padding,
		}
	}

	pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
		let input = input.as_ref();
		let mut output = String::with_capacity(input.len().div_ceil(3) * 4);
		let mut chunks = input.chunks_exact(3);
		for chunk in &mut chunks {
			let (x, y, z) = (chunk[0], chunk[1], chunk[2]);
			output.push(ALPHABET[(x >> 2) as usize] as char);
			output.push(ALPHABET[(((x & 0x03) << 4) | (y >> 4)) as usize] as char);
			output.push(ALPHABET[(((y & 0x0F) << 2) | (z >> 6)) as usize] as char);
			output.push(ALPHABET[(z & 0x3F) as usize] as char);
		}
		match *chunks.remainder() {
			[x] => {
				output.push(ALPHABET[(x >> 2) as usize] as char);
				output.push(ALPHABET[((x & 0x03) << 4) as usize] as char);
				if self.padding {
					output.push_str("==");
				}
			}
			[x, y] => {
				output.push(ALPHABET[(x >> 2) as usize] as char);
				output.push(ALPHABET[(((x & 0x03) << 4) | (y >> 4)) as usize] as char);
				output.push(ALPHABET[((y & 0x0F) << 2) as usize] as char);
				if self.padding {
					output.push('=');
				}
			}
			_ => {}
		}
		output
	}

	pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
		let input = input.as_ref();
		if self.padding {
			if input.len() % 4 != 0 {
				return Err(DecodeError::InvalidLength(input.len()));
			}
			let mut end = input.len();
			while end > 0 && input[end - 1] == b'=' {
				end -= 1;
			}
			if input.len() - end > 2 {
				return Err(DecodeError::InvalidPadding);
			}
			decode_symbols(&input[..end])
		} else {
			decode_symbols(input)
		}
	}
}

fn decode_symbols(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
	let full = input.len() - input.len() % 4;
	let mut output = Vec::with_capacity((input.len() / 4) * 3 + 2);
	let mut i = 0;
	while i < full {
		let a = symbol(input[i], i)?;
		let b = symbol(input[i + 1], i + 1)?;
		let c = symbol(input[i + 2], i + 2)?;
		let d = symbol(input[i + 3], i + 3)?;
		output.push((a << 2) | (b >> 4));
		output.push(((b & 0x0F) << 4) | (c >> 2));
		output.push(((c & 0x03) << 6) | d);
		i += 4;
	}
	match input.len() - full {
		0 => {}
		2 => {
			let a = symbol(input[full], full)?;
			let b = symbol(input[full + 1], full + 1)?;
			if b & 0x0F != 0 {
				return Err(DecodeError::InvalidLastSymbol(full + 1, input[full + 1]));
			}
			output.push((a << 2) | (b >> 4));
		}
		3 => {
			let a = symbol(input[full], full)?;
			let b = symbol(input[full + 1], full + 1)?;
			let c = symbol(input[full + 2], full + 2)?;
			if c & 0x03 != 0 {
				return Err(DecodeError::InvalidLastSymbol(full + 2, input[full + 2]));
			}
			output.push((a << 2) | (b >> 4));
			output.push(((b & 0x0F) << 4) | (c >> 2));
		}
		_ => return Err(DecodeError::InvalidLength(input.len())),
	}
	Ok(output)
}

fn symbol(byte: u8, offset: usize) -> Result<u8, DecodeError> {
	match INVERSE[byte as usize] {
		-1 => Err(DecodeError::InvalidByte(offset, byte)),
		value => Ok(value as u8),
	}
}

pub mod engine {
	pub mod general_purpose {
		use crate::util::base64::Engine;

		pub const STANDARD: Engine = Engine::new(true);
		pub const STANDARD_NO_PAD: Engine = Engine::new(false);
	}
}

#[cfg(test)]
mod tests {
	use super::{engine::general_purpose, *};

	#[test]
	fn test_decode() {
		assert_eq!(general_purpose::STANDARD.decode("SGVsbG8=").unwrap(), b"Hello");
	}

	#[test]
	fn test_decode_no_padding() {
		assert_eq!(general_purpose::STANDARD_NO_PAD.decode("SGVsbG8").unwrap(), b"Hello");
	}

	#[test]
	fn test_decode_empty() {
		assert_eq!(general_purpose::STANDARD.decode("").unwrap(), b"");
		assert_eq!(general_purpose::STANDARD_NO_PAD.decode("").unwrap(), b"");
	}

	#[test]
	fn test_standard_rejects_unpadded() {
		assert_eq!(general_purpose::STANDARD.decode("AgE").unwrap_err(), DecodeError::InvalidLength(3));
	}

	#[test]
	fn test_no_pad_rejects_padding() {
		assert_eq!(
			general_purpose::STANDARD_NO_PAD.decode("AgE=").unwrap_err(),
			DecodeError::InvalidByte(3, b'=')
		);
	}

	#[test]
	fn test_decode_invalid() {
		assert!(general_purpose::STANDARD.decode("!!!invalid!!").is_err());
		assert!(general_purpose::STANDARD_NO_PAD.decode("!!!invalid!!").is_err());
	}

	#[test]
	fn test_decode_invalid_last_symbol() {
		// F carries low bits that canonical two-byte output cannot hold
		assert_eq!(
			general_purpose::STANDARD_NO_PAD.decode("AgF").unwrap_err(),
			DecodeError::InvalidLastSymbol(2, b'F')
		);
	}

	#[test]
	fn test_encode() {
		assert_eq!(general_purpose::STANDARD.encode(b"Hello"), "SGVsbG8=");
		assert_eq!(general_purpose::STANDARD_NO_PAD.encode(b"Hello"), "SGVsbG8");
	}

	#[test]
	fn test_encode_exact_chunks() {
		assert_eq!(general_purpose::STANDARD.encode(b"Man"), "TWFu");
		assert_eq!(general_purpose::STANDARD_NO_PAD.encode(b"Man"), "TWFu");
	}

	#[test]
	fn test_roundtrip_binary() {
		let original = b"\x00\x01\x02\xff plan gist";
		let encoded = general_purpose::STANDARD.encode(original);
		assert_eq!(general_purpose::STANDARD.decode(&encoded).unwrap(), original);

		let encoded = general_purpose::STANDARD_NO_PAD.encode(original);
		assert_eq!(general_purpose::STANDARD_NO_PAD.decode(&encoded).unwrap(), original);
	}
}
