// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FromHexError {
	#[error("invalid hex character {c:?} at index {index}")]
	InvalidHexCharacter { c: char, index: usize },
	#[error("odd number of digits")]
	OddLength,
}

const TABLE: &[u8; 16] = b"0123456789abcdef";

/// Encode bytes as lowercase hex.
pub fn encode(input: impl AsRef<[u8]>) -> String {
	let input = input.as_ref();
	let mut output = String::with_capacity(input.len() * 2);
	for byte in input {
		output.push(TABLE[(byte >> 4) as usize] as char);
		output.push(TABLE[(byte & 0x0F) as usize] as char);
	}
	output
}

/// Decode a hex string into bytes. Accepts both cases.
pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, FromHexError> {
	let input = input.as_ref();
	if input.len() % 2 != 0 {
		return Err(FromHexError::OddLength);
	}
	let mut output = Vec::with_capacity(input.len() / 2);
	for (index, pair) in input.chunks_exact(2).enumerate() {
		let high = digit(pair[0], index * 2)?;
		let low = digit(pair[1], index * 2 + 1)?;
		output.push((high << 4) | low);
	}
	Ok(output)
}

fn digit(byte: u8, index: usize) -> Result<u8, FromHexError> {
	match byte {
		b'0'..=b'9' => Ok(byte - b'0'),
		b'a'..=b'f' => Ok(byte - b'a' + 10),
		b'A'..=b'F' => Ok(byte - b'A' + 10),
		_ => Err(FromHexError::InvalidHexCharacter {
			c: byte as char,
			index,
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_encode() {
		assert_eq!(encode([0x02, 0x01, 0xe0, 0x01]), "0201e001");
		assert_eq!(encode([]), "");
	}

	#[test]
	fn test_decode() {
		assert_eq!(decode("0201e001").unwrap(), vec![0x02, 0x01, 0xe0, 0x01]);
		assert_eq!(decode("FF00").unwrap(), vec![0xff, 0x00]);
		assert_eq!(decode("").unwrap(), Vec::<u8>::new());
	}

	#[test]
	fn test_decode_odd_length() {
		assert_eq!(decode("abc").unwrap_err(), FromHexError::OddLength);
	}

	#[test]
	fn test_decode_invalid_character() {
		assert_eq!(decode("0g").unwrap_err(), FromHexError::InvalidHexCharacter {
			c: 'g',
			index: 1
		});
	}

	#[test]
	fn test_roundtrip() {
		let bytes: Vec<u8> = (0..=255).collect();
		assert_eq!(decode(encode(&bytes)).unwrap(), bytes);
	}
}
