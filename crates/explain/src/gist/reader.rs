// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

use plangist_core::util::encoding::varint::{self, VarintError};

use crate::error::ExplainError;

/// Sequential cursor over the decoded gist payload.
///
/// Every read advances the position; reading past the end or hitting a
/// malformed varint fails with the offset at which the read started.
/// Nothing above this reader touches the payload bytes directly.
pub struct ByteReader<'a> {
	input: &'a [u8],
	position: usize,
}

impl<'a> ByteReader<'a> {
	pub fn new(input: &'a [u8]) -> Self {
		ByteReader {
			input,
			position: 0,
		}
	}

	/// Offset of the next unread byte.
	pub fn position(&self) -> usize {
		self.position
	}

	pub fn is_empty(&self) -> bool {
		self.position >= self.input.len()
	}

	pub fn read_byte(&mut self) -> Result<u8, ExplainError> {
		let byte = *self.input.get(self.position).ok_or(ExplainError::Truncated {
			offset: self.position,
		})?;
		self.position += 1;
		Ok(byte)
	}

	pub fn read_bool(&mut self) -> Result<bool, ExplainError> {
		Ok(self.read_byte()? != 0)
	}

	pub fn read_uvarint(&mut self) -> Result<u64, ExplainError> {
		let offset = self.position;
		let (value, read) =
			varint::read_uvarint(&self.input[self.position..]).map_err(|err| match err {
				VarintError::UnexpectedEof => ExplainError::Truncated {
					offset,
				},
				VarintError::Overflow => ExplainError::MalformedVarint {
					offset,
				},
			})?;
		self.position += read;
		Ok(value)
	}

	pub fn read_svarint(&mut self) -> Result<i64, ExplainError> {
		Ok(varint::zigzag_decode(self.read_uvarint()?))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_read_byte() {
		let mut reader = ByteReader::new(&[0x01, 0x02]);
		assert_eq!(reader.read_byte().unwrap(), 0x01);
		assert_eq!(reader.position(), 1);
		assert_eq!(reader.read_byte().unwrap(), 0x02);
		assert!(reader.is_empty());
	}

	#[test]
	fn test_read_past_end() {
		let mut reader = ByteReader::new(&[]);
		assert_eq!(reader.read_byte().unwrap_err(), ExplainError::Truncated {
			offset: 0
		});
	}

	#[test]
	fn test_read_bool() {
		let mut reader = ByteReader::new(&[0x00, 0x01, 0x07]);
		assert!(!reader.read_bool().unwrap());
		assert!(reader.read_bool().unwrap());
		assert!(reader.read_bool().unwrap());
	}

	#[test]
	fn test_read_varints() {
		// uvarint 300, svarint 112, svarint -1
		let mut reader = ByteReader::new(&[0xac, 0x02, 0xe0, 0x01, 0x01]);
		assert_eq!(reader.read_uvarint().unwrap(), 300);
		assert_eq!(reader.read_svarint().unwrap(), 112);
		assert_eq!(reader.read_svarint().unwrap(), -1);
		assert!(reader.is_empty());
	}

	#[test]
	fn test_truncated_varint_carries_start_offset() {
		let mut reader = ByteReader::new(&[0x01, 0x80]);
		reader.read_byte().unwrap();
		assert_eq!(reader.read_uvarint().unwrap_err(), ExplainError::Truncated {
			offset: 1
		});
	}

	#[test]
	fn test_malformed_varint() {
		let mut input = vec![0xff; 9];
		input.push(0x02);
		let mut reader = ByteReader::new(&input);
		assert_eq!(reader.read_uvarint().unwrap_err(), ExplainError::MalformedVarint {
			offset: 0
		});
	}
}
