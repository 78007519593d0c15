// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

use plangist_core::{
	Diagnostic, Error, IntoDiagnostic,
	result::error::diagnostic::gist,
	util::base64,
};

use crate::operator::Operator;

/// Everything that can go wrong while decoding a plan gist.
///
/// Decode failures are atomic: whichever variant fires, the whole
/// decode is abandoned. Byte-level variants carry the offset into the
/// decoded payload at which the failure was detected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExplainError {
	#[error("gist is not valid base64")]
	InvalidBase64 {
		cause: base64::DecodeError,
	},

	#[error("unsupported plan gist version {version}")]
	UnsupportedVersion {
		version: i64,
	},

	#[error("gist payload ends in the middle of a record at byte {offset}")]
	Truncated {
		offset: usize,
	},

	#[error("malformed varint at byte {offset}")]
	MalformedVarint {
		offset: usize,
	},

	#[error("operator {operator} requires a child but the plan stack is empty")]
	StackUnderflow {
		offset: usize,
		operator: Operator,
	},
}

impl IntoDiagnostic for ExplainError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			ExplainError::InvalidBase64 {
				cause,
			} => gist::invalid_base64(None::<&str>, cause),
			ExplainError::UnsupportedVersion {
				version,
			} => gist::unsupported_version(version),
			ExplainError::Truncated {
				offset,
			} => gist::truncated_payload(offset),
			ExplainError::MalformedVarint {
				offset,
			} => gist::malformed_varint(offset),
			ExplainError::StackUnderflow {
				offset,
				operator,
			} => gist::invalid_structure(
				offset,
				format!("operator {} requires a child but the plan stack is empty", operator),
			),
		}
	}
}

impl From<ExplainError> for Error {
	fn from(err: ExplainError) -> Self {
		plangist_core::error!(err.into_diagnostic())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		let err = ExplainError::UnsupportedVersion {
			version: 3,
		};
		assert_eq!(err.to_string(), "unsupported plan gist version 3");

		let err = ExplainError::StackUnderflow {
			offset: 7,
			operator: Operator::Filter,
		};
		assert_eq!(err.to_string(), "operator filter requires a child but the plan stack is empty");
	}

	#[test]
	fn test_into_diagnostic_codes() {
		assert_eq!(
			ExplainError::InvalidBase64 {
				cause: base64::DecodeError::InvalidLength(3)
			}
			.into_diagnostic()
			.code,
			"GIST_001"
		);
		assert_eq!(
			ExplainError::UnsupportedVersion {
				version: 2
			}
			.into_diagnostic()
			.code,
			"GIST_002"
		);
		assert_eq!(
			ExplainError::Truncated {
				offset: 4
			}
			.into_diagnostic()
			.code,
			"GIST_003"
		);
		assert_eq!(
			ExplainError::MalformedVarint {
				offset: 4
			}
			.into_diagnostic()
			.code,
			"GIST_004"
		);
		assert_eq!(
			ExplainError::StackUnderflow {
				offset: 4,
				operator: Operator::Sort
			}
			.into_diagnostic()
			.code,
			"GIST_005"
		);
	}

	#[test]
	fn test_diagnostic_carries_offset() {
		let diagnostic = ExplainError::Truncated {
			offset: 12,
		}
		.into_diagnostic();
		assert_eq!(diagnostic.offset, Some(12));
	}
}
