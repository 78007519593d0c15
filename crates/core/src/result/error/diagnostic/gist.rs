// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

use std::fmt::Display;

use crate::{
	fragment::IntoFragment,
	result::error::diagnostic::Diagnostic,
};

/// The caller's input was not decodable base64.
pub fn invalid_base64<'a>(fragment: impl IntoFragment<'a>, cause: impl Display) -> Diagnostic {
	Diagnostic {
		code: "GIST_001".to_string(),
		message: format!("gist is not valid base64: {}", cause),
		fragment: fragment.into_fragment().into_owned(),
		offset: None,
		help: Some("plan gists are standard base64, with or without padding".to_string()),
		cause: None,
	}
}

/// The payload declares a gist version this decoder does not speak.
pub fn unsupported_version(version: i64) -> Diagnostic {
	Diagnostic {
		code: "GIST_002".to_string(),
		message: format!("unsupported plan gist version {}", version),
		fragment: Default::default(),
		offset: Some(0),
		help: Some("only plan gist version 1 is supported".to_string()),
		cause: None,
	}
}

/// The payload ended in the middle of an operator record.
pub fn truncated_payload(offset: usize) -> Diagnostic {
	Diagnostic {
		code: "GIST_003".to_string(),
		message: "gist payload ends in the middle of a record".to_string(),
		fragment: Default::default(),
		offset: Some(offset),
		help: Some("the gist may have been truncated".to_string()),
		cause: None,
	}
}

/// A varint in the payload does not fit into 64 bits.
pub fn malformed_varint(offset: usize) -> Diagnostic {
	Diagnostic {
		code: "GIST_004".to_string(),
		message: "varint overflows a 64-bit integer".to_string(),
		fragment: Default::default(),
		offset: Some(offset),
		help: Some("varints span at most ten bytes".to_string()),
		cause: None,
	}
}

/// The operator stream is self-inconsistent.
pub fn invalid_structure(offset: usize, message: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "GIST_005".to_string(),
		message: message.into(),
		fragment: Default::default(),
		offset: Some(offset),
		help: None,
		cause: None,
	}
}
