// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

use crate::result::error::diagnostic::Diagnostic;

/// A value could not be serialized to or from JSON.
pub fn invalid_json(err: serde_json::Error) -> Diagnostic {
	Diagnostic {
		code: "SER_001".to_string(),
		message: format!("json serialization failed: {}", err),
		fragment: Default::default(),
		offset: None,
		help: None,
		cause: None,
	}
}
