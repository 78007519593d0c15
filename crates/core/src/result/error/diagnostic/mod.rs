// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

pub mod gist;
pub mod render;
pub mod serialization;

use serde::{Deserialize, Serialize};

use crate::fragment::OwnedFragment;

/// A structured description of a failure.
///
/// Diagnostics are plain data. They can be rendered for terminals via
/// [`render::DefaultRenderer`] or serialized as-is for machine
/// consumers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	/// Stable machine readable code, e.g. `GIST_002`.
	pub code: String,
	/// Human readable summary of the failure.
	pub message: String,
	/// The input the failure points at, when known.
	pub fragment: OwnedFragment,
	/// Byte offset into the decoded gist payload, when known.
	pub offset: Option<usize>,
	/// Additional guidance for the reader.
	pub help: Option<String>,
	/// Underlying cause, outermost first.
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	/// Attach the input fragment the failure points at.
	///
	/// Decoders working on raw bytes do not see the caller's input.
	/// The boundary that does attaches it here before surfacing the
	/// error.
	pub fn with_fragment(mut self, fragment: OwnedFragment) -> Self {
		self.fragment = fragment;
		self
	}
}

/// Conversion of domain errors into [`Diagnostic`]s.
pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}
