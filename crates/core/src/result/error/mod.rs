// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

pub mod diagnostic;
mod r#macro;

use std::{
	fmt::{self, Display, Formatter},
	ops::{Deref, DerefMut},
};

use serde::{Deserialize, Serialize};

use crate::result::error::diagnostic::{
	Diagnostic,
	render::{DefaultRenderer, DiagnosticRenderer},
};

/// The canonical error type of Plangist.
///
/// Every failure surfaces as a [`Diagnostic`] carrying a stable code, a
/// human readable message and, where available, the input fragment and
/// byte offset that triggered it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Error(pub Diagnostic);

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Error {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}", DefaultRenderer::render_string(&self.0))
	}
}

impl std::error::Error for Error {}

impl Error {
	/// Consume the error and return the underlying diagnostic.
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		crate::error!(diagnostic::serialization::invalid_json(err))
	}
}
