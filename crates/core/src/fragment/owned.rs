// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

use serde::{Deserialize, Serialize};

use crate::fragment::BorrowedFragment;

/// An owned fragment of decoder input.
///
/// `Input` fragments carry text supplied by the caller, typically the
/// base64 gist that failed to decode. `Internal` fragments are
/// synthesized by the library itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnedFragment {
	#[default]
	None,
	Input {
		text: String,
	},
	Internal {
		text: String,
	},
}

impl OwnedFragment {
	pub fn new_input(text: impl Into<String>) -> Self {
		OwnedFragment::Input {
			text: text.into(),
		}
	}

	pub fn new_internal(text: impl Into<String>) -> Self {
		OwnedFragment::Internal {
			text: text.into(),
		}
	}

	/// Construct an input fragment for tests.
	pub fn testing(text: impl Into<String>) -> Self {
		OwnedFragment::Input {
			text: text.into(),
		}
	}

	pub fn text(&self) -> &str {
		match self {
			OwnedFragment::None => "",
			OwnedFragment::Input {
				text,
			} => text,
			OwnedFragment::Internal {
				text,
			} => text,
		}
	}

	pub fn borrowed(&self) -> BorrowedFragment<'_> {
		match self {
			OwnedFragment::None => BorrowedFragment::None,
			OwnedFragment::Input {
				text,
			} => BorrowedFragment::Input {
				text: text.as_str(),
			},
			OwnedFragment::Internal {
				text,
			} => BorrowedFragment::Internal {
				text: text.as_str(),
			},
		}
	}

	pub fn is_none(&self) -> bool {
		matches!(self, OwnedFragment::None)
	}
}
