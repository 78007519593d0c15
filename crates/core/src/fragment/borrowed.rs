// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

use serde::Serialize;

use crate::fragment::OwnedFragment;

/// A fragment borrowing its text from the caller's input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum BorrowedFragment<'a> {
	#[default]
	None,
	Input {
		text: &'a str,
	},
	Internal {
		text: &'a str,
	},
}

impl<'a> BorrowedFragment<'a> {
	pub fn new_input(text: &'a str) -> Self {
		BorrowedFragment::Input {
			text,
		}
	}

	pub fn new_internal(text: &'a str) -> Self {
		BorrowedFragment::Internal {
			text,
		}
	}

	pub fn text(&self) -> &'a str {
		match *self {
			BorrowedFragment::None => "",
			BorrowedFragment::Input {
				text,
			} => text,
			BorrowedFragment::Internal {
				text,
			} => text,
		}
	}

	pub fn into_owned(self) -> OwnedFragment {
		match self {
			BorrowedFragment::None => OwnedFragment::None,
			BorrowedFragment::Input {
				text,
			} => OwnedFragment::Input {
				text: text.to_string(),
			},
			BorrowedFragment::Internal {
				text,
			} => OwnedFragment::Internal {
				text: text.to_string(),
			},
		}
	}

	pub fn is_none(&self) -> bool {
		matches!(self, BorrowedFragment::None)
	}
}
