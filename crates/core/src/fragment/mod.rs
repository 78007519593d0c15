// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

mod borrowed;
mod owned;

pub use borrowed::BorrowedFragment;
pub use owned::OwnedFragment;

/// A fragment of decoder input, either owned or borrowed from the caller.
///
/// Fragments carry the text a diagnostic points at, so that an error
/// raised deep inside the decoder can still show the gist it was handed.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment<'a> {
	Owned(OwnedFragment),
	Borrowed(BorrowedFragment<'a>),
}

impl<'a> Fragment<'a> {
	pub fn none() -> Self {
		Fragment::Owned(OwnedFragment::None)
	}

	pub fn text(&self) -> &str {
		match self {
			Fragment::Owned(fragment) => fragment.text(),
			Fragment::Borrowed(fragment) => fragment.text(),
		}
	}

	pub fn into_owned(self) -> OwnedFragment {
		match self {
			Fragment::Owned(fragment) => fragment,
			Fragment::Borrowed(fragment) => fragment.into_owned(),
		}
	}

	pub fn is_none(&self) -> bool {
		matches!(self, Fragment::Owned(OwnedFragment::None) | Fragment::Borrowed(BorrowedFragment::None))
	}
}

pub trait IntoFragment<'a> {
	fn into_fragment(self) -> Fragment<'a>;
}

impl<'a> IntoFragment<'a> for Fragment<'a> {
	fn into_fragment(self) -> Fragment<'a> {
		self
	}
}

impl<'a> IntoFragment<'a> for OwnedFragment {
	fn into_fragment(self) -> Fragment<'a> {
		Fragment::Owned(self)
	}
}

impl<'a> IntoFragment<'a> for BorrowedFragment<'a> {
	fn into_fragment(self) -> Fragment<'a> {
		Fragment::Borrowed(self)
	}
}

impl<'a> IntoFragment<'a> for &'a str {
	fn into_fragment(self) -> Fragment<'a> {
		Fragment::Borrowed(BorrowedFragment::new_input(self))
	}
}

impl<'a> IntoFragment<'a> for String {
	fn into_fragment(self) -> Fragment<'a> {
		Fragment::Owned(OwnedFragment::new_input(self))
	}
}

impl<'a, F> IntoFragment<'a> for Option<F>
where
	F: IntoFragment<'a>,
{
	fn into_fragment(self) -> Fragment<'a> {
		match self {
			Some(fragment) => fragment.into_fragment(),
			None => Fragment::none(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_text() {
		let fragment = "AgFwAhQ=".into_fragment();
		assert_eq!(fragment.text(), "AgFwAhQ=");
		assert!(!fragment.is_none());
	}

	#[test]
	fn test_none() {
		let fragment: Fragment = None::<&str>.into_fragment();
		assert!(fragment.is_none());
		assert_eq!(fragment.text(), "");
	}

	#[test]
	fn test_into_owned() {
		let fragment = "AgE".into_fragment().into_owned();
		assert_eq!(fragment, OwnedFragment::Input {
			text: "AgE".to_string()
		});
	}

	#[test]
	fn test_owned_roundtrip() {
		let owned = OwnedFragment::testing("gist");
		let fragment = owned.clone().into_fragment();
		assert_eq!(fragment.into_owned(), owned);
	}
}
