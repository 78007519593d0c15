// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

/// Wrap a [`Diagnostic`](crate::Diagnostic) into an [`Error`](crate::Error).
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::Error($diagnostic)
	};
}
