// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod fragment;
pub mod result;
pub mod util;

pub use fragment::{BorrowedFragment, Fragment, IntoFragment, OwnedFragment};
pub use result::{
	Result,
	error::{
		Error,
		diagnostic::{Diagnostic, IntoDiagnostic},
	},
};
