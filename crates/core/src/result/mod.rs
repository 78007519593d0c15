// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

pub mod error;

pub use error::Error;

/// The canonical result type used throughout Plangist.
pub type Result<T> = std::result::Result<T, Error>;
