// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

pub mod base64;
pub mod encoding;
pub mod hex;
