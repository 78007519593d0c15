// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

pub mod varint;
