// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

mod decode;
mod reader;

pub use decode::{GIST_VERSION, decode_plan_gist};
pub use reader::ByteReader;
