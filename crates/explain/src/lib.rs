// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

//! Plan gist decoding and explain rendering.
//!
//! A plan gist is a compact, base64-encoded fingerprint of a query
//! execution plan: a version varint followed by a post-order stream of
//! operator records. This crate provides:
//! - Operator codes and names via the [`operator`] module
//! - The decoded plan tree via the [`node`] module
//! - Table and index name resolution via the [`resolve`] module
//! - The binary decoder via the [`gist`] module
//! - EXPLAIN-style tree rendering via the [`format`] module
//! - The full pipeline via [`explain_plan_gist`]

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod format;
pub mod gist;
pub mod node;
pub mod operator;
pub mod resolve;

pub use error::ExplainError;
pub use format::{explain_plan_gist, format_plan};
pub use gist::{GIST_VERSION, decode_plan_gist};
pub use node::{JoinType, PlanNode, RelationRef};
pub use operator::Operator;
pub use plangist_core::{Error, Result};
pub use resolve::{MapResolver, SchemaResolver};
