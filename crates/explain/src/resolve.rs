// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

use std::collections::HashMap;

/// Maps the numeric table and index identifiers found in a gist to
/// display names.
///
/// Both methods default to `None`, which renders as `?`. Returning an
/// empty string is treated the same as `None`. Resolvers are called
/// synchronously, in stream order, and are expected to be cheap map
/// lookups.
pub trait SchemaResolver {
	fn table_name(&self, table_id: i64) -> Option<String> {
		let _ = table_id;
		None
	}

	/// Index names are scoped to their table, so the table identifier
	/// is part of the lookup key.
	fn index_name(&self, table_id: i64, index_id: i64) -> Option<String> {
		let _ = (table_id, index_id);
		None
	}
}

/// The resolver that resolves nothing; every identifier renders as `?`.
impl SchemaResolver for () {}

/// A [`SchemaResolver`] backed by in-memory maps.
#[derive(Debug, Clone, Default)]
pub struct MapResolver {
	tables: HashMap<i64, String>,
	indexes: HashMap<(i64, i64), String>,
}

impl MapResolver {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_table(mut self, table_id: i64, name: impl Into<String>) -> Self {
		self.tables.insert(table_id, name.into());
		self
	}

	pub fn with_index(mut self, table_id: i64, index_id: i64, name: impl Into<String>) -> Self {
		self.indexes.insert((table_id, index_id), name.into());
		self
	}
}

impl SchemaResolver for MapResolver {
	fn table_name(&self, table_id: i64) -> Option<String> {
		self.tables.get(&table_id).cloned()
	}

	fn index_name(&self, table_id: i64, index_id: i64) -> Option<String> {
		self.indexes.get(&(table_id, index_id)).cloned()
	}
}
