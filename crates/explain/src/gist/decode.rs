// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

use plangist_core::{IntoDiagnostic, OwnedFragment, util::base64::engine::general_purpose};
use tracing::{debug, instrument, trace};

use crate::{
	error::ExplainError,
	gist::reader::ByteReader,
	node::{JoinType, PlanNode, RelationRef},
	operator::Operator,
	resolve::SchemaResolver,
};

/// The only plan gist format version this decoder speaks.
pub const GIST_VERSION: i64 = 1;

/// Decode a base64 plan gist into a plan tree.
///
/// Returns `Ok(None)` when the gist carries no operators at all.
/// Resolver lookups happen synchronously, in the order identifiers
/// appear in the stream. Bytes after the terminator are ignored, as
/// gists in the wild carry trailing payload there.
#[instrument(level = "debug", skip(resolver), fields(len = gist.len()))]
pub fn decode_plan_gist(gist: &str, resolver: &dyn SchemaResolver) -> plangist_core::Result<Option<PlanNode>> {
	let payload = decode_base64(gist).map_err(|err| attach_gist(err, gist))?;

	let mut decoder = PlanGistDecoder::new(&payload, resolver);
	let node = decoder.decode().map_err(|err| attach_gist(err, gist))?;
	debug!(decoded = node.is_some(), "plan gist decoded");
	Ok(node)
}

fn attach_gist(err: ExplainError, gist: &str) -> plangist_core::Error {
	plangist_core::error!(err.into_diagnostic().with_fragment(OwnedFragment::new_input(gist)))
}

/// Gists are standard base64; padding depends on how they were copied
/// around, so accept both.
fn decode_base64(gist: &str) -> Result<Vec<u8>, ExplainError> {
	general_purpose::STANDARD
		.decode(gist)
		.or_else(|_| general_purpose::STANDARD_NO_PAD.decode(gist))
		.map_err(|cause| ExplainError::InvalidBase64 {
			cause,
		})
}

/// The stack machine reconstructing a plan tree from the operator
/// stream.
///
/// Operators arrive in post-order: children first. Each decoded node
/// is pushed; a later operator that declares children pops them. The
/// wire format is self-describing only through the per-operator arms
/// of [`decode_operator_body`](Self::decode_operator_body), so a
/// single misread byte would desynchronize everything after it; any
/// primitive failure therefore aborts the whole decode.
struct PlanGistDecoder<'a> {
	reader: ByteReader<'a>,
	stack: Vec<PlanNode>,
	resolver: &'a dyn SchemaResolver,
}

impl<'a> PlanGistDecoder<'a> {
	fn new(payload: &'a [u8], resolver: &'a dyn SchemaResolver) -> Self {
		PlanGistDecoder {
			reader: ByteReader::new(payload),
			stack: Vec::new(),
			resolver,
		}
	}

	fn decode(&mut self) -> Result<Option<PlanNode>, ExplainError> {
		let version = self.reader.read_svarint()?;
		if version != GIST_VERSION {
			return Err(ExplainError::UnsupportedVersion {
				version,
			});
		}

		let mut checks = Vec::new();
		// An exhausted payload ends the stream just like the 0x00
		// terminator does.
		while !self.reader.is_empty() {
			let code = self.reader.read_byte()?;
			if code == 0 {
				break;
			}
			let operator = Operator::from_code(code);
			let node = self.decode_operator_body(operator)?;
			trace!(%operator, stack = self.stack.len(), "decoded operator");
			if operator == Operator::ErrorIfRows {
				// Checks hang off the synthetic root, never
				// off a later parent.
				checks.push(node);
			} else {
				self.stack.push(node);
			}
		}

		// Surplus nodes below the root are dropped, matching the
		// upstream decoder.
		let root = self.stack.pop();

		if checks.is_empty() {
			return Ok(root);
		}
		let mut children: Vec<PlanNode> = root.into_iter().collect();
		let count = checks.len();
		children.extend(checks);
		Ok(Some(PlanNode::Root {
			checks: count,
			children,
		}))
	}

	fn decode_operator_body(&mut self, operator: Operator) -> Result<PlanNode, ExplainError> {
		Ok(match operator {
			Operator::Scan => {
				let table = self.decode_table()?;
				let index = self.decode_index(table.id)?;
				// needed columns
				self.decode_int_set()?;
				let spans = self.reader.read_svarint()?;
				let inverted_spans = self.reader.read_svarint()?;
				let hard_limit = self.reader.read_svarint()?;
				PlanNode::Scan {
					table,
					index,
					spans: (spans > 0).then_some(spans as u64),
					inverted_constraint: inverted_spans > 0,
					limited: hard_limit != 0,
				}
			}
			Operator::Values => {
				let rows = self.reader.read_svarint()?;
				let columns = self.reader.read_svarint()?;
				PlanNode::Values {
					rows,
					columns,
				}
			}
			Operator::SimpleProject | Operator::SerializingProject => {
				self.decode_column_ordinals()?;
				self.passthrough(operator)?
			}
			Operator::GroupBy => {
				// grouping columns
				self.decode_column_ordinals()?;
				self.passthrough(operator)?
			}
			Operator::Render => {
				let columns = self.reader.read_svarint()?;
				PlanNode::Render {
					columns,
					child: Box::new(self.pop_child(operator)?),
				}
			}
			Operator::HashJoin => {
				let join_type = self.decode_join_type()?;
				let left_eq_cols = self.decode_column_ordinals()?.unwrap_or(0);
				let right_eq_cols = self.decode_column_ordinals()?.unwrap_or(0);
				let left_key = self.reader.read_bool()?;
				let right_key = self.reader.read_bool()?;
				let (left, right) = self.pop_pair(operator)?;
				PlanNode::HashJoin {
					join_type,
					left_eq_cols,
					right_eq_cols,
					left_key,
					right_key,
					left: Box::new(left),
					right: Box::new(right),
				}
			}
			Operator::MergeJoin => {
				let join_type = self.decode_join_type()?;
				// left/right equality columns form a key
				self.reader.read_bool()?;
				self.reader.read_bool()?;
				let (left, right) = self.pop_pair(operator)?;
				PlanNode::MergeJoin {
					join_type,
					left: Box::new(left),
					right: Box::new(right),
				}
			}
			Operator::TopK => {
				let k = self.reader.read_svarint()?;
				PlanNode::TopK {
					k,
					child: Box::new(self.pop_child(operator)?),
				}
			}
			Operator::IndexJoin => {
				let table = self.decode_table()?;
				// key columns
				self.decode_column_ordinals()?;
				PlanNode::IndexJoin {
					table,
					child: Box::new(self.pop_child(operator)?),
				}
			}
			Operator::LookupJoin => {
				let join_type = self.decode_join_type()?;
				let table = self.decode_table()?;
				let index = self.decode_index(table.id)?;
				// equality columns
				self.decode_column_ordinals()?;
				// equality columns form a key
				self.reader.read_bool()?;
				PlanNode::LookupJoin {
					join_type,
					table,
					index,
					child: Box::new(self.pop_child(operator)?),
				}
			}
			Operator::InvertedJoin => {
				let join_type = self.decode_join_type()?;
				let table = self.decode_table()?;
				let index = self.decode_index(table.id)?;
				// prefix equality columns
				self.decode_column_ordinals()?;
				PlanNode::InvertedJoin {
					join_type,
					table,
					index,
					child: Box::new(self.pop_child(operator)?),
				}
			}
			Operator::UnionAll | Operator::HashSetOp | Operator::StreamingSetOp => {
				let (left, right) = self.pop_pair(operator)?;
				PlanNode::Generic {
					operator,
					children: vec![left, right],
				}
			}
			Operator::Insert => {
				let table = self.decode_table()?;
				// insert, return and check columns
				self.decode_int_set()?;
				self.decode_int_set()?;
				self.decode_int_set()?;
				// auto commit
				self.reader.read_bool()?;
				PlanNode::Insert {
					table,
					child: Box::new(self.pop_child(operator)?),
				}
			}
			Operator::Update => {
				let table = self.decode_table()?;
				PlanNode::Update {
					table,
					child: Box::new(self.pop_child(operator)?),
				}
			}
			Operator::Delete => {
				let table = self.decode_table()?;
				// fetch and return columns
				self.decode_int_set()?;
				self.decode_int_set()?;
				// auto commit
				self.reader.read_bool()?;
				PlanNode::Delete {
					table,
					child: Box::new(self.pop_child(operator)?),
				}
			}
			Operator::Upsert => {
				let table = self.decode_table()?;
				// insert, fetch, update, return and check columns
				for _ in 0..5 {
					self.decode_int_set()?;
				}
				// auto commit
				self.reader.read_bool()?;
				PlanNode::Upsert {
					table,
					child: Box::new(self.pop_child(operator)?),
				}
			}
			Operator::Filter
			| Operator::InvertedFilter
			| Operator::ScalarGroupBy
			| Operator::Distinct
			| Operator::Sort
			| Operator::Limit
			| Operator::ErrorIfRows => self.passthrough(operator)?,
			// No registered body: nothing follows in the stream,
			// and a child is adopted only if one is available.
			_ => {
				let children = if self.stack.is_empty() {
					Vec::new()
				} else {
					vec![self.pop_child(operator)?]
				};
				PlanNode::Generic {
					operator,
					children,
				}
			}
		})
	}

	/// A pure passthrough: one child, no payload of its own.
	fn passthrough(&mut self, operator: Operator) -> Result<PlanNode, ExplainError> {
		let child = self.pop_child(operator)?;
		Ok(PlanNode::Generic {
			operator,
			children: vec![child],
		})
	}

	fn pop_child(&mut self, operator: Operator) -> Result<PlanNode, ExplainError> {
		self.stack.pop().ok_or(ExplainError::StackUnderflow {
			offset: self.reader.position(),
			operator,
		})
	}

	/// Binary operators pop right before left: the left subtree was
	/// pushed first.
	fn pop_pair(&mut self, operator: Operator) -> Result<(PlanNode, PlanNode), ExplainError> {
		let right = self.pop_child(operator)?;
		let left = self.pop_child(operator)?;
		Ok((left, right))
	}

	fn decode_table(&mut self) -> Result<RelationRef, ExplainError> {
		let id = self.reader.read_svarint()?;
		let name = self.resolver.table_name(id).filter(|name| !name.is_empty());
		Ok(RelationRef::new(id, name))
	}

	fn decode_index(&mut self, table_id: i64) -> Result<RelationRef, ExplainError> {
		let id = self.reader.read_svarint()?;
		let name = self.resolver.index_name(table_id, id).filter(|name| !name.is_empty());
		Ok(RelationRef::new(id, name))
	}

	/// Compact integer-set encoding: a zero length is followed by one
	/// 64-bit bitmap uvarint, a non-zero length by that many
	/// `[start, end)` range pairs. Only stream alignment matters here;
	/// the members are not materialized.
	fn decode_int_set(&mut self) -> Result<(), ExplainError> {
		let length = self.reader.read_uvarint()?;
		if length == 0 {
			self.reader.read_uvarint()?;
		} else {
			for _ in 0..length {
				self.reader.read_uvarint()?;
				self.reader.read_uvarint()?;
			}
		}
		Ok(())
	}

	/// Only the count of a column-ordinal list is on the wire; a
	/// negative count means the list is absent.
	fn decode_column_ordinals(&mut self) -> Result<Option<usize>, ExplainError> {
		let count = self.reader.read_svarint()?;
		if count < 0 {
			return Ok(None);
		}
		Ok(Some(count as usize))
	}

	fn decode_join_type(&mut self) -> Result<JoinType, ExplainError> {
		Ok(JoinType::from_code(self.reader.read_byte()?))
	}
}
