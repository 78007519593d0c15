// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::operator::Operator;

/// A table or index reference decoded from a gist.
///
/// Gists carry only numeric identifiers. The name is filled in by the
/// caller's [`SchemaResolver`](crate::resolve::SchemaResolver) when it
/// knows the identifier, and displays as `?` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationRef {
	pub id: i64,
	pub name: Option<String>,
}

impl RelationRef {
	pub fn new(id: i64, name: Option<String>) -> Self {
		RelationRef {
			id,
			name,
		}
	}
}

impl Display for RelationRef {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match &self.name {
			Some(name) => f.write_str(name),
			None => f.write_str("?"),
		}
	}
}

/// The join type byte carried by join operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinType {
	Inner,
	LeftOuter,
	RightOuter,
	FullOuter,
	Semi,
	Anti,
	IntersectAll,
	ExceptAll,
	Other(u8),
}

impl JoinType {
	/// Out-of-range bytes are preserved rather than rejected; they
	/// display as `join type N`.
	pub fn from_code(code: u8) -> Self {
		match code {
			0 => JoinType::Inner,
			1 => JoinType::LeftOuter,
			2 => JoinType::RightOuter,
			3 => JoinType::FullOuter,
			4 => JoinType::Semi,
			5 => JoinType::Anti,
			6 => JoinType::IntersectAll,
			7 => JoinType::ExceptAll,
			_ => JoinType::Other(code),
		}
	}
}

impl Display for JoinType {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			JoinType::Inner => f.write_str("inner"),
			JoinType::LeftOuter => f.write_str("left outer"),
			JoinType::RightOuter => f.write_str("right outer"),
			JoinType::FullOuter => f.write_str("full outer"),
			JoinType::Semi => f.write_str("semi"),
			JoinType::Anti => f.write_str("anti"),
			JoinType::IntersectAll => f.write_str("intersect all"),
			JoinType::ExceptAll => f.write_str("except all"),
			JoinType::Other(code) => write!(f, "join type {}", code),
		}
	}
}

/// One node of a decoded plan tree.
///
/// Each variant carries exactly the payload its operator encodes, so
/// the "attribute set is determined by the operator" invariant is
/// checked by the compiler rather than by convention. Operators with
/// no payload of their own, and unrecognized operator codes, decode
/// into [`PlanNode::Generic`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PlanNode {
	Scan {
		table: RelationRef,
		index: RelationRef,
		/// Span count of the index constraint; `None` means an
		/// unconstrained full scan.
		spans: Option<u64>,
		inverted_constraint: bool,
		limited: bool,
	},
	Values {
		rows: i64,
		columns: i64,
	},
	Render {
		columns: i64,
		child: Box<PlanNode>,
	},
	HashJoin {
		join_type: JoinType,
		left_eq_cols: usize,
		right_eq_cols: usize,
		left_key: bool,
		right_key: bool,
		left: Box<PlanNode>,
		right: Box<PlanNode>,
	},
	MergeJoin {
		join_type: JoinType,
		left: Box<PlanNode>,
		right: Box<PlanNode>,
	},
	IndexJoin {
		table: RelationRef,
		child: Box<PlanNode>,
	},
	LookupJoin {
		join_type: JoinType,
		table: RelationRef,
		index: RelationRef,
		child: Box<PlanNode>,
	},
	InvertedJoin {
		join_type: JoinType,
		table: RelationRef,
		index: RelationRef,
		child: Box<PlanNode>,
	},
	TopK {
		k: i64,
		child: Box<PlanNode>,
	},
	Insert {
		table: RelationRef,
		child: Box<PlanNode>,
	},
	Update {
		table: RelationRef,
		child: Box<PlanNode>,
	},
	Upsert {
		table: RelationRef,
		child: Box<PlanNode>,
	},
	Delete {
		table: RelationRef,
		child: Box<PlanNode>,
	},
	/// Synthetic wrapper holding the plan root plus diverted check
	/// subtrees. Only produced when the gist carries checks.
	Root {
		checks: usize,
		children: Vec<PlanNode>,
	},
	/// Operators that carry no payload beyond their children, plus
	/// unrecognized codes.
	Generic {
		operator: Operator,
		children: Vec<PlanNode>,
	},
}

impl PlanNode {
	pub fn op(&self) -> Operator {
		match self {
			PlanNode::Scan {
				..
			} => Operator::Scan,
			PlanNode::Values {
				..
			} => Operator::Values,
			PlanNode::Render {
				..
			} => Operator::Render,
			PlanNode::HashJoin {
				..
			} => Operator::HashJoin,
			PlanNode::MergeJoin {
				..
			} => Operator::MergeJoin,
			PlanNode::IndexJoin {
				..
			} => Operator::IndexJoin,
			PlanNode::LookupJoin {
				..
			} => Operator::LookupJoin,
			PlanNode::InvertedJoin {
				..
			} => Operator::InvertedJoin,
			PlanNode::TopK {
				..
			} => Operator::TopK,
			PlanNode::Insert {
				..
			} => Operator::Insert,
			PlanNode::Update {
				..
			} => Operator::Update,
			PlanNode::Upsert {
				..
			} => Operator::Upsert,
			PlanNode::Delete {
				..
			} => Operator::Delete,
			PlanNode::Root {
				..
			} => Operator::Unknown,
			PlanNode::Generic {
				operator,
				..
			} => *operator,
		}
	}

	/// The node's children in plan order, left before right.
	pub fn children(&self) -> Vec<&PlanNode> {
		match self {
			PlanNode::Scan {
				..
			}
			| PlanNode::Values {
				..
			} => Vec::new(),
			PlanNode::Render {
				child,
				..
			}
			| PlanNode::IndexJoin {
				child,
				..
			}
			| PlanNode::LookupJoin {
				child,
				..
			}
			| PlanNode::InvertedJoin {
				child,
				..
			}
			| PlanNode::TopK {
				child,
				..
			}
			| PlanNode::Insert {
				child,
				..
			}
			| PlanNode::Update {
				child,
				..
			}
			| PlanNode::Upsert {
				child,
				..
			}
			| PlanNode::Delete {
				child,
				..
			} => vec![child.as_ref()],
			PlanNode::HashJoin {
				left,
				right,
				..
			}
			| PlanNode::MergeJoin {
				left,
				right,
				..
			} => vec![left.as_ref(), right.as_ref()],
			PlanNode::Root {
				children,
				..
			}
			| PlanNode::Generic {
				children,
				..
			} => children.iter().collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_relation_ref_display() {
		assert_eq!(RelationRef::new(112, None).to_string(), "?");
		assert_eq!(RelationRef::new(112, Some("users".to_string())).to_string(), "users");
	}

	#[test]
	fn test_join_type_display() {
		assert_eq!(JoinType::from_code(0).to_string(), "inner");
		assert_eq!(JoinType::from_code(7).to_string(), "except all");
		assert_eq!(JoinType::from_code(9).to_string(), "join type 9");
	}

	#[test]
	fn test_node_op() {
		let scan = PlanNode::Scan {
			table: RelationRef::new(1, None),
			index: RelationRef::new(1, None),
			spans: None,
			inverted_constraint: false,
			limited: false,
		};
		assert_eq!(scan.op(), Operator::Scan);
		assert!(scan.children().is_empty());

		let sort = PlanNode::Generic {
			operator: Operator::Sort,
			children: vec![scan],
		};
		assert_eq!(sort.op(), Operator::Sort);
		assert_eq!(sort.children().len(), 1);
	}
}
