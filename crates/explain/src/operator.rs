// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// Operator codes appearing in version 1 plan gists.
///
/// The numbering is part of the wire format and must never change.
/// Code 0 doubles as the stream terminator and as the synthetic
/// wrapper operator for diverted check nodes. Codes without a display
/// name render as `op_N`; codes beyond the known range are preserved
/// as [`Operator::Unrecognized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
	Unknown,
	Scan,
	Values,
	Filter,
	InvertedFilter,
	SimpleProject,
	SerializingProject,
	Render,
	ApplyJoin,
	HashJoin,
	MergeJoin,
	GroupBy,
	ScalarGroupBy,
	Distinct,
	HashSetOp,
	StreamingSetOp,
	UnionAll,
	Sort,
	Ordinality,
	IndexJoin,
	LookupJoin,
	InvertedJoin,
	ZigzagJoin,
	Limit,
	TopK,
	Max1Row,
	ProjectSet,
	Window,
	ExplainOpt,
	Explain,
	ShowTrace,
	Insert,
	InsertFastPath,
	Update,
	Upsert,
	Delete,
	DeleteRange,
	CreateTable,
	CreateTableAs,
	CreateView,
	SequenceSelect,
	SaveTable,
	ErrorIfRows,
	Opaque,
	AlterTableSplit,
	AlterTableUnsplit,
	AlterTableUnsplitAll,
	AlterTableRelocate,
	Buffer,
	ScanBuffer,
	RecursiveCte,
	ControlJobs,
	ControlSchedules,
	CancelQueries,
	CancelSessions,
	CreateStatistics,
	Export,
	AlterRangeRelocate,
	CreateFunction,
	LiteralValues,
	ShowCompletions,
	Call,
	CreateTrigger,
	VectorSearch,
	VectorMutationSearch,
	UpdateSwap,
	DeleteSwap,
	Unrecognized(u8),
}

impl Operator {
	pub fn from_code(code: u8) -> Self {
		match code {
			0 => Operator::Unknown,
			1 => Operator::Scan,
			2 => Operator::Values,
			3 => Operator::Filter,
			4 => Operator::InvertedFilter,
			5 => Operator::SimpleProject,
			6 => Operator::SerializingProject,
			7 => Operator::Render,
			8 => Operator::ApplyJoin,
			9 => Operator::HashJoin,
			10 => Operator::MergeJoin,
			11 => Operator::GroupBy,
			12 => Operator::ScalarGroupBy,
			13 => Operator::Distinct,
			14 => Operator::HashSetOp,
			15 => Operator::StreamingSetOp,
			16 => Operator::UnionAll,
			17 => Operator::Sort,
			18 => Operator::Ordinality,
			19 => Operator::IndexJoin,
			20 => Operator::LookupJoin,
			21 => Operator::InvertedJoin,
			22 => Operator::ZigzagJoin,
			23 => Operator::Limit,
			24 => Operator::TopK,
			25 => Operator::Max1Row,
			26 => Operator::ProjectSet,
			27 => Operator::Window,
			28 => Operator::ExplainOpt,
			29 => Operator::Explain,
			30 => Operator::ShowTrace,
			31 => Operator::Insert,
			32 => Operator::InsertFastPath,
			33 => Operator::Update,
			34 => Operator::Upsert,
			35 => Operator::Delete,
			36 => Operator::DeleteRange,
			37 => Operator::CreateTable,
			38 => Operator::CreateTableAs,
			39 => Operator::CreateView,
			40 => Operator::SequenceSelect,
			41 => Operator::SaveTable,
			42 => Operator::ErrorIfRows,
			43 => Operator::Opaque,
			44 => Operator::AlterTableSplit,
			45 => Operator::AlterTableUnsplit,
			46 => Operator::AlterTableUnsplitAll,
			47 => Operator::AlterTableRelocate,
			48 => Operator::Buffer,
			49 => Operator::ScanBuffer,
			50 => Operator::RecursiveCte,
			51 => Operator::ControlJobs,
			52 => Operator::ControlSchedules,
			53 => Operator::CancelQueries,
			54 => Operator::CancelSessions,
			55 => Operator::CreateStatistics,
			56 => Operator::Export,
			57 => Operator::AlterRangeRelocate,
			58 => Operator::CreateFunction,
			59 => Operator::LiteralValues,
			60 => Operator::ShowCompletions,
			61 => Operator::Call,
			62 => Operator::CreateTrigger,
			63 => Operator::VectorSearch,
			64 => Operator::VectorMutationSearch,
			65 => Operator::UpdateSwap,
			66 => Operator::DeleteSwap,
			_ => Operator::Unrecognized(code),
		}
	}

	pub fn code(&self) -> u8 {
		match self {
			Operator::Unknown => 0,
			Operator::Scan => 1,
			Operator::Values => 2,
			Operator::Filter => 3,
			Operator::InvertedFilter => 4,
			Operator::SimpleProject => 5,
			Operator::SerializingProject => 6,
			Operator::Render => 7,
			Operator::ApplyJoin => 8,
			Operator::HashJoin => 9,
			Operator::MergeJoin => 10,
			Operator::GroupBy => 11,
			Operator::ScalarGroupBy => 12,
			Operator::Distinct => 13,
			Operator::HashSetOp => 14,
			Operator::StreamingSetOp => 15,
			Operator::UnionAll => 16,
			Operator::Sort => 17,
			Operator::Ordinality => 18,
			Operator::IndexJoin => 19,
			Operator::LookupJoin => 20,
			Operator::InvertedJoin => 21,
			Operator::ZigzagJoin => 22,
			Operator::Limit => 23,
			Operator::TopK => 24,
			Operator::Max1Row => 25,
			Operator::ProjectSet => 26,
			Operator::Window => 27,
			Operator::ExplainOpt => 28,
			Operator::Explain => 29,
			Operator::ShowTrace => 30,
			Operator::Insert => 31,
			Operator::InsertFastPath => 32,
			Operator::Update => 33,
			Operator::Upsert => 34,
			Operator::Delete => 35,
			Operator::DeleteRange => 36,
			Operator::CreateTable => 37,
			Operator::CreateTableAs => 38,
			Operator::CreateView => 39,
			Operator::SequenceSelect => 40,
			Operator::SaveTable => 41,
			Operator::ErrorIfRows => 42,
			Operator::Opaque => 43,
			Operator::AlterTableSplit => 44,
			Operator::AlterTableUnsplit => 45,
			Operator::AlterTableUnsplitAll => 46,
			Operator::AlterTableRelocate => 47,
			Operator::Buffer => 48,
			Operator::ScanBuffer => 49,
			Operator::RecursiveCte => 50,
			Operator::ControlJobs => 51,
			Operator::ControlSchedules => 52,
			Operator::CancelQueries => 53,
			Operator::CancelSessions => 54,
			Operator::CreateStatistics => 55,
			Operator::Export => 56,
			Operator::AlterRangeRelocate => 57,
			Operator::CreateFunction => 58,
			Operator::LiteralValues => 59,
			Operator::ShowCompletions => 60,
			Operator::Call => 61,
			Operator::CreateTrigger => 62,
			Operator::VectorSearch => 63,
			Operator::VectorMutationSearch => 64,
			Operator::UpdateSwap => 65,
			Operator::DeleteSwap => 66,
			Operator::Unrecognized(code) => *code,
		}
	}

	/// The display name, for operators that have one.
	pub fn name(&self) -> Option<&'static str> {
		match self {
			Operator::Scan => Some("scan"),
			Operator::Values => Some("values"),
			Operator::Filter => Some("filter"),
			Operator::InvertedFilter => Some("inverted filter"),
			Operator::SimpleProject => Some("simple project"),
			Operator::SerializingProject => Some("serializing project"),
			Operator::Render => Some("render"),
			Operator::ApplyJoin => Some("apply join"),
			Operator::HashJoin => Some("hash join"),
			Operator::MergeJoin => Some("merge join"),
			Operator::GroupBy => Some("group by"),
			Operator::ScalarGroupBy => Some("scalar group by"),
			Operator::Distinct => Some("distinct"),
			Operator::HashSetOp => Some("hash set op"),
			Operator::StreamingSetOp => Some("streaming set op"),
			Operator::UnionAll => Some("union all"),
			Operator::Sort => Some("sort"),
			Operator::Ordinality => Some("ordinality"),
			Operator::IndexJoin => Some("index join"),
			Operator::LookupJoin => Some("lookup join"),
			Operator::InvertedJoin => Some("inverted join"),
			Operator::ZigzagJoin => Some("zigzag join"),
			Operator::Limit => Some("limit"),
			Operator::TopK => Some("top-k"),
			Operator::Max1Row => Some("max1row"),
			Operator::ProjectSet => Some("project set"),
			Operator::Window => Some("window"),
			Operator::Insert => Some("insert"),
			Operator::Update => Some("update"),
			Operator::Upsert => Some("upsert"),
			Operator::Delete => Some("delete"),
			Operator::DeleteRange => Some("delete range"),
			Operator::ErrorIfRows => Some("error if rows"),
			Operator::Buffer => Some("buffer"),
			Operator::ScanBuffer => Some("scan buffer"),
			Operator::RecursiveCte => Some("recursive cte"),
			_ => None,
		}
	}

	/// Trivial projections are invisible in rendered plans.
	pub fn is_trivial_projection(&self) -> bool {
		matches!(self, Operator::SimpleProject | Operator::SerializingProject)
	}
}

impl Display for Operator {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self.name() {
			Some(name) => f.write_str(name),
			None => write!(f, "op_{}", self.code()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_code_roundtrip() {
		for code in 0u8..=u8::MAX {
			assert_eq!(Operator::from_code(code).code(), code);
		}
	}

	#[test]
	fn test_display_named() {
		assert_eq!(Operator::Scan.to_string(), "scan");
		assert_eq!(Operator::TopK.to_string(), "top-k");
		assert_eq!(Operator::ErrorIfRows.to_string(), "error if rows");
	}

	#[test]
	fn test_display_fallback() {
		assert_eq!(Operator::Unknown.to_string(), "op_0");
		assert_eq!(Operator::VectorSearch.to_string(), "op_63");
		assert_eq!(Operator::Unrecognized(200).to_string(), "op_200");
	}

	#[test]
	fn test_trivial_projection() {
		assert!(Operator::SimpleProject.is_trivial_projection());
		assert!(Operator::SerializingProject.is_trivial_projection());
		assert!(!Operator::Render.is_trivial_projection());
	}
}
