// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

//! EXPLAIN-style rendering of decoded plan trees.
//!
//! Rendering is a pure function of the tree: it never fails and holds
//! no state, so formatting the same tree twice yields the same string.

use std::fmt::Write;

use tracing::instrument;

use crate::{gist::decode_plan_gist, node::PlanNode, resolve::SchemaResolver};

/// Decode a gist and render it, in one call.
///
/// A gist with no operators renders as the empty string.
#[instrument(level = "debug", skip(resolver))]
pub fn explain_plan_gist(gist: &str, resolver: &dyn SchemaResolver) -> plangist_core::Result<String> {
	let node = decode_plan_gist(gist, resolver)?;
	Ok(node.as_ref().map(format_plan).unwrap_or_default())
}

/// Render a plan tree as indented, box-drawn explain output.
pub fn format_plan(node: &PlanNode) -> String {
	let rendered = render_node(node);
	if rendered.is_empty() {
		return String::new();
	}
	// Two-space margin on every line of the whole diagram.
	let mut output = String::new();
	for line in rendered.trim_end_matches('\n').split('\n') {
		writeln!(output, "  {}", line).unwrap();
	}
	output
}

fn render_node(node: &PlanNode) -> String {
	// Trivial projections are display-transparent: their first child
	// renders in their place.
	if node.op().is_trivial_projection() {
		return match node.children().first() {
			Some(child) => render_node(child),
			None => String::new(),
		};
	}

	let mut output = String::new();
	writeln!(output, "• {}", node.op()).unwrap();

	let children = node.children();
	// Attribute lines continue the vertical bar when a subtree
	// follows below them.
	let attr_prefix = if children.is_empty() {
		"  "
	} else {
		"│ "
	};
	write_attributes(node, attr_prefix, &mut output);

	for (position, child) in children.iter().enumerate() {
		let last = position == children.len() - 1;
		let (connector, child_prefix) = if last {
			("└── ", "    ")
		} else {
			("├── ", "│   ")
		};
		output.push_str(connector);
		let rendered = render_node(child);
		for (line_index, line) in rendered.trim_end_matches('\n').split('\n').enumerate() {
			if line_index == 0 {
				writeln!(output, "{}", line).unwrap();
			} else {
				writeln!(output, "{}{}", child_prefix, line).unwrap();
			}
		}
	}

	output
}

fn write_attributes(node: &PlanNode, prefix: &str, output: &mut String) {
	match node {
		PlanNode::Scan {
			table,
			index,
			spans,
			limited,
			..
		} => {
			writeln!(output, "{}table: {}@{}", prefix, table, index).unwrap();
			match spans {
				Some(spans) => writeln!(output, "{}spans: {}+ spans", prefix, spans).unwrap(),
				None => writeln!(output, "{}spans: FULL SCAN", prefix).unwrap(),
			}
			if *limited {
				writeln!(output, "{}limit: limited", prefix).unwrap();
			}
		}
		PlanNode::HashJoin {
			join_type,
			left_eq_cols,
			..
		} => {
			writeln!(output, "{}type: {}", prefix, join_type).unwrap();
			writeln!(output, "{}equality cols: {}", prefix, left_eq_cols).unwrap();
		}
		PlanNode::MergeJoin {
			join_type,
			..
		} => {
			writeln!(output, "{}type: {}", prefix, join_type).unwrap();
		}
		PlanNode::LookupJoin {
			join_type,
			table,
			index,
			..
		} => {
			writeln!(output, "{}type: {}", prefix, join_type).unwrap();
			writeln!(output, "{}table: {}@{}", prefix, table, index).unwrap();
		}
		PlanNode::IndexJoin {
			table,
			..
		} => {
			writeln!(output, "{}table: {}", prefix, table).unwrap();
		}
		PlanNode::Values {
			rows,
			columns,
		} => {
			writeln!(output, "{}size: {} columns, {} rows", prefix, columns, rows).unwrap();
		}
		PlanNode::TopK {
			k,
			..
		} => {
			writeln!(output, "{}k: {}", prefix, k).unwrap();
		}
		PlanNode::Insert {
			table,
			..
		}
		| PlanNode::Update {
			table,
			..
		}
		| PlanNode::Upsert {
			table,
			..
		}
		| PlanNode::Delete {
			table,
			..
		} => {
			writeln!(output, "{}table: {}", prefix, table).unwrap();
			if matches!(node, PlanNode::Update { .. }) {
				writeln!(output, "{}set", prefix).unwrap();
			}
			// One blank continuation line before the input subtree.
			if !node.children().is_empty() {
				writeln!(output, "{}", prefix.trim_end()).unwrap();
			}
		}
		PlanNode::Render {
			..
		} => {
			if !node.children().is_empty() {
				writeln!(output, "{}", prefix.trim_end()).unwrap();
			}
		}
		_ => {}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{node::RelationRef, operator::Operator, resolve::MapResolver};

	const REFERENCE_GIST: &str = "AgHgAQIA/wMCAAAHFAUUIeABAAAFDAYM";

	#[test]
	fn test_reference_gist_unresolved() {
		let output = explain_plan_gist(REFERENCE_GIST, &()).unwrap();
		assert_eq!(
			output,
			"  • update\n\
			 \x20 │ table: ?\n\
			 \x20 │ set\n\
			 \x20 │\n\
			 \x20 └── • render\n\
			 \x20     │\n\
			 \x20     └── • scan\n\
			 \x20           table: ?@?\n\
			 \x20           spans: 1+ spans\n"
		);
	}

	#[test]
	fn test_reference_gist_resolved() {
		let resolver = MapResolver::new().with_table(112, "users").with_index(112, 1, "users_pkey");
		let output = explain_plan_gist(REFERENCE_GIST, &resolver).unwrap();
		assert!(output.contains("  │ table: users\n"));
		assert!(output.contains("table: users@users_pkey\n"));
		assert!(!output.contains("table: ?"));
	}

	#[test]
	fn test_reference_gist_fragments() {
		let output = explain_plan_gist(REFERENCE_GIST, &()).unwrap();
		for fragment in ["• update", "table: ?", "set", "• render", "• scan", "spans:", "│", "└──"] {
			assert!(output.contains(fragment), "missing {:?} in:\n{}", fragment, output);
		}
		// the simple project between update and render never shows
		assert!(!output.contains("project"));
	}

	#[test]
	fn test_formatting_is_idempotent() {
		let node = decode_plan_gist(REFERENCE_GIST, &()).unwrap().unwrap();
		assert_eq!(format_plan(&node), format_plan(&node));
	}

	#[test]
	fn test_hash_join_rendering() {
		// sort over hash join of two scans, one full, one with spans
		let resolver = MapResolver::new()
			.with_table(50, "orders")
			.with_table(51, "customers")
			.with_index(50, 1, "primary")
			.with_index(51, 1, "primary");
		let output = explain_plan_gist("AgFkAgADAAAAAWYCAAMGAAAJAAQEAQARAA==", &resolver).unwrap();
		assert_eq!(
			output,
			"  • sort\n\
			 \x20 └── • hash join\n\
			 \x20     │ type: inner\n\
			 \x20     │ equality cols: 2\n\
			 \x20     ├── • scan\n\
			 \x20     │     table: orders@primary\n\
			 \x20     │     spans: FULL SCAN\n\
			 \x20     └── • scan\n\
			 \x20           table: customers@primary\n\
			 \x20           spans: 3+ spans\n"
		);
	}

	#[test]
	fn test_check_wrapper_renders_as_op_0() {
		let output = explain_plan_gist("AgIAAh94AAcAAAAAAQF6BAADAgAAKgA=", &()).unwrap();
		assert!(output.starts_with("  • op_0\n"));
		assert!(output.contains("• insert"));
		assert!(output.contains("• error if rows"));
		assert!(output.contains("├── "));
	}

	#[test]
	fn test_absent_tree_renders_empty() {
		assert_eq!(explain_plan_gist("AgA=", &()).unwrap(), "");
	}

	#[test]
	fn test_nested_trivial_projections_invisible() {
		let scan = PlanNode::Scan {
			table: RelationRef::new(7, None),
			index: RelationRef::new(1, None),
			spans: None,
			inverted_constraint: false,
			limited: false,
		};
		let mut node = scan;
		for operator in [Operator::SimpleProject, Operator::SerializingProject, Operator::SimpleProject] {
			node = PlanNode::Generic {
				operator,
				children: vec![node],
			};
		}
		let output = format_plan(&node);
		assert_eq!(output, "  • scan\n    table: ?@?\n    spans: FULL SCAN\n");
	}

	#[test]
	fn test_limited_scan_shows_limit() {
		// filter over op_63 over a single-span limited scan
		let output = explain_plan_gist("AgGgAQIAAwIAAj8DAA==", &()).unwrap();
		assert!(output.contains("• op_63"));
		assert!(output.contains("spans: 1+ spans\n"));
		assert!(output.contains("limit: limited\n"));
	}
}
