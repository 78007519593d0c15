// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

#![cfg_attr(not(debug_assertions), deny(warnings))]

use std::process::ExitCode;

use clap::Parser;
use plangist_explain::{MapResolver, decode_plan_gist, explain_plan_gist};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
	name = "plangist",
	about = "Decode plan gists into human-readable EXPLAIN output",
	after_help = "\
Examples:
  plangist 'AgHgAQIA/wMCAAAHFAUUIeABAAAFDAYM'
  plangist --table 112=users --index 112.1=users_pkey 'AgHgAQIA/wMCAAAHFAUUIeABAAAFDAYM'

Get gists from the database:
  SELECT metadata->'plan_gist' FROM statement_statistics LIMIT 1"
)]
struct Args {
	/// The base64-encoded plan gist to decode.
	gist: String,

	/// Map a table identifier to its name, e.g. `--table 112=users`.
	#[arg(long = "table", value_name = "ID=NAME", value_parser = parse_table_mapping)]
	tables: Vec<(i64, String)>,

	/// Map an index identifier to its name, e.g. `--index 112.1=users_pkey`.
	#[arg(long = "index", value_name = "TABLE_ID.INDEX_ID=NAME", value_parser = parse_index_mapping)]
	indexes: Vec<(i64, i64, String)>,

	/// Print the decoded plan tree as JSON instead of explain text.
	#[arg(long)]
	json: bool,
}

fn parse_table_mapping(value: &str) -> Result<(i64, String), String> {
	let (id, name) = value.split_once('=').ok_or("expected ID=NAME")?;
	let id = id.parse().map_err(|_| format!("invalid table id `{id}`"))?;
	Ok((id, name.to_string()))
}

fn parse_index_mapping(value: &str) -> Result<(i64, i64, String), String> {
	let (ids, name) = value.split_once('=').ok_or("expected TABLE_ID.INDEX_ID=NAME")?;
	let (table_id, index_id) = ids.split_once('.').ok_or("expected TABLE_ID.INDEX_ID=NAME")?;
	let table_id = table_id.parse().map_err(|_| format!("invalid table id `{table_id}`"))?;
	let index_id = index_id.parse().map_err(|_| format!("invalid index id `{index_id}`"))?;
	Ok((table_id, index_id, name.to_string()))
}

fn run(args: &Args) -> plangist_core::Result<String> {
	let mut resolver = MapResolver::new();
	for (id, name) in &args.tables {
		resolver = resolver.with_table(*id, name.as_str());
	}
	for (table_id, index_id, name) in &args.indexes {
		resolver = resolver.with_index(*table_id, *index_id, name.as_str());
	}

	if args.json {
		let node = decode_plan_gist(&args.gist, &resolver)?;
		let mut output = serde_json::to_string_pretty(&node).map_err(plangist_core::Error::from)?;
		output.push('\n');
		return Ok(output);
	}
	explain_plan_gist(&args.gist, &resolver)
}

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let args = Args::parse();
	match run(&args) {
		Ok(output) => {
			print!("{}", output);
			ExitCode::SUCCESS
		}
		Err(err) => {
			eprintln!("{}", err);
			ExitCode::FAILURE
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_table_mapping() {
		assert_eq!(parse_table_mapping("112=users").unwrap(), (112, "users".to_string()));
		assert!(parse_table_mapping("users").is_err());
		assert!(parse_table_mapping("abc=users").is_err());
	}

	#[test]
	fn test_parse_index_mapping() {
		assert_eq!(
			parse_index_mapping("112.1=users_pkey").unwrap(),
			(112, 1, "users_pkey".to_string())
		);
		assert!(parse_index_mapping("112=users_pkey").is_err());
		assert!(parse_index_mapping("112.x=users_pkey").is_err());
	}

	#[test]
	fn test_run_explain() {
		let args = Args {
			gist: "AgHgAQIA/wMCAAAHFAUUIeABAAAFDAYM".to_string(),
			tables: vec![(112, "users".to_string())],
			indexes: vec![(112, 1, "users_pkey".to_string())],
			json: false,
		};
		let output = run(&args).unwrap();
		assert!(output.contains("• update"));
		assert!(output.contains("table: users"));
	}

	#[test]
	fn test_run_json() {
		let args = Args {
			gist: "AgHgAQIA/wMCAAAHFAUUIeABAAAFDAYM".to_string(),
			tables: Vec::new(),
			indexes: Vec::new(),
			json: true,
		};
		let output = run(&args).unwrap();
		assert!(output.contains("\"op\": \"update\""));
	}

	#[test]
	fn test_run_decode_failure() {
		let args = Args {
			gist: "not-valid-base64!".to_string(),
			tables: Vec::new(),
			indexes: Vec::new(),
			json: false,
		};
		let err = run(&args).unwrap_err();
		assert_eq!(err.code, "GIST_001");
	}
}
