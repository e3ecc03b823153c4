//! End-to-end tests for the splitter.
//!
//! Runs every strategy on an Atlas-style schema fixture, both through the
//! library and through the `splt` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use splt::{split_document, write_groups, Document, Strategy};

/// Path of a fixture file.
fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("atlas")
        .join(name)
}

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn parse_fixture() -> Document {
    Document::parse(load_fixture("schema.hcl"), "schema.hcl").expect("fixture should parse")
}

fn group_addresses(doc: &Document, strategy: Strategy) -> Vec<(String, Vec<String>)> {
    split_document(doc, strategy)
        .iter()
        .map(|group| {
            (
                group.key.clone(),
                group
                    .blocks
                    .iter()
                    .map(|b| splt::address::canonical_address(b))
                    .collect(),
            )
        })
        .collect()
}

fn owned(key: &str, blocks: &[&str]) -> (String, Vec<String>) {
    (
        key.to_string(),
        blocks.iter().map(|b| b.to_string()).collect(),
    )
}

#[test]
fn test_scope_strategy_groups() {
    let doc = parse_fixture();

    assert_eq!(
        group_addresses(&doc, Strategy::Scope),
        vec![
            owned(
                "schema_public",
                &["schema.public", "table.users", "view.active_users"]
            ),
            owned("schema_billing", &["schema.billing", "table.invoices"]),
            owned(
                "main",
                &["trigger.users_audit", "trigger.ghost_audit", "enum.status"]
            ),
        ]
    );
}

#[test]
fn test_type_strategy_groups() {
    let doc = parse_fixture();

    assert_eq!(
        group_addresses(&doc, Strategy::Type),
        vec![
            owned("schema", &["schema.public", "schema.billing"]),
            owned("table", &["table.users", "table.invoices"]),
            owned("trigger", &["trigger.users_audit", "trigger.ghost_audit"]),
            owned("view", &["view.active_users"]),
            owned("enum", &["enum.status"]),
        ]
    );
}

#[test]
fn test_relationship_strategy_groups() {
    let doc = parse_fixture();

    assert_eq!(
        group_addresses(&doc, Strategy::Relationship),
        vec![
            owned("schema_public/schema", &["schema.public"]),
            owned("schema_billing/schema", &["schema.billing"]),
            owned(
                "schema_public/tables/users",
                &["table.users", "trigger.users_audit"]
            ),
            owned("schema_billing/tables/invoices", &["table.invoices"]),
            owned("schema_public/views/active_users", &["view.active_users"]),
            owned("main", &["enum.status"]),
        ]
    );
}

#[test]
fn test_scope_and_type_strategies_are_total() {
    let doc = parse_fixture();

    for strategy in [Strategy::Scope, Strategy::Type] {
        let groups = split_document(&doc, strategy);
        assert_eq!(groups.block_count(), doc.blocks().len(), "{strategy}");
        for block in doc.blocks() {
            let owners = groups
                .iter()
                .filter(|g| g.blocks.iter().any(|b| std::ptr::eq(*b, block)))
                .count();
            assert_eq!(owners, 1, "{strategy}: {}", block.kind);
        }
    }
}

#[test]
fn test_written_files_preserve_expressions() {
    let temp_dir = tempdir().unwrap();
    let doc = parse_fixture();
    let groups = split_document(&doc, Strategy::Scope);

    write_groups(&doc, &groups, temp_dir.path(), "hcl").unwrap();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("schema_billing.hcl")).unwrap(),
        r#"schema "billing" {
}

table "invoices" {
  schema = schema.billing
  column "id" {
    type = bigint
  }
  column "user_id" {
    type = bigint
  }
  foreign_key "fk_user" {
    columns     = [column.user_id]
    ref_columns = [table.users.column.id]
    on_delete   = CASCADE
  }
}
"#
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("main.hcl")).unwrap(),
        r#"trigger "users_audit" {
  on    = table.users
  after = ["INSERT", "UPDATE"]
}

trigger "ghost_audit" {
  on = table.ghost
}

enum "status" {
  values = ["active", "inactive"]
}
"#
    );

    let public = fs::read_to_string(temp_dir.path().join("schema_public.hcl")).unwrap();
    assert!(public.contains("    type = varchar(255)\n"));
    assert!(public.contains("SELECT * FROM users WHERE active"));
}

#[test]
fn test_written_files_reparse() {
    let temp_dir = tempdir().unwrap();
    let doc = parse_fixture();
    let groups = split_document(&doc, Strategy::Relationship);

    let paths = write_groups(&doc, &groups, temp_dir.path(), "hcl").unwrap();

    let mut total = 0;
    for path in paths {
        let content = fs::read_to_string(&path).unwrap();
        let reparsed = Document::parse(content, path.display().to_string())
            .unwrap_or_else(|e| panic!("{} should parse: {e}", path.display()));
        total += reparsed.blocks().len();
    }
    // Everything but the dangling trigger
    assert_eq!(total, doc.blocks().len() - 1);
}

#[test]
fn test_cli_split_file() {
    let temp_dir = tempdir().unwrap();

    Command::cargo_bin("splt")
        .unwrap()
        .arg("-i")
        .arg(fixture_path("schema.hcl"))
        .arg("-o")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    assert!(temp_dir.path().join("schema_public.hcl").is_file());
    assert!(temp_dir.path().join("schema_billing.hcl").is_file());
    assert!(temp_dir.path().join("main.hcl").is_file());
}

#[test]
fn test_cli_split_stdin_resource() {
    let temp_dir = tempdir().unwrap();

    Command::cargo_bin("splt")
        .unwrap()
        .arg("-o")
        .arg(temp_dir.path())
        .arg("--strategy")
        .arg("resource")
        .arg("--extension")
        .arg("pg.hcl")
        .write_stdin(load_fixture("schema.hcl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid file extension"));

    Command::cargo_bin("splt")
        .unwrap()
        .arg("-o")
        .arg(temp_dir.path())
        .arg("--strategy")
        .arg("resource")
        .write_stdin(load_fixture("schema.hcl"))
        .assert()
        .success();

    let users = fs::read_to_string(temp_dir.path().join("schema_public/tables/users.hcl")).unwrap();
    assert!(users.starts_with("table \"users\" {\n"));
    assert!(users.contains("trigger \"users_audit\" {\n  on    = table.users\n"));

    let main = fs::read_to_string(temp_dir.path().join("main.hcl")).unwrap();
    assert_eq!(main, "enum \"status\" {\n  values = [\"active\", \"inactive\"]\n}\n");
}

#[test]
fn test_cli_dry_run_json() {
    let temp_dir = tempdir().unwrap();

    let output = Command::cargo_bin("splt")
        .unwrap()
        .arg("-i")
        .arg(fixture_path("schema.hcl"))
        .arg("-o")
        .arg(temp_dir.path())
        .arg("--strategy")
        .arg("block")
        .arg("--dry-run")
        .arg("--json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["strategy"], "block");
    assert_eq!(plan["files"].as_array().unwrap().len(), 5);
    assert_eq!(plan["files"][0]["key"], "schema");

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_cli_unknown_strategy() {
    let temp_dir = tempdir().unwrap();

    Command::cargo_bin("splt")
        .unwrap()
        .arg("-i")
        .arg(fixture_path("schema.hcl"))
        .arg("-o")
        .arg(temp_dir.path())
        .arg("--strategy")
        .arg("columns")
        .assert()
        .failure();

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_cli_missing_output_dir() {
    let temp_dir = tempdir().unwrap();

    Command::cargo_bin("splt")
        .unwrap()
        .arg("-i")
        .arg(fixture_path("schema.hcl"))
        .arg("-o")
        .arg(temp_dir.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Output directory does not exist"));
}

#[test]
fn test_cli_parse_error() {
    let temp_dir = tempdir().unwrap();

    Command::cargo_bin("splt")
        .unwrap()
        .arg("-o")
        .arg(temp_dir.path())
        .write_stdin("table \"users\" {\n  schema = \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse stdin.hcl"));

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_cli_empty_stdin() {
    let temp_dir = tempdir().unwrap();

    Command::cargo_bin("splt")
        .unwrap()
        .arg("-o")
        .arg(temp_dir.path())
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input provided"));
}
