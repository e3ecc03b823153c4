//! splt - Split a single HCL document into multiple files.
//!
//! Top-level blocks are redistributed across output files by a selectable
//! strategy while every attribute expression is copied byte-for-byte from
//! the source.
//!
//! # Example
//!
//! ```
//! use splt::{split_document, Document, Strategy};
//!
//! let source = r#"
//! schema "billing" {
//! }
//! table "invoices" {
//!   schema = schema.billing
//! }
//! "#;
//! let doc = Document::parse(source, "schema.hcl").unwrap();
//! let groups = split_document(&doc, Strategy::Scope);
//! assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["schema_billing"]);
//! ```
//!
//! # Architecture
//!
//! - [`document`]: Parsed block tree with source spans
//! - [`address`]: Canonical addresses and reference extraction
//! - [`schema`]: Schema detection
//! - [`splitting`]: Splitting strategies
//! - [`writer`]: HCL output generation
//! - [`config`]: Reserved vocabulary and validation
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface
//! - [`splitter`]: Orchestration of read, split and write

pub mod address;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod schema;
pub mod splitter;
pub mod splitting;
pub mod writer;

// Re-export commonly used items
pub use document::{Block, Document};
pub use error::{Result, SplitError};
pub use splitter::{split_document, write_groups, SplitPlan};
pub use splitting::{OutputGroups, SplitStrategy, Strategy};
