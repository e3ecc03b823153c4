//! Splitting strategies.
//!
//! Each strategy maps the top-level blocks of a [`Document`](crate::document::Document)
//! to output keys. Keys are relative paths without an extension; the
//! orchestrator appends the extension and writes the files.

mod by_type;
mod relationship;
mod scope;
mod strategy;
mod types;

pub use by_type::TypeStrategy;
pub use relationship::RelationshipStrategy;
pub use scope::ScopeStrategy;
pub use strategy::{SplitStrategy, Strategy};
pub use types::{OutputGroup, OutputGroups};
