//! Schema detection for blocks that declare `schema = schema.<name>`.

use crate::address::reference_segments;
use crate::config::{SCHEMA_ATTRIBUTE, SCHEMA_BLOCK};
use crate::document::Block;

/// Name of the schema a block declares itself part of.
///
/// Only the first attribute named `schema` is consulted, and only the exact
/// shape `schema.<name>` matches. Any other expression, even one that would
/// evaluate to the same schema, means "no schema".
///
/// # Examples
/// ```
/// use splt::document::Document;
/// use splt::schema::detect_schema;
///
/// let doc = Document::parse("table \"t\" {\n  schema = schema.public\n}\n", "t.hcl").unwrap();
/// assert_eq!(detect_schema(&doc.blocks()[0]), Some("public"));
/// ```
#[must_use]
pub fn detect_schema(block: &Block) -> Option<&str> {
    match reference_segments(block, SCHEMA_ATTRIBUTE)? {
        (SCHEMA_BLOCK, name) => Some(name),
        _ => None,
    }
}

/// Name a `schema` block declares, i.e. its first label.
#[must_use]
pub fn declared_schema(block: &Block) -> Option<&str> {
    if block.kind != SCHEMA_BLOCK {
        return None;
    }
    block.labels.first().map(String::as_str)
}
