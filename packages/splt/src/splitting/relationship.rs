//! Group-by-relationship strategy.
//!
//! Produces a directory per schema with one file per resource:
//!
//! ```text
//! schema_public/schema
//! schema_public/tables/users      table "users" + trigger "audit" (on = table.users)
//! schema_public/views/active
//! main                            everything without a schema
//! ```

use std::collections::HashMap;

use super::strategy::SplitStrategy;
use super::types::OutputGroups;
use crate::address::{block_stem, canonical_address, reference_target};
use crate::config::{
    pluralize, sanitize_path_segment, schema_key, ADDRESSABLE_BLOCK, LINKING_BLOCK,
    LINK_ATTRIBUTE, SCHEMA_BLOCK, UNSCOPED_KEY,
};
use crate::document::{Block, Document};
use crate::schema::{declared_schema, detect_schema};

/// One file per resource, nested under its schema directory.
///
/// Runs in three passes so every table is placed before any trigger that
/// references it, whatever the declaration order in the source:
///
/// 1. index schemas and tables, seed `schema_<name>/schema`;
/// 2. route every other block by its own schema reference, deferring
///    triggers;
/// 3. place each trigger in the file of the table named by its `on`
///    attribute. Triggers whose target is not in the document are dropped.
pub struct RelationshipStrategy;

impl SplitStrategy for RelationshipStrategy {
    fn split<'a>(&self, document: &'a Document) -> OutputGroups<'a> {
        let mut groups = OutputGroups::new();
        let mut unscoped = Vec::new();
        let mut addressable: HashMap<String, &'a Block> = HashMap::new();
        let mut linking = Vec::new();

        for block in document.blocks() {
            if block.kind == SCHEMA_BLOCK {
                match declared_schema(block) {
                    Some(name) => groups.push(format!("{}/schema", schema_key(name)), block),
                    None => {
                        tracing::warn!("schema block without a label, writing it to {UNSCOPED_KEY}");
                        unscoped.push(block);
                    }
                }
            } else if block.kind == ADDRESSABLE_BLOCK {
                addressable.entry(canonical_address(block)).or_insert(block);
            }
        }

        for block in document.blocks().iter().filter(|b| b.kind != SCHEMA_BLOCK) {
            if block.kind == LINKING_BLOCK {
                linking.push(block);
                continue;
            }
            match resource_key(block) {
                Some(key) => groups.push(key, block),
                None => {
                    tracing::debug!(
                        address = %canonical_address(block),
                        "No schema reference, routing to unscoped bucket"
                    );
                    unscoped.push(block);
                }
            }
        }

        for block in linking {
            let Some(target) = reference_target(block, LINK_ATTRIBUTE)
                .and_then(|address| addressable.get(&address).copied())
            else {
                tracing::debug!(
                    address = %canonical_address(block),
                    "Target of {LINK_ATTRIBUTE} not found in document, dropping block"
                );
                continue;
            };
            match resource_key(target) {
                Some(key) => groups.push(key, block),
                None => unscoped.push(block),
            }
        }

        groups.extend(UNSCOPED_KEY, unscoped);
        groups
    }
}

/// `schema_<schema>/<type>s/<stem>` for a block with a schema reference.
fn resource_key(block: &Block) -> Option<String> {
    let schema = detect_schema(block)?;
    let stem = block_stem(block)?;
    Some(format!(
        "{}/{}/{}",
        schema_key(schema),
        sanitize_path_segment(&pluralize(&block.kind)),
        sanitize_path_segment(stem)
    ))
}
