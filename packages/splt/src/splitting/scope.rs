//! Group-by-schema strategy.

use super::strategy::SplitStrategy;
use super::types::OutputGroups;
use crate::address::canonical_address;
use crate::config::{schema_key, SCHEMA_BLOCK, UNSCOPED_KEY};
use crate::document::Document;
use crate::schema::{declared_schema, detect_schema};

/// One output file per schema.
///
/// Each `schema` block opens its own group as the first member. Every other
/// block joins the group named by its `schema = schema.<name>` attribute;
/// groups are created on demand even without a matching `schema` block.
/// Blocks without a schema reference go to `main`, written last and only if
/// non-empty.
pub struct ScopeStrategy;

impl SplitStrategy for ScopeStrategy {
    fn split<'a>(&self, document: &'a Document) -> OutputGroups<'a> {
        let mut groups = OutputGroups::new();
        let mut unscoped = Vec::new();

        for block in document.blocks().iter().filter(|b| b.kind == SCHEMA_BLOCK) {
            match declared_schema(block) {
                Some(name) => groups.push(schema_key(name), block),
                None => {
                    tracing::warn!("schema block without a label, writing it to {UNSCOPED_KEY}");
                    unscoped.push(block);
                }
            }
        }

        for block in document.blocks().iter().filter(|b| b.kind != SCHEMA_BLOCK) {
            match detect_schema(block) {
                Some(name) => groups.push(schema_key(name), block),
                None => {
                    tracing::debug!(
                        address = %canonical_address(block),
                        "No schema reference, routing to unscoped bucket"
                    );
                    unscoped.push(block);
                }
            }
        }

        groups.extend(UNSCOPED_KEY, unscoped);
        groups
    }
}
