//! Group-by-block-type strategy.

use super::strategy::SplitStrategy;
use super::types::OutputGroups;
use crate::config::sanitize_path_segment;
use crate::document::Document;

/// One output file per block type, in first-seen order.
///
/// No references are resolved and every block is routed.
pub struct TypeStrategy;

impl SplitStrategy for TypeStrategy {
    fn split<'a>(&self, document: &'a Document) -> OutputGroups<'a> {
        let mut groups = OutputGroups::new();
        for block in document.blocks() {
            groups.push(sanitize_path_segment(&block.kind), block);
        }
        groups
    }
}
