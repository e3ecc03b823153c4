//! Output groups produced by the splitting strategies.

use std::collections::HashMap;

use crate::document::Block;

/// Blocks destined for one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputGroup<'a> {
    /// Output key: a relative path without extension, `/` separated.
    pub key: String,

    /// Top-level blocks in emission order.
    pub blocks: Vec<&'a Block>,
}

/// Insertion-ordered mapping from output key to blocks.
///
/// Groups borrow their blocks from the [`Document`](crate::document::Document)
/// they were split from; nothing is copied.
#[derive(Debug, Default)]
pub struct OutputGroups<'a> {
    groups: Vec<OutputGroup<'a>>,
    index: HashMap<String, usize>,
}

impl<'a> OutputGroups<'a> {
    /// Create an empty set of groups.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block to a group, creating the group if needed.
    pub fn push(&mut self, key: impl Into<String>, block: &'a Block) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&position) => self.groups[position].blocks.push(block),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push(OutputGroup {
                    key,
                    blocks: vec![block],
                });
            }
        }
    }

    /// Append several blocks to a group.
    ///
    /// The group is only created when there is at least one block, so empty
    /// buckets never produce an output file.
    pub fn extend(&mut self, key: &str, blocks: impl IntoIterator<Item = &'a Block>) {
        for block in blocks {
            self.push(key, block);
        }
    }

    /// Blocks of a group.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[&'a Block]> {
        self.index
            .get(key)
            .map(|&position| self.groups[position].blocks.as_slice())
    }

    /// Check if a group exists.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Output keys in creation order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.key.as_str())
    }

    /// Groups in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, OutputGroup<'a>> {
        self.groups.iter()
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of block placements across all groups.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.groups.iter().map(|group| group.blocks.len()).sum()
    }
}

impl<'a> IntoIterator for OutputGroups<'a> {
    type Item = OutputGroup<'a>;
    type IntoIter = std::vec::IntoIter<OutputGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'g, 'a> IntoIterator for &'g OutputGroups<'a> {
    type Item = &'g OutputGroup<'a>;
    type IntoIter = std::slice::Iter<'g, OutputGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
