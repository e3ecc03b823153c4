//! Canonical block addresses and reference extraction.
//!
//! The router never evaluates expressions. A reference only resolves when the
//! attribute is a plain dotted traversal; literals, calls, index and splat
//! traversals and arithmetic are treated as "no reference".

use crate::document::Block;

/// Canonical address of a block: its type followed by its labels, joined
/// with dots (`table.public.users`). A block without labels is addressed by
/// its type alone.
///
/// # Examples
/// ```
/// use splt::address::canonical_address;
/// use splt::document::Block;
///
/// let block = Block::new("table").with_labels(["users"]);
/// assert_eq!(canonical_address(&block), "table.users");
/// ```
#[must_use]
pub fn canonical_address(block: &Block) -> String {
    std::iter::once(block.kind.as_str())
        .chain(block.labels.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(".")
}

/// Split a two-segment reference (`prefix.identifier`) held by the named
/// attribute.
///
/// Returns `None` if the attribute is missing or its expression is anything
/// other than exactly two dotted segments.
#[must_use]
pub fn reference_segments<'a>(block: &'a Block, attribute: &str) -> Option<(&'a str, &'a str)> {
    match block.attribute(attribute)?.expression.segments()? {
        [prefix, identifier] => Some((prefix.as_str(), identifier.as_str())),
        _ => None,
    }
}

/// Whole target address of a reference attribute such as `on = table.users`.
///
/// Unlike [`reference_segments`] the reference is not decomposed: any plain
/// dotted reference with at least two segments is returned as written, so it
/// can point at multi-label addresses (`table.public.users`).
#[must_use]
pub fn reference_target(block: &Block, attribute: &str) -> Option<String> {
    let segments = block.attribute(attribute)?.expression.segments()?;
    if segments.len() < 2 {
        return None;
    }
    Some(segments.join("."))
}

/// File stem of a block: the last dot-separated part of its last label.
///
/// Handles schema-qualified labels (`"public.users"` becomes `users`) the
/// same way as multi-label blocks (`"public" "users"`).
#[must_use]
pub fn block_stem(block: &Block) -> Option<&str> {
    block
        .last_label()
        .and_then(|label| label.rsplit('.').next())
        .filter(|stem| !stem.is_empty())
}
