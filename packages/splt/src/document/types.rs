//! Read-only block tree produced from a parsed HCL body.

use std::ops::Range;

/// Syntactic shape of an attribute expression.
///
/// Only the shape needed for routing is kept. The splitter never evaluates
/// expressions, so everything that is not a plain dotted reference collapses
/// into [`Expression::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// A variable followed only by attribute accesses, e.g. `schema.public`
    /// as `["schema", "public"]`. A bare variable has a single segment.
    Reference(Vec<String>),

    /// Literals, function calls, operators, index or splat traversals, ...
    Other,
}

impl Expression {
    /// Build a reference expression from its segments.
    #[must_use]
    pub fn reference(segments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::Reference(segments.into_iter().map(Into::into).collect())
    }

    /// Segments of a plain dotted reference.
    #[must_use]
    pub fn segments(&self) -> Option<&[String]> {
        match self {
            Self::Reference(segments) => Some(segments),
            Self::Other => None,
        }
    }
}

/// A single `name = expression` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,

    /// Byte offset of the attribute name in the source.
    ///
    /// Used to emit attributes in source order regardless of how they were
    /// collected.
    pub offset: usize,

    /// Byte range of the expression in the source.
    pub span: Range<usize>,

    /// Shape of the expression.
    pub expression: Expression,
}

impl Attribute {
    /// Create a new attribute.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        offset: usize,
        span: Range<usize>,
        expression: Expression,
    ) -> Self {
        Self {
            name: name.into(),
            offset,
            span,
            expression,
        }
    }

    /// The exact source text of the expression.
    ///
    /// Returns an empty string if the span does not fall inside `source`,
    /// which only happens when the attribute belongs to a different document.
    #[must_use]
    pub fn raw<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.clone()).unwrap_or_default()
    }
}

/// A typed, labeled block with attributes and nested blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Block type, e.g. `schema`, `table`, `trigger`.
    pub kind: String,

    /// Block labels in declared order.
    pub labels: Vec<String>,

    /// Attributes in declared order.
    pub attributes: Vec<Attribute>,

    /// Nested blocks in declared order.
    pub children: Vec<Block>,
}

impl Block {
    /// Create an empty block of the given type.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            labels: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the labels.
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Append an attribute.
    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Append a nested block.
    #[must_use]
    pub fn with_child(mut self, child: Block) -> Self {
        self.children.push(child);
        self
    }

    /// First attribute with the given name, in declared order.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// The last label, if any.
    #[must_use]
    pub fn last_label(&self) -> Option<&str> {
        self.labels.last().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_builder() {
        let block = Block::new("table")
            .with_labels(["public", "users"])
            .with_attribute(Attribute::new(
                "schema",
                10,
                19..32,
                Expression::reference(["schema", "public"]),
            ))
            .with_child(Block::new("column").with_labels(["id"]));

        assert_eq!(block.kind, "table");
        assert_eq!(block.labels, vec!["public", "users"]);
        assert_eq!(block.last_label(), Some("users"));
        assert_eq!(block.children.len(), 1);
        assert!(block.attribute("schema").is_some());
        assert!(block.attribute("comment").is_none());
    }

    #[test]
    fn test_attribute_lookup_first_wins() {
        let block = Block::new("table")
            .with_attribute(Attribute::new("schema", 0, 0..1, Expression::Other))
            .with_attribute(Attribute::new(
                "schema",
                5,
                5..6,
                Expression::reference(["schema", "x"]),
            ));

        let attr = block.attribute("schema").unwrap();
        assert_eq!(attr.offset, 0);
        assert_eq!(attr.expression, Expression::Other);
    }

    #[test]
    fn test_attribute_raw() {
        let source = "x = upper(\"a\")";
        let attr = Attribute::new("x", 0, 4..14, Expression::Other);
        assert_eq!(attr.raw(source), "upper(\"a\")");

        let out_of_range = Attribute::new("x", 0, 4..99, Expression::Other);
        assert_eq!(out_of_range.raw(source), "");
    }

    #[test]
    fn test_expression_segments() {
        let expr = Expression::reference(["schema", "public"]);
        assert_eq!(
            expr.segments(),
            Some(&["schema".to_string(), "public".to_string()][..])
        );
        assert_eq!(Expression::Other.segments(), None);
    }
}
