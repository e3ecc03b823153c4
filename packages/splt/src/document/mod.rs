//! Source model for a parsed HCL document.
//!
//! Parsing is delegated to `hcl-edit`, which keeps byte spans for every
//! node. The tree is converted once into the small [`Block`] model the
//! strategies and the writer work on; the original source is kept alongside
//! so expressions can be re-emitted verbatim.

mod types;

use hcl_edit::expr::{Expression as HclExpression, TraversalOperator};
use hcl_edit::structure::{
    Attribute as HclAttribute, Block as HclBlock, BlockLabel, Body, Structure,
};
use hcl_edit::Span;

use crate::error::{Result, SplitError};

pub use types::{Attribute, Block, Expression};

/// A parsed document: its original source and top-level blocks.
///
/// Top-level attributes are not part of any output file and are ignored.
#[derive(Debug, Clone)]
pub struct Document {
    origin: String,
    source: String,
    blocks: Vec<Block>,
}

impl Document {
    /// Parse an HCL document.
    ///
    /// `origin` is only used in diagnostics (a file path or `stdin.hcl`).
    pub fn parse(source: impl Into<String>, origin: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let origin = origin.into();

        let body: Body = hcl_edit::parser::parse_body(&source).map_err(|e| SplitError::Parse {
            origin: origin.clone(),
            message: e.to_string(),
        })?;

        let blocks = convert_blocks(&body, &origin)?;
        tracing::debug!(origin = %origin, blocks = blocks.len(), "Parsed document");

        Ok(Self {
            origin,
            source,
            blocks,
        })
    }

    /// Build a document from an already converted block tree.
    ///
    /// Attribute spans in `blocks` must point into `source`.
    #[must_use]
    pub fn from_parts(
        source: impl Into<String>,
        origin: impl Into<String>,
        blocks: Vec<Block>,
    ) -> Self {
        Self {
            origin: origin.into(),
            source: source.into(),
            blocks,
        }
    }

    /// Where the document was read from.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The full original source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Top-level blocks in declared order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

fn convert_blocks(body: &Body, origin: &str) -> Result<Vec<Block>> {
    body.iter()
        .filter_map(|structure| match structure {
            Structure::Block(block) => Some(convert_block(block, origin)),
            Structure::Attribute(_) => None,
        })
        .collect()
}

fn convert_block(block: &HclBlock, origin: &str) -> Result<Block> {
    let labels = block
        .labels
        .iter()
        .map(|label| match label {
            BlockLabel::Ident(ident) => ident.as_str().to_string(),
            BlockLabel::String(value) => value.as_str().to_string(),
        })
        .collect();

    let attributes = block
        .body
        .iter()
        .filter_map(|structure| match structure {
            Structure::Attribute(attr) => Some(convert_attribute(attr, origin)),
            Structure::Block(_) => None,
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Block {
        kind: block.ident.as_str().to_string(),
        labels,
        attributes,
        children: convert_blocks(&block.body, origin)?,
    })
}

fn convert_attribute(attr: &HclAttribute, origin: &str) -> Result<Attribute> {
    let name = attr.key.as_str();
    let span = attr.value.span().ok_or_else(|| SplitError::Parse {
        origin: origin.to_string(),
        message: format!("missing source span for attribute '{name}'"),
    })?;
    let offset = attr
        .key
        .span()
        .or_else(|| attr.span())
        .map_or(span.start, |range| range.start);

    Ok(Attribute::new(
        name,
        offset,
        span,
        classify_expression(&attr.value),
    ))
}

/// Reduce an expression to the shape the router cares about.
fn classify_expression(expr: &HclExpression) -> Expression {
    match expr {
        HclExpression::Variable(root) => Expression::reference([root.as_str()]),
        HclExpression::Traversal(traversal) => {
            let HclExpression::Variable(root) = &traversal.expr else {
                return Expression::Other;
            };
            let mut segments = vec![root.as_str().to_string()];
            for operator in &traversal.operators {
                match operator.value() {
                    TraversalOperator::GetAttr(ident) => {
                        segments.push(ident.as_str().to_string());
                    }
                    _ => return Expression::Other,
                }
            }
            Expression::Reference(segments)
        }
        _ => Expression::Other,
    }
}
