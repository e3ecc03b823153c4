//! Rebuild HCL text from a set of blocks.

use crate::document::{Attribute, Block};

const INDENT: &str = "  ";

/// Render blocks as an HCL document.
///
/// Attribute values are copied from `source` byte-for-byte; only the
/// surrounding layout (indentation, `=` alignment, blank lines between
/// top-level blocks) is produced here. Attributes are emitted in source
/// order, by the offset of their name, no matter how they are stored.
#[must_use]
pub fn render_blocks(blocks: &[&Block], source: &str) -> String {
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_block(&mut out, block, source, 0);
    }
    out
}

fn write_block(out: &mut String, block: &Block, source: &str, depth: usize) {
    let indent = INDENT.repeat(depth);

    out.push_str(&indent);
    out.push_str(&block.kind);
    for label in &block.labels {
        out.push_str(" \"");
        out.push_str(&escape_label(label));
        out.push('"');
    }
    out.push_str(" {\n");

    let mut attributes: Vec<&Attribute> = block.attributes.iter().collect();
    attributes.sort_by_key(|attr| attr.offset);
    for run in aligned_runs(&attributes, source) {
        let width = run.iter().map(|attr| attr.name.len()).max().unwrap_or(0);
        for attr in run {
            out.push_str(&indent);
            out.push_str(INDENT);
            out.push_str(&format!("{:<width$} = ", attr.name));
            let raw = attr.raw(source);
            out.push_str(raw);
            // Heredoc spans may already include the closing line break.
            if !raw.ends_with('\n') {
                out.push('\n');
            }
        }
    }

    for child in &block.children {
        write_block(out, child, source, depth + 1);
    }

    out.push_str(&indent);
    out.push_str("}\n");
}

/// Split attributes into runs whose `=` signs are aligned.
///
/// A multi-line value ends the run it belongs to, so alignment never
/// reaches across it.
fn aligned_runs<'b>(attributes: &[&'b Attribute], source: &str) -> Vec<Vec<&'b Attribute>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for &attr in attributes {
        current.push(attr);
        if attr.raw(source).contains('\n') {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Quote-escape a label for re-emission as an HCL string.
fn escape_label(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    let mut chars = label.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '$' | '%' if chars.peek() == Some(&'{') => {
                escaped.push(c);
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}
