//! Main splitter service that ties all components together.

use std::fs;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::address::canonical_address;
use crate::config::STDIN_ORIGIN;
use crate::document::Document;
use crate::error::{Result, SplitError};
use crate::splitting::{OutputGroups, Strategy};
use crate::writer::{ensure_parent_dir, output_path, render_blocks, save_file};

/// One file the splitter will write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    /// Output key (relative path without extension).
    pub key: String,

    /// Full output path.
    pub path: PathBuf,

    /// Canonical addresses of the blocks in the file, in order.
    pub blocks: Vec<String>,
}

/// The files a strategy produces for a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitPlan {
    /// Where the document was read from.
    pub origin: String,

    /// Strategy used.
    pub strategy: Strategy,

    /// Planned files in emission order.
    pub files: Vec<PlannedFile>,
}

impl SplitPlan {
    /// Build the plan for a set of output groups.
    #[must_use]
    pub fn new(
        document: &Document,
        strategy: Strategy,
        groups: &OutputGroups<'_>,
        output_dir: &Path,
        extension: &str,
    ) -> Self {
        let files = groups
            .iter()
            .map(|group| PlannedFile {
                key: group.key.clone(),
                path: output_path(output_dir, &group.key, extension),
                blocks: group.blocks.iter().map(|b| canonical_address(b)).collect(),
            })
            .collect();

        Self {
            origin: document.origin().to_string(),
            strategy,
            files,
        }
    }
}

/// Read the input document from a file.
///
/// # Returns
/// `(source, origin)` where origin is the path as given
pub fn read_input_file(path: &Path) -> Result<(String, String)> {
    let source = fs::read_to_string(path).map_err(|source| SplitError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((source, path.display().to_string()))
}

/// Read the input document from stdin.
///
/// Fails when stdin is a terminal, since nothing was piped in.
pub fn read_input_stdin() -> Result<(String, String)> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(SplitError::NoInput);
    }
    read_input_from(stdin.lock())
}

/// Read the input document from any reader, with `stdin.hcl` as origin.
pub fn read_input_from(mut reader: impl Read) -> Result<(String, String)> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    if source.is_empty() {
        return Err(SplitError::EmptyInput);
    }
    Ok((source, STDIN_ORIGIN.to_string()))
}

/// Check that the output location exists and is a directory.
pub fn validate_output_dir(output_dir: &Path) -> Result<()> {
    if !output_dir.exists() {
        return Err(SplitError::MissingOutputDir(output_dir.to_path_buf()));
    }
    if !output_dir.is_dir() {
        return Err(SplitError::NotADirectory(output_dir.to_path_buf()));
    }
    Ok(())
}

/// Partition a document with the given strategy.
#[must_use]
pub fn split_document(document: &Document, strategy: Strategy) -> OutputGroups<'_> {
    let groups = strategy.split(document);
    tracing::debug!(
        origin = %document.origin(),
        %strategy,
        files = groups.len(),
        placed = groups.block_count(),
        total = document.blocks().len(),
        "Split document"
    );
    groups
}

/// Write every group to its own file below `output_dir`.
///
/// All directories are created before the first file is written.
///
/// # Returns
/// Paths of the written files, in group order
pub fn write_groups(
    document: &Document,
    groups: &OutputGroups<'_>,
    output_dir: &Path,
    extension: &str,
) -> Result<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = groups
        .keys()
        .map(|key| output_path(output_dir, key, extension))
        .collect();

    for path in &paths {
        ensure_parent_dir(path)?;
    }

    for (group, path) in groups.iter().zip(&paths) {
        let content = render_blocks(&group.blocks, document.source());
        save_file(path, &content)?;
    }

    Ok(paths)
}
