//! Reserved vocabulary, naming constants and validation functions.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, SplitError};

/// Block type declaring a schema (group). Its single label is the group name.
pub const SCHEMA_BLOCK: &str = "schema";

/// Attribute through which a block declares its schema (`schema = schema.<name>`).
pub const SCHEMA_ATTRIBUTE: &str = "schema";

/// Block type that other blocks can reference by canonical address.
pub const ADDRESSABLE_BLOCK: &str = "table";

/// Block type that is routed through the block it references.
pub const LINKING_BLOCK: &str = "trigger";

/// Attribute on a linking block naming the address of its target.
pub const LINK_ATTRIBUTE: &str = "on";

/// Output key for blocks that could not be routed to a schema.
pub const UNSCOPED_KEY: &str = "main";

/// Prefix of every per-schema output key.
pub const SCHEMA_KEY_PREFIX: &str = "schema_";

/// Default extension appended to every output key.
pub const DEFAULT_EXTENSION: &str = "hcl";

/// Origin name used in diagnostics when reading from stdin.
pub const STDIN_ORIGIN: &str = "stdin.hcl";

/// Extension pattern: no separators, no dots beyond an optional leading one.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static EXTENSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.?([A-Za-z0-9_-]+)$").expect("valid regex"));

/// Characters that may not appear in a single output path segment.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static UNSAFE_SEGMENT_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("valid regex"));

/// Validate an output file extension and return it without a leading dot.
///
/// # Examples
/// ```
/// use splt::config::validate_extension;
///
/// assert_eq!(validate_extension("hcl").unwrap(), "hcl");
/// assert_eq!(validate_extension(".tf").unwrap(), "tf");
/// assert!(validate_extension("../hcl").is_err());
/// ```
pub fn validate_extension(extension: &str) -> Result<String> {
    EXTENSION_PATTERN
        .captures(extension)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| SplitError::InvalidExtension(extension.to_string()))
}

/// Turn a block label or group name into a single safe path segment.
///
/// Labels come straight from the input document, so anything that could
/// introduce a separator or climb out of the output directory is replaced.
///
/// # Examples
/// ```
/// use splt::config::sanitize_path_segment;
///
/// assert_eq!(sanitize_path_segment("users"), "users");
/// assert_eq!(sanitize_path_segment("a/b"), "a_b");
/// assert_eq!(sanitize_path_segment(".."), "_");
/// ```
pub fn sanitize_path_segment(segment: &str) -> String {
    let cleaned = UNSAFE_SEGMENT_CHARS.replace_all(segment, "_");
    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        return "_".to_string();
    }
    cleaned.into_owned()
}

/// Output key of a schema group in the scope strategy.
#[must_use]
pub fn schema_key(name: &str) -> String {
    format!("{SCHEMA_KEY_PREFIX}{}", sanitize_path_segment(name))
}

/// Naive pluralization used for per-type directories (`table` -> `tables`).
#[must_use]
pub fn pluralize(kind: &str) -> String {
    format!("{kind}s")
}
