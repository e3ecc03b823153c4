//! Strategy selection.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::by_type::TypeStrategy;
use super::relationship::RelationshipStrategy;
use super::scope::ScopeStrategy;
use super::types::OutputGroups;
use crate::document::Document;
use crate::error::SplitError;

/// Trait for splitting strategies.
///
/// Implementations decide, for every top-level block, which output key it is
/// written to. They never modify block content.
pub trait SplitStrategy {
    /// Partition the document's top-level blocks into output groups.
    fn split<'a>(&self, document: &'a Document) -> OutputGroups<'a>;
}

/// The closed set of splitting strategies.
///
/// Command-line names follow the original tool (`schema`, `block`,
/// `resource`); the descriptive names are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
pub enum Strategy {
    /// One file per schema, plus `main` for everything unscoped.
    #[default]
    #[serde(rename = "schema")]
    #[value(name = "schema", alias = "scope")]
    Scope,

    /// One file per block type.
    #[serde(rename = "block")]
    #[value(name = "block", alias = "type")]
    Type,

    /// A directory per schema with one file per resource; triggers follow
    /// the table they are defined on.
    #[serde(rename = "resource")]
    #[value(name = "resource", alias = "relationship")]
    Relationship,
}

impl Strategy {
    /// All strategies.
    pub const ALL: [Strategy; 3] = [Self::Scope, Self::Type, Self::Relationship];

    /// Command-line name of the strategy.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scope => "schema",
            Self::Type => "block",
            Self::Relationship => "resource",
        }
    }

    /// Run the strategy on a document.
    #[must_use]
    pub fn split<'a>(&self, document: &'a Document) -> OutputGroups<'a> {
        match self {
            Self::Scope => ScopeStrategy.split(document),
            Self::Type => TypeStrategy.split(document),
            Self::Relationship => RelationshipStrategy.split(document),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "schema" | "scope" => Ok(Self::Scope),
            "block" | "type" => Ok(Self::Type),
            "resource" | "relationship" => Ok(Self::Relationship),
            other => Err(SplitError::UnknownStrategy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("schema".parse::<Strategy>().unwrap(), Strategy::Scope);
        assert_eq!("scope".parse::<Strategy>().unwrap(), Strategy::Scope);
        assert_eq!("block".parse::<Strategy>().unwrap(), Strategy::Type);
        assert_eq!("type".parse::<Strategy>().unwrap(), Strategy::Type);
        assert_eq!(
            "resource".parse::<Strategy>().unwrap(),
            Strategy::Relationship
        );
        assert_eq!(
            "relationship".parse::<Strategy>().unwrap(),
            Strategy::Relationship
        );
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "Schema".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, SplitError::UnknownStrategy(name) if name == "Schema"));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn test_default_is_scope() {
        assert_eq!(Strategy::default(), Strategy::Scope);
    }

    #[test]
    fn test_dispatch() {
        let doc = Document::parse(
            "schema \"a\" {\n}\ntable \"t\" {\n  schema = schema.a\n}\n",
            "t.hcl",
        )
        .unwrap();

        let keys = |strategy: Strategy| {
            strategy
                .split(&doc)
                .keys()
                .map(String::from)
                .collect::<Vec<_>>()
        };
        assert_eq!(keys(Strategy::Scope), vec!["schema_a"]);
        assert_eq!(keys(Strategy::Type), vec!["schema", "table"]);
        assert_eq!(
            keys(Strategy::Relationship),
            vec!["schema_a/schema", "schema_a/tables/t"]
        );
    }
}
