//! Path segments addressed by legend tokens.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One step of a column path.
///
/// Produced from a single legend token such as `:Person<2>`. The
/// occurrence index is already zero-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSegment {
    /// Element local name to match.
    pub name: String,
    /// Whether the run's document namespace qualifies the name.
    pub has_namespace: bool,
    /// Zero-based rank among equally named siblings.
    pub occurrence_index: usize,
    /// Legend text the segment was parsed from.
    pub raw_token: String,
}

impl PathSegment {
    /// Segment matching a bare element name at its first occurrence.
    pub fn plain(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            raw_token: name.clone(),
            name,
            has_namespace: false,
            occurrence_index: 0,
        }
    }

    /// Name this segment matches when documents use `namespace`.
    pub fn qualified_name<'a>(&'a self, namespace: &'a str) -> QualifiedName<'a> {
        QualifiedName {
            namespace: self.has_namespace.then_some(namespace),
            local: &self.name,
        }
    }
}

/// Expanded element name: optional namespace URI plus local name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifiedName<'a> {
    pub namespace: Option<&'a str>,
    pub local: &'a str,
}

impl QualifiedName<'_> {
    /// True when an element with this namespace and local name matches.
    ///
    /// An unqualified name only matches elements outside any namespace.
    pub fn matches(&self, namespace: Option<&str>, local: &str) -> bool {
        self.local == local && self.namespace == namespace
    }
}

impl fmt::Display for QualifiedName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.namespace {
            Some(namespace) => write!(f, "{{{namespace}}}{}", self.local),
            None => f.write_str(self.local),
        }
    }
}

/// Render a path the way it was written in the legend.
pub fn format_path(path: &[PathSegment]) -> String {
    path.iter()
        .map(|segment| segment.raw_token.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
