use std::path::PathBuf;

use thiserror::Error;

/// A legend that cannot be used for a run.
///
/// Every variant is fatal: a run never proceeds with a partially loaded
/// legend.
#[derive(Debug, Error)]
pub enum LegendError {
    #[error("failed to read legend file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("token `{token}` ends with `>` but has no `<`")]
    MissingIndexOpen { token: String },

    #[error("token `{token}` has an invalid occurrence index `{literal}`")]
    InvalidIndex { token: String, literal: String },

    #[error("token `{token}` uses occurrence index 0; indexes start at 1")]
    ZeroIndex { token: String },

    #[error("legend line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<LegendError>,
    },
}

impl LegendError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn at_line(self, line: usize) -> Self {
        Self::Line {
            line,
            source: Box::new(self),
        }
    }
}

/// Failure to resolve one column path against one document.
///
/// Scoped to a single (document, column) pair and recovered by the row
/// builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("column has no path segments")]
    EmptyPath,

    #[error("no element named {name} in document")]
    ElementNotFound { name: String },

    #[error("element {name} occurrence {} requested but only {available} found", .index + 1)]
    IndexOutOfRange {
        name: String,
        index: usize,
        available: usize,
    },
}
