pub mod document;
pub mod error;
pub mod legend;
pub mod report;
pub mod segment;

pub use document::{DocumentContent, DocumentSet, SourceDocument};
pub use error::{LegendError, ResolveError};
pub use legend::{Column, FILE_NAME_HEADER, Legend};
pub use report::{ERROR_SENTINEL, Report, Row};
pub use segment::{PathSegment, QualifiedName, format_path};
