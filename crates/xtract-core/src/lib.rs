//! Extraction engine: legend parsing, path resolution and report assembly.
//!
//! A legend line such as `Age :Person<1> Birth<2>` names an output column
//! and the path to its value. The first segment is looked up anywhere in
//! the document; every later segment selects among the direct children of
//! the previous match.

pub mod assemble;
pub mod legend;
pub mod resolve;
pub mod row;
pub mod token;

/// Namespace applied to `:`-prefixed segments when none is configured.
pub const DEFAULT_NAMESPACE: &str = "com/thomsonreuters/schemas/person-report";

pub use assemble::assemble;
pub use legend::{load_legend, load_legend_file, parse_legend};
pub use resolve::{locate, resolve, text_content};
pub use row::{build_row, failed_row};
pub use token::parse_token;
