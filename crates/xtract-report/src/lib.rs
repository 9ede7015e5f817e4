//! Report output.
//!
//! - **CSV**: one header line, then one line per input document
//! - **Output naming**: defaulting and `.csv` suffixing of user-supplied names

mod csv_output;
mod naming;

pub use csv_output::{QuoteMode, write_report, write_report_file};
pub use naming::{DEFAULT_OUTPUT_FILE_NAME, output_file_name};
