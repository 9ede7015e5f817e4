pub mod discovery;
pub mod error;
pub mod loader;

pub use discovery::{file_identifier, list_xml_files};
pub use error::{IngestError, Result};
pub use loader::{load_documents, load_folder};
