pub mod loader;

pub use loader::{read_document, write_output, STDOUT_PATH};
