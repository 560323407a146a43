/// Filesystem adapters for persisting the inventory
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter, DEFAULT_OUTPUT_FILE};
