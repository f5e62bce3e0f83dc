pub mod destinations;
pub mod loader;
pub mod writer;

// Re-export I/O entry points for convenient access
pub use destinations::{
    destination_for, FileDestination, MemoryDestination, OutputDestination, StdoutDestination,
};
pub use loader::{parse_pairs, read_sample};
pub use writer::{format_text_line, render, write_report, OutputFormat};

use std::path::Path;

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
