//! Output destinations for rendered statistics.
//!
//! The `OutputDestination` trait lets the pipeline write to a file, stdout,
//! or an in-memory buffer without caring which.
//!
//! # Example
//!
//! ```rust
//! use conjugation::io::destinations::{MemoryDestination, OutputDestination};
//!
//! let dest = MemoryDestination::new();
//! dest.write_str("4 7 0.22\n").unwrap();
//! assert_eq!(dest.get_content(), "4 7 0.22\n");
//! ```

use crate::errors::{ConjugationError, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Path that selects standard output instead of a file.
pub const STDOUT_PATH: &str = "-";

/// Trait for sinks that receive rendered output.
pub trait OutputDestination: Send + Sync {
    /// Write string content to the destination.
    fn write_str(&self, content: &str) -> Result<()>;

    /// Flush any buffered content.
    fn flush(&self) -> Result<()>;

    /// Get a description of the destination for error messages.
    fn description(&self) -> String;
}

/// File system output destination.
///
/// Creates or truncates the file on every write.
#[derive(Debug, Clone)]
pub struct FileDestination {
    path: PathBuf,
}

impl FileDestination {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputDestination for FileDestination {
    fn write_str(&self, content: &str) -> Result<()> {
        std::fs::write(&self.path, content)
            .map_err(|e| ConjugationError::output(self.description(), e.to_string()))
    }

    fn flush(&self) -> Result<()> {
        // fs::write closes the handle
        Ok(())
    }

    fn description(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// In-memory output destination for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryDestination {
    buffer: Arc<RwLock<String>>,
}

impl MemoryDestination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current content of the buffer.
    pub fn get_content(&self) -> String {
        self.buffer.read().expect("RwLock poisoned").clone()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.read().expect("RwLock poisoned").is_empty()
    }
}

impl OutputDestination for MemoryDestination {
    fn write_str(&self, content: &str) -> Result<()> {
        self.buffer
            .write()
            .expect("RwLock poisoned")
            .push_str(content);
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn description(&self) -> String {
        "memory".to_string()
    }
}

/// Standard output destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutDestination;

impl StdoutDestination {
    pub fn new() -> Self {
        Self
    }
}

impl OutputDestination for StdoutDestination {
    fn write_str(&self, content: &str) -> Result<()> {
        io::stdout()
            .lock()
            .write_all(content.as_bytes())
            .map_err(|e| ConjugationError::output(self.description(), e.to_string()))
    }

    fn flush(&self) -> Result<()> {
        io::stdout()
            .lock()
            .flush()
            .map_err(|e| ConjugationError::output(self.description(), e.to_string()))
    }

    fn description(&self) -> String {
        "stdout".to_string()
    }
}

/// Pick a destination for a CLI output path; `-` means stdout.
pub fn destination_for(path: &Path) -> Box<dyn OutputDestination> {
    if path.as_os_str() == STDOUT_PATH {
        Box::new(StdoutDestination::new())
    } else {
        Box::new(FileDestination::new(path.to_path_buf()))
    }
}
