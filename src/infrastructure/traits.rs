//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io::{self, Read};
use std::path::Path;

/// Source of raw notation text.
pub trait NotationReader: Send + Sync {
    /// Read a notation file to string.
    fn read_file(&self, path: &Path) -> io::Result<String>;

    /// Read all of stdin to string.
    fn read_stdin(&self) -> io::Result<String>;
}

/// Real implementation backed by the filesystem and process stdin.
pub struct RealNotationReader;

impl NotationReader for RealNotationReader {
    fn read_file(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn read_stdin(&self) -> io::Result<String> {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    }
}
