//! Notation input service
//!
//! Reads notation text from the command line, a file or stdin and flattens
//! multi-line input into a single notation string.

use std::path::PathBuf;
use std::sync::Arc;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::notation::CONTEXT_SEPARATOR;
use crate::infrastructure::traits::NotationReader;

/// Where the notation text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Notation passed directly, used verbatim
    Inline(String),
    /// Notation file, one or more contexts per line
    File(PathBuf),
    /// Notation piped on stdin, one or more contexts per line
    Stdin,
}

/// Service for loading notation text.
pub struct InputService {
    reader: Arc<dyn NotationReader>,
    comment_prefix: String,
}

impl InputService {
    /// Create a new input service.
    pub fn new(reader: Arc<dyn NotationReader>, comment_prefix: impl Into<String>) -> Self {
        Self {
            reader,
            comment_prefix: comment_prefix.into(),
        }
    }

    /// Load notation text from `source`.
    #[instrument(level = "debug", skip(self))]
    pub fn read(&self, source: &InputSource) -> ApplicationResult<String> {
        match source {
            InputSource::Inline(text) => Ok(text.clone()),
            InputSource::File(path) => {
                let content = self
                    .reader
                    .read_file(path)
                    .with_path_context("read notation", path)?;
                Ok(self.join_lines(&content))
            }
            InputSource::Stdin => {
                let content = self
                    .reader
                    .read_stdin()
                    .with_context("read notation from stdin")?;
                Ok(self.join_lines(&content))
            }
        }
    }

    /// Drops blank and comment lines, joins the rest into one notation.
    pub fn join_lines(&self, content: &str) -> String {
        let joined = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !self.is_comment(line))
            .join(&CONTEXT_SEPARATOR.to_string());
        debug!("joined input: {:?}", joined);
        joined
    }

    fn is_comment(&self, line: &str) -> bool {
        !self.comment_prefix.is_empty() && line.starts_with(&self.comment_prefix)
    }
}
