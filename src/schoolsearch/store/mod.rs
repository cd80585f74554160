//! # Storage Layer
//!
//! The [`DataStore`] trait is the boundary between the roster and wherever
//! its text lives. It deals only in whole-source text: reading a source
//! returns its full contents, writing replaces them. Parsing and formatting
//! happen above this layer.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one plain-text file per source
//!   plus the JSON/XML export destinations.
//! - [`memory::InMemoryStore`]: no persistence, for tests.
//!
//! ## Sources
//!
//! ```text
//! list.txt        # students:  last, first, grade, classroom, bus
//! teachers.txt    # teachers:  last, first, classroom
//! students.txt    # legacy:    last, first, grade, classroom, bus, teacher_last, teacher_first
//! ```
//!
//! The legacy source is only ever read, and only when neither normalized
//! source exists (see `legacy.rs`).

use crate::error::Result;
use crate::model::ExportFormat;
use std::fmt;

pub mod fs;
pub mod memory;

/// The text sources a roster is made from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Students,
    Teachers,
    LegacyStudents,
}

impl Source {
    pub fn name(&self) -> &'static str {
        match self {
            Source::Students => "students",
            Source::Teachers => "teachers",
            Source::LegacyStudents => "legacy students",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Abstract interface for roster storage.
pub trait DataStore {
    /// Full text of a source, or `None` if it does not exist.
    fn read(&self, source: Source) -> Result<Option<String>>;

    /// Replace the full text of a source.
    fn write(&mut self, source: Source, contents: &str) -> Result<()>;

    /// Write an export document, returning where it went.
    fn write_export(&mut self, format: ExportFormat, contents: &str) -> Result<String>;

    /// Human-readable location of a source, used in messages.
    fn location(&self, source: Source) -> String;
}
