use super::{DataStore, Source};
use crate::error::{Result, SchoolError};
use crate::model::ExportFormat;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    sources: HashMap<Source, String>,
    exports: HashMap<ExportFormat, String>,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: Source, contents: impl Into<String>) -> Self {
        self.sources.insert(source, contents.into());
        self
    }

    /// Make every subsequent write fail, to exercise save-failure paths.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn contents(&self, source: Source) -> Option<&str> {
        self.sources.get(&source).map(String::as_str)
    }

    pub fn export(&self, format: ExportFormat) -> Option<&str> {
        self.exports.get(&format).map(String::as_str)
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes {
            return Err(SchoolError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "store is read-only",
            )));
        }
        Ok(())
    }
}

impl DataStore for InMemoryStore {
    fn read(&self, source: Source) -> Result<Option<String>> {
        Ok(self.sources.get(&source).cloned())
    }

    fn write(&mut self, source: Source, contents: &str) -> Result<()> {
        self.check_writable()?;
        self.sources.insert(source, contents.to_string());
        Ok(())
    }

    fn write_export(&mut self, format: ExportFormat, contents: &str) -> Result<String> {
        self.check_writable()?;
        self.exports.insert(format, contents.to_string());
        Ok(format!("memory:{:?}", format).to_lowercase())
    }

    fn location(&self, source: Source) -> String {
        format!("memory:{}", source.name())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Student, Teacher};

    /// Builds an [`InMemoryStore`] holding normalized student and teacher
    /// sources.
    #[derive(Default)]
    pub struct RosterFixture {
        students: Vec<Student>,
        teachers: Vec<Teacher>,
    }

    impl RosterFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_student(
            mut self,
            last: &str,
            first: &str,
            grade: i64,
            classroom: i64,
            bus: i64,
        ) -> Self {
            self.students
                .push(Student::new(last, first, grade, classroom, bus));
            self
        }

        pub fn with_teacher(mut self, last: &str, first: &str, classroom: i64) -> Self {
            self.teachers.push(Teacher::new(last, first, classroom));
            self
        }

        /// The two-record school used throughout the docs: Ann Lee in
        /// Bo Kim's classroom 101.
        pub fn lee_and_kim() -> Self {
            Self::new()
                .with_student("Lee", "Ann", 5, 101, 12)
                .with_teacher("Kim", "Bo", 101)
        }

        /// A few classrooms, shared surnames and a classroom with two teachers.
        pub fn small_school() -> Self {
            Self::new()
                .with_student("Lee", "Ann", 5, 101, 12)
                .with_student("Park", "Jin", 3, 102, 7)
                .with_student("Lee", "Max", 3, 103, 7)
                .with_student("Ortiz", "Eva", 5, 103, 12)
                .with_student("Nash", "Tom", 4, 104, 9)
                .with_teacher("Kim", "Bo", 101)
                .with_teacher("Diaz", "Rosa", 102)
                .with_teacher("Hart", "Sam", 103)
                .with_teacher("Abbott", "Lu", 103)
        }

        pub fn store(&self) -> InMemoryStore {
            let students: String = self.students.iter().map(|s| s.to_line() + "\n").collect();
            let teachers: String = self.teachers.iter().map(|t| t.to_line() + "\n").collect();
            InMemoryStore::new()
                .with_source(Source::Students, students)
                .with_source(Source::Teachers, teachers)
        }
    }
}
