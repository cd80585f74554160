use super::{DataStore, Source};
use crate::error::{Result, SchoolError};
use crate::model::ExportFormat;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    students: PathBuf,
    teachers: PathBuf,
    legacy_students: Option<PathBuf>,
    json_export: PathBuf,
    xml_export: PathBuf,
}

impl FileStore {
    pub fn new(students: impl Into<PathBuf>, teachers: impl Into<PathBuf>) -> Self {
        Self {
            students: students.into(),
            teachers: teachers.into(),
            legacy_students: None,
            json_export: PathBuf::from("students.json"),
            xml_export: PathBuf::from("students.xml"),
        }
    }

    pub fn with_legacy(mut self, path: impl Into<PathBuf>) -> Self {
        self.legacy_students = Some(path.into());
        self
    }

    pub fn with_exports(mut self, json: impl Into<PathBuf>, xml: impl Into<PathBuf>) -> Self {
        self.json_export = json.into();
        self.xml_export = xml.into();
        self
    }

    pub fn path(&self, source: Source) -> Option<&Path> {
        match source {
            Source::Students => Some(&self.students),
            Source::Teachers => Some(&self.teachers),
            Source::LegacyStudents => self.legacy_students.as_deref(),
        }
    }

    fn export_path(&self, format: ExportFormat) -> &Path {
        match format {
            ExportFormat::Json => &self.json_export,
            ExportFormat::Xml => &self.xml_export,
        }
    }

    fn ensure_parent(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(SchoolError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn read(&self, source: Source) -> Result<Option<String>> {
        let Some(path) = self.path(source) else {
            return Ok(None);
        };
        if !path.exists() {
            debug!(%source, path = %path.display(), "source file not found");
            return Ok(None);
        }
        debug!(%source, path = %path.display(), "reading source");
        let content = fs::read_to_string(path).map_err(SchoolError::Io)?;
        Ok(Some(content))
    }

    fn write(&mut self, source: Source, contents: &str) -> Result<()> {
        let path = self
            .path(source)
            .ok_or_else(|| SchoolError::Store(format!("No file configured for {}", source)))?;
        Self::ensure_parent(path)?;
        debug!(%source, path = %path.display(), bytes = contents.len(), "writing source");
        fs::write(path, contents).map_err(SchoolError::Io)?;
        Ok(())
    }

    fn write_export(&mut self, format: ExportFormat, contents: &str) -> Result<String> {
        let path = self.export_path(format);
        Self::ensure_parent(path)?;
        debug!(?format, path = %path.display(), "writing export");
        fs::write(path, contents).map_err(SchoolError::Io)?;
        Ok(path.display().to_string())
    }

    fn location(&self, source: Source) -> String {
        match self.path(source) {
            Some(path) => path.display().to_string(),
            None => format!("<no {} file>", source),
        }
    }
}
