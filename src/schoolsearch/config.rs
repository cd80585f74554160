use crate::error::{Result, SchoolError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "schoolsearch.json";

/// Configuration for schoolsearch, read from `schoolsearch.json`.
///
/// Every path is relative to the data directory unless absolute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchoolConfig {
    #[serde(default = "default_students_file")]
    pub students_file: PathBuf,

    #[serde(default = "default_teachers_file")]
    pub teachers_file: PathBuf,

    /// Old single-file roster with teacher names inline
    #[serde(default = "default_legacy_file")]
    pub legacy_students_file: PathBuf,

    #[serde(default = "default_json_export")]
    pub json_export: PathBuf,

    #[serde(default = "default_xml_export")]
    pub xml_export: PathBuf,
}

fn default_students_file() -> PathBuf {
    PathBuf::from("list.txt")
}

fn default_teachers_file() -> PathBuf {
    PathBuf::from("teachers.txt")
}

fn default_legacy_file() -> PathBuf {
    PathBuf::from("students.txt")
}

fn default_json_export() -> PathBuf {
    PathBuf::from("students.json")
}

fn default_xml_export() -> PathBuf {
    PathBuf::from("students.xml")
}

impl Default for SchoolConfig {
    fn default() -> Self {
        Self {
            students_file: default_students_file(),
            teachers_file: default_teachers_file(),
            legacy_students_file: default_legacy_file(),
            json_export: default_json_export(),
            xml_export: default_xml_export(),
        }
    }
}

impl SchoolConfig {
    /// Load config from a file path.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(SchoolError::Io)?;
        let config: SchoolConfig =
            serde_json::from_str(&content).map_err(SchoolError::Serialization)?;
        Ok(config)
    }

    /// Load the first config found in `dirs`, or defaults if none exists.
    pub fn discover<P: AsRef<Path>>(dirs: &[P]) -> Result<Self> {
        for dir in dirs {
            let path = dir.as_ref().join(CONFIG_FILENAME);
            if path.exists() {
                return Self::load_file(path);
            }
        }
        Ok(Self::default())
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SchoolError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SchoolError::Serialization)?;
        fs::write(config_path, content).map_err(SchoolError::Io)?;
        Ok(())
    }

    /// Anchor a configured path at the data directory.
    pub fn resolve(data_dir: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            data_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SchoolConfig::default();
        assert_eq!(config.students_file, PathBuf::from("list.txt"));
        assert_eq!(config.teachers_file, PathBuf::from("teachers.txt"));
        assert_eq!(config.legacy_students_file, PathBuf::from("students.txt"));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: SchoolConfig = serde_json::from_str(r#"{"students_file": "kids.txt"}"#).unwrap();
        assert_eq!(config.students_file, PathBuf::from("kids.txt"));
        assert_eq!(config.xml_export, PathBuf::from("students.xml"));
    }

    #[test]
    fn test_discover_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = SchoolConfig::discover(&[temp.path()]).unwrap();
        assert_eq!(config, SchoolConfig::default());
    }

    #[test]
    fn test_discover_takes_first_match() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();

        let mut config = SchoolConfig::default();
        config.teachers_file = PathBuf::from("staff.txt");
        config.save(second.path()).unwrap();

        let loaded = SchoolConfig::discover(&[first.path(), second.path()]).unwrap();
        assert_eq!(loaded.teachers_file, PathBuf::from("staff.txt"));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        assert!(matches!(
            SchoolConfig::discover(&[temp.path()]),
            Err(SchoolError::Serialization(_))
        ));
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let temp = TempDir::new().unwrap();
        let data = temp.path();
        assert_eq!(
            SchoolConfig::resolve(data, Path::new("list.txt")),
            data.join("list.txt")
        );
        let abs = data.join("elsewhere.txt");
        assert_eq!(SchoolConfig::resolve(data, &abs), abs);
    }
}
