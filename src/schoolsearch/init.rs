use crate::api::SchoolApi;
use crate::config::SchoolConfig;
use crate::error::Result;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct SchoolContext {
    pub api: SchoolApi<FileStore>,
    pub config: SchoolConfig,
}

/// Where to find the roster. Unset fields fall back to the config file, then
/// to built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub data_dir: PathBuf,
    pub config: Option<PathBuf>,
    pub students: Option<PathBuf>,
    pub teachers: Option<PathBuf>,
    pub legacy: Option<PathBuf>,
}

/// Per-user configuration directory, e.g. `~/.config/schoolsearch`.
pub fn user_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "schoolsearch", "schoolsearch")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

pub fn load_config(options: &InitOptions) -> Result<SchoolConfig> {
    if let Some(path) = &options.config {
        debug!(path = %path.display(), "loading explicit config");
        return SchoolConfig::load_file(path);
    }

    let mut dirs = vec![options.data_dir.clone()];
    if let Some(user_dir) = user_config_dir() {
        dirs.push(user_dir);
    }
    SchoolConfig::discover(&dirs)
}

pub fn build_store(options: &InitOptions, config: &SchoolConfig) -> FileStore {
    let data_dir = options.data_dir.as_path();
    let pick = |flag: &Option<PathBuf>, configured: &Path| {
        SchoolConfig::resolve(data_dir, flag.as_deref().unwrap_or(configured))
    };

    FileStore::new(
        pick(&options.students, config.students_file.as_path()),
        pick(&options.teachers, config.teachers_file.as_path()),
    )
    .with_legacy(pick(&options.legacy, config.legacy_students_file.as_path()))
    .with_exports(
        SchoolConfig::resolve(data_dir, &config.json_export),
        SchoolConfig::resolve(data_dir, &config.xml_export),
    )
}

/// Resolve configuration, build the file store and load the roster.
pub fn initialize(options: &InitOptions) -> Result<SchoolContext> {
    let config = load_config(options)?;
    let store = build_store(options, &config);
    let api = SchoolApi::open(store)?;
    Ok(SchoolContext { api, config })
}
