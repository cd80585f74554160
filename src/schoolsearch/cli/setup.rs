use clap::Parser;
use schoolsearch::init::InitOptions;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "schoolsearch", bin_name = "schoolsearch", version)]
#[command(about = "Look up and edit a school roster kept in plain text files", long_about = None)]
pub struct Cli {
    /// Directory holding the roster files
    #[arg(short, long, default_value = ".", help_heading = "Files")]
    pub data_dir: PathBuf,

    /// Student file (default: list.txt)
    #[arg(long, help_heading = "Files")]
    pub students: Option<PathBuf>,

    /// Teacher file (default: teachers.txt)
    #[arg(long, help_heading = "Files")]
    pub teachers: Option<PathBuf>,

    /// Single-file roster to migrate when neither other file exists (default: students.txt)
    #[arg(long, help_heading = "Files")]
    pub legacy: Option<PathBuf>,

    /// Config file to use instead of searching for schoolsearch.json
    #[arg(short, long, help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,
}

impl Cli {
    pub fn init_options(&self) -> InitOptions {
        InitOptions {
            data_dir: self.data_dir.clone(),
            config: self.config.clone(),
            students: self.students.clone(),
            teachers: self.teachers.clone(),
            legacy: self.legacy.clone(),
        }
    }
}
