//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all roster operations, whatever the UI.
//!
//! `SchoolApi` owns both the storage backend and the loaded [`Roster`]; there
//! is no other place the collections live. Methods dispatch to
//! `commands/*.rs` and return structured [`CmdResult`]s. No printing, no
//! process exits.
//!
//! ## Generic Over DataStore
//!
//! - Production: `SchoolApi<FileStore>`
//! - Testing: `SchoolApi<InMemoryStore>`

use crate::commands::{self, query::Query};
use crate::error::Result;
use crate::model::{ExportFormat, NewStudent};
use crate::roster::{LoadMode, Roster};
use crate::store::{DataStore, Source};

pub struct SchoolApi<S: DataStore> {
    store: S,
    roster: Roster,
    mode: LoadMode,
}

impl<S: DataStore> SchoolApi<S> {
    /// Loads the roster from `store`. Fails on any malformed record.
    pub fn open(mut store: S) -> Result<Self> {
        let (roster, mode) = Roster::load(&mut store)?;
        Ok(Self {
            store,
            roster,
            mode,
        })
    }

    pub fn query(&self, query: &Query) -> Result<CmdResult> {
        Ok(commands::query::run(&self.roster, query))
    }

    pub fn add_student(&mut self, new: NewStudent) -> Result<CmdResult> {
        commands::add::run(&mut self.store, &mut self.roster, new)
    }

    pub fn delete_students(&mut self, last_name: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, &mut self.roster, last_name)
    }

    pub fn update_students(
        &mut self,
        last_name: &str,
        field: &str,
        value: &str,
    ) -> Result<CmdResult> {
        commands::update::run(&mut self.store, &mut self.roster, last_name, field, value)
    }

    pub fn export(&mut self, format: ExportFormat) -> Result<CmdResult> {
        commands::export::run(&mut self.store, &self.roster, format)
    }

    pub fn counts(&self) -> Result<CmdResult> {
        Ok(commands::counts::run(&self.roster))
    }

    /// Notes about how the roster was loaded, for the UI to show once.
    pub fn load_messages(&self) -> Vec<CmdMessage> {
        match self.mode {
            LoadMode::Normalized => Vec::new(),
            LoadMode::Migrated { saved: true } => vec![CmdMessage::info(format!(
                "Note: migrated legacy roster {} into {} and {}.",
                self.store.location(Source::LegacyStudents),
                self.store.location(Source::Students),
                self.store.location(Source::Teachers),
            ))],
            LoadMode::Migrated { saved: false } => vec![CmdMessage::warning(format!(
                "Note: using legacy roster {}; migrated data could not be saved.",
                self.store.location(Source::LegacyStudents),
            ))],
        }
    }

    pub fn load_mode(&self) -> LoadMode {
        self.mode
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
