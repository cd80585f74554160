//! # Schoolsearch Architecture
//!
//! Schoolsearch answers lookups over a small school roster (students and
//! their teachers) kept in plain comma-delimited text files, and allows a
//! handful of edits. The interactive console is one client of the library;
//! nothing below it knows a terminal exists.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Console (cli/, wired by main.rs)                           │
//! │  - Reads command lines, tokenizes, prints rows and timing   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and the loaded roster                     │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Queries, add/delete/update, export, counts               │
//! │  - Operates on the Roster, persists through the DataStore   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Roster (roster.rs, index.rs) + Storage (store/)            │
//! │  - In-memory collections and the classroom index            │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Files
//!
//! Two independent sources, one record per line, fields trimmed, blank lines
//! ignored:
//!
//! ```text
//! list.txt      Lee, Ann, 5, 101, 12      # last, first, grade, classroom, bus
//! teachers.txt  Kim, Bo, 101              # last, first, classroom
//! ```
//!
//! A roster still in the old single-file layout (`students.txt`, teacher
//! names inline) is converted once on load; see [`legacy`].
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes and returns plain Rust values, never
//! writes to stdout/stderr and never exits the process. Diagnostics go
//! through `tracing`; the binary decides where they end up.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests against
//!    `InMemoryStore`, built with `RosterFixture`.
//! 2. **API** (`api.rs`): dispatch tests.
//! 3. **Console** (`tests/`): the binary driven over stdin with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each console command
//! - [`roster`]: In-memory record store
//! - [`index`]: Classroom to teachers index
//! - [`parser`]: Delimited line parsing
//! - [`legacy`]: Single-file roster migration
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Student`, `Teacher`, ...)
//! - [`config`]: Configuration file
//! - [`init`]: Wiring config, store and API together
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod legacy;
pub mod model;
pub mod parser;
pub mod roster;
pub mod store;
