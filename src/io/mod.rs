//! I/O module
//!
//! Contains the journal boundary:
//! - `csv_format`: CSV parsing and report serialization (pure functions)
//! - `reader`: streaming journal reader
//! - `journal`: journal replay against a ledger engine

pub mod csv_format;
pub mod journal;
pub mod reader;

pub use journal::{apply_operation, replay_journal, ReplayReport};
pub use reader::JournalReader;
