//! Amateur radio contact logbook backed by a single SQLite table.
//!
//! # Examples
//!
//! Driving the editor against an in-memory store:
//! ```
//! use hamlog::{
//!     editor::controller::{LogActions, LogEditor},
//!     persist::sqlite::SqliteContactStore,
//! };
//!
//! let store = SqliteContactStore::open_in_memory().expect("open");
//! let mut editor = LogEditor::new(store).expect("editor");
//! editor.fields_mut().callsign = "W1AW".to_string();
//! editor.fields_mut().frequency = "14.250".to_string();
//! editor.on_add().expect("add");
//! assert_eq!(editor.rows().len(), 1);
//! assert!(editor.fields().is_empty());
//! ```
#![deny(missing_docs)]

/// Window and storage settings.
pub mod config;
/// Contact record and draft types.
pub mod contact;
/// Log editor controller and record list state.
pub mod editor;
/// Persistence abstraction and SQLite implementation.
pub mod persist;
/// Shared primitive types and enums.
pub mod types;
