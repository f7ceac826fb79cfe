//! contactbook - a small contact registry
//!
//! Captures a person's name, CPF (tax identifier) and phone number, keeps
//! them in a local JSON file and optionally mirrors each new entry to a
//! spreadsheet web app.
//!
//! # Architecture
//!
//! - [`core`] - Masks, search, session state machine, persistence, remote sync
//! - [`config`] - Endpoint configuration persistence
//! - [`validators`] - Name sanitization and endpoint validation
//! - [`utils`] - Utility functions (XDG directories, etc.)

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod core;
pub mod utils;
pub mod validators;

// Re-export commonly used types
pub use core::contact::{Contact, ContactDraft, ContactId};
pub use core::error::{Error, Result};
pub use core::session::{Effect, Event, Session};
