//! Core registry functionality
//!
//! This module contains the types and logic behind the contact registry.
//! It provides:
//!
//! - [`mask`]: Live input masks for the tax identifier and phone fields
//! - [`search`]: Substring search over the contact list
//! - [`contact`]: The stored record, its identifier and the form draft
//! - [`session`]: Application state and its event-driven transitions
//! - [`store`]: Atomic JSON persistence
//! - [`remote`]: Best-effort submission to a spreadsheet endpoint
//! - [`error`]: Error types for registry operations

pub mod contact;
pub mod error;
pub mod mask;
pub mod remote;
pub mod search;
pub mod session;
pub mod store;

#[cfg(test)]
pub mod test_helpers;
