//! souvenir - Travel journal in your terminal
//!
//! A command-line travel journal that keeps entries with a title, a
//! narrative, an optional photo, an optional voice memo and optional
//! coordinates, persisted as a single JSON collection per journal.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SouvenirError;
