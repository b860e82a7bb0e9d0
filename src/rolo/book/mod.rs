//! The two uniqueness-enforcing collections: [`address::AddressBook`]
//! keyed by contact name and [`notes::NotesBook`] keyed by an
//! auto-assigned integer id.
//!
//! Books are plain in-memory values. Persistence is a separate concern
//! behind [`crate::store::BookStore`]; the in-memory book is the single
//! source of truth while the process runs.

pub mod address;
pub mod notes;
