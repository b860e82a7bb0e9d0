//! # Storage Layer
//!
//! Persistence is abstracted behind the [`BookStore`] trait so the core
//! never touches the filesystem directly:
//!
//! - [`fs::FileStore`]: production storage. Each book is one JSON file
//!   (`contacts.json`, `notes.json`) under the data directory, written
//!   whole on every save.
//! - [`memory::InMemoryStore`]: no persistence, for tests.
//!
//! Loads and saves move the entire book as one atomic unit; there is no
//! partial or incremental persistence. A missing file loads as an empty
//! book. `FileStore` writes to a temporary file and renames it over the
//! target, so an interrupted save leaves the previous snapshot intact.

use crate::book::address::AddressBook;
use crate::book::notes::NotesBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for whole-book persistence.
pub trait BookStore {
    /// Load the address book, or an empty one if nothing was saved yet.
    fn load_contacts(&self) -> Result<AddressBook>;

    /// Persist the full address book snapshot.
    fn save_contacts(&mut self, book: &AddressBook) -> Result<()>;

    /// Load the notes book, or an empty one if nothing was saved yet.
    fn load_notes(&self) -> Result<NotesBook>;

    /// Persist the full notes book snapshot.
    fn save_notes(&mut self, book: &NotesBook) -> Result<()>;
}
