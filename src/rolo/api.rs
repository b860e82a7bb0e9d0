//! # API Facade
//!
//! `RoloApi` is the single entry point for all operations, regardless of
//! the UI in front of it. It owns the two in-memory books, loaded once at
//! [`RoloApi::open`]; between load and save the in-memory state is the
//! sole source of truth.
//!
//! Every mutating method dispatches to the command layer and, on success,
//! persists the touched book through the [`BookStore`]. The facade does no
//! business logic of its own and never writes to stdout/stderr.
//!
//! Generic over `BookStore`:
//! - Production: `RoloApi<FileStore>`
//! - Testing: `RoloApi<InMemoryStore>`

use crate::book::address::AddressBook;
use crate::book::notes::NotesBook;
use crate::commands;
use crate::error::Result;
use crate::model::{ContactRecord, NoteRecord};
use crate::store::BookStore;

pub struct RoloApi<S: BookStore> {
    store: S,
    contacts: AddressBook,
    notes: NotesBook,
}

impl<S: BookStore> RoloApi<S> {
    /// Loads both books from the store. Missing snapshots come back as
    /// empty books.
    pub fn open(store: S) -> Result<Self> {
        let contacts = store.load_contacts()?;
        let notes = store.load_notes()?;
        Ok(Self {
            store,
            contacts,
            notes,
        })
    }

    pub fn contacts(&self) -> &AddressBook {
        &self.contacts
    }

    pub fn notes(&self) -> &NotesBook {
        &self.notes
    }

    pub fn add_contact(&mut self, record: ContactRecord) -> Result<commands::CmdResult> {
        let result = commands::contacts::add(&mut self.contacts, record)?;
        self.store.save_contacts(&self.contacts)?;
        Ok(result)
    }

    pub fn update_contact(
        &mut self,
        old_name: &str,
        record: ContactRecord,
    ) -> Result<commands::CmdResult> {
        let result = commands::contacts::update(&mut self.contacts, old_name, record)?;
        self.store.save_contacts(&self.contacts)?;
        Ok(result)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        let result = commands::contacts::delete(&mut self.contacts, name)?;
        self.store.save_contacts(&self.contacts)?;
        Ok(result)
    }

    pub fn list_contacts(&self) -> Result<commands::CmdResult> {
        commands::contacts::list(&self.contacts)
    }

    pub fn add_note(&mut self, record: NoteRecord) -> Result<commands::CmdResult> {
        let result = commands::notes::add(&mut self.notes, record)?;
        self.store.save_notes(&self.notes)?;
        Ok(result)
    }

    pub fn update_note(&mut self, id: u64, record: NoteRecord) -> Result<commands::CmdResult> {
        let result = commands::notes::update(&mut self.notes, id, record)?;
        self.store.save_notes(&self.notes)?;
        Ok(result)
    }

    pub fn delete_note(&mut self, id: u64) -> Result<commands::CmdResult> {
        let result = commands::notes::delete(&mut self.notes, id)?;
        self.store.save_notes(&self.notes)?;
        Ok(result)
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::notes::list(&self.notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Name;
    use crate::store::memory::InMemoryStore;

    fn contact(name: &str) -> ContactRecord {
        ContactRecord::new(Name::parse(name).unwrap())
    }

    #[test]
    fn open_loads_previously_saved_books() {
        let mut store = InMemoryStore::new();
        let mut book = AddressBook::new();
        book.add_record(contact("Alex")).unwrap();
        store.save_contacts(&book).unwrap();

        let api = RoloApi::open(store).unwrap();
        assert!(api.contacts().contains_name("Alex"));
        assert!(api.notes().is_empty());
    }

    #[test]
    fn mutations_flow_through_to_the_books() {
        let mut api = RoloApi::open(InMemoryStore::new()).unwrap();
        api.add_contact(contact("Alex")).unwrap();
        api.add_note(NoteRecord::new("some text")).unwrap();

        assert!(api.contacts().contains_name("Alex"));
        assert_eq!(api.notes().len(), 1);
    }

    #[test]
    fn failed_mutation_does_not_persist() {
        let mut api = RoloApi::open(InMemoryStore::new()).unwrap();
        api.add_contact(contact("Alex")).unwrap();
        assert!(api.add_contact(contact("Alex")).is_err());
        assert_eq!(api.contacts().len(), 1);
    }

    #[test]
    fn open_with_fresh_store_gives_empty_books() {
        let store = InMemoryStore::new();
        let api = RoloApi::open(store).unwrap();
        assert!(api.contacts().is_empty());
        assert!(api.notes().is_empty());
    }
}
