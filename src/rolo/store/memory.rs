use super::BookStore;
use crate::book::address::AddressBook;
use crate::book::notes::NotesBook;
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    contacts: AddressBook,
    notes: NotesBook,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookStore for InMemoryStore {
    fn load_contacts(&self) -> Result<AddressBook> {
        Ok(self.contacts.clone())
    }

    fn save_contacts(&mut self, book: &AddressBook) -> Result<()> {
        self.contacts = book.clone();
        Ok(())
    }

    fn load_notes(&self) -> Result<NotesBook> {
        Ok(self.notes.clone())
    }

    fn save_notes(&mut self, book: &NotesBook) -> Result<()> {
        self.notes = book.clone();
        Ok(())
    }
}
