use super::BookStore;
use crate::book::address::AddressBook;
use crate::book::notes::NotesBook;
use crate::error::{Result, RoloError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONTACTS_FILE: &str = "contacts.json";
const NOTES_FILE: &str = "notes.json";

/// File-based storage: one JSON file per book under `root`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn load_book<T: Default + DeserializeOwned>(&self, file: &str) -> Result<T> {
        let path = self.root.join(file);
        if !path.exists() {
            return Ok(T::default());
        }
        let content = fs::read_to_string(path).map_err(RoloError::Io)?;
        let book = serde_json::from_str(&content).map_err(RoloError::Serialization)?;
        Ok(book)
    }

    /// Serialize to `<file>.tmp`, then rename over the target. A save
    /// that fails midway leaves the previous snapshot untouched.
    fn save_book<T: Serialize>(&self, file: &str, book: &T) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RoloError::Io)?;
        }
        let content = serde_json::to_string_pretty(book).map_err(RoloError::Serialization)?;

        let path = self.root.join(file);
        let tmp = self.root.join(format!("{file}.tmp"));
        fs::write(&tmp, content).map_err(RoloError::Io)?;
        fs::rename(&tmp, &path).map_err(RoloError::Io)?;
        Ok(())
    }
}

impl BookStore for FileStore {
    fn load_contacts(&self) -> Result<AddressBook> {
        self.load_book(CONTACTS_FILE)
    }

    fn save_contacts(&mut self, book: &AddressBook) -> Result<()> {
        self.save_book(CONTACTS_FILE, book)
    }

    fn load_notes(&self) -> Result<NotesBook> {
        self.load_book(NOTES_FILE)
    }

    fn save_notes(&mut self, book: &NotesBook) -> Result<()> {
        self.save_book(NOTES_FILE, book)
    }
}
