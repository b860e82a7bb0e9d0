//! Business logic for each operation. Command functions are pure over the
//! in-memory books: they take a book, validate, mutate, and return a
//! structured [`CmdResult`]. No I/O happens here; persistence is the API
//! layer's job.

use crate::model::{ContactRecord, NoteRecord};

pub mod contacts;
pub mod notes;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command: which records it touched or listed,
/// plus level-tagged messages for the presentation layer.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_contacts: Vec<ContactRecord>,
    pub listed_contacts: Vec<ContactRecord>,
    pub affected_notes: Vec<(u64, NoteRecord)>,
    pub listed_notes: Vec<(u64, NoteRecord)>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<ContactRecord>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<(u64, NoteRecord)>) -> Self {
        self.listed_notes = notes;
        self
    }
}
