use crate::error::{FailureKind, ValidationFailure};
use crate::model::NoteRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An id-keyed collection of notes.
///
/// Ids start at 1 and are assigned monotonically; a deleted id is never
/// reused. The counter is part of the serialized snapshot, so the rule
/// holds across process runs as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotesBook {
    notes: BTreeMap<u64, NoteRecord>,
    next_id: u64,
}

impl Default for NotesBook {
    fn default() -> Self {
        Self {
            notes: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl NotesBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a note under the next free id and returns that id.
    pub fn add_record(&mut self, record: NoteRecord) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notes.insert(id, record);
        id
    }

    pub fn get_record(&self, id: u64) -> Result<&NoteRecord, ValidationFailure> {
        self.notes.get(&id).ok_or_else(|| not_found(id))
    }

    /// Replaces the note under an existing id, keeping the key stable.
    pub fn replace_record(&mut self, id: u64, record: NoteRecord) -> Result<(), ValidationFailure> {
        match self.notes.get_mut(&id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(not_found(id)),
        }
    }

    /// Removes and returns the note. The id is retired, not recycled.
    pub fn delete_record(&mut self, id: u64) -> Result<NoteRecord, ValidationFailure> {
        self.notes.remove(&id).ok_or_else(|| not_found(id))
    }

    pub fn contains_id(&self, id: u64) -> bool {
        self.notes.contains_key(&id)
    }

    /// Ascending-id traversal, which for monotonic ids is insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &NoteRecord)> {
        self.notes.iter().map(|(id, record)| (*id, record))
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

fn not_found(id: u64) -> ValidationFailure {
    ValidationFailure::new(
        FailureKind::NotFound,
        format!("the note {id} was not found"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut book = NotesBook::new();
        assert_eq!(book.add_record(NoteRecord::new("a")), 1);
        assert_eq!(book.add_record(NoteRecord::new("b")), 2);
    }

    #[test]
    fn deleted_ids_are_never_reused() {
        let mut book = NotesBook::new();
        let first = book.add_record(NoteRecord::new("a"));
        book.delete_record(first).unwrap();

        let second = book.add_record(NoteRecord::new("b"));
        assert_eq!(second, 2);

        let failure = book.get_record(first).unwrap_err();
        assert_eq!(failure.kind, FailureKind::NotFound);
        assert_eq!(failure.message, "the note 1 was not found");
    }

    #[test]
    fn replace_keeps_the_id() {
        let mut book = NotesBook::new();
        let id = book.add_record(NoteRecord::new("old"));
        book.replace_record(id, NoteRecord::new("new")).unwrap();
        assert_eq!(book.get_record(id).unwrap().text, "new");
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn replace_missing_id_fails() {
        let mut book = NotesBook::new();
        assert_eq!(
            book.replace_record(7, NoteRecord::new("x")).unwrap_err().kind,
            FailureKind::NotFound
        );
    }

    #[test]
    fn counter_survives_serialization() {
        let mut book = NotesBook::new();
        book.add_record(NoteRecord::new("a"));
        book.delete_record(1).unwrap();

        let json = serde_json::to_string(&book).unwrap();
        let mut restored: NotesBook = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.add_record(NoteRecord::new("b")), 2);
    }
}
