use crate::error::{FailureKind, ValidationFailure};
use crate::model::ContactRecord;
use serde::{Deserialize, Serialize};

/// A name-keyed collection of contacts.
///
/// Invariant: names are unique (case-sensitive, exact match). Records
/// iterate in insertion order, which is what the display layer shows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressBook {
    records: Vec<ContactRecord>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a contact keyed by its name. This is a last-resort guard:
    /// callers are expected to pre-check with
    /// [`crate::validation::check_name_in_address_book`].
    pub fn add_record(&mut self, record: ContactRecord) -> Result<(), ValidationFailure> {
        if self.contains_name(record.name.as_str()) {
            return Err(ValidationFailure::new(
                FailureKind::Duplicate,
                format!(
                    "the contact '{}' already exists in the address book",
                    record.name
                ),
            ));
        }
        self.records.push(record);
        Ok(())
    }

    pub fn get_record(&self, name: &str) -> Result<&ContactRecord, ValidationFailure> {
        self.records
            .iter()
            .find(|r| r.name.as_str() == name)
            .ok_or_else(|| not_found(name))
    }

    /// Removes and returns the contact. Irreversible at this level.
    pub fn delete_record(&mut self, name: &str) -> Result<ContactRecord, ValidationFailure> {
        let position = self
            .records
            .iter()
            .position(|r| r.name.as_str() == name)
            .ok_or_else(|| not_found(name))?;
        Ok(self.records.remove(position))
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.records.iter().any(|r| r.name.as_str() == name)
    }

    /// Insertion-ordered traversal. A fresh call restarts from the top.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn not_found(name: &str) -> ValidationFailure {
    ValidationFailure::new(
        FailureKind::NotFound,
        format!("the contact '{name}' was not found"),
    )
}
