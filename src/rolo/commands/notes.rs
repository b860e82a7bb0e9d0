use crate::book::notes::NotesBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteRecord;
use crate::validation::{check_number_not_in_notes_book, validate_note};

/// Adds a note and reports the id it was filed under.
pub fn add(book: &mut NotesBook, record: NoteRecord) -> Result<CmdResult> {
    validate_note(&record.text)?;

    let id = book.add_record(record.clone());
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Note added ({id})")));
    result.affected_notes.push((id, record));
    Ok(result)
}

/// Replaces the note body/name under an existing id. The id is stable
/// across updates; validation runs before the old note is touched.
pub fn update(book: &mut NotesBook, id: u64, record: NoteRecord) -> Result<CmdResult> {
    check_number_not_in_notes_book(book, id)?;
    validate_note(&record.text)?;

    book.replace_record(id, record.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Note updated ({id})")));
    result.affected_notes.push((id, record));
    Ok(result)
}

pub fn delete(book: &mut NotesBook, id: u64) -> Result<CmdResult> {
    let removed = book.delete_record(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Note deleted ({id})")));
    result.affected_notes.push((id, removed));
    Ok(result)
}

pub fn list(book: &NotesBook) -> Result<CmdResult> {
    let listed = book.iter().map(|(id, note)| (id, note.clone())).collect();
    Ok(CmdResult::default().with_listed_notes(listed))
}
