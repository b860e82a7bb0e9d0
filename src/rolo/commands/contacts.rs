use crate::book::address::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ContactRecord;
use crate::validation::{check_name_in_address_book, check_name_not_in_address_book};

/// Adds a fully-built contact. The record's fields are valid by
/// construction; only the name-uniqueness rule is checked here.
pub fn add(book: &mut AddressBook, record: ContactRecord) -> Result<CmdResult> {
    check_name_in_address_book(book, record.name.as_str())?;
    book.add_record(record.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Contact added: {}", record.name)));
    result.affected_contacts.push(record);
    Ok(result)
}

/// Replaces the contact stored under `old_name` with `record`.
///
/// An update is a keyed swap: every check runs while the old record is
/// still in place, and only then is it deleted and the new one inserted.
/// A failing update must never cost the caller the old record.
pub fn update(book: &mut AddressBook, old_name: &str, record: ContactRecord) -> Result<CmdResult> {
    check_name_not_in_address_book(book, old_name)?;
    if record.name.as_str() != old_name {
        check_name_in_address_book(book, record.name.as_str())?;
    }

    book.delete_record(old_name)?;
    book.add_record(record.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact updated: {} -> {}",
        old_name, record.name
    )));
    result.affected_contacts.push(record);
    Ok(result)
}

pub fn delete(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let removed = book.delete_record(name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Contact deleted: {name}")));
    result.affected_contacts.push(removed);
    Ok(result)
}

pub fn list(book: &AddressBook) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_contacts(book.iter().cloned().collect()))
}
