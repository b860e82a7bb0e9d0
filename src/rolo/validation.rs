//! # Validation Rules
//!
//! Every user-supplied value passes through one of these rules before it
//! can reach a book. Rules are pure functions: they inspect a candidate
//! (sometimes against a book) and return `Err(ValidationFailure)` with a
//! classified kind, or `Ok(())`. They never mutate state and never panic
//! on expected bad input — rejecting or re-prompting is the caller's call.
//!
//! The entity constructors in [`crate::model`] are thin wrappers over
//! these rules, so a value object cannot exist in an invalid state.

use crate::book::address::AddressBook;
use crate::book::notes::NotesBook;
use crate::error::{FailureKind, ValidationFailure};
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Minimum length of a note body.
pub const NOTE_LEN: usize = 1;

/// Maximum name length, inclusive.
pub const NAME_MAX_LEN: usize = 49;

/// Inclusive bounds on a sanitized phone number's digit count.
pub const PHONE_LEN: (usize, usize) = (11, 16);

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$").unwrap()
});

/// A name is letters only, 1 to 49 characters.
pub fn validate_name(name: &str) -> Result<(), ValidationFailure> {
    if !name.is_empty() && !name.chars().all(char::is_alphabetic) {
        return Err(ValidationFailure::new(
            FailureKind::TypeMismatch,
            format!("contact's name can only contain letters, but got '{name}'"),
        ));
    }
    let len = name.chars().count();
    if len < 1 || len > NAME_MAX_LEN {
        return Err(ValidationFailure::new(
            FailureKind::OutOfRange,
            format!("name length must be between 1 and {NAME_MAX_LEN}, but got '{name}'"),
        ));
    }
    Ok(())
}

/// Strip the separators people type into phone numbers: spaces, dashes,
/// parentheses and a leading "+". The sanitized form is what gets stored.
pub fn sanitize_phone(raw: &str) -> String {
    raw.strip_prefix('+')
        .unwrap_or(raw)
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect()
}

/// A phone number is digits only after sanitization, 11 to 16 digits.
/// Failure messages cite the raw input, not the sanitized form.
pub fn validate_phone(raw: &str) -> Result<(), ValidationFailure> {
    let sanitized = sanitize_phone(raw);
    if !sanitized.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationFailure::new(
            FailureKind::TypeMismatch,
            format!("contact's phone can only contain digits, but got '{raw}'"),
        ));
    }
    if sanitized.len() < PHONE_LEN.0 || sanitized.len() > PHONE_LEN.1 {
        return Err(ValidationFailure::new(
            FailureKind::OutOfRange,
            format!(
                "contact's phone must be between {} and {} numbers, but got '{raw}'",
                PHONE_LEN.0, PHONE_LEN.1
            ),
        ));
    }
    Ok(())
}

/// An email is local@domain with exactly one "@" and a dotted domain.
pub fn validate_email(email: &str) -> Result<(), ValidationFailure> {
    if email.matches('@').count() != 1 || !EMAIL_RE.is_match(email) {
        return Err(ValidationFailure::new(
            FailureKind::Malformed,
            format!("invalid '{email}' email address"),
        ));
    }
    Ok(())
}

/// A birthday must be strictly in the past.
pub fn validate_birthday(date: NaiveDate) -> Result<(), ValidationFailure> {
    if date >= Local::now().date_naive() {
        return Err(ValidationFailure::new(
            FailureKind::OutOfRange,
            format!("birthday '{date}' must be in the past"),
        ));
    }
    Ok(())
}

/// A note body must reach the minimum length.
pub fn validate_note(text: &str) -> Result<(), ValidationFailure> {
    if text.chars().count() < NOTE_LEN {
        return Err(ValidationFailure::new(
            FailureKind::OutOfRange,
            format!("note length must be at least {NOTE_LEN}, but got '{text}'"),
        ));
    }
    Ok(())
}

/// Fails with Duplicate when the name is already taken in the book.
/// Used as the pre-check before adding a new contact.
pub fn check_name_in_address_book(book: &AddressBook, name: &str) -> Result<(), ValidationFailure> {
    if book.contains_name(name) {
        return Err(ValidationFailure::new(
            FailureKind::Duplicate,
            format!("the contact '{name}' already exists in the address book"),
        ));
    }
    Ok(())
}

/// Fails with NotFound when the name is absent from the book.
/// Used as the pre-check before editing or deleting a contact.
pub fn check_name_not_in_address_book(
    book: &AddressBook,
    name: &str,
) -> Result<(), ValidationFailure> {
    if !book.contains_name(name) {
        return Err(ValidationFailure::new(
            FailureKind::NotFound,
            format!("the contact '{name}' was not found"),
        ));
    }
    Ok(())
}

/// Fails with NotFound when no note carries the given id.
pub fn check_number_not_in_notes_book(
    book: &NotesBook,
    id: u64,
) -> Result<(), ValidationFailure> {
    if !book.contains_id(id) {
        return Err(ValidationFailure::new(
            FailureKind::NotFound,
            format!("the note {id} was not found"),
        ));
    }
    Ok(())
}

/// A sort target must exist and be a directory.
pub fn check_sort_path(path: &Path) -> Result<(), ValidationFailure> {
    if !path.exists() {
        return Err(ValidationFailure::new(
            FailureKind::NotFound,
            format!("the path '{}' does not exist", path.display()),
        ));
    }
    if path.is_file() {
        return Err(ValidationFailure::new(
            FailureKind::Malformed,
            format!("the path '{}' points to a file, not a folder", path.display()),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::address::AddressBook;
    use crate::book::notes::NotesBook;
    use crate::model::{ContactRecord, Name, NoteRecord};
    use chrono::Duration;

    #[test]
    fn rejects_email_with_two_ats() {
        let failure = validate_email("test@sasha@gmail.com").unwrap_err();
        assert_eq!(failure.kind, FailureKind::Malformed);
        assert_eq!(failure.message, "invalid 'test@sasha@gmail.com' email address");
    }

    #[test]
    fn accepts_plain_email() {
        assert!(validate_email("john.doe@example.com").is_ok());
        assert!(validate_email("test_sasha@gmail.com").is_ok());
    }

    #[test]
    fn rejects_phone_with_letters() {
        let failure = validate_phone("+plus380951234567").unwrap_err();
        assert_eq!(failure.kind, FailureKind::TypeMismatch);
        assert_eq!(
            failure.message,
            "contact's phone can only contain digits, but got '+plus380951234567'"
        );
    }

    #[test]
    fn rejects_phone_outside_length_bounds() {
        let short = validate_phone("3809").unwrap_err();
        assert_eq!(short.kind, FailureKind::OutOfRange);
        assert_eq!(
            short.message,
            "contact's phone must be between 11 and 16 numbers, but got '3809'"
        );

        let long = validate_phone("380951234567123456789").unwrap_err();
        assert_eq!(long.kind, FailureKind::OutOfRange);
    }

    #[test]
    fn accepts_valid_phone() {
        assert!(validate_phone("380631234567").is_ok());
    }

    #[test]
    fn sanitizes_separators_before_checking() {
        assert_eq!(sanitize_phone("+38(095)123-45-67"), "380951234567");
        assert!(validate_phone("+38(095)123-45-67").is_ok());
    }

    #[test]
    fn rejects_name_with_non_letters() {
        let failure = validate_name("new_name").unwrap_err();
        assert_eq!(failure.kind, FailureKind::TypeMismatch);
        assert_eq!(
            failure.message,
            "contact's name can only contain letters, but got 'new_name'"
        );
    }

    #[test]
    fn rejects_name_outside_length_bounds() {
        let empty = validate_name("").unwrap_err();
        assert_eq!(empty.kind, FailureKind::OutOfRange);
        assert_eq!(
            empty.message,
            "name length must be between 1 and 49, but got ''"
        );

        let long = validate_name("abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap_err();
        assert_eq!(long.kind, FailureKind::OutOfRange);
        assert!(long.message.contains("name length must be between 1 and 49"));
    }

    #[test]
    fn accepts_valid_name() {
        assert!(validate_name("Alex").is_ok());
    }

    #[test]
    fn rejects_birthday_today_or_later() {
        let tomorrow = Local::now().date_naive() + Duration::days(1);
        let failure = validate_birthday(tomorrow).unwrap_err();
        assert_eq!(failure.kind, FailureKind::OutOfRange);
        assert_eq!(failure.message, format!("birthday '{tomorrow}' must be in the past"));

        let today = Local::now().date_naive();
        assert!(validate_birthday(today).is_err());
    }

    #[test]
    fn accepts_past_birthday() {
        let thirty_years_ago = Local::now().date_naive() - Duration::days(30 * 365);
        assert!(validate_birthday(thirty_years_ago).is_ok());
    }

    #[test]
    fn rejects_empty_note() {
        let failure = validate_note("").unwrap_err();
        assert_eq!(failure.kind, FailureKind::OutOfRange);
    }

    #[test]
    fn duplicate_name_in_address_book() {
        let mut book = AddressBook::new();
        let contact = ContactRecord::new(Name::parse("Alex").unwrap());
        book.add_record(contact).unwrap();

        let failure = check_name_in_address_book(&book, "Alex").unwrap_err();
        assert_eq!(failure.kind, FailureKind::Duplicate);
        assert_eq!(
            failure.message,
            "the contact 'Alex' already exists in the address book"
        );
    }

    #[test]
    fn missing_name_in_address_book() {
        let mut book = AddressBook::new();
        let contact = ContactRecord::new(Name::parse("Alex").unwrap());
        book.add_record(contact).unwrap();

        let failure = check_name_not_in_address_book(&book, "Olya").unwrap_err();
        assert_eq!(failure.kind, FailureKind::NotFound);
        assert_eq!(failure.message, "the contact 'Olya' was not found");
    }

    #[test]
    fn missing_number_in_notes_book() {
        let mut book = NotesBook::new();
        book.add_record(NoteRecord::new("note text"));

        let failure = check_number_not_in_notes_book(&book, 2).unwrap_err();
        assert_eq!(failure.kind, FailureKind::NotFound);
        assert_eq!(failure.message, "the note 2 was not found");
    }

    #[test]
    fn sort_path_must_exist_and_be_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(check_sort_path(dir.path()).is_ok());

        let missing = dir.path().join("nope");
        assert_eq!(
            check_sort_path(&missing).unwrap_err().kind,
            FailureKind::NotFound
        );

        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();
        assert_eq!(
            check_sort_path(&file).unwrap_err().kind,
            FailureKind::Malformed
        );
    }
}
