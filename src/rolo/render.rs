//! Tabular views of the two books.
//!
//! Rendering is presentation glue: it reads the books through their
//! public iteration contract and produces plain strings. Absent fields
//! show as `-`, labeled sub-entries as `value(label)`.

use crate::book::address::AddressBook;
use crate::book::notes::NotesBook;
use chrono::{Datelike, NaiveDate};
use std::fmt::Display;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Date format for the birthday column.
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";

const NOTE_COL_WIDTH: usize = 68;

/// Renders the whole address book as a table, one row per contact in
/// insertion order.
pub fn contacts_table(book: &AddressBook, date_format: &str) -> String {
    let today = chrono::Local::now().date_naive();
    let mut out = String::new();

    let header = format!(
        "| {:<12} | {:<25} | {:<36} | {:^8} | {:^16} |",
        "Name", "Phone", "Email", "Birthday", "Days to birthday"
    );
    let rule = "-".repeat(header.chars().count());
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&header);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for contact in book.iter() {
        let phones = join_or_dash(&contact.phones);
        let emails = join_or_dash(&contact.emails);
        let birthday = match contact.birthday {
            Some(date) => date.format(date_format).to_string(),
            None => "-".to_string(),
        };
        let days = match contact.birthday {
            Some(date) => days_until_birthday(date, today).to_string(),
            None => "-".to_string(),
        };

        out.push_str(&format!(
            "| {:<12} | {:<25} | {:<36} | {:^8} | {:^16} |\n",
            contact.name, phones, emails, birthday, days
        ));
    }

    out.push_str(&rule);
    out.push('\n');
    out
}

/// Renders the notes book, one row per note in ascending-id order.
pub fn notes_table(book: &NotesBook) -> String {
    let mut out = String::new();

    let header = format!("| {} | {:<21} | {:<68} | ", "#", "Name", "Note");
    let rule = "-".repeat(header.chars().count());
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&header);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for (id, note) in book.iter() {
        let name = note.name.as_deref().unwrap_or("-");
        let text = pad_to_width(&truncate_to_width(&note.text, NOTE_COL_WIDTH), NOTE_COL_WIDTH);
        out.push_str(&format!("| {} | {:<21} | {} | \n", id, name, text));
    }

    out.push_str(&rule);
    out.push('\n');
    out
}

fn join_or_dash<T: Display>(entries: &[T]) -> String {
    if entries.is_empty() {
        return "-".to_string();
    }
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Days from `today` until the next occurrence of the birthday.
/// A Feb 29 birthday falls on Mar 1 in non-leap years.
fn days_until_birthday(birthday: NaiveDate, today: NaiveDate) -> i64 {
    let in_year = |year: i32| {
        birthday
            .with_year(year)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).unwrap())
    };
    let mut next = in_year(today.year());
    if next < today {
        next = in_year(today.year() + 1);
    }
    (next - today).num_days()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Assignment, ContactRecord, Email, Name, NoteRecord, Phone};

    fn sasha() -> ContactRecord {
        ContactRecord::new(Name::parse("sasha").unwrap())
    }

    #[test]
    fn renders_plain_phone_and_email() {
        let mut contact = sasha();
        contact.add_phone_number(Phone::parse("380951234567").unwrap(), None);
        contact.add_email(Email::parse("test_sasha@gmail.com").unwrap(), None);

        let mut book = AddressBook::new();
        book.add_record(contact).unwrap();

        let table = contacts_table(&book, DEFAULT_DATE_FORMAT);
        let expected = "| sasha        | 380951234567              | test_sasha@gmail.com                 |    -     |        -         |";
        assert!(table.contains(expected), "table was:\n{table}");
    }

    #[test]
    fn renders_labeled_phone_and_email() {
        let mut contact = sasha();
        contact.add_phone_number(Phone::parse("380951234567").unwrap(), Some(Assignment::Home));
        contact.add_email(
            Email::parse("test_sasha@gmail.com").unwrap(),
            Some(Assignment::Home),
        );

        let mut book = AddressBook::new();
        book.add_record(contact).unwrap();

        let table = contacts_table(&book, DEFAULT_DATE_FORMAT);
        let expected = "| sasha        | 380951234567(home)        | test_sasha@gmail.com(home)           |    -     |        -         |";
        assert!(table.contains(expected), "table was:\n{table}");
    }

    #[test]
    fn renders_dashes_for_absent_fields() {
        let mut book = AddressBook::new();
        book.add_record(sasha()).unwrap();

        let table = contacts_table(&book, DEFAULT_DATE_FORMAT);
        let expected = "| sasha        | -                         | -                                    |    -     |        -         |";
        assert!(table.contains(expected), "table was:\n{table}");
    }

    #[test]
    fn renders_note_without_name() {
        let mut book = NotesBook::new();
        book.add_record(NoteRecord::new("some text"));

        let table = notes_table(&book);
        let expected = "| 1 | -                     | some text                                                            | ";
        assert!(table.contains(expected), "table was:\n{table}");
    }

    #[test]
    fn renders_note_with_name() {
        let mut book = NotesBook::new();
        let mut note = NoteRecord::new("some text");
        note.add_note_name("name note");
        book.add_record(note);

        let table = notes_table(&book);
        let expected = "| 1 | name note             | some text                                                            | ";
        assert!(table.contains(expected), "table was:\n{table}");
    }

    #[test]
    fn truncates_over_wide_note_text() {
        let mut book = NotesBook::new();
        book.add_record(NoteRecord::new("x".repeat(100)));

        let table = notes_table(&book);
        let row = table.lines().nth(3).unwrap();
        assert!(row.contains('…'));
        assert!(row.width() <= "| 1 | ".len() + 21 + 3 + NOTE_COL_WIDTH + 3);
    }

    #[test]
    fn counts_days_to_the_next_birthday() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();

        let tomorrow_anniv = NaiveDate::from_ymd_opt(1990, 9, 1).unwrap();
        assert_eq!(days_until_birthday(tomorrow_anniv, today), 1);

        let today_anniv = NaiveDate::from_ymd_opt(1990, 8, 31).unwrap();
        assert_eq!(days_until_birthday(today_anniv, today), 0);

        let passed = NaiveDate::from_ymd_opt(1990, 8, 30).unwrap();
        assert_eq!(days_until_birthday(passed, today), 364);
    }
}
