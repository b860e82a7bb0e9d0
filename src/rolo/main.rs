use chrono::NaiveDate;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use rolo::api::RoloApi;
use rolo::commands::{CmdMessage, MessageLevel};
use rolo::config::RoloConfig;
use rolo::error::{FailureKind, Result, RoloError, ValidationFailure};
use rolo::model::{Assignment, ContactRecord, Email, Name, NoteRecord, Phone};
use rolo::render;
use rolo::store::fs::FileStore;
use rolo::store::BookStore;
use rolo::validation::validate_birthday;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands, ContactCmd, NoteCmd};

/// Caps on sub-entries per contact. These are form-level limits, not
/// invariants of the books themselves.
const PHONE_CAP: usize = 3;
const EMAIL_CAP: usize = 2;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = resolve_data_dir()?;
    let config = RoloConfig::load(&data_dir)?;
    let store = FileStore::new(data_dir);
    let mut api = RoloApi::open(store)?;

    match cli.command {
        Commands::Contact(cmd) => handle_contact(&mut api, &config, cmd),
        Commands::Note(cmd) => handle_note(&mut api, cmd),
    }
}

fn resolve_data_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("ROLO_HOME") {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "rolo", "rolo")
        .ok_or_else(|| RoloError::Store("could not determine a data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn handle_contact<S: BookStore>(
    api: &mut RoloApi<S>,
    config: &RoloConfig,
    cmd: ContactCmd,
) -> Result<()> {
    match cmd {
        ContactCmd::Add {
            name,
            phone,
            email,
            birthday,
        } => {
            let record = build_contact(&name, &phone, &email, birthday.as_deref())?;
            let result = api.add_contact(record)?;
            print_messages(&result.messages);
        }
        ContactCmd::Update {
            name,
            rename,
            phone,
            email,
            birthday,
        } => {
            let new_name = rename.as_deref().unwrap_or(&name);
            let record = build_contact(new_name, &phone, &email, birthday.as_deref())?;
            let result = api.update_contact(&name, record)?;
            print_messages(&result.messages);
        }
        ContactCmd::Delete { name } => {
            let result = api.delete_contact(&name)?;
            print_messages(&result.messages);
        }
        ContactCmd::List => {
            if api.contacts().is_empty() {
                println!("No contacts yet.");
            } else {
                print!("{}", render::contacts_table(api.contacts(), &config.date_format));
            }
        }
    }
    Ok(())
}

fn handle_note<S: BookStore>(api: &mut RoloApi<S>, cmd: NoteCmd) -> Result<()> {
    match cmd {
        NoteCmd::Add { text, name } => {
            let mut record = NoteRecord::new(text);
            if let Some(name) = name {
                record.add_note_name(name);
            }
            let result = api.add_note(record)?;
            print_messages(&result.messages);
        }
        NoteCmd::Update { id, text, name } => {
            let mut record = NoteRecord::new(text);
            if let Some(name) = name {
                record.add_note_name(name);
            }
            let result = api.update_note(id, record)?;
            print_messages(&result.messages);
        }
        NoteCmd::Delete { id } => {
            let result = api.delete_note(id)?;
            print_messages(&result.messages);
        }
        NoteCmd::List => {
            if api.notes().is_empty() {
                println!("No notes yet.");
            } else {
                print!("{}", render::notes_table(api.notes()));
            }
        }
    }
    Ok(())
}

/// Builds a fully-validated contact from raw CLI strings. Everything is
/// checked here, before any book is touched, so a failing edit can never
/// cost the user the old record.
fn build_contact(
    name: &str,
    phones: &[String],
    emails: &[String],
    birthday: Option<&str>,
) -> Result<ContactRecord> {
    if phones.len() > PHONE_CAP {
        return Err(ValidationFailure::new(
            FailureKind::OutOfRange,
            format!("a contact can have at most {PHONE_CAP} phone numbers"),
        )
        .into());
    }
    if emails.len() > EMAIL_CAP {
        return Err(ValidationFailure::new(
            FailureKind::OutOfRange,
            format!("a contact can have at most {EMAIL_CAP} email addresses"),
        )
        .into());
    }

    let mut record = ContactRecord::new(Name::parse(name)?);

    for entry in phones {
        let (number, label) = split_label(entry);
        let assignment = label.map(Assignment::parse_for_phone).transpose()?;
        record.add_phone_number(Phone::parse(number)?, assignment);
    }
    for entry in emails {
        let (address, label) = split_label(entry);
        let assignment = label.map(Assignment::parse_for_email).transpose()?;
        record.add_email(Email::parse(address)?, assignment);
    }
    if let Some(raw) = birthday {
        record.add_birthday(parse_birthday(raw)?);
    }

    Ok(record)
}

/// Splits "value:label" into its parts; an entry without ":" has no label.
fn split_label(entry: &str) -> (&str, Option<&str>) {
    match entry.split_once(':') {
        Some((value, label)) => (value, Some(label)),
        None => (entry, None),
    }
}

/// An unparsable date is a boundary-level failure; the core validation
/// rule only ever sees a real calendar date.
fn parse_birthday(raw: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        ValidationFailure::new(
            FailureKind::Malformed,
            format!("invalid date '{raw}', expected YYYY-MM-DD"),
        )
    })?;
    validate_birthday(date)?;
    Ok(date)
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}
