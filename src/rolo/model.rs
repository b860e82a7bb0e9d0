//! Core data types: the entity value objects, the tagged sub-entry
//! wrapper, and the two record kinds.
//!
//! Entities are constructed only through validating `parse` factories, so
//! an instance in hand is known-good. Records are created around their
//! identity and then populated by `add_*` calls; each call appends (or
//! overwrites, for the single-slot fields), never replaces the list.

use crate::error::{FailureKind, ValidationFailure};
use crate::validation;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact's name. Letters only, 1 to 49 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn parse(raw: &str) -> Result<Self, ValidationFailure> {
        validation::validate_name(raw)?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// f.pad, not write_str, so width/alignment specs apply in table rows.
impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// A phone number, stored in sanitized (digits-only) form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Sanitizes, validates, and stores the sanitized digits.
    pub fn parse(raw: &str) -> Result<Self, ValidationFailure> {
        validation::validate_phone(raw)?;
        Ok(Self(validation::sanitize_phone(raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// An email address in local@domain form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, ValidationFailure> {
        validation::validate_email(raw)?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Category tag attached to a sub-entry. Phones admit all three labels,
/// emails only `Home` and `Work`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Assignment {
    Home,
    Mobile,
    Work,
}

impl Assignment {
    pub fn parse_for_phone(raw: &str) -> Result<Self, ValidationFailure> {
        match raw {
            "home" => Ok(Self::Home),
            "mobile" => Ok(Self::Mobile),
            "work" => Ok(Self::Work),
            _ => Err(ValidationFailure::new(
                FailureKind::TypeMismatch,
                format!("phone label must be one of home, mobile, work, but got '{raw}'"),
            )),
        }
    }

    pub fn parse_for_email(raw: &str) -> Result<Self, ValidationFailure> {
        match raw {
            "home" => Ok(Self::Home),
            "work" => Ok(Self::Work),
            _ => Err(ValidationFailure::new(
                FailureKind::TypeMismatch,
                format!("email label must be one of home, work, but got '{raw}'"),
            )),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Home => "home",
            Self::Mobile => "mobile",
            Self::Work => "work",
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sub-entry value paired with an optional assignment label.
///
/// Equality is defined on the wrapped value only; two entries with the
/// same phone but different labels compare equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tagged<T> {
    pub value: T,
    pub assignment: Option<Assignment>,
}

impl<T> Tagged<T> {
    pub fn new(value: T, assignment: Option<Assignment>) -> Self {
        Self { value, assignment }
    }
}

impl<T: PartialEq> PartialEq for Tagged<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Tagged<T> {}

impl<T: fmt::Display> fmt::Display for Tagged<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.assignment {
            Some(label) => write!(f, "{}({})", self.value, label),
            None => write!(f, "{}", self.value),
        }
    }
}

/// A contact: one name, up to a handful of tagged phones and emails, and
/// an optional birthday. Keyed by name in its address book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: Name,
    pub phones: Vec<Tagged<Phone>>,
    pub emails: Vec<Tagged<Email>>,
    pub birthday: Option<NaiveDate>,
}

impl ContactRecord {
    /// Creates an empty record carrying only its identity.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            emails: Vec::new(),
            birthday: None,
        }
    }

    /// Appends a phone. Duplicates against existing entries are not
    /// checked here; that is a presentation-layer concern.
    pub fn add_phone_number(&mut self, phone: Phone, assignment: Option<Assignment>) {
        self.phones.push(Tagged::new(phone, assignment));
    }

    /// Appends an email, same pattern as phones.
    pub fn add_email(&mut self, email: Email, assignment: Option<Assignment>) {
        self.emails.push(Tagged::new(email, assignment));
    }

    /// Sets (overwrites) the birthday.
    pub fn add_birthday(&mut self, date: NaiveDate) {
        self.birthday = Some(date);
    }
}

/// A note: a body plus an optional display name. Keyed by an
/// auto-assigned integer id in its notes book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub text: String,
    pub name: Option<String>,
}

impl NoteRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            name: None,
        }
    }

    /// Sets (overwrites) the display name.
    pub fn add_note_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }
}
