use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::macros::nutype_string;

/// Deliberately permissive: one `@`, a dot somewhere after it and no
/// whitespace. Addresses rejected or accepted by this pattern are not
/// necessarily (in)valid according to RFC 5322.
pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A contact message as entered into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub text: String,
}

impl ContactMessage {
    pub const NAME_MIN_LEN: usize = 2;
    pub const TEXT_MIN_LEN: usize = 6;

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Text => &self.text,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Text => &mut self.text,
        };
        *slot = value;
    }

    /// Checks every field against its constraint.
    ///
    /// Lengths are counted in characters after trimming surrounding
    /// whitespace.
    pub fn validate(&self) -> ValidationResult {
        ContactField::ALL
            .into_iter()
            .filter_map(|field| self.check(field).map(|err| (field, err)))
            .collect()
    }

    fn check(&self, field: ContactField) -> Option<ContactFieldError> {
        let value = self.get(field);
        match field {
            ContactField::Name => (trimmed_len(value) < Self::NAME_MIN_LEN)
                .then_some(ContactFieldError::NameTooShort),
            ContactField::Email => {
                (!CONTACT_EMAIL_REGEX.is_match(value)).then_some(ContactFieldError::InvalidEmail)
            }
            ContactField::Text => (trimmed_len(value) < Self::TEXT_MIN_LEN)
                .then_some(ContactFieldError::TextTooShort),
        }
    }
}

fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Text,
}

impl ContactField {
    /// All fields in the order they appear in the form.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Text];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Text => "text",
        }
    }

    /// Human readable label of the form input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Text => "Message",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ContactFieldError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must be at least 6 characters")]
    TextTooShort,
}

/// Per-field outcome of [`ContactMessage::validate`].
///
/// A field without an entry passed its check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult(BTreeMap<ContactField, ContactFieldError>);

impl ValidationResult {
    pub fn error(&self, field: ContactField) -> Option<ContactFieldError> {
        self.0.get(&field).copied()
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over all fields in form order together with their error.
    pub fn fields(&self) -> impl Iterator<Item = (ContactField, Option<ContactFieldError>)> + '_ {
        ContactField::ALL
            .into_iter()
            .map(|field| (field, self.error(field)))
    }

    /// Iterates over the failed fields only.
    pub fn errors(&self) -> impl Iterator<Item = (ContactField, ContactFieldError)> + '_ {
        self.0.iter().map(|(&field, &err)| (field, err))
    }
}

impl FromIterator<(ContactField, ContactFieldError)> for ValidationResult {
    fn from_iter<T: IntoIterator<Item = (ContactField, ContactFieldError)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A contact message accepted by the contact endpoint.
///
/// The endpoint only checks presence, so every field is merely non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactSubmissionName,
    pub email: ContactSubmissionEmail,
    pub text: ContactSubmissionText,
}

nutype_string!(ContactSubmissionName(validate(not_empty)));
nutype_string!(ContactSubmissionEmail(validate(not_empty)));
nutype_string!(ContactSubmissionText(validate(not_empty)));
