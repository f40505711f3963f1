//! Contact form values and the `mailto:` link they hand off to the mail client.

use std::{fmt, str::FromStr};

use crate::foundation::error::{FolioError, FolioResult};

/// Input names of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl FromStr for FormField {
    type Err = FolioError;

    fn from_str(s: &str) -> FolioResult<Self> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            _ => Err(FolioError::validation(format!("unknown form field '{s}'"))),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    /// Fields that are empty, in form order.
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|&f| self.get(f).is_empty())
            .collect()
    }

    /// Build the hand-off link addressed to `to`.
    ///
    /// Only checks that every field was filled in. The sender's email is collected by the
    /// form but not part of the link.
    pub fn submit(&self, to: &str) -> FolioResult<MailtoLink> {
        if to.trim().is_empty() {
            return Err(FolioError::validation("mailto recipient must be non-empty"));
        }
        let missing = self.missing_fields();
        if let Some(first) = missing.first() {
            return Err(FolioError::validation(format!(
                "contact form field '{}' is required",
                first.as_str()
            )));
        }
        tracing::debug!(to, "contact form handed off to mail client");
        Ok(MailtoLink::new(to, &self.name, &self.message))
    }
}

/// A `mailto:` URL; nothing is sent.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct MailtoLink(String);

impl MailtoLink {
    /// Subject is kept as typed; the body is percent-encoded like `encodeURIComponent`.
    pub fn new(to: &str, name: &str, message: &str) -> Self {
        Self(format!(
            "mailto:{to}?subject=Contact from {name}&body={}",
            encode_component(message)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `urlencoding` escapes `!'()*`, which URI components leave as is.
fn encode_component(s: &str) -> String {
    urlencoding::encode(s)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

#[cfg(test)]
#[path = "../tests/unit/contact.rs"]
mod tests;
