//! Contact form model, validation and submission errors.
use std::fmt;

use thiserror::Error;

use crate::constants::{
    HIDDEN_SUBJECT, HIDDEN_SUBJECT_FIELD, MSG_MISSING_FIELDS, MSG_NETWORK_ERROR, MSG_SUBMIT_ERROR,
};

/// Topics offered by the subject selector, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Subject {
    #[default]
    Consulta,
    Presupuesto,
    Demostracion,
    Otro,
}

impl Subject {
    pub const ALL: [Self; 4] = [
        Self::Consulta,
        Self::Presupuesto,
        Self::Demostracion,
        Self::Otro,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Consulta => "Consulta",
            Self::Presupuesto => "Presupuesto",
            Self::Demostracion => "Demostración",
            Self::Otro => "Otro",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Email,
    Message,
}

impl RequiredField {
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// Required fields that were blank after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required contact fields: {}", field_list(.missing))]
pub struct ValidationError {
    pub missing: Vec<RequiredField>,
}

fn field_list(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|f| f.field_name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    /// Text shown to the visitor in the blocking alert.
    #[must_use]
    pub const fn alert_text(&self) -> &'static str {
        MSG_MISSING_FIELDS
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Form endpoint rejected submission (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },
}

impl SubmitError {
    #[must_use]
    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            body: body.into(),
        }
    }

    /// Text shown to the visitor in the blocking alert.
    #[must_use]
    pub const fn alert_text(&self) -> &'static str {
        match self {
            Self::Network(_) => MSG_NETWORK_ERROR,
            Self::Rejected { .. } => MSG_SUBMIT_ERROR,
        }
    }
}

/// Values as typed into the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// # Errors
    /// Returns every required field that is empty once whitespace is trimmed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<RequiredField> = [
            (RequiredField::Name, &self.name),
            (RequiredField::Email, &self.email),
            (RequiredField::Message, &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }

    /// Multipart fields in form order, including the hidden mail subject.
    ///
    /// Values are sent as typed; trimming only applies to validation.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("subject", self.subject.as_str()),
            ("message", self.message.as_str()),
            (HIDDEN_SUBJECT_FIELD, HIDDEN_SUBJECT),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: String::from("Ada"),
            email: String::from("ada@example.test"),
            subject: Subject::Presupuesto.to_string(),
            message: String::from("Hola"),
        }
    }

    #[test]
    fn filled_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let form = ContactForm {
            name: String::from("   "),
            message: String::from("\n\t"),
            ..filled()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(
            err.missing,
            vec![RequiredField::Name, RequiredField::Message]
        );
        assert_eq!(err.alert_text(), MSG_MISSING_FIELDS);
        assert!(err.to_string().contains("name, message"));
    }

    #[test]
    fn subject_is_optional() {
        let form = ContactForm {
            subject: String::new(),
            ..filled()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn fields_keep_raw_values_and_hidden_subject() {
        let form = ContactForm {
            name: String::from(" Ada "),
            ..filled()
        };
        let fields = form.fields();
        assert_eq!(fields[0], ("name", " Ada "));
        assert_eq!(fields[2], ("subject", "Presupuesto"));
        assert_eq!(fields[4], ("_subject", "Nuevo mensaje desde sitio"));
    }

    #[test]
    fn rejection_keeps_status_and_body() {
        let err = SubmitError::rejected(500, "boom");
        assert_eq!(
            err,
            SubmitError::Rejected {
                status: 500,
                body: String::from("boom")
            }
        );
        assert_eq!(err.alert_text(), MSG_SUBMIT_ERROR);
        assert!(err.to_string().contains("HTTP 500"));
    }

    #[test]
    fn network_error_has_its_own_alert() {
        let err = SubmitError::Network(String::from("TypeError: Failed to fetch"));
        assert_eq!(err.alert_text(), MSG_NETWORK_ERROR);
    }

    #[test]
    fn subject_labels_follow_selector_order() {
        let labels: Vec<_> = Subject::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            ["Consulta", "Presupuesto", "Demostración", "Otro"]
        );
    }
}
