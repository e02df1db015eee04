//! Field validation for application create and edit forms.
//!
//! Validation never stops at the first problem: every applicable error is
//! collected so a form can highlight all offending fields in one pass.

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use crate::application::{parse_date, Status};

/// Raw user input for an application, as submitted by a form.
///
/// Every field is optional text so that missing and malformed input can be
/// reported instead of rejected at the type level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub company_name: Option<String>,
    pub role_title: Option<String>,
    pub date_applied: Option<String>,
    pub status: Option<String>,
    /// Manual follow-up date. Absent means "derive it".
    pub follow_up_date: Option<String>,
    pub application_link: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

impl ApplicationDraft {
    /// A draft for an application that has not been submitted yet.
    pub fn planned() -> Self {
        Self {
            status: Some(Status::Planned.label().to_string()),
            ..Default::default()
        }
    }

    /// A draft recorded at submission time.
    pub fn applied() -> Self {
        Self {
            status: Some(Status::Applied.label().to_string()),
            ..Default::default()
        }
    }
}

/// Fields that validation can report on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CompanyName,
    RoleTitle,
    DateApplied,
    Status,
    FollowUpDate,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::CompanyName => "company_name",
            Field::RoleTitle => "role_title",
            Field::DateApplied => "date_applied",
            Field::Status => "status",
            Field::FollowUpDate => "follow_up_date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rejected field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    RequiredFieldMissing(Field),

    #[error("{field} must be a date in YYYY-MM-DD format (got '{value}')")]
    InvalidDateFormat { field: Field, value: String },

    #[error("Status must be one of the allowed categories (got '{0}')")]
    InvalidStatus(String),

    #[error("follow_up_date {follow_up} is earlier than date_applied {applied}")]
    FollowUpBeforeApplied {
        follow_up: NaiveDate,
        applied: NaiveDate,
    },
}

impl ValidationError {
    /// The field the error should be shown next to.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::RequiredFieldMissing(field) => *field,
            ValidationError::InvalidDateFormat { field, .. } => *field,
            ValidationError::InvalidStatus(_) => Field::Status,
            ValidationError::FollowUpBeforeApplied { .. } => Field::FollowUpDate,
        }
    }
}

/// Non-empty set of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Errors reported against `field`.
    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &ValidationError> {
        self.0.iter().filter(move |e| e.field() == field)
    }

    pub fn contains(&self, error: &ValidationError) -> bool {
        self.0.contains(error)
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Input that passed every field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedApplication {
    pub company_name: String,
    pub role_title: String,
    pub date_applied: NaiveDate,
    pub status: Status,
    pub follow_up_override: Option<NaiveDate>,
    pub application_link: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

/// Validates a draft, collecting every problem found.
pub fn validate(draft: &ApplicationDraft) -> Result<ValidatedApplication, ValidationErrors> {
    let mut validator = Validator::default();

    let company_name = validator.required_text(Field::CompanyName, &draft.company_name);
    let role_title = validator.required_text(Field::RoleTitle, &draft.role_title);
    let date_applied = validator
        .required_text(Field::DateApplied, &draft.date_applied)
        .and_then(|raw| validator.date(Field::DateApplied, &raw));
    let status = validator
        .required_text(Field::Status, &draft.status)
        .and_then(|raw| validator.status(&raw));
    let follow_up_override = optional_text(&draft.follow_up_date)
        .and_then(|raw| validator.date(Field::FollowUpDate, &raw));

    if let (Some(follow_up), Some(applied)) = (follow_up_override, date_applied) {
        if follow_up < applied {
            validator
                .errors
                .push(ValidationError::FollowUpBeforeApplied { follow_up, applied });
        }
    }

    match (company_name, role_title, date_applied, status) {
        (Some(company_name), Some(role_title), Some(date_applied), Some(status))
            if validator.errors.is_empty() =>
        {
            Ok(ValidatedApplication {
                company_name,
                role_title,
                date_applied,
                status,
                follow_up_override,
                application_link: optional_text(&draft.application_link),
                location: optional_text(&draft.location),
                notes: optional_text(&draft.notes),
            })
        }
        _ => Err(ValidationErrors(validator.errors)),
    }
}

/// Trims optional text, treating blank input as absent.
pub(crate) fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[derive(Default)]
struct Validator {
    errors: Vec<ValidationError>,
}

impl Validator {
    fn required_text(&mut self, field: Field, value: &Option<String>) -> Option<String> {
        let text = optional_text(value);
        if text.is_none() {
            self.errors.push(ValidationError::RequiredFieldMissing(field));
        }
        text
    }

    fn date(&mut self, field: Field, raw: &str) -> Option<NaiveDate> {
        let date = parse_date(raw);
        if date.is_none() {
            self.errors.push(ValidationError::InvalidDateFormat {
                field,
                value: raw.to_string(),
            });
        }
        date
    }

    fn status(&mut self, raw: &str) -> Option<Status> {
        let status = Status::parse(raw);
        if status.is_none() {
            self.errors.push(ValidationError::InvalidStatus(raw.to_string()));
        }
        status
    }
}
