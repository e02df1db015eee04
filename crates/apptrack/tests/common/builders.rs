//! Builders for application drafts used across integration tests.

#![allow(dead_code)]

use apptrack::ApplicationDraft;
use chrono::NaiveDate;

/// Builder for `ApplicationDraft` instances.
pub struct DraftBuilder {
    draft: ApplicationDraft,
}

impl DraftBuilder {
    /// A complete, valid draft with status Applied.
    pub fn new() -> Self {
        Self {
            draft: ApplicationDraft {
                company_name: Some("Acme Corp".to_string()),
                role_title: Some("Software Engineering Intern".to_string()),
                date_applied: Some("2025-01-01".to_string()),
                ..ApplicationDraft::applied()
            },
        }
    }

    /// A complete, valid draft with status Planned.
    pub fn planned() -> Self {
        let mut builder = Self::new();
        builder.draft.status = ApplicationDraft::planned().status;
        builder
    }

    pub fn company(mut self, name: &str) -> Self {
        self.draft.company_name = Some(name.to_string());
        self
    }

    pub fn role(mut self, title: &str) -> Self {
        self.draft.role_title = Some(title.to_string());
        self
    }

    pub fn applied_on(mut self, date: &str) -> Self {
        self.draft.date_applied = Some(date.to_string());
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.draft.status = Some(status.to_string());
        self
    }

    pub fn follow_up(mut self, date: &str) -> Self {
        self.draft.follow_up_date = Some(date.to_string());
        self
    }

    pub fn link(mut self, url: &str) -> Self {
        self.draft.application_link = Some(url.to_string());
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.draft.location = Some(location.to_string());
        self
    }

    pub fn notes(mut self, notes: &str) -> Self {
        self.draft.notes = Some(notes.to_string());
        self
    }

    /// Clears a field entirely, as if the form left it out.
    pub fn without_company(mut self) -> Self {
        self.draft.company_name = None;
        self
    }

    pub fn without_status(mut self) -> Self {
        self.draft.status = None;
        self
    }

    pub fn build(self) -> ApplicationDraft {
        self.draft
    }
}

impl Default for DraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for a calendar date in tests.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}
