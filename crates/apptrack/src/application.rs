//! Application records and the status enumeration they move through.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Date format used for input and persistence (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date, ignoring surrounding whitespace.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

/// Formats a date the way it is stored.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Store-assigned identifier of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub i64);

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where an application currently stands.
///
/// Declaration order is the order categories are presented in, and the
/// order used by [`crate::query::StatusCounts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Planned,
    Applied,
    FollowUpNeeded,
    Interviewing,
    Offer,
    Rejected,
    Archived,
}

impl Status {
    /// Every status, in presentation order.
    pub const ALL: [Status; 7] = [
        Status::Planned,
        Status::Applied,
        Status::FollowUpNeeded,
        Status::Interviewing,
        Status::Offer,
        Status::Rejected,
        Status::Archived,
    ];

    /// Storage key written to the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Planned => "planned",
            Status::Applied => "applied",
            Status::FollowUpNeeded => "follow_up_needed",
            Status::Interviewing => "interviewing",
            Status::Offer => "offer",
            Status::Rejected => "rejected",
            Status::Archived => "archived",
        }
    }

    /// Human-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Planned => "Planned",
            Status::Applied => "Applied",
            Status::FollowUpNeeded => "Follow-up Needed",
            Status::Interviewing => "Interviewing",
            Status::Offer => "Offer",
            Status::Rejected => "Rejected",
            Status::Archived => "Archived",
        }
    }

    /// Offer, Rejected and Archived end the workflow.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Offer | Status::Rejected | Status::Archived)
    }

    /// Parses a label, variant name or storage key, case-insensitively.
    ///
    /// `"Follow-up Needed"`, `"FollowUpNeeded"` and `"follow_up_needed"`
    /// all resolve to [`Status::FollowUpNeeded`]. Surrounding whitespace is
    /// ignored; any other spelling is rejected.
    pub fn parse(input: &str) -> Option<Status> {
        let input = input.trim();
        Status::ALL.into_iter().find(|status| {
            input.eq_ignore_ascii_case(status.label())
                || input.eq_ignore_ascii_case(status.as_str())
                || input.eq_ignore_ascii_case(&status.as_str().replace('_', ""))
        })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when text does not name a known status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown status '{0}'")]
pub struct ParseStatusError(pub String);

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::parse(s).ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// A tracked job or internship application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub id: ApplicationId,
    pub company_name: String,
    pub role_title: String,
    pub date_applied: NaiveDate,
    pub status: Status,
    /// Next date the application should be checked on.
    pub follow_up_date: NaiveDate,
    /// Whether `follow_up_date` was entered by hand rather than derived.
    #[serde(default)]
    pub follow_up_overridden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub archived: bool,
}

/// A fully resolved application that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub company_name: String,
    pub role_title: String,
    pub date_applied: NaiveDate,
    pub status: Status,
    pub follow_up_date: NaiveDate,
    pub follow_up_overridden: bool,
    pub application_link: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub archived: bool,
}

impl NewApplication {
    /// Attaches the id handed out by a store.
    pub fn into_record(self, id: ApplicationId) -> ApplicationRecord {
        ApplicationRecord {
            id,
            company_name: self.company_name,
            role_title: self.role_title,
            date_applied: self.date_applied,
            status: self.status,
            follow_up_date: self.follow_up_date,
            follow_up_overridden: self.follow_up_overridden,
            application_link: self.application_link,
            location: self.location,
            notes: self.notes,
            archived: self.archived,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_labels_and_keys() {
        assert_eq!(Status::parse("Follow-up Needed"), Some(Status::FollowUpNeeded));
        assert_eq!(Status::parse("FollowUpNeeded"), Some(Status::FollowUpNeeded));
        assert_eq!(Status::parse("follow_up_needed"), Some(Status::FollowUpNeeded));
        assert_eq!(Status::parse("  applied "), Some(Status::Applied));
        assert_eq!(Status::parse("OFFER"), Some(Status::Offer));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Status::parse("Ghosted"), None);
        assert_eq!(Status::parse(""), None);
        assert!("Hired".parse::<Status>().is_err());
        for junk in ["O f-f_e r", "a-p-p-l-i-e-d", "Re Jec Ted", "followup needed", "follow-up_needed"] {
            assert_eq!(Status::parse(junk), None, "'{junk}' should not parse");
        }
    }

    #[test]
    fn test_storage_key_round_trips() {
        for status in Status::ALL {
            assert_eq!(Status::parse(status.as_str()), Some(status));
            assert_eq!(Status::parse(status.label()), Some(status));
        }
    }

    #[test]
    fn test_terminal_states() {
        let terminal: Vec<Status> = Status::ALL.into_iter().filter(|s| s.is_terminal()).collect();
        assert_eq!(terminal, vec![Status::Offer, Status::Rejected, Status::Archived]);
    }

    #[test]
    fn test_parse_date_trims_whitespace() {
        assert_eq!(
            parse_date(" 2026-02-11 "),
            NaiveDate::from_ymd_opt(2026, 2, 11)
        );
        assert_eq!(parse_date("02/11/2026"), None);
        assert_eq!(parse_date("2026-02-30"), None);
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let record = NewApplication {
            company_name: "Acme".to_string(),
            role_title: "Intern".to_string(),
            date_applied: date,
            status: Status::FollowUpNeeded,
            follow_up_date: date,
            follow_up_overridden: false,
            application_link: None,
            location: None,
            notes: None,
            archived: false,
        }
        .into_record(ApplicationId(3));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["companyName"], "Acme");
        assert_eq!(json["status"], "follow_up_needed");
        assert_eq!(json["dateApplied"], "2025-01-01");
        assert!(json.get("notes").is_none());
    }
}
