//! Read-only queries and summaries over a snapshot of application records.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::application::{ApplicationRecord, Status};
use crate::follow_up::is_due;

/// Which records a query looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Everything except archived records.
    #[default]
    Active,
    /// Archived records included.
    All,
}

impl Scope {
    fn admits(self, record: &ApplicationRecord) -> bool {
        match self {
            Scope::Active => !record.archived,
            Scope::All => true,
        }
    }
}

/// A view over a borrowed snapshot of records.
#[derive(Debug, Clone, Copy)]
pub struct ApplicationView<'a> {
    records: &'a [ApplicationRecord],
}

impl<'a> ApplicationView<'a> {
    pub fn new(records: &'a [ApplicationRecord]) -> Self {
        Self { records }
    }

    /// Case-insensitive substring search over company name and role title,
    /// excluding archived records.
    ///
    /// Newest applications come first; ties are ordered by id.
    pub fn search(&self, text: &str) -> Vec<&'a ApplicationRecord> {
        self.search_in(text, Scope::Active)
    }

    pub fn search_in(&self, text: &str, scope: Scope) -> Vec<&'a ApplicationRecord> {
        let needle = text.trim().to_lowercase();
        let mut found: Vec<&ApplicationRecord> = self
            .records
            .iter()
            .filter(|r| scope.admits(r))
            .filter(|r| {
                r.company_name.to_lowercase().contains(&needle)
                    || r.role_title.to_lowercase().contains(&needle)
            })
            .collect();
        found.sort_by_key(|r| (Reverse(r.date_applied), r.id));
        found
    }

    /// Records with the given status, newest id first.
    ///
    /// Without a status, returns every non-archived record. Archived records
    /// only show up when asked for with `Some(Status::Archived)`.
    pub fn filter(&self, status: Option<Status>) -> Vec<&'a ApplicationRecord> {
        let mut found: Vec<&ApplicationRecord> = self
            .records
            .iter()
            .filter(|r| match status {
                Some(status) => r.status == status,
                None => !r.archived,
            })
            .collect();
        found.sort_by_key(|r| Reverse(r.id));
        found
    }

    /// Records due for a follow-up, most overdue first.
    pub fn due_follow_ups(&self, as_of: NaiveDate) -> Vec<&'a ApplicationRecord> {
        let mut due: Vec<&ApplicationRecord> =
            self.records.iter().filter(|r| is_due(r, as_of)).collect();
        due.sort_by_key(|r| (r.follow_up_date, r.id));
        due
    }

    /// Number of records per status. Every status is present.
    pub fn summary_counts(&self, scope: Scope) -> StatusCounts {
        let mut counts = StatusCounts::zeroed();
        for record in self.records.iter().filter(|r| scope.admits(r)) {
            counts.increment(record.status);
        }
        counts
    }
}

/// Per-status record counts with a stable key set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StatusCounts(BTreeMap<Status, usize>);

impl StatusCounts {
    fn zeroed() -> Self {
        Self(Status::ALL.into_iter().map(|s| (s, 0)).collect())
    }

    fn increment(&mut self, status: Status) {
        *self.0.entry(status).or_insert(0) += 1;
    }

    pub fn get(&self, status: Status) -> usize {
        self.0.get(&status).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Counts in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (Status, usize)> + '_ {
        self.0.iter().map(|(status, count)| (*status, *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationId, NewApplication};
    use crate::follow_up::compute_follow_up;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(id: i64, company: &str, role: &str, applied: NaiveDate, status: Status) -> ApplicationRecord {
        NewApplication {
            company_name: company.to_string(),
            role_title: role.to_string(),
            date_applied: applied,
            status,
            follow_up_date: compute_follow_up(applied, None).unwrap(),
            follow_up_overridden: false,
            application_link: None,
            location: None,
            notes: None,
            archived: status == Status::Archived,
        }
        .into_record(ApplicationId(id))
    }

    fn ids(records: &[&ApplicationRecord]) -> Vec<i64> {
        records.iter().map(|r| r.id.0).collect()
    }

    fn sample() -> Vec<ApplicationRecord> {
        vec![
            record(1, "Acme Corp", "Backend Intern", date(2025, 1, 1), Status::Applied),
            record(2, "ACME Inc", "Data Analyst", date(2025, 1, 5), Status::Interviewing),
            record(3, "Globex", "Platform Engineer", date(2025, 1, 5), Status::Planned),
            record(4, "Initech", "QA Intern", date(2025, 1, 3), Status::Offer),
            record(5, "Acme Archive", "Old Role", date(2024, 6, 1), Status::Archived),
        ]
    }

    #[test]
    fn test_search_case_insensitive() {
        let records = sample();
        let view = ApplicationView::new(&records);
        assert_eq!(ids(&view.search("acme")), vec![2, 1]);
    }

    #[test]
    fn test_search_matches_role_title() {
        let records = sample();
        let view = ApplicationView::new(&records);
        assert_eq!(ids(&view.search("INTERN")), vec![4, 1]);
    }

    #[test]
    fn test_search_ties_broken_by_id() {
        let records = sample();
        let view = ApplicationView::new(&records);
        assert_eq!(ids(&view.search("")), vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_search_no_match_is_empty() {
        let records = sample();
        let view = ApplicationView::new(&records);
        assert!(view.search("umbrella").is_empty());
    }

    #[test]
    fn test_search_all_scope_includes_archived() {
        let records = sample();
        let view = ApplicationView::new(&records);
        assert_eq!(ids(&view.search_in("acme", Scope::All)), vec![2, 1, 5]);
    }

    #[test]
    fn test_filter_by_status() {
        let records = sample();
        let view = ApplicationView::new(&records);
        assert_eq!(ids(&view.filter(Some(Status::Offer))), vec![4]);
        assert!(view.filter(Some(Status::Rejected)).is_empty());
    }

    #[test]
    fn test_filter_default_excludes_archived() {
        let records = sample();
        let view = ApplicationView::new(&records);
        assert_eq!(ids(&view.filter(None)), vec![4, 3, 2, 1]);
        assert_eq!(ids(&view.filter(Some(Status::Archived))), vec![5]);
    }

    #[test]
    fn test_due_follow_ups_ordering() {
        let records = sample();
        let view = ApplicationView::new(&records);
        // Follow-ups: #1 Jan 11, #2 Jan 15, #3 Jan 15, #4 is an offer.
        assert_eq!(ids(&view.due_follow_ups(date(2025, 1, 10))), Vec::<i64>::new());
        assert_eq!(ids(&view.due_follow_ups(date(2025, 1, 11))), vec![1]);
        assert_eq!(ids(&view.due_follow_ups(date(2025, 3, 1))), vec![1, 2, 3]);
    }

    #[test]
    fn test_summary_counts_active() {
        let records = sample();
        let counts = ApplicationView::new(&records).summary_counts(Scope::Active);
        assert_eq!(counts.iter().count(), Status::ALL.len());
        assert_eq!(counts.get(Status::Applied), 1);
        assert_eq!(counts.get(Status::Archived), 0);
        assert_eq!(counts.get(Status::Rejected), 0);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_summary_counts_all() {
        let records = sample();
        let counts = ApplicationView::new(&records).summary_counts(Scope::All);
        assert_eq!(counts.get(Status::Archived), 1);
        assert_eq!(counts.total(), records.len());
    }

    #[test]
    fn test_summary_counts_empty_snapshot() {
        let counts = ApplicationView::new(&[]).summary_counts(Scope::All);
        assert_eq!(counts.total(), 0);
        assert!(counts.iter().all(|(_, count)| count == 0));
        assert_eq!(counts.iter().map(|(s, _)| s).collect::<Vec<_>>(), Status::ALL.to_vec());
    }

    #[test]
    fn test_summary_counts_serialize_every_key() {
        let counts = ApplicationView::new(&[]).summary_counts(Scope::Active);
        let json = serde_json::to_value(&counts).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 7);
        assert_eq!(json["follow_up_needed"], 0);
    }
}
