//! Follow-up date derivation and due-date checks.
//!
//! Nothing in here reads the system clock: the reference date is always
//! passed in by the caller.

use chrono::{Days, NaiveDate};

use crate::application::ApplicationRecord;
use crate::validation::ValidationError;

/// Days between applying and the default follow-up date.
pub const DEFAULT_FOLLOW_UP_DAYS: u32 = 10;

/// How follow-up dates are derived when none is entered by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowUpPolicy {
    offset_days: u32,
}

impl Default for FollowUpPolicy {
    fn default() -> Self {
        Self {
            offset_days: DEFAULT_FOLLOW_UP_DAYS,
        }
    }
}

/// A resolved follow-up date and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowUp {
    pub date: NaiveDate,
    pub overridden: bool,
}

impl FollowUpPolicy {
    pub fn new(offset_days: u32) -> Self {
        Self { offset_days }
    }

    pub fn offset_days(&self) -> u32 {
        self.offset_days
    }

    /// The derived follow-up date for an application date.
    pub fn derive(&self, date_applied: NaiveDate) -> NaiveDate {
        date_applied
            .checked_add_days(Days::new(u64::from(self.offset_days)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Follow-up date for a new application.
    ///
    /// An override earlier than `date_applied` is rejected.
    pub fn compute(
        &self,
        date_applied: NaiveDate,
        manual_override: Option<NaiveDate>,
    ) -> Result<FollowUp, ValidationError> {
        match manual_override {
            Some(date) if date < date_applied => Err(ValidationError::FollowUpBeforeApplied {
                follow_up: date,
                applied: date_applied,
            }),
            Some(date) => Ok(FollowUp {
                date,
                overridden: true,
            }),
            None => Ok(FollowUp {
                date: self.derive(date_applied),
                overridden: false,
            }),
        }
    }

    /// Follow-up date after an edit to `current`.
    ///
    /// A newly entered override always wins. Otherwise an override already
    /// in force is kept, and a derived date is only recalculated when
    /// `date_applied` actually changed.
    pub fn recompute(
        &self,
        current: &ApplicationRecord,
        date_applied: NaiveDate,
        manual_override: Option<NaiveDate>,
    ) -> Result<FollowUp, ValidationError> {
        if manual_override.is_some() {
            return self.compute(date_applied, manual_override);
        }

        if current.follow_up_overridden {
            if current.follow_up_date < date_applied {
                return Err(ValidationError::FollowUpBeforeApplied {
                    follow_up: current.follow_up_date,
                    applied: date_applied,
                });
            }
            return Ok(FollowUp {
                date: current.follow_up_date,
                overridden: true,
            });
        }

        if date_applied != current.date_applied {
            return self.compute(date_applied, None);
        }

        Ok(FollowUp {
            date: current.follow_up_date,
            overridden: false,
        })
    }
}

/// Default follow-up date: `date_applied` plus ten days, unless overridden.
pub fn compute_follow_up(
    date_applied: NaiveDate,
    manual_override: Option<NaiveDate>,
) -> Result<NaiveDate, ValidationError> {
    FollowUpPolicy::default()
        .compute(date_applied, manual_override)
        .map(|follow_up| follow_up.date)
}

/// Whether the record needs attention as of `as_of`.
///
/// Terminal statuses are never due.
pub fn is_due(record: &ApplicationRecord, as_of: NaiveDate) -> bool {
    !record.status.is_terminal() && record.follow_up_date <= as_of
}

/// Days past the follow-up date, or `None` if the record is not due.
/// A record whose follow-up date is today is due with zero days overdue.
pub fn days_overdue(record: &ApplicationRecord, as_of: NaiveDate) -> Option<i64> {
    is_due(record, as_of).then(|| (as_of - record.follow_up_date).num_days())
}
