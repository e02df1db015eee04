//! The tracker: the single entry point a user interface talks to.
//!
//! Writes flow through validation, the status workflow and the follow-up
//! policy before reaching the store. Reads take a snapshot of the store and
//! hand it to [`ApplicationView`].

use chrono::NaiveDate;
use tracing::{debug, info, info_span};

use crate::application::{ApplicationId, ApplicationRecord, NewApplication, Status};
use crate::config::TrackerConfig;
use crate::error::{ConfigError, Result};
use crate::follow_up::FollowUpPolicy;
use crate::query::{ApplicationView, Scope, StatusCounts};
use crate::store::{RecordStore, SqliteStore};
use crate::validation::{self, ApplicationDraft, ValidatedApplication, ValidationErrors};
use crate::workflow::{self, Transition};

#[derive(Debug)]
pub struct Tracker<S> {
    store: S,
    policy: FollowUpPolicy,
}

impl Tracker<SqliteStore> {
    /// Opens the SQLite file named by the configuration.
    pub fn open(config: &TrackerConfig) -> Result<Self> {
        let path = config
            .resolved_database_path()
            .ok_or_else(|| ConfigError::Validation {
                message: "Could not determine a home directory; set database_path".to_string(),
            })?;
        let store = SqliteStore::open(&path)?;
        Ok(Self::with_policy(store, config.follow_up_policy()))
    }
}

impl<S: RecordStore> Tracker<S> {
    pub fn new(store: S) -> Self {
        Self::with_policy(store, FollowUpPolicy::default())
    }

    pub fn with_policy(store: S, policy: FollowUpPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> FollowUpPolicy {
        self.policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Checks a draft without touching the store.
    pub fn validate(
        &self,
        draft: &ApplicationDraft,
    ) -> std::result::Result<ValidatedApplication, ValidationErrors> {
        validation::validate(draft)
    }

    /// Validates and stores a new application.
    ///
    /// Nothing is written when validation fails.
    pub fn create(&mut self, draft: &ApplicationDraft) -> Result<ApplicationRecord> {
        let _span = info_span!("create_application").entered();

        let validated = validation::validate(draft)?;
        let follow_up = self
            .policy
            .compute(validated.date_applied, validated.follow_up_override)
            .map_err(ValidationErrors::from)?;

        let application = NewApplication {
            company_name: validated.company_name,
            role_title: validated.role_title,
            date_applied: validated.date_applied,
            status: validated.status,
            follow_up_date: follow_up.date,
            follow_up_overridden: follow_up.overridden,
            application_link: validated.application_link,
            location: validated.location,
            notes: validated.notes,
            archived: workflow::archived_flag(validated.status),
        };

        let id = self.store.create(&application)?;
        info!(id = id.0, status = application.status.as_str(), "Application created");
        Ok(application.into_record(id))
    }

    /// Replaces the editable fields of an application.
    ///
    /// The draft is validated in full. A status change goes through the
    /// workflow rules, and the follow-up date follows
    /// [`FollowUpPolicy::recompute`].
    pub fn edit(&mut self, id: ApplicationId, draft: &ApplicationDraft) -> Result<ApplicationRecord> {
        let _span = info_span!("edit_application", id = id.0).entered();

        let validated = validation::validate(draft)?;
        let current = self.store.read(id)?;
        let follow_up = self
            .policy
            .recompute(&current, validated.date_applied, validated.follow_up_override)
            .map_err(ValidationErrors::from)?;

        let mut updated = ApplicationRecord {
            id: current.id,
            company_name: validated.company_name,
            role_title: validated.role_title,
            date_applied: validated.date_applied,
            status: current.status,
            follow_up_date: follow_up.date,
            follow_up_overridden: follow_up.overridden,
            application_link: validated.application_link,
            location: validated.location,
            notes: validated.notes,
            archived: current.archived,
        };
        if validated.status != current.status {
            workflow::apply_transition(&mut updated, validated.status)?;
        }

        self.store.update(&updated)?;
        debug!(id = id.0, "Application edited");
        Ok(updated)
    }

    /// Moves an application to another status.
    ///
    /// The follow-up date, overridden or not, is left as it is.
    pub fn transition(&mut self, id: ApplicationId, to: Status) -> Result<ApplicationRecord> {
        let _span = info_span!("transition_application", id = id.0, to = to.as_str()).entered();

        let mut record = self.store.read(id)?;
        match workflow::apply_transition(&mut record, to)? {
            Transition::Changed { from, to } => {
                self.store.update(&record)?;
                info!(
                    id = id.0,
                    from = from.as_str(),
                    to = to.as_str(),
                    "Application status changed"
                );
            }
            Transition::Unchanged => debug!(id = id.0, "Status already {}", to),
        }
        Ok(record)
    }

    /// Soft-deletes an application. Archiving twice is harmless.
    pub fn archive(&mut self, id: ApplicationId) -> Result<ApplicationRecord> {
        self.transition(id, Status::Archived)
    }

    /// Drops a manual follow-up date and goes back to the derived one.
    pub fn reset_follow_up(&mut self, id: ApplicationId) -> Result<ApplicationRecord> {
        let mut record = self.store.read(id)?;
        record.follow_up_date = self.policy.derive(record.date_applied);
        record.follow_up_overridden = false;
        self.store.update(&record)?;
        debug!(id = id.0, follow_up = %record.follow_up_date, "Follow-up date reset");
        Ok(record)
    }

    /// Permanently removes an application.
    pub fn delete(&mut self, id: ApplicationId) -> Result<()> {
        self.store.delete(id)?;
        info!(id = id.0, "Application deleted");
        Ok(())
    }

    pub fn get(&self, id: ApplicationId) -> Result<ApplicationRecord> {
        Ok(self.store.read(id)?)
    }

    /// Every application, archived included, newest first.
    pub fn list(&self) -> Result<Vec<ApplicationRecord>> {
        let mut records = self.store.list_all()?;
        records.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(records)
    }

    pub fn search(&self, text: &str) -> Result<Vec<ApplicationRecord>> {
        self.search_in(text, Scope::Active)
    }

    pub fn search_in(&self, text: &str, scope: Scope) -> Result<Vec<ApplicationRecord>> {
        let snapshot = self.store.list_all()?;
        Ok(owned(ApplicationView::new(&snapshot).search_in(text, scope)))
    }

    pub fn filter(&self, status: Option<Status>) -> Result<Vec<ApplicationRecord>> {
        let snapshot = self.store.list_all()?;
        Ok(owned(ApplicationView::new(&snapshot).filter(status)))
    }

    pub fn due_follow_ups(&self, as_of: NaiveDate) -> Result<Vec<ApplicationRecord>> {
        let snapshot = self.store.list_all()?;
        Ok(owned(ApplicationView::new(&snapshot).due_follow_ups(as_of)))
    }

    pub fn summary_counts(&self, scope: Scope) -> Result<StatusCounts> {
        let snapshot = self.store.list_all()?;
        Ok(ApplicationView::new(&snapshot).summary_counts(scope))
    }
}

fn owned(records: Vec<&ApplicationRecord>) -> Vec<ApplicationRecord> {
    records.into_iter().cloned().collect()
}
