//! Status transition rules.
//!
//! The graph is permissive: any non-terminal status may move to any other
//! status. Terminal statuses have no exits, except that archiving an
//! archived record is a no-op.

use thiserror::Error;

use crate::application::{ApplicationRecord, Status};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Cannot move application from {from} to {to}")]
    IllegalTransition { from: Status, to: Status },
}

/// Result of a successful transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Changed { from: Status, to: Status },
    Unchanged,
}

/// Whether `from` may move to `to`.
pub fn can_transition(from: Status, to: Status) -> bool {
    !from.is_terminal() || (from == Status::Archived && to == Status::Archived)
}

/// The `archived` flag that must accompany `status`.
pub fn archived_flag(status: Status) -> bool {
    status == Status::Archived
}

/// Moves `record` to `to`, keeping `archived` in step with the status.
///
/// On error the record is left untouched.
pub fn apply_transition(record: &mut ApplicationRecord, to: Status) -> Result<Transition, WorkflowError> {
    let from = record.status;
    if !can_transition(from, to) {
        return Err(WorkflowError::IllegalTransition { from, to });
    }

    record.status = to;
    record.archived = archived_flag(to);

    if from == to {
        Ok(Transition::Unchanged)
    } else {
        Ok(Transition::Changed { from, to })
    }
}
