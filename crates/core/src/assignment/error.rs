//! Assignment error types.

use thiserror::Error;
use uuid::Uuid;

use crate::reference::ReferenceKind;
use crate::rollup::MonthOutOfRange;
use opcost_shared::AppError;
use opcost_shared::types::AssignmentId;

/// Assignment-related errors.
#[derive(Debug, Error)]
pub enum AssignmentError {
    /// A referenced master is retired.
    #[error("{kind} {id} is retired and cannot be assigned")]
    Validation {
        /// Kind of the retired master.
        kind: ReferenceKind,
        /// ID of the retired master.
        id: Uuid,
    },

    /// An assignment already exists for this project, employee, year, and month.
    #[error("An assignment already exists for this project, employee, year, and month")]
    UniqueConstraintViolation,

    /// A referenced master does not exist.
    #[error("{kind} not found: {id}")]
    ReferenceNotFound {
        /// Kind of the missing master.
        kind: ReferenceKind,
        /// ID that was looked up.
        id: Uuid,
    },

    /// Assignment not found.
    #[error("Assignment not found: {0}")]
    NotFound(AssignmentId),

    /// Month master holds a month number outside 1..=12.
    #[error(transparent)]
    InvalidMonth(#[from] MonthOutOfRange),
}

impl From<AssignmentError> for AppError {
    fn from(err: AssignmentError) -> Self {
        let message = err.to_string();
        match err {
            AssignmentError::Validation { .. } => Self::Validation(message),
            AssignmentError::UniqueConstraintViolation => Self::Conflict(message),
            AssignmentError::ReferenceNotFound { .. } | AssignmentError::NotFound(_) => {
                Self::NotFound(message)
            }
            AssignmentError::InvalidMonth(_) => Self::Internal(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_validation_error() {
        let err = AssignmentError::Validation {
            kind: ReferenceKind::Project,
            id: Uuid::nil(),
        };
        assert_eq!(
            err.to_string(),
            "Project 00000000-0000-0000-0000-000000000000 is retired and cannot be assigned"
        );
        assert_eq!(AppError::from(err).error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_duplicate_maps_to_conflict() {
        let app: AppError = AssignmentError::UniqueConstraintViolation.into();
        assert_eq!(app.error_code(), "CONFLICT");
    }

    #[test]
    fn test_missing_reference_maps_to_not_found() {
        let app: AppError = AssignmentError::ReferenceNotFound {
            kind: ReferenceKind::Employee,
            id: Uuid::nil(),
        }
        .into();
        assert_eq!(app.error_code(), "NOT_FOUND");
    }
}
