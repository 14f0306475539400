//! Reference master types.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Lifecycle status of a reference master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceStatus {
    /// Usable by new assignments.
    #[default]
    Active,
    /// Soft-deleted; kept for history but rejected for new writes.
    Retired,
}

impl ReferenceStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Retired => "retired",
        }
    }

    /// Returns true if the master is retired.
    #[must_use]
    pub const fn is_retired(self) -> bool {
        matches!(self, Self::Retired)
    }
}

impl fmt::Display for ReferenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of reference master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// Project master.
    Project,
    /// Employee master.
    Employee,
    /// Year master.
    Year,
    /// Month master.
    Month,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Project => "Project",
            Self::Employee => "Employee",
            Self::Year => "Year",
            Self::Month => "Month",
        };
        f.write_str(name)
    }
}

/// A loaded reference together with its status, ready for validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceCheck {
    /// Which master table the reference points into.
    pub kind: ReferenceKind,
    /// Referenced row ID.
    pub id: Uuid,
    /// Current status of the referenced row.
    pub status: ReferenceStatus,
}

impl ReferenceCheck {
    /// Creates a new reference check.
    #[must_use]
    pub const fn new(kind: ReferenceKind, id: Uuid, status: ReferenceStatus) -> Self {
        Self { kind, id, status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_matches_stored_value() {
        assert_eq!(ReferenceStatus::Active.to_string(), "active");
        assert_eq!(ReferenceStatus::Retired.to_string(), "retired");
    }

    #[test]
    fn test_default_status_is_active() {
        assert_eq!(ReferenceStatus::default(), ReferenceStatus::Active);
        assert!(!ReferenceStatus::Active.is_retired());
        assert!(ReferenceStatus::Retired.is_retired());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ReferenceKind::Project.to_string(), "Project");
        assert_eq!(ReferenceKind::Year.to_string(), "Year");
    }
}
