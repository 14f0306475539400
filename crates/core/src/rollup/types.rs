//! Rollup data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use opcost_shared::types::{EmployeeId, MonthlyRollupId, ProjectId};

/// Number of hour slots in a rollup row.
pub const MONTHS_PER_YEAR: usize = 12;

/// Hour slots indexed by `MonthNumber::index`.
pub type MonthSlots = [Option<Decimal>; MONTHS_PER_YEAR];

/// Month number outside 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Month number out of range: {0} (expected 1-12)")]
pub struct MonthOutOfRange(pub i64);

/// Calendar month number, guaranteed to be in 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MonthNumber(u8);

impl MonthNumber {
    /// Creates a month number.
    ///
    /// # Errors
    ///
    /// Returns `MonthOutOfRange` if `month` is not in 1..=12.
    pub fn new(month: u8) -> Result<Self, MonthOutOfRange> {
        if (1..=12).contains(&month) {
            Ok(Self(month))
        } else {
            Err(MonthOutOfRange(i64::from(month)))
        }
    }

    /// Returns the month number (1-12).
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the zero-based slot index.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Returns the slot column name, e.g. `month_03`.
    #[must_use]
    pub fn slot_name(self) -> String {
        format!("month_{:02}", self.0)
    }
}

impl TryFrom<u8> for MonthNumber {
    type Error = MonthOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i16> for MonthNumber {
    type Error = MonthOutOfRange;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| MonthOutOfRange(i64::from(value)))
            .and_then(Self::new)
    }
}

impl From<MonthNumber> for u8 {
    fn from(month: MonthNumber) -> Self {
        month.0
    }
}

impl fmt::Display for MonthNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// A monthly rollup row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRollup {
    /// Rollup ID.
    pub id: MonthlyRollupId,
    /// Project the hours belong to.
    pub project_id: ProjectId,
    /// Employee the hours belong to.
    pub employee_id: EmployeeId,
    /// Actual hours per month; `None` means the slot was never populated.
    pub slots: MonthSlots,
}

impl MonthlyRollup {
    /// Returns the hours recorded for `month`, if any.
    #[must_use]
    pub fn slot(&self, month: MonthNumber) -> Option<Decimal> {
        self.slots[month.index()]
    }

    /// Sum of all populated slots.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.slots.iter().flatten().copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(1, "month_01")]
    #[case(3, "month_03")]
    #[case(10, "month_10")]
    #[case(12, "month_12")]
    fn test_slot_name_is_zero_padded(#[case] month: u8, #[case] expected: &str) {
        assert_eq!(MonthNumber::new(month).unwrap().slot_name(), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(13)]
    #[case(255)]
    fn test_month_out_of_range(#[case] month: u8) {
        assert_eq!(
            MonthNumber::new(month),
            Err(MonthOutOfRange(i64::from(month)))
        );
    }

    #[test]
    fn test_month_from_negative_i16() {
        assert_eq!(MonthNumber::try_from(-1i16), Err(MonthOutOfRange(-1)));
        assert_eq!(MonthNumber::try_from(7i16).unwrap().get(), 7);
    }

    #[test]
    fn test_month_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<MonthNumber>("13").is_err());
        let month: MonthNumber = serde_json::from_str("4").unwrap();
        assert_eq!(month.index(), 3);
    }

    #[test]
    fn test_rollup_slot_access_and_total() {
        let mut slots: MonthSlots = [None; MONTHS_PER_YEAR];
        slots[2] = Some(dec!(10));
        slots[11] = Some(dec!(2.5));
        let rollup = MonthlyRollup {
            id: MonthlyRollupId::new(),
            project_id: ProjectId::new(),
            employee_id: EmployeeId::new(),
            slots,
        };

        let march = MonthNumber::new(3).unwrap();
        assert_eq!(rollup.slot(march), Some(dec!(10)));
        assert_eq!(rollup.slot(MonthNumber::new(4).unwrap()), None);
        assert_eq!(rollup.total(), dec!(12.5));
    }
}
