//! Decides what an assignment write does to the monthly rollup.

use rust_decimal::Decimal;

use super::types::{MONTHS_PER_YEAR, MonthNumber, MonthSlots, MonthlyRollup};
use opcost_shared::types::MonthlyRollupId;

/// Outcome of planning a rollup upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollupAction {
    /// No row exists for the pair; insert one with these slots.
    Create {
        /// Slots for the new row. Exactly one is populated.
        slots: MonthSlots,
    },
    /// A row already exists and is left untouched.
    Unchanged {
        /// The existing row.
        rollup_id: MonthlyRollupId,
    },
}

/// Rollup upsert planner.
pub struct RollupPlanner;

impl RollupPlanner {
    /// Plans the rollup change for an assignment in `month` with `hours_actual`.
    ///
    /// An existing row is never modified, even when `month` is a slot it has
    /// not seen yet. Only the first assignment of a pair reaches the rollup.
    #[must_use]
    pub fn plan(
        existing: Option<&MonthlyRollup>,
        month: MonthNumber,
        hours_actual: Decimal,
    ) -> RollupAction {
        match existing {
            Some(rollup) => RollupAction::Unchanged {
                rollup_id: rollup.id,
            },
            None => {
                let mut slots: MonthSlots = [None; MONTHS_PER_YEAR];
                slots[month.index()] = Some(hours_actual);
                RollupAction::Create { slots }
            }
        }
    }
}
