//! Menu-wide counts and the home summary.

use domain::MenuRecord;
use serde::Serialize;

use crate::averages::{CourseAverages, average_price_by_course};

/// Returns the number of records.
pub fn total_count(records: &[MenuRecord]) -> usize {
    records.len()
}

/// Everything the home view derives from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuSummary {
    pub averages: CourseAverages,
    pub total: usize,
    pub records: Vec<MenuRecord>,
}

impl MenuSummary {
    /// Derives the summary from a snapshot of the menu.
    pub fn from_records(records: Vec<MenuRecord>) -> Self {
        Self {
            averages: average_price_by_course(&records),
            total: total_count(&records),
            records,
        }
    }

    /// Returns true if the menu has no dishes.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
