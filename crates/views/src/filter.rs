//! Course-based filtering.

use std::str::FromStr;

use common::Course;
use domain::MenuRecord;
use serde::Serialize;
use thiserror::Error;

/// Which dishes a listing should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum CourseFilter {
    /// No filtering.
    #[default]
    All,
    /// Only dishes from one course.
    Only(Course),
}

impl CourseFilter {
    /// Every selectable filter, `All` first.
    pub fn options() -> [CourseFilter; 4] {
        [
            CourseFilter::All,
            CourseFilter::Only(Course::Starters),
            CourseFilter::Only(Course::Mains),
            CourseFilter::Only(Course::Dessert),
        ]
    }

    /// Returns true if a dish of `course` passes this filter.
    pub fn matches(&self, course: Course) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Only(selected) => *selected == course,
        }
    }
}

impl From<Course> for CourseFilter {
    fn from(course: Course) -> Self {
        CourseFilter::Only(course)
    }
}

impl std::fmt::Display for CourseFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseFilter::All => f.write_str("All"),
            CourseFilter::Only(course) => write!(f, "{course}"),
        }
    }
}

/// Error returned when text is neither `All` nor a course name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter `{input}` (expected All, Starters, Mains or Dessert)")]
pub struct ParseCourseFilterError {
    pub input: String,
}

impl FromStr for CourseFilter {
    type Err = ParseCourseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CourseFilter::All);
        }
        s.parse::<Course>()
            .map(CourseFilter::Only)
            .map_err(|e| ParseCourseFilterError { input: e.input })
    }
}

/// Returns the records that pass `filter`, in their original order.
pub fn filter_by_course(records: &[MenuRecord], filter: CourseFilter) -> Vec<MenuRecord> {
    records
        .iter()
        .filter(|r| filter.matches(r.course()))
        .cloned()
        .collect()
}
