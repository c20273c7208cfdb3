//! Average price per course.

use common::Course;
use domain::MenuRecord;
use serde::Serialize;

/// Average price for each of the fixed courses.
///
/// All three courses are always present. A course with no dishes
/// averages to 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CourseAverages {
    pub starters: f64,
    pub mains: f64,
    pub dessert: f64,
}

impl CourseAverages {
    /// Returns the average for one course.
    pub fn get(&self, course: Course) -> f64 {
        match course {
            Course::Starters => self.starters,
            Course::Mains => self.mains,
            Course::Dessert => self.dessert,
        }
    }

    /// Iterates over `(course, average)` in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Course, f64)> + '_ {
        Course::ALL
            .into_iter()
            .map(move |course| (course, self.get(course)))
    }
}

/// Computes the mean price of each course over `records`.
pub fn average_price_by_course(records: &[MenuRecord]) -> CourseAverages {
    // Incremental mean; finite for any finite prices.
    let average = |course: Course| {
        records
            .iter()
            .filter(|r| r.course() == course)
            .fold((0.0, 0usize), |(mean, count), r| {
                let count = count + 1;
                (mean + (r.price().value() - mean) / count as f64, count)
            })
            .0
    };

    CourseAverages {
        starters: average(Course::Starters),
        mains: average(Course::Mains),
        dessert: average(Course::Dessert),
    }
}
