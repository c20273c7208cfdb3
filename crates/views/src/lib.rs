//! Derived views over the menu.
//!
//! Every view is a pure function of a record snapshot. Nothing is cached;
//! callers recompute from the current menu on each read.
//! - [`average_price_by_course`] for the per-course price averages
//! - [`filter_by_course`] with a [`CourseFilter`] selector
//! - [`total_count`] and the combined [`MenuSummary`]

pub mod averages;
pub mod filter;
pub mod summary;

pub use averages::{CourseAverages, average_price_by_course};
pub use filter::{CourseFilter, ParseCourseFilterError, filter_by_course};
pub use summary::{MenuSummary, total_count};
