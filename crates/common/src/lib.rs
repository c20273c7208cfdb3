//! Shared types for the restaurant menu store.

pub mod types;

pub use types::{Course, MenuItemId, ParseCourseError, ParseMenuItemIdError};
