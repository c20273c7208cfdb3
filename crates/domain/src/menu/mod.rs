//! Menu records, their validation, and the store that owns them.

mod candidate;
mod id;
mod record;
mod shared;
mod store;
mod value_objects;

pub use candidate::{NewMenuItem, validate};
pub use id::IdGenerator;
pub use record::MenuRecord;
pub use shared::SharedMenuStore;
pub use store::MenuStore;
pub use value_objects::{Description, DishName, Price};

use common::MenuItemId;
use thiserror::Error;

/// The field of a candidate dish that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Course,
    Price,
}

impl Field {
    /// Returns the field name as used in logs and metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Course => "course",
            Field::Price => "price",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationReason {
    /// The value is empty or whitespace only.
    #[error("must not be empty")]
    Empty,

    /// The price text does not parse as a number.
    #[error("`{0}` is not a number")]
    NotANumber(String),

    /// The price parsed to NaN or infinity.
    #[error("must be a finite number")]
    NotFinite,

    /// The price is below zero.
    #[error("must not be negative")]
    Negative,

    /// The course is not one of the fixed courses.
    #[error("unknown course `{0}` (expected Starters, Mains or Dessert)")]
    UnknownCourse(String),
}

/// A candidate dish was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: Field,
    pub reason: ValidationReason,
}

impl ValidationError {
    /// Creates a validation error for a field.
    pub fn new(field: Field, reason: ValidationReason) -> Self {
        Self { field, reason }
    }
}

/// No record with the given ID is in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Menu item not found: {id}")]
pub struct NotFound {
    pub id: MenuItemId,
}
