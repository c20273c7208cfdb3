//! Candidate dishes and their validation.

use chrono::Utc;
use common::Course;

use super::{
    Description, DishName, Field, IdGenerator, MenuRecord, Price, ValidationError,
    ValidationReason,
};

/// A dish as typed into the edit form, before validation.
///
/// Every field is free-form text. The course usually comes from a picker
/// but is still checked against the fixed set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub course: String,
    pub price: String,
}

/// The fields of a candidate that passed validation.
struct CheckedFields {
    name: DishName,
    description: Description,
    course: Course,
    price: Price,
}

impl NewMenuItem {
    /// Creates a new candidate from raw form values.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        course: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            course: course.into(),
            price: price.into(),
        }
    }

    /// Checks fields in form order and reports the first failure.
    fn check(&self) -> Result<CheckedFields, ValidationError> {
        let name =
            DishName::parse(&self.name).map_err(|r| ValidationError::new(Field::Name, r))?;
        let description = Description::parse(&self.description)
            .map_err(|r| ValidationError::new(Field::Description, r))?;
        let course = self.course.parse::<Course>().map_err(|e| {
            ValidationError::new(Field::Course, ValidationReason::UnknownCourse(e.input))
        })?;
        let price =
            Price::parse(&self.price).map_err(|r| ValidationError::new(Field::Price, r))?;

        Ok(CheckedFields {
            name,
            description,
            course,
            price,
        })
    }
}

/// Validates a candidate and, if it passes, builds a record with a fresh ID.
///
/// The ID is drawn only after every field has passed, so rejected
/// candidates never consume one.
pub fn validate(
    candidate: &NewMenuItem,
    ids: &mut IdGenerator,
) -> Result<MenuRecord, ValidationError> {
    let fields = candidate.check()?;
    Ok(MenuRecord::new(
        ids.next_id(),
        fields.name,
        fields.description,
        fields.course,
        fields.price,
        Utc::now(),
    ))
}
