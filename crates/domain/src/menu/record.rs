//! The menu record entity.

use chrono::{DateTime, Utc};
use common::{Course, MenuItemId};
use serde::{Deserialize, Serialize};

use super::{Description, DishName, Price};

/// A single dish on the menu.
///
/// Records are immutable once created. A change to a dish is modelled as
/// removing the old record and adding a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuRecord {
    /// Store-assigned identifier.
    id: MenuItemId,

    /// Dish name.
    name: DishName,

    /// Dish description.
    description: Description,

    /// Course the dish belongs to.
    course: Course,

    /// Price as entered, with its parsed value.
    price: Price,

    /// When the record was added to the store. Informational only.
    created_at: DateTime<Utc>,
}

impl MenuRecord {
    pub(crate) fn new(
        id: MenuItemId,
        name: DishName,
        description: Description,
        course: Course,
        price: Price,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            course,
            price,
            created_at,
        }
    }

    pub fn id(&self) -> MenuItemId {
        self.id
    }

    pub fn name(&self) -> &DishName {
        &self.name
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn course(&self) -> Course {
        self.course
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
