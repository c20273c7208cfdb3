use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique identifier for a menu item.
///
/// Assigned by the store when a dish is added and never reused for the
/// lifetime of that store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(u64);

impl MenuItemId {
    /// Creates a menu item ID from a raw value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MenuItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<MenuItemId> for u64 {
    fn from(id: MenuItemId) -> Self {
        id.0
    }
}

/// Error returned when text is not a valid menu item ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid menu item id: `{input}`")]
pub struct ParseMenuItemIdError {
    pub input: String,
}

impl FromStr for MenuItemId {
    type Err = ParseMenuItemIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ParseMenuItemIdError {
                input: s.to_string(),
            })
    }
}

/// The fixed set of menu courses.
///
/// Declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Course {
    Starters,
    Mains,
    Dessert,
}

impl Course {
    /// Every course, in display order.
    pub const ALL: [Course; 3] = [Course::Starters, Course::Mains, Course::Dessert];

    /// Returns the course name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Course::Starters => "Starters",
            Course::Mains => "Mains",
            Course::Dessert => "Dessert",
        }
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Course> for String {
    fn from(course: Course) -> Self {
        course.as_str().to_string()
    }
}

/// Error returned when text does not name one of the fixed courses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown course `{input}` (expected Starters, Mains or Dessert)")]
pub struct ParseCourseError {
    pub input: String,
}

impl FromStr for Course {
    type Err = ParseCourseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Course::ALL
            .into_iter()
            .find(|course| course.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseCourseError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_item_id_preserves_value() {
        let id = MenuItemId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(u64::from(id), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn menu_item_id_parses_from_text() {
        assert_eq!(" 7 ".parse::<MenuItemId>().unwrap(), MenuItemId::new(7));
        assert!("seven".parse::<MenuItemId>().is_err());
        assert!("-1".parse::<MenuItemId>().is_err());
    }

    #[test]
    fn menu_item_id_serializes_as_number() {
        let json = serde_json::to_string(&MenuItemId::new(3)).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn course_parses_known_names() {
        assert_eq!("Starters".parse::<Course>().unwrap(), Course::Starters);
        assert_eq!("mains".parse::<Course>().unwrap(), Course::Mains);
        assert_eq!("  DESSERT ".parse::<Course>().unwrap(), Course::Dessert);
    }

    #[test]
    fn course_rejects_names_outside_the_set() {
        let err = "Snacks".parse::<Course>().unwrap_err();
        assert_eq!(err.input, "Snacks");
        assert!("".parse::<Course>().is_err());
        assert!("All".parse::<Course>().is_err());
    }

    #[test]
    fn course_display_roundtrips_through_from_str() {
        for course in Course::ALL {
            assert_eq!(course.to_string().parse::<Course>().unwrap(), course);
        }
    }

    #[test]
    fn course_order_is_display_order() {
        let mut courses = vec![Course::Dessert, Course::Starters, Course::Mains];
        courses.sort();
        assert_eq!(courses, Course::ALL.to_vec());
    }

    #[test]
    fn course_serializes_as_name() {
        let json = serde_json::to_string(&Course::Mains).unwrap();
        assert_eq!(json, "\"Mains\"");
    }
}
