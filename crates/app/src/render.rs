//! Plain-text rendering of the screen views.

use std::fmt;

use domain::MenuRecord;
use views::CourseFilter;

use crate::screens::{ChefView, GuestView, HomeView};

fn write_record(f: &mut fmt::Formatter<'_>, record: &MenuRecord) -> fmt::Result {
    writeln!(
        f,
        "  [{}] {} ({}) - {}",
        record.id(),
        record.name(),
        record.course(),
        record.price()
    )?;
    writeln!(f, "      {}", record.description())
}

impl fmt::Display for HomeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "Average Price by Course")?;
        for (course, average) in self.summary.averages.iter() {
            writeln!(f, "  {course}: {average:.2}")?;
        }
        writeln!(f, "Total Menu Items: {}", self.summary.total)?;

        if self.is_empty() {
            return writeln!(f, "No dishes yet, start adding!");
        }
        for record in &self.summary.records {
            write_record(f, record)?;
        }
        Ok(())
    }
}

impl fmt::Display for ChefView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Chef's Menu Editor")?;
        writeln!(f, "Current Items: {}", self.items.len())?;
        for record in &self.items {
            write_record(f, record)?;
        }
        Ok(())
    }
}

impl fmt::Display for GuestView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Guest Menu View (filter: {})", self.filter)?;
        if self.is_empty() {
            return match self.filter {
                CourseFilter::All => writeln!(f, "No dishes on the menu yet."),
                CourseFilter::Only(_) => writeln!(f, "No dishes found for this course."),
            };
        }
        for record in &self.records {
            write_record(f, record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use common::Course;
    use domain::{MenuStore, NewMenuItem};
    use views::{MenuSummary, filter_by_course};

    use super::*;

    fn records() -> Vec<MenuRecord> {
        let mut store = MenuStore::new();
        store
            .add(&NewMenuItem::new("Soup", "Tomato soup", Course::Starters, "35"))
            .unwrap();
        store
            .add(&NewMenuItem::new("Steak", "Grilled ribeye", Course::Mains, "120.50"))
            .unwrap();
        store.snapshot()
    }

    #[test]
    fn home_shows_averages_with_two_decimals() {
        let view = HomeView {
            title: "Christoffel's Menu".to_string(),
            summary: MenuSummary::from_records(records()),
        };
        let text = view.to_string();

        assert!(text.starts_with("Christoffel's Menu\n"));
        assert!(text.contains("  Starters: 35.00\n"));
        assert!(text.contains("  Mains: 120.50\n"));
        assert!(text.contains("  Dessert: 0.00\n"));
        assert!(text.contains("Total Menu Items: 2\n"));
        assert!(text.contains("  [2] Steak (Mains) - 120.50\n"));
    }

    #[test]
    fn home_empty_state() {
        let view = HomeView {
            title: "Menu".to_string(),
            summary: MenuSummary::from_records(Vec::new()),
        };
        assert!(view.to_string().contains("No dishes yet"));
    }

    #[test]
    fn guest_empty_course() {
        let filter = CourseFilter::Only(Course::Dessert);
        let view = GuestView {
            filter,
            records: filter_by_course(&records(), filter),
        };
        let text = view.to_string();
        assert!(text.contains("(filter: Dessert)"));
        assert!(text.contains("No dishes found for this course."));
    }

    #[test]
    fn chef_lists_items_with_ids() {
        let view = ChefView { items: records() };
        let text = view.to_string();
        assert!(text.contains("Current Items: 2\n"));
        assert!(text.contains("  [1] Soup (Starters) - 35\n      Tomato soup\n"));
    }
}
