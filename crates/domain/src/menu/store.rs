//! The in-memory menu store.

use common::MenuItemId;

use super::{IdGenerator, MenuRecord, NewMenuItem, NotFound, ValidationError, validate};
use crate::error::MenuError;

/// Owns the menu: an insertion-ordered collection of records.
///
/// Validation in [`add`](Self::add) is the only way records get in, so the
/// store never holds a duplicate ID or a record outside the fixed courses.
#[derive(Debug, Clone, Default)]
pub struct MenuStore {
    records: Vec<MenuRecord>,
    ids: IdGenerator,
}

impl MenuStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a candidate and appends it to the end of the menu.
    #[tracing::instrument(skip(self, candidate), fields(name = %candidate.name))]
    pub fn add(&mut self, candidate: &NewMenuItem) -> Result<MenuRecord, ValidationError> {
        let record = validate(candidate, &mut self.ids).inspect_err(|err| {
            metrics::counter!("menu_validation_failures_total", "field" => err.field.as_str())
                .increment(1);
            tracing::warn!(field = %err.field, reason = %err.reason, "rejected menu item");
        })?;

        self.records.push(record.clone());

        metrics::counter!("menu_items_added_total").increment(1);
        tracing::info!(id = %record.id(), course = %record.course(), "menu item added");
        Ok(record)
    }

    /// Removes the record with the given ID, keeping the order of the rest.
    #[tracing::instrument(skip(self))]
    pub fn remove(&mut self, id: MenuItemId) -> Result<(), NotFound> {
        let Some(index) = self.position(id) else {
            metrics::counter!("menu_remove_not_found_total").increment(1);
            tracing::warn!(%id, "menu item not found for removal");
            return Err(NotFound { id });
        };

        self.records.remove(index);

        metrics::counter!("menu_items_removed_total").increment(1);
        tracing::info!(%id, "menu item removed");
        Ok(())
    }

    /// Replaces a record with a newly validated one.
    ///
    /// Both the ID and the candidate are checked before anything changes.
    /// The replacement gets a new ID and goes to the end of the menu.
    #[tracing::instrument(skip(self, candidate))]
    pub fn replace(
        &mut self,
        id: MenuItemId,
        candidate: &NewMenuItem,
    ) -> Result<MenuRecord, MenuError> {
        if self.position(id).is_none() {
            return Err(NotFound { id }.into());
        }

        let record = self.add(candidate)?;
        self.remove(id)?;
        Ok(record)
    }

    /// Returns the records in insertion order.
    pub fn list(&self) -> &[MenuRecord] {
        &self.records
    }

    /// Returns an owned copy of the records in insertion order.
    pub fn snapshot(&self) -> Vec<MenuRecord> {
        self.records.clone()
    }

    /// Returns the record with the given ID.
    pub fn get(&self, id: MenuItemId) -> Option<&MenuRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Returns the number of records.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the menu has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: MenuItemId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use common::Course;

    use super::*;
    use crate::menu::Field;

    fn dish(name: &str, course: Course, price: &str) -> NewMenuItem {
        NewMenuItem::new(name, format!("{name} description"), course, price)
    }

    #[test]
    fn new_store_is_empty() {
        let store = MenuStore::new();
        assert!(store.is_empty());
        assert_eq!(store.count(), 0);
        assert!(store.list().is_empty());
    }

    #[test]
    fn add_appends_in_order() {
        let mut store = MenuStore::new();
        let a = store.add(&dish("A", Course::Starters, "10")).unwrap();
        let b = store.add(&dish("B", Course::Mains, "20")).unwrap();

        assert_eq!(store.list(), &[a, b]);
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn add_failure_leaves_store_unchanged() {
        let mut store = MenuStore::new();
        store.add(&dish("A", Course::Starters, "10")).unwrap();
        let before = store.snapshot();

        let err = store.add(&dish("B", Course::Mains, "-1")).unwrap_err();

        assert_eq!(err.field, Field::Price);
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn remove_preserves_order_of_rest() {
        let mut store = MenuStore::new();
        let a = store.add(&dish("A", Course::Starters, "10")).unwrap();
        let b = store.add(&dish("B", Course::Mains, "20")).unwrap();
        let c = store.add(&dish("C", Course::Dessert, "30")).unwrap();

        store.remove(b.id()).unwrap();

        assert_eq!(store.list(), &[a, c]);
    }

    #[test]
    fn remove_twice_reports_not_found() {
        let mut store = MenuStore::new();
        let a = store.add(&dish("A", Course::Starters, "10")).unwrap();
        store.add(&dish("B", Course::Mains, "20")).unwrap();

        store.remove(a.id()).unwrap();
        let after_first = store.snapshot();

        assert_eq!(store.remove(a.id()), Err(NotFound { id: a.id() }));
        assert_eq!(store.list(), after_first.as_slice());
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut store = MenuStore::new();
        let a = store.add(&dish("A", Course::Starters, "10")).unwrap();
        store.remove(a.id()).unwrap();
        let b = store.add(&dish("B", Course::Starters, "10")).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn get_finds_by_id() {
        let mut store = MenuStore::new();
        let a = store.add(&dish("A", Course::Starters, "10")).unwrap();
        assert_eq!(store.get(a.id()), Some(&a));
        assert_eq!(store.get(MenuItemId::new(99)), None);
    }

    #[test]
    fn replace_moves_new_record_to_end() {
        let mut store = MenuStore::new();
        let a = store.add(&dish("A", Course::Starters, "10")).unwrap();
        let b = store.add(&dish("B", Course::Mains, "20")).unwrap();

        let a2 = store
            .replace(a.id(), &dish("A2", Course::Starters, "12"))
            .unwrap();

        assert_ne!(a2.id(), a.id());
        assert_eq!(store.list(), &[b, a2]);
    }

    #[test]
    fn replace_with_invalid_candidate_changes_nothing() {
        let mut store = MenuStore::new();
        let a = store.add(&dish("A", Course::Starters, "10")).unwrap();

        let err = store
            .replace(a.id(), &dish("", Course::Starters, "12"))
            .unwrap_err();

        assert!(matches!(err, MenuError::Validation(_)));
        assert_eq!(store.list(), &[a]);
    }

    #[test]
    fn replace_unknown_id_changes_nothing() {
        let mut store = MenuStore::new();
        let a = store.add(&dish("A", Course::Starters, "10")).unwrap();

        let err = store
            .replace(MenuItemId::new(42), &dish("B", Course::Mains, "12"))
            .unwrap_err();

        assert_eq!(
            err,
            MenuError::NotFound(NotFound {
                id: MenuItemId::new(42)
            })
        );
        assert_eq!(store.list(), &[a]);
    }
}
