use common::{Course, MenuItemId};
use domain::{MenuError, MenuRecord, NewMenuItem, SharedMenuStore};

/// The editing screen: a draft form plus add and remove.
#[derive(Debug, Clone)]
pub struct ChefScreen {
    store: SharedMenuStore,
    draft: NewMenuItem,
}

/// The chef's list of current items.
#[derive(Debug, Clone, PartialEq)]
pub struct ChefView {
    pub items: Vec<MenuRecord>,
}

impl ChefScreen {
    pub fn new(store: SharedMenuStore) -> Self {
        Self {
            store,
            draft: blank_draft(),
        }
    }

    /// Returns the form as currently filled in.
    pub fn draft(&self) -> &NewMenuItem {
        &self.draft
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_course(&mut self, course: impl Into<String>) {
        self.draft.course = course.into();
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.draft.price = price.into();
    }

    /// Replaces the whole draft.
    pub fn fill(&mut self, draft: NewMenuItem) {
        self.draft = draft;
    }

    /// Adds the draft to the menu.
    ///
    /// On success the form resets to its defaults. On failure the draft is
    /// left as typed so it can be corrected.
    pub fn submit(&mut self) -> Result<MenuRecord, MenuError> {
        let record = self.store.add(&self.draft)?;
        self.draft = blank_draft();
        Ok(record)
    }

    pub fn remove(&self, id: MenuItemId) -> Result<(), MenuError> {
        self.store.remove(id)
    }

    pub fn view(&self) -> Result<ChefView, MenuError> {
        Ok(ChefView {
            items: self.store.list()?,
        })
    }
}

fn blank_draft() -> NewMenuItem {
    NewMenuItem {
        course: Course::Starters.into(),
        ..NewMenuItem::default()
    }
}

#[cfg(test)]
mod tests {
    use domain::Field;

    use super::*;

    #[test]
    fn draft_defaults_to_starters() {
        let chef = ChefScreen::new(SharedMenuStore::new());
        assert_eq!(chef.draft().course, "Starters");
        assert!(chef.draft().name.is_empty());
    }

    #[test]
    fn successful_submit_resets_form() {
        let store = SharedMenuStore::new();
        let mut chef = ChefScreen::new(store.clone());
        chef.set_name("Steak");
        chef.set_description("Grilled ribeye");
        chef.set_course(Course::Mains);
        chef.set_price("120");

        let record = chef.submit().unwrap();

        assert_eq!(record.course(), Course::Mains);
        assert_eq!(chef.draft(), &blank_draft());
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn failed_submit_keeps_draft() {
        let store = SharedMenuStore::new();
        let mut chef = ChefScreen::new(store.clone());
        chef.set_name("Steak");
        chef.set_description("Grilled ribeye");
        chef.set_price("cheap");

        let err = chef.submit().unwrap_err();

        let MenuError::Validation(err) = err else {
            panic!("expected validation error");
        };
        assert_eq!(err.field, Field::Price);
        assert_eq!(chef.draft().name, "Steak");
        assert_eq!(chef.draft().price, "cheap");
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn remove_goes_through_store() {
        let store = SharedMenuStore::new();
        let mut chef = ChefScreen::new(store.clone());
        chef.fill(NewMenuItem::new("Soup", "Tomato soup", Course::Starters, "35"));
        let soup = chef.submit().unwrap();

        chef.remove(soup.id()).unwrap();

        assert!(chef.view().unwrap().items.is_empty());
        assert!(matches!(chef.remove(soup.id()), Err(MenuError::NotFound(_))));
    }
}
