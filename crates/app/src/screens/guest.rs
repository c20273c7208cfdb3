use domain::{MenuError, MenuRecord, SharedMenuStore};
use views::{CourseFilter, filter_by_course};

/// Browsing screen with a course filter.
#[derive(Debug, Clone)]
pub struct GuestScreen {
    store: SharedMenuStore,
    selected: CourseFilter,
}

/// The dishes that pass the guest's current filter.
#[derive(Debug, Clone, PartialEq)]
pub struct GuestView {
    pub filter: CourseFilter,
    pub records: Vec<MenuRecord>,
}

impl GuestView {
    /// Returns true if no dish passes the filter.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl GuestScreen {
    /// Creates the screen with no filter applied.
    pub fn new(store: SharedMenuStore) -> Self {
        Self {
            store,
            selected: CourseFilter::All,
        }
    }

    pub fn selected(&self) -> CourseFilter {
        self.selected
    }

    pub fn select(&mut self, filter: CourseFilter) {
        tracing::debug!(%filter, "guest filter changed");
        self.selected = filter;
    }

    pub fn view(&self) -> Result<GuestView, MenuError> {
        let records = self.store.list()?;
        Ok(GuestView {
            filter: self.selected,
            records: filter_by_course(&records, self.selected),
        })
    }
}
