use domain::{MenuError, SharedMenuStore};
use views::MenuSummary;

/// Read-only overview: averages per course, item count and the menu.
#[derive(Debug, Clone)]
pub struct HomeScreen {
    store: SharedMenuStore,
    title: String,
}

/// What the home screen shows for one snapshot of the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    pub title: String,
    pub summary: MenuSummary,
}

impl HomeView {
    /// Returns true if there are no dishes to show.
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
    }
}

impl HomeScreen {
    pub fn new(store: SharedMenuStore, title: impl Into<String>) -> Self {
        Self {
            store,
            title: title.into(),
        }
    }

    pub fn view(&self) -> Result<HomeView, MenuError> {
        Ok(HomeView {
            title: self.title.clone(),
            summary: MenuSummary::from_records(self.store.list()?),
        })
    }
}
