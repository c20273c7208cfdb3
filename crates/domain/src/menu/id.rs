//! Menu item ID allocation.

use common::MenuItemId;

/// Hands out menu item IDs for a single store.
///
/// IDs start at 1 and strictly increase, so no value is ever returned
/// twice regardless of how quickly dishes are added.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// Creates a generator whose first ID is 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns a fresh ID.
    pub fn next_id(&mut self) -> MenuItemId {
        let id = MenuItemId::new(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
