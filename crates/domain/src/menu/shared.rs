//! A cloneable handle to one menu store.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use common::MenuItemId;

use super::{MenuRecord, MenuStore, NewMenuItem};
use crate::error::MenuError;

/// Shared handle to a single [`MenuStore`].
///
/// Created once at startup and handed explicitly to each consumer. Clones
/// refer to the same store. Mutations take the write lock, so writers are
/// serialized. Reads return owned snapshots, never live references.
#[derive(Debug, Clone, Default)]
pub struct SharedMenuStore {
    inner: Arc<RwLock<MenuStore>>,
}

impl SharedMenuStore {
    /// Creates a handle to a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MenuStore>, MenuError> {
        self.inner
            .read()
            .map_err(|_| MenuError::LockPoisoned("read"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MenuStore>, MenuError> {
        self.inner
            .write()
            .map_err(|_| MenuError::LockPoisoned("write"))
    }

    /// Validates and appends a dish. See [`MenuStore::add`].
    pub fn add(&self, candidate: &NewMenuItem) -> Result<MenuRecord, MenuError> {
        Ok(self.write()?.add(candidate)?)
    }

    /// Removes a dish by ID. See [`MenuStore::remove`].
    pub fn remove(&self, id: MenuItemId) -> Result<(), MenuError> {
        Ok(self.write()?.remove(id)?)
    }

    /// Replaces a dish. See [`MenuStore::replace`].
    pub fn replace(
        &self,
        id: MenuItemId,
        candidate: &NewMenuItem,
    ) -> Result<MenuRecord, MenuError> {
        self.write()?.replace(id, candidate)
    }

    /// Returns a snapshot of the records in insertion order.
    pub fn list(&self) -> Result<Vec<MenuRecord>, MenuError> {
        Ok(self.read()?.snapshot())
    }

    /// Returns a copy of the record with the given ID.
    pub fn get(&self, id: MenuItemId) -> Result<Option<MenuRecord>, MenuError> {
        Ok(self.read()?.get(id).cloned())
    }

    /// Returns the number of records.
    pub fn count(&self) -> Result<usize, MenuError> {
        Ok(self.read()?.count())
    }
}
