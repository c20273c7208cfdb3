//! Domain layer for the restaurant menu store.
//!
//! This crate provides:
//! - [`MenuRecord`] with field validation for new dishes
//! - [`MenuStore`], the insertion-ordered collection of records
//! - [`SharedMenuStore`], a cloneable handle passed to every consumer

pub mod error;
pub mod menu;

pub use common::{Course, MenuItemId};
pub use error::MenuError;
pub use menu::{
    Description, DishName, Field, IdGenerator, MenuRecord, MenuStore, NewMenuItem, NotFound,
    Price, SharedMenuStore, ValidationError, ValidationReason, validate,
};
