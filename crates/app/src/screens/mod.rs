//! Screen models over the shared menu store.
//!
//! Each screen holds a handle to the same store. Only the chef screen
//! mutates it; home and guest derive their views fresh on every read.

mod chef;
mod guest;
mod home;

pub use chef::{ChefScreen, ChefView};
pub use guest::{GuestScreen, GuestView};
pub use home::{HomeScreen, HomeView};
