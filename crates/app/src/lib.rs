//! Home, chef and guest screens over a single shared menu store.
//!
//! [`App`] wires one [`SharedMenuStore`] into every screen and dispatches
//! parsed [`Command`]s to them. The `menu` binary drives it from stdin.

pub mod command;
pub mod config;
pub mod error;
pub mod render;
pub mod screens;
pub mod telemetry;

use domain::SharedMenuStore;

pub use command::Command;
pub use config::{Config, LogFormat};
pub use error::{AppError, CommandError};
use screens::{ChefScreen, GuestScreen, HomeScreen};

/// Result of handling one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show, then keep reading input.
    Continue(String),
    /// Stop the front end.
    Quit,
}

/// The running application: one store and the three screens sharing it.
pub struct App {
    store: SharedMenuStore,
    home: HomeScreen,
    chef: ChefScreen,
    guest: GuestScreen,
}

impl App {
    /// Creates the application with an empty menu.
    pub fn new(config: &Config) -> Self {
        let store = SharedMenuStore::new();
        Self {
            home: HomeScreen::new(store.clone(), config.title.clone()),
            chef: ChefScreen::new(store.clone()),
            guest: GuestScreen::new(store.clone()),
            store,
        }
    }

    /// Returns the store shared by every screen.
    pub fn store(&self) -> &SharedMenuStore {
        &self.store
    }

    /// Parses and handles one input line.
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome, AppError> {
        let command: Command = line.parse()?;
        self.handle(command)
    }

    /// Handles one command.
    #[tracing::instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Result<Outcome, AppError> {
        let output = match command {
            Command::Home => self.home.view()?.to_string(),
            Command::Chef => self.chef.view()?.to_string(),
            Command::Guest(filter) => {
                if let Some(filter) = filter {
                    self.guest.select(filter);
                }
                self.guest.view()?.to_string()
            }
            Command::Add(candidate) => {
                self.chef.fill(candidate);
                let record = self.chef.submit()?;
                format!(
                    "Added [{}] {} ({})\n",
                    record.id(),
                    record.name(),
                    record.course()
                )
            }
            Command::Remove(id) => {
                self.chef.remove(id)?;
                format!("Removed [{id}]\n")
            }
            Command::Json => {
                let mut json = serde_json::to_string_pretty(&self.store.list()?)?;
                json.push('\n');
                json
            }
            Command::Help => format!("{}\n", crate::command::help()),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Continue(output))
    }
}
