//! Line commands for the terminal front end.

use std::str::FromStr;

use common::MenuItemId;
use domain::NewMenuItem;
use views::CourseFilter;

use crate::error::CommandError;

/// Returns the command reference shown by `help` and at startup.
pub fn help() -> String {
    let filters = CourseFilter::options().map(|f| f.to_string()).join("|");
    let guest = format!("guest [{filters}]");
    format!(
        "\
Commands:
  home                                       averages, item count and the full menu
  chef                                       the chef's list of current items
  {guest:<42} browse, optionally changing the course filter
  add <name> | <description> | <course> | <price>
                                             add a dish
  remove <id>                                remove a dish
  json                                       print the menu as JSON
  help                                       show this text
  quit                                       exit"
    )
}

/// A single parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Home,
    Chef,
    /// Show the guest view, switching filter first if one is given.
    Guest(Option<CourseFilter>),
    Add(NewMenuItem),
    Remove(MenuItemId),
    Json,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "home" => Ok(Command::Home),
            "chef" => Ok(Command::Chef),
            "guest" if rest.is_empty() => Ok(Command::Guest(None)),
            "guest" => Ok(Command::Guest(Some(rest.parse()?))),
            "add" => parse_add(rest),
            "remove" if rest.is_empty() => Err(CommandError::MissingArgument {
                usage: "remove <id>",
            }),
            "remove" => Ok(Command::Remove(rest.parse()?)),
            "json" => Ok(Command::Json),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(verb.to_string())),
        }
    }
}

fn parse_add(rest: &str) -> Result<Command, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument {
            usage: "add <name> | <description> | <course> | <price>",
        });
    }

    let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
    let [name, description, course, price] = fields.as_slice() else {
        return Err(CommandError::AddFields {
            found: fields.len(),
        });
    };

    Ok(Command::Add(NewMenuItem::new(
        *name,
        *description,
        *course,
        *price,
    )))
}
