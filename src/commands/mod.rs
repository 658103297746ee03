//! Numbered command surface of the interactive prompt.

pub mod console;

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

pub use console::{Console, Flow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Menu,
    Links,
    Images,
    Metadata,
    Structure,
    Content,
    ShowData,
    Seo,
    Accessibility,
    Resources,
    Performance,
    ExtractAll,
    Export,
    Help,
    About,
    Quit,
}

impl Command {
    /// Commands reachable by number, in id order.
    pub const NUMBERED: [Command; 13] = [
        Command::Menu,
        Command::Links,
        Command::Images,
        Command::Metadata,
        Command::Structure,
        Command::Content,
        Command::ShowData,
        Command::Seo,
        Command::Accessibility,
        Command::Resources,
        Command::Performance,
        Command::ExtractAll,
        Command::Export,
    ];

    pub fn from_id(id: u8) -> Option<Self> {
        Self::NUMBERED.get(usize::from(id)).copied()
    }

    pub fn id(&self) -> Option<u8> {
        Self::NUMBERED
            .iter()
            .position(|c| c == self)
            .and_then(|i| u8::try_from(i).ok())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Menu => "menu",
            Command::Links => "links",
            Command::Images => "images",
            Command::Metadata => "metadata",
            Command::Structure => "structure",
            Command::Content => "content",
            Command::ShowData => "data",
            Command::Seo => "seo",
            Command::Accessibility => "accessibility",
            Command::Resources => "resources",
            Command::Performance => "performance",
            Command::ExtractAll => "all",
            Command::Export => "export",
            Command::Help => "help",
            Command::About => "about",
            Command::Quit => "quit",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = AppError;

    /// Accepts a numeric id or a case-insensitive name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if let Ok(id) = input.parse::<u8>() {
            return Self::from_id(id).ok_or_else(|| AppError::UnknownCommand(input.to_string()));
        }

        let lowered = input.to_ascii_lowercase();
        let command = match lowered.as_str() {
            "exit" | "q" => Some(Command::Quit),
            "?" => Some(Command::Help),
            name => Self::NUMBERED
                .iter()
                .chain([Command::Help, Command::About, Command::Quit].iter())
                .find(|c| c.name() == name)
                .copied(),
        };
        command.ok_or_else(|| AppError::UnknownCommand(input.to_string()))
    }
}
