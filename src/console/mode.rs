//! Dispatch modes
//!
//! The console runs one dispatch loop; the mode picks the command table,
//! the prompt, and what happens to unknown commands.

use super::commands::{CommandDescriptor, COMMANDS};
use super::gpio_mode::GPIO_COMMANDS;
use crate::config::ConsoleConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Top-level demo commands
    Top,
    /// GPIO register sub-commands, left with `exit`
    Gpio,
}

impl Mode {
    /// Command table dispatched in this mode
    pub fn commands(self) -> &'static [CommandDescriptor] {
        match self {
            Mode::Top => COMMANDS,
            Mode::Gpio => GPIO_COMMANDS,
        }
    }

    pub fn prompt(self, config: &ConsoleConfig) -> &'static str {
        match self {
            Mode::Top => config.prompt,
            Mode::Gpio => config.gpio_prompt,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Top => "top",
            Mode::Gpio => "gpio",
        }
    }
}
