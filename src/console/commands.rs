//! Top-level command handlers

use super::console::VERSION;
use super::mode::Mode;
use super::tokenizer::Tokens;
use super::ConsoleError;
use crate::config::{Capabilities, ConsoleConfig};
use crate::demo;
use crate::hal::Board;
use crate::logging::LevelFilter;

/// State change a handler asks the console to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stay in the current mode
    Done,
    /// Switch the dispatch loop to another mode
    Enter(Mode),
    /// Change the console event log filter
    SetLogFilter(LevelFilter),
}

/// What a handler can see while it runs
pub struct Context<'a> {
    pub board: &'a mut dyn Board,
    pub config: &'a ConsoleConfig,
    pub log_filter: LevelFilter,
}

/// Handler signature shared by all command tables
pub type Handler = fn(&mut Context<'_>, &mut Tokens<'_>) -> Result<Action, ConsoleError>;

/// Command descriptor
pub struct CommandDescriptor {
    pub name: &'static str,
    /// Name plus argument synopsis, shown in help
    pub usage: &'static str,
    pub brief: &'static str,
    /// Peripherals that must be present for the command to be listed
    pub requires: Capabilities,
    pub handler: Handler,
}

impl CommandDescriptor {
    /// Check whether the command is usable with `caps`
    pub fn available(&self, caps: Capabilities) -> bool {
        caps.contains(self.requires)
    }
}

/// A command table filtered by the board's capabilities
#[derive(Clone, Copy)]
pub struct CommandTable {
    entries: &'static [CommandDescriptor],
    caps: Capabilities,
}

impl CommandTable {
    pub const fn new(entries: &'static [CommandDescriptor], caps: Capabilities) -> Self {
        Self { entries, caps }
    }

    /// Active entries, in priority order
    pub fn iter(&self) -> impl Iterator<Item = &'static CommandDescriptor> + '_ {
        let caps = self.caps;
        self.entries.iter().filter(move |c| c.available(caps))
    }

    /// First active entry whose name matches exactly
    pub fn find(&self, name: &str) -> Option<&'static CommandDescriptor> {
        self.iter().find(|c| c.name == name)
    }

    /// Names of the active entries
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().map(|c| c.name)
    }
}

/// All top-level commands
pub static COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor {
        name: "help",
        usage: "help [command]",
        brief: "Show this command",
        requires: Capabilities::empty(),
        handler: cmd_help,
    },
    CommandDescriptor {
        name: "reboot",
        usage: "reboot",
        brief: "Reboot CPU",
        requires: Capabilities::empty(),
        handler: cmd_reboot,
    },
    CommandDescriptor {
        name: "led",
        usage: "led",
        brief: "Led demo",
        requires: Capabilities::LEDS,
        handler: cmd_led,
    },
    CommandDescriptor {
        name: "donut",
        usage: "donut",
        brief: "Spinning Donut demo",
        requires: Capabilities::empty(),
        handler: cmd_donut,
    },
    CommandDescriptor {
        name: "hello",
        usage: "hello",
        brief: "Hello Rust",
        requires: Capabilities::empty(),
        handler: cmd_hello,
    },
    CommandDescriptor {
        name: "hellocpp",
        usage: "hellocpp",
        brief: "Hello C++",
        requires: Capabilities::CXX,
        handler: cmd_hellocpp,
    },
    CommandDescriptor {
        name: "gpio",
        usage: "gpio",
        brief: "Enter to GPIO command mode",
        requires: Capabilities::GPIO,
        handler: cmd_gpio,
    },
    CommandDescriptor {
        name: "debug",
        usage: "debug [level]",
        brief: "Console log level (off|error|warn|info|debug|trace)",
        requires: Capabilities::empty(),
        handler: cmd_debug,
    },
];

/// Print the banner and the commands available on this board
pub fn print_help(board: &mut dyn Board, config: &ConsoleConfig) {
    let table = CommandTable::new(COMMANDS, board.capabilities());

    let _ = writeln!(board, "\n{} built {}\n", config.title, VERSION);
    let _ = writeln!(board, "Available commands:");
    for c in table.iter() {
        let _ = writeln!(board, "{:<18} - {}", c.usage, c.brief);
    }
}

// --- Command Implementations ---

fn cmd_help(ctx: &mut Context<'_>, args: &mut Tokens<'_>) -> Result<Action, ConsoleError> {
    if let Some(name) = args.next_arg() {
        // Help for specific command
        let table = CommandTable::new(COMMANDS, ctx.board.capabilities());
        let c = table.find(name).ok_or(ConsoleError::UnknownCommand)?;
        let _ = writeln!(ctx.board, "{} - {}", c.usage, c.brief);
    } else {
        print_help(ctx.board, ctx.config);
    }
    Ok(Action::Done)
}

fn cmd_reboot(ctx: &mut Context<'_>, _args: &mut Tokens<'_>) -> Result<Action, ConsoleError> {
    ctx.board.reboot();
    Ok(Action::Done)
}

fn cmd_led(ctx: &mut Context<'_>, _args: &mut Tokens<'_>) -> Result<Action, ConsoleError> {
    demo::led::run(ctx.board);
    Ok(Action::Done)
}

fn cmd_donut(ctx: &mut Context<'_>, _args: &mut Tokens<'_>) -> Result<Action, ConsoleError> {
    let _ = writeln!(ctx.board, "Donut demo...");
    demo::donut::run(ctx.board);
    Ok(Action::Done)
}

fn cmd_hello(ctx: &mut Context<'_>, _args: &mut Tokens<'_>) -> Result<Action, ConsoleError> {
    let _ = writeln!(ctx.board, "Hello Rust demo...");
    demo::hello::run(ctx.board);
    Ok(Action::Done)
}

fn cmd_hellocpp(ctx: &mut Context<'_>, _args: &mut Tokens<'_>) -> Result<Action, ConsoleError> {
    let _ = writeln!(ctx.board, "Hello C++ demo...");
    ctx.board.foreign_hello();
    Ok(Action::Done)
}

fn cmd_gpio(_ctx: &mut Context<'_>, _args: &mut Tokens<'_>) -> Result<Action, ConsoleError> {
    Ok(Action::Enter(Mode::Gpio))
}

fn cmd_debug(ctx: &mut Context<'_>, args: &mut Tokens<'_>) -> Result<Action, ConsoleError> {
    match args.next_arg() {
        None => {
            let _ = writeln!(ctx.board, "log level: {}", ctx.log_filter.as_str());
            Ok(Action::Done)
        }
        Some(name) => {
            let filter = LevelFilter::parse(name).ok_or(ConsoleError::InvalidValue)?;
            let _ = writeln!(ctx.board, "log level: {}", filter.as_str());
            Ok(Action::SetLogFilter(filter))
        }
    }
}
