//! Main console struct integrating all components

use super::commands::{self, Action, CommandTable, Context};
use super::gpio_mode;
use super::mode::Mode;
use super::reader::{Edit, LineReader};
use super::tokenizer::Tokens;
use super::ConsoleError;
use crate::config::ConsoleConfig;
use crate::hal::Board;
use crate::logging::{self, LevelFilter, LogStream};
use crate::{log_debug, log_info, log_trace, log_warn};

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");

/// Result of one console service call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poll {
    /// No complete line yet
    Idle,
    /// A line was routed
    Dispatched(Outcome),
}

/// How a dispatched line was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Blank top-level line
    Empty,
    /// Handler ran to completion
    Handled,
    /// No command of that name in the current mode
    Unknown,
    /// Handler rejected its arguments
    Failed(ConsoleError),
}

/// Console state machine
///
/// Idle until the reader completes a line, then dispatches it against the
/// table of the current [`Mode`] and re-displays the prompt.
pub struct Console {
    reader: LineReader,
    mode: Mode,
    config: ConsoleConfig,
    log: LogStream,
    log_filter: LevelFilter,
    /// Overflow already logged for the current line
    overflow_logged: bool,
}

impl Console {
    /// Create new console
    pub const fn new(config: ConsoleConfig) -> Self {
        Self {
            reader: LineReader::new(),
            mode: Mode::Top,
            log_filter: config.log_filter,
            config,
            log: LogStream::new(),
            overflow_logged: false,
        }
    }

    /// Print the help banner and the first prompt
    pub fn start(&mut self, board: &mut dyn Board) {
        commands::print_help(board, &self.config);
        self.print_prompt(board);
    }

    /// Run one iteration of the console loop. Never blocks while idle.
    pub fn service(&mut self, board: &mut dyn Board) -> Poll {
        let Some(line) = self.reader.poll_input(board) else {
            if self.reader.last_edit() == Edit::Dropped && !self.overflow_logged {
                log_trace!(self.log, board.uptime_us(), "line full, input dropped");
                self.overflow_logged = true;
            }
            return Poll::Idle;
        };
        self.overflow_logged = false;

        let outcome = self.dispatch(&line, board);
        logging::drain_to(&mut self.log, self.log_filter, board);
        self.print_prompt(board);
        Poll::Dispatched(outcome)
    }

    /// Route one complete line in the current mode
    pub fn dispatch(&mut self, line: &str, board: &mut dyn Board) -> Outcome {
        let mut args = Tokens::new(line);
        let name = args.next_token();

        if name.is_empty() && self.mode == Mode::Top {
            return Outcome::Empty;
        }

        let table = CommandTable::new(self.mode.commands(), board.capabilities());
        let Some(cmd) = table.find(name) else {
            log_warn!(self.log, board.uptime_us(), "{}: unknown command '{}'", self.mode.name(), name);
            let _ = writeln!(board, "Unknown command: {}", name);
            match self.mode {
                Mode::Top => {
                    let _ = writeln!(board, "Type 'help' to see available commands.");
                }
                Mode::Gpio => gpio_mode::print_help(board),
            }
            return Outcome::Unknown;
        };

        log_debug!(self.log, board.uptime_us(), "{}: dispatch '{}'", self.mode.name(), cmd.name);

        let mut ctx = Context {
            board: &mut *board,
            config: &self.config,
            log_filter: self.log_filter,
        };
        match (cmd.handler)(&mut ctx, &mut args) {
            Ok(action) => {
                self.apply(action, board);
                Outcome::Handled
            }
            Err(e) => {
                log_warn!(self.log, board.uptime_us(), "{} failed: {}", cmd.name, e);
                let _ = writeln!(board, "Error {}", e);
                Outcome::Failed(e)
            }
        }
    }

    fn apply(&mut self, action: Action, board: &mut dyn Board) {
        match action {
            Action::Done => {}
            Action::Enter(mode) => {
                log_info!(self.log, board.uptime_us(), "mode {} -> {}", self.mode.name(), mode.name());
                self.mode = mode;
            }
            Action::SetLogFilter(filter) => self.log_filter = filter,
        }
    }

    /// Current dispatch mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current console log filter
    pub fn log_filter(&self) -> LevelFilter {
        self.log_filter
    }

    /// Print the prompt of the current mode
    pub fn print_prompt(&self, board: &mut dyn Board) {
        let _ = board.write_str(self.mode.prompt(&self.config));
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(ConsoleConfig::DEFAULT)
    }
}
