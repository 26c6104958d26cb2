//! Serial console for the demo commands
//!
//! Polled from the main loop - no dedicated task.
//! Zero heap allocation - all fixed-size buffers.

pub mod commands;
#[allow(clippy::module_inception)]
pub mod console;
pub mod error;
pub mod gpio_mode;
pub mod line_buffer;
pub mod mode;
pub mod parse;
pub mod reader;
pub mod tokenizer;

pub use commands::{Action, CommandDescriptor, CommandTable, Context, COMMANDS};
pub use console::{Console, Outcome, Poll, VERSION};
pub use error::ConsoleError;
pub use gpio_mode::GPIO_COMMANDS;
pub use line_buffer::{Line, LineBuffer, LINE_SIZE, MAX_LINE_LEN};
pub use mode::Mode;
pub use reader::{Edit, LineReader};
pub use tokenizer::{next_token, Tokens};
