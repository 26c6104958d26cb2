//! Non-blocking line reader with local echo

use super::line_buffer::{Line, LineBuffer};
use crate::hal::Terminal;

const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7F;
const BELL: u8 = 0x07;

/// Erase the last echoed character on the far end
const ERASE: &str = "\x08 \x08";

/// What one polled byte did to the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// Nothing pending on the terminal
    Idle,
    /// Byte appended and echoed
    Appended,
    /// Last byte removed and erased
    Erased,
    /// Byte ignored (bell, backspace on empty line)
    Ignored,
    /// Byte dropped, buffer full
    Dropped,
    /// Line terminator seen
    Completed,
}

/// Line reader
///
/// Owns the line buffer across polls. Raw serial input is not echoed by the
/// far end, so every accepted byte or edit is echoed here.
pub struct LineReader {
    line: LineBuffer,
    last_edit: Edit,
}

impl LineReader {
    /// Create reader with an empty buffer
    pub const fn new() -> Self {
        Self {
            line: LineBuffer::new(),
            last_edit: Edit::Idle,
        }
    }

    /// Consume at most one pending byte.
    ///
    /// Returns `Some(line)` when a terminator completes a line, `None`
    /// otherwise. Never blocks when nothing is pending.
    pub fn poll_input<T: Terminal + ?Sized>(&mut self, term: &mut T) -> Option<Line> {
        if !term.char_available() {
            self.last_edit = Edit::Idle;
            return None;
        }

        let byte = term.read_char();
        self.last_edit = match byte {
            DELETE | BACKSPACE => {
                if self.line.backspace() {
                    let _ = term.write_str(ERASE);
                    Edit::Erased
                } else {
                    Edit::Ignored
                }
            }

            BELL => Edit::Ignored,

            b'\r' | b'\n' => {
                let _ = term.write_str("\n");
                self.last_edit = Edit::Completed;
                return Some(self.line.take_line());
            }

            _ => {
                if self.line.push(byte) {
                    term.write_byte(byte);
                    Edit::Appended
                } else {
                    Edit::Dropped
                }
            }
        };

        None
    }

    /// Effect of the most recent poll
    pub fn last_edit(&self) -> Edit {
        self.last_edit
    }

    /// Bytes accepted so far on the current line
    pub fn pending(&self) -> &[u8] {
        self.line.as_bytes()
    }

    /// Discard the current partial line
    pub fn reset(&mut self) {
        self.line.clear();
        self.last_edit = Edit::Idle;
    }
}

impl Default for LineReader {
    fn default() -> Self {
        Self::new()
    }
}
