//! Line buffer for console input

use heapless::Vec;

/// Buffer size in bytes, including room for the terminator
pub const LINE_SIZE: usize = 64;

/// Longest line the buffer accepts
pub const MAX_LINE_LEN: usize = LINE_SIZE - 1;

/// Completed input line
pub type Line = heapless::String<LINE_SIZE>;

/// Line input buffer
///
/// Holds at most [`MAX_LINE_LEN`] bytes; pushes beyond that are dropped.
pub struct LineBuffer {
    buf: Vec<u8, LINE_SIZE>,
}

impl LineBuffer {
    /// Create empty buffer
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Push a byte, returns `false` if it was dropped
    pub fn push(&mut self, c: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.buf.push(c).is_ok()
    }

    /// Remove last byte, returns `false` if the buffer was empty
    pub fn backspace(&mut self) -> bool {
        self.buf.pop().is_some()
    }

    /// Clear buffer
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Move the contents out as a [`Line`], leaving the buffer empty
    ///
    /// Bytes that do not form valid UTF-8 end the line at the first bad byte.
    pub fn take_line(&mut self) -> Line {
        let mut line = Line::new();
        let _ = line.push_str(self.as_str());
        self.buf.clear();
        line
    }

    /// Get buffer as string slice (valid UTF-8 prefix)
    pub fn as_str(&self) -> &str {
        match core::str::from_utf8(&self.buf) {
            Ok(s) => s,
            Err(e) => core::str::from_utf8(&self.buf[..e.valid_up_to()]).unwrap_or(""),
        }
    }

    /// Get buffer length
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Check if no further byte would be accepted
    pub fn is_full(&self) -> bool {
        self.buf.len() >= MAX_LINE_LEN
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
