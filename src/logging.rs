//! Console event log.
//!
//! ```text
//! Console                LogStream            Terminal
//! ───────                ─────────            ────────
//!
//! log_event!() ───────▶ [L0][L1][L2] ──────▶ "[us] LEVEL: msg"
//! during dispatch         fixed ring          after dispatch,
//!                                             if filter allows
//! ```
//!
//! Single owner: the console holds the stream, so no atomics are needed
//! (the soft CPU may lack the A extension). Messages are dropped when the
//! ring is full.

use core::fmt::Write;

/// Maximum message length.
pub const MAX_MSG_LEN: usize = 80;

/// Log buffer size (number of entries).
pub const LOG_BUFFER_SIZE: usize = 16;

/// Log level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl LogLevel {
    /// Convert to string for output.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

/// Most verbose level let through to the terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelFilter {
    Off,
    Level(LogLevel),
}

impl LevelFilter {
    /// Check whether `level` passes the filter.
    pub fn enabled(self, level: LogLevel) -> bool {
        match self {
            LevelFilter::Off => false,
            LevelFilter::Level(max) => level <= max,
        }
    }

    /// Parse a console argument (`off`, `error`, ... `trace`).
    pub fn parse(name: &str) -> Option<Self> {
        let level = match name {
            "off" => return Some(LevelFilter::Off),
            "error" => LogLevel::Error,
            "warn" => LogLevel::Warn,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => return None,
        };
        Some(LevelFilter::Level(level))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LevelFilter::Off => "off",
            LevelFilter::Level(LogLevel::Error) => "error",
            LevelFilter::Level(LogLevel::Warn) => "warn",
            LevelFilter::Level(LogLevel::Info) => "info",
            LevelFilter::Level(LogLevel::Debug) => "debug",
            LevelFilter::Level(LogLevel::Trace) => "trace",
        }
    }
}

/// A single log entry.
#[derive(Clone, Copy)]
pub struct LogEntry {
    /// Timestamp in microseconds.
    pub timestamp_us: i64,
    /// Log level.
    pub level: LogLevel,
    /// Message length.
    pub len: u8,
    /// Message bytes (not null-terminated).
    pub msg: [u8; MAX_MSG_LEN],
}

impl LogEntry {
    const EMPTY: Self = Self {
        timestamp_us: 0,
        level: LogLevel::Info,
        len: 0,
        msg: [0; MAX_MSG_LEN],
    };

    /// Message text (truncated messages may end mid-character).
    pub fn message(&self) -> &str {
        let bytes = &self.msg[..self.len as usize];
        match core::str::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => core::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or(""),
        }
    }
}

impl Default for LogEntry {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl core::fmt::Display for LogEntry {
    /// Format: `[timestamp_us] LEVEL: message`
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}] {}: {}", self.timestamp_us, self.level.as_str(), self.message())
    }
}

/// Fixed ring of log entries.
pub struct LogStream<const N: usize = LOG_BUFFER_SIZE> {
    entries: [LogEntry; N],
    write_idx: u32,
    read_idx: u32,
    dropped: u32,
}

impl<const N: usize> LogStream<N> {
    const MASK: usize = N - 1;

    /// Create a new empty log stream.
    pub const fn new() -> Self {
        assert!(N.is_power_of_two(), "Log buffer size must be power of 2");

        Self {
            entries: [LogEntry::EMPTY; N],
            write_idx: 0,
            read_idx: 0,
            dropped: 0,
        }
    }

    /// Push a log entry.
    ///
    /// Returns `true` if message was queued, `false` if dropped (ring full).
    pub fn push(&mut self, timestamp_us: i64, level: LogLevel, msg: &[u8]) -> bool {
        if self.write_idx.wrapping_sub(self.read_idx) >= N as u32 {
            self.dropped = self.dropped.wrapping_add(1);
            return false;
        }

        let entry = &mut self.entries[(self.write_idx as usize) & Self::MASK];
        entry.timestamp_us = timestamp_us;
        entry.level = level;
        entry.len = msg.len().min(MAX_MSG_LEN) as u8;
        entry.msg[..entry.len as usize].copy_from_slice(&msg[..entry.len as usize]);

        self.write_idx = self.write_idx.wrapping_add(1);
        true
    }

    /// Drain next log entry.
    ///
    /// Returns `None` if no entries available.
    pub fn drain(&mut self) -> Option<LogEntry> {
        if self.read_idx == self.write_idx {
            return None;
        }

        let entry = self.entries[(self.read_idx as usize) & Self::MASK];
        self.read_idx = self.read_idx.wrapping_add(1);
        Some(entry)
    }

    /// Get count of dropped messages.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Reset dropped counter (e.g., after reporting).
    pub fn reset_dropped(&mut self) {
        self.dropped = 0;
    }

    /// Check if there are entries to drain.
    pub fn has_entries(&self) -> bool {
        self.read_idx != self.write_idx
    }

    /// Get number of entries waiting to be drained.
    pub fn pending(&self) -> u32 {
        self.write_idx.wrapping_sub(self.read_idx)
    }
}

impl<const N: usize> Default for LogStream<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a message into a buffer.
///
/// Returns the number of bytes written. Output past the end is cut off.
#[inline]
pub fn format_to_buffer(buf: &mut [u8], args: core::fmt::Arguments<'_>) -> usize {
    struct BufWriter<'a> {
        buf: &'a mut [u8],
        pos: usize,
    }

    impl<'a> Write for BufWriter<'a> {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let bytes = s.as_bytes();
            let remaining = self.buf.len() - self.pos;
            let to_write = bytes.len().min(remaining);
            self.buf[self.pos..self.pos + to_write].copy_from_slice(&bytes[..to_write]);
            self.pos += to_write;
            Ok(())
        }
    }

    let mut writer = BufWriter { buf, pos: 0 };
    let _ = core::fmt::write(&mut writer, args);
    writer.pos
}

/// Log macro.
///
/// # Example
///
/// ```ignore
/// log_event!(LogLevel::Info, self.log, board.uptime_us(), "mode {:?}", mode);
/// ```
#[macro_export]
macro_rules! log_event {
    ($level:expr, $stream:expr, $timestamp:expr, $($arg:tt)*) => {{
        let mut buf = [0u8; $crate::logging::MAX_MSG_LEN];
        let len = $crate::logging::format_to_buffer(&mut buf, format_args!($($arg)*));
        $stream.push($timestamp, $level, &buf[..len]);
    }};
}

/// Info log.
#[macro_export]
macro_rules! log_info {
    ($stream:expr, $timestamp:expr, $($arg:tt)*) => {
        $crate::log_event!($crate::logging::LogLevel::Info, $stream, $timestamp, $($arg)*)
    };
}

/// Warning log.
#[macro_export]
macro_rules! log_warn {
    ($stream:expr, $timestamp:expr, $($arg:tt)*) => {
        $crate::log_event!($crate::logging::LogLevel::Warn, $stream, $timestamp, $($arg)*)
    };
}

/// Debug log.
#[macro_export]
macro_rules! log_debug {
    ($stream:expr, $timestamp:expr, $($arg:tt)*) => {
        $crate::log_event!($crate::logging::LogLevel::Debug, $stream, $timestamp, $($arg)*)
    };
}

/// Trace log (maximum verbosity).
#[macro_export]
macro_rules! log_trace {
    ($stream:expr, $timestamp:expr, $($arg:tt)*) => {
        $crate::log_event!($crate::logging::LogLevel::Trace, $stream, $timestamp, $($arg)*)
    };
}

/// Write every pending entry that passes `filter` to `out`.
///
/// Entries that fail the filter are discarded. A drop count is reported
/// once and then reset.
pub fn drain_to<W: Write + ?Sized, const N: usize>(
    stream: &mut LogStream<N>,
    filter: LevelFilter,
    out: &mut W,
) {
    while let Some(entry) = stream.drain() {
        if filter.enabled(entry.level) {
            let _ = writeln!(out, "{}", entry);
        }
    }

    let dropped = stream.dropped();
    if dropped > 0 {
        if filter.enabled(LogLevel::Warn) {
            let _ = writeln!(out, "({} log messages dropped)", dropped);
        }
        stream.reset_dropped();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_stream_basic() {
        let mut stream = LogStream::<16>::new();

        assert!(stream.push(1000, LogLevel::Info, b"test message"));
        assert!(stream.has_entries());
        assert_eq!(stream.pending(), 1);

        let entry = stream.drain().unwrap();
        assert_eq!(entry.timestamp_us, 1000);
        assert_eq!(entry.level, LogLevel::Info);
        assert_eq!(entry.message(), "test message");

        assert!(!stream.has_entries());
    }

    #[test]
    fn test_log_stream_full() {
        let mut stream = LogStream::<4>::new();

        // Fill the buffer
        assert!(stream.push(1, LogLevel::Info, b"1"));
        assert!(stream.push(2, LogLevel::Info, b"2"));
        assert!(stream.push(3, LogLevel::Info, b"3"));
        assert!(stream.push(4, LogLevel::Info, b"4"));

        // Should drop
        assert!(!stream.push(5, LogLevel::Info, b"5"));
        assert_eq!(stream.dropped(), 1);

        // Drain one, should be able to push again
        stream.drain();
        assert!(stream.push(6, LogLevel::Info, b"6"));
    }

    #[test]
    fn test_format_to_buffer() {
        let mut buf = [0u8; 32];
        let len = format_to_buffer(&mut buf, format_args!("Hello {}", 42));
        assert_eq!(&buf[..len], b"Hello 42");
    }

    #[test]
    fn test_format_to_buffer_truncates() {
        let mut buf = [0u8; 4];
        let len = format_to_buffer(&mut buf, format_args!("toggle {}", 7));
        assert_eq!(&buf[..len], b"togg");
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Trace);
    }

    #[test]
    fn test_level_filter() {
        let warn = LevelFilter::parse("warn").unwrap();
        assert!(warn.enabled(LogLevel::Error));
        assert!(warn.enabled(LogLevel::Warn));
        assert!(!warn.enabled(LogLevel::Info));
        assert!(!LevelFilter::Off.enabled(LogLevel::Error));
        assert_eq!(LevelFilter::parse("loud"), None);
        assert_eq!(LevelFilter::parse("trace").unwrap().as_str(), "trace");
    }

    #[test]
    fn test_macro_and_drain() {
        let mut stream = LogStream::<8>::new();
        log_warn!(stream, 12, "unknown command '{}'", "frob");
        log_debug!(stream, 13, "dispatch {}", "help");

        let mut out = String::new();
        drain_to(&mut stream, LevelFilter::Level(LogLevel::Warn), &mut out);

        assert_eq!(out, "[12] WARN: unknown command 'frob'\n");
        assert!(!stream.has_entries());
    }

    #[test]
    fn test_drain_reports_drops() {
        let mut stream = LogStream::<2>::new();
        log_info!(stream, 1, "a");
        log_info!(stream, 2, "b");
        log_info!(stream, 3, "c");

        let mut out = String::new();
        drain_to(&mut stream, LevelFilter::Level(LogLevel::Info), &mut out);

        assert!(out.contains("[1] INFO: a"));
        assert!(out.contains("[2] INFO: b"));
        assert!(out.contains("(1 log messages dropped)"));
        assert_eq!(stream.dropped(), 0);
    }
}
