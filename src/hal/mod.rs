//! Hardware Abstraction Layer for the demo console.
//!
//! Thin collaborator traits. Console logic stays in `console`, HAL is just I/O.
//! `litex` drives the real CSRs, `sim` is an in-memory register file for
//! tests and the host build.

pub mod gpio;
pub mod litex;
pub mod sim;

pub use gpio::{GpioRegisters, LedRegister};
pub use litex::LitexBoard;
pub use sim::SimBoard;

use crate::config::Capabilities;

/// Byte-oriented serial terminal.
///
/// Output goes through [`core::fmt::Write`]; input is polled.
pub trait Terminal: core::fmt::Write {
    /// Check whether a byte is waiting, without blocking.
    fn char_available(&mut self) -> bool;

    /// Read one byte. Blocks until one arrives.
    fn read_char(&mut self) -> u8;

    /// Write one raw byte, unencoded.
    fn write_byte(&mut self, byte: u8);
}

/// Spinning delay.
pub trait Delay {
    /// Busy-wait for `ms` milliseconds. `0` returns immediately.
    fn busy_wait(&mut self, ms: u32);
}

/// Everything the console and the demos can reach on a board.
pub trait Board: Terminal + GpioRegisters + LedRegister + Delay {
    /// Peripherals present on this SoC.
    fn capabilities(&self) -> Capabilities;

    /// Trigger a SoC reset. Does not return on hardware.
    fn reboot(&mut self);

    /// Entry point of the hello demo built with the foreign (C++) runtime.
    fn foreign_hello(&mut self) {}

    /// Microseconds since boot, used to stamp log entries.
    fn uptime_us(&self) -> i64 {
        0
    }
}
