//! In-memory board for tests and the host build.
//!
//! Input is a scripted byte queue, output is captured raw, and the GPIO /
//! LED registers are plain fields. Busy-waits advance a simulated clock
//! instead of spinning.

use heapless::{Deque, Vec};

use super::{Board, Delay, GpioRegisters, LedRegister, Terminal};
use crate::config::Capabilities;

/// Scripted input capacity in bytes
pub const SIM_INPUT_SIZE: usize = 512;

/// Captured output capacity in bytes; later output is dropped
pub const SIM_OUTPUT_SIZE: usize = 16 * 1024;

/// Register write history depth
pub const SIM_HISTORY: usize = 128;

pub struct SimBoard {
    input: Deque<u8, SIM_INPUT_SIZE>,
    output: Vec<u8, SIM_OUTPUT_SIZE>,
    caps: Capabilities,

    gpio_out: u32,
    gpio_oe: u32,
    gpio_in: u32,
    out_history: Vec<u32, SIM_HISTORY>,
    oe_history: Vec<u32, SIM_HISTORY>,

    leds: u32,
    led_history: Vec<u32, SIM_HISTORY>,

    waited_ms: u64,
    reboots: u32,
    foreign_hellos: u32,
}

impl SimBoard {
    pub fn new(caps: Capabilities) -> Self {
        Self {
            input: Deque::new(),
            output: Vec::new(),
            caps,
            gpio_out: 0,
            gpio_oe: 0,
            gpio_in: 0,
            out_history: Vec::new(),
            oe_history: Vec::new(),
            leds: 0,
            led_history: Vec::new(),
            waited_ms: 0,
            reboots: 0,
            foreign_hellos: 0,
        }
    }

    /// Board with every optional peripheral present
    pub fn full() -> Self {
        Self::new(Capabilities::all())
    }

    /// Queue raw input bytes. Bytes past the queue capacity are dropped.
    pub fn feed_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            let _ = self.input.push_back(b);
        }
    }

    /// Queue typed text
    pub fn feed(&mut self, text: &str) {
        self.feed_bytes(text.as_bytes());
    }

    /// Bytes not consumed yet
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    /// Everything written so far, up to the first invalid UTF-8 sequence
    pub fn output(&self) -> &str {
        match core::str::from_utf8(&self.output) {
            Ok(s) => s,
            Err(e) => core::str::from_utf8(&self.output[..e.valid_up_to()]).unwrap_or(""),
        }
    }

    /// Everything written so far, byte for byte
    pub fn output_bytes(&self) -> &[u8] {
        &self.output
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Drive the GPIO_IN pins
    pub fn set_inputs(&mut self, value: u32) {
        self.gpio_in = value;
    }

    /// GPIO_OUT values in write order
    pub fn out_history(&self) -> &[u32] {
        &self.out_history
    }

    /// GPIO_OE values in write order
    pub fn oe_history(&self) -> &[u32] {
        &self.oe_history
    }

    pub fn leds(&self) -> u32 {
        self.leds
    }

    /// LED values in write order
    pub fn led_history(&self) -> &[u32] {
        &self.led_history
    }

    /// Total simulated busy-wait time
    pub fn waited_ms(&self) -> u64 {
        self.waited_ms
    }

    pub fn reboots(&self) -> u32 {
        self.reboots
    }

    pub fn foreign_hellos(&self) -> u32 {
        self.foreign_hellos
    }
}

impl Default for SimBoard {
    fn default() -> Self {
        Self::full()
    }
}

impl core::fmt::Write for SimBoard {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
        Ok(())
    }
}

impl Terminal for SimBoard {
    fn char_available(&mut self) -> bool {
        !self.input.is_empty()
    }

    /// Returns 0 when the queue is empty instead of blocking.
    fn read_char(&mut self) -> u8 {
        self.input.pop_front().unwrap_or(0)
    }

    fn write_byte(&mut self, byte: u8) {
        let _ = self.output.push(byte);
    }
}

impl GpioRegisters for SimBoard {
    fn out_read(&self) -> u32 {
        self.gpio_out
    }

    fn out_write(&mut self, value: u32) {
        self.gpio_out = value;
        let _ = self.out_history.push(value);
    }

    fn oe_read(&self) -> u32 {
        self.gpio_oe
    }

    fn oe_write(&mut self, value: u32) {
        self.gpio_oe = value;
        let _ = self.oe_history.push(value);
    }

    fn in_read(&self) -> u32 {
        self.gpio_in
    }
}

impl LedRegister for SimBoard {
    fn leds_write(&mut self, value: u32) {
        self.leds = value;
        let _ = self.led_history.push(value);
    }
}

impl Delay for SimBoard {
    fn busy_wait(&mut self, ms: u32) {
        self.waited_ms += u64::from(ms);
    }
}

impl Board for SimBoard {
    fn capabilities(&self) -> Capabilities {
        self.caps
    }

    fn reboot(&mut self) {
        self.reboots += 1;
    }

    fn foreign_hello(&mut self) {
        self.foreign_hellos += 1;
        let _ = core::fmt::Write::write_str(self, "C++: Hello, world!\n");
    }

    fn uptime_us(&self) -> i64 {
        self.waited_ms as i64 * 1000
    }
}
